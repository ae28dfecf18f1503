use async_trait::async_trait;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use tracing::debug;

use super::traits::{FunctionHandler, HandlerError};
use super::types::{Console, Invocation, Reply};

type HmacSha1 = Hmac<Sha1>;

pub const SIGNATURE_HEADER: &str = "X-Hub-Signature";
pub const SECRET_ENV: &str = "secret_key";
pub const SIGNATURE_PREFIX: &str = "sha1=";

pub const VERIFIED_MESSAGE: &str = "The message was from your GitHub account.";
pub const REJECTED_MESSAGE: &str =
    "The message was not from your GitHub account, or you don't share the same secret.";

/// Checks a GitHub webhook body against its `X-Hub-Signature` HMAC-SHA1
///
/// An unset `secret_key` verifies with an empty key.
#[derive(Debug, Clone, Default)]
pub struct GithubHmacHandler;

impl GithubHmacHandler {
    pub fn new() -> Self {
        Self
    }
}

fn keyed(message: &[u8], key: &[u8]) -> Option<HmacSha1> {
    let mut mac = HmacSha1::new_from_slice(key).ok()?;
    mac.update(message);
    Some(mac)
}

/// Constant-time HMAC-SHA1 check of `message` against `expected`
pub fn check_mac(message: &[u8], expected: &[u8], key: &[u8]) -> bool {
    keyed(message, key).is_some_and(|mac| mac.verify_slice(expected).is_ok())
}

/// Hex HMAC-SHA1 signature in the `sha1=<hex>` form GitHub sends
pub fn sign(message: &[u8], key: &[u8]) -> Option<String> {
    let mac = keyed(message, key)?;
    Some(format!(
        "{}{}",
        SIGNATURE_PREFIX,
        hex::encode(mac.finalize().into_bytes())
    ))
}

#[async_trait]
impl FunctionHandler for GithubHmacHandler {
    async fn handle(
        &self,
        invocation: Invocation,
        _console: &mut Console,
    ) -> Result<Reply, HandlerError> {
        let signature = invocation
            .header(SIGNATURE_HEADER)
            .ok_or_else(|| HandlerError::MissingEnv(format!("Http_{}", SIGNATURE_HEADER)))?;

        let expected_hex = signature.strip_prefix(SIGNATURE_PREFIX).ok_or_else(|| {
            HandlerError::InvalidInput(format!(
                "signature must start with '{}': {}",
                SIGNATURE_PREFIX, signature
            ))
        })?;

        // Undecodable hex can never match
        let expected = hex::decode(expected_hex).unwrap_or_default();
        let secret = invocation.var(SECRET_ENV).unwrap_or_default();

        let verified = check_mac(&invocation.body, &expected, secret.as_bytes());
        debug!(expected = expected_hex, verified, "Checked webhook signature");

        let message = if verified {
            VERIFIED_MESSAGE
        } else {
            REJECTED_MESSAGE
        };
        Ok(Reply::Text(message.to_string()))
    }
}
