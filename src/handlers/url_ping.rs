use async_trait::async_trait;
use tracing::{debug, warn};

use super::traits::{FunctionHandler, HandlerError};
use super::types::{Console, Invocation, Reply};
use crate::config::HttpConfig;
use crate::http::{PingClient, PingError, PingSettings};

pub const URL_MARKER: &str = "http";
pub const FALLBACK_MESSAGE: &str = "Give me a URL and I'll ping it for you.";
pub const TIMEOUT_MESSAGE: &str = "Timed out trying to reach URL.";

/// The three shipped flavours of the URL-ping sample
///
/// They differ on purpose: `Plain` has no timeout and lets request failures
/// escape, `Guarded` bounds the request and swallows failures but keeps the
/// input verbatim (trailing newline included), `Trimmed` additionally strips
/// trailing whitespace first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingVariant {
    Plain,
    Guarded,
    Trimmed,
}

impl PingVariant {
    pub fn is_bounded(self) -> bool {
        !matches!(self, PingVariant::Plain)
    }

    pub fn swallows_failures(self) -> bool {
        !matches!(self, PingVariant::Plain)
    }

    pub fn trims_input(self) -> bool {
        matches!(self, PingVariant::Trimmed)
    }
}

/// Pings the URL found in the input and prints `<url> => <status>`
#[derive(Debug, Clone)]
pub struct UrlPingHandler {
    variant: PingVariant,
    client: PingClient,
}

impl UrlPingHandler {
    pub fn new(variant: PingVariant, http: &HttpConfig) -> Result<Self, PingError> {
        let settings = if variant.is_bounded() {
            PingSettings::bounded(http)
        } else {
            PingSettings::unbounded(http)
        };
        Ok(Self::with_client(variant, PingClient::new(settings)?))
    }

    pub fn with_client(variant: PingVariant, client: PingClient) -> Self {
        Self { variant, client }
    }

    async fn print_url(&self, url: &str, console: &mut Console) -> Result<(), HandlerError> {
        match self.client.status(url).await {
            Ok(status) => {
                console.println(format!("{} => {}", url, status));
                Ok(())
            }
            Err(e) if self.variant.swallows_failures() => {
                warn!(url, error = %e, "Ping failed");
                console.println(TIMEOUT_MESSAGE);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl FunctionHandler for UrlPingHandler {
    async fn handle(
        &self,
        invocation: Invocation,
        console: &mut Console,
    ) -> Result<Reply, HandlerError> {
        let text = invocation.text()?;
        let url = if self.variant.trims_input() {
            text.trim_end()
        } else {
            text
        };

        debug!(input = url, variant = ?self.variant, "Handle this");

        if !url.contains(URL_MARKER) {
            console.println(FALLBACK_MESSAGE);
            return Ok(Reply::Empty);
        }

        self.print_url(url, console).await?;
        Ok(Reply::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler(variant: PingVariant) -> UrlPingHandler {
        let http = HttpConfig {
            system_proxy: false,
            ..HttpConfig::default()
        };
        UrlPingHandler::new(variant, &http).unwrap()
    }

    #[test]
    fn test_variant_properties() {
        assert!(!PingVariant::Plain.is_bounded());
        assert!(!PingVariant::Plain.swallows_failures());
        assert!(!PingVariant::Plain.trims_input());

        assert!(PingVariant::Guarded.is_bounded());
        assert!(PingVariant::Guarded.swallows_failures());
        assert!(!PingVariant::Guarded.trims_input());

        assert!(PingVariant::Trimmed.is_bounded());
        assert!(PingVariant::Trimmed.swallows_failures());
        assert!(PingVariant::Trimmed.trims_input());
    }

    #[test]
    fn test_client_timeout_follows_variant() {
        assert!(handler(PingVariant::Plain).client.settings().timeout.is_none());
        assert!(handler(PingVariant::Guarded).client.settings().timeout.is_some());
        assert!(handler(PingVariant::Trimmed).client.settings().timeout.is_some());
    }

    #[tokio::test]
    async fn test_non_url_prints_fallback_only() {
        for variant in [PingVariant::Plain, PingVariant::Guarded, PingVariant::Trimmed] {
            let mut console = Console::new();
            let reply = handler(variant)
                .handle(Invocation::new("hello"), &mut console)
                .await
                .unwrap();

            assert_eq!(reply, Reply::Empty);
            assert_eq!(console.lines(), [FALLBACK_MESSAGE]);
        }
    }

    #[tokio::test]
    async fn test_marker_is_case_sensitive() {
        let mut console = Console::new();
        handler(PingVariant::Trimmed)
            .handle(Invocation::new("HTTP://EXAMPLE.COM"), &mut console)
            .await
            .unwrap();
        assert_eq!(console.lines(), [FALLBACK_MESSAGE]);
    }

    #[tokio::test]
    async fn test_guarded_swallows_malformed_url() {
        let mut console = Console::new();
        let result = handler(PingVariant::Guarded)
            .handle(Invocation::new("no scheme but http in it"), &mut console)
            .await;

        assert!(result.is_ok());
        assert_eq!(console.lines(), [TIMEOUT_MESSAGE]);
    }

    #[tokio::test]
    async fn test_plain_propagates_malformed_url() {
        let mut console = Console::new();
        let result = handler(PingVariant::Plain)
            .handle(Invocation::new("no scheme but http in it"), &mut console)
            .await;

        assert!(matches!(
            result,
            Err(HandlerError::Request(PingError::InvalidUrl(_)))
        ));
        assert!(console.is_empty());
    }
}
