use async_trait::async_trait;
use thiserror::Error;

use super::types::{Console, Invocation, Reply};
use crate::http::PingError;

/// Handler errors
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("request failed: {0}")]
    Request(#[from] PingError),
    #[error("missing environment variable: {0}")]
    MissingEnv(String),
}

/// A function body invoked once per process run
///
/// Handlers print through the [`Console`] and may also return a [`Reply`];
/// the adapter writes both to stdout, printed lines first.
#[async_trait]
pub trait FunctionHandler: Send + Sync {
    async fn handle(
        &self,
        invocation: Invocation,
        console: &mut Console,
    ) -> Result<Reply, HandlerError>;
}
