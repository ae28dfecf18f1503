use async_trait::async_trait;

use super::traits::{FunctionHandler, HandlerError};
use super::types::{Console, Invocation, Reply};

/// Starter handler: greets and repeats the input back
#[derive(Debug, Clone, Default)]
pub struct EchoHandler;

impl EchoHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FunctionHandler for EchoHandler {
    async fn handle(
        &self,
        invocation: Invocation,
        _console: &mut Console,
    ) -> Result<Reply, HandlerError> {
        let said = String::from_utf8_lossy(&invocation.body);
        Ok(Reply::Text(format!("Hello, Rust. You said: {}", said)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_returns_greeting() {
        let mut console = Console::new();
        let reply = EchoHandler::new()
            .handle(Invocation::new("Hello World"), &mut console)
            .await
            .unwrap();

        assert_eq!(
            reply,
            Reply::Text("Hello, Rust. You said: Hello World".to_string())
        );
        assert!(console.is_empty());
    }
}
