//! Stdin bootstrap
//!
//! Reads all of standard input, invokes one handler exactly once with it and
//! writes whatever the handler printed or returned to standard output.

mod input;

pub use input::read_input;

use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;
use tokio::io::AsyncRead;
use tracing::{Instrument, info, info_span};

use crate::handlers::{Console, EnvMap, FunctionHandler, HandlerError, Invocation};

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
    #[error("failed to encode reply: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Handler(#[from] HandlerError),
}

/// How a failing handler is surfaced
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AdapterStyle {
    /// No error handling around the call; failures reach the process boundary
    #[default]
    Passthrough,
    /// Failures are written to stderr and the run still succeeds
    Callback,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Adapter {
    style: AdapterStyle,
}

impl Adapter {
    pub fn new(style: AdapterStyle) -> Self {
        Self { style }
    }

    /// Read `input` to end-of-stream and hand it to `handler` once
    pub async fn run<R, O, E>(
        &self,
        handler: &dyn FunctionHandler,
        input: R,
        env: EnvMap,
        stdout: &mut O,
        stderr: &mut E,
    ) -> Result<(), AdapterError>
    where
        R: AsyncRead + Unpin,
        O: Write,
        E: Write,
    {
        let body = read_input(input).await.map_err(AdapterError::Read)?;
        let invocation = Invocation::new(body).with_env(env);

        let span = info_span!("invocation", id = %invocation.id, bytes = invocation.body.len());
        let mut console = Console::new();
        let result = handler
            .handle(invocation, &mut console)
            .instrument(span)
            .await;

        // Lines printed before a failure still reach stdout
        for line in console.lines() {
            writeln!(stdout, "{}", line).map_err(AdapterError::Write)?;
        }

        let outcome = match result {
            Ok(reply) => match reply.render()? {
                Some(line) => writeln!(stdout, "{}", line).map_err(AdapterError::Write),
                None => Ok(()),
            },
            Err(e) => match self.style {
                AdapterStyle::Passthrough => Err(e.into()),
                AdapterStyle::Callback => {
                    writeln!(stderr, "{}", e).map_err(AdapterError::Write)
                }
            },
        };

        stdout.flush().map_err(AdapterError::Write)?;
        info!(style = ?self.style, ok = outcome.is_ok(), "Invocation finished");
        outcome
    }
}
