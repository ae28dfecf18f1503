use fnbox::adapter::{Adapter, AdapterError};
use fnbox::config::Config;
use fnbox::handlers::{EnvMap, HandlerRegistry, RegistryError};
use thiserror::Error;
use tracing::info;

use crate::cli::RunArgs;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

/// Resolve the handler and run it against this process's stdin
pub async fn run(config: Config, args: RunArgs) -> Result<(), BootstrapError> {
    let name = args.handler.unwrap_or(config.function.handler);
    let style = args.style.unwrap_or(config.function.style);

    let registry = HandlerRegistry::with_defaults(&config.http)?;
    let handler = registry.get(&name)?;

    info!(handler = %name, ?style, "Starting invocation");

    // Non-UTF-8 variables cannot carry headers or secrets; skip them
    let env: EnvMap = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();

    Adapter::new(style)
        .run(handler.as_ref(), tokio::io::stdin(), env, &mut stdout, &mut stderr)
        .await?;

    Ok(())
}
