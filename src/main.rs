mod bootstrap;
mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use fnbox::config::Config;
use fnbox::handlers::HandlerRegistry;
use fnbox::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Handlers read secrets and forwarded headers from the process environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    observability::init(&config.logging);

    match &config.source {
        Some(path) => tracing::info!("Loaded configuration from: {}", path.display()),
        None => tracing::debug!("No configuration file, using defaults and environment overrides"),
    }

    match cli.command {
        Commands::Run(args) => bootstrap::run(config, args).await?,
        Commands::Handlers => {
            let registry = HandlerRegistry::with_defaults(&config.http)?;
            for name in registry.names() {
                println!("{}", name);
            }
        }
        Commands::Config => print!("{}", config.to_toml()?),
    }

    Ok(())
}
