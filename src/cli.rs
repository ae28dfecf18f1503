use clap::{Parser, Subcommand};
use fnbox::adapter::AdapterStyle;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fnbox")]
#[command(about = "Stdin bootstrap for function handlers", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to $FNBOX_CONFIG or config/fnbox.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read stdin to end and pass it to a handler once
    Run(RunArgs),
    /// List the registered handler names
    Handlers,
    /// Print the effective configuration as TOML
    Config,
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Handler to invoke (overrides function.handler)
    #[arg(long)]
    pub handler: Option<String>,

    /// Failure reporting style (overrides function.style)
    #[arg(long, value_enum)]
    pub style: Option<AdapterStyle>,
}
