use crate::adapter::AdapterStyle;
use crate::humanize::HumanDuration;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub function: FunctionConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// File the settings were read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Which handler the bootstrap runs and how it reports failures
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FunctionConfig {
    /// Registry name of the handler
    #[serde(default = "default_handler")]
    pub handler: String,
    #[serde(default)]
    pub style: AdapterStyle,
}

impl Default for FunctionConfig {
    fn default() -> Self {
        Self {
            handler: default_handler(),
            style: AdapterStyle::default(),
        }
    }
}

fn default_handler() -> String {
    "url-ping".to_string()
}

/// Outbound HTTP settings for the ping handlers
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Request timeout for the bounded ping variants
    #[serde(default = "default_timeout")]
    pub timeout: HumanDuration,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Honour HTTP_PROXY / HTTPS_PROXY / NO_PROXY
    #[serde(default = "default_system_proxy")]
    pub system_proxy: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            system_proxy: default_system_proxy(),
        }
    }
}

fn default_timeout() -> HumanDuration {
    HumanDuration::from_secs(1)
}

fn default_user_agent() -> String {
    format!("fnbox/{}", env!("CARGO_PKG_VERSION"))
}

fn default_system_proxy() -> bool {
    true
}

/// Log output settings (always written to stderr)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            ansi: false,
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}
