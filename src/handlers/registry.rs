use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use super::echo::EchoHandler;
use super::github_hmac::GithubHmacHandler;
use super::traits::FunctionHandler;
use super::url_ping::{PingVariant, UrlPingHandler};
use crate::config::HttpConfig;
use crate::http::PingError;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("handler not found: {name} (available: {available})")]
    NotFound { name: String, available: String },
    #[error("failed to construct handler '{name}': {source}")]
    Construction {
        name: String,
        #[source]
        source: PingError,
    },
}

/// Registry mapping handler names to handler instances
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: BTreeMap<String, Arc<dyn FunctionHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, handler: Arc<dyn FunctionHandler>) {
        self.handlers.insert(name.into(), handler);
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn FunctionHandler>, RegistryError> {
        self.handlers
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
                available: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Registry with the bundled sample handlers
    pub fn with_defaults(http: &HttpConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::new();

        for (name, variant) in [
            ("url-ping", PingVariant::Trimmed),
            ("url-ping-guarded", PingVariant::Guarded),
            ("url-ping-plain", PingVariant::Plain),
        ] {
            let handler = UrlPingHandler::new(variant, http).map_err(|source| {
                RegistryError::Construction {
                    name: name.to_string(),
                    source,
                }
            })?;
            registry.register(name, Arc::new(handler));
        }

        registry.register("echo", Arc::new(EchoHandler::new()));
        registry.register("github-hmac", Arc::new(GithubHmacHandler::new()));

        Ok(registry)
    }
}
