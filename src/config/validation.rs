use super::models::Config;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("function.handler must not be empty")]
    EmptyHandlerName,

    #[error("http.timeout must be greater than zero")]
    ZeroTimeout,

    #[error("http.user_agent must not be empty")]
    EmptyUserAgent,

    #[error("Invalid logging.level '{level}': {reason}")]
    InvalidLogLevel { level: String, reason: String },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_function(config)?;
    validate_http(config)?;
    validate_logging(config)?;
    Ok(())
}

fn validate_function(config: &Config) -> Result<(), ValidationError> {
    if config.function.handler.trim().is_empty() {
        return Err(ValidationError::EmptyHandlerName);
    }
    Ok(())
}

fn validate_http(config: &Config) -> Result<(), ValidationError> {
    if config.http.timeout.is_zero() {
        return Err(ValidationError::ZeroTimeout);
    }
    if config.http.user_agent.trim().is_empty() {
        return Err(ValidationError::EmptyUserAgent);
    }
    Ok(())
}

fn validate_logging(config: &Config) -> Result<(), ValidationError> {
    EnvFilter::try_new(&config.logging.level).map_err(|e| ValidationError::InvalidLogLevel {
        level: config.logging.level.clone(),
        reason: e.to_string(),
    })?;
    Ok(())
}
