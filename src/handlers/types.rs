use bytes::Bytes;
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

use super::traits::HandlerError;

pub type EnvMap = BTreeMap<String, String>;

/// Prefix the watchdog uses to expose request headers as environment variables
pub const HEADER_ENV_PREFIX: &str = "Http_";

/// One function invocation: the full stdin buffer plus the process environment
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Used for log correlation only
    pub id: Uuid,
    pub body: Bytes,
    pub env: EnvMap,
}

impl Invocation {
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self {
            id: Uuid::now_v7(),
            body: body.into(),
            env: EnvMap::new(),
        }
    }

    pub fn with_env(mut self, env: EnvMap) -> Self {
        self.env = env;
        self
    }

    /// Body as UTF-8 text
    pub fn text(&self) -> Result<&str, HandlerError> {
        std::str::from_utf8(&self.body)
            .map_err(|e| HandlerError::InvalidInput(format!("input is not valid UTF-8: {}", e)))
    }

    pub fn var(&self, name: &str) -> Option<&str> {
        self.env.get(name).map(String::as_str)
    }

    /// Request header forwarded as `Http_<name>`
    pub fn header(&self, name: &str) -> Option<&str> {
        self.var(&format!("{}{}", HEADER_ENV_PREFIX, name))
    }
}

/// Value a handler hands back to the adapter
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Empty,
    Text(String),
    Json(Value),
}

impl Reply {
    /// Render as a single output line, `None` when there is nothing to print
    pub fn render(&self) -> Result<Option<String>, serde_json::Error> {
        match self {
            Reply::Empty => Ok(None),
            Reply::Text(text) => Ok(Some(text.clone())),
            Reply::Json(Value::String(s)) => Ok(Some(s.clone())),
            Reply::Json(value) => serde_json::to_string(value).map(Some),
        }
    }
}

/// Lines printed by a handler, in order
#[derive(Debug, Clone, Default)]
pub struct Console {
    lines: Vec<String>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
