//! Function handlers
//!
//! A handler receives the whole stdin buffer once and decides what to do
//! with it. The bundled ones are samples, not production logic.
//!
//! ## Key Components
//!
//! - [`FunctionHandler`] - Trait every handler implements
//! - [`HandlerRegistry`] - Name to handler lookup
//! - [`UrlPingHandler`] - Pings the URL given on stdin (three variants)
//! - [`EchoHandler`] - Greets and repeats the input
//! - [`GithubHmacHandler`] - Verifies GitHub webhook signatures
//!
//! ## Example
//!
//! ```rust,ignore
//! use fnbox::handlers::{Console, HandlerRegistry, Invocation};
//!
//! let registry = HandlerRegistry::with_defaults(&config.http)?;
//! let handler = registry.get("url-ping")?;
//!
//! let mut console = Console::new();
//! handler.handle(Invocation::new("http://example.com"), &mut console).await?;
//! ```

mod echo;
pub mod github_hmac;
mod registry;
mod traits;
mod types;
pub mod url_ping;

pub use echo::EchoHandler;
pub use github_hmac::GithubHmacHandler;
pub use registry::{HandlerRegistry, RegistryError};
pub use traits::{FunctionHandler, HandlerError};
pub use types::{Console, EnvMap, HEADER_ENV_PREFIX, Invocation, Reply};
pub use url_ping::{PingVariant, UrlPingHandler};
