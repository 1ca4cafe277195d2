//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (optional, dotenvy)
//!     → process environment
//!     → loader.rs (read & parse variables)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc to all handlers
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and never reloaded
//! - The upstream base URL is a constant, not an input
//! - A missing API key is not a load error; handlers reject at request time

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_dotenv, ConfigError};
pub use schema::{RelayConfig, DEFAULT_PORT, UPSTREAM_BASE_URL};
pub use validation::{validate_config, ValidationError};
