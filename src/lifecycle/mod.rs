//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load .env → Load config → Validate → Bind listener → Serve
//!
//! Shutdown (signals.rs):
//!     SIGTERM/SIGINT → Stop accepting → Drain in-flight requests → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, nothing is served
//! - No shutdown deadline; requests carry no timeout either

pub mod signals;

pub use signals::shutdown_signal;
