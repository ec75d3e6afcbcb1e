//! Observability module
//!
//! Structured logging to stderr for `specdex` commands.

pub mod logging;

pub use logging::{LogFormat, init_logging};
