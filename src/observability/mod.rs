//! Observability module
//!
//! Logging setup for `modeldocs` runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
