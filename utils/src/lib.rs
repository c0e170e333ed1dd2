//! Shared utilities for the TRON wallet core.

pub mod logging;

pub use logging::{init_logging, LogFormat, LoggingError};
