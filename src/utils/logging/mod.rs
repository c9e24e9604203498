//! Logging utilities
//!
//! This module provides logger setup and standardized log lines for
//! operations that are skipped rather than aborted.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{init_logging, log_operation_start, log_skipped};
