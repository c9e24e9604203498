//! Logging utilities
//!
//! This module provides standardized logging functions for operations.

use crate::error::SchoolError;

/// Initialise `env_logger`, honouring `RUST_LOG` and falling back to
/// `default_filter`. Calling it twice is harmless.
pub fn init_logging(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()
        .ok();
}

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `subject` - What the operation works on
pub fn log_operation_start(operation: &str, subject: &str) {
    log::info!("{operation} {subject}");
}

/// Log an operation that was skipped because of a recoverable error
///
/// Failed lookups are expected in hand-written scenarios and are logged as
/// warnings; anything else is logged as an error.
pub fn log_skipped(operation: &str, error: &SchoolError) {
    if error.is_not_found() {
        log::warn!("Skipped {operation}: {error}");
    } else {
        log::error!("Skipped {operation}: {error}");
    }
}
