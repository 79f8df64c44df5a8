//! Logging utilities for output and progress tracking

pub mod console;
pub mod log;

// Re-export commonly used functions for convenience
pub use log::{log_operation_complete, log_operation_start, log_warning};
