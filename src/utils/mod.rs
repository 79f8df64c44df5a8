//! Shared utilities for reading, converting and logging

pub mod arrow;
pub mod io;
pub mod logging;
