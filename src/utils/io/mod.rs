//! Input readers for population tables

pub mod csv;
pub mod parquet;

pub use self::csv::{read_csv_batches, read_csv_schema};
pub use self::parquet::read_parquet;

use std::path::Path;

/// Whether `path` names a Parquet file
#[must_use]
pub fn is_parquet(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"))
}
