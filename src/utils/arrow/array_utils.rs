//! Utilities for working with Arrow arrays.
//!
//! Columns are looked up by header name, never by position, and are
//! normalised to `Utf8` so the loader can apply one set of cleaning rules
//! regardless of how the source typed them.

use arrow::array::{Array, ArrayRef, StringArray};
use arrow::compute::kernels::cast;
use arrow::datatypes::{DataType, Schema};
use arrow::record_batch::RecordBatch;
use log::debug;

use crate::error::{PopulationError, Result};

/// Normalise a header name for comparison
///
/// Strips surrounding whitespace and a leading byte order mark.
#[must_use]
pub fn normalize_header(name: &str) -> &str {
    name.trim_start_matches('\u{feff}').trim()
}

/// Find the index of the first field whose name matches one of `aliases`
#[must_use]
pub fn find_column_index(schema: &Schema, aliases: &[&str]) -> Option<usize> {
    schema
        .fields()
        .iter()
        .position(|field| aliases.contains(&normalize_header(field.name())))
}

/// Get a column as a `StringArray`, casting it first if necessary
///
/// # Arguments
///
/// * `batch` - The record batch containing the column
/// * `idx` - Index of the column
///
/// # Returns
///
/// * `Ok(StringArray)` - The column as strings
/// * `Err` - If the column type cannot be cast to `Utf8`
pub fn string_column(batch: &RecordBatch, idx: usize) -> Result<StringArray> {
    let column: &ArrayRef = batch.column(idx);
    let converted = if column.data_type() == &DataType::Utf8 {
        column.clone()
    } else {
        debug!(
            "Converting column '{}' from {:?} to Utf8",
            batch.schema().field(idx).name(),
            column.data_type()
        );
        cast::cast(column, &DataType::Utf8)?
    };

    converted
        .as_any()
        .downcast_ref::<StringArray>()
        .cloned()
        .ok_or_else(|| {
            PopulationError::malformed(format!(
                "column '{}' could not be read as text",
                batch.schema().field(idx).name()
            ))
        })
}

/// Value at `row` or `None` when the cell is null
#[must_use]
pub fn value_at(array: &StringArray, row: usize) -> Option<&str> {
    if array.is_null(row) {
        None
    } else {
        Some(array.value(row))
    }
}
