//! Delimited text reading
//!
//! Every column is read as `Utf8` so that no cell is rejected by the reader;
//! numeric interpretation happens later during cleaning.

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use std::io::Cursor;
use std::sync::Arc;

use crate::error::Result;

/// Read the header of a CSV buffer into an all-`Utf8` schema
pub fn read_csv_schema(bytes: &[u8]) -> Result<SchemaRef> {
    let (inferred, _) = Format::default()
        .with_header(true)
        .infer_schema(Cursor::new(bytes), Some(0))?;

    let fields: Vec<Field> = inferred
        .fields()
        .iter()
        .map(|f| Field::new(f.name(), DataType::Utf8, true))
        .collect();

    Ok(Arc::new(Schema::new(fields)))
}

/// Read a whole CSV buffer into record batches using `schema`
///
/// Any malformed line fails the whole read.
pub fn read_csv_batches(
    bytes: &[u8],
    schema: SchemaRef,
    batch_size: usize,
) -> Result<Vec<RecordBatch>> {
    let reader = ReaderBuilder::new(schema)
        .with_header(true)
        .with_batch_size(batch_size)
        .build(Cursor::new(bytes))?;

    let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;
    Ok(batches)
}
