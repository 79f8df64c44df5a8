//! Population table loading and cleaning
//!
//! Raw tables are read into Arrow record batches with every required column
//! viewed as text, then cleaned row by row into a [`RecordSet`]:
//!
//! 1. the placeholder region's "no data" token becomes 0,
//! 2. population, births and deaths are coerced to non-negative integers,
//!    with anything unparseable becoming 0,
//! 3. region codes are resolved against the closed region map.

use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use log::{debug, warn};
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::config::PipelineConfig;
use crate::error::{PopulationError, Result};
use crate::models::{PopulationRecord, RecordSet, RegionCode};
use crate::utils::arrow::{find_column_index, string_column, value_at};
use crate::utils::io::{is_parquet, read_csv_batches, read_csv_schema, read_parquet};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Accepted headers for the region column
pub const REGION_COLUMN: &[&str] = &["지역", "region"];
/// Accepted headers for the year column
pub const YEAR_COLUMN: &[&str] = &["연도", "year"];
/// Accepted headers for the population column
pub const POPULATION_COLUMN: &[&str] = &["인구", "population"];
/// Accepted headers for the births column
pub const BIRTHS_COLUMN: &[&str] = &["출생아수(명)", "births"];
/// Accepted headers for the deaths column
pub const DEATHS_COLUMN: &[&str] = &["사망자수(명)", "deaths"];

/// Counters collected while cleaning a table
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleaningStats {
    /// Data rows read
    pub rows: usize,
    /// Placeholder tokens replaced with 0 in the placeholder region
    pub placeholders_replaced: usize,
    /// Numeric cells that failed to parse and became 0
    pub values_coerced: usize,
}

/// Positions of the required columns within a schema
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    region: usize,
    year: usize,
    population: usize,
    births: usize,
    deaths: usize,
}

impl ColumnLayout {
    fn resolve(schema: &Schema) -> Result<Self> {
        let mut missing = Vec::new();
        let mut lookup = |aliases: &[&str]| {
            let idx = find_column_index(schema, aliases);
            if idx.is_none() {
                missing.push(aliases.join("|"));
            }
            idx.unwrap_or_default()
        };

        let layout = Self {
            region: lookup(REGION_COLUMN),
            year: lookup(YEAR_COLUMN),
            population: lookup(POPULATION_COLUMN),
            births: lookup(BIRTHS_COLUMN),
            deaths: lookup(DEATHS_COLUMN),
        };

        if missing.is_empty() {
            Ok(layout)
        } else {
            Err(PopulationError::malformed(format!(
                "missing required column(s): {}",
                missing.join(", ")
            )))
        }
    }
}

/// Coerce a raw cell to a non-negative count
///
/// Integers parse directly; finite decimals are truncated toward zero.
/// Returns `None` for empty, non-numeric, non-finite or negative values, and
/// for values above `i64::MAX` so that signed differences never wrap.
#[must_use]
pub fn coerce_count(raw: Option<&str>) -> Option<u64> {
    let value = raw?.trim();
    if let Ok(n) = value.parse::<i64>() {
        return u64::try_from(n).ok();
    }

    let parsed = value.parse::<f64>().ok().filter(|f| f.is_finite())?;
    // 2^63 is the first float above i64::MAX
    if (0.0..9_223_372_036_854_775_808.0).contains(&parsed) {
        u64::try_from(parsed.trunc() as i64).ok()
    } else {
        None
    }
}

fn clean_cell(
    raw: Option<&str>,
    region: RegionCode,
    placeholder: &str,
    stats: &mut CleaningStats,
) -> u64 {
    if region.uses_placeholder() && raw.is_some_and(|v| v.trim() == placeholder) {
        stats.placeholders_replaced += 1;
        return 0;
    }

    coerce_count(raw).unwrap_or_else(|| {
        stats.values_coerced += 1;
        0
    })
}

/// Clean record batches into a record set
///
/// # Errors
///
/// * `MalformedInput` if a required column is missing or a year is not an integer
/// * `UnknownRegion` if a region code is outside the region map
/// * `DuplicateRecord` if a (region, year) pair repeats
pub fn clean_batches(
    schema: &Schema,
    batches: &[RecordBatch],
    placeholder: &str,
) -> Result<(RecordSet, CleaningStats)> {
    let layout = ColumnLayout::resolve(schema)?;
    let mut stats = CleaningStats::default();
    let mut records = Vec::with_capacity(batches.iter().map(RecordBatch::num_rows).sum());

    for batch in batches {
        let regions = string_column(batch, layout.region)?;
        let years = string_column(batch, layout.year)?;
        let populations = string_column(batch, layout.population)?;
        let births = string_column(batch, layout.births)?;
        let deaths = string_column(batch, layout.deaths)?;

        for i in 0..batch.num_rows() {
            let row = stats.rows;
            stats.rows += 1;

            let raw_region = value_at(&regions, i).unwrap_or_default();
            let region = RegionCode::parse(raw_region).ok_or_else(|| PopulationError::UnknownRegion {
                code: raw_region.to_string(),
                row,
            })?;

            let raw_year = value_at(&years, i).unwrap_or_default();
            let year = raw_year.trim().parse::<i32>().map_err(|_| {
                PopulationError::malformed(format!("invalid year '{raw_year}' at row {row}"))
            })?;

            records.push(PopulationRecord::new(
                region,
                year,
                clean_cell(value_at(&populations, i), region, placeholder, &mut stats),
                clean_cell(value_at(&births, i), region, placeholder, &mut stats),
                clean_cell(value_at(&deaths, i), region, placeholder, &mut stats),
            ));
        }
    }

    if stats.values_coerced > 0 {
        warn!("Coerced {} unparseable numeric values to 0", stats.values_coerced);
    }
    debug!(
        "Cleaned {} rows, replaced {} placeholders",
        stats.rows, stats.placeholders_replaced
    );

    Ok((RecordSet::new(records)?, stats))
}

/// Load a population table from record batches
pub fn load_batches(schema: &Schema, batches: &[RecordBatch], config: &PipelineConfig) -> Result<RecordSet> {
    clean_batches(schema, batches, &config.placeholder_token).map(|(records, _)| records)
}

/// Load a population table from an in-memory CSV buffer
pub fn load_csv_bytes(bytes: &[u8], config: &PipelineConfig) -> Result<RecordSet> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(PopulationError::malformed("input table is empty"));
    }

    let schema = read_csv_schema(bytes)?;
    // Validate headers before decoding any rows
    ColumnLayout::resolve(&schema)?;
    let batches = read_csv_batches(bytes, schema.clone(), config.batch_size)?;
    load_batches(&schema, &batches, config)
}

/// Load a population table from CSV text
pub fn load_str(data: &str, config: &PipelineConfig) -> Result<RecordSet> {
    load_csv_bytes(data.as_bytes(), config)
}

/// Load a population table from any CSV reader
///
/// The source is read completely before parsing starts.
pub fn load_reader<R: Read>(mut reader: R, config: &PipelineConfig) -> Result<RecordSet> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    load_csv_bytes(&bytes, config)
}

/// Load a population table from a CSV or Parquet file
pub fn load_path(path: &Path, config: &PipelineConfig) -> Result<RecordSet> {
    let source = path.display().to_string();
    log_operation_start("Loading population table from", &source);
    let start = Instant::now();

    let records = if is_parquet(path) {
        let (schema, batches) = read_parquet(path, config.batch_size)?;
        load_batches(&schema, &batches, config)?
    } else {
        let bytes = std::fs::read(path)?;
        load_csv_bytes(&bytes, config)?
    };

    log_operation_complete("loaded", &source, records.len(), Some(start.elapsed()));
    Ok(records)
}
