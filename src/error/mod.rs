//! Error handling for population table ingestion and analysis.

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use std::io;

use crate::models::RegionCode;

/// Errors raised while loading or analysing a population table
///
/// Numeric cells that fail to parse are never reported here: they are
/// coerced to zero during ingestion.
#[derive(Debug, thiserror::Error)]
pub enum PopulationError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding delimited text or converting arrays
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error decoding a Parquet file
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Required columns are absent or the table cannot be interpreted
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A region code outside the closed label map
    #[error("Unknown region code '{code}' at row {row}")]
    UnknownRegion {
        /// The raw code as it appeared in the input
        code: String,
        /// Zero-based data row index
        row: usize,
    },

    /// The same (region, year) pair appeared more than once
    #[error("Duplicate record for region {region} in year {year}")]
    DuplicateRecord {
        /// Region of the repeated pair
        region: RegionCode,
        /// Year of the repeated pair
        year: i32,
    },

    /// Too few national observations to forecast
    #[error("Insufficient history: need {required} national observations, found {found}")]
    InsufficientHistory {
        /// Minimum number of observations
        required: usize,
        /// Observations actually present
        found: usize,
    },

    /// A comparison year is absent from the record set
    #[error("Year {year} is not present in the record set")]
    MissingYear {
        /// The requested year
        year: i32,
    },
}

impl PopulationError {
    /// Build a `MalformedInput` error from any displayable message
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }
}

/// Result type for population operations
pub type Result<T> = std::result::Result<T, PopulationError>;
