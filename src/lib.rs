//! A Rust library for cleaning regional population tables and deriving
//! trend, ranking and pivot views from them.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::PipelineConfig;
pub use error::{PopulationError, Result};
pub use models::{PopulationRecord, RecordSet, RegionCode};
pub use pipeline::{Pipeline, PopulationReport};

// Loading
pub use loader::{load_batches, load_path, load_reader, load_str};

// Analysis
pub use algorithm::population::{
    forecast_national, national_forecast, region_by_year_matrix, regional_delta,
    top_year_over_year_changes, year_by_region_sums,
};
