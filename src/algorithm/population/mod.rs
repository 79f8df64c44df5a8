//! Population trend analysis
//!
//! Every function here reads a cleaned [`crate::models::RecordSet`] and
//! returns a new derived view without modifying the source.

pub mod aggregate;
pub mod changes;
pub mod delta;
pub mod forecast;
pub mod statistics;

// Re-export commonly used items
pub use aggregate::{RegionYearMatrix, YearRegionMatrix, region_by_year_matrix, year_by_region_sums};
pub use changes::{DEFAULT_TOP_K, YearOverYearChange, top_year_over_year_changes, year_over_year_changes};
pub use delta::{DEFAULT_LOOKBACK, RegionDelta, RegionalDeltas, latest_regional_delta, regional_delta};
pub use forecast::{DEFAULT_TARGET_YEAR, FORECAST_WINDOW, NationalForecast, forecast_national, national_forecast};
pub use statistics::{ColumnSummary, DatasetSummary, describe};
