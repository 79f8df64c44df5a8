//! Configuration for the population pipeline.

use crate::algorithm::population::{DEFAULT_LOOKBACK, DEFAULT_TARGET_YEAR, DEFAULT_TOP_K};
use crate::utils::logging::log_warning;
use std::fmt;
use std::str::FromStr;

/// Default batch size for CSV and Parquet reading
pub const DEFAULT_BATCH_SIZE: usize = 16384;

/// Configuration for the population pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Year the national forecast projects to
    pub forecast_target_year: i32,
    /// Number of years between the two compared years of the regional delta
    pub lookback_years: i32,
    /// End year of the regional delta (latest year in the data when `None`)
    pub delta_end_year: Option<i32>,
    /// Number of year-over-year changes to extract
    pub top_k: usize,
    /// Number of regions named in the head/tail summary
    pub summary_size: usize,
    /// Token used for "no data" in the placeholder region's rows
    pub placeholder_token: String,
    /// Run the independent derivations on the rayon pool
    pub parallel: bool,
    /// Rows per record batch when reading input files
    pub batch_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            forecast_target_year: DEFAULT_TARGET_YEAR,
            lookback_years: DEFAULT_LOOKBACK,
            delta_end_year: None,
            top_k: DEFAULT_TOP_K,
            summary_size: 3,
            placeholder_token: "-".to_string(),
            parallel: false,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl PipelineConfig {
    /// Default configuration overlaid with `POP_TRENDS_*` environment variables
    ///
    /// Variables that fail to parse are ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Overlay values obtained from `lookup` onto this configuration
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(year) = parse_var(&lookup, "POP_TRENDS_TARGET_YEAR") {
            self.forecast_target_year = year;
        }
        if let Some(lookback) = parse_var(&lookup, "POP_TRENDS_LOOKBACK") {
            self.lookback_years = lookback;
        }
        if let Some(year) = parse_var(&lookup, "POP_TRENDS_END_YEAR") {
            self.delta_end_year = Some(year);
        }
        if let Some(k) = parse_var(&lookup, "POP_TRENDS_TOP_K") {
            self.top_k = k;
        }
        if let Some(parallel) = parse_var(&lookup, "POP_TRENDS_PARALLEL") {
            self.parallel = parallel;
        }
        if let Some(size) = parse_var::<usize, _>(&lookup, "POP_TRENDS_BATCH_SIZE") {
            if size == 0 {
                log_warning("Ignoring zero batch size", Some("POP_TRENDS_BATCH_SIZE"));
            } else {
                self.batch_size = size;
            }
        }
        self
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log_warning(&format!("Ignoring unparsable value '{raw}'"), Some(key));
            None
        }
    }
}

impl fmt::Display for PipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pipeline Configuration:")?;
        writeln!(f, "  Forecast Target Year: {}", self.forecast_target_year)?;
        writeln!(f, "  Lookback Years: {}", self.lookback_years)?;
        if let Some(end) = self.delta_end_year {
            writeln!(f, "  Delta End Year: {end}")?;
        }
        writeln!(f, "  Top K: {}", self.top_k)?;
        writeln!(f, "  Summary Size: {}", self.summary_size)?;
        writeln!(f, "  Placeholder Token: '{}'", self.placeholder_token)?;
        writeln!(f, "  Parallel: {}", self.parallel)?;
        writeln!(f, "  Batch Size: {}", self.batch_size)?;
        Ok(())
    }
}
