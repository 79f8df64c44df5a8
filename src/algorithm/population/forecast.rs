//! National population forecast
//!
//! A naive linear extrapolation: the mean natural change (births minus
//! deaths) of the latest three national observations is applied once per
//! year between the latest observation and the target year. The result is
//! not clamped and can be negative for long horizons.

use serde::Serialize;

use crate::error::{PopulationError, Result};
use crate::models::{PopulationRecord, RecordSet};

/// Number of latest national observations the annual delta averages over
pub const FORECAST_WINDOW: usize = 3;

/// Default year the national forecast projects to
pub const DEFAULT_TARGET_YEAR: i32 = 2035;

/// Historical national series together with its projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NationalForecast {
    /// National (year, population) pairs in ascending year order
    pub history: Vec<(i32, u64)>,
    /// Latest observed year
    pub anchor_year: i32,
    /// Population in the latest observed year
    pub anchor_population: u64,
    /// Mean natural change over the window, truncated toward zero
    pub annual_delta: i64,
    /// Year projected to
    pub target_year: i32,
    /// Projected population in `target_year`
    pub projected_population: i64,
}

impl NationalForecast {
    /// The projected point as a (year, population) pair
    #[must_use]
    pub const fn projection(&self) -> (i32, i64) {
        (self.target_year, self.projected_population)
    }
}

/// Mean of `values`, truncated toward zero
///
/// Integer division keeps the result exact, so a mean of -2.33 becomes -2
/// rather than -3. The sum is taken in `i128`, so a mean of `i64` values
/// always fits back into `i64`.
fn truncated_mean(values: &[i64]) -> i64 {
    if values.is_empty() {
        return 0;
    }
    let sum: i128 = values.iter().copied().map(i128::from).sum();
    let len = i128::try_from(values.len()).unwrap_or(i128::MAX);
    i64::try_from(sum / len).unwrap_or_default()
}

/// Build the national forecast for `target_year`
///
/// # Errors
///
/// Returns `InsufficientHistory` when fewer than three national
/// observations exist.
pub fn national_forecast(records: &RecordSet, target_year: i32) -> Result<NationalForecast> {
    let mut national: Vec<&PopulationRecord> = records.national().collect();
    if national.len() < FORECAST_WINDOW {
        return Err(PopulationError::InsufficientHistory {
            required: FORECAST_WINDOW,
            found: national.len(),
        });
    }
    national.sort_by_key(|r| r.year);

    let recent = &national[national.len() - FORECAST_WINDOW..];
    let changes: Vec<i64> = recent.iter().map(|r| r.natural_change()).collect();
    let annual_delta = truncated_mean(&changes);

    // Sorted ascending, so the last element is the latest year
    let anchor = recent[FORECAST_WINDOW - 1];
    let years_ahead = i64::from(target_year) - i64::from(anchor.year);
    let projected_population = i64::try_from(anchor.population)
        .unwrap_or(i64::MAX)
        .saturating_add(annual_delta.saturating_mul(years_ahead));

    Ok(NationalForecast {
        history: national.iter().map(|r| (r.year, r.population)).collect(),
        anchor_year: anchor.year,
        anchor_population: anchor.population,
        annual_delta,
        target_year,
        projected_population,
    })
}

/// Projected national population in `target_year`
pub fn forecast_national(records: &RecordSet, target_year: i32) -> Result<i64> {
    national_forecast(records, target_year).map(|f| f.projected_population)
}
