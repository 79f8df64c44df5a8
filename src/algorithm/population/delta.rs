//! Regional population change over a look-back window
//!
//! Populations at the end year and at `end_year - lookback` are joined by
//! region. Regions present in only one of the two years are dropped, the
//! national aggregate is excluded, and the remaining regions are ranked by
//! change from largest gain to largest loss.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::{PopulationError, Result};
use crate::models::{RecordSet, RegionCode, count_difference};

/// Default number of years between the compared years
pub const DEFAULT_LOOKBACK: i32 = 4;

/// Population change of one region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionDelta {
    /// The region
    pub region: RegionCode,
    /// Population in the base year
    pub base_population: u64,
    /// Population in the end year
    pub end_population: u64,
    /// `end_population - base_population`
    pub delta: i64,
}

impl RegionDelta {
    /// Display label of the region
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.region.label()
    }
}

/// Regions ranked by population change, largest gain first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionalDeltas {
    base_year: i32,
    end_year: i32,
    entries: Vec<RegionDelta>,
}

impl RegionalDeltas {
    /// Earlier of the two compared years
    #[must_use]
    pub const fn base_year(&self) -> i32 {
        self.base_year
    }

    /// Later of the two compared years
    #[must_use]
    pub const fn end_year(&self) -> i32 {
        self.end_year
    }

    /// The full ranked sequence
    #[must_use]
    pub fn entries(&self) -> &[RegionDelta] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` largest gains, in ranked order
    #[must_use]
    pub fn top(&self, n: usize) -> &[RegionDelta] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// The last `n` entries of the ranked sequence, in ranked order
    #[must_use]
    pub fn bottom(&self, n: usize) -> &[RegionDelta] {
        let len = self.entries.len();
        &self.entries[len - n.min(len)..]
    }

    /// Labels of [`Self::top`]
    #[must_use]
    pub fn top_labels(&self, n: usize) -> Vec<&'static str> {
        self.top(n).iter().map(RegionDelta::label).collect()
    }

    /// Labels of [`Self::bottom`]
    #[must_use]
    pub fn bottom_labels(&self, n: usize) -> Vec<&'static str> {
        self.bottom(n).iter().map(RegionDelta::label).collect()
    }
}

/// Rank regions by population change between `end_year - lookback` and `end_year`
///
/// Equal changes keep region declaration order.
///
/// # Errors
///
/// Returns `MissingYear` if either year has no records at all.
pub fn regional_delta(records: &RecordSet, end_year: i32, lookback: i32) -> Result<RegionalDeltas> {
    let base_year = end_year - lookback;
    for year in [end_year, base_year] {
        if !records.contains_year(year) {
            return Err(PopulationError::MissingYear { year });
        }
    }

    let base: HashMap<RegionCode, u64> = records
        .regional()
        .filter(|r| r.year == base_year)
        .map(|r| (r.region, r.population))
        .collect();

    let mut entries: Vec<RegionDelta> = records
        .regional()
        .filter(|r| r.year == end_year)
        .filter_map(|r| {
            let base_population = *base.get(&r.region)?;
            Some(RegionDelta {
                region: r.region,
                base_population,
                end_population: r.population,
                delta: count_difference(r.population, base_population),
            })
        })
        .collect();

    entries.sort_by(|a, b| b.delta.cmp(&a.delta).then(a.region.cmp(&b.region)));

    Ok(RegionalDeltas {
        base_year,
        end_year,
        entries,
    })
}

/// [`regional_delta`] ending at the latest year in the record set
///
/// An empty record set is `MalformedInput`.
pub fn latest_regional_delta(records: &RecordSet, lookback: i32) -> Result<RegionalDeltas> {
    let end_year = records
        .latest_year()
        .ok_or_else(|| PopulationError::malformed("record set contains no years"))?;
    regional_delta(records, end_year, lookback)
}
