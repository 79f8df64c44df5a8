//! Year-over-year population changes
//!
//! Each sub-national region's records are ordered by year and differenced
//! against the previous observation. Selection is by signed difference, so
//! the largest increases are surfaced and population drops never rank above
//! any gain.

use itertools::Itertools;
use serde::Serialize;

use crate::models::{PopulationRecord, RecordSet, count_difference};

/// Default number of changes to extract
pub const DEFAULT_TOP_K: usize = 100;

/// A record together with its change from the region's previous observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearOverYearChange {
    /// The later of the two observations
    pub record: PopulationRecord,
    /// Year of the previous observation
    pub previous_year: i32,
    /// `record.population` minus the previous observation's population
    pub diff: i64,
}

/// Every year-over-year change, in input order of the later record
///
/// The first observed year of each region has no predecessor and yields no
/// change. The national aggregate is skipped.
#[must_use]
pub fn year_over_year_changes(records: &RecordSet) -> Vec<YearOverYearChange> {
    let by_region = records
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| !r.region.is_national())
        .into_group_map_by(|(_, r)| r.region);

    let mut changes: Vec<(usize, YearOverYearChange)> = by_region
        .into_values()
        .flat_map(|mut rows| {
            rows.sort_by_key(|(_, r)| r.year);
            rows.into_iter()
                .tuple_windows()
                .map(|((_, prev), (idx, curr))| {
                    let change = YearOverYearChange {
                        record: *curr,
                        previous_year: prev.year,
                        diff: count_difference(curr.population, prev.population),
                    };
                    (idx, change)
                })
                .collect::<Vec<_>>()
        })
        .collect();

    changes.sort_by_key(|(idx, _)| *idx);
    changes.into_iter().map(|(_, change)| change).collect()
}

/// The `k` changes with the largest signed difference
///
/// Ties keep input order. Fewer than `k` entries are returned when fewer
/// candidates exist.
#[must_use]
pub fn top_year_over_year_changes(records: &RecordSet, k: usize) -> Vec<YearOverYearChange> {
    let mut changes = year_over_year_changes(records);
    // Stable: equal diffs stay in input order
    changes.sort_by(|a, b| b.diff.cmp(&a.diff));
    changes.truncate(k);
    changes
}
