//! Pivoted views of the sub-national records
//!
//! Both pivots exclude the national aggregate and are keyed by region
//! label. Missing (region, year) pairs stay absent; nothing is zero-filled.

use std::collections::BTreeMap;

use crate::models::RecordSet;

/// Region label → year → population
pub type RegionYearMatrix = BTreeMap<&'static str, BTreeMap<i32, u64>>;

/// Year → region label → summed population
pub type YearRegionMatrix = BTreeMap<i32, BTreeMap<&'static str, u64>>;

/// Pivot populations into a region × year matrix
#[must_use]
pub fn region_by_year_matrix(records: &RecordSet) -> RegionYearMatrix {
    let mut matrix = RegionYearMatrix::new();
    for record in records.regional() {
        matrix
            .entry(record.region_label())
            .or_default()
            .insert(record.year, record.population);
    }
    matrix
}

/// Sum populations per year and region for a stacked composition
#[must_use]
pub fn year_by_region_sums(records: &RecordSet) -> YearRegionMatrix {
    let mut matrix = YearRegionMatrix::new();
    for record in records.regional() {
        *matrix
            .entry(record.year)
            .or_default()
            .entry(record.region_label())
            .or_default() += record.population;
    }
    matrix
}
