//! Tests for regional delta ranking

use pop_trends::algorithm::population::{DEFAULT_LOOKBACK, latest_regional_delta};
use pop_trends::{PopulationError, RegionCode, regional_delta};
use std::collections::HashSet;

use crate::utils::{population_records, sample_records};

#[test]
fn test_sample_ranking() {
    let deltas = regional_delta(&sample_records(), 2020, DEFAULT_LOOKBACK).unwrap();
    assert_eq!((deltas.base_year(), deltas.end_year()), (2016, 2020));

    let ranked: Vec<_> = deltas.entries().iter().map(|d| (d.region, d.delta)).collect();
    assert_eq!(
        ranked,
        vec![
            (RegionCode::Gyeonggi, 750),
            (RegionCode::Sejong, 355),
            (RegionCode::Jeju, 35),
            (RegionCode::Incheon, 10),
            (RegionCode::Daegu, -60),
            (RegionCode::Busan, -110),
            (RegionCode::Seoul, -230),
        ]
    );
}

#[test]
fn test_head_and_tail_do_not_overlap() {
    let deltas = regional_delta(&sample_records(), 2020, 4).unwrap();
    assert!(deltas.entries().iter().all(|d| !d.region.is_national()));

    assert_eq!(deltas.top_labels(3), vec!["Gyeonggi", "Sejong", "Jeju"]);
    assert_eq!(deltas.bottom_labels(3), vec!["Daegu", "Busan", "Seoul"]);

    let head: HashSet<_> = deltas.top(3).iter().map(|d| d.region).collect();
    let tail: HashSet<_> = deltas.bottom(3).iter().map(|d| d.region).collect();
    assert!(head.is_disjoint(&tail));

    let all: HashSet<_> = deltas.entries().iter().map(|d| d.region).collect();
    assert!(head.is_subset(&all) && tail.is_subset(&all));
}

#[test]
fn test_latest_year_is_default_end() {
    let deltas = latest_regional_delta(&sample_records(), DEFAULT_LOOKBACK).unwrap();
    assert_eq!(deltas.end_year(), 2020);
    assert_eq!(deltas.len(), 7);
}

#[test]
fn test_one_sided_regions_are_dropped() {
    let records = population_records(&[
        (RegionCode::Seoul, 2016, 100),
        (RegionCode::Seoul, 2020, 120),
        (RegionCode::Busan, 2016, 80),
        (RegionCode::Jeju, 2020, 60),
    ]);

    let deltas = regional_delta(&records, 2020, 4).unwrap();
    assert_eq!(deltas.len(), 1);
    assert_eq!(deltas.entries()[0].region, RegionCode::Seoul);
    assert_eq!(deltas.entries()[0].base_population, 100);
    assert_eq!(deltas.entries()[0].end_population, 120);
}

#[test]
fn test_year_present_only_for_national_counts_as_present() {
    let records = population_records(&[
        (RegionCode::National, 2016, 1000),
        (RegionCode::Seoul, 2020, 120),
    ]);

    let deltas = regional_delta(&records, 2020, 4).unwrap();
    assert!(deltas.is_empty());
}

#[test]
fn test_missing_comparison_year() {
    assert!(matches!(
        regional_delta(&sample_records(), 2020, 5),
        Err(PopulationError::MissingYear { year: 2015 })
    ));
    assert!(matches!(
        regional_delta(&sample_records(), 2030, 4),
        Err(PopulationError::MissingYear { year: 2030 })
    ));
}

#[test]
fn test_empty_record_set() {
    let records = population_records(&[]);
    assert!(matches!(
        latest_regional_delta(&records, 4),
        Err(PopulationError::MalformedInput(_))
    ));
}
