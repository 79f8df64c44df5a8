//! Tests for year-over-year change extraction

use pop_trends::algorithm::population::{DEFAULT_TOP_K, year_over_year_changes};
use pop_trends::{RegionCode, top_year_over_year_changes};

use crate::utils::{population_records, sample_records};

#[test]
fn test_signed_selection() {
    let records = population_records(&[
        (RegionCode::Seoul, 2018, 100),
        (RegionCode::Seoul, 2019, 90),
        (RegionCode::Seoul, 2020, 150),
        (RegionCode::Busan, 2019, 50),
        (RegionCode::Busan, 2020, 80),
    ]);

    let top: Vec<_> = top_year_over_year_changes(&records, 2)
        .iter()
        .map(|c| (c.record.region, c.diff))
        .collect();
    assert_eq!(top, vec![(RegionCode::Seoul, 60), (RegionCode::Busan, 30)]);

    // The drop only appears once every gain is taken, never ahead of one
    let all = top_year_over_year_changes(&records, 10);
    assert_eq!(all.len(), 3);
    assert_eq!(all.last().map(|c| c.diff), Some(-10));
}

#[test]
fn test_sample_top_changes() {
    let records = sample_records();
    let top = top_year_over_year_changes(&records, 3);
    let summary: Vec<_> = top
        .iter()
        .map(|c| (c.record.region, c.record.year, c.diff))
        .collect();

    assert_eq!(
        summary,
        vec![
            (RegionCode::Gyeonggi, 2019, 500),
            (RegionCode::Sejong, 2019, 340),
            (RegionCode::Gyeonggi, 2020, 250),
        ]
    );
    assert_eq!(top[0].previous_year, 2016);
}

#[test]
fn test_fewer_candidates_than_k() {
    let records = sample_records();
    // Seven regions with three observations each
    let top = top_year_over_year_changes(&records, DEFAULT_TOP_K);
    assert_eq!(top.len(), 14);
    assert!(top.windows(2).all(|w| w[0].diff >= w[1].diff));
    assert!(top.iter().all(|c| !c.record.region.is_national()));
}

#[test]
fn test_equal_diffs_keep_input_order() {
    let top = top_year_over_year_changes(&sample_records(), DEFAULT_TOP_K);
    let tied: Vec<_> = top
        .iter()
        .filter(|c| c.diff == -20)
        .map(|c| (c.record.region, c.record.year))
        .collect();

    // Busan precedes Daegu in the 2020 rows of the input
    assert_eq!(tied, vec![(RegionCode::Busan, 2020), (RegionCode::Daegu, 2020)]);
}

#[test]
fn test_changes_follow_input_order() {
    let changes = year_over_year_changes(&sample_records());
    assert_eq!(changes.len(), 14);
    assert_eq!(changes[0].record.region, RegionCode::Seoul);
    assert_eq!(changes[0].record.year, 2019);
    assert_eq!(changes[0].diff, -170);
}

#[test]
fn test_zero_k() {
    assert!(top_year_over_year_changes(&sample_records(), 0).is_empty());
}
