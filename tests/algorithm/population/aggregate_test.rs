//! Tests for the pivoted views

use pop_trends::{RegionCode, region_by_year_matrix, year_by_region_sums};

use crate::utils::{population_records, sample_records};

#[test]
fn test_region_by_year_excludes_national() {
    let matrix = region_by_year_matrix(&sample_records());
    assert!(!matrix.contains_key(RegionCode::National.label()));
    assert_eq!(matrix.len(), 7);
    assert_eq!(matrix["Gyeonggi"][&2019], 13_200);
    assert_eq!(matrix["Sejong"][&2016], 0);
}

#[test]
fn test_missing_cells_stay_absent() {
    let matrix = region_by_year_matrix(&sample_records());
    // 2017 and 2018 exist only for the national aggregate
    for years in matrix.values() {
        assert!(!years.contains_key(&2017));
        assert!(!years.contains_key(&2018));
        assert_eq!(years.len(), 3);
    }

    let sparse = region_by_year_matrix(&population_records(&[
        (RegionCode::Seoul, 2019, 10),
        (RegionCode::Jeju, 2020, 4),
    ]));
    assert_eq!(sparse["Seoul"].get(&2020), None);
    assert_eq!(sparse["Jeju"].get(&2019), None);
}

#[test]
fn test_year_by_region_composition() {
    let sums = year_by_region_sums(&sample_records());
    assert_eq!(sums.keys().copied().collect::<Vec<_>>(), vec![2016, 2019, 2020]);

    let total_2020: u64 = sums[&2020].values().sum();
    assert_eq!(total_2020, 9670 + 3390 + 2950 + 13_450 + 355 + 675 + 2420);
    assert!(!sums[&2020].contains_key("National"));
}

#[test]
fn test_pivots_agree() {
    let records = sample_records();
    let by_region = region_by_year_matrix(&records);
    let by_year = year_by_region_sums(&records);

    for (label, years) in &by_region {
        for (year, population) in years {
            assert_eq!(by_year[year][label], *population);
        }
    }
}
