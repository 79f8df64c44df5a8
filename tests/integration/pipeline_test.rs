//! End-to-end pipeline tests

use pop_trends::{Pipeline, PipelineConfig, PopulationError};

use crate::utils::{SAMPLE_CSV, sample_records};

#[test]
fn test_default_pipeline_report() {
    let report = Pipeline::default().run_reader(SAMPLE_CSV.as_bytes()).unwrap();

    assert_eq!(report.summary.row_count, 26);
    assert_eq!(report.summary.region_count, 8);
    assert_eq!(report.summary.year_range, Some((2016, 2020)));
    assert_eq!(report.forecast.projection(), (2035, 51_860));
    assert_eq!(report.delta_head, vec!["Gyeonggi", "Sejong", "Jeju"]);
    assert_eq!(report.delta_tail, vec!["Daegu", "Busan", "Seoul"]);
    assert_eq!(report.top_changes.len(), 14);
    assert_eq!(report.region_year.len(), 7);
    assert_eq!(report.year_region.len(), 3);
}

#[test]
fn test_parallel_matches_sequential() {
    let records = sample_records();
    let sequential = Pipeline::new(PipelineConfig::default()).analyze(&records).unwrap();
    let parallel = Pipeline::new(PipelineConfig {
        parallel: true,
        ..Default::default()
    })
    .analyze(&records)
    .unwrap();

    assert_eq!(
        serde_json::to_value(&sequential).unwrap(),
        serde_json::to_value(&parallel).unwrap()
    );
}

#[test]
fn test_configured_views() {
    let config = PipelineConfig {
        forecast_target_year: 2030,
        lookback_years: 1,
        delta_end_year: Some(2020),
        top_k: 2,
        summary_size: 1,
        ..Default::default()
    };
    let report = Pipeline::new(config).analyze(&sample_records()).unwrap();

    assert_eq!(report.forecast.target_year, 2030);
    assert_eq!(report.deltas.base_year(), 2019);
    assert_eq!(report.delta_head, vec!["Gyeonggi"]);
    assert_eq!(report.delta_tail, vec!["Seoul"]);
    assert_eq!(report.top_changes.len(), 2);
}

#[test]
fn test_stage_errors_surface() {
    let config = PipelineConfig {
        delta_end_year: Some(1999),
        ..Default::default()
    };
    let result = Pipeline::new(config).analyze(&sample_records());
    assert!(matches!(result, Err(PopulationError::MissingYear { year: 1999 })));

    let regional_only = "region,year,population,births,deaths\nSeoul,2020,1,1,1\n";
    let result = Pipeline::default().run_reader(regional_only.as_bytes());
    assert!(matches!(
        result,
        Err(PopulationError::InsufficientHistory { found: 0, .. })
    ));
}

#[test]
fn test_report_serializes() {
    let report = Pipeline::default().analyze(&sample_records()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["forecast"]["projected_population"], 51_860);
    assert_eq!(json["region_year"]["Seoul"]["2020"], 9670);
    assert_eq!(json["top_changes"][0]["record"]["region_label"], "Gyeonggi");
    assert_eq!(json["deltas"]["entries"][0]["region"], "Gyeonggi");
}

#[test]
fn test_run_path_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("population_trends.csv");
    std::fs::write(&path, SAMPLE_CSV).unwrap();

    let report = Pipeline::default().run_path(&path).unwrap();
    assert_eq!(report.summary.row_count, 26);
}
