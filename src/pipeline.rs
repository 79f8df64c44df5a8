//! Ingestion followed by the independent trend derivations
//!
//! The loader produces one immutable [`RecordSet`]; the forecast, delta
//! ranking, year-over-year extraction and pivots each read it without
//! depending on one another. With `parallel` enabled they run on the rayon
//! pool, otherwise one after the other. The output is identical either way.

use log::{debug, info};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::algorithm::population::{
    DatasetSummary, NationalForecast, RegionYearMatrix, RegionalDeltas, YearOverYearChange,
    YearRegionMatrix, describe, latest_regional_delta, national_forecast, region_by_year_matrix,
    regional_delta, top_year_over_year_changes, year_by_region_sums,
};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::loader;
use crate::models::RecordSet;

/// All views derived from one population table
#[derive(Debug, Clone, Serialize)]
pub struct PopulationReport {
    /// Descriptive statistics of the cleaned table
    pub summary: DatasetSummary,
    /// National history and projection
    pub forecast: NationalForecast,
    /// Regions ranked by change over the look-back window
    pub deltas: RegionalDeltas,
    /// Labels of the largest gains
    pub delta_head: Vec<&'static str>,
    /// Labels of the largest losses
    pub delta_tail: Vec<&'static str>,
    /// Largest year-over-year increases
    pub top_changes: Vec<YearOverYearChange>,
    /// Region × year population matrix
    pub region_year: RegionYearMatrix,
    /// Year × region population sums
    pub year_region: YearRegionMatrix,
}

/// Runs ingestion and analysis with one configuration
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    #[must_use]
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load and analyse a CSV or Parquet file
    pub fn run_path(&self, path: &Path) -> Result<PopulationReport> {
        let records = loader::load_path(path, &self.config)?;
        self.analyze(&records)
    }

    /// Load and analyse CSV from a reader
    pub fn run_reader<R: Read>(&self, reader: R) -> Result<PopulationReport> {
        let records = loader::load_reader(reader, &self.config)?;
        self.analyze(&records)
    }

    /// Derive every view from a cleaned record set
    ///
    /// # Errors
    ///
    /// Returns the forecast error first, then the delta error, if either
    /// derivation fails.
    pub fn analyze(&self, records: &RecordSet) -> Result<PopulationReport> {
        let start = Instant::now();
        let config = &self.config;

        let forecast = || national_forecast(records, config.forecast_target_year);
        let deltas = || match config.delta_end_year {
            Some(end_year) => regional_delta(records, end_year, config.lookback_years),
            None => latest_regional_delta(records, config.lookback_years),
        };
        let changes = || top_year_over_year_changes(records, config.top_k);
        let pivots = || (region_by_year_matrix(records), year_by_region_sums(records));

        let ((forecast, deltas), (top_changes, (region_year, year_region))) = if config.parallel {
            debug!("Running derivations in parallel");
            rayon::join(|| rayon::join(forecast, deltas), || rayon::join(changes, pivots))
        } else {
            ((forecast(), deltas()), (changes(), pivots()))
        };

        let forecast = forecast?;
        let deltas = deltas?;
        info!(
            "Projected national population {} for {}",
            forecast.projected_population, forecast.target_year
        );
        info!(
            "Ranked {} regions for {}-{}, extracted {} year-over-year changes",
            deltas.len(),
            deltas.base_year(),
            deltas.end_year(),
            top_changes.len()
        );

        let report = PopulationReport {
            summary: describe(records),
            delta_head: deltas.top_labels(config.summary_size),
            delta_tail: deltas.bottom_labels(config.summary_size),
            forecast,
            deltas,
            top_changes,
            region_year,
            year_region,
        };

        debug!("Analysis finished in {:?}", start.elapsed());
        Ok(report)
    }
}
