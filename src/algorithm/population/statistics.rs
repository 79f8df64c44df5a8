//! Descriptive statistics for a cleaned record set

use itertools::Itertools;
use serde::Serialize;

use crate::models::{PopulationRecord, RecordSet};

/// Summary of one numeric column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    /// Column name
    pub name: &'static str,
    /// Number of values
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation, `None` for a single value
    pub std: Option<f64>,
    pub min: f64,
    /// 25th percentile
    pub q25: f64,
    pub median: f64,
    /// 75th percentile
    pub q75: f64,
    pub max: f64,
}

/// Overview of a record set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    /// Number of records
    pub row_count: usize,
    /// Number of distinct regions, national aggregate included
    pub region_count: usize,
    /// First and last year present
    pub year_range: Option<(i32, i32)>,
    /// Statistics per numeric column
    pub columns: Vec<ColumnSummary>,
}

/// Quantile of sorted values using linear interpolation
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

fn summarize(name: &'static str, records: &[PopulationRecord], value: fn(&PopulationRecord) -> f64) -> ColumnSummary {
    let mut values: Vec<f64> = records.iter().map(value).collect();
    values.sort_by(f64::total_cmp);

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std = (count > 1).then(|| {
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    });

    ColumnSummary {
        name,
        count,
        mean,
        std,
        min: values[0],
        q25: quantile(&values, 0.25),
        median: quantile(&values, 0.5),
        q75: quantile(&values, 0.75),
        max: values[count - 1],
    }
}

/// Describe a record set
#[must_use]
pub fn describe(records: &RecordSet) -> DatasetSummary {
    let rows = records.records();
    let year_range = rows.iter().map(|r| r.year).minmax().into_option();
    let region_count = rows.iter().map(|r| r.region).unique().count();

    let columns = if rows.is_empty() {
        Vec::new()
    } else {
        vec![
            summarize("year", rows, |r| f64::from(r.year)),
            summarize("population", rows, |r| r.population as f64),
            summarize("births", rows, |r| r.births as f64),
            summarize("deaths", rows, |r| r.deaths as f64),
        ]
    };

    DatasetSummary {
        row_count: rows.len(),
        region_count,
        year_range,
        columns,
    }
}
