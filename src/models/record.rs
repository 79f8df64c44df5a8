//! Cleaned population records
//!
//! A `RecordSet` is produced once by the loader and then only read. All
//! analysis functions borrow it and build new values from it.

use arrow::array::{ArrayRef, Int32Array, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use crate::error::{PopulationError, Result};
use crate::models::region::RegionCode;

/// One cleaned row of the population table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PopulationRecord {
    /// Region the row belongs to
    pub region: RegionCode,
    /// Observation year
    pub year: i32,
    /// Resident population
    pub population: u64,
    /// Births during the year
    pub births: u64,
    /// Deaths during the year
    pub deaths: u64,
}

impl PopulationRecord {
    /// Create a new record
    #[must_use]
    pub const fn new(region: RegionCode, year: i32, population: u64, births: u64, deaths: u64) -> Self {
        Self {
            region,
            year,
            population,
            births,
            deaths,
        }
    }

    /// Display label of the record's region
    #[must_use]
    pub const fn region_label(&self) -> &'static str {
        self.region.label()
    }

    /// Births minus deaths
    #[must_use]
    pub fn natural_change(&self) -> i64 {
        count_difference(self.births, self.deaths)
    }
}

/// `later - earlier` as a signed value, saturating at the `i64` bounds
#[must_use]
pub fn count_difference(later: u64, earlier: u64) -> i64 {
    let diff = i128::from(later) - i128::from(earlier);
    i64::try_from(diff).unwrap_or(if diff < 0 { i64::MIN } else { i64::MAX })
}

impl Serialize for PopulationRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PopulationRecord", 6)?;
        state.serialize_field("region_code", self.region.code())?;
        state.serialize_field("region_label", self.region_label())?;
        state.serialize_field("year", &self.year)?;
        state.serialize_field("population", &self.population)?;
        state.serialize_field("births", &self.births)?;
        state.serialize_field("deaths", &self.deaths)?;
        state.end()
    }
}

/// Immutable collection of cleaned records
///
/// Holds at most one record per (region, year) pair. Input order is kept
/// but carries no meaning beyond tie-breaking.
#[derive(Debug, Clone)]
pub struct RecordSet {
    records: Arc<[PopulationRecord]>,
}

impl RecordSet {
    /// Build a record set, rejecting repeated (region, year) pairs
    pub fn new(records: Vec<PopulationRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert((record.region, record.year)) {
                return Err(PopulationError::DuplicateRecord {
                    region: record.region,
                    year: record.year,
                });
            }
        }

        Ok(Self {
            records: records.into(),
        })
    }

    /// All records in input order
    #[must_use]
    pub fn records(&self) -> &[PopulationRecord] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records
    pub fn iter(&self) -> std::slice::Iter<'_, PopulationRecord> {
        self.records.iter()
    }

    /// Records of the national aggregate
    pub fn national(&self) -> impl Iterator<Item = &PopulationRecord> + '_ {
        self.records.iter().filter(|r| r.region.is_national())
    }

    /// Records of every sub-national region
    pub fn regional(&self) -> impl Iterator<Item = &PopulationRecord> + '_ {
        self.records.iter().filter(|r| !r.region.is_national())
    }

    /// Distinct years present in the set
    #[must_use]
    pub fn years(&self) -> BTreeSet<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    /// Latest year present in the set
    #[must_use]
    pub fn latest_year(&self) -> Option<i32> {
        self.records.iter().map(|r| r.year).max()
    }

    /// Whether any record carries the given year
    #[must_use]
    pub fn contains_year(&self, year: i32) -> bool {
        self.records.iter().any(|r| r.year == year)
    }

    /// Get the Arrow schema for cleaned records
    #[must_use]
    pub fn schema() -> Schema {
        Schema::new(vec![
            Field::new("region", DataType::Utf8, false),
            Field::new("year", DataType::Int32, false),
            Field::new("population", DataType::UInt64, false),
            Field::new("births", DataType::UInt64, false),
            Field::new("deaths", DataType::UInt64, false),
        ])
    }

    /// Convert the records to a `RecordBatch`, regions written as their codes
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let column = |value: fn(&PopulationRecord) -> u64| -> ArrayRef {
            Arc::new(UInt64Array::from_iter_values(self.records.iter().map(value)))
        };

        let columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from_iter_values(
                self.records.iter().map(|r| r.region.code()),
            )),
            Arc::new(Int32Array::from_iter_values(self.records.iter().map(|r| r.year))),
            column(|r| r.population),
            column(|r| r.births),
            column(|r| r.deaths),
        ];

        Ok(RecordBatch::try_new(Arc::new(Self::schema()), columns)?)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a PopulationRecord;
    type IntoIter = std::slice::Iter<'a, PopulationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
