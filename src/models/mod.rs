//! Data models for the population table

pub mod record;
pub mod region;

pub use record::{PopulationRecord, RecordSet, count_difference};
pub use region::RegionCode;
