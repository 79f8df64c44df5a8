//! Algorithms over cleaned population data

pub mod population;
