//! Core types for air-sensor log data.

pub mod date_range;
pub mod sample;

pub use date_range::DateRange;
pub use sample::{Measure, Reading, Sample, MEASURES};
