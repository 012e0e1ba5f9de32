//! Pipeline stages for air-sensor log processing.
//!
//! Each stage is an explicit config-bearing struct with no ambient state:
//! `Loader` turns a directory of capture files into a sorted dataset,
//! `Cleaner` drops incomplete and outlier rows, and `partition_days`
//! slices the result into calendar-day buckets for charting.

pub mod cleaner;
pub mod loader;
pub mod partition;

pub use cleaner::Cleaner;
pub use loader::Loader;
pub use partition::{partition_days, DayBucket, DayPartitions};
