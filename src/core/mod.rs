//! Cleaning, overwrite and aggregation stages of the pipeline

pub mod aggregator;
pub mod cleaner;
pub mod dates;
pub mod inspector;
pub mod overwriter;
pub mod stats;

pub use aggregator::{DepartmentMeans, GroupStats, Spread, Summary};
pub use cleaner::{Cleaner, CleaningReport};
pub use inspector::{ColumnProfile, DataProfile};
pub use overwriter::overwrite_first_rows;
