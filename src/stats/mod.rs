//! Stats module - grouped counts and summary statistics

mod aggregator;
mod summary;

pub use aggregator::{CatalogAggregates, CatalogAggregator, Counts, YearCounts};
pub use summary::CatalogSummary;
