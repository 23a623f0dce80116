//! Infrastructure layer: data sources, the session table cache, and the
//! aggregations/chart specifications computed from the working table.

pub mod analytics;
pub mod cache;
pub mod data_source;

pub use cache::TableCache;
pub use data_source::{CsvDataSource, DataSource, InMemoryDataSource, LoadError};
