//! Data sources supplying raw skill records.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use halflife_core::{DomainError, RowError, SkillRecord};

pub mod csv;
pub mod in_memory;

pub use self::csv::CsvDataSource;
pub use in_memory::InMemoryDataSource;

/// Fatal failure while loading the dataset. Nothing is rendered after one.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("invalid dataset row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: DomainError,
    },
}

impl From<RowError> for LoadError {
    fn from(err: RowError) -> Self {
        Self::InvalidRow {
            row: err.row,
            source: err.source,
        }
    }
}

/// Supplier of the raw table (one call per cache fill).
pub trait DataSource: Send + Sync {
    /// Read every record, in source order.
    fn load(&self) -> Result<Vec<SkillRecord>, LoadError>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}

impl<S> DataSource for Arc<S>
where
    S: DataSource + ?Sized,
{
    fn load(&self) -> Result<Vec<SkillRecord>, LoadError> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
