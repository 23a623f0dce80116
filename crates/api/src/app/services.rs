use std::sync::Arc;

use chrono::{DateTime, Utc};

use halflife_core::{FilterOptions, Selection, SkillTable};
use halflife_infra::analytics::{ChartId, ChartSpec, Dashboard};
use halflife_infra::{CsvDataSource, DataSource, LoadError, TableCache};

use crate::app::dto::SelectionRequest;

/// Shared, read-only application state: the cached working table.
pub struct AppServices {
    cache: TableCache<Arc<dyn DataSource>>,
}

impl AppServices {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            cache: TableCache::new(source),
        }
    }

    pub fn from_csv(path: impl Into<std::path::PathBuf>, delimiter: u8) -> Self {
        Self::new(Arc::new(CsvDataSource::new(path).with_delimiter(delimiter)))
    }

    pub fn table(&self) -> Result<Arc<SkillTable>, LoadError> {
        self.cache.get()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.cache.loaded_at()
    }

    pub fn source_description(&self) -> String {
        self.cache.source().describe()
    }

    pub fn filter_options(&self) -> Result<FilterOptions, LoadError> {
        let table = self.table()?;
        Ok(FilterOptions::from_table(&table))
    }

    /// Dashboard for a request; unset dimensions default to every value present.
    pub fn dashboard(&self, request: SelectionRequest) -> Result<Dashboard, LoadError> {
        let table = self.table()?;
        let selection = request.into_selection(&table);
        Ok(Dashboard::build(&table, &selection, Utc::now()))
    }

    /// One chart for the default (everything) selection.
    pub fn chart(&self, id: ChartId) -> Result<ChartSpec, LoadError> {
        let table = self.table()?;
        let filtered = table.filter(&Selection::all(&table));
        Ok(ChartSpec::build(id, &filtered))
    }
}
