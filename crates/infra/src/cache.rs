//! Process-wide, load-once cache of the derived working table.
//!
//! Lifecycle: empty until first access, filled by the first successful load,
//! never invalidated. Failed loads are not cached, so a later access retries.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use halflife_core::SkillTable;

use crate::data_source::{DataSource, LoadError};

#[derive(Debug, Clone)]
struct Loaded {
    table: Arc<SkillTable>,
    loaded_at: DateTime<Utc>,
}

/// Memoized `source -> derive` result shared read-only by every request.
#[derive(Debug)]
pub struct TableCache<S>
where
    S: DataSource,
{
    source: S,
    inner: RwLock<Option<Loaded>>,
}

impl<S> TableCache<S>
where
    S: DataSource,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            inner: RwLock::new(None),
        }
    }

    fn cached(&self) -> Option<Loaded> {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(_) => None,
        }
    }

    /// Return the cached table, loading and deriving it on first access.
    pub fn get(&self) -> Result<Arc<SkillTable>, LoadError> {
        if let Some(loaded) = self.cached() {
            return Ok(loaded.table);
        }

        let origin = self.source.describe();
        let records = self.source.load().inspect_err(|e| {
            tracing::warn!(source = %origin, "dataset load failed: {e}");
        })?;
        let table = SkillTable::derive(records).inspect_err(|e| {
            tracing::warn!(source = %origin, "dataset derivation failed: {e}");
        })?;

        let loaded = Loaded {
            table: Arc::new(table),
            loaded_at: Utc::now(),
        };

        // Concurrent first accesses may both load; the first stored value wins.
        let table = match self.inner.write() {
            Ok(mut guard) => guard.get_or_insert(loaded).table.clone(),
            Err(_) => loaded.table,
        };

        tracing::info!(source = %origin, rows = table.len(), "dataset loaded");
        Ok(table)
    }

    pub fn is_loaded(&self) -> bool {
        self.cached().is_some()
    }

    /// When the cached table was loaded, if it has been.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.cached().map(|l| l.loaded_at)
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
