use halflife_core::SkillRecord;

use super::{DataSource, LoadError};

/// In-memory data source for tests/dev.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSource {
    records: Vec<SkillRecord>,
}

impl InMemoryDataSource {
    pub fn new(records: Vec<SkillRecord>) -> Self {
        Self { records }
    }
}

impl DataSource for InMemoryDataSource {
    fn load(&self) -> Result<Vec<SkillRecord>, LoadError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("memory:{} rows", self.records.len())
    }
}
