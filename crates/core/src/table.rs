//! The immutable working table and the filter engine.

use serde::Serialize;

use crate::error::RowError;
use crate::record::{DerivedRecord, SkillRecord};
use crate::selection::Selection;

/// Ordered, immutable collection of derived skill records.
///
/// Built once by [`SkillTable::derive`]; filtering produces a new table and
/// never mutates the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SkillTable {
    rows: Vec<DerivedRecord>,
}

impl SkillTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Run feature derivation over raw records.
    ///
    /// Fails on the first invalid record; the error carries its 1-based row.
    pub fn derive(records: impl IntoIterator<Item = SkillRecord>) -> Result<Self, RowError> {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| {
                record
                    .derive()
                    .map_err(|source| RowError { row: idx + 1, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[DerivedRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &DerivedRecord> {
        self.rows.iter()
    }

    /// Stable filter: keeps rows whose category and industry are both selected.
    pub fn filter(&self, selection: &Selection) -> SkillTable {
        let rows = self
            .rows
            .iter()
            .filter(|row| selection.matches(row))
            .cloned()
            .collect();
        SkillTable { rows }
    }
}

impl<'a> IntoIterator for &'a SkillTable {
    type Item = &'a DerivedRecord;
    type IntoIter = core::slice::Iter<'a, DerivedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
