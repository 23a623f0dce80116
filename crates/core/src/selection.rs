//! User filter state: which skill categories and industries are in scope.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::record::DerivedRecord;
use crate::table::SkillTable;

/// Immutable filter configuration passed explicitly into every computation.
///
/// An empty set selects nothing; it does **not** mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    categories: BTreeSet<String>,
    industries: BTreeSet<String>,
}

impl Selection {
    pub fn new<C, I>(categories: C, industries: I) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            industries: industries.into_iter().map(Into::into).collect(),
        }
    }

    /// Default selection: every category and industry present in `table`.
    pub fn all(table: &SkillTable) -> Self {
        let options = FilterOptions::from_table(table);
        Self::new(options.categories, options.industries)
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn industries(&self) -> &BTreeSet<String> {
        &self.industries
    }

    /// Replace the category set, keeping industries.
    pub fn with_categories<C>(self, categories: C) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            industries: self.industries,
        }
    }

    /// Replace the industry set, keeping categories.
    pub fn with_industries<I>(self, industries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            categories: self.categories,
            industries: industries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, row: &DerivedRecord) -> bool {
        self.categories.contains(row.skill_category()) && self.industries.contains(row.industry())
    }
}

/// Choices offered by the two multi-selects (sorted, distinct).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub industries: Vec<String>,
}

impl FilterOptions {
    pub fn from_table(table: &SkillTable) -> Self {
        let categories: BTreeSet<&str> = table.iter().map(DerivedRecord::skill_category).collect();
        let industries: BTreeSet<&str> = table.iter().map(DerivedRecord::industry).collect();

        Self {
            categories: categories.into_iter().map(str::to_string).collect(),
            industries: industries.into_iter().map(str::to_string).collect(),
        }
    }
}
