//! `halflife-core` — skill dataset domain building blocks.
//!
//! This crate contains **pure domain** logic (no IO): the skill record model,
//! score banding, the immutable working table and the filter engine.

pub mod band;
pub mod error;
pub mod record;
pub mod selection;
pub mod table;

pub use band::Band;
pub use error::{DomainError, DomainResult, RowError};
pub use record::{DerivedRecord, SkillRecord};
pub use selection::{FilterOptions, Selection};
pub use table::SkillTable;
