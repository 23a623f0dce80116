//! Fixed-threshold banding of 0..=100 scores.
//!
//! Boundaries are `[0, 40, 70, 100]`:
//! - `Low`    = `[0, 40]` (the lowest bin includes 0)
//! - `Medium` = `(40, 70]`
//! - `High`   = `(70, 100]`
//!
//! Anything outside `[0, 100]` (or non-finite) is rejected rather than left
//! unbanded.

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// Lower bound of the scoring domain (inclusive).
pub const SCORE_MIN: f64 = 0.0;
/// Upper bound of the scoring domain (inclusive).
pub const SCORE_MAX: f64 = 100.0;
/// Upper edge of the `Low` bin.
pub const LOW_UPPER: f64 = 40.0;
/// Upper edge of the `Medium` bin.
pub const MEDIUM_UPPER: f64 = 70.0;

/// Categorical bucket derived from a continuous score.
///
/// Variant order is the display order (`Low < Medium < High`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    /// Band a score, failing for values outside the declared domain.
    ///
    /// `field` only feeds the error message.
    pub fn from_score(field: &str, score: f64) -> DomainResult<Self> {
        if !score.is_finite() || !(SCORE_MIN..=SCORE_MAX).contains(&score) {
            return Err(DomainError::validation(format!(
                "{field} must be within {SCORE_MIN}..={SCORE_MAX} (got {score})"
            )));
        }

        Ok(if score <= LOW_UPPER {
            Band::Low
        } else if score <= MEDIUM_UPPER {
            Band::Medium
        } else {
            Band::High
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Low => "Low",
            Band::Medium => "Medium",
            Band::High => "High",
        }
    }
}

impl core::fmt::Display for Band {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
