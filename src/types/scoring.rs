use crate::types::rubric::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Score = f64;

/// Status label derived from the Phase 2 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Shortlisted,
    #[serde(rename = "In Review")]
    InReview,
    Rejected,
}

impl Classification {
    pub const fn label(self) -> &'static str {
        match self {
            Classification::Shortlisted => "Shortlisted",
            Classification::InReview => "In Review",
            Classification::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower bounds of the classification bands, highest first.
///
/// Scores at or above `in_review` and at or above `borderline` both land in
/// [`Classification::InReview`]; the two bands are kept separate so the split
/// can be given its own outcome without touching callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    pub shortlisted: Score,
    pub in_review: Score,
    pub borderline: Score,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            shortlisted: 80.0,
            in_review: 60.0,
            borderline: 40.0,
        }
    }
}

/// Weighted percentage of a single category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub label: String,
    pub total_weight: u32,
    pub score: Score,
}

/// Output of one evaluation. Recomputed on demand, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub phase1_score: u8,
    pub phase2_score: Score,
    pub classification: Classification,
}
