//! Phased resume scoring.
//!
//! Phase 1 is a four-gate pass/fail checklist, Phase 2 a weighted rubric of
//! 0-5 ratings. [`scoring::evaluate`] turns both into a [`ScoreResult`] and
//! [`review::apply_to_candidate`] snapshots it onto a candidate record.

pub mod config;
pub mod error;
pub mod report;
pub mod review;
pub mod rubric;
pub mod scoring;
pub mod telemetry;
pub mod types;

pub use error::{Result, RubricError};
pub use review::ReviewData;
pub use types::candidate::{Candidate, CandidateStatus};
pub use types::rubric::{
    Category, ChecklistFlag, Criterion, Phase1Checklist, Phase2Rubric, Rating, RatingCriterion,
    RubricCategory, WeightTable, MAX_RATING,
};
pub use types::scoring::{Classification, ClassificationThresholds, ScoreResult};
