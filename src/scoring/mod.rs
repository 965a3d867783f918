pub mod classify;
pub mod phase1;
pub mod phase2;

pub use classify::{classify, classify_with};
pub use phase1::compute_phase1_score;
pub use phase2::{category_scores, compute_phase2_score, weighted_percentage};

use crate::types::rubric::{Phase1Checklist, Phase2Rubric};
use crate::types::scoring::{ClassificationThresholds, ScoreResult};

pub fn evaluate(
    checklist: &Phase1Checklist,
    rubric: &Phase2Rubric,
    thresholds: &ClassificationThresholds,
) -> ScoreResult {
    let phase1_score = compute_phase1_score(checklist);
    let phase2_score = compute_phase2_score(rubric);
    let classification = classify_with(phase2_score, thresholds);
    tracing::debug!(
        phase1_score,
        phase2_score,
        classification = classification.label(),
        "evaluated rubric"
    );

    ScoreResult {
        phase1_score,
        phase2_score,
        classification,
    }
}
