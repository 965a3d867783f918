use crate::error::{Result, RubricError};
use crate::rubric::{create_default_phase1, create_phase2, set_notes, set_rating, toggle_flag};
use crate::scoring;
use crate::types::candidate::{Candidate, CandidateStatus};
use crate::types::report::{CriterionDetail, EvaluationReport, GateStatus};
use crate::types::review::{CriterionEntry, GreenFlag, RedFlag, ReviewDocument};
use crate::types::rubric::{Category, ChecklistFlag, Criterion, Phase1Checklist, Phase2Rubric, WeightTable};
use crate::types::scoring::{ClassificationThresholds, ScoreResult};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::path::Path;

/// Everything a reviewer records for one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewData {
    pub phase1: Phase1Checklist,
    pub phase2: Phase2Rubric,
    pub red_flags: BTreeSet<RedFlag>,
    pub green_flags: BTreeSet<GreenFlag>,
    pub interview_notes: String,
}

impl Default for ReviewData {
    fn default() -> Self {
        Self::new(&WeightTable::default())
    }
}

impl ReviewData {
    pub fn new(weights: &WeightTable) -> Self {
        Self {
            phase1: create_default_phase1(),
            phase2: create_phase2(weights),
            red_flags: BTreeSet::new(),
            green_flags: BTreeSet::new(),
            interview_notes: String::new(),
        }
    }

    pub fn evaluate(&self, thresholds: &ClassificationThresholds) -> ScoreResult {
        scoring::evaluate(&self.phase1, &self.phase2, thresholds)
    }

    pub fn toggle_red_flag(&self, key: &str) -> Result<Self> {
        let flag = RedFlag::from_key(key)?;
        let mut next = self.clone();
        if !next.red_flags.remove(&flag) {
            next.red_flags.insert(flag);
        }
        Ok(next)
    }

    pub fn toggle_green_flag(&self, key: &str) -> Result<Self> {
        let flag = GreenFlag::from_key(key)?;
        let mut next = self.clone();
        if !next.green_flags.remove(&flag) {
            next.green_flags.insert(flag);
        }
        Ok(next)
    }

    /// Criteria still at rating 0.
    pub fn unrated(&self) -> Vec<Criterion> {
        self.phase2
            .criteria()
            .filter(|(_, data)| !data.rating().is_rated())
            .map(|(criterion, _)| criterion)
            .collect()
    }

    /// Replays a document through the rubric operations so that bad keys and
    /// ratings fail the same way they would from an interactive editor.
    pub fn from_document(doc: &ReviewDocument, weights: &WeightTable) -> Result<Self> {
        let mut review = Self::new(weights);

        let mut gates = BTreeSet::new();
        for (key, checked) in &doc.phase1 {
            let flag = ChecklistFlag::from_key(key)?;
            if !gates.insert(flag) {
                return Err(RubricError::InvalidField(format!(
                    "phase1 lists '{}' more than once",
                    flag.key()
                )));
            }
            if *checked != review.phase1.is_checked(flag) {
                review.phase1 = toggle_flag(&review.phase1, key)?;
            }
        }

        let mut seen = BTreeSet::new();
        for (category, criteria) in &doc.phase2 {
            let resolved_category = Category::from_key(category)?;
            for (criterion, entry) in criteria {
                let resolved = Criterion::from_key_in(resolved_category, criterion)?;
                if !seen.insert(resolved) {
                    return Err(RubricError::InvalidField(format!(
                        "phase2 lists '{}.{}' more than once",
                        resolved_category.snake_key(),
                        resolved.snake_key()
                    )));
                }
                review.phase2 = entry
                    .integer_rating()
                    .and_then(|rating| set_rating(&review.phase2, category, criterion, rating))
                    .inspect_err(|err| {
                        tracing::warn!(
                            category = category.as_str(),
                            criterion = criterion.as_str(),
                            %err,
                            "rejected rating"
                        )
                    })?;
                review.phase2 = set_notes(&review.phase2, category, criterion, &entry.notes)?;
            }
        }

        for key in &doc.red_flags {
            review.red_flags.insert(RedFlag::from_key(key)?);
        }
        for key in &doc.green_flags {
            review.green_flags.insert(GreenFlag::from_key(key)?);
        }
        review.interview_notes = doc.interview_notes.clone();

        Ok(review)
    }

    pub fn to_document(&self, candidate: Option<Candidate>) -> ReviewDocument {
        let mut doc = ReviewDocument {
            interview_notes: self.interview_notes.clone(),
            red_flags: self.red_flags.iter().map(|flag| flag.key().to_string()).collect(),
            green_flags: self
                .green_flags
                .iter()
                .map(|flag| flag.key().to_string())
                .collect(),
            candidate,
            ..ReviewDocument::default()
        };

        for flag in ChecklistFlag::ALL {
            let key = match flag {
                ChecklistFlag::CareerStability => "career_stability",
                other => other.key(),
            };
            doc.phase1.insert(key.to_string(), self.phase1.is_checked(flag));
        }

        for (category, data) in self.phase2.categories() {
            let entries = doc
                .phase2
                .entry(category.snake_key().to_string())
                .or_default();
            for (criterion, criterion_data) in data.criteria() {
                entries.insert(
                    criterion.snake_key().to_string(),
                    CriterionEntry::new(criterion_data.rating().value(), criterion_data.notes()),
                );
            }
        }

        doc
    }
}

/// Snapshot of a finished review onto the candidate record.
pub fn apply_to_candidate(
    candidate: &Candidate,
    review: &ReviewData,
    result: &ScoreResult,
    now: DateTime<Utc>,
) -> Candidate {
    tracing::info!(
        candidate = %candidate.id,
        classification = result.classification.label(),
        "saving review snapshot"
    );
    Candidate {
        phase1_score: result.phase1_score,
        phase2_score: result.phase2_score,
        status: CandidateStatus::from(result.classification),
        notes: review.interview_notes.clone(),
        updated_at: now,
        ..candidate.clone()
    }
}

pub fn parse_review(
    content: &str,
    weights: &WeightTable,
) -> Result<(ReviewData, Option<Candidate>)> {
    let doc: ReviewDocument = toml::from_str(content)?;
    let review = ReviewData::from_document(&doc, weights)?;
    Ok((review, doc.candidate))
}

pub fn load_review(path: &Path, weights: &WeightTable) -> Result<(ReviewData, Option<Candidate>)> {
    if !path.exists() {
        return Err(RubricError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loaded review document");
    parse_review(&content, weights)
}

/// Builds the full report. When a candidate is given, it is returned with the
/// review applied as of `now`.
pub fn build_report(
    review: &ReviewData,
    thresholds: &ClassificationThresholds,
    candidate: Option<&Candidate>,
    now: DateTime<Utc>,
) -> EvaluationReport {
    let result = review.evaluate(thresholds);

    let gates = ChecklistFlag::ALL
        .into_iter()
        .map(|flag| GateStatus {
            flag,
            label: flag.label().to_string(),
            passed: review.phase1.is_checked(flag),
        })
        .collect();

    let criteria = review
        .phase2
        .criteria()
        .map(|(criterion, data)| CriterionDetail {
            category: criterion.category(),
            criterion,
            label: criterion.label().to_string(),
            weight: data.weight(),
            rating: data.rating().value(),
            notes: data.notes().to_string(),
        })
        .collect();

    EvaluationReport {
        result,
        gates,
        categories: scoring::category_scores(&review.phase2),
        criteria,
        unrated: review.unrated(),
        red_flags: review
            .red_flags
            .iter()
            .map(|flag| flag.label().to_string())
            .collect(),
        green_flags: review
            .green_flags
            .iter()
            .map(|flag| flag.label().to_string())
            .collect(),
        interview_notes: review.interview_notes.clone(),
        candidate: candidate.map(|candidate| apply_to_candidate(candidate, review, &result, now)),
    }
}
