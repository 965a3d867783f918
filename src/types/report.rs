use crate::types::candidate::Candidate;
use crate::types::rubric::{Category, ChecklistFlag, Criterion};
use crate::types::scoring::{CategoryScore, ScoreResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateStatus {
    pub flag: ChecklistFlag,
    pub label: String,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionDetail {
    pub category: Category,
    pub criterion: Criterion,
    pub label: String,
    pub weight: u32,
    pub rating: u8,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    #[serde(flatten)]
    pub result: ScoreResult,
    pub gates: Vec<GateStatus>,
    pub categories: Vec<CategoryScore>,
    pub criteria: Vec<CriterionDetail>,
    pub unrated: Vec<Criterion>,
    pub red_flags: Vec<String>,
    pub green_flags: Vec<String>,
    pub interview_notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<Candidate>,
}

impl EvaluationReport {
    pub fn is_complete(&self) -> bool {
        self.unrated.is_empty()
    }
}
