use crate::types::scoring::{Classification, Score};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline status stored on a candidate record. A superset of
/// [`Classification`]: `New` and `Hired` are set outside the scoring engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateStatus {
    #[default]
    New,
    #[serde(rename = "In Review")]
    InReview,
    Shortlisted,
    Rejected,
    Hired,
}

impl CandidateStatus {
    pub const fn label(self) -> &'static str {
        match self {
            CandidateStatus::New => "New",
            CandidateStatus::InReview => "In Review",
            CandidateStatus::Shortlisted => "Shortlisted",
            CandidateStatus::Rejected => "Rejected",
            CandidateStatus::Hired => "Hired",
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Classification> for CandidateStatus {
    fn from(value: Classification) -> Self {
        match value {
            Classification::Shortlisted => CandidateStatus::Shortlisted,
            Classification::InReview => CandidateStatus::InReview,
            Classification::Rejected => CandidateStatus::Rejected,
        }
    }
}

/// Candidate record owned by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub resume_url: String,
    #[serde(default)]
    pub status: CandidateStatus,
    #[serde(default)]
    pub phase1_score: u8,
    #[serde(default)]
    pub phase2_score: Score,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            resume_url: String::new(),
            status: CandidateStatus::New,
            phase1_score: 0,
            phase2_score: 0.0,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
