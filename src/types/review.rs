use crate::error::{Result, RubricError};
use crate::types::candidate::Candidate;
use crate::types::rubric::MAX_RATING;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Warning signs a reviewer can tick during Phase 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedFlag {
    UnexplainedGaps,
    DecliningResponsibility,
    LackingAchievements,
    ResumeInconsistencies,
    CultureMisalignment,
}

impl RedFlag {
    pub const ALL: [RedFlag; 5] = [
        RedFlag::UnexplainedGaps,
        RedFlag::DecliningResponsibility,
        RedFlag::LackingAchievements,
        RedFlag::ResumeInconsistencies,
        RedFlag::CultureMisalignment,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            RedFlag::UnexplainedGaps => "unexplained_gaps",
            RedFlag::DecliningResponsibility => "declining_responsibility",
            RedFlag::LackingAchievements => "lacking_achievements",
            RedFlag::ResumeInconsistencies => "resume_inconsistencies",
            RedFlag::CultureMisalignment => "culture_misalignment",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RedFlag::UnexplainedGaps => "Unexplained employment gaps",
            RedFlag::DecliningResponsibility => "Declining responsibility in career progression",
            RedFlag::LackingAchievements => "Lack of specific achievements/results",
            RedFlag::ResumeInconsistencies => "Inconsistencies or errors in resume",
            RedFlag::CultureMisalignment => "Misalignment with company culture/values",
        }
    }

    pub fn from_key(key: &str) -> Result<Self> {
        let key = key.trim();
        RedFlag::ALL
            .into_iter()
            .find(|flag| flag.key() == key)
            .ok_or_else(|| RubricError::InvalidField(format!("unknown red flag '{key}'")))
    }
}

/// Strengths a reviewer can tick during Phase 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GreenFlag {
    QuantifiableAchievements,
    ClearProgression,
    LeadershipInitiative,
    IndustryExperience,
    AdditionalCredentials,
}

impl GreenFlag {
    pub const ALL: [GreenFlag; 5] = [
        GreenFlag::QuantifiableAchievements,
        GreenFlag::ClearProgression,
        GreenFlag::LeadershipInitiative,
        GreenFlag::IndustryExperience,
        GreenFlag::AdditionalCredentials,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            GreenFlag::QuantifiableAchievements => "quantifiable_achievements",
            GreenFlag::ClearProgression => "clear_progression",
            GreenFlag::LeadershipInitiative => "leadership_initiative",
            GreenFlag::IndustryExperience => "industry_experience",
            GreenFlag::AdditionalCredentials => "additional_credentials",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            GreenFlag::QuantifiableAchievements => "Quantifiable achievements",
            GreenFlag::ClearProgression => "Clear career progression",
            GreenFlag::LeadershipInitiative => "Evidence of leadership/initiative",
            GreenFlag::IndustryExperience => "Relevant industry experience",
            GreenFlag::AdditionalCredentials => "Additional valuable skills/certifications",
        }
    }

    pub fn from_key(key: &str) -> Result<Self> {
        let key = key.trim();
        GreenFlag::ALL
            .into_iter()
            .find(|flag| flag.key() == key)
            .ok_or_else(|| RubricError::InvalidField(format!("unknown green flag '{key}'")))
    }
}

/// On-disk form of a review. Keys stay as strings so that unknown names
/// reach the rubric validators instead of failing inside serde.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewDocument {
    #[serde(default)]
    pub interview_notes: String,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub green_flags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<Candidate>,
    #[serde(default)]
    pub phase1: BTreeMap<String, bool>,
    #[serde(default)]
    pub phase2: BTreeMap<String, BTreeMap<String, CriterionEntry>>,
}

/// Rating is kept as a raw TOML value so that floats and strings are
/// reported as out-of-range ratings rather than as parse failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionEntry {
    #[serde(default = "unrated")]
    pub rating: toml::Value,
    #[serde(default)]
    pub notes: String,
}

fn unrated() -> toml::Value {
    toml::Value::Integer(0)
}

impl Default for CriterionEntry {
    fn default() -> Self {
        Self {
            rating: unrated(),
            notes: String::new(),
        }
    }
}

impl CriterionEntry {
    pub fn new(rating: u8, notes: impl Into<String>) -> Self {
        Self {
            rating: toml::Value::Integer(i64::from(rating)),
            notes: notes.into(),
        }
    }

    pub fn integer_rating(&self) -> Result<i64> {
        match &self.rating {
            toml::Value::Integer(value) => Ok(*value),
            other => Err(RubricError::OutOfRange {
                value: other.to_string(),
                max: MAX_RATING,
            }),
        }
    }
}
