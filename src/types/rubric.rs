use crate::error::{Result, RubricError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Highest rating a criterion can receive. Zero means "not yet rated".
pub const MAX_RATING: u8 = 5;

/// Upper bound on a configured criterion weight.
pub const MAX_WEIGHT: u32 = 100;

/// Must-have gates of the Phase 1 quick assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistFlag {
    Education,
    Experience,
    Technical,
    CareerStability,
}

impl ChecklistFlag {
    pub const ALL: [ChecklistFlag; 4] = [
        ChecklistFlag::Education,
        ChecklistFlag::Experience,
        ChecklistFlag::Technical,
        ChecklistFlag::CareerStability,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            ChecklistFlag::Education => "education",
            ChecklistFlag::Experience => "experience",
            ChecklistFlag::Technical => "technical",
            ChecklistFlag::CareerStability => "careerStability",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ChecklistFlag::Education => {
                "Education: Required degree/certification (Bachelor's degree minimum)"
            }
            ChecklistFlag::Experience => "Experience: 5+ years of relevant experience",
            ChecklistFlag::Technical => "Technical Requirements: Essential skills for role",
            ChecklistFlag::CareerStability => {
                "Career Stability: No concerning job-hopping pattern"
            }
        }
    }

    pub fn from_key(key: &str) -> Result<Self> {
        match key.trim() {
            "education" => Ok(ChecklistFlag::Education),
            "experience" => Ok(ChecklistFlag::Experience),
            "technical" => Ok(ChecklistFlag::Technical),
            "careerStability" | "career_stability" => Ok(ChecklistFlag::CareerStability),
            other => Err(RubricError::InvalidField(format!(
                "unknown checklist flag '{other}'"
            ))),
        }
    }
}

/// Phase 1 checklist. All four gates are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase1Checklist {
    pub education: bool,
    pub experience: bool,
    pub technical: bool,
    pub career_stability: bool,
}

impl Phase1Checklist {
    pub fn is_checked(&self, flag: ChecklistFlag) -> bool {
        match flag {
            ChecklistFlag::Education => self.education,
            ChecklistFlag::Experience => self.experience,
            ChecklistFlag::Technical => self.technical,
            ChecklistFlag::CareerStability => self.career_stability,
        }
    }

    pub fn toggled(mut self, flag: ChecklistFlag) -> Self {
        let slot = match flag {
            ChecklistFlag::Education => &mut self.education,
            ChecklistFlag::Experience => &mut self.experience,
            ChecklistFlag::Technical => &mut self.technical,
            ChecklistFlag::CareerStability => &mut self.career_stability,
        };
        *slot = !*slot;
        self
    }

    pub fn checked_count(&self) -> usize {
        ChecklistFlag::ALL
            .iter()
            .filter(|flag| self.is_checked(**flag))
            .count()
    }
}

/// Phase 2 category grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Experience,
    Skills,
    Knowledge,
    WorkStyle,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Experience,
        Category::Skills,
        Category::Knowledge,
        Category::WorkStyle,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Category::Experience => "experience",
            Category::Skills => "skills",
            Category::Knowledge => "knowledge",
            Category::WorkStyle => "workStyle",
        }
    }

    pub const fn snake_key(self) -> &'static str {
        match self {
            Category::WorkStyle => "work_style",
            other => other.key(),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Experience => "Experience",
            Category::Skills => "Skills",
            Category::Knowledge => "Knowledge",
            Category::WorkStyle => "Work Style",
        }
    }

    pub const fn criteria(self) -> &'static [Criterion] {
        match self {
            Category::Experience => &[
                Criterion::RelevantRole,
                Criterion::FastPaced,
                Criterion::MatrixOrg,
            ],
            Category::Skills => &[
                Criterion::ProgramManagement,
                Criterion::Collaboration,
                Criterion::ProblemSolving,
                Criterion::Communication,
            ],
            Category::Knowledge => &[Criterion::Agile, Criterion::ProductDev],
            Category::WorkStyle => &[
                Criterion::SelfMotivated,
                Criterion::DetailOriented,
                Criterion::Adaptable,
            ],
        }
    }

    pub fn from_key(key: &str) -> Result<Self> {
        let key = key.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.key() == key || category.snake_key() == key)
            .ok_or_else(|| RubricError::InvalidField(format!("unknown category '{key}'")))
    }
}

/// A single rated item of the Phase 2 rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    RelevantRole,
    FastPaced,
    MatrixOrg,
    ProgramManagement,
    Collaboration,
    ProblemSolving,
    Communication,
    Agile,
    ProductDev,
    SelfMotivated,
    DetailOriented,
    Adaptable,
}

impl Criterion {
    pub const ALL: [Criterion; 12] = [
        Criterion::RelevantRole,
        Criterion::FastPaced,
        Criterion::MatrixOrg,
        Criterion::ProgramManagement,
        Criterion::Collaboration,
        Criterion::ProblemSolving,
        Criterion::Communication,
        Criterion::Agile,
        Criterion::ProductDev,
        Criterion::SelfMotivated,
        Criterion::DetailOriented,
        Criterion::Adaptable,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Criterion::RelevantRole => "relevantRole",
            Criterion::FastPaced => "fastPaced",
            Criterion::MatrixOrg => "matrixOrg",
            Criterion::ProgramManagement => "programManagement",
            Criterion::Collaboration => "collaboration",
            Criterion::ProblemSolving => "problemSolving",
            Criterion::Communication => "communication",
            Criterion::Agile => "agile",
            Criterion::ProductDev => "productDev",
            Criterion::SelfMotivated => "selfMotivated",
            Criterion::DetailOriented => "detailOriented",
            Criterion::Adaptable => "adaptable",
        }
    }

    pub const fn snake_key(self) -> &'static str {
        match self {
            Criterion::RelevantRole => "relevant_role",
            Criterion::FastPaced => "fast_paced",
            Criterion::MatrixOrg => "matrix_org",
            Criterion::ProgramManagement => "program_management",
            Criterion::ProblemSolving => "problem_solving",
            Criterion::ProductDev => "product_dev",
            Criterion::SelfMotivated => "self_motivated",
            Criterion::DetailOriented => "detail_oriented",
            other => other.key(),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Criterion::RelevantRole => "Relevant Role",
            Criterion::FastPaced => "Fast Paced",
            Criterion::MatrixOrg => "Matrix Org",
            Criterion::ProgramManagement => "Program Management",
            Criterion::Collaboration => "Collaboration",
            Criterion::ProblemSolving => "Problem Solving",
            Criterion::Communication => "Communication",
            Criterion::Agile => "Agile",
            Criterion::ProductDev => "Product Dev",
            Criterion::SelfMotivated => "Self Motivated",
            Criterion::DetailOriented => "Detail Oriented",
            Criterion::Adaptable => "Adaptable",
        }
    }

    pub const fn category(self) -> Category {
        match self {
            Criterion::RelevantRole | Criterion::FastPaced | Criterion::MatrixOrg => {
                Category::Experience
            }
            Criterion::ProgramManagement
            | Criterion::Collaboration
            | Criterion::ProblemSolving
            | Criterion::Communication => Category::Skills,
            Criterion::Agile | Criterion::ProductDev => Category::Knowledge,
            Criterion::SelfMotivated | Criterion::DetailOriented | Criterion::Adaptable => {
                Category::WorkStyle
            }
        }
    }

    pub const fn default_weight(self) -> u32 {
        match self {
            Criterion::RelevantRole | Criterion::ProgramManagement => 5,
            Criterion::FastPaced
            | Criterion::Collaboration
            | Criterion::ProblemSolving
            | Criterion::Communication => 4,
            Criterion::MatrixOrg
            | Criterion::Agile
            | Criterion::ProductDev
            | Criterion::SelfMotivated
            | Criterion::DetailOriented
            | Criterion::Adaptable => 3,
        }
    }

    pub fn from_key(key: &str) -> Result<Self> {
        let key = key.trim();
        Criterion::ALL
            .into_iter()
            .find(|criterion| criterion.key() == key || criterion.snake_key() == key)
            .ok_or_else(|| RubricError::InvalidField(format!("unknown criterion '{key}'")))
    }

    /// Resolves a criterion that must belong to `category`.
    pub fn from_key_in(category: Category, key: &str) -> Result<Self> {
        let criterion = Self::from_key(key)?;
        if criterion.category() != category {
            return Err(RubricError::InvalidField(format!(
                "criterion '{}' does not belong to category '{}'",
                criterion.key(),
                category.key()
            )));
        }
        Ok(criterion)
    }
}

/// Validated rating on the `0..=MAX_RATING` scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const UNRATED: Rating = Rating(0);
    pub const MAX: Rating = Rating(MAX_RATING);

    pub fn new(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|value| *value <= MAX_RATING)
            .map(Rating)
            .ok_or_else(|| RubricError::OutOfRange {
                value: value.to_string(),
                max: MAX_RATING,
            })
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_rated(self) -> bool {
        self.0 > 0
    }
}

/// Weight, rating and reviewer notes for one criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingCriterion {
    weight: u32,
    rating: Rating,
    notes: String,
}

impl RatingCriterion {
    pub(crate) fn with_weight(weight: u32) -> Self {
        debug_assert!(weight > 0, "criterion weight must be positive");
        Self {
            weight,
            rating: Rating::UNRATED,
            notes: String::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn rated(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}

/// Criterion-keyed weights used when a rubric is defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable(BTreeMap<Criterion, u32>);

impl Default for WeightTable {
    fn default() -> Self {
        Self(
            Criterion::ALL
                .into_iter()
                .map(|criterion| (criterion, criterion.default_weight()))
                .collect(),
        )
    }
}

impl WeightTable {
    pub fn weight(&self, criterion: Criterion) -> u32 {
        self.0
            .get(&criterion)
            .copied()
            .unwrap_or_else(|| criterion.default_weight())
    }

    pub fn with_override(mut self, criterion: Criterion, weight: u32) -> Result<Self> {
        if weight == 0 {
            return Err(RubricError::ConfigParse(format!(
                "weights.{} must be greater than 0",
                criterion.snake_key()
            )));
        }
        if weight > MAX_WEIGHT {
            return Err(RubricError::ConfigParse(format!(
                "weights.{} must be at most {MAX_WEIGHT}",
                criterion.snake_key()
            )));
        }
        self.0.insert(criterion, weight);
        Ok(self)
    }
}

/// The criteria of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RubricCategory {
    criteria: BTreeMap<Criterion, RatingCriterion>,
}

impl RubricCategory {
    pub fn criteria(&self) -> impl Iterator<Item = (Criterion, &RatingCriterion)> {
        self.criteria
            .iter()
            .map(|(criterion, data)| (*criterion, data))
    }

    pub fn get(&self, criterion: Criterion) -> Option<&RatingCriterion> {
        self.criteria.get(&criterion)
    }
}

/// Phase 2 detailed evaluation. The category and criterion set is fixed when
/// the rubric is built; only ratings and notes change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase2Rubric {
    categories: BTreeMap<Category, RubricCategory>,
}

impl Default for Phase2Rubric {
    fn default() -> Self {
        Self::new(&WeightTable::default())
    }
}

impl Phase2Rubric {
    pub fn new(weights: &WeightTable) -> Self {
        let categories = Category::ALL
            .into_iter()
            .map(|category| {
                let criteria = category
                    .criteria()
                    .iter()
                    .map(|criterion| {
                        (
                            *criterion,
                            RatingCriterion::with_weight(weights.weight(*criterion)),
                        )
                    })
                    .collect();
                (category, RubricCategory { criteria })
            })
            .collect();
        Self { categories }
    }

    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            categories: BTreeMap::new(),
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = (Category, &RubricCategory)> {
        self.categories
            .iter()
            .map(|(category, data)| (*category, data))
    }

    pub fn criteria(&self) -> impl Iterator<Item = (Criterion, &RatingCriterion)> {
        self.categories
            .values()
            .flat_map(|category| category.criteria())
    }

    pub fn get(&self, criterion: Criterion) -> Option<&RatingCriterion> {
        self.categories
            .get(&criterion.category())
            .and_then(|category| category.get(criterion))
    }

    pub fn with_rating(&self, criterion: Criterion, rating: Rating) -> Result<Self> {
        self.updated(criterion, |data| data.rating = rating)
    }

    pub fn with_notes(&self, criterion: Criterion, notes: impl Into<String>) -> Result<Self> {
        let notes = notes.into();
        self.updated(criterion, |data| data.notes = notes)
    }

    fn updated(
        &self,
        criterion: Criterion,
        apply: impl FnOnce(&mut RatingCriterion),
    ) -> Result<Self> {
        let mut next = self.clone();
        let data = next
            .categories
            .get_mut(&criterion.category())
            .and_then(|category| category.criteria.get_mut(&criterion))
            .ok_or_else(|| {
                RubricError::InvalidField(format!(
                    "criterion '{}' is not part of this rubric",
                    criterion.key()
                ))
            })?;
        apply(data);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rubric_has_four_categories_and_twelve_criteria() {
        let rubric = Phase2Rubric::default();
        assert_eq!(rubric.categories().count(), 4);
        assert_eq!(rubric.criteria().count(), 12);
        assert!(rubric
            .criteria()
            .all(|(_, data)| data.rating() == Rating::UNRATED && data.notes().is_empty()));
    }

    #[test]
    fn default_weights_match_rubric_definition() {
        let rubric = Phase2Rubric::default();
        let weight = |criterion: Criterion| rubric.get(criterion).map(RatingCriterion::weight);
        assert_eq!(weight(Criterion::RelevantRole), Some(5));
        assert_eq!(weight(Criterion::Communication), Some(4));
        assert_eq!(weight(Criterion::Adaptable), Some(3));
        let table = WeightTable::default();
        let total: u32 = Criterion::ALL.into_iter().map(|c| table.weight(c)).sum();
        assert_eq!(total, 44);
    }

    #[test]
    fn keys_resolve_in_camel_and_snake_case() {
        assert_eq!(
            ChecklistFlag::from_key("careerStability").expect("camel key"),
            ChecklistFlag::CareerStability
        );
        assert_eq!(
            ChecklistFlag::from_key("career_stability").expect("snake key"),
            ChecklistFlag::CareerStability
        );
        assert_eq!(
            Category::from_key("work_style").expect("snake key"),
            Category::WorkStyle
        );
        assert_eq!(
            Criterion::from_key("programManagement").expect("camel key"),
            Criterion::ProgramManagement
        );
    }

    #[test]
    fn criterion_from_other_category_is_rejected() {
        let err = Criterion::from_key_in(Category::Skills, "agile").expect_err("wrong category");
        assert!(matches!(err, RubricError::InvalidField(_)));
        assert!(err.to_string().contains("does not belong"));
    }

    #[test]
    fn rating_bounds_are_enforced() {
        assert_eq!(Rating::new(0).expect("zero is valid"), Rating::UNRATED);
        assert_eq!(Rating::new(5).expect("five is valid"), Rating::MAX);
        assert!(matches!(
            Rating::new(6),
            Err(RubricError::OutOfRange { value, max: 5 }) if value == "6"
        ));
        assert!(matches!(
            Rating::new(-1),
            Err(RubricError::OutOfRange { value, max: 5 }) if value == "-1"
        ));
    }

    #[test]
    fn weight_override_rejects_zero() {
        let err = WeightTable::default()
            .with_override(Criterion::Agile, 0)
            .expect_err("zero weight must fail");
        assert!(err.to_string().contains("weights.agile must be greater than 0"));
    }

    #[test]
    fn weight_override_rejects_values_above_cap() {
        let table = WeightTable::default()
            .with_override(Criterion::Agile, MAX_WEIGHT)
            .expect("cap itself is allowed");
        assert_eq!(table.weight(Criterion::Agile), MAX_WEIGHT);

        let err = table
            .with_override(Criterion::FastPaced, u32::MAX)
            .expect_err("huge weight must fail");
        assert!(matches!(err, RubricError::ConfigParse(_)));
        assert!(err.to_string().contains("weights.fast_paced must be at most 100"));
    }

    #[test]
    fn with_rating_leaves_original_untouched() {
        let rubric = Phase2Rubric::default();
        let rated = rubric
            .with_rating(Criterion::Agile, Rating::MAX)
            .expect("criterion exists");
        assert_eq!(
            rubric.get(Criterion::Agile).map(RatingCriterion::rating),
            Some(Rating::UNRATED)
        );
        assert_eq!(
            rated.get(Criterion::Agile).map(RatingCriterion::rating),
            Some(Rating::MAX)
        );
    }

    #[test]
    fn toggled_flips_only_the_named_gate() {
        let checklist = Phase1Checklist::default().toggled(ChecklistFlag::Technical);
        assert!(checklist.technical);
        assert_eq!(checklist.checked_count(), 1);
        assert_eq!(checklist.toggled(ChecklistFlag::Technical).checked_count(), 0);
    }
}
