//! String-keyed editing operations over the rubric state.
//!
//! Every operation takes the current state by reference and returns the next
//! state. On error the input is left as it was.

use crate::error::Result;
use crate::types::rubric::{
    Category, ChecklistFlag, Criterion, Phase1Checklist, Phase2Rubric, Rating, WeightTable,
};

pub fn create_default_phase1() -> Phase1Checklist {
    Phase1Checklist::default()
}

pub fn create_default_phase2() -> Phase2Rubric {
    Phase2Rubric::default()
}

/// Builds an unrated rubric with configured weights.
pub fn create_phase2(weights: &WeightTable) -> Phase2Rubric {
    Phase2Rubric::new(weights)
}

pub fn toggle_flag(checklist: &Phase1Checklist, flag_name: &str) -> Result<Phase1Checklist> {
    let flag = ChecklistFlag::from_key(flag_name)?;
    tracing::debug!(flag = flag.key(), "toggling checklist flag");
    Ok(checklist.toggled(flag))
}

pub fn set_rating(
    rubric: &Phase2Rubric,
    category: &str,
    criterion: &str,
    value: i64,
) -> Result<Phase2Rubric> {
    let criterion = resolve(category, criterion)?;
    let rating = Rating::new(value)?;
    tracing::debug!(criterion = criterion.key(), rating = value, "setting rating");
    rubric.with_rating(criterion, rating)
}

pub fn set_notes(
    rubric: &Phase2Rubric,
    category: &str,
    criterion: &str,
    text: &str,
) -> Result<Phase2Rubric> {
    let criterion = resolve(category, criterion)?;
    rubric.with_notes(criterion, text)
}

fn resolve(category: &str, criterion: &str) -> Result<Criterion> {
    let category = Category::from_key(category)?;
    Criterion::from_key_in(category, criterion)
}
