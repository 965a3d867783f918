use crate::types::rubric::{Phase2Rubric, RatingCriterion, MAX_RATING};
use crate::types::scoring::{CategoryScore, Score};

/// Scales a weighted average on the rating scale onto 0..=100.
pub const PERCENT_MULTIPLIER: Score = 100.0 / MAX_RATING as Score;

/// Weighted average of the ratings, expressed as a percentage.
/// Returns 0 when the total weight is zero.
pub fn weighted_percentage<'a>(criteria: impl IntoIterator<Item = &'a RatingCriterion>) -> Score {
    let mut total_weight: Score = 0.0;
    let mut total_weighted_rating: Score = 0.0;
    for criterion in criteria {
        let weight = Score::from(criterion.weight());
        total_weight += weight;
        total_weighted_rating += weight * Score::from(criterion.rating().value());
    }

    if total_weight == 0.0 {
        return 0.0;
    }
    (total_weighted_rating / total_weight) * PERCENT_MULTIPLIER
}

pub fn compute_phase2_score(rubric: &Phase2Rubric) -> Score {
    weighted_percentage(rubric.criteria().map(|(_, data)| data))
}

pub fn category_scores(rubric: &Phase2Rubric) -> Vec<CategoryScore> {
    rubric
        .categories()
        .map(|(category, data)| CategoryScore {
            category,
            label: category.label().to_string(),
            total_weight: data.criteria().map(|(_, criterion)| criterion.weight()).sum(),
            score: weighted_percentage(data.criteria().map(|(_, criterion)| criterion)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::rubric::{Criterion, Rating, WeightTable};

    fn rated(weight: u32, rating: i64) -> RatingCriterion {
        RatingCriterion::with_weight(weight).rated(Rating::new(rating).expect("valid rating"))
    }

    fn uniform(rubric: &Phase2Rubric, rating: Rating) -> Phase2Rubric {
        Criterion::ALL.into_iter().fold(rubric.clone(), |acc, criterion| {
            acc.with_rating(criterion, rating)
                .expect("criterion should exist")
        })
    }

    #[test]
    fn weighted_average_of_two_criteria() {
        let criteria = [rated(5, 4), rated(3, 2)];
        assert_eq!(weighted_percentage(&criteria), 65.0);
    }

    #[test]
    fn empty_rubric_scores_zero() {
        assert_eq!(compute_phase2_score(&Phase2Rubric::empty()), 0.0);
        assert_eq!(weighted_percentage(std::iter::empty::<&RatingCriterion>()), 0.0);
    }

    #[test]
    fn unrated_rubric_scores_zero() {
        assert_eq!(compute_phase2_score(&Phase2Rubric::default()), 0.0);
    }

    #[test]
    fn max_ratings_score_hundred_regardless_of_weights() {
        let skewed = WeightTable::default()
            .with_override(Criterion::RelevantRole, 40)
            .and_then(|weights| weights.with_override(Criterion::Agile, 1))
            .expect("positive weights");
        for rubric in [Phase2Rubric::default(), Phase2Rubric::new(&skewed)] {
            assert_eq!(compute_phase2_score(&uniform(&rubric, Rating::MAX)), 100.0);
        }
    }

    #[test]
    fn score_stays_within_percentage_range() {
        let mut rubric = Phase2Rubric::default();
        for (index, criterion) in Criterion::ALL.into_iter().enumerate() {
            let rating = Rating::new((index % 6) as i64).expect("valid rating");
            rubric = rubric
                .with_rating(criterion, rating)
                .expect("criterion should exist");
            let score = compute_phase2_score(&rubric);
            assert!((0.0..=100.0).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let rubric = Phase2Rubric::default()
            .with_rating(Criterion::Communication, Rating::MAX)
            .and_then(|rubric| rubric.with_rating(Criterion::Agile, Rating::UNRATED))
            .expect("criteria should exist");
        assert_eq!(compute_phase2_score(&rubric), compute_phase2_score(&rubric));
    }

    #[test]
    fn category_scores_cover_every_category() {
        let rubric = Phase2Rubric::default()
            .with_rating(Criterion::Agile, Rating::MAX)
            .expect("criterion should exist");
        let scores = category_scores(&rubric);
        assert_eq!(scores.len(), 4);

        let knowledge = scores
            .iter()
            .find(|score| score.label == "Knowledge")
            .expect("knowledge category present");
        assert_eq!(knowledge.total_weight, 6);
        assert_eq!(knowledge.score, 50.0);
        assert!(scores
            .iter()
            .filter(|score| score.label != "Knowledge")
            .all(|score| score.score == 0.0));
    }
}
