use crate::types::scoring::{Classification, ClassificationThresholds, Score};

/// Classifies against the default bands (80 / 60 / 40).
pub fn classify(phase2_score: Score) -> Classification {
    classify_with(phase2_score, &ClassificationThresholds::default())
}

/// Bands are evaluated top-down on the unrounded score; first match wins.
#[allow(clippy::if_same_then_else)]
pub fn classify_with(phase2_score: Score, thresholds: &ClassificationThresholds) -> Classification {
    if phase2_score >= thresholds.shortlisted {
        Classification::Shortlisted
    } else if phase2_score >= thresholds.in_review {
        Classification::InReview
    } else if phase2_score >= thresholds.borderline {
        Classification::InReview
    } else {
        Classification::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_follows_default_bands() {
        assert_eq!(classify(100.0), Classification::Shortlisted);
        assert_eq!(classify(85.0), Classification::Shortlisted);
        assert_eq!(classify(80.0), Classification::Shortlisted);
        assert_eq!(classify(79.999), Classification::InReview);
        assert_eq!(classify(60.0), Classification::InReview);
        assert_eq!(classify(59.999), Classification::InReview);
        assert_eq!(classify(40.0), Classification::InReview);
        assert_eq!(classify(39.999), Classification::Rejected);
        assert_eq!(classify(0.0), Classification::Rejected);
    }

    #[test]
    fn classify_with_uses_configured_bands() {
        let thresholds = ClassificationThresholds {
            shortlisted: 90.0,
            in_review: 70.0,
            borderline: 50.0,
        };
        assert_eq!(classify_with(85.0, &thresholds), Classification::InReview);
        assert_eq!(classify_with(90.0, &thresholds), Classification::Shortlisted);
        assert_eq!(classify_with(49.9, &thresholds), Classification::Rejected);
    }
}
