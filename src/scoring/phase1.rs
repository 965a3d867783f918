use crate::types::rubric::Phase1Checklist;

/// Points awarded per passed gate. Every gate counts the same.
pub const POINTS_PER_FLAG: u8 = 25;

pub fn compute_phase1_score(checklist: &Phase1Checklist) -> u8 {
    // checked_count is at most 4, so the product stays within 0..=100
    checklist.checked_count() as u8 * POINTS_PER_FLAG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::rubric::ChecklistFlag;

    #[test]
    fn all_false_scores_zero() {
        assert_eq!(compute_phase1_score(&Phase1Checklist::default()), 0);
    }

    #[test]
    fn all_true_scores_hundred() {
        let checklist = ChecklistFlag::ALL
            .into_iter()
            .fold(Phase1Checklist::default(), Phase1Checklist::toggled);
        assert_eq!(compute_phase1_score(&checklist), 100);
    }

    #[test]
    fn score_is_twenty_five_per_checked_flag() {
        let mut checklist = Phase1Checklist::default();
        for (index, flag) in ChecklistFlag::ALL.into_iter().enumerate() {
            checklist = checklist.toggled(flag);
            assert_eq!(compute_phase1_score(&checklist), 25 * (index as u8 + 1));
        }
    }

    #[test]
    fn every_checklist_scores_a_quarter_step() {
        for mask in 0u8..16 {
            let checklist = Phase1Checklist {
                education: mask & 1 != 0,
                experience: mask & 2 != 0,
                technical: mask & 4 != 0,
                career_stability: mask & 8 != 0,
            };
            let score = compute_phase1_score(&checklist);
            assert!([0, 25, 50, 75, 100].contains(&score));
            assert_eq!(score as u32, 25 * mask.count_ones());
        }
    }
}
