//! Filter to drop cards the user is unlikely to qualify for.

use crate::recommendation::ScoredCard;
use crate::traits::Filter;
use card_data::UserProfile;

/// Keeps cards whose eligibility sub-score exceeds a floor.
///
/// A profile that disclosed neither income nor credit score has nothing to
/// judge eligibility on, so every card passes.
pub struct EligibilityFloorFilter {
    min_eligibility: f64,
}

impl EligibilityFloorFilter {
    /// # Arguments
    /// * `min_eligibility` - Eligibility must be strictly greater than this
    pub fn new(min_eligibility: f64) -> Self {
        Self { min_eligibility }
    }
}

impl Filter for EligibilityFloorFilter {
    fn name(&self) -> &str {
        "EligibilityFloorFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<ScoredCard<'a>>,
        profile: &UserProfile,
    ) -> Vec<ScoredCard<'a>> {
        if profile.is_undisclosed() {
            return candidates;
        }
        candidates
            .into_iter()
            .filter(|candidate| candidate.breakdown.eligibility > self.min_eligibility)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::ScoreBreakdown;
    use crate::test_support::card;

    #[test]
    fn test_floor_is_exclusive() {
        let filter = EligibilityFloorFilter::new(20.0);
        let (a, b) = (card("a"), card("b"));
        let candidates = vec![
            ScoredCard::new(&a, ScoreBreakdown { eligibility: 20.0, ..Default::default() }),
            ScoredCard::new(&b, ScoreBreakdown { eligibility: 25.0, ..Default::default() }),
        ];
        let profile = UserProfile {
            monthly_income: Some(30000),
            ..UserProfile::default()
        };

        let kept = filter.apply(candidates, &profile);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].card.id, "b");
    }

    #[test]
    fn test_undisclosed_profile_bypasses_floor() {
        let filter = EligibilityFloorFilter::new(20.0);
        let a = card("a");
        let profile = UserProfile {
            monthly_income: Some(0),
            credit_score: Some(0),
            ..UserProfile::default()
        };

        let kept = filter.apply(vec![ScoredCard::new(&a, ScoreBreakdown::default())], &profile);
        assert_eq!(kept.len(), 1);
    }
}
