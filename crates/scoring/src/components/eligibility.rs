//! Income and credit score eligibility.

use crate::traits::SubScore;
use card_data::{CreditCardProduct, UserProfile};

const INCOME_FULL: f64 = 30.0;
const INCOME_PARTIAL: f64 = 15.0;
const CREDIT_FULL: f64 = 25.0;
const CREDIT_PARTIAL: f64 = 12.0;

/// Partial credit band for income: within 80% of the card minimum.
const INCOME_NEAR_RATIO: f64 = 0.8;
/// Partial credit band for credit score: within 50 points of the minimum.
const CREDIT_NEAR_MARGIN: i32 = 50;

/// Scores how well the profile meets a card's entry requirements.
///
/// ## Algorithm
/// 1. Annual income >= minimum: 30, else >= 80% of minimum: 15
/// 2. Credit score >= minimum: 25, else >= minimum - 50: 12
///
/// Undisclosed (absent or zero) income or score earns nothing for that half.
/// Age range is not scored.
pub struct EligibilityScore;

impl EligibilityScore {
    fn income_points(card: &CreditCardProduct, profile: &UserProfile) -> f64 {
        let Some(annual) = profile.annual_income() else {
            return 0.0;
        };
        let min_income = u64::from(card.eligibility.min_income);

        if annual >= min_income {
            INCOME_FULL
        } else if annual as f64 >= min_income as f64 * INCOME_NEAR_RATIO {
            INCOME_PARTIAL
        } else {
            0.0
        }
    }

    fn credit_points(card: &CreditCardProduct, profile: &UserProfile) -> f64 {
        let Some(score) = profile.disclosed_credit_score() else {
            return 0.0;
        };
        let score = i32::from(score);
        let min_score = i32::from(card.eligibility.min_credit_score);

        if score >= min_score {
            CREDIT_FULL
        } else if score >= min_score - CREDIT_NEAR_MARGIN {
            CREDIT_PARTIAL
        } else {
            0.0
        }
    }
}

impl SubScore for EligibilityScore {
    fn name(&self) -> &str {
        "eligibility"
    }

    fn max_points(&self) -> f64 {
        INCOME_FULL + CREDIT_FULL
    }

    fn raw(&self, card: &CreditCardProduct, profile: &UserProfile) -> f64 {
        Self::income_points(card, profile) + Self::credit_points(card, profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::card;

    fn profile(monthly_income: Option<u32>, credit_score: Option<u16>) -> UserProfile {
        UserProfile {
            monthly_income,
            credit_score,
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_full_marks() {
        // min income 300000 a year, min score 700
        let card = card("a");
        let score = EligibilityScore.score(&card, &profile(Some(25000), Some(700)));
        assert_eq!(score, 55.0);
        assert_eq!(EligibilityScore.max_points(), 55.0);
    }

    #[test]
    fn test_partial_bands() {
        let card = card("a");
        // 20000 * 12 = 240000 = exactly 80% of 300000
        assert_eq!(EligibilityScore.score(&card, &profile(Some(20000), None)), 15.0);
        assert_eq!(EligibilityScore.score(&card, &profile(Some(19999), None)), 0.0);
        assert_eq!(EligibilityScore.score(&card, &profile(None, Some(650))), 12.0);
        assert_eq!(EligibilityScore.score(&card, &profile(None, Some(649))), 0.0);
    }

    #[test]
    fn test_zero_values_count_as_undisclosed() {
        let mut card = card("a");
        card.eligibility.min_income = 0;
        assert_eq!(EligibilityScore.score(&card, &profile(Some(0), Some(0))), 0.0);
        assert_eq!(EligibilityScore.score(&card, &profile(Some(1), None)), 30.0);
    }

    #[test]
    fn test_low_minimum_score_does_not_underflow() {
        let mut card = card("a");
        card.eligibility.min_credit_score = 20;
        assert_eq!(EligibilityScore.score(&card, &profile(None, Some(1))), 12.0);
    }
}
