//! Spending fit: how well a card's multipliers line up with where the money goes.

use crate::traits::SubScore;
use card_data::{CreditCardProduct, UserProfile};

const MAX_POINTS: f64 = 40.0;
const POINTS_PER_MULTIPLIER: f64 = 10.0;

/// Spend-weighted average multiplier, scaled by 10 and capped at 40.
///
/// ## Algorithm
/// For each of the six categories:
/// 1. weight = category spend / total monthly spend
/// 2. add weight * multiplier * 10
///
/// No spending data, or a total of zero, scores 0.
pub struct SpendingFitScore;

impl SubScore for SpendingFitScore {
    fn name(&self) -> &str {
        "spending_fit"
    }

    fn max_points(&self) -> f64 {
        MAX_POINTS
    }

    fn raw(&self, card: &CreditCardProduct, profile: &UserProfile) -> f64 {
        let Some(habits) = profile.spending_habits.as_ref() else {
            return 0.0;
        };
        let total = profile.total_monthly_spend();
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;

        habits
            .iter()
            .map(|(category, amount)| {
                let weight = f64::from(amount) / total;
                weight * card.categories.get(category) * POINTS_PER_MULTIPLIER
            })
            .sum()
    }
}
