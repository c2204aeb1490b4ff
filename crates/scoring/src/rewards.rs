//! Annual reward value estimate.

use card_data::{CreditCardProduct, UserProfile};

/// Estimated rewards over a year, in rupees.
///
/// ## Algorithm
/// 1. For each category, annual spend * multiplier / 100; points are worth
///    `point_value` rupees each, cashback percentages are taken as-is
/// 2. Add the welcome bonus (cashback at face value, points at `point_value`)
/// 3. Round to the nearest rupee
///
/// Without spending data there is nothing to estimate and the result is 0,
/// welcome bonus included.
pub fn estimate_annual_rewards(
    card: &CreditCardProduct,
    profile: &UserProfile,
    point_value: f64,
) -> u64 {
    let Some(habits) = profile.spending_habits.as_ref() else {
        return 0;
    };
    let rupees_per_unit = if card.reward_type.is_cashback() {
        1.0
    } else {
        point_value
    };

    let from_spend: f64 = habits
        .iter()
        .map(|(category, monthly)| {
            let annual = f64::from(monthly) * 12.0;
            annual * card.categories.get(category) * rupees_per_unit / 100.0
        })
        .sum();
    let bonus = card
        .welcome_bonus
        .map_or(0.0, |bonus| f64::from(bonus) * rupees_per_unit);

    (from_spend + bonus).round() as u64
}
