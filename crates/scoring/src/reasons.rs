//! Short explanations attached to each recommendation.

use crate::components::preference::LOUNGE_LABEL;
use card_data::{CreditCardProduct, SpendCategory, UserProfile};
use serde::{Serialize, Serializer};
use std::fmt;

pub const MAX_REASONS: usize = 3;

/// Multiplier a top category must exceed to be called out.
const STANDOUT_MULTIPLIER: f64 = 3.0;
/// Monthly fuel spend above which the surcharge waiver is mentioned.
const FUEL_WAIVER_SPEND: u32 = 5000;
/// Welcome bonus above which it is mentioned.
const NOTABLE_WELCOME_BONUS: u32 = 1000;

/// Why a card was recommended. Serialized as its display text.
#[derive(Debug, Clone, PartialEq)]
pub enum Reason {
    MeetsIncome,
    TopCategory {
        multiplier: f64,
        category: SpendCategory,
    },
    NoFees,
    NoJoiningFee,
    LoungeAccess,
    FuelSurchargeWaiver,
    WelcomeBonus {
        amount: u32,
        unit: &'static str,
    },
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::MeetsIncome => write!(f, "Meets income eligibility criteria"),
            Reason::TopCategory {
                multiplier,
                category,
            } => write!(
                f,
                "Excellent {multiplier}X rewards on {category} (your top spending category)"
            ),
            Reason::NoFees => write!(f, "No joining or annual fees"),
            Reason::NoJoiningFee => write!(f, "No joining fee required"),
            Reason::LoungeAccess => write!(f, "Complimentary airport lounge access"),
            Reason::FuelSurchargeWaiver => {
                write!(f, "Fuel surcharge waiver saves money on fuel expenses")
            }
            Reason::WelcomeBonus { amount, unit } => {
                write!(f, "Attractive welcome bonus of {amount} {unit}")
            }
        }
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Up to three reasons, in fixed priority order.
///
/// ## Algorithm
/// Checks run in this order and the first three that apply are kept:
/// 1. Annual income meets the card minimum
/// 2. The profile's largest spend category earns more than 3x on this card
/// 3. No fees at all, or else no joining fee
/// 4. Lounge access and the "Airport Lounge" preference
/// 5. Fuel surcharge waiver and fuel spend above 5000 a month
/// 6. Welcome bonus above 1000
pub fn generate_reasons(card: &CreditCardProduct, profile: &UserProfile) -> Vec<Reason> {
    let checks = [
        meets_income(card, profile),
        top_category(card, profile),
        fees(card),
        lounge(card, profile),
        fuel_waiver(card, profile),
        welcome_bonus(card),
    ];
    checks.into_iter().flatten().take(MAX_REASONS).collect()
}

fn meets_income(card: &CreditCardProduct, profile: &UserProfile) -> Option<Reason> {
    let annual = profile.annual_income()?;
    (annual >= u64::from(card.eligibility.min_income)).then_some(Reason::MeetsIncome)
}

fn top_category(card: &CreditCardProduct, profile: &UserProfile) -> Option<Reason> {
    let habits = profile.spending_habits.as_ref()?;
    // first category in enumeration order wins a tie
    let (category, _) = habits
        .iter()
        .reduce(|best, next| if next.1 > best.1 { next } else { best })?;

    let multiplier = card.categories.get(category);
    (multiplier > STANDOUT_MULTIPLIER).then_some(Reason::TopCategory {
        multiplier,
        category,
    })
}

fn fees(card: &CreditCardProduct) -> Option<Reason> {
    if card.has_no_fees() {
        Some(Reason::NoFees)
    } else if card.joining_fee == 0 {
        Some(Reason::NoJoiningFee)
    } else {
        None
    }
}

fn lounge(card: &CreditCardProduct, profile: &UserProfile) -> Option<Reason> {
    (card.lounge_access && profile.prefers(LOUNGE_LABEL)).then_some(Reason::LoungeAccess)
}

fn fuel_waiver(card: &CreditCardProduct, profile: &UserProfile) -> Option<Reason> {
    let fuel = profile.spending_habits.as_ref()?.get(SpendCategory::Fuel);
    (card.fuel_surcharge && fuel > FUEL_WAIVER_SPEND).then_some(Reason::FuelSurchargeWaiver)
}

fn welcome_bonus(card: &CreditCardProduct) -> Option<Reason> {
    let amount = card.welcome_bonus.filter(|&bonus| bonus > NOTABLE_WELCOME_BONUS)?;
    Some(Reason::WelcomeBonus {
        amount,
        unit: card.reward_type.unit_label(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::card;
    use card_data::RewardType;

    fn texts(reasons: &[Reason]) -> Vec<String> {
        reasons.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_display_text() {
        let reason = Reason::TopCategory {
            multiplier: 25.0,
            category: SpendCategory::Dining,
        };
        assert_eq!(
            reason.to_string(),
            "Excellent 25X rewards on dining (your top spending category)"
        );
        let reason = Reason::TopCategory {
            multiplier: 3.5,
            category: SpendCategory::Online,
        };
        assert_eq!(
            reason.to_string(),
            "Excellent 3.5X rewards on online (your top spending category)"
        );
        let bonus = Reason::WelcomeBonus {
            amount: 2000,
            unit: "cashback",
        };
        assert_eq!(bonus.to_string(), "Attractive welcome bonus of 2000 cashback");
    }

    #[test]
    fn test_fee_free_card_always_says_so() {
        let card = card("free");
        assert_eq!(texts(&generate_reasons(&card, &UserProfile::new())), vec!["No joining or annual fees"]);
    }

    #[test]
    fn test_joining_fee_only() {
        let mut card = card("annual");
        card.annual_fee = 499;
        assert_eq!(generate_reasons(&card, &UserProfile::new()), vec![Reason::NoJoiningFee]);
        card.joining_fee = 499;
        assert!(generate_reasons(&card, &UserProfile::new()).is_empty());
    }

    #[test]
    fn test_priority_order_and_limit() {
        let mut card = card("busy");
        card.categories.set(SpendCategory::Fuel, 5.0);
        card.fuel_surcharge = true;
        card.welcome_bonus = Some(5000);
        card.reward_type = RewardType::Cashback;

        let mut profile = UserProfile {
            monthly_income: Some(100000),
            ..UserProfile::default()
        };
        profile.spending_mut().set(SpendCategory::Fuel, 11500);

        let reasons = generate_reasons(&card, &profile);
        assert_eq!(
            reasons,
            vec![
                Reason::MeetsIncome,
                Reason::TopCategory {
                    multiplier: 5.0,
                    category: SpendCategory::Fuel
                },
                Reason::NoFees,
            ]
        );
    }

    #[test]
    fn test_lower_priority_reasons_fill_in() {
        let mut card = card("perks");
        card.joining_fee = 1000;
        card.lounge_access = true;
        card.fuel_surcharge = true;
        card.welcome_bonus = Some(1001);

        let mut profile = UserProfile {
            preferred_benefits: Some(vec!["Airport Lounge".to_string()]),
            ..UserProfile::default()
        };
        profile.spending_mut().set(SpendCategory::Fuel, 6500);

        assert_eq!(
            texts(&generate_reasons(&card, &profile)),
            vec![
                "Complimentary airport lounge access",
                "Fuel surcharge waiver saves money on fuel expenses",
                "Attractive welcome bonus of 1001 points",
            ]
        );
    }

    #[test]
    fn test_top_category_tie_goes_to_first_category() {
        let mut card = card("tie");
        card.categories.set(SpendCategory::Groceries, 4.0);
        card.joining_fee = 1;

        let mut profile = UserProfile::new();
        profile.spending_mut().set(SpendCategory::Groceries, 7500);
        profile.spending_mut().set(SpendCategory::Online, 7500);
        assert_eq!(
            generate_reasons(&card, &profile),
            vec![Reason::TopCategory {
                multiplier: 4.0,
                category: SpendCategory::Groceries
            }]
        );
    }

    #[test]
    fn test_lounge_reason_needs_exact_label() {
        let mut card = card("lounge");
        card.joining_fee = 1;
        card.lounge_access = true;
        let profile = UserProfile {
            preferred_benefits: Some(vec!["Airport Lounge Access".to_string()]),
            ..UserProfile::default()
        };
        assert!(generate_reasons(&card, &profile).is_empty());
    }

    #[test]
    fn test_serializes_as_text() {
        let json = serde_json::to_string(&vec![Reason::NoFees]).unwrap();
        assert_eq!(json, r#"["No joining or annual fees"]"#);
    }
}
