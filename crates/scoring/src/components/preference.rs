//! Preference fit: overlap between wanted benefits and what the card offers.

use crate::traits::SubScore;
use card_data::{CreditCardProduct, UserProfile};

const MAX_POINTS: f64 = 30.0;
const POINTS_PER_MATCH: f64 = 5.0;
const FEATURE_BONUS: f64 = 10.0;

/// Label that earns the lounge bonus. The benefit question offers
/// "Airport Lounge Access", so only the substring match fires for it.
pub const LOUNGE_LABEL: &str = "Airport Lounge";
pub const FUEL_LABEL: &str = "Fuel Benefits";

/// ## Algorithm
/// 1. +5 per preferred label found (case-insensitive substring) in the
///    card's joined benefit descriptions
/// 2. +10 if the exact label "Airport Lounge" is preferred and the card has
///    lounge access
/// 3. +10 if "Fuel Benefits" is preferred and the card waives fuel surcharge
/// 4. Cap at 30
pub struct PreferenceFitScore;

impl SubScore for PreferenceFitScore {
    fn name(&self) -> &str {
        "preference_fit"
    }

    fn max_points(&self) -> f64 {
        MAX_POINTS
    }

    fn raw(&self, card: &CreditCardProduct, profile: &UserProfile) -> f64 {
        let Some(preferred) = profile.preferred_benefits.as_ref() else {
            return 0.0;
        };

        let haystack = card.benefits_haystack();
        let matches = preferred
            .iter()
            .filter(|label| haystack.contains(&label.to_lowercase()))
            .count();
        let mut points = matches as f64 * POINTS_PER_MATCH;

        if card.lounge_access && profile.prefers(LOUNGE_LABEL) {
            points += FEATURE_BONUS;
        }
        if card.fuel_surcharge && profile.prefers(FUEL_LABEL) {
            points += FEATURE_BONUS;
        }
        points
    }
}
