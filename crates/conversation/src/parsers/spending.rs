//! Per-category monthly spend parser.

use crate::brackets::{self, Bracket};
use crate::traits::AnswerParser;
use card_data::{Rupees, SpendCategory, UserProfile};

/// Writes one category's bracket value into the spending map.
///
/// ## Algorithm
/// 1. Create the all-zero spending map if this is the first spend answer
/// 2. Store the bracket value for `category` (0 if unrecognised)
/// 3. Optionally seed a second category with a fixed amount
pub struct SpendingParser {
    category: SpendCategory,
    brackets: &'static [Bracket],
    seed: Option<(SpendCategory, Rupees)>,
}

impl SpendingParser {
    /// Create a parser for one spend category.
    ///
    /// # Arguments
    /// * `category` - The category this question asks about
    /// * `brackets` - Option labels and their monthly amounts
    pub fn new(category: SpendCategory, brackets: &'static [Bracket]) -> Self {
        Self {
            category,
            brackets,
            seed: None,
        }
    }

    /// Also set `category` to `amount` whenever this step is answered.
    pub fn with_seed(mut self, category: SpendCategory, amount: Rupees) -> Self {
        self.seed = Some((category, amount));
        self
    }

    pub fn category(&self) -> SpendCategory {
        self.category
    }
}

impl AnswerParser for SpendingParser {
    fn field(&self) -> &str {
        self.category.as_str()
    }

    fn apply(&self, answer: &str, profile: &mut UserProfile) {
        let amount = brackets::lookup(self.brackets, answer).unwrap_or(0);
        let habits = profile.spending_mut();
        habits.set(self.category, amount);
        if let Some((category, seeded)) = self.seed {
            habits.set(category, seeded);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brackets::{DEFAULT_GENERAL_SPEND, DINING, FUEL, ONLINE};

    #[test]
    fn test_first_spend_answer_creates_map() {
        let mut profile = UserProfile::new();
        SpendingParser::new(SpendCategory::Dining, &DINING).apply("₹5,000 - ₹10,000", &mut profile);

        let habits = profile.spending_habits.unwrap();
        assert_eq!(habits.dining, 7500);
        assert_eq!(habits.fuel, 0);
        assert_eq!(habits.general, 0);
    }

    #[test]
    fn test_later_answers_keep_earlier_categories() {
        let mut profile = UserProfile::new();
        SpendingParser::new(SpendCategory::Dining, &DINING).apply("₹20,000+", &mut profile);
        SpendingParser::new(SpendCategory::Fuel, &FUEL).apply("₹8,000 - ₹15,000", &mut profile);

        let habits = profile.spending_habits.unwrap();
        assert_eq!(habits.dining, 25000);
        assert_eq!(habits.fuel, 11500);
    }

    #[test]
    fn test_seed_sets_general() {
        let mut profile = UserProfile::new();
        SpendingParser::new(SpendCategory::Online, &ONLINE)
            .with_seed(SpendCategory::General, DEFAULT_GENERAL_SPEND)
            .apply("₹25,000+", &mut profile);

        let habits = profile.spending_habits.unwrap();
        assert_eq!(habits.online, 30000);
        assert_eq!(habits.general, 5000);
    }

    #[test]
    fn test_unrecognised_bracket_is_zero() {
        let mut profile = UserProfile::new();
        SpendingParser::new(SpendCategory::Fuel, &FUEL).apply("lots", &mut profile);
        assert_eq!(profile.spending_habits.unwrap().fuel, 0);
    }
}
