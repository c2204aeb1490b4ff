//! Monthly income bracket parser.

use crate::brackets::{self, INCOME};
use crate::traits::AnswerParser;
use card_data::UserProfile;

/// Stores the bracket's representative monthly income.
///
/// "Prefer not to say" and unrecognised answers both store 0, which scoring
/// reads as undisclosed.
pub struct IncomeParser;

impl AnswerParser for IncomeParser {
    fn field(&self) -> &str {
        "monthlyIncome"
    }

    fn apply(&self, answer: &str, profile: &mut UserProfile) {
        profile.monthly_income = Some(brackets::lookup(&INCOME, answer).unwrap_or(0));
    }
}
