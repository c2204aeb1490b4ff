//! Primary use parser. Free text, stored verbatim.

use crate::traits::AnswerParser;
use card_data::UserProfile;

pub struct PrimaryUseParser;

impl AnswerParser for PrimaryUseParser {
    fn field(&self) -> &str {
        "primaryUse"
    }

    fn apply(&self, answer: &str, profile: &mut UserProfile) {
        profile.primary_use = Some(answer.to_string());
    }
}
