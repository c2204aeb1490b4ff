//! Credit score band parser.

use crate::brackets::{self, CREDIT_SCORE};
use crate::traits::AnswerParser;
use card_data::UserProfile;

/// Stores a representative score for the chosen band.
///
/// "I don't know" maps to a neutral 700. Any other unrecognised answer
/// stores 0, which scoring treats as undisclosed.
pub struct CreditScoreParser;

impl AnswerParser for CreditScoreParser {
    fn field(&self) -> &str {
        "creditScore"
    }

    fn apply(&self, answer: &str, profile: &mut UserProfile) {
        let score = brackets::lookup(&CREDIT_SCORE, answer).unwrap_or(0);
        profile.credit_score = Some(u16::try_from(score).unwrap_or(u16::MAX));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        let cases = [
            ("Excellent (750+)", 780),
            ("Good (700-750)", 725),
            ("Fair (650-700)", 675),
            ("Poor (600-650)", 625),
            ("I don't know", 700),
        ];
        for (answer, expected) in cases {
            let mut profile = UserProfile::new();
            CreditScoreParser.apply(answer, &mut profile);
            assert_eq!(profile.credit_score, Some(expected), "answer {answer:?}");
        }
    }

    #[test]
    fn test_unrecognised_is_zero_not_neutral() {
        let mut profile = UserProfile::new();
        CreditScoreParser.apply("dunno", &mut profile);
        assert_eq!(profile.credit_score, Some(0));
        assert!(profile.disclosed_credit_score().is_none());
    }
}
