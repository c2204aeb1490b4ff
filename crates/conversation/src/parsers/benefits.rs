//! Multi-select benefit preference parser.
//!
//! A multi-select answer arrives as one string of comma-joined labels.

use crate::traits::AnswerParser;
use card_data::UserProfile;

/// Splits the answer into labels and stores them trimmed, in order.
///
/// Labels are not normalised or deduplicated.
pub struct BenefitsParser;

impl AnswerParser for BenefitsParser {
    fn field(&self) -> &str {
        "preferredBenefits"
    }

    fn apply(&self, answer: &str, profile: &mut UserProfile) {
        profile.preferred_benefits = Some(split_selections(answer));
    }
}

/// Encode several selected labels as a single multi-select answer.
pub fn join_selections<S: AsRef<str>>(labels: &[S]) -> String {
    labels
        .iter()
        .map(|label| label.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

/// Split a multi-select answer on commas and trim each label.
///
/// A comma with an ASCII digit on both sides is a thousands separator
/// inside a label ("₹3,000") and does not split.
pub fn split_selections(answer: &str) -> Vec<String> {
    let chars: Vec<char> = answer.chars().collect();
    let mut labels = Vec::new();
    let mut current = String::new();

    for (idx, &ch) in chars.iter().enumerate() {
        let digit_group = ch == ','
            && idx > 0
            && chars[idx - 1].is_ascii_digit()
            && chars.get(idx + 1).is_some_and(|next| next.is_ascii_digit());

        if ch == ',' && !digit_group {
            labels.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    labels.push(current.trim().to_string());
    labels
}
