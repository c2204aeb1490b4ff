//! Scored and ranked output types.

use crate::reasons::Reason;
use card_data::CreditCardProduct;
use serde::Serialize;

/// The three capped sub-scores for one card.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub eligibility: f64,
    pub spending_fit: f64,
    pub preference_fit: f64,
}

impl ScoreBreakdown {
    /// Unweighted sum of the sub-scores.
    pub fn total(&self) -> f64 {
        self.eligibility + self.spending_fit + self.preference_fit
    }
}

/// A catalog card with its sub-scores, before filtering and ranking.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCard<'a> {
    pub card: &'a CreditCardProduct,
    pub breakdown: ScoreBreakdown,
}

impl<'a> ScoredCard<'a> {
    pub fn new(card: &'a CreditCardProduct, breakdown: ScoreBreakdown) -> Self {
        Self { card, breakdown }
    }

    pub fn total(&self) -> f64 {
        self.breakdown.total()
    }
}

/// A ranked card shown to the user.
///
/// Borrows its card from the catalog it was scored against.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation<'a> {
    pub card: &'a CreditCardProduct,
    /// Raw total on the 0..=125 scale; the ranking key
    pub score: f64,
    /// Display percentage, floored at the configured minimum
    #[serde(rename = "match")]
    pub match_percent: u32,
    pub estimated_rewards: u64,
    pub reasons: Vec<Reason>,
    pub breakdown: ScoreBreakdown,
}
