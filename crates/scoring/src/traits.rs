//! Core traits for scoring and filtering cards.

use crate::recommendation::ScoredCard;
use card_data::{CreditCardProduct, UserProfile};

/// One additive component of a card's total score.
///
/// ## Design Note
/// - `Send + Sync` so components can be called from rayon workers
/// - `raw` may overshoot; `score` applies the cap, so every caller sees a
///   value in `0.0..=max_points()`
pub trait SubScore: Send + Sync {
    /// Returns the name of this component (for logging/debugging)
    fn name(&self) -> &str;

    /// Upper bound on `score`
    fn max_points(&self) -> f64;

    /// Uncapped points for this card and profile.
    fn raw(&self, card: &CreditCardProduct, profile: &UserProfile) -> f64;

    /// Points clamped to `max_points`.
    fn score(&self, card: &CreditCardProduct, profile: &UserProfile) -> f64 {
        self.raw(card, profile).min(self.max_points())
    }
}

/// Core trait for removing scored cards before ranking.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters take ownership of the Vec and return the survivors
/// - The candidate borrows its card from the catalog, hence the lifetime
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of scored cards.
    ///
    /// # Arguments
    /// * `candidates` - The scored cards to filter (takes ownership)
    /// * `profile` - The profile the cards were scored against
    fn apply<'a>(&self, candidates: Vec<ScoredCard<'a>>, profile: &UserProfile)
        -> Vec<ScoredCard<'a>>;
}
