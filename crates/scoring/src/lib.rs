//! # Scoring Crate
//!
//! Ranks catalog cards against a `UserProfile`.
//!
//! ## Architecture
//! Scoring runs in stages:
//! 1. Sub-score components rate every card (eligibility, spending fit,
//!    preference fit)
//! 2. Filters remove cards the user is unlikely to qualify for
//! 3. The survivors are ranked, cut to the top N, and explained
//!
//! ## Example Usage
//! ```ignore
//! use scoring::ScoringEngine;
//!
//! let engine = ScoringEngine::new();
//! for rec in engine.get_recommendations(&profile, &catalog) {
//!     println!("{} ({}% match)", rec.card.name, rec.match_percent);
//! }
//! ```

pub mod components;
pub mod config;
pub mod engine;
pub mod filter_pipeline;
pub mod filters;
pub mod reasons;
pub mod recommendation;
pub mod rewards;
pub mod traits;

// Re-export main types
pub use components::{EligibilityScore, PreferenceFitScore, SpendingFitScore};
pub use config::ScoringConfig;
pub use engine::ScoringEngine;
pub use filter_pipeline::FilterPipeline;
pub use reasons::{generate_reasons, Reason};
pub use recommendation::{Recommendation, ScoreBreakdown, ScoredCard};
pub use rewards::estimate_annual_rewards;
pub use traits::{Filter, SubScore};

#[cfg(test)]
pub(crate) mod test_support {
    use card_data::{CategoryMap, CreditCardProduct, Eligibility, RewardType};

    /// Fee-free points card earning 1x everywhere; needs 300000 a year and
    /// a 700 credit score.
    pub fn card(id: &str) -> CreditCardProduct {
        CreditCardProduct {
            id: id.to_string(),
            name: format!("{id} card"),
            issuer: "Test Bank".to_string(),
            joining_fee: 0,
            annual_fee: 0,
            reward_type: RewardType::Points,
            reward_rate: 1.0,
            eligibility: Eligibility {
                min_income: 300000,
                min_credit_score: 700,
                age_range: (21, 65),
            },
            categories: CategoryMap::from_fn(|_| 1.0),
            benefits: vec![],
            description: String::new(),
            apply_url: None,
            welcome_bonus: None,
            lounge_access: false,
            fuel_surcharge: false,
        }
    }
}
