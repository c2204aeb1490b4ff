//! The scoring engine: score every card, filter, rank, explain.
//!
//! ## Algorithm
//! 1. Score each catalog card on eligibility, spending fit and preference
//!    fit (in parallel, catalog order preserved)
//! 2. Drop cards through the filter pipeline
//! 3. Stable sort by raw total, descending, and keep the top N
//! 4. Attach match percentage, reward estimate and reasons
//!
//! The engine holds no per-user state and can be shared across threads.

use crate::components::{EligibilityScore, PreferenceFitScore, SpendingFitScore};
use crate::config::ScoringConfig;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::EligibilityFloorFilter;
use crate::reasons::generate_reasons;
use crate::recommendation::{Recommendation, ScoreBreakdown, ScoredCard};
use crate::rewards::estimate_annual_rewards;
use crate::traits::SubScore;
use card_data::{Catalog, CreditCardProduct, UserProfile};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{info, instrument};

pub struct ScoringEngine {
    config: ScoringConfig,
    eligibility: EligibilityScore,
    spending_fit: SpendingFitScore,
    preference_fit: PreferenceFitScore,
    pipeline: FilterPipeline,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self::with_config(ScoringConfig::default())
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        let pipeline =
            FilterPipeline::new().add_filter(EligibilityFloorFilter::new(config.min_eligibility));
        Self {
            config,
            eligibility: EligibilityScore,
            spending_fit: SpendingFitScore,
            preference_fit: PreferenceFitScore,
            pipeline,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Capped sub-scores for one card.
    pub fn score_card(&self, card: &CreditCardProduct, profile: &UserProfile) -> ScoreBreakdown {
        ScoreBreakdown {
            eligibility: self.eligibility.score(card, profile),
            spending_fit: self.spending_fit.score(card, profile),
            preference_fit: self.preference_fit.score(card, profile),
        }
    }

    /// Top cards for `profile`, best first.
    ///
    /// # Arguments
    /// * `profile` - Answers collected so far; missing fields score 0
    /// * `catalog` - Cards to rank; the results borrow from it
    ///
    /// # Returns
    /// At most `max_results` recommendations, sorted by raw score. Equal
    /// scores keep catalog order. Same inputs always give the same output.
    #[instrument(skip_all, fields(cards = catalog.len()))]
    pub fn get_recommendations<'a>(
        &self,
        profile: &UserProfile,
        catalog: &'a Catalog,
    ) -> Vec<Recommendation<'a>> {
        let start_time = Instant::now();

        let scored: Vec<ScoredCard<'a>> = catalog
            .cards()
            .par_iter()
            .map(|card| ScoredCard::new(card, self.score_card(card, profile)))
            .collect();

        let mut included = self.pipeline.apply(scored, profile);
        let included_count = included.len();

        // stable, so ties stay in catalog order
        included.sort_by(|a, b| b.total().total_cmp(&a.total()));
        included.truncate(self.config.max_results);

        let recommendations: Vec<Recommendation<'a>> = included
            .into_iter()
            .map(|scored| self.recommend(scored, profile))
            .collect();

        info!(
            "Ranked {} of {} included cards in {:.2?}",
            recommendations.len(),
            included_count,
            start_time.elapsed()
        );
        recommendations
    }

    fn recommend<'a>(&self, scored: ScoredCard<'a>, profile: &UserProfile) -> Recommendation<'a> {
        let score = scored.total();
        Recommendation {
            card: scored.card,
            score,
            match_percent: self.config.match_percent(score),
            estimated_rewards: estimate_annual_rewards(scored.card, profile, self.config.point_value),
            reasons: generate_reasons(scored.card, profile),
            breakdown: scored.breakdown,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
