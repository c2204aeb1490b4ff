//! Invariants that hold for any profile the dialog can produce.

use card_data::{Catalog, SpendCategory, UserProfile};
use conversation::{join_selections, ConversationEngine};
use scoring::{estimate_annual_rewards, generate_reasons, Reason, ScoringEngine, SubScore};
use scoring::{EligibilityScore, PreferenceFitScore, SpendingFitScore};

const CATALOG_JSON: &str = include_str!("../../../data/credit_cards.json");

/// Profiles built by walking the dialog with a different option offset per
/// run, plus the empty profile.
fn sample_profiles() -> Vec<UserProfile> {
    let mut profiles = vec![UserProfile::new()];
    for seed in 0..24 {
        let mut dialog = ConversationEngine::new();
        let mut step_no = 0;
        while let Some(step) = dialog.current_step() {
            let pick = (seed * (step_no + 1) + step_no) % step.options.len();
            let answer = if step.is_multi_select() {
                let end = (pick + seed % 3 + 1).min(step.options.len());
                join_selections(&step.options[pick..end])
            } else {
                step.options[pick].to_string()
            };
            dialog.process_answer(&answer).unwrap();
            step_no += 1;
        }
        profiles.push(dialog.into_profile());
    }
    profiles
}

#[test]
fn test_ranking_invariants() {
    let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
    let engine = ScoringEngine::new();

    for profile in sample_profiles() {
        let recs = engine.get_recommendations(&profile, &catalog);
        assert!(recs.len() <= 5);
        assert!(recs.len() <= catalog.len());

        for rec in &recs {
            assert!(rec.match_percent >= 25);
            assert!(rec.reasons.len() <= 3);
            assert!(rec.breakdown.eligibility <= 55.0);
            assert!(rec.breakdown.spending_fit <= 40.0);
            assert!(rec.breakdown.preference_fit <= 30.0);
        }
        for pair in recs.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
    let engine = ScoringEngine::new();

    for profile in sample_profiles() {
        let first = serde_json::to_string(&engine.get_recommendations(&profile, &catalog)).unwrap();
        let second = serde_json::to_string(&engine.get_recommendations(&profile, &catalog)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_sub_scores_within_caps_for_every_card() {
    let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
    let components: [&dyn SubScore; 3] = [&EligibilityScore, &SpendingFitScore, &PreferenceFitScore];

    for profile in sample_profiles() {
        for card in &catalog {
            for component in components {
                let score = component.score(card, &profile);
                assert!(
                    (0.0..=component.max_points()).contains(&score),
                    "{} = {score} for {}",
                    component.name(),
                    card.id
                );
            }
        }
    }
}

#[test]
fn test_fee_free_cards_always_say_so() {
    let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
    let fee_free: Vec<_> = catalog.cards().iter().filter(|card| card.has_no_fees()).collect();
    assert!(!fee_free.is_empty());

    for profile in sample_profiles() {
        for card in &fee_free {
            assert!(generate_reasons(card, &profile).contains(&Reason::NoFees), "{}", card.id);
        }
    }
}

#[test]
fn test_zero_multiplier_category_earns_nothing() {
    let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
    let mut card = catalog.get_card("paytm-citi").unwrap().clone();
    card.categories.set(SpendCategory::Dining, 0.0);

    let mut profile = UserProfile::new();
    profile.spending_mut().set(SpendCategory::Dining, 10000);

    assert_eq!(SpendingFitScore.score(&card, &profile), 0.0);
    let welcome = u64::from(card.welcome_bonus.unwrap_or(0));
    assert_eq!(estimate_annual_rewards(&card, &profile, 0.25), welcome);
}
