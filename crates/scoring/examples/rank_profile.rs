//! Example: Rank the shipped catalog for a scripted set of answers
//!
//! Run with: cargo run --package scoring --example rank_profile
//!
//! This example shows how to:
//! 1. Load the card catalog
//! 2. Build a profile by answering the dialog
//! 3. Rank cards and print the score breakdown

use card_data::Catalog;
use conversation::ConversationEngine;
use scoring::ScoringEngine;
use std::path::Path;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    println!("=== Card Ranking Example ===\n");

    let catalog = Catalog::load_from_file(Path::new("data/credit_cards.json"))?;
    println!("Catalog: {} cards\n", catalog.len());

    let answers = [
        "₹75,000 - ₹1,50,000",
        "₹5,000 - ₹10,000",
        "₹8,000 - ₹15,000",
        "₹10,000 - ₹20,000",
        "₹3,000 - ₹8,000",
        "₹8,000 - ₹15,000",
        "Fuel Benefits,High Cashback/Rewards",
        "Good (700-750)",
        "Daily expenses & shopping",
    ];
    let mut dialog = ConversationEngine::new();
    for answer in answers {
        dialog.process_answer(answer)?;
    }
    let profile = dialog.into_profile();
    println!("Profile: {}\n", serde_json::to_string(&profile)?);

    let start = Instant::now();
    let engine = ScoringEngine::new();
    let recommendations = engine.get_recommendations(&profile, &catalog);
    println!("Ranked in {:?}\n", start.elapsed());

    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} - {}% match (score {:.1}), ~₹{}/year",
            rank + 1,
            rec.card.name,
            rec.match_percent,
            rec.score,
            rec.estimated_rewards
        );
        println!(
            "   eligibility {:.1} | spending {:.1} | preference {:.1}",
            rec.breakdown.eligibility, rec.breakdown.spending_fit, rec.breakdown.preference_fit
        );
        for reason in &rec.reasons {
            println!("   - {reason}");
        }
    }

    Ok(())
}
