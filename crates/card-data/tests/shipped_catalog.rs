//! Checks against the catalog shipped in `data/credit_cards.json`.

use card_data::{Catalog, RewardType};
use std::path::Path;

const CATALOG_JSON: &str = include_str!("../../../data/credit_cards.json");

#[test]
fn test_shipped_catalog_loads() {
    let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
    assert_eq!(catalog.len(), 25);

    let first = &catalog.cards()[0];
    assert_eq!(first.id, "hdfc-regalia");
    assert!(first.lounge_access);
    assert!(first.fuel_surcharge);
    assert_eq!(first.welcome_bonus, Some(10000));
}

#[test]
fn test_shipped_catalog_lookup() {
    let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();

    let magnus = catalog.get_card("axis-magnus").unwrap();
    assert_eq!(magnus.eligibility.min_income, 1500000);
    assert_eq!(magnus.eligibility.min_credit_score, 780);
    assert_eq!(magnus.categories.dining, 25.0);

    let paytm = catalog.get_card("paytm-citi").unwrap();
    assert!(paytm.has_no_fees());
    assert!(!paytm.lounge_access);
}

#[test]
fn test_shipped_catalog_reward_types() {
    let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
    let cashback = catalog.cards_by_reward_type(RewardType::Cashback);
    let points = catalog.cards_by_reward_type(RewardType::Points);

    assert!(!cashback.is_empty());
    assert!(!points.is_empty());
    assert!(catalog.cards_by_reward_type(RewardType::Miles).is_empty());
    assert_eq!(cashback.len() + points.len(), catalog.len());
}

#[test]
fn test_load_from_file() {
    // Integration tests run from the crate directory
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/credit_cards.json");
    let catalog = Catalog::load_from_file(&path).unwrap();
    assert_eq!(catalog.len(), 25);
}
