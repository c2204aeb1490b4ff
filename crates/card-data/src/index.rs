//! Catalog building and validation.
//!
//! Every constructor funnels through `from_cards`, which indexes the cards by
//! id and then validates the whole set, so a `Catalog` that exists is always
//! well-formed.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading card catalog from {:?}", path);
        let cards = parser::parse_cards_file(path)?;
        let catalog = Self::from_cards(cards)?;
        info!("Loaded {} cards", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from an in-memory JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_cards(parser::parse_cards(json)?)
    }

    /// Index and validate an already-parsed card list.
    pub fn from_cards(cards: Vec<CreditCardProduct>) -> Result<Self> {
        let mut catalog = Catalog::new();
        for card in cards {
            let id = card.id.clone();
            if !catalog.insert_card(card) {
                return Err(CatalogError::DuplicateCard { id });
            }
        }
        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - The catalog is not empty
    /// - Every id is non-blank
    /// - Age ranges are ordered
    /// - Reward multipliers are finite and non-negative
    pub fn validate(&self) -> Result<()> {
        if self.cards.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        for card in &self.cards {
            if card.id.trim().is_empty() {
                return Err(invalid(card, "id", format!("{:?}", card.id)));
            }

            let (min_age, max_age) = card.eligibility.age_range;
            if min_age > max_age {
                return Err(invalid(card, "ageRange", format!("[{min_age}, {max_age}]")));
            }

            if !is_valid_multiplier(card.reward_rate) {
                return Err(invalid(card, "rewardRate", card.reward_rate.to_string()));
            }

            for (category, multiplier) in card.categories.iter() {
                if !is_valid_multiplier(multiplier) {
                    return Err(invalid(
                        card,
                        &format!("categories.{category}"),
                        multiplier.to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

fn is_valid_multiplier(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn invalid(card: &CreditCardProduct, field: &str, value: String) -> CatalogError {
    CatalogError::InvalidValue {
        card: card.id.clone(),
        field: field.to_string(),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> CreditCardProduct {
        CreditCardProduct {
            id: id.to_string(),
            name: format!("{id} card"),
            issuer: "Test Bank".to_string(),
            joining_fee: 0,
            annual_fee: 0,
            reward_type: RewardType::Points,
            reward_rate: 2.0,
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

    #[test]
    fn test_from_cards_preserves_order() {
        let catalog = Catalog::from_cards(vec![card("b"), card("a"), card("c")]).unwrap();
        let ids: Vec<_> = catalog.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(catalog.get_card("a").unwrap().id, "a");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::from_cards(vec![card("a"), card("a")]);
        assert!(matches!(result, Err(CatalogError::DuplicateCard { id }) if id == "a"));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            Catalog::from_cards(vec![]),
            Err(CatalogError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_inverted_age_range_rejected() {
        let mut bad = card("bad");
        bad.eligibility.age_range = (70, 21);
        let result = Catalog::from_cards(vec![bad]);
        assert!(matches!(result, Err(CatalogError::InvalidValue { field, .. }) if field == "ageRange"));
    }

    #[test]
    fn test_negative_multiplier_rejected() {
        let mut bad = card("bad");
        bad.categories.fuel = -1.0;
        let result = Catalog::from_cards(vec![bad]);
        assert!(
            matches!(result, Err(CatalogError::InvalidValue { field, .. }) if field == "categories.fuel")
        );
    }

    #[test]
    fn test_blank_id_rejected() {
        let result = Catalog::from_cards(vec![card("  ")]);
        assert!(matches!(result, Err(CatalogError::InvalidValue { field, .. }) if field == "id"));
    }
}
