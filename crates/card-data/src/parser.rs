//! Parser for catalog documents.
//!
//! A catalog is a JSON array of card objects using camelCase keys:
//!
//! ```json
//! [{ "id": "hdfc-regalia", "name": "...", "joiningFee": 2500, ... }]
//! ```
//!
//! Keys the card schema does not know (such as `image`) are ignored.

use crate::error::Result;
use crate::types::CreditCardProduct;
use std::fs;
use std::path::Path;

/// Parse a catalog document held in memory.
pub fn parse_cards(json: &str) -> Result<Vec<CreditCardProduct>> {
    let cards: Vec<CreditCardProduct> = serde_json::from_str(json)?;
    Ok(cards)
}

/// Read and parse a catalog file.
pub fn parse_cards_file(path: &Path) -> Result<Vec<CreditCardProduct>> {
    let content = fs::read_to_string(path)?;
    parse_cards(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::types::RewardType;

    const MINIMAL_CARD: &str = r#"[{
        "id": "basic",
        "name": "Basic Card",
        "issuer": "Some Bank",
        "image": "https://example.com/card.png",
        "joiningFee": 0,
        "annualFee": 499,
        "rewardType": "miles",
        "rewardRate": 1.5,
        "eligibility": { "minIncome": 150000, "minCreditScore": 600, "ageRange": [21, 65] },
        "categories": { "dining": 1, "fuel": 1, "groceries": 1, "travel": 3, "online": 1, "general": 1 },
        "benefits": ["Travel insurance"]
    }]"#;

    #[test]
    fn test_parse_minimal_card() {
        let cards = parse_cards(MINIMAL_CARD).unwrap();
        assert_eq!(cards.len(), 1);

        let card = &cards[0];
        assert_eq!(card.id, "basic");
        assert_eq!(card.reward_type, RewardType::Miles);
        assert_eq!(card.categories.travel, 3.0);
        assert_eq!(card.eligibility.age_range, (21, 65));
        // Optional flags default to absent / false
        assert_eq!(card.welcome_bonus, None);
        assert!(!card.lounge_access);
        assert!(!card.fuel_surcharge);
        assert!(card.description.is_empty());
    }

    #[test]
    fn test_missing_category_is_rejected() {
        let json = MINIMAL_CARD.replace(r#""general": 1 "#, "");
        let json = json.replace(r#""online": 1,"#, r#""online": 1"#);
        let result = parse_cards(&json);
        assert!(matches!(result, Err(CatalogError::Json { .. })));
    }

    #[test]
    fn test_unknown_reward_type_is_rejected() {
        let json = MINIMAL_CARD.replace("\"miles\"", "\"vouchers\"");
        assert!(parse_cards(&json).is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = parse_cards_file(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
