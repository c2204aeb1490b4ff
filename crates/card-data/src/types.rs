//! Core domain types for the credit card catalog.
//!
//! This module defines the fundamental data structures used throughout the system.
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (CardId, Rupees)
//! - A generic struct (`CategoryMap<T>`) that is total over a closed enum
//! - Enums for fixed sets of values
//! - Serde attributes for a camelCase wire format

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a card product (e.g. "hdfc-regalia")
pub type CardId = String;

/// Whole currency units
pub type Rupees = u32;

// =============================================================================
// Spend Categories
// =============================================================================

/// The closed set of spend categories every card and profile is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpendCategory {
    Dining,
    Fuel,
    Groceries,
    Travel,
    Online,
    General,
}

impl SpendCategory {
    /// Every category in enumeration order.
    ///
    /// Anything that needs a deterministic walk over categories (including
    /// tie-breaks) iterates this array.
    pub const ALL: [SpendCategory; 6] = [
        SpendCategory::Dining,
        SpendCategory::Fuel,
        SpendCategory::Groceries,
        SpendCategory::Travel,
        SpendCategory::Online,
        SpendCategory::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpendCategory::Dining => "dining",
            SpendCategory::Fuel => "fuel",
            SpendCategory::Groceries => "groceries",
            SpendCategory::Travel => "travel",
            SpendCategory::Online => "online",
            SpendCategory::General => "general",
        }
    }
}

impl fmt::Display for SpendCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value for each of the six spend categories.
///
/// Rust concept: one named field per enum variant makes the mapping total at
/// compile time, so a lookup can never miss.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryMap<T> {
    pub dining: T,
    pub fuel: T,
    pub groceries: T,
    pub travel: T,
    pub online: T,
    pub general: T,
}

impl<T> CategoryMap<T> {
    /// Build a map by evaluating `f` once per category.
    pub fn from_fn(mut f: impl FnMut(SpendCategory) -> T) -> Self {
        Self {
            dining: f(SpendCategory::Dining),
            fuel: f(SpendCategory::Fuel),
            groceries: f(SpendCategory::Groceries),
            travel: f(SpendCategory::Travel),
            online: f(SpendCategory::Online),
            general: f(SpendCategory::General),
        }
    }

    pub fn get_ref(&self, category: SpendCategory) -> &T {
        match category {
            SpendCategory::Dining => &self.dining,
            SpendCategory::Fuel => &self.fuel,
            SpendCategory::Groceries => &self.groceries,
            SpendCategory::Travel => &self.travel,
            SpendCategory::Online => &self.online,
            SpendCategory::General => &self.general,
        }
    }

    pub fn get_mut(&mut self, category: SpendCategory) -> &mut T {
        match category {
            SpendCategory::Dining => &mut self.dining,
            SpendCategory::Fuel => &mut self.fuel,
            SpendCategory::Groceries => &mut self.groceries,
            SpendCategory::Travel => &mut self.travel,
            SpendCategory::Online => &mut self.online,
            SpendCategory::General => &mut self.general,
        }
    }

    pub fn set(&mut self, category: SpendCategory, value: T) {
        *self.get_mut(category) = value;
    }
}

impl<T: Copy> CategoryMap<T> {
    pub fn get(&self, category: SpendCategory) -> T {
        *self.get_ref(category)
    }

    /// Iterate `(category, value)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (SpendCategory, T)> + '_ {
        SpendCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

// =============================================================================
// Card Products
// =============================================================================

/// How a card pays out its rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardType {
    Cashback,
    Points,
    Miles,
}

impl RewardType {
    pub fn is_cashback(&self) -> bool {
        matches!(self, RewardType::Cashback)
    }

    /// Unit used when describing bonus amounts; miles are quoted as points.
    pub fn unit_label(&self) -> &'static str {
        match self {
            RewardType::Cashback => "cashback",
            RewardType::Points | RewardType::Miles => "points",
        }
    }
}

impl fmt::Display for RewardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RewardType::Cashback => "cashback",
            RewardType::Points => "points",
            RewardType::Miles => "miles",
        };
        f.write_str(label)
    }
}

/// Published eligibility thresholds for a card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eligibility {
    /// Minimum annual income
    pub min_income: Rupees,
    pub min_credit_score: u16,
    /// Inclusive `(min, max)` applicant age. Carried for display only.
    pub age_range: (u8, u8),
}

/// A credit card product from the catalog.
///
/// Immutable once loaded; scoring only ever borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardProduct {
    pub id: CardId,
    pub name: String,
    pub issuer: String,
    pub joining_fee: Rupees,
    pub annual_fee: Rupees,
    pub reward_type: RewardType,
    /// Headline multiplier, informational only
    pub reward_rate: f64,
    pub eligibility: Eligibility,
    /// Per-category reward multiplier
    pub categories: CategoryMap<f64>,
    pub benefits: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_url: Option<String>,
    /// One-time bonus in the card's native reward unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welcome_bonus: Option<u32>,
    #[serde(default)]
    pub lounge_access: bool,
    #[serde(default)]
    pub fuel_surcharge: bool,
}

impl CreditCardProduct {
    pub fn has_no_fees(&self) -> bool {
        self.joining_fee == 0 && self.annual_fee == 0
    }

    /// All benefit descriptions joined by a space and lowercased, for
    /// case-insensitive substring matching.
    pub fn benefits_haystack(&self) -> String {
        self.benefits.join(" ").to_lowercase()
    }
}

// =============================================================================
// Catalog - The Immutable Card Index
// =============================================================================

/// Ordered, read-only set of card products with an id index.
///
/// Insertion order is preserved: scoring walks `cards()` in this order and the
/// ranking sort is stable, so ties come out in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) cards: Vec<CreditCardProduct>,
    pub(crate) by_id: HashMap<CardId, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Get a card by id
    pub fn get_card(&self, id: &str) -> Option<&CreditCardProduct> {
        self.by_id.get(id).map(|&idx| &self.cards[idx])
    }

    /// All cards in catalog order
    pub fn cards(&self) -> &[CreditCardProduct] {
        &self.cards
    }

    pub fn cards_by_reward_type(&self, reward_type: RewardType) -> Vec<&CreditCardProduct> {
        self.cards
            .iter()
            .filter(|card| card.reward_type == reward_type)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Append a card. A card whose id is already present is ignored and
    /// `false` is returned; `validate` reports duplicates found at load time.
    pub(crate) fn insert_card(&mut self, card: CreditCardProduct) -> bool {
        if self.by_id.contains_key(&card.id) {
            return false;
        }
        self.by_id.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
        true
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CreditCardProduct;
    type IntoIter = std::slice::Iter<'a, CreditCardProduct>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
