//! Answer brackets and their representative values.
//!
//! Users pick a range; the profile stores one number standing in for it so
//! scoring can do arithmetic.

use card_data::Rupees;

/// A selectable range and the value stored when it is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub label: &'static str,
    pub value: u32,
}

const fn bracket(label: &'static str, value: u32) -> Bracket {
    Bracket { label, value }
}

/// Look up the value for an exact option label.
pub fn lookup(brackets: &[Bracket], answer: &str) -> Option<u32> {
    brackets
        .iter()
        .find(|bracket| bracket.label == answer)
        .map(|bracket| bracket.value)
}

pub fn labels(brackets: &[Bracket]) -> Vec<&'static str> {
    brackets.iter().map(|bracket| bracket.label).collect()
}

pub const PREFER_NOT_TO_SAY: &str = "Prefer not to say";

pub const INCOME: [Bracket; 6] = [
    bracket("₹20,000 - ₹40,000", 30000),
    bracket("₹40,000 - ₹75,000", 57500),
    bracket("₹75,000 - ₹1,50,000", 112500),
    bracket("₹1,50,000 - ₹3,00,000", 225000),
    bracket("₹3,00,000+", 350000),
    bracket(PREFER_NOT_TO_SAY, 0),
];

pub const DINING: [Bracket; 5] = [
    bracket("₹0 - ₹2,000", 1000),
    bracket("₹2,000 - ₹5,000", 3500),
    bracket("₹5,000 - ₹10,000", 7500),
    bracket("₹10,000 - ₹20,000", 15000),
    bracket("₹20,000+", 25000),
];

pub const FUEL: [Bracket; 5] = [
    bracket("₹0 - ₹2,000", 1000),
    bracket("₹2,000 - ₹5,000", 3500),
    bracket("₹5,000 - ₹8,000", 6500),
    bracket("₹8,000 - ₹15,000", 11500),
    bracket("₹15,000+", 18000),
];

pub const GROCERIES: [Bracket; 5] = [
    bracket("₹2,000 - ₹5,000", 3500),
    bracket("₹5,000 - ₹10,000", 7500),
    bracket("₹10,000 - ₹20,000", 15000),
    bracket("₹20,000 - ₹35,000", 27500),
    bracket("₹35,000+", 40000),
];

pub const TRAVEL: [Bracket; 5] = [
    bracket("₹0 - ₹3,000", 1500),
    bracket("₹3,000 - ₹8,000", 5500),
    bracket("₹8,000 - ₹15,000", 11500),
    bracket("₹15,000 - ₹30,000", 22500),
    bracket("₹30,000+", 35000),
];

pub const ONLINE: [Bracket; 5] = [
    bracket("₹0 - ₹3,000", 1500),
    bracket("₹3,000 - ₹8,000", 5500),
    bracket("₹8,000 - ₹15,000", 11500),
    bracket("₹15,000 - ₹25,000", 20000),
    bracket("₹25,000+", 30000),
];

/// Monthly general spend assumed once online spend is known; no question asks for it.
pub const DEFAULT_GENERAL_SPEND: Rupees = 5000;

pub const CREDIT_SCORE_UNKNOWN: &str = "I don't know";

pub const CREDIT_SCORE: [Bracket; 5] = [
    bracket("Excellent (750+)", 780),
    bracket("Good (700-750)", 725),
    bracket("Fair (650-700)", 675),
    bracket("Poor (600-650)", 625),
    bracket(CREDIT_SCORE_UNKNOWN, 700),
];

// Scoring gives a flat bonus for the literal label "Airport Lounge", which
// is not one of these options. Edit these labels with that in mind.
// Labels must not contain a comma between two digits: `split_selections`
// reads that as a thousands separator and will not split there.
pub const BENEFIT_OPTIONS: [&str; 7] = [
    "Airport Lounge Access",
    "High Cashback/Rewards",
    "Travel Benefits",
    "Fuel Benefits",
    "Dining Discounts",
    "No Annual Fee",
    "Welcome Bonus",
];

pub const PRIMARY_USE_OPTIONS: [&str; 5] = [
    "Daily expenses & shopping",
    "Travel & lifestyle",
    "Building credit history",
    "Emergency backup",
    "Business expenses",
];
