//! The user's financial profile, filled in one answer at a time.

use crate::types::{CategoryMap, Rupees};
use serde::{Deserialize, Serialize};

/// Monthly spend per category
pub type SpendingHabits = CategoryMap<Rupees>;

/// Answers collected so far.
///
/// A field is `None` until its question has been answered. Fields are only
/// ever added, never cleared, for the lifetime of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Representative monthly income; `Some(0)` means the user declined to say
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<Rupees>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spending_habits: Option<SpendingHabits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_benefits: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<u16>,
    /// Collected for display, not scored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_use: Option<String>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monthly income, if the user disclosed a non-zero amount.
    pub fn disclosed_income(&self) -> Option<Rupees> {
        self.monthly_income.filter(|&income| income > 0)
    }

    /// Disclosed monthly income scaled to a year.
    pub fn annual_income(&self) -> Option<u64> {
        self.disclosed_income().map(|income| u64::from(income) * 12)
    }

    /// Credit score, if one was given and is non-zero.
    pub fn disclosed_credit_score(&self) -> Option<u16> {
        self.credit_score.filter(|&score| score > 0)
    }

    /// True when neither income nor credit score is known.
    pub fn is_undisclosed(&self) -> bool {
        self.disclosed_income().is_none() && self.disclosed_credit_score().is_none()
    }

    /// Exact (case-sensitive, whole-label) membership in the preferred list.
    pub fn prefers(&self, label: &str) -> bool {
        self.preferred_benefits
            .as_ref()
            .is_some_and(|benefits| benefits.iter().any(|benefit| benefit == label))
    }

    /// Spending map for writing, created all-zero on first use.
    pub fn spending_mut(&mut self) -> &mut SpendingHabits {
        self.spending_habits.get_or_insert_with(SpendingHabits::default)
    }

    /// Sum of monthly spend across all six categories (0 when unknown).
    pub fn total_monthly_spend(&self) -> u64 {
        self.spending_habits
            .as_ref()
            .map(|habits| habits.iter().map(|(_, amount)| u64::from(amount)).sum())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
