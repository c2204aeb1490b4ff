//! Scoring constants, gathered so callers can tune them in one place.

use serde::{Deserialize, Serialize};

/// Tunables for ranking.
///
/// `Default` gives the standard advisor behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringConfig {
    /// Length of the returned list
    pub max_results: usize,
    /// Lowest match percentage ever shown
    pub match_floor: u32,
    /// Total score that maps to a 100% match
    pub score_scale: f64,
    /// Eligibility must exceed this for a card to be shown to a profile
    /// that disclosed income or credit score
    pub min_eligibility: f64,
    /// Currency value of one reward point
    pub point_value: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_results: 5,
            match_floor: 25,
            score_scale: 125.0,
            min_eligibility: 20.0,
            point_value: 0.25,
        }
    }
}

impl ScoringConfig {
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Match percentage for a total score, never below `match_floor`.
    pub fn match_percent(&self, total: f64) -> u32 {
        let percent = (total / self.score_scale * 100.0).round().max(0.0) as u32;
        percent.max(self.match_floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_percent() {
        let config = ScoringConfig::default();
        assert_eq!(config.match_percent(0.0), 25);
        assert_eq!(config.match_percent(31.0), 25);
        assert_eq!(config.match_percent(100.0), 80);
        assert_eq!(config.match_percent(125.0), 100);
        assert_eq!(config.match_percent(62.4), 50);
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: ScoringConfig = serde_json::from_str(r#"{"maxResults": 3}"#).unwrap();
        assert_eq!(config.max_results, 3);
        assert_eq!(config.match_floor, 25);
        assert_eq!(config.point_value, 0.25);
    }
}
