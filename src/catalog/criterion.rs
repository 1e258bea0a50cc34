use crate::catalog::RiskTier;
use serde::{Deserialize, Serialize};

/// A single risk dimension with exactly four options, most severe first.
///
/// The option count is structural: a catalog row with any other arity fails
/// to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Criterion {
    /// Criterion name, unique within its category.
    pub name: String,

    /// The four options, position-aligned with the risk tiers.
    pub options: [String; RiskTier::COUNT],
}

impl Criterion {
    /// Map a chosen option back to its tier by position.
    #[must_use]
    pub fn tier_of(&self, option: &str) -> Option<RiskTier> {
        self.options.iter().position(|o| o == option).and_then(RiskTier::from_index)
    }

    /// The option carrying the given tier.
    #[must_use]
    pub fn option_for(&self, tier: RiskTier) -> &str {
        &self.options[tier.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion() -> Criterion {
        Criterion {
            name: "Subcontracting".to_string(),
            options: [
                "Unknown".to_string(),
                "Multiple".to_string(),
                "Limited".to_string(),
                "Controlled".to_string(),
            ],
        }
    }

    #[test]
    fn test_tier_of_each_position() {
        let c = criterion();
        assert_eq!(c.tier_of("Unknown"), Some(RiskTier::Critical));
        assert_eq!(c.tier_of("Multiple"), Some(RiskTier::High));
        assert_eq!(c.tier_of("Limited"), Some(RiskTier::Medium));
        assert_eq!(c.tier_of("Controlled"), Some(RiskTier::Low));
    }

    #[test]
    fn test_tier_of_unknown_option() {
        assert_eq!(criterion().tier_of("Outsourced"), None);
    }

    #[test]
    fn test_tier_of_is_case_sensitive() {
        assert_eq!(criterion().tier_of("unknown"), None);
    }

    #[test]
    fn test_option_for_round_trips() {
        let c = criterion();
        for tier in RiskTier::ordered() {
            assert_eq!(c.tier_of(c.option_for(tier)), Some(tier));
        }
    }

    #[test]
    fn test_wrong_arity_fails_to_deserialize() {
        let yaml = "name: Broken\noptions: [\"A\", \"B\", \"C\"]";
        let result: Result<Criterion, _> = serde_yaml::from_str(yaml);
        let _ = result.unwrap_err();
    }
}
