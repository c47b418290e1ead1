//! Strategy types: MarketingStrategy, ContentStrategy

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{check_categories, SchemaError};

/// Strategic direction derived from a market analysis.
///
/// In the shipped canned backend no field is computed from the analysis at
/// runtime, but the generation seam still receives the analysis as input:
/// strategy generation is sequenced strictly after market analysis so a real
/// backend can consume it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingStrategy {
    /// What is holding the business back in the current market
    pub diagnosis: String,
    /// The single guiding policy for the campaign
    pub strategic_direction: String,
    pub strategy_pillars: Vec<String>,
    /// Message category -> messages for that category
    pub messaging_framework: BTreeMap<String, Vec<String>>,
    /// Rollout phase -> concrete actions
    pub go_to_market_plan: BTreeMap<String, Vec<String>>,
    /// Ordered by execution priority, highest first
    pub priorities: Vec<String>,
}

impl MarketingStrategy {
    pub fn validate(&self) -> Result<(), SchemaError> {
        check_categories("messaging_framework", &self.messaging_framework)?;
        check_categories("go_to_market_plan", &self.go_to_market_plan)?;
        Ok(())
    }
}

/// Content plan derived from a marketing strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStrategy {
    pub core_message: String,
    pub content_goals: Vec<String>,
    pub audience_motivations: Vec<String>,
    pub strategic_angles: Vec<String>,
    pub recommended_formats: Vec<String>,
    /// Channel -> tactics to run on that channel
    pub channel_playbook: BTreeMap<String, Vec<String>>,
    /// Category -> phrases every piece of content must carry
    pub mandatory_inclusions: BTreeMap<String, Vec<String>>,
}

impl ContentStrategy {
    pub fn validate(&self) -> Result<(), SchemaError> {
        check_categories("channel_playbook", &self.channel_playbook)?;
        check_categories("mandatory_inclusions", &self.mandatory_inclusions)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_messaging_category_rejected() {
        let mut framework = BTreeMap::new();
        framework.insert("value_proposition".to_string(), Vec::new());

        let strategy = MarketingStrategy {
            diagnosis: "d".to_string(),
            strategic_direction: "s".to_string(),
            strategy_pillars: vec![],
            messaging_framework: framework,
            go_to_market_plan: BTreeMap::new(),
            priorities: vec![],
        };

        let err = strategy.validate().unwrap_err();
        assert!(err.to_string().contains("value_proposition"));
    }

    #[test]
    fn test_populated_categories_accepted() {
        let mut playbook = BTreeMap::new();
        playbook.insert("LinkedIn".to_string(), vec!["post weekly".to_string()]);
        let mut inclusions = BTreeMap::new();
        inclusions.insert("value_prop".to_string(), vec!["the pitch".to_string()]);

        let strategy = ContentStrategy {
            core_message: "m".to_string(),
            content_goals: vec![],
            audience_motivations: vec![],
            strategic_angles: vec![],
            recommended_formats: vec![],
            channel_playbook: playbook,
            mandatory_inclusions: inclusions,
        };

        assert!(strategy.validate().is_ok());
    }
}
