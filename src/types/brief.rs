//! Project brief types

use serde::{Deserialize, Serialize};

/// Caller-supplied description of the product or business to analyze.
///
/// Every field is required; a missing field is rejected at deserialization
/// time with a field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBrief {
    /// Working title for the engagement (e.g. "CloudFlow Q3 launch")
    pub project_title: String,
    /// What is being marketed
    pub product_or_service: String,
    /// Short description of the business and its positioning
    pub business_description: String,
    /// Comma-separated channels the caller already invests in
    pub marketing_channels: String,
    /// Audience the campaign should reach
    pub target_audience: String,
    /// Primary commercial goal (e.g. "signups", "pipeline")
    pub primary_goal: String,
}

impl ProjectBrief {
    /// Channels listed in `marketing_channels`, trimmed, empty entries dropped.
    pub fn channels(&self) -> Vec<String> {
        self.marketing_channels
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}
