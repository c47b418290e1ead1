//! Content creation types: ContentStrategyInput, ContentBrief, ContentCreation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{check_categories, SchemaError};

fn default_format() -> String {
    "Email".to_string()
}

/// Structured strategy context supplied to the content-creation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStrategyInput {
    pub core_message: String,
    pub content_goals: Vec<String>,
    pub audience_motivations: Vec<String>,
    pub strategic_angles: Vec<String>,
    /// Category -> phrases that must survive into the final content
    pub key_messages: BTreeMap<String, Vec<String>>,
    pub tone_of_voice: String,
    /// Format of the artifact to produce (e.g. "Email", "Blog Post")
    #[serde(default = "default_format")]
    pub requested_format: String,
}

impl ContentStrategyInput {
    pub fn validate(&self) -> Result<(), SchemaError> {
        check_categories("key_messages", &self.key_messages)
    }
}

/// Creative brief for one content piece, expanded from a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBrief {
    pub title: String,
    pub core_message: String,
    pub creative_angles: Vec<String>,
    pub content_goals: Vec<String>,
    pub audience_profile: String,
    /// Category -> required phrases, carried verbatim into the final content
    pub mandatory_inclusions: BTreeMap<String, Vec<String>>,
    pub recommended_formats: Vec<String>,
    /// Channel -> guidance for adapting the piece to that channel
    pub channel_guidance: BTreeMap<String, Vec<String>>,
    pub tone_of_voice: String,
    pub constraints: Vec<String>,
}

/// A finished content artifact produced from a [`ContentBrief`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCreation {
    /// The full text body of the artifact
    pub final_content: String,
    /// Angles actually used; always a subset of the brief's creative angles
    pub applied_angles: Vec<String>,
    /// Must equal the brief's mandatory_inclusions exactly
    pub key_inclusions: BTreeMap<String, Vec<String>>,
    pub tone_of_voice: String,
    /// Format tag, echoing the requested format (e.g. "Email")
    pub format: String,
}

/// Verify the brief/content completeness contract:
/// applied angles are a subset of the brief's creative angles, and the
/// mandatory inclusions reach the final content unchanged.
pub fn validate_content_package(
    brief: &ContentBrief,
    content: &ContentCreation,
) -> Result<(), SchemaError> {
    check_categories("mandatory_inclusions", &brief.mandatory_inclusions)?;
    for angle in &content.applied_angles {
        if !brief.creative_angles.contains(angle) {
            return Err(SchemaError::UnknownAngle(angle.clone()));
        }
    }
    if content.key_inclusions != brief.mandatory_inclusions {
        return Err(SchemaError::InclusionMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inclusions() -> BTreeMap<String, Vec<String>> {
        let mut map = BTreeMap::new();
        map.insert("value_prop".to_string(), vec!["the pitch".to_string()]);
        map
    }

    fn brief() -> ContentBrief {
        ContentBrief {
            title: "t".to_string(),
            core_message: "m".to_string(),
            creative_angles: vec!["angle a".to_string(), "angle b".to_string()],
            content_goals: vec!["awareness".to_string()],
            audience_profile: "devs".to_string(),
            mandatory_inclusions: inclusions(),
            recommended_formats: vec!["Email".to_string()],
            channel_guidance: BTreeMap::new(),
            tone_of_voice: "confident".to_string(),
            constraints: vec![],
        }
    }

    fn content() -> ContentCreation {
        ContentCreation {
            final_content: "body".to_string(),
            applied_angles: vec!["angle a".to_string()],
            key_inclusions: inclusions(),
            tone_of_voice: "confident".to_string(),
            format: "Email".to_string(),
        }
    }

    #[test]
    fn test_valid_package_accepted() {
        assert!(validate_content_package(&brief(), &content()).is_ok());
    }

    #[test]
    fn test_foreign_angle_rejected() {
        let mut c = content();
        c.applied_angles.push("angle z".to_string());
        let err = validate_content_package(&brief(), &c).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownAngle(_)));
    }

    #[test]
    fn test_dropped_inclusion_rejected() {
        let mut c = content();
        c.key_inclusions.clear();
        let err = validate_content_package(&brief(), &c).unwrap_err();
        assert!(matches!(err, SchemaError::InclusionMismatch));
    }

    #[test]
    fn test_requested_format_defaults_to_email() {
        let input: ContentStrategyInput = serde_json::from_value(serde_json::json!({
            "core_message": "m",
            "content_goals": [],
            "audience_motivations": [],
            "strategic_angles": [],
            "key_messages": {"value_prop": ["p"]},
            "tone_of_voice": "confident"
        }))
        .unwrap();
        assert_eq!(input.requested_format, "Email");
    }
}
