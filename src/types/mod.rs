//! Shared data structures for the marketing strategy pipeline
//!
//! This module is the single source of truth for every request/response record
//! the service speaks. Handlers import these types instead of declaring their
//! own copies, so nested and top-level occurrences of the same record can
//! never drift apart:
//! - ProjectBrief (caller input)
//! - MarketAnalysis + SourceSummary (analysis stage)
//! - MarketingStrategy, ContentStrategy (strategy stage)
//! - ContentStrategyInput, ContentBrief, ContentCreation (content stage)
//!
//! Map-valued fields use `BTreeMap` so serialized output has a stable key
//! order and identical requests produce byte-identical responses.

mod brief;
mod content;
mod market;
mod strategy;

pub use brief::*;
pub use content::*;
pub use market::*;
pub use strategy::*;

use thiserror::Error;

/// Violation of a schema-level invariant.
///
/// Produced when a payload (caller-supplied or generator-produced) breaks one
/// of the documented contract rules. The HTTP layer maps these to 4xx for
/// request payloads and 5xx for generator output.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A bounded score left the [0, 1] interval.
    #[error("{field}: value {value} outside [0, 1]")]
    ScoreOutOfRange { field: String, value: f64 },

    /// A category label mapped to an empty list.
    #[error("{field}: category {category:?} maps to an empty list")]
    EmptyCategory { field: String, category: String },

    /// An applied angle is not among the brief's creative angles.
    #[error("applied angle {0:?} is not a creative angle of the brief")]
    UnknownAngle(String),

    /// Final content did not carry the brief's mandatory inclusions verbatim.
    #[error("key_inclusions differ from the brief's mandatory_inclusions")]
    InclusionMismatch,
}

/// Check that `value` is a valid unit-interval score.
pub(crate) fn check_unit_score(field: &str, value: f64) -> Result<(), SchemaError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SchemaError::ScoreOutOfRange {
            field: field.to_string(),
            value,
        })
    }
}

/// Check that every category in a `label -> list` mapping is non-empty.
pub(crate) fn check_categories<V>(
    field: &str,
    map: &std::collections::BTreeMap<String, Vec<V>>,
) -> Result<(), SchemaError> {
    for (category, entries) in map {
        if entries.is_empty() {
            return Err(SchemaError::EmptyCategory {
                field: field.to_string(),
                category: category.clone(),
            });
        }
    }
    Ok(())
}
