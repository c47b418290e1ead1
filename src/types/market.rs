//! Market analysis types: MarketAnalysis, Competitor, MarketTrend, Opportunity,
//! SourceSummary

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{check_unit_score, SchemaError};

/// A competitor observed in the target market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub strength: String,
    pub weakness: String,
}

/// A market trend with a qualitative velocity label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketTrend {
    pub trend: String,
    /// e.g. "accelerating", "stable", "declining"
    pub velocity: String,
}

/// A scored market opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub opportunity: String,
    /// Expected impact if pursued, in [0, 1]
    pub impact_score: f64,
    /// Confidence in the assessment, in [0, 1]
    pub confidence: f64,
}

/// Competitive/market snapshot for a project brief.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub executive_summary: String,
    pub competitors: Vec<Competitor>,
    pub market_trends: Vec<MarketTrend>,
    pub audience_insights: Vec<String>,
    pub pricing_models: Vec<String>,
    pub opportunities: Vec<Opportunity>,
    pub sources: Vec<String>,
}

impl MarketAnalysis {
    /// Verify the bounded-score invariant on every opportunity.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for (i, opp) in self.opportunities.iter().enumerate() {
            check_unit_score(&format!("opportunities[{i}].impact_score"), opp.impact_score)?;
            check_unit_score(&format!("opportunities[{i}].confidence"), opp.confidence)?;
        }
        Ok(())
    }
}

/// Per-source research digest inside `compiled_summaries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSummary {
    /// Relevance of the source to its research query, in [0, 1]
    pub relevance: f64,
    /// Strategic weight of the findings, in [0, 1]
    pub impact_score: f64,
    pub summary: String,
    pub key_points: Vec<String>,
    pub strategic_insights: Vec<String>,
}

/// Research-query string -> URL -> digest. Both levels ordered for stable
/// serialization.
pub type CompiledSummaries = BTreeMap<String, BTreeMap<String, SourceSummary>>;

/// Verify the bounded-score invariant across a compiled-summaries map.
pub fn validate_summaries(summaries: &CompiledSummaries) -> Result<(), SchemaError> {
    for (query, by_url) in summaries {
        for (url, digest) in by_url {
            check_unit_score(&format!("compiled_summaries[{query:?}][{url:?}].relevance"), digest.relevance)?;
            check_unit_score(
                &format!("compiled_summaries[{query:?}][{url:?}].impact_score"),
                digest.impact_score,
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis_with_score(impact: f64) -> MarketAnalysis {
        MarketAnalysis {
            executive_summary: "summary".to_string(),
            competitors: vec![],
            market_trends: vec![],
            audience_insights: vec![],
            pricing_models: vec![],
            opportunities: vec![Opportunity {
                opportunity: "expand".to_string(),
                impact_score: impact,
                confidence: 0.5,
            }],
            sources: vec![],
        }
    }

    #[test]
    fn test_validate_accepts_unit_interval() {
        assert!(analysis_with_score(0.0).validate().is_ok());
        assert!(analysis_with_score(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_score() {
        let err = analysis_with_score(1.2).validate().unwrap_err();
        assert!(matches!(err, SchemaError::ScoreOutOfRange { .. }));
        assert!(err.to_string().contains("opportunities[0].impact_score"));
    }

    #[test]
    fn test_validate_summaries_names_offending_entry() {
        let mut by_url = BTreeMap::new();
        by_url.insert(
            "https://example.com".to_string(),
            SourceSummary {
                relevance: -0.1,
                impact_score: 0.5,
                summary: "s".to_string(),
                key_points: vec![],
                strategic_insights: vec![],
            },
        );
        let mut summaries = CompiledSummaries::new();
        summaries.insert("pricing".to_string(), by_url);

        let err = validate_summaries(&summaries).unwrap_err();
        assert!(err.to_string().contains("relevance"));
        assert!(err.to_string().contains("pricing"));
    }
}
