//! Generation backend module
//!
//! Provides a unified interface for strategy-generation backends so the HTTP
//! layer stays a thin adapter over a swappable collaborator.
//!
//! ## Architecture
//!
//! - **Generator trait**: one method per pipeline stage (market analysis,
//!   research summaries, marketing strategy, content strategy, content
//!   package), sequenced by the caller
//! - **CannedGenerator**: deterministic fixture-backed backend, the stand-in
//!   until a model-backed implementation exists
//!
//! A real backend would add timeouts, retries and partial-result handling
//! around its upstream calls; the [`GeneratorError::Unavailable`] variant is
//! the seam those failures surface through.

use async_trait::async_trait;
use thiserror::Error;

mod canned;
mod fixtures;

pub use canned::CannedGenerator;

use crate::types::{
    CompiledSummaries, ContentBrief, ContentCreation, ContentStrategy, ContentStrategyInput,
    MarketAnalysis, MarketingStrategy, ProjectBrief, SchemaError,
};

/// Failure modes of a generation backend.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The backend produced output that violates the schema contract.
    #[error("generator produced out-of-contract output: {0}")]
    Contract(#[from] SchemaError),

    /// The backend (or its upstream service) could not be reached.
    #[error("generation backend unavailable: {0}")]
    Unavailable(String),
}

/// Caps applied to the compiled research summaries.
#[derive(Debug, Clone, Copy)]
pub struct SummaryLimits {
    /// Maximum URLs kept per research query
    pub per_query: usize,
    /// Maximum URLs kept across all queries, applied in query-key order
    pub total: Option<usize>,
}

impl SummaryLimits {
    pub const DEFAULT_PER_QUERY: usize = 2;

    pub fn new(per_query: usize, total: Option<usize>) -> Self {
        Self { per_query, total }
    }

    /// Truncate a compiled-summaries map to these limits.
    ///
    /// Per-query cap first, then the global cap walking queries in key order.
    /// Queries left without any URL are dropped entirely. Deterministic for a
    /// given input because both map levels are ordered.
    pub fn apply(self, summaries: CompiledSummaries) -> CompiledSummaries {
        let mut remaining = self.total.unwrap_or(usize::MAX);
        let mut capped = CompiledSummaries::new();

        for (query, by_url) in summaries {
            if remaining == 0 {
                break;
            }
            let take = self.per_query.min(remaining);
            let kept: std::collections::BTreeMap<_, _> =
                by_url.into_iter().take(take).collect();
            if kept.is_empty() {
                continue;
            }
            remaining -= kept.len();
            capped.insert(query, kept);
        }

        capped
    }
}

impl Default for SummaryLimits {
    fn default() -> Self {
        Self {
            per_query: Self::DEFAULT_PER_QUERY,
            total: None,
        }
    }
}

/// Unified trait for strategy-generation backends.
///
/// Stages form a pipeline: brief -> analysis -> strategy -> content strategy,
/// and separately (brief, strategy input) -> content package. Callers must
/// await each stage before starting the next; later stages take earlier
/// outputs as input context even when a backend chooses to ignore them.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Produce a market analysis for the brief.
    async fn market_analysis(&self, brief: &ProjectBrief)
        -> Result<MarketAnalysis, GeneratorError>;

    /// Produce per-query, per-source research digests for the brief.
    async fn research_summaries(
        &self,
        brief: &ProjectBrief,
        limits: SummaryLimits,
    ) -> Result<CompiledSummaries, GeneratorError>;

    /// Produce a marketing strategy grounded in a completed market analysis.
    async fn marketing_strategy(
        &self,
        brief: &ProjectBrief,
        analysis: &MarketAnalysis,
    ) -> Result<MarketingStrategy, GeneratorError>;

    /// Produce a content strategy from a completed marketing strategy.
    async fn content_strategy(
        &self,
        brief: &ProjectBrief,
        strategy: &MarketingStrategy,
    ) -> Result<ContentStrategy, GeneratorError>;

    /// Expand a strategy input into a creative brief plus one finished artifact.
    async fn content_package(
        &self,
        market: &ProjectBrief,
        strategy: &ContentStrategyInput,
    ) -> Result<(ContentBrief, ContentCreation), GeneratorError>;

    /// Backend name for logging.
    fn backend_name(&self) -> &'static str;
}
