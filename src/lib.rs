//! Stratagem: Marketing Strategy Intelligence
//!
//! Deterministic HTTP service composing a market-analysis -> marketing-strategy
//! -> content-creation pipeline over JSON.
//!
//! ## Architecture
//!
//! - **Schema module**: single source of truth for every wire record
//! - **Generator seam**: swappable generation backend behind a trait; the
//!   shipped backend returns canned, fully deterministic content
//! - **API adapter**: thin axum layer that validates requests, sequences the
//!   generation stages, and re-checks outputs against the schema contract

pub mod api;
pub mod config;
pub mod generator;
pub mod types;

// Re-export the server entry points
pub use api::{create_app, AppState};

// Re-export configuration
pub use config::{ConfigError, ServiceConfig};

// Re-export the generation seam
pub use generator::{CannedGenerator, Generator, GeneratorError, SummaryLimits};

// Re-export commonly used schema types
pub use types::{
    CompiledSummaries, Competitor, ContentBrief, ContentCreation, ContentStrategy,
    ContentStrategyInput, MarketAnalysis, MarketTrend, MarketingStrategy, Opportunity,
    ProjectBrief, SchemaError, SourceSummary,
};
