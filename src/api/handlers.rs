//! Endpoint handlers — typed request/response records, deterministic bodies.
//!
//! Each handler validates its request against the shared schema module, drives
//! the generation backend through the stage sequence the pipeline requires,
//! and re-checks the backend's output against the schema contract before
//! anything reaches the wire. Handlers hold no state of their own; the only
//! shared value is the injected [`Generator`].

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::error::{schema_violation, ApiErrorResponse, AppJson};
use crate::generator::{Generator, GeneratorError, SummaryLimits};
use crate::types::{
    validate_content_package, validate_summaries, CompiledSummaries, ContentBrief,
    ContentCreation, ContentStrategy, ContentStrategyInput, MarketAnalysis, MarketingStrategy,
    ProjectBrief, SchemaError,
};

/// Shared handler state: the injected generation backend.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn Generator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }

    /// State backed by the deterministic canned backend.
    pub fn canned() -> Self {
        Self::new(Arc::new(crate::generator::CannedGenerator::new()))
    }
}

// ============================================================================
// Request / Response types
// ============================================================================

fn default_urls_per_query() -> usize {
    SummaryLimits::DEFAULT_PER_QUERY
}

/// Request body for `POST /analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub project_brief: ProjectBrief,
    #[serde(default = "default_urls_per_query")]
    pub max_urls_per_query: usize,
    #[serde(default)]
    pub max_urls_total: Option<usize>,
}

/// Response body for `POST /analyze`: the echoed brief, per-query research
/// digests, and the market analysis itself.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub project_brief: ProjectBrief,
    pub compiled_summaries: CompiledSummaries,
    pub market_research: MarketAnalysis,
}

/// Request body for `POST /strategic-analysis`.
#[derive(Debug, Deserialize)]
pub struct StrategicAnalysisRequest {
    pub project_brief: ProjectBrief,
    /// Prior analysis to reuse instead of re-running the analysis stage
    #[serde(default)]
    pub market_result: Option<MarketAnalysis>,
    /// Force a fresh analysis even when `market_result` is supplied
    #[serde(default)]
    pub require_exploration: bool,
    #[serde(default = "default_urls_per_query")]
    pub max_urls_per_query: usize,
    #[serde(default)]
    pub max_urls_total: Option<usize>,
}

/// Response body for `POST /strategic-analysis`: the strategy pair plus the
/// analysis it was derived from, unchanged.
#[derive(Debug, Serialize)]
pub struct StrategicAnalysisResponse {
    pub marketing_strategy: MarketingStrategy,
    pub content_strategy: ContentStrategy,
    pub market_research: MarketAnalysis,
}

/// Request body for `POST /content-creation`.
#[derive(Debug, Deserialize)]
pub struct ContentCreationRequest {
    pub market: ProjectBrief,
    pub strategy: ContentStrategyInput,
}

/// Response body for `POST /content-creation`.
#[derive(Debug, Serialize)]
pub struct ContentCreationResponse {
    pub brief: ContentBrief,
    pub content: ContentCreation,
}

// ============================================================================
// Failure mapping
// ============================================================================

/// Map a backend failure to a response. Contract breaches are server faults —
/// the adapter never ships an out-of-contract payload.
fn backend_failure(err: GeneratorError) -> Response {
    match err {
        GeneratorError::Contract(breach) => contract_breach(breach),
        GeneratorError::Unavailable(reason) => {
            warn!(reason = %reason, "generation backend unavailable");
            ApiErrorResponse::service_unavailable("generation backend unavailable")
        }
    }
}

fn contract_breach(breach: SchemaError) -> Response {
    error!(violation = %breach, "generator output violated the schema contract");
    ApiErrorResponse::internal("generated payload violated the response contract")
}

// ============================================================================
// Analysis stage (shared by /analyze and /strategic-analysis)
// ============================================================================

/// Run the full analysis stage for a brief. `/strategic-analysis` goes through
/// this same path, so its embedded analysis is identical to what `/analyze`
/// returns for the same brief.
async fn run_market_analysis(
    state: &AppState,
    project_brief: ProjectBrief,
    limits: SummaryLimits,
) -> Result<AnalyzeResponse, Response> {
    let market_research = state
        .generator
        .market_analysis(&project_brief)
        .await
        .map_err(backend_failure)?;
    market_research.validate().map_err(contract_breach)?;

    let compiled_summaries = state
        .generator
        .research_summaries(&project_brief, limits)
        .await
        .map_err(backend_failure)?;
    validate_summaries(&compiled_summaries).map_err(contract_breach)?;

    Ok(AnalyzeResponse {
        project_brief,
        compiled_summaries,
        market_research,
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// `POST /analyze` — market analysis plus compiled research summaries.
pub async fn analyze(
    State(state): State<AppState>,
    AppJson(request): AppJson<AnalyzeRequest>,
) -> Response {
    let limits = SummaryLimits::new(request.max_urls_per_query, request.max_urls_total);
    match run_market_analysis(&state, request.project_brief, limits).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(response) => response,
    }
}

/// `POST /strategic-analysis` — marketing strategy and content strategy
/// composed with the market analysis they were derived from.
///
/// The stages are strictly sequential: strategy generation starts only after
/// the analysis stage has completed (or a prior result has been accepted),
/// and content-strategy generation only after the marketing strategy.
pub async fn strategic_analysis(
    State(state): State<AppState>,
    AppJson(request): AppJson<StrategicAnalysisRequest>,
) -> Response {
    let market_research = match (request.market_result, request.require_exploration) {
        (Some(prior), false) => {
            if let Err(breach) = prior.validate() {
                return schema_violation("market_result", &breach);
            }
            info!("reusing caller-supplied market analysis");
            prior
        }
        (prior, _) => {
            if prior.is_some() {
                info!("exploration required, discarding caller-supplied market analysis");
            }
            let limits = SummaryLimits::new(request.max_urls_per_query, request.max_urls_total);
            match run_market_analysis(&state, request.project_brief.clone(), limits).await {
                Ok(analysis) => analysis.market_research,
                Err(response) => return response,
            }
        }
    };

    let marketing_strategy = match state
        .generator
        .marketing_strategy(&request.project_brief, &market_research)
        .await
    {
        Ok(strategy) => strategy,
        Err(err) => return backend_failure(err),
    };
    if let Err(breach) = marketing_strategy.validate() {
        return contract_breach(breach);
    }

    let content_strategy = match state
        .generator
        .content_strategy(&request.project_brief, &marketing_strategy)
        .await
    {
        Ok(strategy) => strategy,
        Err(err) => return backend_failure(err),
    };
    if let Err(breach) = content_strategy.validate() {
        return contract_breach(breach);
    }

    (
        StatusCode::OK,
        Json(StrategicAnalysisResponse {
            marketing_strategy,
            content_strategy,
            market_research,
        }),
    )
        .into_response()
}

/// `POST /content-creation` — expand a strategy into a creative brief and one
/// finished artifact.
pub async fn content_creation(
    State(state): State<AppState>,
    AppJson(request): AppJson<ContentCreationRequest>,
) -> Response {
    if let Err(breach) = request.strategy.validate() {
        return schema_violation("strategy.key_messages", &breach);
    }

    let (brief, content) = match state
        .generator
        .content_package(&request.market, &request.strategy)
        .await
    {
        Ok(package) => package,
        Err(err) => return backend_failure(err),
    };
    if let Err(breach) = validate_content_package(&brief, &content) {
        return contract_breach(breach);
    }

    (
        StatusCode::OK,
        Json(ContentCreationResponse { brief, content }),
    )
        .into_response()
}

/// `GET /health` — static liveness probe.
pub async fn health() -> Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "ok" })),
    )
        .into_response()
}
