//! Route handlers.
//!
//! Each handler delegates to `TerminalService` and maps its failure to the
//! fixed status and message of the endpoint.

use crate::error::{Result, ServerError};
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json as AxumJson, Path, State};
use axum::response::Json;
use elyra_core::service::{
    AskAnswer, AskRequest, NewPairsResponse, ScanReport, SolStatus, TokenSummary,
    TrendingResponse,
};
use serde::Serialize;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/token/{address}
pub async fn token(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<TokenSummary>> {
    log::debug!("Fetching token summary for {}", address);
    state
        .service
        .token_summary(&address)
        .await
        .map(Json)
        .map_err(|e| ServerError::from_core(e, "Failed to fetch token data"))
}

/// GET /api/terminal/trending
pub async fn trending(State(state): State<AppState>) -> Result<Json<TrendingResponse>> {
    let tokens = state
        .service
        .trending()
        .await
        .map_err(|e| ServerError::from_core(e, "Failed to fetch trending tokens"))?;
    Ok(Json(TrendingResponse { tokens }))
}

/// GET /api/terminal/newpairs
pub async fn new_pairs(State(state): State<AppState>) -> Result<Json<NewPairsResponse>> {
    let pairs = state
        .service
        .new_pairs()
        .await
        .map_err(|e| ServerError::from_core(e, "Failed to fetch new pairs"))?;
    Ok(Json(NewPairsResponse { pairs }))
}

/// GET /api/terminal/scan/{address}
pub async fn scan(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<ScanReport>> {
    log::info!("Scanning token {}", address);
    state
        .service
        .scan(&address)
        .await
        .map(Json)
        .map_err(|e| ServerError::from_core(e, "Failed to scan token"))
}

/// POST /api/terminal/ask
///
/// A body that is not valid JSON is treated like a missing question.
pub async fn ask(
    State(state): State<AppState>,
    body: std::result::Result<AxumJson<AskRequest>, JsonRejection>,
) -> Result<Json<AskAnswer>> {
    let request = match body {
        Ok(AxumJson(request)) => request,
        Err(rejection) => {
            log::warn!("Rejected ask body: {}", rejection);
            return Err(ServerError::invalid_request("Question is required"));
        }
    };

    let question = request.question.unwrap_or_default();
    let answer = state
        .service
        .ask(&question, request.token_address.as_deref())
        .await
        .map_err(|e| ServerError::from_core(e, "Failed to process question"))?;

    Ok(Json(AskAnswer { answer }))
}

/// GET /api/terminal/sol
pub async fn sol(State(state): State<AppState>) -> Result<Json<SolStatus>> {
    state
        .service
        .sol_status()
        .await
        .map(Json)
        .map_err(|e| ServerError::from_core(e, "Failed to fetch SOL data"))
}
