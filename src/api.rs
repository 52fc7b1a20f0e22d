// src/api.rs
//! HTTP surface for the presentation layer: JSON views of the analysis
//! pipeline plus the date-selection lookup. The pipeline re-runs from
//! scratch on every analysis request; nothing is cached between calls.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::analysis::{self, AnalysisSnapshot};
use crate::error::PipelineError;
use crate::source::types::DataProvider;
use crate::timeline::find_by_date;

#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn DataProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self { provider }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/news-events", get(news_events))
        .route("/api/market-data", get(market_data))
        .route("/api/analysis", get(full_analysis))
        .route("/api/network", get(entity_network))
        .route("/api/categories", get(categories))
        .route("/api/events/{date}", get(event_by_date))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// API-level error: pipeline errors mapped onto status codes, plus 404
/// for selection misses.
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(e: PipelineError) -> Self {
        let status = match e {
            PipelineError::SourceUnavailable(_) => StatusCode::BAD_GATEWAY,
            PipelineError::InvalidDate { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

async fn snapshot(state: &AppState) -> Result<AnalysisSnapshot, ApiError> {
    Ok(analysis::run(state.provider.as_ref()).await?)
}

async fn full_analysis(State(state): State<AppState>) -> Result<Json<AnalysisSnapshot>, ApiError> {
    Ok(Json(snapshot(&state).await?))
}

async fn news_events(State(state): State<AppState>) -> Result<Response, ApiError> {
    let snap = snapshot(&state).await?;
    Ok(Json(snap.events).into_response())
}

async fn market_data(State(state): State<AppState>) -> Result<Response, ApiError> {
    let (_, rows) = crate::source::fetch_all(state.provider.as_ref()).await?;
    Ok(Json(rows).into_response())
}

async fn entity_network(State(state): State<AppState>) -> Result<Response, ApiError> {
    let snap = snapshot(&state).await?;
    Ok(Json(snap.network).into_response())
}

async fn categories(State(state): State<AppState>) -> Result<Response, ApiError> {
    let snap = snapshot(&state).await?;
    Ok(Json(snap.categories).into_response())
}

/// Selection contract: exact calendar-date lookup, 404 when no event
/// falls on the requested date.
async fn event_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Response, ApiError> {
    let snap = snapshot(&state).await?;
    match find_by_date(&snap.events, &date) {
        Some(ev) => Ok(Json(ev).into_response()),
        None => Err(ApiError::not_found(format!("no event on date {date}"))),
    }
}
