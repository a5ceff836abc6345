//! Read-only HTTP API over a loaded SentimentEngine
//!
//! Endpoints:
//! - GET /health - Mode, verse count, load time
//! - GET /verses/top?emotion=Joy&n=10 - Top verses for an emotion
//! - GET /rankings/:key - Groups by mean compound (book | book+chapter)
//! - GET /emotions/distribution - Corpus-wide emotion totals
//! - GET /heatmap - Mean compound per chapter

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::SentimentEngine;
use crate::types::{
    EmotionTotal, EngineError, GroupKey, GroupRanking, HeatmapRow, ScoringMode, TopVerses,
};

/// Health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub mode: ScoringMode,
    pub message: String,
    pub verses: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Top verses query string
#[derive(Debug, Deserialize)]
pub struct TopQuery {
    pub emotion: Option<String>,
    pub n: Option<usize>,
}

/// Group ranking response
#[derive(Debug, Serialize, Deserialize)]
pub struct RankingResponse {
    pub key: GroupKey,
    pub groups: Vec<GroupRanking>,
}

/// Emotion distribution response
#[derive(Debug, Serialize, Deserialize)]
pub struct DistributionResponse {
    pub totals: Vec<EmotionTotal>,
}

/// Heatmap response
#[derive(Debug, Serialize, Deserialize)]
pub struct HeatmapResponse {
    pub rows: Vec<HeatmapRow>,
}

/// Error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Query error mapped onto a status code
pub struct ApiError(EngineError);

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            EngineError::LexiconUnavailable => StatusCode::CONFLICT,
            ref e if e.is_invalid_query() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorResponse { error: self.0.to_string() })).into_response()
    }
}

/// Create the API router
pub fn create_router(engine: Arc<SentimentEngine>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/verses/top", get(top_verses))
        .route("/rankings/:key", get(rankings))
        .route("/emotions/distribution", get(distribution))
        .route("/heatmap", get(heatmap))
        .with_state(engine)
}

/// Health check endpoint
async fn health(State(engine): State<Arc<SentimentEngine>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        mode: engine.mode(),
        message: engine.status_message().to_string(),
        verses: engine.len(),
        loaded_at: engine.loaded_at(),
    })
}

async fn top_verses(
    State(engine): State<Arc<SentimentEngine>>,
    Query(query): Query<TopQuery>,
) -> Result<Json<TopVerses>, ApiError> {
    let emotion = query.emotion.unwrap_or_default();
    let n = query.n.unwrap_or(engine.top_n());
    Ok(Json(engine.top_scored(&emotion, n)?))
}

async fn rankings(
    State(engine): State<Arc<SentimentEngine>>,
    Path(key): Path<String>,
) -> Result<Json<RankingResponse>, ApiError> {
    let parsed: GroupKey = key.parse()?;
    Ok(Json(RankingResponse {
        key: parsed,
        groups: engine.rank_groups(&key)?,
    }))
}

async fn distribution(
    State(engine): State<Arc<SentimentEngine>>,
) -> Result<Json<DistributionResponse>, ApiError> {
    Ok(Json(DistributionResponse {
        totals: engine.emotion_distribution()?,
    }))
}

async fn heatmap(State(engine): State<Arc<SentimentEngine>>) -> Json<HeatmapResponse> {
    Json(HeatmapResponse {
        rows: engine.chapter_heatmap(),
    })
}

/// Run the API server
pub async fn run_server(addr: &str, engine: Arc<SentimentEngine>) -> std::io::Result<()> {
    let router = create_router(engine);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr, "verse-sentiment API listening");
    axum::serve(listener, router).await
}
