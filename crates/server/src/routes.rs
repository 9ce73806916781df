use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use models::score::{ScoreRecord, ScoreSubmission};
use service::ranking::RankingService;

use crate::errors::ApiError;

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub result: &'static str,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// POST /submit_score — record one score and rewrite the top 10.
async fn submit_score(
    State(ranking): State<RankingService>,
    Json(submission): Json<ScoreSubmission>,
) -> Result<Json<SubmitResponse>, ApiError> {
    ranking.submit(submission).await?;
    Ok(Json(SubmitResponse { result: "success" }))
}

/// GET /ranking — the stored leaderboard, highest score first.
async fn get_ranking(
    State(ranking): State<RankingService>,
) -> Result<Json<Vec<ScoreRecord>>, ApiError> {
    let records = ranking.list().await?;
    Ok(Json(records))
}

/// Build the full application router with CORS and request tracing.
pub fn build_router(ranking: RankingService, cors: CorsLayer) -> Router {
    Router::new()
        .route("/submit_score", post(submit_score))
        .route("/ranking", get(get_ranking))
        .route("/health", get(health))
        .with_state(ranking)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
