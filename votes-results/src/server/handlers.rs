// HTTP request handlers
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde_json::json;
use tracing::{error, info};

use crate::errors::ApiError;
use crate::server::state::AppState;
use votes_shared::types::{Tally, VoteCategory};

/// Current tally per category, freshly aggregated from the store.
///
/// Always reports every known category, zero included. A failed query
/// maps to a 500 with an error payload; the client is expected to retry.
pub async fn get_results(State(state): State<AppState>) -> Result<Json<Tally>, ApiError> {
    let counts = state.repository.fetch_vote_counts().await.map_err(|e| {
        error!(error = %e, "Error fetching results");
        ApiError::Database(e)
    })?;

    let tally = Tally::from_counts(&counts);
    info!(
        cats = tally.count(VoteCategory::Cats),
        dogs = tally.count(VoteCategory::Dogs),
        "Results fetched"
    );
    Ok(Json(tally))
}

/// Store connectivity probe. Never propagates an error past this
/// boundary: a failed probe degrades to a 503 payload.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.repository.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "healthy", "database": "connected" })),
        ),
        Err(e) => {
            error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy", "database": "disconnected" })),
            )
        }
    }
}

/// Thin static index page.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
