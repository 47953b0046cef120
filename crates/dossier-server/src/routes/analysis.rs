//! AI analysis response parsing route.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use dossier_core::AnalysisPayload;

use crate::routes::rejection_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/analysis/parse", post(parse_analysis))
}

#[derive(serde::Deserialize)]
struct ContentInput {
    content: String,
}

/// POST /api/analysis/parse — model output → structured or raw-text payload.
async fn parse_analysis(input: Result<Json<ContentInput>, JsonRejection>) -> Response {
    let Json(input) = match input {
        Ok(input) => input,
        Err(rejection) => return rejection_response(rejection),
    };

    let payload = AnalysisPayload::parse(&input.content);
    Json(serde_json::json!({
        "resume": payload.resume(),
        "score": payload.score(),
        "structured": payload.is_structured(),
        "payload": payload,
    }))
    .into_response()
}
