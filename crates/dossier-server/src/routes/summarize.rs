//! Heuristic summary route.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use dossier_ingest::{summarize, SummaryOutcome};

use crate::routes::rejection_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/summarize", post(summarize_text))
}

#[derive(serde::Deserialize)]
struct TextInput {
    #[serde(default)]
    text: String,
}

/// POST /api/summarize — `{text}` → summary or insufficient-text outcome.
///
/// Both outcomes are 200: short text is a normal result, not a failure.
async fn summarize_text(input: Result<Json<TextInput>, JsonRejection>) -> Response {
    let Json(input) = match input {
        Ok(input) => input,
        Err(rejection) => return rejection_response(rejection),
    };

    let outcome = SummaryOutcome::from(summarize(&input.text));
    Json(outcome).into_response()
}
