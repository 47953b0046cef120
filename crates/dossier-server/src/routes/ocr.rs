//! OCR document processing route.
//!
//! Receives the document row once upstream OCR has filled `ocr_text` and
//! returns the column updates to apply.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use dossier_core::Error;
use dossier_ingest::{process_ocr_record, OcrRecord};
use tracing::warn;

use crate::routes::{error_response, rejection_response};
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/ocr/process", post(process_document))
}

#[derive(serde::Deserialize)]
struct ProcessBody {
    record: OcrRecord,
    /// Time spent in the OCR step, for the processing log.
    #[serde(default)]
    ocr_duration_ms: u64,
}

/// POST /api/ocr/process — `{record: {id, ocr_text}}` → document update.
async fn process_document(body: Result<Json<ProcessBody>, JsonRejection>) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    match process_ocr_record(
        &body.record,
        Utc::now(),
        Duration::from_millis(body.ocr_duration_ms),
    ) {
        Ok(update) => (StatusCode::OK, Json(update)).into_response(),
        Err(Error::InvalidInput(msg)) => error_response(StatusCode::BAD_REQUEST, msg),
        Err(e) => {
            warn!("OCR processing failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
