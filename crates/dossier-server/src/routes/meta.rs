//! Health and category listing routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use dossier_core::{filter_chips, Category};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/categories", get(categories))
}

/// GET /api/health
async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let uptime = (Utc::now() - state.started_at).num_seconds().max(0);
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptimeSecs": uptime,
    }))
}

/// GET /api/categories — the summarizer's categories and the list filter chips.
async fn categories() -> Json<serde_json::Value> {
    let categories: Vec<serde_json::Value> = Category::ALL
        .iter()
        .map(|c| {
            serde_json::json!({
                "label": c.label(),
                "keywords": c.keywords(),
            })
        })
        .collect();

    Json(serde_json::json!({
        "categories": categories,
        "filters": filter_chips(),
    }))
}
