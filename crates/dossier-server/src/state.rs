//! Shared application state.

use chrono::{DateTime, Utc};
use dossier_core::DossierConfig;

/// Shared application state accessible from all route handlers.
///
/// The summarizer is stateless, so handlers share nothing mutable.
pub struct AppState {
    pub config: DossierConfig,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: DossierConfig) -> Self {
        Self {
            config,
            started_at: Utc::now(),
        }
    }
}
