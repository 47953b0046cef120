//! Dossier server — HTTP API and command-line front end for the summarizer.

pub mod cli;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
