//! Dossier Core — document categories, AI analysis payloads, configuration.

pub mod analysis;
pub mod category;
pub mod config;
pub mod error;

pub use analysis::{AnalysisPayload, ContractAnalysis};
pub use category::{filter_chips, Category, ALL_FILTER_LABEL, UNCLASSIFIED_LABEL};
pub use config::DossierConfig;
pub use error::{Error, Result};
