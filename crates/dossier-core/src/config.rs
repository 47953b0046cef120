//! Server configuration from environment variables.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 3004;
pub const DEFAULT_BIND: &str = "0.0.0.0";
/// OCR text of a multi-page contract stays well under this.
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Top-level Dossier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DossierConfig {
    /// HTTP server port.
    pub port: u16,
    /// Address the HTTP server binds to.
    pub bind: String,
    /// Maximum accepted request body size.
    pub max_body_bytes: usize,
}

impl Default for DossierConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl DossierConfig {
    /// Create configuration from the process environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// `DOSSIER_PORT` wins over the generic `PORT`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("DOSSIER_PORT").or_else(|| lookup("PORT")) {
            config.port = raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("invalid port: {raw:?}")))?;
        }
        if let Some(bind) = lookup("DOSSIER_BIND") {
            let bind = bind.trim();
            if bind.is_empty() {
                return Err(Error::Config("DOSSIER_BIND is empty".into()));
            }
            config.bind = bind.to_string();
        }
        if let Some(raw) = lookup("DOSSIER_MAX_BODY_BYTES") {
            config.max_body_bytes = raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("invalid body limit: {raw:?}")))?;
        }

        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
