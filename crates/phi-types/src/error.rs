// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

/// Hard errors: raised synchronously, never recovered internally.
///
/// Adapter-level soft errors (missing/invalid payload fields) are NOT
/// represented here; they travel as data through ingest → analyze → report
/// and surface as `success: false` in the analysis result.
#[derive(Error, Debug)]
pub enum PhiError {
    #[error("Domain error: {message} (got {value})")]
    DomainError { value: f64, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Adapter '{0}' not registered")]
    AdapterNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PhiError {
    /// Convenience for the recurring x > 0 domain restriction.
    pub fn nonpositive(value: f64, context: &str) -> Self {
        PhiError::DomainError {
            value,
            message: format!("{context} requires x > 0"),
        }
    }
}

pub type PhiResult<T> = Result<T, PhiError>;
