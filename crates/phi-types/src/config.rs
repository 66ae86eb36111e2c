// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Static configuration of a vertical adapter.
/// Adapters are stateless; this is the only thing an instance carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterConfig {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub settings: Value,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

impl AdapterConfig {
    pub fn new(name: &str, description: &str) -> Self {
        AdapterConfig {
            name: name.to_string(),
            version: default_version(),
            description: description.to_string(),
            settings: Value::Null,
        }
    }
}

/// Engine-wide tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Default sum-rule tolerance in parts per million.
    #[serde(default = "default_tolerance_ppm")]
    pub tolerance_ppm: f64,
    /// Absolute tolerance for closure / energy consistency checks.
    #[serde(default = "default_consistency_tol")]
    pub consistency_tol: f64,
    /// Upper bound for the full phi-power ladder.
    #[serde(default = "default_ladder_max_n")]
    pub ladder_max_n: i32,
}

fn default_tolerance_ppm() -> f64 {
    100.0
}
fn default_consistency_tol() -> f64 {
    1e-10
}
fn default_ladder_max_n() -> i32 {
    78
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            tolerance_ppm: default_tolerance_ppm(),
            consistency_tol: default_consistency_tol(),
            ladder_max_n: default_ladder_max_n(),
        }
    }
}

impl EngineConfig {
    /// Load from a JSON file. Missing fields fall back to defaults.
    pub fn from_file(path: &str) -> crate::error::PhiResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
