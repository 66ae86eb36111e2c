// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Adapter Base
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The three-stage adapter contract: ingest → analyze → report.
//!
//! Payloads travel as JSON values. Invalid input never raises; it is
//! marked with an `error` field at ingest time and carried through, so
//! the final report shows `success: false` with a one-line explanation.

use phi_types::config::AdapterConfig;
use phi_types::state::AnalysisResult;
use serde_json::{json, Value};

/// A vertical adapter. Instances are stateless apart from their static
/// configuration; every call is a single pure pass.
pub trait Adapter {
    fn config(&self) -> &AdapterConfig;

    /// Validate and reshape a raw domain payload into D-space form.
    /// Missing or invalid fields produce a soft-error marker, not an Err.
    fn ingest(&self, raw: &Value) -> Value;

    /// Run the sum-rule / consistency math on the ingested payload.
    fn analyze(&self, ingested: &Value) -> AnalysisResult;

    /// Flatten the analysis result into a plain output record.
    fn report(&self, result: &AnalysisResult) -> Value;

    /// The full pipeline in one call.
    fn run(&self, raw: &Value) -> Value {
        let ingested = self.ingest(raw);
        let result = self.analyze(&ingested);
        self.report(&result)
    }
}

/// Soft-error marker for an invalid payload.
pub fn soft_error(message: &str) -> Value {
    json!({ "error": message })
}

/// Extract the soft-error message, if the payload carries one.
pub fn soft_error_message(payload: &Value) -> Option<&str> {
    payload.get("error").and_then(Value::as_str)
}

/// Consistency score from a sum-rule deviation: 1.0 perfect, 0.0 bad.
pub fn consistency_from_ppm(deviation_ppm: f64) -> f64 {
    (1.0 - deviation_ppm / 1e6).max(0.0)
}

pub(crate) fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_error_roundtrip() {
        let e = soft_error("No readings provided");
        assert_eq!(soft_error_message(&e), Some("No readings provided"));
        assert_eq!(soft_error_message(&json!({"readings": [1.0]})), None);
    }

    #[test]
    fn test_consistency_from_ppm() {
        assert_eq!(consistency_from_ppm(0.0), 1.0);
        assert!((consistency_from_ppm(1000.0) - 0.999).abs() < 1e-12);
        assert_eq!(consistency_from_ppm(2e6), 0.0);
    }
}
