// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Calibration Adapter
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Precision instrument calibration via D-space linearisation.
//!
//! Repeated readings against a known reference are mapped to D-space
//! residuals; systematic drift shows up as a nonzero residual mean and
//! is turned into a recalibration recommendation.

use crate::base::{consistency_from_ppm, round_to, soft_error, soft_error_message, Adapter};
use phi_analysis::sum_rule::SumRuleValidator;
use phi_math::stats::{mean, std_dev};
use phi_math::transform::{dimension, value_from_dimension};
use phi_types::config::AdapterConfig;
use phi_types::state::AnalysisResult;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Drift magnitude (D-space) above which recalibration is advised.
const DRIFT_THRESHOLD: f64 = 0.1;
/// Residual std above which environmental interference is suspected.
const VARIANCE_THRESHOLD: f64 = 0.05;
/// Sum-rule tolerance for the correction coefficients [ppm].
const CALIBRATION_TOLERANCE_PPM: f64 = 1000.0;

#[derive(Debug, Deserialize)]
struct CalibrationInput {
    #[serde(default)]
    readings: Vec<f64>,
    #[serde(default = "default_reference")]
    reference: f64,
    #[serde(default = "default_instrument")]
    instrument: String,
}

fn default_reference() -> f64 {
    1.0
}
fn default_instrument() -> String {
    "unknown".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
struct CalibrationIngested {
    /// Per-reading D-values; nonpositive readings map to None.
    d_readings: Vec<Option<f64>>,
    d_ref: f64,
    /// Residuals vs the reference, invalid readings skipped.
    d_residuals: Vec<f64>,
    reference: f64,
    instrument: String,
    n_readings: usize,
    raw_readings: Vec<f64>,
}

pub struct CalibrationAdapter {
    config: AdapterConfig,
}

impl Default for CalibrationAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl CalibrationAdapter {
    pub fn new() -> Self {
        CalibrationAdapter {
            config: AdapterConfig::new(
                "calibration",
                "Precision calibration via D-space linearisation",
            ),
        }
    }
}

impl Adapter for CalibrationAdapter {
    fn config(&self) -> &AdapterConfig {
        &self.config
    }

    fn ingest(&self, raw: &Value) -> Value {
        let input: CalibrationInput = match serde_json::from_value(raw.clone()) {
            Ok(input) => input,
            Err(e) => return soft_error(&format!("Malformed payload: {e}")),
        };
        if input.readings.is_empty() {
            return soft_error("No readings provided");
        }
        if input.reference <= 0.0 {
            return soft_error("Reference must be > 0");
        }

        // Reference is positive, so the transform cannot fail here.
        let d_ref = dimension(input.reference).unwrap_or(0.0);
        let d_readings: Vec<Option<f64>> = input
            .readings
            .iter()
            .map(|&r| if r > 0.0 { dimension(r).ok() } else { None })
            .collect();
        let d_residuals: Vec<f64> = d_readings
            .iter()
            .flatten()
            .map(|d| d - d_ref)
            .collect();

        let ingested = CalibrationIngested {
            d_readings,
            d_ref,
            d_residuals,
            reference: input.reference,
            n_readings: input.readings.len(),
            instrument: input.instrument,
            raw_readings: input.readings,
        };
        serde_json::to_value(ingested).unwrap_or_else(|_| soft_error("Serialization failed"))
    }

    fn analyze(&self, ingested: &Value) -> AnalysisResult {
        if let Some(message) = soft_error_message(ingested) {
            return AnalysisResult::failure(ingested.clone(), message);
        }
        let data: CalibrationIngested = match serde_json::from_value(ingested.clone()) {
            Ok(data) => data,
            Err(e) => {
                return AnalysisResult::failure(
                    ingested.clone(),
                    &format!("Malformed ingested payload: {e}"),
                )
            }
        };

        let residuals = &data.d_residuals;
        if residuals.len() < 2 {
            return AnalysisResult {
                success: false,
                data: ingested.clone(),
                d_space_values: residuals.clone(),
                consistency_score: 0.0,
                hierarchy: Vec::new(),
                recommendations: vec!["Need at least 2 valid readings".to_string()],
                metadata: Value::Null,
            };
        }

        let d_mean = mean(residuals);
        let d_std = std_dev(residuals);

        // Correction coefficients: residuals normalised by their mean,
        // so a drift-free series sums to N.
        let c_values: Vec<f64> = residuals
            .iter()
            .map(|&r| if d_mean != 0.0 { r / d_mean } else { 0.0 })
            .collect();
        let n = residuals.len() as f64;
        let sum_rule = SumRuleValidator::validate(&c_values, n, CALIBRATION_TOLERANCE_PPM);
        let consistency = consistency_from_ppm(sum_rule.deviation_ppm);

        // Mean-shift correction back in value space.
        let corrected: Vec<f64> = data
            .raw_readings
            .iter()
            .map(|&r| {
                if r > 0.0 {
                    dimension(r).map(|d| value_from_dimension(d - d_mean)).unwrap_or(r)
                } else {
                    r
                }
            })
            .collect();

        let drift_direction = if d_mean > 0.0 {
            "positive"
        } else if d_mean < 0.0 {
            "negative"
        } else {
            "none"
        };
        let drift_magnitude = d_mean.abs();

        let mut recommendations: Vec<String> = Vec::new();
        if drift_magnitude > DRIFT_THRESHOLD {
            recommendations.push(format!(
                "Systematic {drift_direction} drift detected (D-space magnitude \
                 {drift_magnitude:.4}). Recalibrate instrument."
            ));
        }
        if d_std > VARIANCE_THRESHOLD {
            recommendations.push(format!(
                "High D-space variance ({d_std:.4}). Check for environmental interference."
            ));
        }
        if recommendations.is_empty() {
            recommendations.push("Instrument within calibration tolerance.".to_string());
        }

        AnalysisResult {
            success: true,
            data: json!({
                "d_mean": d_mean,
                "d_std": d_std,
                "correction_coefficients": c_values,
                "sum_rule": sum_rule,
                "corrected_values": corrected,
                "drift": {
                    "direction": drift_direction,
                    "magnitude": drift_magnitude,
                },
                "instrument": data.instrument,
            }),
            d_space_values: residuals.clone(),
            consistency_score: consistency,
            hierarchy: Vec::new(),
            recommendations,
            metadata: Value::Null,
        }
    }

    fn report(&self, result: &AnalysisResult) -> Value {
        let data = &result.data;
        json!({
            "adapter": self.config.name,
            "success": result.success,
            "consistency_score": round_to(result.consistency_score, 6),
            "drift": data.get("drift").cloned().unwrap_or(json!({})),
            "d_space_summary": {
                "mean": data.get("d_mean").cloned().unwrap_or(json!(0)),
                "std": data.get("d_std").cloned().unwrap_or(json!(0)),
                "n_readings": result.d_space_values.len(),
            },
            "sum_rule": data.get("sum_rule").cloned().unwrap_or(json!({})),
            "corrected_values": data.get("corrected_values").cloned().unwrap_or(json!([])),
            "recommendations": result.recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(payload: Value) -> Value {
        CalibrationAdapter::new().run(&payload)
    }

    #[test]
    fn test_empty_readings_soft_error() {
        let r = run(json!({ "readings": [], "reference": 1.0 }));
        assert_eq!(r["success"], json!(false));
        assert_eq!(r["recommendations"][0], json!("No readings provided"));
    }

    #[test]
    fn test_nonpositive_reference_soft_error() {
        let r = run(json!({ "readings": [1.0, 1.1], "reference": -2.0 }));
        assert_eq!(r["success"], json!(false));
        assert_eq!(r["recommendations"][0], json!("Reference must be > 0"));
    }

    #[test]
    fn test_drifted_instrument_triggers_recalibration() {
        // All readings ~20% above the reference: clear systematic drift.
        let r = run(json!({
            "readings": [1.21, 1.19, 1.20, 1.22, 1.18],
            "reference": 1.0,
            "instrument": "pressure_gauge_7",
        }));
        assert_eq!(r["success"], json!(true));
        assert_eq!(r["drift"]["direction"], json!("negative"));
        let recs = r["recommendations"].as_array().unwrap();
        assert!(recs[0].as_str().unwrap().contains("Recalibrate"));
    }

    #[test]
    fn test_clean_instrument_within_tolerance() {
        // Readings exactly at reference with sub-threshold jitter.
        let r = run(json!({
            "readings": [1.0005, 0.9995, 1.0002, 0.9998],
            "reference": 1.0,
        }));
        assert_eq!(r["success"], json!(true));
        let recs = r["recommendations"].as_array().unwrap();
        assert!(recs[0].as_str().unwrap().contains("within calibration tolerance"));
    }

    #[test]
    fn test_single_valid_reading_fails() {
        let r = run(json!({ "readings": [1.0, -3.0], "reference": 1.0 }));
        assert_eq!(r["success"], json!(false));
        assert_eq!(r["recommendations"][0], json!("Need at least 2 valid readings"));
    }

    #[test]
    fn test_corrected_values_center_on_reference() {
        let r = run(json!({
            "readings": [1.21, 1.19, 1.20],
            "reference": 1.0,
        }));
        let corrected = r["corrected_values"].as_array().unwrap();
        // After removing the mean drift the corrected values should sit
        // near the reference.
        let mid = corrected[1].as_f64().unwrap();
        assert!((mid - 1.0).abs() < 0.05, "corrected = {mid}");
    }
}
