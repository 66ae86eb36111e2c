// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Sensor Fusion Adapter
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Multi-sensor fusion in D-space.
//!
//! Each sensor stream is mapped to D-space, then combined by precision
//! weighting (weight / variance) into a single fused estimate. Low
//! inter-sensor agreement or high per-sensor variance is surfaced as a
//! recommendation.

use crate::base::{round_to, soft_error, soft_error_message, Adapter};
use phi_analysis::sum_rule::SumRuleValidator;
use phi_math::stats::{mean, std_dev};
use phi_math::transform::{dimension, value_from_dimension};
use phi_types::config::AdapterConfig;
use phi_types::state::{AnalysisResult, RankedEntry};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Inter-sensor D-space std above which systematic bias is suspected.
const DISAGREEMENT_THRESHOLD: f64 = 0.1;
/// Per-sensor quality below which recalibration is suggested.
const LOW_QUALITY_THRESHOLD: f64 = 0.5;
/// Precision multiplier for near-zero-variance sensors.
const ZERO_VARIANCE_PRECISION: f64 = 1000.0;

#[derive(Debug, Deserialize)]
struct SensorInput {
    #[serde(default = "default_sensor_name")]
    name: String,
    #[serde(default)]
    readings: Vec<f64>,
    #[serde(default = "default_weight")]
    weight: f64,
}

fn default_sensor_name() -> String {
    "unnamed".to_string()
}
fn default_weight() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
struct FusionInput {
    #[serde(default)]
    sensors: Vec<SensorInput>,
    reference: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SensorChannel {
    name: String,
    weight: f64,
    d_values: Vec<f64>,
    d_mean: f64,
    d_std: f64,
    n_valid: usize,
    n_total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct FusionIngested {
    sensor_data: Vec<SensorChannel>,
    d_ref: Option<f64>,
    n_sensors: usize,
}

pub struct SensorFusionAdapter {
    config: AdapterConfig,
}

impl Default for SensorFusionAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorFusionAdapter {
    pub fn new() -> Self {
        SensorFusionAdapter {
            config: AdapterConfig::new("sensor_fusion", "Multi-sensor D-space fusion"),
        }
    }
}

impl Adapter for SensorFusionAdapter {
    fn config(&self) -> &AdapterConfig {
        &self.config
    }

    fn ingest(&self, raw: &Value) -> Value {
        let input: FusionInput = match serde_json::from_value(raw.clone()) {
            Ok(input) => input,
            Err(e) => return soft_error(&format!("Malformed payload: {e}")),
        };
        if input.sensors.is_empty() {
            return soft_error("No sensors provided");
        }

        let d_ref = input
            .reference
            .filter(|&r| r > 0.0)
            .and_then(|r| dimension(r).ok());

        let sensor_data: Vec<SensorChannel> = input
            .sensors
            .iter()
            .map(|s| {
                let d_values: Vec<f64> = s
                    .readings
                    .iter()
                    .filter(|&&r| r > 0.0)
                    .filter_map(|&r| dimension(r).ok())
                    .collect();
                SensorChannel {
                    name: s.name.clone(),
                    weight: s.weight,
                    d_mean: mean(&d_values),
                    d_std: std_dev(&d_values),
                    n_valid: d_values.len(),
                    n_total: s.readings.len(),
                    d_values,
                }
            })
            .collect();

        let ingested = FusionIngested {
            n_sensors: sensor_data.len(),
            sensor_data,
            d_ref,
        };
        serde_json::to_value(ingested).unwrap_or_else(|_| soft_error("Serialization failed"))
    }

    fn analyze(&self, ingested: &Value) -> AnalysisResult {
        if let Some(message) = soft_error_message(ingested) {
            return AnalysisResult::failure(ingested.clone(), message);
        }
        let data: FusionIngested = match serde_json::from_value(ingested.clone()) {
            Ok(data) => data,
            Err(e) => {
                return AnalysisResult::failure(
                    ingested.clone(),
                    &format!("Malformed ingested payload: {e}"),
                )
            }
        };
        if data.sensor_data.is_empty() {
            return AnalysisResult::failure(ingested.clone(), "No sensor data to fuse");
        }

        // Precision-weighted fusion: weight / variance per sensor.
        let mut total_weight = 0.0;
        let mut weighted_d_sum = 0.0;
        let mut all_d_values: Vec<f64> = Vec::new();
        for channel in &data.sensor_data {
            let precision = if channel.d_std > 0.0 {
                channel.weight / (channel.d_std * channel.d_std)
            } else {
                channel.weight * ZERO_VARIANCE_PRECISION
            };
            weighted_d_sum += channel.d_mean * precision;
            total_weight += precision;
            all_d_values.extend_from_slice(&channel.d_values);
        }
        let fused_d = if total_weight > 0.0 {
            weighted_d_sum / total_weight
        } else {
            0.0
        };
        let fused_value = value_from_dimension(fused_d);

        // Inter-sensor agreement.
        let d_means: Vec<f64> = data
            .sensor_data
            .iter()
            .filter(|c| c.n_valid > 0)
            .map(|c| c.d_mean)
            .collect();
        let inter_std = std_dev(&d_means);

        // Sum rule: sensor weights must be self-consistent.
        let weights: Vec<f64> = data.sensor_data.iter().map(|c| c.weight).collect();
        let weight_sum: f64 = weights.iter().sum();
        let sum_rule = SumRuleValidator::validate(&weights, weight_sum, 100.0);

        let consistency = (1.0 - inter_std).max(0.0);
        let ref_deviation = data.d_ref.map(|d| fused_d - d);

        // Per-sensor quality ranking.
        let mut quality: Vec<(&SensorChannel, f64)> = data
            .sensor_data
            .iter()
            .map(|c| (c, 1.0 - c.d_std.min(1.0)))
            .collect();
        quality.sort_by(|a, b| b.1.total_cmp(&a.1));

        let hierarchy: Vec<RankedEntry> = quality
            .iter()
            .enumerate()
            .map(|(i, (c, q))| RankedEntry {
                label: c.name.clone(),
                score: round_to(*q, 4),
                d_value: c.d_mean,
                rank: i + 1,
            })
            .collect();

        let mut recommendations: Vec<String> = Vec::new();
        if inter_std > DISAGREEMENT_THRESHOLD {
            recommendations.push(format!(
                "High inter-sensor disagreement (D-space std={inter_std:.4}). \
                 Check for systematic bias in individual sensors."
            ));
        }
        let low_quality: Vec<&str> = quality
            .iter()
            .filter(|(_, q)| *q < LOW_QUALITY_THRESHOLD)
            .map(|(c, _)| c.name.as_str())
            .collect();
        if !low_quality.is_empty() {
            recommendations.push(format!(
                "Low quality sensors: {}. Consider recalibration.",
                low_quality.join(", ")
            ));
        }
        if recommendations.is_empty() {
            recommendations.push("All sensors consistent. Fusion reliable.".to_string());
        }

        let sensor_quality: Vec<Value> = quality
            .iter()
            .map(|(c, q)| {
                json!({
                    "sensor": c.name,
                    "quality": round_to(*q, 4),
                    "d_mean": c.d_mean,
                    "d_std": c.d_std,
                    "n_readings": c.n_valid,
                })
            })
            .collect();

        AnalysisResult {
            success: true,
            data: json!({
                "fused_d": fused_d,
                "fused_value": fused_value,
                "inter_sensor_std": inter_std,
                "ref_deviation": ref_deviation,
                "sensor_quality": sensor_quality,
                "sum_rule": sum_rule,
            }),
            d_space_values: all_d_values,
            consistency_score: consistency,
            hierarchy,
            recommendations,
            metadata: Value::Null,
        }
    }

    fn report(&self, result: &AnalysisResult) -> Value {
        let data = &result.data;
        json!({
            "adapter": self.config.name,
            "success": result.success,
            "fused_estimate": {
                "d_space": data.get("fused_d").cloned().unwrap_or(json!(0)),
                "real_value": data.get("fused_value").cloned().unwrap_or(json!(0)),
            },
            "consistency_score": round_to(result.consistency_score, 6),
            "inter_sensor_std": data.get("inter_sensor_std").cloned().unwrap_or(json!(0)),
            "ref_deviation": data.get("ref_deviation").cloned().unwrap_or(Value::Null),
            "sensor_quality": data.get("sensor_quality").cloned().unwrap_or(json!([])),
            "recommendations": result.recommendations,
        })
    }
}
