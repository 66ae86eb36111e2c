// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shared result records produced by the analysis layers.
//!
//! All records are plain data: produced fresh per invocation, never
//! mutated afterwards, serializable for external consumption.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a ranked finding list (hierarchy).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedEntry {
    pub label: String,
    pub score: f64,
    pub d_value: f64,
    pub rank: usize,
}

/// Standardised output of any adapter analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub success: bool,
    pub data: Value,
    pub d_space_values: Vec<f64>,
    /// 0.0 – 1.0, from the sum-rule / consistency check.
    pub consistency_score: f64,
    pub hierarchy: Vec<RankedEntry>,
    pub recommendations: Vec<String>,
    pub metadata: Value,
}

impl AnalysisResult {
    /// Failed analysis: the soft-error message becomes the only
    /// recommendation so it surfaces in the final report.
    pub fn failure(data: Value, message: &str) -> Self {
        AnalysisResult {
            success: false,
            data,
            d_space_values: Vec::new(),
            consistency_score: 0.0,
            hierarchy: Vec::new(),
            recommendations: vec![message.to_string()],
            metadata: Value::Null,
        }
    }
}

/// Output of the sum-rule validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SumRuleReport {
    pub valid: bool,
    pub actual_sum: f64,
    pub expected_sum: f64,
    /// Rounded to 3 decimals.
    pub deviation_ppm: f64,
    pub tolerance_ppm: f64,
    /// actual - expected, rounded to 12 decimals.
    pub residual: f64,
}

/// Greedy Fibonacci factorization of a positive integer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Factorization {
    /// Ascending Fibonacci factors > 1.
    pub factors: Vec<u64>,
    pub product: u64,
    /// n - product; nonzero when the greedy pass left a remainder.
    pub residual: i64,
    pub exact: bool,
}

/// GUT representation lookup for an integer dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GutDecomposition {
    /// The input dimension as given, sign preserved.
    pub dimension: i64,
    /// Group label, or "unknown" on a table miss.
    pub group: String,
    pub fibonacci_form: Option<String>,
    pub fibonacci_factors: Factorization,
}

/// One entry of a GUT-significance ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HierarchyEntry {
    pub denominator: i64,
    /// 3 = known group, 2 = exact Fibonacci product, 1 = neither.
    pub score: u8,
    pub decomposition: GutDecomposition,
}

/// D-space closure check: D(x) + D(1/x) = 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosureCheck {
    pub valid: bool,
    pub d_x: f64,
    pub d_inv_x: f64,
    pub residual: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClosureCheck {
    pub fn invalid(message: &str) -> Self {
        ClosureCheck {
            valid: false,
            d_x: 0.0,
            d_inv_x: 0.0,
            residual: 0.0,
            error: Some(message.to_string()),
        }
    }
}

/// Energy invariant check: E(x) = 2π.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyCheck {
    pub valid: bool,
    pub energy: f64,
    pub expected: f64,
    pub residual: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EnergyCheck {
    pub fn invalid(message: &str) -> Self {
        EnergyCheck {
            valid: false,
            energy: 0.0,
            expected: crate::constants::ENERGY_CONSTANT,
            residual: 0.0,
            error: Some(message.to_string()),
        }
    }
}

/// Single mirror-involution check M(M(v)) = v.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorCheck {
    pub value: i64,
    pub mirror: i64,
    pub mirror_mirror: i64,
    pub valid: bool,
}

/// Batch mirror-involution report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorReport {
    pub all_valid: bool,
    pub checks: Vec<MirrorCheck>,
}

/// Bundle of closure + energy checks for one value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub d_space_closure: ClosureCheck,
    pub energy_conservation: EnergyCheck,
}

impl ConsistencyReport {
    pub fn all_valid(&self) -> bool {
        self.d_space_closure.valid && self.energy_conservation.valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_result_carries_message() {
        let r = AnalysisResult::failure(json!({"error": "No readings provided"}), "No readings provided");
        assert!(!r.success);
        assert_eq!(r.recommendations, vec!["No readings provided".to_string()]);
        assert!(r.d_space_values.is_empty());
        assert_eq!(r.consistency_score, 0.0);
    }

    #[test]
    fn test_closure_check_serializes_without_error_field() {
        let c = ClosureCheck {
            valid: true,
            d_x: 1.0,
            d_inv_x: -1.0,
            residual: 0.0,
            error: None,
        };
        let json = serde_json::to_string(&c).unwrap();
        assert!(!json.contains("error"));
    }
}
