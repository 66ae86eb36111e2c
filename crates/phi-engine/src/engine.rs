// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Engine Facade
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! `PhiEngine` — the zero-parameter algebraic prediction facade.
//!
//! Composes the D-space transform, sum-rule validator, representation
//! decomposer, consistency checker, constants database, ladder, and the
//! registered vertical adapters into a single API.
//!
//! ```
//! use phi_engine::PhiEngine;
//!
//! let engine = PhiEngine::new();
//! let d = engine.transform(&[0.5, 1.0, 2.0]).unwrap();
//! assert!((d[1]).abs() < 1e-12);
//! let decomp = engine.decompose(45);
//! assert!(decomp.fibonacci_factors.exact);
//! ```

use std::collections::BTreeMap;

use phi_adapters::base::Adapter;
use phi_adapters::calibration::CalibrationAdapter;
use phi_adapters::photosynthesis::PhotosynthesisAdapter;
use phi_adapters::sensor_fusion::SensorFusionAdapter;
use phi_analysis::consistency::ConsistencyChecker;
use phi_analysis::decompose::RepresentationDecomposer;
use phi_analysis::sum_rule::SumRuleValidator;
use phi_catalog::constants_db::ConstantsDb;
use phi_math::transform::{dimension, energy, phase, value_from_dimension};
use phi_types::config::EngineConfig;
use phi_types::error::{PhiError, PhiResult};
use phi_types::state::{ConsistencyReport, GutDecomposition, HierarchyEntry, SumRuleReport};
use serde_json::{json, Value};

use crate::ladder::{LadderEntry, PhiLadder};

/// Zero-parameter algebraic prediction engine.
pub struct PhiEngine {
    pub config: EngineConfig,
    pub ladder: PhiLadder,
    pub constants: ConstantsDb,
    adapters: BTreeMap<String, Box<dyn Adapter>>,
}

impl Default for PhiEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PhiEngine {
    /// Engine with default config and the three built-in adapters.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let mut engine = PhiEngine {
            config,
            ladder: PhiLadder::new(),
            constants: ConstantsDb::new(),
            adapters: BTreeMap::new(),
        };
        engine.register_adapter(Box::new(CalibrationAdapter::new()));
        engine.register_adapter(Box::new(SensorFusionAdapter::new()));
        engine.register_adapter(Box::new(PhotosynthesisAdapter::new()));
        engine
    }

    // ── D-space transforms ───────────────────────────────────────────

    /// Map raw values to D-space. Errors on any non-positive value.
    pub fn transform(&self, values: &[f64]) -> PhiResult<Vec<f64>> {
        values.iter().map(|&v| dimension(v)).collect()
    }

    /// Map D-space values back to raw values.
    pub fn inverse_transform(&self, d_values: &[f64]) -> Vec<f64> {
        d_values.iter().map(|&d| value_from_dimension(d)).collect()
    }

    /// Phase Θ(x) = 2πx for each value.
    pub fn phase(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| phase(v)).collect()
    }

    /// Energy E(x) for each value; the invariant makes every entry 2π.
    pub fn energy(&self, values: &[f64]) -> PhiResult<Vec<f64>> {
        values.iter().map(|&v| energy(v)).collect()
    }

    // ── φ-power mapping ──────────────────────────────────────────────

    /// Map dimension n to its energy scale via φ^n.
    pub fn scale_map(&self, n: i64) -> Value {
        json!({
            "n": n,
            "phi_power": self.ladder.phi_power(n),
            "energy_gev": self.ladder.energy_gev(n),
            "x_from_d": value_from_dimension(n as f64),
        })
    }

    /// The φ-power energy ladder up to the configured maximum rung.
    pub fn full_ladder(&self) -> Vec<LadderEntry> {
        self.ladder.full_ladder(i64::from(self.config.ladder_max_n))
    }

    // ── sum rule, decomposition, consistency ─────────────────────────

    /// Validate coefficients against a sum rule at the configured
    /// ppm tolerance.
    pub fn validate(&self, coefficients: &[f64], expected_sum: f64) -> SumRuleReport {
        SumRuleValidator::validate(coefficients, expected_sum, self.config.tolerance_ppm)
    }

    /// Fibonacci-decompose a representation dimension.
    pub fn decompose(&self, dim: i64) -> GutDecomposition {
        RepresentationDecomposer::gut_decomposition(dim)
    }

    /// Rank denominators by GUT significance.
    pub fn hierarchy(&self, denominators: &[i64]) -> Vec<HierarchyEntry> {
        RepresentationDecomposer::hierarchy_rank(denominators)
    }

    /// D-closure + energy conservation at the configured tolerance.
    pub fn check(&self, x: f64) -> ConsistencyReport {
        ConsistencyReport {
            d_space_closure: ConsistencyChecker::d_space_closure(x, self.config.consistency_tol),
            energy_conservation: ConsistencyChecker::energy_conservation(
                x,
                self.config.consistency_tol,
            ),
        }
    }

    // ── adapter management ───────────────────────────────────────────

    /// Register a vertical adapter under its configured name.
    pub fn register_adapter(&mut self, adapter: Box<dyn Adapter>) {
        self.adapters.insert(adapter.config().name.clone(), adapter);
    }

    /// Names of registered adapters, sorted.
    pub fn list_adapters(&self) -> Vec<&str> {
        self.adapters.keys().map(String::as_str).collect()
    }

    /// Run ingest → analyze → report through a registered adapter.
    pub fn run(&self, adapter_name: &str, payload: &Value) -> PhiResult<Value> {
        let adapter = self
            .adapters
            .get(adapter_name)
            .ok_or_else(|| PhiError::AdapterNotFound(adapter_name.to_string()))?;
        Ok(adapter.run(payload))
    }

    // ── full report ──────────────────────────────────────────────────

    /// Full analysis report: D-space values, energies, consistency
    /// summary, plus an adapter result when requested.
    pub fn report(&self, payload: &Value, adapter_name: Option<&str>) -> PhiResult<Value> {
        let mut report = json!({
            "engine": "phi-engine",
            "version": env!("CARGO_PKG_VERSION"),
        });
        let out = report.as_object_mut().ok_or_else(|| {
            PhiError::ConfigError("report skeleton must be an object".to_string())
        })?;

        let values: Vec<f64> = payload
            .get("values")
            .and_then(Value::as_array)
            .map(|vals| vals.iter().filter_map(Value::as_f64).collect())
            .unwrap_or_default();
        if !values.is_empty() {
            let d_values = self.transform(&values)?;
            out.insert("d_space".to_string(), json!(d_values));
            out.insert("energies".to_string(), json!(self.energy(&values)?));
            let checks: Vec<ConsistencyReport> =
                values.iter().map(|&v| self.check(v)).collect();
            out.insert(
                "consistency".to_string(),
                json!({
                    "all_valid": checks.iter().all(ConsistencyReport::all_valid),
                    "checks_run": checks.len(),
                }),
            );
        }
        if let Some(name) = adapter_name {
            out.insert("adapter_result".to_string(), self.run(name, payload)?);
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_adapters_registered() {
        let engine = PhiEngine::new();
        assert_eq!(
            engine.list_adapters(),
            vec!["calibration", "photosynthesis", "sensor_fusion"],
        );
    }

    #[test]
    fn test_transform_roundtrip() {
        let engine = PhiEngine::new();
        let values = [0.5, 1.0, 2.0, 42.0];
        let d = engine.transform(&values).unwrap();
        let back = engine.inverse_transform(&d);
        for (v, b) in values.iter().zip(&back) {
            assert!((v - b).abs() < 1e-9);
        }
        assert!(engine.transform(&[1.0, -1.0]).is_err());
    }

    #[test]
    fn test_energy_always_two_pi() {
        let engine = PhiEngine::new();
        let energies = engine.energy(&[0.1, 1.0, 7.0]).unwrap();
        for e in energies {
            assert!((e - std::f64::consts::TAU).abs() < 1e-9);
        }
    }

    #[test]
    fn test_scale_map() {
        let engine = PhiEngine::new();
        let m = engine.scale_map(8);
        assert_eq!(m["n"], json!(8));
        let p = m["phi_power"].as_f64().unwrap();
        assert!((p - 46.978).abs() < 0.01, "phi^8 = {p}");
    }

    #[test]
    fn test_validate_uses_config_tolerance() {
        let mut config = EngineConfig::default();
        config.tolerance_ppm = 1e9;
        let engine = PhiEngine::with_config(config);
        let report = engine.validate(&[1.0, 2.0], 3.5);
        assert!(report.valid);
    }

    #[test]
    fn test_full_ladder_respects_configured_max() {
        let engine = PhiEngine::new();
        assert_eq!(engine.full_ladder().len(), 79);

        let mut config = EngineConfig::default();
        config.ladder_max_n = 12;
        let short = PhiEngine::with_config(config).full_ladder();
        assert_eq!(short.len(), 13);
        assert_eq!(short[12].lucas_number, Some(322));
    }

    #[test]
    fn test_run_unknown_adapter_is_hard_error() {
        let engine = PhiEngine::new();
        let err = engine.run("nonexistent", &json!({})).unwrap_err();
        assert!(matches!(err, PhiError::AdapterNotFound(_)));
    }

    #[test]
    fn test_run_calibration_through_facade() {
        let engine = PhiEngine::new();
        let out = engine
            .run(
                "calibration",
                &json!({ "readings": [1.0, 1.0, 1.0], "reference": 1.0 }),
            )
            .unwrap();
        assert_eq!(out["success"], json!(true));
        assert_eq!(out["adapter"], json!("calibration"));
    }

    #[test]
    fn test_report_shape() {
        let engine = PhiEngine::new();
        let report = engine
            .report(&json!({ "values": [0.5, 2.0] }), None)
            .unwrap();
        assert_eq!(report["engine"], json!("phi-engine"));
        assert_eq!(report["consistency"]["all_valid"], json!(true));
        assert_eq!(report["consistency"]["checks_run"], json!(2));
        assert_eq!(report["d_space"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_report_without_values_still_versioned() {
        let engine = PhiEngine::new();
        let report = engine.report(&json!({}), None).unwrap();
        assert!(report.get("d_space").is_none());
        assert_eq!(report["version"], json!("1.618.0"));
    }
}
