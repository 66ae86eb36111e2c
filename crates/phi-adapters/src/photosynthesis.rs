// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Photosynthesis Adapter
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Artificial photosynthesis, MOF filter design, and quantum
//! coherence analysis via D-space.
//!
//! Three analysis modes:
//!   1. `cascade`     — efficiency cascade, sum-rule validated
//!   2. `mof_filter`  — MOF material ranking for CO2 capture
//!   3. `full_system` — combined cascade + MOF + coherence model
//!
//! Multiplicative efficiency chains become additive in D-space, so the
//! cascade bottleneck is simply the step with the largest D-value.

use crate::base::{round_to, soft_error, soft_error_message, Adapter};
use phi_analysis::sum_rule::SumRuleValidator;
use phi_catalog::materials::{
    co2_factor, mof_by_name, mof_score, phi_optimal_pore_nm, pore_selectivity,
    quantum_coherence_factor, temp_correction, MOF_MATERIALS, NATURAL_STEPS,
};
use phi_math::transform::{dimension, value_from_dimension};
use phi_types::config::AdapterConfig;
use phi_types::state::{AnalysisResult, RankedEntry};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Floor for efficiencies entering the D transform.
const MIN_EFFICIENCY: f64 = 1e-10;
/// Capacity considered excellent for a CO2-capture MOF [mmol/g].
const EXCELLENT_CAPACITY_MMOL_G: f64 = 10.0;
/// Daily insolation window [h].
const SUNSHINE_HOURS: f64 = 12.0;
/// Glucose combustion energy [J/mol].
const GLUCOSE_ENERGY_J_MOL: f64 = 2870e3;
/// CO2 molar mass [kg/mol].
const CO2_KG_PER_MOL: f64 = 0.044;

/// Clamp η to (0, 1] so the D transform stays defined.
fn clamp_efficiency(eta: f64) -> f64 {
    eta.clamp(MIN_EFFICIENCY, 1.0)
}

/// D of a value floored at `MIN_EFFICIENCY`. The floor makes the
/// transform total, so the fallback is unreachable.
fn d_clamped(x: f64) -> f64 {
    dimension(x.max(MIN_EFFICIENCY)).unwrap_or(0.0)
}

// ── raw payload ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawStep {
    #[serde(default = "default_step_name")]
    name: String,
    #[serde(default = "default_step_efficiency")]
    efficiency: f64,
    #[serde(default)]
    catalyst: String,
}

fn default_step_name() -> String {
    "unnamed".to_string()
}
fn default_step_efficiency() -> f64 {
    0.5
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MofConstraints {
    #[serde(default)]
    pub abundant_only: bool,
    pub max_cost_relative: Option<f64>,
    pub min_selectivity: Option<f64>,
    #[serde(default)]
    pub self_healing: bool,
}

#[derive(Debug, Deserialize)]
struct RawPayload {
    #[serde(default = "default_mode")]
    mode: String,
    steps: Option<Vec<RawStep>>,
    #[serde(default = "default_target")]
    target_efficiency: f64,
    candidates: Option<Vec<String>>,
    #[serde(default)]
    constraints: MofConstraints,
    #[serde(default = "default_mof")]
    mof: String,
    #[serde(default = "default_coupling")]
    coherence_coupling: f64,
    #[serde(default = "default_irradiance")]
    solar_irradiance_w_m2: f64,
    #[serde(default = "default_area")]
    unit_area_m2: f64,
    #[serde(default = "default_temp")]
    temperature_c: f64,
    #[serde(default = "default_co2")]
    co2_ppm: f64,
}

fn default_mode() -> String {
    "cascade".to_string()
}
fn default_target() -> f64 {
    0.20
}
fn default_mof() -> String {
    "Fe-BTC".to_string()
}
fn default_coupling() -> f64 {
    0.8
}
fn default_irradiance() -> f64 {
    1000.0
}
fn default_area() -> f64 {
    1.0
}
fn default_temp() -> f64 {
    25.0
}
fn default_co2() -> f64 {
    415.0
}

// ── ingested forms ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StepD {
    name: String,
    efficiency: f64,
    d_value: f64,
    catalyst: String,
    #[serde(default)]
    contribution_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CascadeIngested {
    mode: String,
    steps: Vec<StepD>,
    overall_efficiency: f64,
    d_overall: f64,
    target_efficiency: f64,
    d_target: f64,
    temperature_c: f64,
    co2_ppm: f64,
    temp_factor: f64,
    co2_sat: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MofCandidate {
    name: String,
    pore_nm: f64,
    co2_capacity_mmol_g: f64,
    co2_n2_selectivity: f64,
    abundant: bool,
    self_healing: bool,
    cost_relative: f64,
    score: f64,
    d_score: f64,
    pore_phi_match: f64,
    geometric_selectivity: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct MofIngested {
    mode: String,
    candidates: Vec<MofCandidate>,
    constraints: MofConstraints,
}

#[derive(Debug, Serialize, Deserialize)]
struct FullIngested {
    mode: String,
    cascade: CascadeIngested,
    mof_name: String,
    mof_score: f64,
    mof_capacity_mmol_g: f64,
    coherence_coupling: f64,
    coherence_factor: f64,
    solar_irradiance_w_m2: f64,
    unit_area_m2: f64,
    temperature_c: f64,
    co2_ppm: f64,
}

pub struct PhotosynthesisAdapter {
    config: AdapterConfig,
}

impl Default for PhotosynthesisAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotosynthesisAdapter {
    pub fn new() -> Self {
        PhotosynthesisAdapter {
            config: AdapterConfig::new(
                "photosynthesis",
                "Artificial photosynthesis, MOF filters, and quantum coherence via D-space",
            ),
        }
    }

    fn ingest_cascade(&self, raw: &RawPayload) -> CascadeIngested {
        let steps: Vec<StepD> = match &raw.steps {
            Some(steps) => steps
                .iter()
                .map(|s| {
                    let eta = clamp_efficiency(s.efficiency);
                    StepD {
                        name: s.name.clone(),
                        efficiency: eta,
                        d_value: d_clamped(eta),
                        catalyst: s.catalyst.clone(),
                        contribution_pct: 0.0,
                    }
                })
                .collect(),
            None => NATURAL_STEPS
                .iter()
                .map(|s| StepD {
                    name: s.name.to_string(),
                    efficiency: s.efficiency,
                    d_value: d_clamped(s.efficiency),
                    catalyst: s.catalyst.to_string(),
                    contribution_pct: 0.0,
                })
                .collect(),
        };
        let product: f64 = steps.iter().map(|s| s.efficiency).product();
        CascadeIngested {
            mode: "cascade".to_string(),
            overall_efficiency: product,
            d_overall: d_clamped(product),
            target_efficiency: raw.target_efficiency,
            d_target: d_clamped(raw.target_efficiency),
            temperature_c: raw.temperature_c,
            co2_ppm: raw.co2_ppm,
            temp_factor: temp_correction(raw.temperature_c),
            co2_sat: co2_factor(raw.co2_ppm),
            steps,
        }
    }

    fn ingest_mof(&self, raw: &RawPayload) -> MofIngested {
        let names: Vec<String> = match &raw.candidates {
            Some(names) => names.clone(),
            None => MOF_MATERIALS.iter().map(|m| m.name.to_string()).collect(),
        };
        let candidates: Vec<MofCandidate> = names
            .iter()
            .filter_map(|name| mof_by_name(name))
            .map(|mat| {
                let score = mof_score(mat);
                MofCandidate {
                    name: mat.name.to_string(),
                    pore_nm: mat.pore_nm,
                    co2_capacity_mmol_g: mat.co2_capacity_mmol_g,
                    co2_n2_selectivity: mat.co2_n2_selectivity,
                    abundant: mat.abundant,
                    self_healing: mat.self_healing,
                    cost_relative: mat.cost_relative,
                    score,
                    d_score: d_clamped(score),
                    pore_phi_match: (mat.pore_nm - phi_optimal_pore_nm()).abs(),
                    geometric_selectivity: pore_selectivity(mat.pore_nm),
                }
            })
            .collect();
        MofIngested {
            mode: "mof_filter".to_string(),
            candidates,
            constraints: raw.constraints.clone(),
        }
    }

    fn ingest_full(&self, raw: &RawPayload) -> FullIngested {
        let cascade = self.ingest_cascade(raw);
        let (score, capacity) = match mof_by_name(&raw.mof) {
            Some(mat) => (mof_score(mat), mat.co2_capacity_mmol_g),
            None => (0.0, 0.0),
        };
        FullIngested {
            mode: "full_system".to_string(),
            cascade,
            mof_name: raw.mof.clone(),
            mof_score: score,
            mof_capacity_mmol_g: capacity,
            coherence_coupling: raw.coherence_coupling,
            coherence_factor: quantum_coherence_factor(raw.temperature_c, raw.coherence_coupling),
            solar_irradiance_w_m2: raw.solar_irradiance_w_m2,
            unit_area_m2: raw.unit_area_m2,
            temperature_c: raw.temperature_c,
            co2_ppm: raw.co2_ppm,
        }
    }

    fn analyze_cascade(&self, mut data: CascadeIngested) -> AnalysisResult {
        if data.steps.is_empty() {
            let payload = serde_json::to_value(&data).unwrap_or(Value::Null);
            return AnalysisResult::failure(payload, "No cascade steps provided");
        }

        let d_values: Vec<f64> = data.steps.iter().map(|s| s.d_value).collect();
        let d_sum: f64 = d_values.iter().sum();
        let sum_rule = SumRuleValidator::validate(&d_values, data.d_overall, 100.0);
        let consistency = crate::base::consistency_from_ppm(sum_rule.deviation_ppm);

        for step in &mut data.steps {
            step.contribution_pct = if d_sum > 0.0 {
                step.d_value / d_sum * 100.0
            } else {
                0.0
            };
        }

        // Bottleneck = highest D-value = lowest efficiency.
        let bottleneck = data
            .steps
            .iter()
            .max_by(|a, b| a.d_value.total_cmp(&b.d_value))
            .cloned()
            .unwrap_or_else(|| data.steps[0].clone());

        let d_gap = data.d_target - data.d_overall;
        let mut improvements: Vec<String> = Vec::new();
        if d_gap < 0.0 {
            let gap_abs = d_gap.abs();
            let reduced = bottleneck.d_value - gap_abs;
            improvements.push(format!(
                "Reduce D({}) by {gap_abs:.3} (from {:.3} to {reduced:.3}, \
                 i.e. raise efficiency to {:.3})",
                bottleneck.name,
                bottleneck.d_value,
                value_from_dimension(reduced),
            ));
        }

        let recommendations = self.cascade_recommendations(&data, &bottleneck, d_gap);

        let mut ranked: Vec<&StepD> = data.steps.iter().collect();
        ranked.sort_by(|a, b| b.d_value.total_cmp(&a.d_value));
        let hierarchy: Vec<RankedEntry> = ranked
            .iter()
            .enumerate()
            .map(|(i, s)| RankedEntry {
                label: s.name.clone(),
                score: s.efficiency,
                d_value: s.d_value,
                rank: i + 1,
            })
            .collect();

        AnalysisResult {
            success: true,
            data: json!({
                "mode": "cascade",
                "overall_efficiency": data.overall_efficiency,
                "d_overall": data.d_overall,
                "step_analysis": data.steps,
                "bottleneck": {
                    "step_name": bottleneck.name,
                    "d_value": bottleneck.d_value,
                    "efficiency": bottleneck.efficiency,
                    "contribution_pct": if d_sum > 0.0 {
                        bottleneck.d_value / d_sum * 100.0
                    } else {
                        0.0
                    },
                    "catalyst": bottleneck.catalyst,
                },
                "sum_rule": sum_rule,
                "gap_to_target": {
                    "target": data.target_efficiency,
                    "d_target": data.d_target,
                    "d_gap": d_gap,
                    "improvements_needed": improvements,
                },
                "env_corrections": {
                    "temp_factor": data.temp_factor,
                    "co2_saturation": data.co2_sat,
                },
            }),
            d_space_values: d_values,
            consistency_score: consistency,
            hierarchy,
            recommendations,
            metadata: Value::Null,
        }
    }

    fn cascade_recommendations(
        &self,
        data: &CascadeIngested,
        bottleneck: &StepD,
        d_gap: f64,
    ) -> Vec<String> {
        let mut recs: Vec<String> = Vec::new();
        match bottleneck.name.as_str() {
            "carbon_fixation" => recs.push(format!(
                "Carbon fixation (RuBisCO) is the bottleneck at D={:.3}. \
                 Consider engineered RuBisCO variants or C4/CAM carbon \
                 concentrating mechanisms to improve specificity.",
                bottleneck.d_value,
            )),
            "photorespiration" => recs.push(
                "Photorespiration wastes energy. Engineering RuBisCO with \
                 higher CO2/O2 specificity or encapsulating in carboxysomes \
                 can suppress this pathway."
                    .to_string(),
            ),
            "water_splitting" => recs.push(
                "Water splitting catalyst (Mn4CaO5 mimic) limits efficiency. \
                 Explore Co-Pi or Ir-oxide catalysts for artificial OEC with \
                 higher turnover."
                    .to_string(),
            ),
            other => recs.push(format!(
                "Step '{other}' is the primary bottleneck (D={:.3}). \
                 Focus R&D here for maximum system improvement.",
                bottleneck.d_value,
            )),
        }
        if d_gap < 0.0 {
            recs.push(format!(
                "Target efficiency ({:.1}%) requires D-reduction of {:.3}. \
                 This is achievable by improving 1-2 bottleneck steps.",
                data.target_efficiency * 100.0,
                d_gap.abs(),
            ));
        }
        if data.co2_sat < 0.8 {
            recs.push(format!(
                "CO2 saturation is only {:.1}% at {:.0} ppm. Consider CO2 \
                 concentrating (MOF pre-filter) or point-source capture.",
                data.co2_sat * 100.0,
                data.co2_ppm,
            ));
        }
        if data.temp_factor < 0.9 {
            recs.push(format!(
                "Temperature correction factor {:.3} indicates suboptimal \
                 conditions. Target 20-30 C range.",
                data.temp_factor,
            ));
        }
        recs
    }

    fn analyze_mof(&self, data: MofIngested) -> AnalysisResult {
        let constraints = &data.constraints;
        let mut filtered: Vec<MofCandidate> = data
            .candidates
            .iter()
            .filter(|c| !constraints.abundant_only || c.abundant)
            .filter(|c| constraints.max_cost_relative.map_or(true, |m| c.cost_relative <= m))
            .filter(|c| constraints.min_selectivity.map_or(true, |m| c.co2_n2_selectivity >= m))
            .filter(|c| !constraints.self_healing || c.self_healing)
            .cloned()
            .collect();
        filtered.sort_by(|a, b| b.score.total_cmp(&a.score));

        let d_values: Vec<f64> = filtered.iter().map(|c| c.d_score).collect();
        let consistency = if filtered.is_empty() { 0.0 } else { 1.0 };

        let recommendations = self.mof_recommendations(&filtered, data.candidates.len());

        let hierarchy: Vec<RankedEntry> = filtered
            .iter()
            .enumerate()
            .map(|(i, c)| RankedEntry {
                label: c.name.clone(),
                score: c.score,
                d_value: c.d_score,
                rank: i + 1,
            })
            .collect();

        let ranking: Vec<Value> = filtered
            .iter()
            .map(|c| {
                json!({
                    "name": c.name,
                    "score": round_to(c.score, 3),
                    "d_score": round_to(c.d_score, 4),
                    "pore_phi_match": round_to(c.pore_phi_match, 4),
                    "geometric_selectivity": round_to(c.geometric_selectivity, 2),
                    "co2_capacity_mmol_g": c.co2_capacity_mmol_g,
                    "co2_n2_selectivity": c.co2_n2_selectivity,
                    "abundant": c.abundant,
                    "self_healing": c.self_healing,
                })
            })
            .collect();

        AnalysisResult {
            success: true,
            data: json!({
                "mode": "mof_filter",
                "mof_ranking": ranking,
                "phi_optimal_pore_nm": round_to(phi_optimal_pore_nm(), 4),
                "total_candidates": data.candidates.len(),
                "after_constraints": filtered.len(),
                "constraints_applied": data.constraints,
            }),
            d_space_values: d_values,
            consistency_score: consistency,
            hierarchy,
            recommendations,
            metadata: Value::Null,
        }
    }

    fn mof_recommendations(&self, filtered: &[MofCandidate], total: usize) -> Vec<String> {
        let mut recs: Vec<String> = Vec::new();
        let best = match filtered.first() {
            Some(best) => best,
            None => {
                recs.push(
                    "No MOFs survive the applied constraints. Relax abundant_only \
                     or increase max_cost_relative."
                        .to_string(),
                );
                return recs;
            }
        };
        recs.push(format!(
            "Top candidate: {} (score={:.1}, capacity={} mmol/g, selectivity={}x).",
            best.name, best.score, best.co2_capacity_mmol_g, best.co2_n2_selectivity,
        ));
        let phi_close: Vec<&str> = filtered
            .iter()
            .filter(|c| c.pore_phi_match < 0.05)
            .map(|c| c.name.as_str())
            .collect();
        if !phi_close.is_empty() {
            recs.push(format!(
                "PHI-optimal pore match (<0.05 nm): {}. These approach the \
                 golden-ratio pore geometry ({:.3} nm) for maximum CO2/N2 \
                 selectivity.",
                phi_close.join(", "),
                phi_optimal_pore_nm(),
            ));
        }
        let healers: Vec<&str> = filtered
            .iter()
            .filter(|c| c.self_healing)
            .map(|c| c.name.as_str())
            .collect();
        if !healers.is_empty() {
            recs.push(format!(
                "Self-healing MOFs: {}. These regenerate under cycling, reducing \
                 replacement cost and enabling circular-economy operation.",
                healers.join(", "),
            ));
        }
        if filtered.len() < total {
            recs.push(format!(
                "{} candidate(s) removed by constraints. Review constraint \
                 strictness if more options needed.",
                total - filtered.len(),
            ));
        }
        recs
    }

    fn analyze_full(&self, data: FullIngested) -> AnalysisResult {
        let cascade_eff = data.cascade.overall_efficiency;
        let cascade_result = self.analyze_cascade(data.cascade.clone());

        let temp_fac = temp_correction(data.temperature_c);
        let co2_sat = co2_factor(data.co2_ppm);
        let coherence = data.coherence_factor;
        let mof_eff = (data.mof_capacity_mmol_g / EXCELLENT_CAPACITY_MMOL_G).min(1.0);

        let eta_system =
            (cascade_eff * mof_eff * coherence * temp_fac * co2_sat).max(MIN_EFFICIENCY);
        let d_system = d_clamped(eta_system);

        // CO2 fixed per day: incident energy × system efficiency,
        // 6 mol CO2 per mol glucose.
        let energy_j = data.solar_irradiance_w_m2 * data.unit_area_m2 * SUNSHINE_HOURS * 3600.0;
        let co2_mol_day = energy_j * eta_system / GLUCOSE_ENERGY_J_MOL * 6.0;
        let co2_kg_day = co2_mol_day * CO2_KG_PER_MOL;

        let subsystems: Vec<(&str, f64)> = vec![
            ("cascade", cascade_eff),
            ("mof_capture", mof_eff),
            ("coherence", coherence),
            ("temperature", temp_fac),
            ("co2_saturation", co2_sat),
        ];
        let sub_d: Vec<(&str, f64, f64)> = subsystems
            .iter()
            .map(|&(name, eff)| (name, eff, d_clamped(eff)))
            .collect();
        // Fallback unreachable, sub_d always has five entries.
        let bottleneck = sub_d
            .iter()
            .max_by(|a, b| a.2.total_cmp(&b.2))
            .copied()
            .unwrap_or(("cascade", cascade_eff, d_clamped(cascade_eff)));

        let d_values: Vec<f64> = sub_d.iter().map(|s| s.2).collect();
        let sum_rule = SumRuleValidator::validate(&d_values, d_system, 1000.0);
        let consistency = crate::base::consistency_from_ppm(sum_rule.deviation_ppm);

        let recommendations = self.full_recommendations(&data, &bottleneck, eta_system, co2_kg_day);

        let mut ranked = sub_d.clone();
        ranked.sort_by(|a, b| b.2.total_cmp(&a.2));
        let hierarchy: Vec<RankedEntry> = ranked
            .iter()
            .enumerate()
            .map(|(i, &(name, eff, d))| RankedEntry {
                label: name.to_string(),
                score: eff,
                d_value: d,
                rank: i + 1,
            })
            .collect();

        AnalysisResult {
            success: true,
            data: json!({
                "mode": "full_system",
                "overall_efficiency": eta_system,
                "d_system": d_system,
                "co2_per_m2_day_kg": round_to(co2_kg_day, 6),
                "subsystems": sub_d.iter().map(|&(name, eff, d)| json!({
                    "name": name,
                    "efficiency": round_to(eff, 6),
                    "d_value": round_to(d, 4),
                })).collect::<Vec<_>>(),
                "bottleneck": {
                    "subsystem": bottleneck.0,
                    "d_value": bottleneck.2,
                    "efficiency": bottleneck.1,
                },
                "mof": {
                    "name": data.mof_name,
                    "score": round_to(data.mof_score, 3),
                    "capture_efficiency": round_to(mof_eff, 4),
                },
                "coherence": {
                    "factor": round_to(coherence, 6),
                    "coupling": data.coherence_coupling,
                    "temp_stable": coherence > 0.5,
                },
                "cascade_detail": cascade_result.data,
                "sum_rule": sum_rule,
            }),
            d_space_values: d_values,
            consistency_score: consistency,
            hierarchy,
            recommendations,
            metadata: Value::Null,
        }
    }

    fn full_recommendations(
        &self,
        data: &FullIngested,
        bottleneck: &(&str, f64, f64),
        eta_system: f64,
        co2_kg: f64,
    ) -> Vec<String> {
        let mut recs: Vec<String> = Vec::new();
        recs.push(format!(
            "System efficiency: {:.4}%. CO2 capture: {co2_kg:.4} kg/m2/day.",
            eta_system * 100.0,
        ));
        recs.push(format!(
            "Primary bottleneck: {} (D={:.3}, eff={:.3}).",
            bottleneck.0, bottleneck.2, bottleneck.1,
        ));
        match bottleneck.0 {
            "cascade" => recs.push(
                "Photosynthesis cascade limits system. See cascade-mode \
                 analysis for per-step improvements."
                    .to_string(),
            ),
            "mof_capture" => recs.push(format!(
                "MOF '{}' capture rate is the bottleneck. Consider \
                 higher-capacity MOFs (MOF-74-Mg: 8.9 mmol/g) or multi-layer \
                 MOF beds.",
                data.mof_name,
            )),
            "coherence" => recs.push(format!(
                "Quantum coherence (coupling={:.2}) degrades efficiency. \
                 Increase coupling via structured light-harvesting scaffolds \
                 or lower operating temperature.",
                data.coherence_coupling,
            )),
            "co2_saturation" => recs.push(format!(
                "CO2 saturation at {:.0} ppm is low. Use MOF pre-concentrator \
                 to raise local CO2 partial pressure before the reaction stage.",
                data.co2_ppm,
            )),
            _ => {}
        }
        recs
    }
}

impl Adapter for PhotosynthesisAdapter {
    fn config(&self) -> &AdapterConfig {
        &self.config
    }

    fn ingest(&self, raw: &Value) -> Value {
        let payload: RawPayload = match serde_json::from_value(raw.clone()) {
            Ok(payload) => payload,
            Err(e) => return soft_error(&format!("Malformed payload: {e}")),
        };
        let ingested = match payload.mode.as_str() {
            "cascade" => serde_json::to_value(self.ingest_cascade(&payload)),
            "mof_filter" => serde_json::to_value(self.ingest_mof(&payload)),
            "full_system" => serde_json::to_value(self.ingest_full(&payload)),
            other => return soft_error(&format!("Unknown mode '{other}'")),
        };
        ingested.unwrap_or_else(|_| soft_error("Serialization failed"))
    }

    fn analyze(&self, ingested: &Value) -> AnalysisResult {
        if let Some(message) = soft_error_message(ingested) {
            return AnalysisResult::failure(ingested.clone(), message);
        }
        let mode = ingested
            .get("mode")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let parsed = match mode.as_str() {
            "cascade" => serde_json::from_value::<CascadeIngested>(ingested.clone())
                .map(|d| self.analyze_cascade(d)),
            "mof_filter" => {
                serde_json::from_value::<MofIngested>(ingested.clone()).map(|d| self.analyze_mof(d))
            }
            "full_system" => serde_json::from_value::<FullIngested>(ingested.clone())
                .map(|d| self.analyze_full(d)),
            other => {
                return AnalysisResult::failure(ingested.clone(), &format!("Unknown mode '{other}'"))
            }
        };
        match parsed {
            Ok(result) => result,
            Err(e) => AnalysisResult::failure(
                ingested.clone(),
                &format!("Malformed ingested payload: {e}"),
            ),
        }
    }

    fn report(&self, result: &AnalysisResult) -> Value {
        let data = &result.data;
        let mode = data.get("mode").and_then(Value::as_str).unwrap_or("cascade");
        let mut base = json!({
            "adapter": self.config.name,
            "mode": mode,
            "success": result.success,
            "consistency_score": round_to(result.consistency_score, 6),
            "recommendations": result.recommendations,
        });
        let extra = match mode {
            "cascade" => json!({
                "overall_efficiency": {
                    "value": data.get("overall_efficiency").cloned().unwrap_or(Value::Null),
                    "d_value": data.get("d_overall").cloned().unwrap_or(Value::Null),
                },
                "step_analysis": data.get("step_analysis").cloned().unwrap_or(json!([])),
                "bottleneck": data.get("bottleneck").cloned().unwrap_or(json!({})),
                "gap_to_target": data.get("gap_to_target").cloned().unwrap_or(json!({})),
                "sum_rule": data.get("sum_rule").cloned().unwrap_or(json!({})),
                "env_corrections": data.get("env_corrections").cloned().unwrap_or(json!({})),
            }),
            "mof_filter" => json!({
                "mof_ranking": data.get("mof_ranking").cloned().unwrap_or(json!([])),
                "phi_optimal_pore_nm": data.get("phi_optimal_pore_nm").cloned().unwrap_or(Value::Null),
                "total_candidates": data.get("total_candidates").cloned().unwrap_or(Value::Null),
                "after_constraints": data.get("after_constraints").cloned().unwrap_or(Value::Null),
            }),
            "full_system" => json!({
                "overall_efficiency": data.get("overall_efficiency").cloned().unwrap_or(Value::Null),
                "d_system": data.get("d_system").cloned().unwrap_or(Value::Null),
                "co2_per_m2_day_kg": data.get("co2_per_m2_day_kg").cloned().unwrap_or(Value::Null),
                "subsystems": data.get("subsystems").cloned().unwrap_or(json!([])),
                "bottleneck": data.get("bottleneck").cloned().unwrap_or(json!({})),
                "mof": data.get("mof").cloned().unwrap_or(json!({})),
                "coherence": data.get("coherence").cloned().unwrap_or(json!({})),
                "sum_rule": data.get("sum_rule").cloned().unwrap_or(json!({})),
            }),
            _ => json!({}),
        };
        if let (Some(base_map), Some(extra_map)) = (base.as_object_mut(), extra.as_object()) {
            for (k, v) in extra_map {
                base_map.insert(k.clone(), v.clone());
            }
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(payload: Value) -> Value {
        PhotosynthesisAdapter::new().run(&payload)
    }

    #[test]
    fn test_unknown_mode_soft_error() {
        let r = run(json!({ "mode": "chlorophyll" }));
        assert_eq!(r["success"], json!(false));
        assert_eq!(r["recommendations"][0], json!("Unknown mode 'chlorophyll'"));
    }

    #[test]
    fn test_default_cascade_bottleneck_is_carbon_fixation() {
        let r = run(json!({ "mode": "cascade" }));
        assert_eq!(r["success"], json!(true));
        assert_eq!(r["bottleneck"]["step_name"], json!("carbon_fixation"));
        assert_eq!(r["step_analysis"].as_array().unwrap().len(), 7);
        // Overall efficiency is the product of a multiplicative chain,
        // so the D sum rule closes almost exactly.
        assert_eq!(r["sum_rule"]["valid"], json!(true));
        let score = r["consistency_score"].as_f64().unwrap();
        assert!(score > 0.999, "score = {score}");
    }

    #[test]
    fn test_cascade_gap_to_target_suggests_improvement() {
        // Natural cascade (~14.2%) falls short of a 20% target.
        let r = run(json!({ "mode": "cascade", "target_efficiency": 0.20 }));
        let gap = r["gap_to_target"]["d_gap"].as_f64().unwrap();
        assert!(gap < 0.0);
        let improvements = r["gap_to_target"]["improvements_needed"].as_array().unwrap();
        assert_eq!(improvements.len(), 1);
        assert!(improvements[0]
            .as_str()
            .unwrap()
            .contains("carbon_fixation"));
    }

    #[test]
    fn test_cascade_custom_steps_clamped() {
        let r = run(json!({
            "mode": "cascade",
            "steps": [
                { "name": "a", "efficiency": 1.5 },
                { "name": "b", "efficiency": 0.5 },
            ],
        }));
        let steps = r["step_analysis"].as_array().unwrap();
        assert_eq!(steps[0]["efficiency"], json!(1.0));
        assert_eq!(r["bottleneck"]["step_name"], json!("b"));
    }

    #[test]
    fn test_cascade_empty_steps_rejected() {
        let r = run(json!({ "mode": "cascade", "steps": [] }));
        assert_eq!(r["success"], json!(false));
    }

    #[test]
    fn test_mof_filter_ranking_descending() {
        let r = run(json!({ "mode": "mof_filter" }));
        assert_eq!(r["success"], json!(true));
        let ranking = r["mof_ranking"].as_array().unwrap();
        assert_eq!(ranking.len(), 8);
        let scores: Vec<f64> = ranking
            .iter()
            .map(|c| c["score"].as_f64().unwrap())
            .collect();
        for pair in scores.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn test_mof_filter_constraints() {
        let r = run(json!({
            "mode": "mof_filter",
            "constraints": { "abundant_only": true, "min_selectivity": 100.0 },
        }));
        let ranking = r["mof_ranking"].as_array().unwrap();
        // Only MOF-74-Mg (175x) and Mg-MOF-74 (150x) are abundant with
        // selectivity >= 100.
        assert_eq!(ranking.len(), 2);
        for c in ranking {
            assert_eq!(c["abundant"], json!(true));
        }
        let recs = r["recommendations"].as_array().unwrap();
        assert!(recs
            .iter()
            .any(|m| m.as_str().unwrap().contains("removed by constraints")));
    }

    #[test]
    fn test_mof_filter_self_healing_only() {
        let r = run(json!({
            "mode": "mof_filter",
            "constraints": { "self_healing": true },
        }));
        let ranking = r["mof_ranking"].as_array().unwrap();
        // Fe-BTC and COF-300 are the only self-healing entries.
        assert_eq!(ranking.len(), 2);
        let names: Vec<&str> = ranking
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert!(names.contains(&"Fe-BTC"));
        assert!(names.contains(&"COF-300"));
        for c in ranking {
            assert_eq!(c["self_healing"], json!(true));
        }
    }

    #[test]
    fn test_mof_filter_nothing_survives() {
        let r = run(json!({
            "mode": "mof_filter",
            "constraints": { "min_selectivity": 10000.0 },
        }));
        assert_eq!(r["success"], json!(true));
        assert_eq!(r["consistency_score"], json!(0.0));
        assert!(r["recommendations"][0]
            .as_str()
            .unwrap()
            .contains("No MOFs survive"));
    }

    #[test]
    fn test_full_system_model() {
        let r = run(json!({ "mode": "full_system", "mof": "MOF-74-Mg" }));
        assert_eq!(r["success"], json!(true));
        assert_eq!(r["subsystems"].as_array().unwrap().len(), 5);
        let eta = r["overall_efficiency"].as_f64().unwrap();
        assert!(eta > 0.0 && eta < 1.0);
        let co2 = r["co2_per_m2_day_kg"].as_f64().unwrap();
        assert!(co2 > 0.0);
        assert_eq!(r["mof"]["name"], json!("MOF-74-Mg"));
    }

    #[test]
    fn test_full_system_unknown_mof_zero_capture() {
        let r = run(json!({ "mode": "full_system", "mof": "unobtainium" }));
        assert_eq!(r["success"], json!(true));
        assert_eq!(r["mof"]["capture_efficiency"], json!(0.0));
        assert_eq!(r["bottleneck"]["subsystem"], json!("mof_capture"));
    }
}
