// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Phi-Power Ladder
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! φ-power scale mapping and energy ladder.
//!
//! Maps representation dimensions to energy scales via φ^n, anchored
//! to the proton mass. Known GUT adjoint dimensions carry labels and
//! Fibonacci/Lucas annotations.

use phi_math::sequences::{fibonacci, lucas};
use phi_math::transform::{dimension, value_from_dimension};
use phi_types::constants::{LUCAS_NUMBERS, PHI, TOTAL_STATES};
use phi_types::error::{PhiError, PhiResult};
use serde::Serialize;
use serde_json::{json, Value};

/// Reference proton mass [GeV].
pub const M_PROTON_GEV: f64 = 0.93827;

/// A known GUT scale dimension with its group label.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KnownScale {
    pub dimension: i64,
    pub label: &'static str,
    pub description: &'static str,
}

/// Known GUT scales, ordered by dimension.
pub const KNOWN_SCALES: [KnownScale; 9] = [
    KnownScale { dimension: 1, label: "U(1) trivial", description: "F(1) = 1" },
    KnownScale { dimension: 3, label: "SU(2) adjoint", description: "F(4) = 3" },
    KnownScale { dimension: 8, label: "SU(3) adjoint", description: "F(6) = 8" },
    KnownScale { dimension: 12, label: "SM gauge", description: "L(12) = 322 states" },
    KnownScale { dimension: 24, label: "SU(5) adjoint", description: "F(5)^2 - 1 = 24" },
    KnownScale { dimension: 45, label: "SO(10) adjoint", description: "F(4)^2 * F(5) = 45" },
    KnownScale { dimension: 78, label: "E6 adjoint", description: "M_GUT" },
    KnownScale { dimension: 133, label: "E7 adjoint", description: "133 = 7 * 19" },
    KnownScale { dimension: 248, label: "E8 adjoint", description: "F(6) * 31 = 248" },
];

/// One rung of the φ-power energy ladder.
#[derive(Debug, Clone, Serialize)]
pub struct LadderEntry {
    pub n: i64,
    pub phi_power: f64,
    pub energy_gev: f64,
    pub x_from_d: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lucas_number: Option<u64>,
}

/// Maps representation dimensions to energy scales via φ^n.
pub struct PhiLadder {
    /// Mass anchoring the ladder [GeV].
    pub ref_mass_gev: f64,
}

impl Default for PhiLadder {
    fn default() -> Self {
        Self::new()
    }
}

impl PhiLadder {
    pub fn new() -> Self {
        PhiLadder { ref_mass_gev: M_PROTON_GEV }
    }

    pub fn with_reference_mass(ref_mass_gev: f64) -> Self {
        PhiLadder { ref_mass_gev }
    }

    /// φ^n, the fundamental scale factor.
    pub fn phi_power(&self, n: i64) -> f64 {
        PHI.powi(n as i32)
    }

    /// Energy at φ^n [GeV], anchored to the reference mass.
    pub fn energy_gev(&self, n: i64) -> f64 {
        self.ref_mass_gev * self.phi_power(n)
    }

    /// D-space distance between two energy scales.
    pub fn d_space_step(&self, from_scale: f64, to_scale: f64) -> PhiResult<f64> {
        if from_scale <= 0.0 {
            return Err(PhiError::nonpositive(from_scale, "ladder step origin"));
        }
        if to_scale <= 0.0 {
            return Err(PhiError::nonpositive(to_scale, "ladder step target"));
        }
        Ok(dimension(from_scale)? - dimension(to_scale)?)
    }

    /// Nearest known GUT scale to a φ-power value. Non-positive input
    /// yields a soft error record.
    pub fn find_nearest_scale(&self, value: f64) -> Value {
        if value <= 0.0 {
            return json!({ "error": "value must be > 0" });
        }
        let n_float = value.ln() / PHI.ln();
        let n_int = n_float.round() as i64;

        // KNOWN_SCALES is non-empty, so a nearest entry always exists.
        let mut best = &KNOWN_SCALES[0];
        let mut best_dist = (best.dimension - n_int).abs();
        for scale in &KNOWN_SCALES[1..] {
            let dist = (scale.dimension - n_int).abs();
            if dist < best_dist {
                best_dist = dist;
                best = scale;
            }
        }

        json!({
            "input_value": value,
            "phi_exponent": n_float,
            "nearest_integer_n": n_int,
            "nearest_known_scale": {
                "dimension": best.dimension,
                "label": best.label,
                "description": best.description,
            },
            "distance": best_dist,
        })
    }

    /// The complete φ-power energy ladder for n in 0..=n_max.
    pub fn full_ladder(&self, n_max: i64) -> Vec<LadderEntry> {
        (0..=n_max)
            .map(|n| {
                let known = KNOWN_SCALES.iter().find(|s| s.dimension == n);
                LadderEntry {
                    n,
                    phi_power: self.phi_power(n),
                    energy_gev: self.energy_gev(n),
                    x_from_d: value_from_dimension(n as f64),
                    label: known.map(|s| s.label),
                    description: known.map(|s| s.description),
                    lucas_number: if (1..=12).contains(&n) {
                        Some(lucas(n as u32))
                    } else {
                        None
                    },
                }
            })
            .collect()
    }

    /// The known GUT scale entries only, ordered by dimension.
    pub fn gut_hierarchy(&self) -> Vec<Value> {
        KNOWN_SCALES
            .iter()
            .map(|s| {
                json!({
                    "dimension": s.dimension,
                    "label": s.label,
                    "description": s.description,
                    "phi_power": self.phi_power(s.dimension),
                    "energy_gev": self.energy_gev(s.dimension),
                })
            })
            .collect()
    }

    /// GUT coupling: α_GUT = 1/F(5)² = 1/25.
    pub fn alpha_gut(&self) -> Value {
        let f5 = fibonacci(5);
        json!({
            "alpha_gut": 1.0 / (f5 * f5) as f64,
            "formula": "1/F(5)^2 = 1/25",
            "f5": f5,
        })
    }

    /// Weinberg angle at the GUT scale: sin²θ_W = F(4)/F(6) = 3/8.
    pub fn weinberg_at_gut(&self) -> Value {
        let f4 = fibonacci(4);
        let f6 = fibonacci(6);
        json!({
            "sin2_theta_w_gut": f4 as f64 / f6 as f64,
            "formula": "F(4)/F(6) = 3/8",
            "f4": f4,
            "f6": f6,
        })
    }

    /// Sum of L(1..12) must equal the 840 total states.
    pub fn total_states_check(&self) -> Value {
        let sum: u64 = LUCAS_NUMBERS.iter().sum();
        json!({
            "total_states": sum,
            "expected": TOTAL_STATES,
            "valid": sum == TOTAL_STATES,
            "lucas_numbers": LUCAS_NUMBERS,
        })
    }
}
