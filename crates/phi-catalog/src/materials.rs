// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Photosynthesis & MOF Materials
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reference data for artificial photosynthesis and MOF filter design.
//!
//! Sections:
//!   A. Photon & PAR constants
//!   B. Natural photosynthesis quantum-yield steps (7 steps)
//!   C. MOF material database (8 entries)
//!   D. Molecular kinetic diameters
//!   E. Redox potentials & energy budget
//!   F. Helper functions (temperature, CO2, scoring, coherence)

use phi_types::constants::{BETA, GAMMA, PHI};
use phi_types::error::{PhiError, PhiResult};
use serde::Serialize;

// ── A. Photon & PAR constants ────────────────────────────────────────

/// h·c in eV·nm.
pub const PLANCK_EV_NM: f64 = 1239.842;

/// Photosystem II reaction centre wavelength [nm].
pub const P680_NM: f64 = 680.0;
/// Photosystem I reaction centre wavelength [nm].
pub const P700_NM: f64 = 700.0;

/// Photosynthetically Active Radiation range [nm].
pub const PAR_MIN_NM: f64 = 400.0;
pub const PAR_MAX_NM: f64 = 700.0;

/// Energy of a single photon at `wavelength_nm` in electron-volts.
pub fn photon_energy_ev(wavelength_nm: f64) -> PhiResult<f64> {
    if wavelength_nm <= 0.0 {
        return Err(PhiError::nonpositive(wavelength_nm, "photon energy"));
    }
    Ok(PLANCK_EV_NM / wavelength_nm)
}

// ── B. Natural photosynthesis quantum-yield steps ────────────────────

/// One step of the photosynthetic cascade.
#[derive(Debug, Clone, Serialize)]
pub struct CascadeStep {
    pub name: &'static str,
    /// Quantum yield, 0 < η ≤ 1.
    pub efficiency: f64,
    pub catalyst: &'static str,
}

/// The seven-step natural photosynthesis cascade.
pub const NATURAL_STEPS: [CascadeStep; 7] = [
    CascadeStep { name: "photon_capture", efficiency: 0.95, catalyst: "Chlorophyll a/b antenna" },
    CascadeStep { name: "charge_separation", efficiency: 0.99, catalyst: "P680/P700 reaction centres" },
    CascadeStep { name: "electron_transport", efficiency: 0.85, catalyst: "Plastoquinone chain" },
    CascadeStep { name: "water_splitting", efficiency: 0.80, catalyst: "Mn4CaO5 cluster (OEC)" },
    CascadeStep { name: "nadph_atp", efficiency: 0.66, catalyst: "ATP synthase / Fd-NADP+ reductase" },
    CascadeStep { name: "carbon_fixation", efficiency: 0.45, catalyst: "RuBisCO (Calvin cycle)" },
    CascadeStep { name: "photorespiration", efficiency: 0.72, catalyst: "RuBisCO oxygenase side-reaction" },
];

/// Overall natural efficiency: product of the step yields (~0.1424).
pub fn natural_overall() -> f64 {
    NATURAL_STEPS.iter().map(|s| s.efficiency).product()
}

// ── C. MOF material database ─────────────────────────────────────────

/// One metal-organic framework candidate for CO2 capture.
#[derive(Debug, Clone, Serialize)]
pub struct MofMaterial {
    pub name: &'static str,
    pub metal: &'static str,
    pub linker: &'static str,
    pub pore_nm: f64,
    pub co2_capacity_mmol_g: f64,
    pub co2_n2_selectivity: f64,
    pub thermal_stability_c: f64,
    pub water_stable: bool,
    pub abundant: bool,
    pub cost_relative: f64,
    pub self_healing: bool,
}

/// The fixed eight-entry MOF table.
pub const MOF_MATERIALS: [MofMaterial; 8] = [
    MofMaterial {
        name: "ZIF-8", metal: "Zn", linker: "2-methylimidazole",
        pore_nm: 0.34, co2_capacity_mmol_g: 1.2, co2_n2_selectivity: 15.0,
        thermal_stability_c: 550.0, water_stable: true, abundant: true,
        cost_relative: 1.0, self_healing: false,
    },
    MofMaterial {
        name: "MOF-74-Mg", metal: "Mg", linker: "2,5-dihydroxyterephthalic acid",
        pore_nm: 1.1, co2_capacity_mmol_g: 8.9, co2_n2_selectivity: 175.0,
        thermal_stability_c: 300.0, water_stable: false, abundant: true,
        cost_relative: 1.8, self_healing: false,
    },
    MofMaterial {
        name: "HKUST-1", metal: "Cu", linker: "1,3,5-benzenetricarboxylic acid",
        pore_nm: 0.9, co2_capacity_mmol_g: 4.2, co2_n2_selectivity: 22.0,
        thermal_stability_c: 280.0, water_stable: false, abundant: true,
        cost_relative: 1.5, self_healing: false,
    },
    MofMaterial {
        name: "UiO-66", metal: "Zr", linker: "1,4-benzenedicarboxylic acid",
        pore_nm: 0.6, co2_capacity_mmol_g: 2.3, co2_n2_selectivity: 30.0,
        thermal_stability_c: 540.0, water_stable: true, abundant: false,
        cost_relative: 2.5, self_healing: false,
    },
    MofMaterial {
        name: "MIL-101", metal: "Cr", linker: "terephthalic acid",
        pore_nm: 2.9, co2_capacity_mmol_g: 5.0, co2_n2_selectivity: 10.0,
        thermal_stability_c: 350.0, water_stable: true, abundant: false,
        cost_relative: 2.0, self_healing: false,
    },
    MofMaterial {
        name: "Mg-MOF-74", metal: "Mg", linker: "2,5-dioxidoterephthalate",
        pore_nm: 1.1, co2_capacity_mmol_g: 8.0, co2_n2_selectivity: 150.0,
        thermal_stability_c: 310.0, water_stable: false, abundant: true,
        cost_relative: 1.6, self_healing: false,
    },
    MofMaterial {
        name: "Fe-BTC", metal: "Fe", linker: "1,3,5-benzenetricarboxylic acid",
        pore_nm: 2.5, co2_capacity_mmol_g: 3.1, co2_n2_selectivity: 18.0,
        thermal_stability_c: 370.0, water_stable: true, abundant: true,
        cost_relative: 0.8, self_healing: true,
    },
    MofMaterial {
        name: "COF-300", metal: "none", linker: "tetrahedral organic",
        pore_nm: 0.72, co2_capacity_mmol_g: 1.8, co2_n2_selectivity: 40.0,
        thermal_stability_c: 490.0, water_stable: true, abundant: true,
        cost_relative: 1.3, self_healing: true,
    },
];

/// Look up a MOF by name.
pub fn mof_by_name(name: &str) -> Option<&'static MofMaterial> {
    MOF_MATERIALS.iter().find(|m| m.name == name)
}

// ── D. Molecular kinetic diameters [nm] ──────────────────────────────

pub const CO2_KINETIC_DIAMETER_NM: f64 = 0.330;
pub const N2_KINETIC_DIAMETER_NM: f64 = 0.364;
pub const O2_KINETIC_DIAMETER_NM: f64 = 0.346;
pub const H2O_KINETIC_DIAMETER_NM: f64 = 0.265;
pub const CH4_KINETIC_DIAMETER_NM: f64 = 0.380;

/// φ-optimal pore: d_CO2 · φ^0.2 ≈ 0.362 nm, just under N2 (0.364) —
/// passes CO2, blocks N2.
pub fn phi_optimal_pore_nm() -> f64 {
    CO2_KINETIC_DIAMETER_NM * PHI.powf(0.2)
}

// ── E. Redox potentials & energy budget ──────────────────────────────

/// Standard electrode potentials at pH 7, 25 °C [V].
pub const E_WATER_OXIDATION_V: f64 = 0.82;
pub const E_NADP_REDUCTION_V: f64 = -0.32;
pub const E_TOTAL_SPAN_V: f64 = E_WATER_OXIDATION_V - E_NADP_REDUCTION_V;

pub const PHOTONS_PER_GLUCOSE: u32 = 48;
/// Glucose combustion energy [kJ/mol].
pub const GLUCOSE_ENERGY_KJ_MOL: f64 = 2870.0;

/// RuBisCO Michaelis–Menten constants [µM].
pub const RUBISCO_KM_CO2_UM: f64 = 10.0;
pub const RUBISCO_KM_O2_UM: f64 = 200.0;
/// CO2/O2 selectivity ratio.
pub const RUBISCO_SPECIFICITY: f64 = RUBISCO_KM_O2_UM / RUBISCO_KM_CO2_UM;

// ── F. Helper functions ──────────────────────────────────────────────

/// Temperature correction with γ-damped decay: peaks at 25 °C.
pub fn temp_correction(temp_c: f64) -> f64 {
    let deviation = (temp_c - 25.0).abs();
    (-GAMMA * deviation).exp()
}

/// Michaelis–Menten CO2 saturation factor (k_half = 200 ppm).
/// co2_factor(415) ≈ 0.675 ambient air; co2_factor(40000) ≈ 0.995 stack gas.
pub fn co2_factor(co2_ppm: f64) -> f64 {
    const K_HALF: f64 = 200.0;
    if co2_ppm < 0.0 {
        return 0.0;
    }
    co2_ppm / (co2_ppm + K_HALF)
}

/// CO2-capture suitability score:
/// (capacity · selectivity · stability_norm · bonuses) / cost.
/// Higher is better; always non-negative.
pub fn mof_score(mat: &MofMaterial) -> f64 {
    let stability = mat.thermal_stability_c / 600.0;
    let cost = mat.cost_relative.max(0.01);
    let abundant = if mat.abundant { 1.5 } else { 1.0 };
    let healing = if mat.self_healing { 1.2 } else { 1.0 };
    let water = if mat.water_stable { 1.1 } else { 0.9 };
    mat.co2_capacity_mmol_g * mat.co2_n2_selectivity * stability * abundant * healing * water
        / cost
}

/// Gaussian CO2/N2 selectivity estimate centred on the φ-optimal pore
/// (max ≈ 200, σ = 0.05 nm).
pub fn pore_selectivity(pore_nm: f64) -> f64 {
    const MAX_SEL: f64 = 200.0;
    const SIGMA: f64 = 0.05;
    let delta = pore_nm - phi_optimal_pore_nm();
    MAX_SEL * (-(delta * delta) / (2.0 * SIGMA * SIGMA)).exp()
}

/// Quantum coherence survival at `temp_c`:
/// exp(-β · T_kelvin / (coupling · 300)). Stronger coupling preserves
/// coherence at higher temperature.
pub fn quantum_coherence_factor(temp_c: f64, coupling_strength: f64) -> f64 {
    if coupling_strength <= 0.0 {
        return 0.0;
    }
    let t_kelvin = temp_c + 273.15;
    (-BETA * t_kelvin / (coupling_strength * 300.0)).exp()
}
