// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Deterministic core constants of the phi calculus.
//!
//! Everything downstream (transforms, sum rules, the constants catalog)
//! derives from the golden ratio and the two fixed integer tables below.

use std::f64::consts::PI;

/// Golden ratio φ = (1 + √5)/2.
pub const PHI: f64 = 1.618033988749895;

/// Creation constant (alias of φ).
pub const ALPHA: f64 = PHI;

/// Return constant Ω = 1/φ.
pub const OMEGA: f64 = 0.618033988749895;

/// Security constant β = 1/φ³.
pub const BETA: f64 = 0.236067977499790;

/// Damping constant γ = 1/φ⁴.
pub const GAMMA: f64 = 0.145898033750315;

/// Genesis constant 2/901.
pub const GENESIS_CONSTANT: f64 = 2.0 / 901.0;

/// Conserved energy invariant: E(x) = 2π for all x > 0.
pub const ENERGY_CONSTANT: f64 = 2.0 * PI;

/// Fine-structure constant α_em.
pub const ALPHA_EM: f64 = 1.0 / 137.035999084;

/// Complex-branch spacing 2π/ln φ ≈ 13.0572.
pub fn branch_spacing() -> f64 {
    2.0 * PI / PHI.ln()
}

// ── Anchor integers (Brahim numbers) ─────────────────────────────────

/// The ten anchor integers. Sum = 1070, center = 107.
pub const BRAHIM_NUMBERS: [i64; 10] = [27, 42, 60, 75, 97, 117, 139, 154, 172, 187];

/// Reflection constant of the mirror operator M(x) = 214 - x.
pub const MIRROR_CONSTANT: i64 = 214;

/// Mean of the anchor set.
pub const BRAHIM_CENTER: i64 = 107;

/// Sum of the anchor set.
pub const BRAHIM_SUM: i64 = 1070;

/// Generating triangle of the anchor set.
pub const GENERATING_TRIANGLE: [i64; 3] = [42, 75, 97];

// ── Sequence deviations ──────────────────────────────────────────────

/// SU(3) color deviation.
pub const DELTA_4: i64 = -3;
/// Spacetime dimension deviation.
pub const DELTA_5: i64 = 4;
/// Matter > antimatter.
pub const NET_ASYMMETRY: i64 = 1;
pub const N_COLORS: i64 = 3;
pub const N_SPACETIME: i64 = 4;
/// 3^4.
pub const REGULATOR: i64 = 81;
pub const BETA_0_QCD: i64 = 9;

// ── Capacity integers (Lucas numbers) ────────────────────────────────

/// The twelve capacity integers L(1)..L(12).
pub const LUCAS_NUMBERS: [u64; 12] = [1, 3, 4, 7, 11, 18, 29, 47, 76, 123, 199, 322];

/// Sum of LUCAS_NUMBERS.
pub const TOTAL_STATES: u64 = 840;

/// Fibonacci primes used in GUT decomposition.
pub const FIBONACCI_PRIMES: [u64; 3] = [2, 3, 5];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phi_value() {
        assert!((PHI - (1.0 + 5.0_f64.sqrt()) / 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_derived_powers_of_phi() {
        assert!((OMEGA - 1.0 / PHI).abs() < 1e-15);
        assert!((BETA - 1.0 / PHI.powi(3)).abs() < 1e-15);
        assert!((GAMMA - 1.0 / PHI.powi(4)).abs() < 1e-15);
    }

    #[test]
    fn test_brahim_sum_and_center() {
        let sum: i64 = BRAHIM_NUMBERS.iter().sum();
        assert_eq!(sum, BRAHIM_SUM);
        assert_eq!(sum / BRAHIM_NUMBERS.len() as i64, BRAHIM_CENTER);
        assert_eq!(2 * BRAHIM_CENTER, MIRROR_CONSTANT);
    }

    #[test]
    fn test_lucas_total_states() {
        let sum: u64 = LUCAS_NUMBERS.iter().sum();
        assert_eq!(sum, TOTAL_STATES);
    }

    #[test]
    fn test_branch_spacing() {
        assert!((branch_spacing() - 2.0 * PI / PHI.ln()).abs() < 1e-12);
        assert!(branch_spacing() > 13.0 && branch_spacing() < 13.1);
    }
}
