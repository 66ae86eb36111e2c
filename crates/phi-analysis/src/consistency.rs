// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Consistency Checker
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Algebraic self-tests: D-space closure, energy invariance, mirror
//! symmetry. Invalid inputs yield soft result records, not errors —
//! consistency checks report, they do not abort.

use phi_math::sequences::mirror;
use phi_math::transform::{dimension, energy};
use phi_types::constants::ENERGY_CONSTANT;
use phi_types::state::{
    ClosureCheck, ConsistencyReport, EnergyCheck, MirrorCheck, MirrorReport,
};

/// Default absolute tolerance for closure and energy checks.
pub const DEFAULT_TOL: f64 = 1e-10;

pub struct ConsistencyChecker;

impl ConsistencyChecker {
    /// Verify D(x) + D(1/x) = 0.
    pub fn d_space_closure(x: f64, tolerance: f64) -> ClosureCheck {
        if x <= 0.0 {
            return ClosureCheck::invalid("x must be > 0");
        }
        // Both calls are in-domain once x > 0.
        let d_x = dimension(x).unwrap_or(f64::NAN);
        let d_inv = dimension(1.0 / x).unwrap_or(f64::NAN);
        let residual = d_x + d_inv;
        ClosureCheck {
            valid: residual.abs() < tolerance,
            d_x,
            d_inv_x: d_inv,
            residual,
            error: None,
        }
    }

    /// Verify E(x) = 2π.
    pub fn energy_conservation(x: f64, tolerance: f64) -> EnergyCheck {
        if x <= 0.0 {
            return EnergyCheck::invalid("x must be > 0");
        }
        let e = energy(x).unwrap_or(f64::NAN);
        let residual = e - ENERGY_CONSTANT;
        EnergyCheck {
            valid: residual.abs() < tolerance,
            energy: e,
            expected: ENERGY_CONSTANT,
            residual,
            error: None,
        }
    }

    /// Verify M(M(v)) = v for every value.
    pub fn mirror_symmetry(values: &[i64]) -> MirrorReport {
        let checks: Vec<MirrorCheck> = values
            .iter()
            .map(|&v| {
                let m = mirror(v);
                let mm = mirror(m);
                MirrorCheck {
                    value: v,
                    mirror: m,
                    mirror_mirror: mm,
                    valid: mm == v,
                }
            })
            .collect();
        MirrorReport {
            all_valid: checks.iter().all(|c| c.valid),
            checks,
        }
    }

    /// Closure + energy bundle at the default tolerance.
    pub fn full_check(x: f64) -> ConsistencyReport {
        ConsistencyReport {
            d_space_closure: Self::d_space_closure(x, DEFAULT_TOL),
            energy_conservation: Self::energy_conservation(x, DEFAULT_TOL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phi_types::constants::BRAHIM_NUMBERS;

    #[test]
    fn test_closure_valid_for_positive() {
        for x in [0.1, 1.0, 2.0, 42.0] {
            let c = ConsistencyChecker::d_space_closure(x, DEFAULT_TOL);
            assert!(c.valid, "closure failed at x={x}: residual={}", c.residual);
            assert!(c.error.is_none());
        }
    }

    #[test]
    fn test_closure_invalid_for_nonpositive() {
        let c = ConsistencyChecker::d_space_closure(-1.0, DEFAULT_TOL);
        assert!(!c.valid);
        assert!(c.error.is_some());
    }

    #[test]
    fn test_energy_valid_for_positive() {
        for x in [0.001, 1.0, 9999.0] {
            let e = ConsistencyChecker::energy_conservation(x, DEFAULT_TOL);
            assert!(e.valid, "energy failed at x={x}: residual={}", e.residual);
        }
    }

    #[test]
    fn test_energy_invalid_for_zero() {
        let e = ConsistencyChecker::energy_conservation(0.0, DEFAULT_TOL);
        assert!(!e.valid);
        assert!(e.error.is_some());
    }

    #[test]
    fn test_mirror_symmetry_on_anchor_table() {
        let report = ConsistencyChecker::mirror_symmetry(&BRAHIM_NUMBERS);
        assert!(report.all_valid);
        assert_eq!(report.checks.len(), BRAHIM_NUMBERS.len());
    }

    #[test]
    fn test_full_check_bundle() {
        let r = ConsistencyChecker::full_check(2.0);
        assert!(r.all_valid());
        let r = ConsistencyChecker::full_check(-2.0);
        assert!(!r.all_valid());
    }
}
