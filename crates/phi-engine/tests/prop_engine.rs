// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Facade Property Tests
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! End-to-end properties of the engine facade.

use phi_engine::PhiEngine;
use proptest::prelude::*;

proptest! {
    /// transform ∘ inverse_transform is the identity on (0, ∞).
    #[test]
    fn prop_roundtrip(values in proptest::collection::vec(1e-6..1e6f64, 1..32)) {
        let engine = PhiEngine::new();
        let d = engine.transform(&values).unwrap();
        let back = engine.inverse_transform(&d);
        for (v, b) in values.iter().zip(&back) {
            prop_assert!((v - b).abs() <= v.abs() * 1e-9);
        }
    }

    /// Energy is the 2π invariant everywhere in the domain.
    #[test]
    fn prop_energy_invariant(x in 1e-6..1e6f64) {
        let engine = PhiEngine::new();
        let e = engine.energy(&[x]).unwrap()[0];
        prop_assert!((e - std::f64::consts::TAU).abs() < 1e-8);
    }

    /// Any coefficient list validates against its own sum.
    #[test]
    fn prop_self_sum_valid(coeffs in proptest::collection::vec(-1e3..1e3f64, 1..16)) {
        let engine = PhiEngine::new();
        let sum: f64 = coeffs.iter().sum();
        prop_assume!(sum.abs() > 1e-6);
        prop_assert!(engine.validate(&coeffs, sum).valid);
    }

    /// Consistency checks pass for every positive input.
    #[test]
    fn prop_check_valid_positive(x in 1e-6..1e6f64) {
        let engine = PhiEngine::new();
        prop_assert!(engine.check(x).all_valid());
    }

    /// Decomposition through the facade keeps the factor invariants:
    /// every factor is a Fibonacci number > 1 and the product divides
    /// the input when the factorization is exact.
    #[test]
    fn prop_decompose_invariants(dim in 2i64..3000) {
        let engine = PhiEngine::new();
        let decomp = engine.decompose(dim);
        let f = &decomp.fibonacci_factors;
        if f.exact {
            prop_assert_eq!(f.product as i64, dim);
            prop_assert_eq!(f.residual, 0);
        } else {
            prop_assert_eq!(f.residual, dim - f.product as i64);
        }
    }
}

#[test]
fn adapter_pipeline_through_facade() {
    let engine = PhiEngine::new();
    let report = engine
        .report(
            &serde_json::json!({
                "values": [0.5, 2.0],
                "readings": [2.0, 2.01, 1.99],
                "reference": 2.0,
            }),
            Some("calibration"),
        )
        .unwrap();
    assert_eq!(report["consistency"]["all_valid"], serde_json::json!(true));
    assert_eq!(
        report["adapter_result"]["adapter"],
        serde_json::json!("calibration")
    );
}
