// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Property-Based Tests (proptest) for phi-analysis
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for phi-analysis using proptest.
//!
//! Covers: sum-rule tolerance arithmetic, find_missing closure, greedy
//! factorization invariants, hierarchy ranking order.

use phi_analysis::decompose::RepresentationDecomposer;
use phi_analysis::sum_rule::SumRuleValidator;
use proptest::prelude::*;

fn is_fibonacci(n: u64) -> bool {
    let (mut a, mut b) = (0u64, 1u64);
    while b < n {
        let next = a + b;
        a = b;
        b = next;
    }
    b == n
}

proptest! {
    /// Validating a list against its own sum is always exact.
    #[test]
    fn self_sum_is_always_valid(coeffs in prop::collection::vec(-1e6f64..1e6, 0..20)) {
        let total: f64 = coeffs.iter().sum();
        let r = SumRuleValidator::validate(&coeffs, total, 100.0);
        prop_assert!(r.valid, "self-sum invalid: ppm={}", r.deviation_ppm);
        prop_assert!(r.residual.abs() < 1e-6);
    }

    /// Appending find_missing's term closes the sum rule.
    #[test]
    fn find_missing_closes(
        coeffs in prop::collection::vec(-1e3f64..1e3, 0..10),
        target in -1e3f64..1e3,
    ) {
        let missing = SumRuleValidator::find_missing(&coeffs, target);
        let mut closed = coeffs.clone();
        closed.push(missing);
        let total: f64 = closed.iter().sum();
        prop_assert!((total - target).abs() < 1e-9);
    }

    /// Greedy factorization: factors ascending, all Fibonacci > 1,
    /// product divides n, and exact means zero residual.
    #[test]
    fn factorization_invariants(n in 1i64..100_000) {
        let f = RepresentationDecomposer::fibonacci_factors(n);
        prop_assert!(f.factors.windows(2).all(|w| w[0] <= w[1]));
        for &factor in &f.factors {
            prop_assert!(factor > 1);
            prop_assert!(is_fibonacci(factor), "{factor} not Fibonacci");
        }
        if f.product > 0 {
            prop_assert_eq!(n as u64 % f.product, 0, "product must divide n");
        }
        prop_assert_eq!(f.exact, f.residual == 0 && f.product == n as u64);
    }

    /// Hierarchy ranking is sorted by descending score, ascending value.
    #[test]
    fn hierarchy_order(denoms in prop::collection::vec(1i64..500, 1..15)) {
        let ranked = RepresentationDecomposer::hierarchy_rank(&denoms);
        prop_assert_eq!(ranked.len(), denoms.len());
        for w in ranked.windows(2) {
            let a = &w[0];
            let b = &w[1];
            prop_assert!(
                a.score > b.score || (a.score == b.score && a.denominator <= b.denominator)
            );
        }
    }
}
