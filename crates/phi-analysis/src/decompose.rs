// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Representation Decomposer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Decomposes integers into Fibonacci products and GUT representations.

use phi_math::sequences::fibonacci;
use phi_types::state::{Factorization, GutDecomposition, HierarchyEntry};

/// Known GUT representations keyed by adjoint dimension.
const KNOWN_REPS: [(u64, &str, &str); 9] = [
    (1, "U(1)", "F(1) = 1"),
    (3, "SU(2)", "F(4) = 3"),
    (8, "SU(3)", "F(6) = 8"),
    (12, "SM gauge", "L(12) = 322 states"),
    (24, "SU(5) adj", "F(5)^2 - 1 = 24"),
    (45, "SO(10) adj", "F(4)^2 * F(5) = 45"),
    (78, "E6 adj", "45 + 16 + 16_bar + 1"),
    (133, "E7 adj", "133 = 7 * 19"),
    (248, "E8 adj", "F(6) * 31 = 248"),
];

pub struct RepresentationDecomposer;

impl RepresentationDecomposer {
    /// Greedy factorization of `n` into unique Fibonacci numbers > 1,
    /// largest first with repeated division.
    ///
    /// Known limitation: the greedy order is not guaranteed to find every
    /// exact factorization (a different combination of factors may divide
    /// n exactly where the greedy pass leaves a residual). The `exact`
    /// flag reflects the greedy outcome and downstream ranking depends on
    /// it, so this behavior is load-bearing.
    pub fn fibonacci_factors(n: i64) -> Factorization {
        if n <= 0 {
            return Factorization {
                factors: Vec::new(),
                product: 0,
                residual: n,
                exact: false,
            };
        }
        let n = n as u64;

        // Unique Fibonacci numbers > 1 up to n, descending.
        let mut fibs: Vec<u64> = Vec::new();
        let mut k = 3; // F(3) = 2; skip F(0)=0, F(1)=F(2)=1
        loop {
            let f = fibonacci(k);
            if f > n {
                break;
            }
            if !fibs.contains(&f) {
                fibs.push(f);
            }
            k += 1;
        }
        fibs.sort_unstable_by(|a, b| b.cmp(a));

        let mut factors: Vec<u64> = Vec::new();
        let mut remaining = n;
        for f in fibs {
            while remaining > 1 && remaining % f == 0 {
                factors.push(f);
                remaining /= f;
            }
        }
        factors.sort_unstable();
        let product: u64 = factors.iter().product();
        Factorization {
            factors,
            product,
            residual: n as i64 - product as i64,
            exact: product == n,
        }
    }

    /// Look up a representation dimension in the fixed GUT table.
    /// Misses fall through to the Fibonacci factorization alone.
    pub fn gut_decomposition(dim: i64) -> GutDecomposition {
        let factors = Self::fibonacci_factors(dim);
        for &(d, group, form) in &KNOWN_REPS {
            if dim > 0 && d == dim as u64 {
                return GutDecomposition {
                    dimension: dim,
                    group: group.to_string(),
                    fibonacci_form: Some(form.to_string()),
                    fibonacci_factors: factors,
                };
            }
        }
        GutDecomposition {
            dimension: dim,
            group: "unknown".to_string(),
            fibonacci_form: None,
            fibonacci_factors: factors,
        }
    }

    /// Rank denominators by GUT significance: known representation = 3,
    /// exact Fibonacci product = 2, neither = 1. Descending score, ties
    /// broken by ascending denominator.
    pub fn hierarchy_rank(denominators: &[i64]) -> Vec<HierarchyEntry> {
        let mut ranked: Vec<HierarchyEntry> = denominators
            .iter()
            .map(|&den| {
                let decomposition = Self::gut_decomposition(den);
                let score = if decomposition.group != "unknown" {
                    3
                } else if decomposition.fibonacci_factors.exact {
                    2
                } else {
                    1
                };
                HierarchyEntry {
                    denominator: decomposition.dimension,
                    score,
                    decomposition,
                }
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.denominator.cmp(&b.denominator))
        });
        ranked
    }
}
