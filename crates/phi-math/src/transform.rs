// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — D-Space Transform
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The logarithmic dimension transform in golden-ratio base.
//!
//! D(x) = -ln(x)/ln(φ) is a bijection between (0, ∞) and the reals.
//! Two algebraic identities serve as runtime self-tests:
//!   closure   D(x) + D(1/x) = 0
//!   energy    φ^D(x) · Θ(x) = 2π

use ndarray::Array1;
use num_complex::Complex64;
use phi_types::constants::PHI;
use phi_types::error::{PhiError, PhiResult};
use std::f64::consts::PI;

/// Dimension from value: D(x) = -ln(x)/ln(φ). Requires x > 0.
pub fn dimension(x: f64) -> PhiResult<f64> {
    if x <= 0.0 {
        return Err(PhiError::nonpositive(x, "D(x)"));
    }
    Ok(-x.ln() / PHI.ln())
}

/// Value from dimension (inverse of D): x = φ^(-d). Total on all reals.
pub fn value_from_dimension(d: f64) -> f64 {
    PHI.powf(-d)
}

/// Phase from value: Θ(x) = 2πx. No domain restriction.
pub fn phase(x: f64) -> f64 {
    2.0 * PI * x
}

/// Energy invariant: E(x) = φ^D(x) · Θ(x), identically 2π for x > 0.
///
/// Deliberately evaluated through the full derivation rather than
/// returning the constant, so the floating error tracks the transform.
pub fn energy(x: f64) -> PhiResult<f64> {
    let d = dimension(x)?;
    Ok(PHI.powf(d) * phase(x))
}

/// Complex dimension with branch index k: D_k(z) = -(ln z + 2πki)/ln φ.
/// Requires z != 0.
pub fn dimension_complex(z: Complex64, k: i32) -> PhiResult<Complex64> {
    if z == Complex64::new(0.0, 0.0) {
        return Err(PhiError::DomainError {
            value: 0.0,
            message: "D_k(z) requires z != 0".to_string(),
        });
    }
    let ln_z_k = z.ln() + Complex64::new(0.0, 2.0 * PI * f64::from(k));
    Ok(-ln_z_k / PHI.ln())
}

/// Complex energy on branch k: E_k(z) = φ^D_k(z) · 2πz.
pub fn energy_complex(z: Complex64, k: i32) -> PhiResult<Complex64> {
    let d = dimension_complex(z, k)?;
    let phi_d = (d * PHI.ln()).exp();
    Ok(phi_d * 2.0 * PI * z)
}

// ── Batch helpers ────────────────────────────────────────────────────

/// Map a batch of values to D-space. Fails on the first nonpositive input.
pub fn dimension_batch(values: &Array1<f64>) -> PhiResult<Array1<f64>> {
    let mut out = Array1::zeros(values.len());
    for (i, &v) in values.iter().enumerate() {
        out[i] = dimension(v)?;
    }
    Ok(out)
}

/// Map a batch of dimensions back to values.
pub fn value_batch(dims: &Array1<f64>) -> Array1<f64> {
    dims.mapv(value_from_dimension)
}
