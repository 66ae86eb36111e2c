// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Scalar Statistics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// ─────────────────────────────────────────────────────────────────────
//! Mean and sample standard deviation over short reading vectors.
//! Adapters reduce D-space residuals with these; no heavier machinery
//! is warranted.

/// Arithmetic mean. Empty input yields 0.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
/// Fewer than 2 values yields 0.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}
