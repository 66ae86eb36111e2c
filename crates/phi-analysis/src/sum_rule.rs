// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Sum-Rule Validator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Checks that correction coefficients satisfy an algebraic sum rule.
//!
//! The fundamental identity: D of a product equals the sum of the
//! component D-values, so coefficient lists are validated against an
//! expected target in parts-per-million.

use phi_types::state::SumRuleReport;

/// Default sum-rule tolerance [ppm].
pub const DEFAULT_TOLERANCE_PPM: f64 = 100.0;

fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}

pub struct SumRuleValidator;

impl SumRuleValidator {
    /// Check whether Σ coefficients matches `expected_sum` within
    /// `tolerance_ppm`. An empty list sums to 0. A zero expected sum
    /// switches the deviation to |actual| · 1e6.
    pub fn validate(coefficients: &[f64], expected_sum: f64, tolerance_ppm: f64) -> SumRuleReport {
        let actual: f64 = coefficients.iter().sum();
        let deviation_ppm = if expected_sum == 0.0 {
            actual.abs() * 1e6
        } else {
            (actual - expected_sum).abs() / expected_sum.abs() * 1e6
        };
        SumRuleReport {
            valid: deviation_ppm <= tolerance_ppm,
            actual_sum: actual,
            expected_sum,
            deviation_ppm: round_to(deviation_ppm, 3),
            tolerance_ppm,
            residual: round_to(actual - expected_sum, 12),
        }
    }

    /// The single correction term that closes the sum rule exactly.
    pub fn find_missing(coefficients: &[f64], target_sum: f64) -> f64 {
        target_sum - coefficients.iter().sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_exact() {
        let r = SumRuleValidator::validate(&[-1.0, 1.0, 2.0, 0.5], 2.5, DEFAULT_TOLERANCE_PPM);
        assert!(r.valid);
        assert!((r.actual_sum - 2.5).abs() < 1e-15);
        assert_eq!(r.deviation_ppm, 0.0);
        assert_eq!(r.residual, 0.0);
    }

    #[test]
    fn test_validate_outside_tolerance() {
        // 1% off = 10000 ppm
        let r = SumRuleValidator::validate(&[1.01], 1.0, 100.0);
        assert!(!r.valid);
        assert!((r.deviation_ppm - 10000.0).abs() < 1.0);
        assert!((r.residual - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_validate_empty_list() {
        let r = SumRuleValidator::validate(&[], 0.0, DEFAULT_TOLERANCE_PPM);
        assert!(r.valid);
        assert_eq!(r.actual_sum, 0.0);
    }

    #[test]
    fn test_zero_expected_sum_uses_absolute_deviation() {
        let r = SumRuleValidator::validate(&[1e-5, -2e-5], 0.0, 100.0);
        // |actual| = 1e-5 → 10 ppm
        assert!(r.valid);
        assert!((r.deviation_ppm - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_find_missing_closes_sum() {
        let coeffs = [0.3, 0.5, -0.1];
        let missing = SumRuleValidator::find_missing(&coeffs, 1.0);
        let total: f64 = coeffs.iter().sum::<f64>() + missing;
        assert!((total - 1.0).abs() < 1e-15);
    }
}
