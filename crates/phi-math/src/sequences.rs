// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Integer Sequences
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fibonacci / Lucas sequences and the mirror reflection operator.

use phi_types::constants::{LUCAS_NUMBERS, MIRROR_CONSTANT, PHI};

/// Fibonacci number F(n), 0-indexed: F(0)=0, F(1)=1.
pub fn fibonacci(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n - 1 {
        let next = a + b;
        a = b;
        b = next;
    }
    b
}

/// Lucas number L(n), 1-indexed to match the LUCAS_NUMBERS table.
/// Beyond the table the sequence continues iteratively from L(1)=1.
pub fn lucas(n: u32) -> u64 {
    if n >= 1 && (n as usize) <= LUCAS_NUMBERS.len() {
        return LUCAS_NUMBERS[n as usize - 1];
    }
    let (mut a, mut b) = (2u64, 1u64);
    for _ in 0..n.saturating_sub(1) {
        let next = a + b;
        a = b;
        b = next;
    }
    b
}

/// Mirror operator M(x) = 214 - x. Involution: M(M(x)) = x.
pub fn mirror(x: i64) -> i64 {
    MIRROR_CONSTANT - x
}

/// NPU bandwidth saturation model: BW(N) = 7.20 · (1 - e^(-N/φ)) GB/s.
pub fn npu_bandwidth(n_parallel: u32) -> f64 {
    const BW_MAX: f64 = 7.20;
    BW_MAX * (1.0 - (-f64::from(n_parallel) / PHI).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use phi_types::constants::BRAHIM_NUMBERS;

    #[test]
    fn test_fibonacci_sequence() {
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
        assert_eq!(fibonacci(2), 1);
        assert_eq!(fibonacci(10), 55);
        assert_eq!(fibonacci(20), 6765);
    }

    #[test]
    fn test_lucas_matches_table() {
        for (i, &expected) in LUCAS_NUMBERS.iter().enumerate() {
            assert_eq!(lucas(i as u32 + 1), expected);
        }
    }

    #[test]
    fn test_lucas_beyond_table() {
        // L(13) = L(12) + L(11) = 322 + 199
        assert_eq!(lucas(13), 521);
    }

    #[test]
    fn test_mirror_involution_on_anchors() {
        for &b in &BRAHIM_NUMBERS {
            assert_eq!(mirror(mirror(b)), b);
        }
    }

    #[test]
    fn test_npu_bandwidth_saturates() {
        assert!(npu_bandwidth(0).abs() < 1e-12);
        assert!(npu_bandwidth(1) < npu_bandwidth(4));
        assert!(npu_bandwidth(100) < 7.20 + 1e-9);
        assert!(npu_bandwidth(100) > 7.19);
    }
}
