// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Types Property Tests
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Serialization and error-surface properties of the shared types.

use phi_types::config::{AdapterConfig, EngineConfig};
use phi_types::error::PhiError;
use phi_types::state::Factorization;
use proptest::prelude::*;

proptest! {
    /// EngineConfig survives a JSON roundtrip bit-for-bit.
    #[test]
    fn prop_engine_config_roundtrip(
        tolerance_ppm in 1e-3..1e9f64,
        consistency_tol in 1e-15..1e-3f64,
        ladder_max_n in 1i32..500,
    ) {
        let cfg = EngineConfig { tolerance_ppm, consistency_tol, ladder_max_n };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.tolerance_ppm, cfg.tolerance_ppm);
        prop_assert_eq!(back.consistency_tol, cfg.consistency_tol);
        prop_assert_eq!(back.ladder_max_n, cfg.ladder_max_n);
    }

    /// Adapter names and descriptions pass through config untouched.
    #[test]
    fn prop_adapter_config_roundtrip(name in "[a-z_]{1,24}", desc in ".{0,64}") {
        let cfg = AdapterConfig::new(&name, &desc);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: AdapterConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.name, name);
        prop_assert_eq!(back.description, desc);
        prop_assert_eq!(back.version, "0.1.0");
    }

    /// Domain errors always carry the offending value in their message.
    #[test]
    fn prop_domain_error_names_value(value in -1e6..0.0f64) {
        let err = PhiError::nonpositive(value, "test context");
        let rendered = err.to_string();
        prop_assert!(rendered.contains("test context"));
    }

    /// Factorization records roundtrip through JSON.
    #[test]
    fn prop_factorization_roundtrip(
        factors in proptest::collection::vec(2u64..10_000, 0..8),
        residual in -1000i64..1000,
    ) {
        let product: u64 = factors.iter().product();
        let f = Factorization { factors: factors.clone(), product, residual, exact: residual == 0 };
        let json = serde_json::to_string(&f).unwrap();
        let back: Factorization = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.factors, factors);
        prop_assert_eq!(back.product, product);
        prop_assert_eq!(back.exact, residual == 0);
    }
}
