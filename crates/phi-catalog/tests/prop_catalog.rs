// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Catalog Property Tests
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Invariants of the constants database and material helpers.

use phi_catalog::constants_db::ConstantsDb;
use phi_catalog::materials::{co2_factor, pore_selectivity, quantum_coherence_factor, temp_correction};
use proptest::prelude::*;

proptest! {
    /// The geometric selectivity estimate never exceeds its peak.
    #[test]
    fn prop_pore_selectivity_bounded(pore_nm in 0.0..10.0f64) {
        let s = pore_selectivity(pore_nm);
        prop_assert!(s >= 0.0);
        prop_assert!(s <= 200.0 + 1e-9);
    }

    /// Temperature correction peaks at 25 °C and never exceeds 1.
    #[test]
    fn prop_temp_correction_bounded(temp_c in -50.0..150.0f64) {
        let f = temp_correction(temp_c);
        prop_assert!(f > 0.0 && f <= 1.0);
        prop_assert!(f <= temp_correction(25.0));
    }

    /// CO2 saturation is a proper fraction for any concentration.
    #[test]
    fn prop_co2_factor_fraction(ppm in -1e3..1e6f64) {
        let f = co2_factor(ppm);
        prop_assert!((0.0..1.0).contains(&f));
    }

    /// Coherence decays with temperature at fixed coupling.
    #[test]
    fn prop_coherence_decays_with_temperature(
        t in 0.0..100.0f64,
        coupling in 0.1..5.0f64,
    ) {
        let cold = quantum_coherence_factor(t, coupling);
        let hot = quantum_coherence_factor(t + 10.0, coupling);
        prop_assert!(hot < cold);
        prop_assert!((0.0..=1.0).contains(&cold));
    }

    /// best_predictions(n) is ascending in ppm and never includes exact rows.
    #[test]
    fn prop_best_predictions_sorted(n in 1usize..60) {
        let db = ConstantsDb::new();
        let best = db.best_predictions(n);
        for pair in best.windows(2) {
            prop_assert!(pair[0].deviation_ppm <= pair[1].deviation_ppm);
        }
        for entry in best {
            prop_assert!(entry.deviation_ppm > 0.0);
        }
    }
}

#[test]
fn constants_db_serializes() {
    let db = ConstantsDb::new();
    let json = serde_json::to_string(db.entries()).unwrap();
    assert!(json.contains("1/alpha_em"));
    let scorecard = serde_json::to_value(db.scorecard()).unwrap();
    assert_eq!(scorecard["total_constants"], serde_json::json!(53));
}
