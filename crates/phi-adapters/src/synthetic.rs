// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Synthetic Instruments
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Synthetic instrument readings for exercising the adapters.
//!
//! Generates Gaussian-noised measurement streams with optional
//! multiplicative drift, shaped as the JSON payloads the calibration
//! and sensor-fusion adapters ingest.

use phi_types::error::{PhiError, PhiResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde_json::{json, Value};

/// A simulated instrument measuring a fixed true value.
pub struct SyntheticInstrument {
    pub name: String,
    /// Ground-truth value being measured.
    pub true_value: f64,
    /// Gaussian noise σ applied to each reading.
    pub noise_sigma: f64,
    /// Multiplicative drift: reading i is scaled by drift^i.
    pub drift_per_reading: f64,
    noise: Normal<f64>,
    rng: StdRng,
}

impl SyntheticInstrument {
    /// `seed = None` draws entropy from the OS.
    pub fn new(
        name: &str,
        true_value: f64,
        noise_sigma: f64,
        drift_per_reading: f64,
        seed: Option<u64>,
    ) -> PhiResult<Self> {
        if true_value <= 0.0 {
            return Err(PhiError::nonpositive(true_value, "synthetic true value"));
        }
        let noise = Normal::new(0.0, noise_sigma).map_err(|_| PhiError::DomainError {
            value: noise_sigma,
            message: "noise sigma must be non-negative and finite".to_string(),
        })?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(SyntheticInstrument {
            name: name.to_string(),
            true_value,
            noise_sigma,
            drift_per_reading,
            noise,
            rng,
        })
    }

    /// Draw `n` readings: true value, drifted, plus Gaussian noise.
    /// Readings that would fall non-positive are clamped to a small
    /// positive floor so the D transform stays defined downstream.
    pub fn readings(&mut self, n: usize) -> Vec<f64> {
        let mut out = Vec::with_capacity(n);
        let mut scale = 1.0;
        for _ in 0..n {
            let reading = self.true_value * scale + self.noise.sample(&mut self.rng);
            out.push(reading.max(1e-12));
            scale *= self.drift_per_reading;
        }
        out
    }

    /// Payload for the calibration adapter.
    pub fn calibration_payload(&mut self, n: usize) -> Value {
        json!({
            "readings": self.readings(n),
            "reference": self.true_value,
            "instrument": self.name,
        })
    }
}

/// Payload for the sensor-fusion adapter from several instruments.
pub fn fusion_payload(
    instruments: &mut [SyntheticInstrument],
    n: usize,
    reference: f64,
) -> Value {
    let sensors: Vec<Value> = instruments
        .iter_mut()
        .map(|inst| {
            json!({
                "name": inst.name,
                "readings": inst.readings(n),
                "weight": 1.0,
            })
        })
        .collect();
    json!({ "sensors": sensors, "reference": reference })
}
