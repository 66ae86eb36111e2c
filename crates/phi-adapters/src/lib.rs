// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Phi Adapters
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Vertical adapters: domain payload in, D-space analysis out.

pub mod base;
pub mod calibration;
pub mod photosynthesis;
pub mod sensor_fusion;
pub mod synthetic;

pub use base::Adapter;
