// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Phi Math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Mathematical primitives: D-space transforms, integer sequences,
//! scalar statistics.

pub mod sequences;
pub mod stats;
pub mod transform;
