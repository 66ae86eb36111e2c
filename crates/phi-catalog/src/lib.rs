// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Phi Catalog
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Static reference data: the predicted-constants table and the
//! photosynthesis / MOF material database. Built once, read-only.

pub mod constants_db;
pub mod materials;
