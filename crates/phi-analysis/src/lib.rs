// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Phi Analysis
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Sum-rule validation, representation decomposition, consistency
//! checking.

pub mod consistency;
pub mod decompose;
pub mod sum_rule;
