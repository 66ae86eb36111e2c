// ─────────────────────────────────────────────────────────────────────
// SCPN Phi Engine — Facade Crate
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Golden-ratio prediction engine.
//!
//! `PhiEngine` is the single entry point: D-space transforms, sum-rule
//! validation, Fibonacci/GUT decomposition, consistency checks, the
//! constants database, the φ-power ladder, and the vertical adapters.

pub mod engine;
pub mod ladder;

pub use engine::PhiEngine;
pub use ladder::{KnownScale, LadderEntry, PhiLadder, KNOWN_SCALES, M_PROTON_GEV};

pub use phi_adapters::base::Adapter;
pub use phi_types::config::EngineConfig;
pub use phi_types::error::{PhiError, PhiResult};
