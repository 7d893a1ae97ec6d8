//! Deterministic ladder lottery module
//!
//! All lottery logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, injected through the config
//! - Structures are immutable once generated (only display flags mutate)
//! - No rendering, timing, or platform dependencies

pub mod generate;
pub mod structure;
pub mod trace;

pub use generate::generate;
pub use structure::{LadderStructure, Rung, RungId, Vertical, VerticalId};
pub use trace::{
    FinalMapping, Trace, TraceCursor, TrailSegment, permutation_by_transpositions, trace,
    trace_all,
};
