//! Amida - a headless ghost-leg (Amidakuji) lottery engine
//!
//! Core modules:
//! - `ladder`: deterministic ladder generation and path tracing
//! - `config`: run parameters and validation
//! - `error`: configuration and internal-invariant error types
//!
//! The engine never touches a display surface. Given N participants, a
//! height, a placement probability, and a seed, it produces a valid ladder
//! and the resulting permutation; a visualization layer consumes the
//! structure (for static drawing) and the trail segments (for animated
//! reveal) without being able to change the outcome.

pub mod config;
pub mod error;
pub mod ladder;

pub use config::LadderConfig;
pub use error::{ConfigError, InvariantViolation};
pub use ladder::{
    FinalMapping, LadderStructure, Rung, Trace, TraceCursor, TrailSegment, Vertical, generate,
    permutation_by_transpositions, trace, trace_all,
};

/// Engine defaults
pub mod consts {
    /// Chance of placing a rung at each eligible (column, height) slot
    pub const DEFAULT_PLACEMENT_PROBABILITY: f64 = 0.3;
    /// Minimum height separation between rungs touching the same vertical
    pub const DEFAULT_MINIMUM_GAP: u32 = 5;
}
