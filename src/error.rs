//! Error types
//!
//! Two kinds, deliberately separate: configuration errors are user-facing
//! and raised before any generation work starts; invariant violations
//! indicate a bug in the generator and are fatal.

use thiserror::Error;

/// Rejected run parameters. Surfaced to the caller immediately; never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A ladder needs at least two verticals to have anywhere to jump.
    #[error("need at least 2 verticals, got {0}")]
    TooFewVerticals(usize),

    /// Zero-height ladders have no rows to scan or trace.
    #[error("ladder height must be at least 1")]
    ZeroHeight,

    /// Placement probability outside `[0, 1]` (NaN included).
    #[error("placement probability must be within [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),

    /// The minimum gap keeps rungs on one vertical apart; zero would allow
    /// ambiguous double-jumps.
    #[error("minimum gap must be at least 1")]
    ZeroGap,

    /// Label vectors must match the vertical count exactly.
    #[error("expected {expected} {kind} labels, got {got}")]
    LabelCountMismatch {
        /// Which label vector was wrong ("start" or "result").
        kind: &'static str,
        /// The configured vertical count.
        expected: usize,
        /// The length actually supplied.
        got: usize,
    },
}

/// A query handed a vertical that is not an endpoint of the referenced rung.
///
/// Generated structures register every rung on both of its endpoints, so
/// this is unreachable through normal use; hitting it means the structure
/// was corrupted or hand-built wrong.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("vertical {vertical} is not an endpoint of the rung joining {left} and {right}")]
pub struct InvariantViolation {
    /// The vertical the caller claimed to be traversing from.
    pub vertical: usize,
    /// Left endpoint of the rung.
    pub left: usize,
    /// Right endpoint of the rung.
    pub right: usize,
}
