//! Path tracing
//!
//! Two decoupled views of the same walk:
//! - eager: [`trace`] / [`trace_all`] compute final verticals up front; the
//!   resulting [`FinalMapping`] is authoritative.
//! - lazy: [`TraceCursor`] replays one trail segment per call for animated
//!   reveal. Replay can never change the outcome; it only re-walks the
//!   immutable structure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::structure::{LadderStructure, VerticalId};
use crate::error::InvariantViolation;

/// One atomic movement of a trace, recorded for replay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrailSegment {
    /// Sideways move across a rung at `height`
    Jump {
        from: VerticalId,
        to: VerticalId,
        height: u32,
    },
    /// One step straight down `column`, from `height` to `height + 1`
    Descend { column: VerticalId, height: u32 },
}

/// Result of eagerly tracing a single start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Vertical the walk started from
    pub start: VerticalId,
    /// Vertical reached at the bottom; its result label is the outcome
    pub end: VerticalId,
    /// Every movement of the walk, in order
    pub segments: Vec<TrailSegment>,
}

/// Walk down from `start`, switching verticals at every rung encountered.
///
/// At each height the rung (if any) is crossed first, then the walk steps
/// down one unit. `InvariantViolation` is unreachable for generated
/// structures; it would mean a rung was registered on a vertical it does
/// not touch.
pub fn trace(
    structure: &LadderStructure,
    start: VerticalId,
) -> Result<Trace, InvariantViolation> {
    let mut segments = Vec::with_capacity(structure.height() as usize);
    let mut current = start;
    for y in 0..structure.height() {
        if let Some(rung) = structure.rung_at(current, y) {
            let to = structure.neighbor_across(rung, current)?;
            segments.push(TrailSegment::Jump {
                from: current,
                to,
                height: y,
            });
            current = to;
        }
        segments.push(TrailSegment::Descend {
            column: current,
            height: y,
        });
    }
    Ok(Trace {
        start,
        end: current,
        segments,
    })
}

/// The start-to-outcome permutation, computed once by tracing every start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalMapping {
    outcomes: Vec<VerticalId>,
}

impl FinalMapping {
    /// Outcome vertical for `start`
    pub fn outcome_of(&self, start: VerticalId) -> VerticalId {
        self.outcomes[start]
    }

    /// The permutation as a slice: index = start, value = outcome
    pub fn as_slice(&self) -> &[VerticalId] {
        &self.outcomes
    }

    /// Start label -> result label, size N and bijective
    pub fn label_map(&self, structure: &LadderStructure) -> HashMap<String, String> {
        self.outcomes
            .iter()
            .enumerate()
            .map(|(start, &end)| {
                (
                    structure.vertical(start).start_label.clone(),
                    structure.vertical(end).result_label.clone(),
                )
            })
            .collect()
    }
}

/// Trace every start and collect the full permutation
pub fn trace_all(structure: &LadderStructure) -> Result<FinalMapping, InvariantViolation> {
    let outcomes = (0..structure.vertical_count())
        .map(|start| trace(structure, start).map(|t| t.end))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FinalMapping { outcomes })
}

/// The permutation obtained by composing all rungs, in increasing-height
/// order, as adjacent swaps of an identity array. Equal to [`trace_all`]
/// for every valid structure; kept as an independent computation so the
/// two can be checked against each other.
pub fn permutation_by_transpositions(structure: &LadderStructure) -> Vec<VerticalId> {
    // positions[column] = the start currently occupying that column
    let mut positions: Vec<VerticalId> = (0..structure.vertical_count()).collect();
    for id in structure.rungs_by_height() {
        let rung = structure.rungs()[id];
        positions.swap(rung.left, rung.right);
    }
    // invert: outcome column for each start
    let mut outcomes = vec![0; positions.len()];
    for (column, &start) in positions.iter().enumerate() {
        outcomes[start] = column;
    }
    outcomes
}

/// Lazy, restartable walk over an immutable structure.
///
/// Each `next()` yields exactly one [`TrailSegment`]; a height unit
/// produces a `Jump` first when a rung is present, then a `Descend`. An
/// animation pulls one segment per tick and may stop at any point without
/// affecting the structure or any precomputed mapping. Independent cursors
/// over the same structure are safe to advance in lockstep for
/// multi-runner reveals.
#[derive(Debug, Clone)]
pub struct TraceCursor<'a> {
    structure: &'a LadderStructure,
    start: VerticalId,
    current: VerticalId,
    y: u32,
    jump_taken: bool,
}

impl<'a> TraceCursor<'a> {
    /// Cursor positioned at the top of `start`
    pub fn new(structure: &'a LadderStructure, start: VerticalId) -> Self {
        Self {
            structure,
            start,
            current: start,
            y: 0,
            jump_taken: false,
        }
    }

    /// Rewind to the top of the original start
    pub fn reset(&mut self) {
        self.current = self.start;
        self.y = 0;
        self.jump_taken = false;
    }

    /// Vertical the cursor is currently on
    pub fn current(&self) -> VerticalId {
        self.current
    }

    /// Height reached so far
    pub fn height_reached(&self) -> u32 {
        self.y
    }

    /// True once the walk has reached the bottom
    pub fn is_done(&self) -> bool {
        self.y >= self.structure.height()
    }
}

impl Iterator for TraceCursor<'_> {
    type Item = TrailSegment;

    fn next(&mut self) -> Option<TrailSegment> {
        if self.y >= self.structure.height() {
            return None;
        }
        if !self.jump_taken {
            self.jump_taken = true;
            if let Some(rung) = self.structure.rung_at(self.current, self.y) {
                let from = self.current;
                // the rung came out of this vertical's own table, so the
                // current vertical is one of its two endpoints
                self.current = if rung.left == from { rung.right } else { rung.left };
                return Some(TrailSegment::Jump {
                    from,
                    to: self.current,
                    height: self.y,
                });
            }
        }
        let segment = TrailSegment::Descend {
            column: self.current,
            height: self.y,
        };
        self.y += 1;
        self.jump_taken = false;
        Some(segment)
    }
}
