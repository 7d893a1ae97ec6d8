//! Ladder data model
//!
//! Arena-style storage: verticals and rungs live in flat vectors and refer
//! to each other by integer index, so the graph carries no cyclic ownership
//! and a rung lookup at a given height is a single hash probe.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::InvariantViolation;

/// Index of a vertical line, `0..N-1` left to right
pub type VerticalId = usize;
/// Index of a rung in the structure's arena
pub type RungId = usize;

/// A horizontal connector joining two adjacent verticals at one height.
///
/// Undirected: traversing it from either endpoint yields the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rung {
    /// Left endpoint; always `right - 1`
    pub left: VerticalId,
    /// Right endpoint
    pub right: VerticalId,
    /// Height at which the rung sits
    pub height: u32,
}

impl Rung {
    /// The endpoint opposite `from`.
    ///
    /// Errors if `from` is neither endpoint, which indicates a corrupted
    /// structure rather than a caller mistake.
    pub fn neighbor_across(&self, from: VerticalId) -> Result<VerticalId, InvariantViolation> {
        if from == self.left {
            Ok(self.right)
        } else if from == self.right {
            Ok(self.left)
        } else {
            Err(InvariantViolation {
                vertical: from,
                left: self.left,
                right: self.right,
            })
        }
    }
}

/// One of the N parallel lines, with its labels and display flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertical {
    /// Position in the ordering, `0..N-1`
    pub index: VerticalId,
    /// Participant label shown at the top
    pub start_label: String,
    /// Outcome label shown at the bottom
    pub result_label: String,
    /// Chosen as the active start (display hint, not used for tracing)
    pub is_start: bool,
    /// A trace has revealed this vertical as its outcome (display hint)
    pub is_end: bool,
    /// Rungs touching this vertical, keyed by exact height
    rungs: HashMap<u32, RungId>,
}

impl Vertical {
    fn new(index: VerticalId, start_label: String, result_label: String) -> Self {
        Self {
            index,
            start_label,
            result_label,
            is_start: false,
            is_end: false,
            rungs: HashMap::new(),
        }
    }

    /// Rung registered at exactly this height, if any
    pub fn rung_at(&self, height: u32) -> Option<RungId> {
        self.rungs.get(&height).copied()
    }

    /// Number of rungs touching this vertical
    pub fn rung_count(&self) -> usize {
        self.rungs.len()
    }
}

/// The full ladder: N ordered verticals plus the rungs connecting them.
///
/// Built once by the generator and immutable afterward; only the two
/// display flags on each vertical may change, once each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderStructure {
    verticals: Vec<Vertical>,
    rungs: Vec<Rung>,
    height: u32,
}

impl LadderStructure {
    /// Empty ladder over the given labels. Label vectors must be the same
    /// length; the generator validates this before calling.
    pub(crate) fn new(start_labels: &[String], result_labels: &[String], height: u32) -> Self {
        let verticals = start_labels
            .iter()
            .zip(result_labels)
            .enumerate()
            .map(|(i, (start, result))| Vertical::new(i, start.clone(), result.clone()))
            .collect();
        Self {
            verticals,
            rungs: Vec::new(),
            height,
        }
    }

    /// Insert a rung joining `left` and `left + 1` at `height`, registering
    /// it on both endpoints. The generator checks both slots are free first.
    pub(crate) fn add_rung(&mut self, left: VerticalId, height: u32) -> RungId {
        let id = self.rungs.len();
        let right = left + 1;
        self.rungs.push(Rung {
            left,
            right,
            height,
        });
        self.verticals[left].rungs.insert(height, id);
        self.verticals[right].rungs.insert(height, id);
        id
    }

    /// Number of verticals
    pub fn vertical_count(&self) -> usize {
        self.verticals.len()
    }

    /// Ladder height in discrete units
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The vertical at `index`. Panics on out-of-range indices, which the
    /// tracer never produces.
    pub fn vertical(&self, index: VerticalId) -> &Vertical {
        &self.verticals[index]
    }

    /// All verticals, in order
    pub fn verticals(&self) -> &[Vertical] {
        &self.verticals
    }

    /// All rungs, in insertion order
    pub fn rungs(&self) -> &[Rung] {
        &self.rungs
    }

    /// O(1) lookup of the rung touching `vertical` at exactly `height`
    pub fn rung_at(&self, vertical: VerticalId, height: u32) -> Option<Rung> {
        self.verticals[vertical]
            .rung_at(height)
            .map(|id| self.rungs[id])
    }

    /// The other endpoint of `rung` when standing on `from`
    pub fn neighbor_across(
        &self,
        rung: Rung,
        from: VerticalId,
    ) -> Result<VerticalId, InvariantViolation> {
        rung.neighbor_across(from)
    }

    /// Rung ids sorted by increasing height.
    ///
    /// Rungs at equal heights never share a vertical, so their order among
    /// themselves does not affect the permutation.
    pub fn rungs_by_height(&self) -> Vec<RungId> {
        let mut ids: Vec<RungId> = (0..self.rungs.len()).collect();
        ids.sort_by_key(|&id| self.rungs[id].height);
        ids
    }

    /// Flag `index` as the chosen start (display hint)
    pub fn mark_start(&mut self, index: VerticalId) {
        self.verticals[index].is_start = true;
    }

    /// Flag `index` as a revealed outcome (display hint)
    pub fn mark_end(&mut self, index: VerticalId) {
        self.verticals[index].is_end = true;
    }
}
