//! Run parameters for a single lottery
//!
//! Everything the engine needs lives in one explicit config object: no
//! module-level state, no process-global RNG. The seed makes a run fully
//! reproducible.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MINIMUM_GAP, DEFAULT_PLACEMENT_PROBABILITY};
use crate::error::ConfigError;

/// Parameters for one ladder lottery run (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderConfig {
    /// Number of vertical lines (participants), at least 2
    pub vertical_count: usize,
    /// Ladder height in discrete units, at least 1
    pub height: u32,
    /// Chance of placing a rung at each eligible slot, within `[0, 1]`
    pub placement_probability: f64,
    /// Minimum height separation between rungs on the same vertical
    pub minimum_gap: u32,
    /// Labels shown at the top of each vertical, one per vertical
    pub start_labels: Vec<String>,
    /// Outcome labels at the bottom, assigned to verticals by index
    pub result_labels: Vec<String>,
    /// RNG seed for reproducibility
    pub seed: u64,
}

impl LadderConfig {
    /// Config with one vertical per result label, lettered start labels,
    /// and default probability/gap.
    pub fn new(result_labels: Vec<String>, height: u32, seed: u64) -> Self {
        let vertical_count = result_labels.len();
        Self {
            vertical_count,
            height,
            placement_probability: DEFAULT_PLACEMENT_PROBABILITY,
            minimum_gap: DEFAULT_MINIMUM_GAP,
            start_labels: (0..vertical_count).map(alpha_label).collect(),
            result_labels,
            seed,
        }
    }

    /// Check every parameter before generation; first failure wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vertical_count < 2 {
            return Err(ConfigError::TooFewVerticals(self.vertical_count));
        }
        if self.height < 1 {
            return Err(ConfigError::ZeroHeight);
        }
        if !(0.0..=1.0).contains(&self.placement_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(
                self.placement_probability,
            ));
        }
        if self.minimum_gap < 1 {
            return Err(ConfigError::ZeroGap);
        }
        if self.start_labels.len() != self.vertical_count {
            return Err(ConfigError::LabelCountMismatch {
                kind: "start",
                expected: self.vertical_count,
                got: self.start_labels.len(),
            });
        }
        if self.result_labels.len() != self.vertical_count {
            return Err(ConfigError::LabelCountMismatch {
                kind: "result",
                expected: self.vertical_count,
                got: self.result_labels.len(),
            });
        }
        Ok(())
    }
}

/// Spreadsheet-style letter label: A..Z, then AA, AB, ...
fn alpha_label(mut index: usize) -> String {
    let mut reversed = String::new();
    loop {
        reversed.push((b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    reversed.chars().rev().collect()
}
