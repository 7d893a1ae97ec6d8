//! Seeded ladder generation
//!
//! Single greedy top-to-bottom pass. Every placement is checked against the
//! structure invariants before insertion, so generation cannot produce an
//! invalid ladder and never needs to backtrack or retry.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::structure::LadderStructure;
use crate::config::LadderConfig;
use crate::error::ConfigError;

/// Build a ladder from the given config.
///
/// Heights are scanned from `minimum_gap` up to `height - minimum_gap`
/// (a margin band at the top and bottom stays rung-free). Within a row,
/// adjacent pairs are tried left to right; a successful placement skips the
/// next column and pushes the scan height down by `2 * minimum_gap`, which
/// keeps any two rungs on one vertical at least a gap apart. The
/// left-to-right order is deliberate: it biases earlier columns slightly
/// but terminates in one `O(N * H)` pass.
pub fn generate(config: &LadderConfig) -> Result<LadderStructure, ConfigError> {
    config.validate()?;

    let mut rng = Pcg32::seed_from_u64(config.seed);
    let mut structure =
        LadderStructure::new(&config.start_labels, &config.result_labels, config.height);

    let gap = config.minimum_gap;
    let mut y = gap;
    while y + gap < config.height {
        let mut i = 0;
        while i + 1 < config.vertical_count {
            if rng.random::<f64>() < config.placement_probability
                && structure.rung_at(i, y).is_none()
                && structure.rung_at(i + 1, y).is_none()
            {
                structure.add_rung(i, y);
                i += 2;
                y += gap * 2;
                if y + gap >= config.height {
                    // the rest of this row would land inside the bottom margin
                    break;
                }
                continue;
            }
            i += 1;
        }
        y += 1;
    }

    log::debug!(
        "generated ladder: {} verticals, height {}, {} rungs (seed {})",
        structure.vertical_count(),
        structure.height(),
        structure.rungs().len(),
        config.seed
    );

    Ok(structure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config(n: usize, height: u32, p: f64, gap: u32, seed: u64) -> LadderConfig {
        let mut config = LadderConfig::new(
            (0..n).map(|i| format!("prize-{i}")).collect(),
            height,
            seed,
        );
        config.placement_probability = p;
        config.minimum_gap = gap;
        config
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        assert_eq!(
            generate(&config(1, 50, 0.3, 5, 0)).unwrap_err(),
            ConfigError::TooFewVerticals(1)
        );
        assert_eq!(
            generate(&config(3, 0, 0.3, 5, 0)).unwrap_err(),
            ConfigError::ZeroHeight
        );
        assert_eq!(
            generate(&config(3, 50, -0.1, 5, 0)).unwrap_err(),
            ConfigError::ProbabilityOutOfRange(-0.1)
        );
    }

    #[test]
    fn test_zero_probability_places_no_rungs() {
        let structure = generate(&config(5, 100, 0.0, 5, 42)).unwrap();
        assert!(structure.rungs().is_empty());
    }

    #[test]
    fn test_two_verticals_single_pair_column() {
        let structure = generate(&config(2, 200, 1.0, 5, 42)).unwrap();
        assert!(!structure.rungs().is_empty());
        for rung in structure.rungs() {
            assert_eq!((rung.left, rung.right), (0, 1));
        }
    }

    #[test]
    fn test_full_probability_limited_by_gap() {
        let structure = generate(&config(4, 100, 1.0, 5, 7)).unwrap();
        // p = 1 still cannot pack tighter than the gap rule allows
        let mut heights: Vec<u32> = structure.rungs().iter().map(|r| r.height).collect();
        heights.sort_unstable();
        for pair in heights.windows(2) {
            assert!(pair[1] - pair[0] >= 5, "heights {pair:?} closer than the gap");
        }
    }

    #[test]
    fn test_same_seed_same_structure() {
        let a = generate(&config(6, 300, 0.3, 5, 12345)).unwrap();
        let b = generate(&config(6, 300, 0.3, 5, 12345)).unwrap();
        assert_eq!(a.rungs(), b.rungs());

        let c = generate(&config(6, 300, 0.3, 5, 54321)).unwrap();
        assert_ne!(a.rungs(), c.rungs());
    }

    proptest! {
        #[test]
        fn prop_generated_structures_hold_invariants(
            n in 2usize..9,
            height in 1u32..400,
            p in 0.0f64..=1.0,
            gap in 1u32..8,
            seed in any::<u64>(),
        ) {
            let structure = generate(&config(n, height, p, gap, seed)).unwrap();

            for rung in structure.rungs() {
                // endpoints adjacent, inside the margin band
                prop_assert_eq!(rung.right, rung.left + 1);
                prop_assert!(rung.right < n);
                prop_assert!(rung.height >= gap);
                prop_assert!(rung.height + gap < height);
            }

            // per-vertical: at most one rung per height, gap respected
            for vertical in 0..n {
                let mut heights: Vec<u32> = structure
                    .rungs()
                    .iter()
                    .filter(|r| r.left == vertical || r.right == vertical)
                    .map(|r| r.height)
                    .collect();
                heights.sort_unstable();
                for pair in heights.windows(2) {
                    prop_assert!(pair[1] - pair[0] >= gap);
                }
            }
        }
    }
}
