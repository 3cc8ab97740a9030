//! Configuration constants for pagesim.

use crate::common::{Error, Result};

/// Smallest number of physical frames a simulation accepts.
pub const MIN_FRAMES: usize = 1;

/// Largest number of physical frames a simulation accepts.
///
/// The per-step log renders each slot two characters wide, and the legacy
/// reports were produced for at most 100 frames.
pub const MAX_FRAMES: usize = 100;

/// File the `stats` command writes its miss-rate table to.
pub const DEFAULT_REPORT_PATH: &str = "pagerates.txt";

/// Check that `capacity` lies within [`MIN_FRAMES`]..=[`MAX_FRAMES`].
///
/// Every policy constructor calls this before allocating any state.
pub fn validate_capacity(capacity: usize) -> Result<usize> {
    if (MIN_FRAMES..=MAX_FRAMES).contains(&capacity) {
        Ok(capacity)
    } else {
        Err(Error::InvalidCapacity {
            capacity,
            min: MIN_FRAMES,
            max: MAX_FRAMES,
        })
    }
}
