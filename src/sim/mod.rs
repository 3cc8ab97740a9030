//! Page replacement simulation.
//!
//! A simulation pushes a reference trace through a fixed number of frames
//! and counts how often a full resident set has to evict.
//!
//! # Components
//! - [`Simulator`] - The driving loop and its statistics
//! - [`ResidentSet`] - Fixed row of frames shared by FIFO and Random
//! - [`FrameSnapshot`] - Per-step view of the frames
//! - [`SimulationStats`] - Hit/miss counters
//! - [`replacer`] - Eviction policy implementations

pub mod replacer;
mod resident_set;
mod simulator;
mod snapshot;
mod stats;

pub use replacer::{Access, FifoReplacer, LruReplacer, PolicyKind, RandomReplacer, Replacer};
pub use resident_set::ResidentSet;
pub use simulator::{simulate, Phase, Simulator};
pub use snapshot::FrameSnapshot;
pub use stats::{MissRate, SimulationStats, StatsSnapshot};
