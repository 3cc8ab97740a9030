//! pagesim - A page replacement simulator.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            CLI (main.rs)  run | stats                    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │               ↓                              ↓                  │
//! │  ┌──────────────────────────┐   ┌──────────────────────────┐   │
//! │  │   Trace loading (trace/) │   │  Sweep + report (report/)│   │
//! │  └──────────────────────────┘   └──────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Simulation (sim/)                        │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │   Replacement policies: FIFO | LRU | Random     │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      Simulator + ResidentSet + Statistics                │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageRef, FrameId, Error, config)
//! - [`sim`] - Simulator, resident set and replacement policies
//! - [`trace`] - Reference trace loading
//! - [`report`] - Capacity sweeps and the miss-rate report
//!
//! # Quick Start
//! ```
//! use pagesim::{simulate, PolicyKind, Trace};
//!
//! let trace = Trace::parse("1 2 3 1 4 5").unwrap();
//! let stats = simulate(PolicyKind::Lru, trace.as_slice(), 3).unwrap();
//!
//! // 1 hits, 4 and 5 evict: 2 faults over 3 counted references.
//! assert_eq!((stats.faults, stats.counted), (2, 3));
//! ```

pub mod common;
pub mod report;
pub mod sim;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::config::{MAX_FRAMES, MIN_FRAMES};
pub use common::{Error, FrameId, PageRef, Result};

pub use sim::{
    simulate, Access, FifoReplacer, FrameSnapshot, LruReplacer, MissRate, Phase, PolicyKind,
    RandomReplacer, Replacer, ResidentSet, SimulationStats, Simulator, StatsSnapshot,
};
pub use trace::Trace;
