//! Simulator - drives a reference trace through one replacer.
//!
//! The [`Simulator`] provides:
//! - Hit/miss bookkeeping with fill-phase references excluded
//! - Per-step [`FrameSnapshot`]s for trace output
//! - Policy selection by [`PolicyKind`] or an injected [`Replacer`]

use log::{debug, trace};

use crate::common::{PageRef, Result};
use crate::sim::replacer::{Access, PolicyKind, Replacer};
use crate::sim::{FrameSnapshot, SimulationStats, StatsSnapshot};

/// Whether the resident set has been filled yet.
///
/// A run starts in `Filling` and moves to `Steady` exactly once, on the
/// admission that occupies the last free frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Free frames remain; every miss is a plain admission.
    Filling,
    /// Every frame is occupied; every miss evicts.
    Steady,
}

/// Runs page references through a replacement policy.
///
/// # Architecture
/// ```text
/// ┌────────────────────────────────────────────────┐
/// │                   Simulator                    │
/// │  ┌──────────────────┐   ┌───────────────────┐  │
/// │  │    replacer      │   │      stats        │  │
/// │  │ Box<dyn Replacer>│   │ SimulationStats   │  │
/// │  │ FIFO | LRU | Rnd │   │ counted / faults  │  │
/// │  └──────────────────┘   └───────────────────┘  │
/// └────────────────────────────────────────────────┘
/// ```
///
/// Per reference:
/// 1. If every frame was occupied beforehand, count the reference.
/// 2. Ask the replacer for a hit or a placement.
/// 3. A miss on a counted reference is a fault, including the first
///    eviction after the set fills.
/// 4. Emit a [`FrameSnapshot`].
///
/// # Usage
/// ```
/// use pagesim::{PageRef, PolicyKind, Simulator};
///
/// let trace: Vec<PageRef> = [1, 2, 3, 4, 1].into_iter().map(PageRef::new).collect();
/// let mut sim = Simulator::new(PolicyKind::Fifo, 3).unwrap();
/// let stats = sim.run(&trace);
///
/// assert_eq!(stats.counted, 2);
/// assert_eq!(stats.faults, 2);
/// println!("{}", stats); // Miss rate = 2 / 2 = 100.00%
/// ```
pub struct Simulator {
    replacer: Box<dyn Replacer>,
    stats: SimulationStats,
}

impl Simulator {
    /// Create a simulator for `kind` with `capacity` frames.
    ///
    /// Fails with [`crate::Error::InvalidCapacity`] before any state is built.
    pub fn new(kind: PolicyKind, capacity: usize) -> Result<Self> {
        Ok(Self::with_replacer(kind.build(capacity)?))
    }

    /// Drive an already constructed replacer, e.g. a seeded
    /// [`crate::RandomReplacer`].
    pub fn with_replacer(replacer: Box<dyn Replacer>) -> Self {
        Self {
            replacer,
            stats: SimulationStats::new(),
        }
    }

    pub fn kind(&self) -> PolicyKind {
        self.replacer.kind()
    }

    pub fn capacity(&self) -> usize {
        self.replacer.capacity()
    }

    /// Number of occupied frames.
    pub fn resident(&self) -> usize {
        self.replacer.len()
    }

    pub fn phase(&self) -> Phase {
        if self.replacer.is_full() {
            Phase::Steady
        } else {
            Phase::Filling
        }
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Process a single reference.
    pub fn step(&mut self, page: PageRef) -> FrameSnapshot {
        let full = self.replacer.is_full();
        self.stats.record_reference(full);

        let access = self.replacer.access(page);
        match access {
            Access::Hit => self.stats.record_hit(),
            Access::Admitted { .. } => {
                self.stats.record_admission();
                if self.replacer.is_full() {
                    debug!(
                        "{}: frames filled after {} references",
                        self.kind(),
                        self.stats.snapshot().references
                    );
                }
            }
            Access::Replaced { slot, victim } => {
                self.stats.record_eviction();
                trace!("{}: {} replaced {} in {}", self.kind(), page, victim, slot);
            }
        }

        let fault = full && access.is_miss();
        if fault {
            self.stats.record_fault();
        }

        FrameSnapshot {
            page,
            frames: self.replacer.frames(),
            access,
            resident: self.replacer.len(),
            fault,
        }
    }

    /// Run a whole trace and return the final statistics.
    pub fn run(&mut self, trace: &[PageRef]) -> StatsSnapshot {
        self.run_with_observer(trace, |_| {})
    }

    /// Run a whole trace, handing every step's snapshot to `observer`.
    pub fn run_with_observer<F>(&mut self, trace: &[PageRef], mut observer: F) -> StatsSnapshot
    where
        F: FnMut(&FrameSnapshot),
    {
        for &page in trace {
            let snapshot = self.step(page);
            observer(&snapshot);
        }

        let stats = self.stats();
        debug!(
            "{}, {} frames: {} ({} references, {} hits)",
            self.kind(),
            self.capacity(),
            stats,
            stats.references,
            stats.hits
        );
        stats
    }
}

/// Run `trace` through a fresh `kind` replacer with `capacity` frames.
pub fn simulate(kind: PolicyKind, trace: &[PageRef], capacity: usize) -> Result<StatsSnapshot> {
    let mut simulator = Simulator::new(kind, capacity)?;
    Ok(simulator.run(trace))
}
