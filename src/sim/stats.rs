//! Simulation statistics tracking.

use std::fmt;

/// Counters accumulated while a trace runs through one replacer.
///
/// Only references that arrive while every frame is already occupied are
/// *counted*; a counted reference that misses is a *fault*. Fill-phase
/// misses are tallied separately as admissions and never affect the miss
/// rate.
///
/// # Example
/// ```
/// use pagesim::SimulationStats;
///
/// let mut stats = SimulationStats::new();
/// stats.record_reference(true);
/// stats.record_fault();
/// assert_eq!(stats.snapshot().faults, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationStats {
    /// Every reference processed.
    references: u64,

    /// References processed with the resident set already full.
    counted: u64,

    /// Counted references that missed.
    faults: u64,

    /// References found resident.
    hits: u64,

    /// Misses that filled a free frame.
    admissions: u64,

    /// Misses that displaced a resident page.
    evictions: u64,
}

impl SimulationStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one reference; `full` says whether every frame was occupied
    /// before it was processed.
    pub fn record_reference(&mut self, full: bool) {
        self.references += 1;
        if full {
            self.counted += 1;
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_admission(&mut self) {
        self.admissions += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Record a miss on a counted reference.
    pub fn record_fault(&mut self) {
        self.faults += 1;
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            references: self.references,
            counted: self.counted,
            faults: self.faults,
            hits: self.hits,
            admissions: self.admissions,
            evictions: self.evictions,
        }
    }

}

/// Miss rate of a run, in percent.
///
/// `Undefined` means the trace never arrived at a full resident set, so there
/// is no counted reference to divide by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MissRate {
    Undefined,
    Percent(f64),
}

impl MissRate {
    pub fn as_percent(&self) -> Option<f64> {
        match self {
            MissRate::Percent(rate) => Some(*rate),
            MissRate::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, MissRate::Percent(_))
    }
}

/// Renders `12.50%` or `n/a`; a precision flag overrides the default of 2.
impl fmt::Display for MissRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissRate::Percent(rate) => {
                let precision = f.precision().unwrap_or(2);
                write!(f, "{:.*}%", precision, rate)
            }
            MissRate::Undefined => f.write_str("n/a"),
        }
    }
}

/// A point-in-time copy of [`SimulationStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub references: u64,
    pub counted: u64,
    pub faults: u64,
    pub hits: u64,
    pub admissions: u64,
    pub evictions: u64,
}

impl StatsSnapshot {
    /// Faults as a percentage of counted references.
    pub fn miss_rate(&self) -> MissRate {
        if self.counted == 0 {
            MissRate::Undefined
        } else {
            MissRate::Percent(self.faults as f64 / self.counted as f64 * 100.0)
        }
    }

    /// Hits over every processed reference (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Miss rate = {} / {} = {}",
            self.faults,
            self.counted,
            self.miss_rate()
        )
    }
}
