//! Eviction policy implementations (replacers).
//!
//! Currently implements:
//! - [`FifoReplacer`] - evicts the page admitted longest ago
//! - [`LruReplacer`] - evicts the page with the largest time since last use
//! - [`RandomReplacer`] - evicts a uniformly chosen slot
//!
//! Every replacer owns its resident frames and answers one question per
//! reference: was it a hit, and if not, where did the page go.

mod fifo;
mod lru;
mod random;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, FrameId, PageRef, Result};

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use random::RandomReplacer;

/// Outcome of presenting one reference to a replacer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was already resident.
    Hit,
    /// Miss while frames were still free; the page filled `slot`.
    Admitted { slot: FrameId },
    /// Miss with every frame occupied; `victim` was evicted from `slot`.
    Replaced { slot: FrameId, victim: PageRef },
}

impl Access {
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit)
    }

    pub fn is_miss(&self) -> bool {
        !self.is_hit()
    }

    /// Page evicted by this access, if any.
    pub fn victim(&self) -> Option<PageRef> {
        match self {
            Access::Replaced { victim, .. } => Some(*victim),
            _ => None,
        }
    }
}

/// A page replacement policy driving a bounded set of frames.
pub trait Replacer {
    fn kind(&self) -> PolicyKind;

    /// Number of frames.
    fn capacity(&self) -> usize;

    /// Number of occupied frames.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Process one reference: look it up, and on a miss admit it,
    /// evicting a resident page if every frame is occupied.
    fn access(&mut self, page: PageRef) -> Access;

    /// Occupant-or-empty per frame, in display order.
    fn frames(&self) -> Vec<Option<PageRef>>;
}

/// The replacement policies pagesim can simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Random,
}

impl PolicyKind {
    /// Every policy, in the row order of the miss-rate report.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Lru, PolicyKind::Fifo, PolicyKind::Random];

    /// Construct a fresh replacer of this kind with `capacity` frames.
    ///
    /// The random policy is seeded from system entropy.
    pub fn build(self, capacity: usize) -> Result<Box<dyn Replacer>> {
        Ok(match self {
            PolicyKind::Fifo => Box::new(FifoReplacer::new(capacity)?),
            PolicyKind::Lru => Box::new(LruReplacer::new(capacity)?),
            PolicyKind::Random => Box::new(RandomReplacer::new(capacity)?),
        })
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Random => "Random",
        };
        f.pad(name)
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    /// Accepts `fifo`, `lru`, `random` and the legacy alias `extra`.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "random" | "extra" => Ok(PolicyKind::Random),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
