//! Random replacement policy.
//!
//! When every frame is occupied a slot is drawn uniformly from
//! `[0, capacity)` and overwritten. No recency or order is tracked.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::config::validate_capacity;
use crate::common::{FrameId, PageRef, Result};
use crate::sim::replacer::{Access, PolicyKind, Replacer};
use crate::sim::ResidentSet;

/// Evicts a uniformly chosen frame on every miss with a full set.
///
/// The generator is injected so callers can make runs reproducible;
/// [`RandomReplacer::new`] seeds a [`StdRng`] from system entropy.
///
/// # Example
/// ```
/// use pagesim::{PageRef, RandomReplacer, Replacer};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut random = RandomReplacer::with_rng(2, StdRng::seed_from_u64(7)).unwrap();
/// random.access(PageRef::new(1));
/// random.access(PageRef::new(2));
/// assert!(random.access(PageRef::new(3)).victim().is_some());
/// assert_eq!(random.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RandomReplacer<R = StdRng> {
    frames: ResidentSet,
    rng: R,
}

impl RandomReplacer<StdRng> {
    /// Create a random replacer seeded from system entropy.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_rng(capacity, StdRng::from_entropy())
    }
}

impl<R: Rng> RandomReplacer<R> {
    /// Create a random replacer drawing victims from `rng`.
    pub fn with_rng(capacity: usize, rng: R) -> Result<Self> {
        let capacity = validate_capacity(capacity)?;
        Ok(Self {
            frames: ResidentSet::new(capacity),
            rng,
        })
    }
}

impl<R: Rng> Replacer for RandomReplacer<R> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Random
    }

    fn capacity(&self) -> usize {
        self.frames.capacity()
    }

    fn len(&self) -> usize {
        self.frames.len()
    }

    fn access(&mut self, page: PageRef) -> Access {
        if self.frames.contains(page) {
            return Access::Hit;
        }

        if let Some(slot) = self.frames.push(page) {
            return Access::Admitted { slot };
        }

        let slot = FrameId::new(self.rng.gen_range(0..self.frames.capacity()));
        match self.frames.replace(slot, page) {
            Some(victim) => Access::Replaced { slot, victim },
            None => Access::Admitted { slot },
        }
    }

    fn frames(&self) -> Vec<Option<PageRef>> {
        self.frames.slots().to_vec()
    }
}
