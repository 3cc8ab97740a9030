//! FIFO (First-In-First-Out) replacement policy.

use crate::common::config::validate_capacity;
use crate::common::{FrameId, PageRef, Result};
use crate::sim::replacer::{Access, PolicyKind, Replacer};
use crate::sim::ResidentSet;

/// Evicts pages in the order they were admitted.
///
/// The frames form a circular buffer: `cursor` names the slot the next
/// admission writes to. It sweeps the slots in admission order, so while the
/// set is full it always points at the page admitted longest ago.
/// Hits do not move the cursor.
///
/// # Example
/// ```
/// use pagesim::{FifoReplacer, PageRef, Replacer};
///
/// let mut fifo = FifoReplacer::new(2).unwrap();
/// fifo.access(PageRef::new(1));
/// fifo.access(PageRef::new(2));
/// let access = fifo.access(PageRef::new(3));
/// assert_eq!(access.victim(), Some(PageRef::new(1)));
/// ```
#[derive(Debug, Clone)]
pub struct FifoReplacer {
    frames: ResidentSet,

    /// Slot overwritten by the next admission.
    cursor: usize,
}

impl FifoReplacer {
    /// Create a FIFO replacer with `capacity` empty frames.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = validate_capacity(capacity)?;
        Ok(Self {
            frames: ResidentSet::new(capacity),
            cursor: 0,
        })
    }

    /// Slot the next miss will write to.
    pub fn cursor(&self) -> FrameId {
        FrameId::new(self.cursor)
    }

    /// Write `page` at the cursor and advance it.
    fn enqueue(&mut self, page: PageRef) -> Access {
        let slot = FrameId::new(self.cursor);
        self.cursor = (self.cursor + 1) % self.frames.capacity();

        match self.frames.replace(slot, page) {
            Some(victim) => Access::Replaced { slot, victim },
            None => Access::Admitted { slot },
        }
    }
}

impl Replacer for FifoReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
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
        self.enqueue(page)
    }

    fn frames(&self) -> Vec<Option<PageRef>> {
        self.frames.slots().to_vec()
    }
}
