//! Slot index into the resident frames.

use std::fmt;

/// Position of a frame in the row reported by [`crate::Replacer::frames`].
///
/// Replacers report where an admission or eviction landed as a `FrameId`,
/// so it indexes the per-step snapshot directly.
///
/// # Example
/// ```
/// use pagesim::{Access, FifoReplacer, PageRef, Replacer};
///
/// let mut fifo = FifoReplacer::new(2).unwrap();
/// fifo.access(PageRef::new(5));
/// if let Access::Admitted { slot } = fifo.access(PageRef::new(6)) {
///     assert_eq!(fifo.frames()[slot.0], Some(PageRef::new(6)));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    #[inline]
    pub fn new(slot: usize) -> Self {
        FrameId(slot)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0)
    }
}
