//! Fixed-capacity set of resident pages.

use crate::common::{FrameId, PageRef};

/// The physical frames of a simulation, as a fixed row of slots.
///
/// Slots fill left to right; once every slot is occupied an admission must
/// go through [`ResidentSet::replace`], so `len() <= capacity()` always holds.
/// Each page occupies at most one slot.
///
/// # Example
/// ```
/// use pagesim::{PageRef, ResidentSet};
///
/// let mut set = ResidentSet::new(2);
/// set.push(PageRef::new(4));
/// assert!(set.contains(PageRef::new(4)));
/// assert!(!set.is_full());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidentSet {
    slots: Vec<Option<PageRef>>,
    len: usize,
}

impl ResidentSet {
    /// Create an empty set with `capacity` slots.
    ///
    /// Capacity is validated by the policy constructors.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Linear membership scan.
    pub fn contains(&self, page: PageRef) -> bool {
        self.position(page).is_some()
    }

    /// Slot holding `page`, if resident.
    pub fn position(&self, page: PageRef) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| *slot == Some(page))
            .map(FrameId::new)
    }

    /// Place `page` in the leftmost free slot.
    ///
    /// Returns the slot `page` occupies, which is its existing slot when it
    /// is already resident, or `None` when the set is full.
    pub fn push(&mut self, page: PageRef) -> Option<FrameId> {
        if let Some(slot) = self.position(page) {
            return Some(slot);
        }
        let slot = self.slots.iter().position(Option::is_none)?;
        self.slots[slot] = Some(page);
        self.len += 1;
        Some(FrameId::new(slot))
    }

    /// Overwrite `slot` with `page`, returning the previous occupant.
    ///
    /// If `page` is resident in another slot it moves, leaving that slot
    /// empty.
    ///
    /// # Panics
    /// Panics if `slot` is out of range; callers derive slots from the
    /// set's own capacity.
    pub fn replace(&mut self, slot: FrameId, page: PageRef) -> Option<PageRef> {
        if let Some(old) = self.position(page).filter(|old| *old != slot) {
            self.slots[old.0] = None;
            self.len -= 1;
        }
        let previous = self.slots[slot.0].replace(page);
        if previous.is_none() {
            self.len += 1;
        }
        previous.filter(|victim| *victim != page)
    }

    /// Occupant of `slot`, or `None` if empty or out of range.
    pub fn get(&self, slot: FrameId) -> Option<PageRef> {
        self.slots.get(slot.0).copied().flatten()
    }

    /// Occupant-or-empty for every slot, left to right.
    pub fn slots(&self) -> &[Option<PageRef>] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u32) -> PageRef {
        PageRef::new(id)
    }

    #[test]
    fn test_push_fills_left_to_right() {
        let mut set = ResidentSet::new(3);
        assert!(set.is_empty());

        assert_eq!(set.push(p(7)), Some(FrameId::new(0)));
        assert_eq!(set.push(p(8)), Some(FrameId::new(1)));

        assert_eq!(set.len(), 2);
        assert_eq!(set.slots(), &[Some(p(7)), Some(p(8)), None]);
    }

    #[test]
    fn test_push_refuses_when_full() {
        let mut set = ResidentSet::new(1);
        set.push(p(1));

        assert!(set.is_full());
        assert_eq!(set.push(p(2)), None);
        assert_eq!(set.len(), 1);
        assert!(!set.contains(p(2)));
    }

    #[test]
    fn test_replace_returns_victim() {
        let mut set = ResidentSet::new(2);
        set.push(p(1));
        set.push(p(2));

        assert_eq!(set.replace(FrameId::new(0), p(9)), Some(p(1)));
        assert_eq!(set.position(p(9)), Some(FrameId::new(0)));
        assert_eq!(set.get(FrameId::new(1)), Some(p(2)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_push_after_replace_into_gap() {
        let mut set = ResidentSet::new(3);
        assert_eq!(set.replace(FrameId::new(2), p(7)), None);
        assert_eq!(set.len(), 1);

        assert_eq!(set.push(p(8)), Some(FrameId::new(0)));
        assert_eq!(set.push(p(9)), Some(FrameId::new(1)));

        assert_eq!(set.slots(), &[Some(p(8)), Some(p(9)), Some(p(7))]);
        assert!(set.is_full());
        assert_eq!(set.push(p(10)), None);
    }

    #[test]
    fn test_replace_keeps_pages_unique() {
        let mut set = ResidentSet::new(2);
        set.push(p(1));
        set.push(p(2));

        // Moving 1 onto 2's slot evicts 2 and frees slot 0.
        assert_eq!(set.replace(FrameId::new(1), p(1)), Some(p(2)));
        assert_eq!(set.slots(), &[None, Some(p(1))]);
        assert_eq!(set.len(), 1);
        assert!(!set.is_full());

        // Rewriting a page in its own slot changes nothing.
        assert_eq!(set.replace(FrameId::new(1), p(1)), None);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_push_resident_page_is_idempotent() {
        let mut set = ResidentSet::new(3);
        set.push(p(4));
        assert_eq!(set.push(p(4)), Some(FrameId::new(0)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_get_out_of_range() {
        let set = ResidentSet::new(2);
        assert_eq!(set.get(FrameId::new(0)), None);
        assert_eq!(set.get(FrameId::new(5)), None);
    }
}
