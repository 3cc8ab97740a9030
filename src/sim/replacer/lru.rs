//! LRU (Least-Recently-Used) replacement policy.
//!
//! Resident pages live in a doubly linked list stored in an index arena:
//!
//! ```text
//!   nodes (Vec<Node>)
//!   ┌────────┬──────────────────────────────────────────────────┐
//!   │ handle │ Node { page, age, prev, next }                   │
//!   ├────────┼──────────────────────────────────────────────────┤
//!   │   0    │ { page: 1, age: 0, prev: None,    next: Some(1) } │
//!   │   1    │ { page: 2, age: 2, prev: Some(0), next: Some(2) } │
//!   │   2    │ { page: 3, age: 1, prev: Some(1), next: None    } │
//!   └────────┴──────────────────────────────────────────────────┘
//!
//!   head ─► [0] ◄──► [1] ◄──► [2] ◄── tail
//! ```
//!
//! `age` counts references processed since the page was last used. Every
//! access walks the whole list: each node ages by one, and the node holding
//! the referenced page is reset to zero.
//!
//! On a miss with every frame occupied the victim is the node with the
//! largest age. The scan starts at the head and only moves the candidate on
//! a strictly greater age, so among equally stale nodes the one closest to
//! the head is evicted. The replacement node takes the victim's place in
//! the list; only fill-phase admissions grow the tail.

use log::trace;

use crate::common::config::validate_capacity;
use crate::common::{FrameId, PageRef, Result};
use crate::sim::replacer::{Access, PolicyKind, Replacer};

/// Stable index of a node in the arena.
type Handle = usize;

#[derive(Debug, Clone)]
struct Node {
    page: PageRef,
    age: u64,
    prev: Option<Handle>,
    next: Option<Handle>,
}

/// Recency-ordered replacer backed by an index-linked list.
///
/// # Example
/// ```
/// use pagesim::{LruReplacer, PageRef, Replacer};
///
/// let mut lru = LruReplacer::new(3).unwrap();
/// for id in [1, 2, 3, 1] {
///     lru.access(PageRef::new(id));
/// }
/// // 1 was refreshed, so 2 is the least recently used page.
/// assert_eq!(lru.access(PageRef::new(4)).victim(), Some(PageRef::new(2)));
/// ```
#[derive(Debug, Clone)]
pub struct LruReplacer {
    nodes: Vec<Node>,

    /// Handles detached from the list, ready for reuse.
    free: Vec<Handle>,

    head: Option<Handle>,
    tail: Option<Handle>,
    len: usize,
    capacity: usize,
}

impl LruReplacer {
    /// Create an LRU replacer with `capacity` empty frames.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = validate_capacity(capacity)?;
        Ok(Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            capacity,
        })
    }

    /// Pages paired with their age, head to tail.
    pub fn ages(&self) -> Vec<(PageRef, u64)> {
        self.iter().map(|node| (node.page, node.age)).collect()
    }

    fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    /// Age every node by one, resetting the node holding `page`.
    ///
    /// Returns whether `page` was resident.
    fn tick(&mut self, page: PageRef) -> bool {
        let mut found = false;
        let mut cursor = self.head;
        while let Some(handle) = cursor {
            let node = &mut self.nodes[handle];
            if node.page == page {
                node.age = 0;
                found = true;
            } else {
                node.age = node.age.saturating_add(1);
            }
            cursor = node.next;
        }
        found
    }

    /// Find the eviction candidate: earliest node with the maximal age.
    ///
    /// Returns the handle and its list position.
    fn victim(&self) -> Option<(Handle, usize)> {
        let mut best = (self.head?, 0);
        let mut cursor = self.nodes[best.0].next;
        let mut position = 1;
        while let Some(handle) = cursor {
            if self.nodes[handle].age > self.nodes[best.0].age {
                best = (handle, position);
            }
            cursor = self.nodes[handle].next;
            position += 1;
        }
        Some(best)
    }

    /// Allocate a node linked between `prev` and `next`.
    fn insert_between(
        &mut self,
        page: PageRef,
        prev: Option<Handle>,
        next: Option<Handle>,
    ) -> Handle {
        let node = Node {
            page,
            age: 0,
            prev,
            next,
        };
        let handle = match self.free.pop() {
            Some(handle) => {
                self.nodes[handle] = node;
                handle
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };

        match prev {
            Some(prev) => self.nodes[prev].next = Some(handle),
            None => self.head = Some(handle),
        }
        match next {
            Some(next) => self.nodes[next].prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.len += 1;
        handle
    }

    /// Unlink `handle`, returning its neighbours and page.
    fn detach(&mut self, handle: Handle) -> (Option<Handle>, Option<Handle>, PageRef) {
        let (prev, next, page) = {
            let node = &self.nodes[handle];
            (node.prev, node.next, node.page)
        };

        match prev {
            Some(prev_handle) => self.nodes[prev_handle].next = next,
            None => self.head = next,
        }
        match next {
            Some(next_handle) => self.nodes[next_handle].prev = prev,
            None => self.tail = prev,
        }

        self.nodes[handle].prev = None;
        self.nodes[handle].next = None;
        self.free.push(handle);
        self.len -= 1;

        (prev, next, page)
    }

    #[cfg(test)]
    fn validate_links(&self) {
        let forward: Vec<Handle> = {
            let mut out = Vec::new();
            let mut cursor = self.head;
            while let Some(handle) = cursor {
                out.push(handle);
                cursor = self.nodes[handle].next;
            }
            out
        };
        let mut backward = Vec::new();
        let mut cursor = self.tail;
        while let Some(handle) = cursor {
            backward.push(handle);
            cursor = self.nodes[handle].prev;
        }
        backward.reverse();

        assert_eq!(forward, backward);
        assert_eq!(forward.len(), self.len);
        assert!(self.len <= self.capacity);
    }
}

impl Replacer for LruReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.len
    }

    fn access(&mut self, page: PageRef) -> Access {
        if self.tick(page) {
            return Access::Hit;
        }

        if self.len == self.capacity {
            if let Some((handle, position)) = self.victim() {
                let (prev, next, victim) = self.detach(handle);
                self.insert_between(page, prev, next);
                trace!("lru: evicted {} at position {} for {}", victim, position, page);
                return Access::Replaced {
                    slot: FrameId::new(position),
                    victim,
                };
            }
        }

        let slot = FrameId::new(self.len);
        self.insert_between(page, self.tail, None);
        Access::Admitted { slot }
    }

    fn frames(&self) -> Vec<Option<PageRef>> {
        let mut frames: Vec<Option<PageRef>> = self.iter().map(|node| Some(node.page)).collect();
        frames.resize(self.capacity, None);
        frames
    }
}

struct Iter<'a> {
    nodes: &'a [Node],
    cursor: Option<Handle>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.cursor?];
        self.cursor = node.next;
        Some(node)
    }
}
