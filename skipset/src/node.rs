//! The per-node record: key, forward array, lock, and publication flags.
//!
//! Grounded in the teacher's `ferrisdb-storage::memtable::skip_list::Node`
//! (a `key`/`value` pair plus a `Vec<Atomic<Node>>` forward array under
//! `crossbeam::epoch`), generalized here with the fine-grained lock and the
//! `marked`/`fully_linked` flags the lazy algorithm needs that the teacher's
//! lock-free CAS-only node has no use for.

use crossbeam::epoch::{Atomic, Guard, Shared};
use parking_lot::{Mutex, MutexGuard};
use skipset_core::Bound;
use std::sync::atomic::{AtomicBool, Ordering};

/// A node in the skip list: either a user key or one of the two sentinels.
pub(crate) struct Node {
    /// The node's key. `Bound::NegInf`/`Bound::PosInf` for the sentinels.
    pub(crate) key: Bound,
    /// Highest level this node participates in (0-indexed).
    pub(crate) top_level: usize,
    /// Forward pointers, one per level in `[0, top_level]`.
    pub(crate) next: Vec<Atomic<Node>>,
    /// Guards every write to this node's own forward pointers when it is
    /// acting as a predecessor, and every write to `marked` when it is
    /// acting as a victim.
    lock: Mutex<()>,
    /// Logical-deletion flag. `false -> true` exactly once, never back.
    marked: AtomicBool,
    /// Publication flag. `false -> true` exactly once, never back.
    fully_linked: AtomicBool,
}

impl Node {
    /// Allocates an unlinked, unpublished node with an empty forward array
    /// sized for levels `[0, top_level]`.
    pub(crate) fn new(key: Bound, top_level: usize) -> Self {
        let mut next = Vec::with_capacity(top_level + 1);
        next.resize_with(top_level + 1, Atomic::null);
        Self {
            key,
            top_level,
            next,
            lock: Mutex::new(()),
            marked: AtomicBool::new(false),
            fully_linked: AtomicBool::new(false),
        }
    }

    /// Allocates a `head`/`tail` sentinel: already published, occupying
    /// every level up to `max_level`.
    pub(crate) fn sentinel(key: Bound, max_level: usize) -> Self {
        let node = Self::new(key, max_level);
        node.fully_linked.store(true, Ordering::Release);
        node
    }

    pub(crate) fn is_marked(&self) -> bool {
        self.marked.load(Ordering::Acquire)
    }

    pub(crate) fn is_fully_linked(&self) -> bool {
        self.fully_linked.load(Ordering::Acquire)
    }

    /// Sets `marked`. Callers must hold `self.lock()` first.
    pub(crate) fn mark(&self) {
        self.marked.store(true, Ordering::Release);
    }

    /// Publishes the node, making prior forward-pointer writes visible to
    /// any thread that subsequently observes `fully_linked == true`.
    pub(crate) fn publish(&self) {
        self.fully_linked.store(true, Ordering::Release);
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock()
    }

    /// Reads the forward pointer at `level` under the current epoch.
    pub(crate) fn next<'g>(&self, level: usize, guard: &'g Guard) -> Shared<'g, Node> {
        self.next[level].load(Ordering::Acquire, guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::epoch;

    #[test]
    fn fresh_node_is_unmarked_and_unpublished() {
        let node = Node::new(Bound::Finite(5), 2);
        assert!(!node.is_marked());
        assert!(!node.is_fully_linked());
        assert_eq!(node.next.len(), 3);
    }

    #[test]
    fn sentinel_is_published_at_construction() {
        let node = Node::sentinel(Bound::NegInf, 32);
        assert!(node.is_fully_linked());
        assert!(!node.is_marked());
        assert_eq!(node.top_level, 32);
    }

    #[test]
    fn mark_and_publish_are_observable() {
        let node = Node::new(Bound::Finite(1), 0);
        node.publish();
        assert!(node.is_fully_linked());
        node.mark();
        assert!(node.is_marked());
    }

    #[test]
    fn forward_pointer_round_trips_through_epoch() {
        let guard = &epoch::pin();
        let node = Node::new(Bound::Finite(1), 0);
        assert!(node.next(0, guard).is_null());
    }
}
