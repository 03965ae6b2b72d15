//! The concurrent ordered set: `contains`/`insert`/`remove` over a lazy
//! skip list.
//!
//! Grounded in the teacher's `ferrisdb-storage::memtable::skip_list::SkipList`
//! for the overall shape (epoch-protected `Atomic<Node>` forward pointers,
//! a `find` that walks top-down populating `preds`/`succs`, a `Drop` that
//! walks level 0 calling `defer_destroy`). The predecessor-locking,
//! validation, and publication-flag protocol is not present in the
//! teacher's lock-free version at all — that part is built directly from
//! `spec.md` §4.4/§4.5, the one place this crate's algorithm fully departs
//! from the teacher's own approach.

use crate::config::SkipSetConfig;
use crate::level::random_level;
use crate::node::Node;
use crossbeam::epoch::{self, Atomic, Owned, Shared};
use parking_lot::MutexGuard;
use skipset_core::{Bound, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A concurrent ordered set of `i64` keys backed by an optimistic lazy
/// skip list.
///
/// Any number of threads may call [`insert`](Self::insert),
/// [`remove`](Self::remove), and [`contains`](Self::contains) concurrently
/// on the same instance. `contains` is lock-free; `insert`/`remove` use
/// fine-grained predecessor locking and are obstruction-free under
/// contention. See the crate documentation for the full concurrency
/// argument.
pub struct ConcurrentSkipSet {
    head: Atomic<Node>,
    config: SkipSetConfig,
    len: AtomicUsize,
}

/// Deduplicating holder for the predecessor locks acquired during a single
/// `insert`/`remove` attempt. Dropping it releases every held lock exactly
/// once, satisfying the exit-path discipline from `spec.md` §4.4/§4.5 by
/// construction rather than by remembering to unlock on each return path.
struct PredLocks<'g> {
    held: Vec<(*const Node, MutexGuard<'g, ()>)>,
}

impl<'g> PredLocks<'g> {
    fn new() -> Self {
        Self { held: Vec::new() }
    }

    /// Locks `node` unless it is already held (the same predecessor can
    /// appear at multiple levels).
    fn lock(&mut self, node: Shared<'g, Node>) {
        let ptr = node.as_raw();
        if self.held.iter().any(|(held_ptr, _)| *held_ptr == ptr) {
            return;
        }
        let node_ref = unsafe { node.deref() };
        self.held.push((ptr, node_ref.lock()));
    }
}

impl ConcurrentSkipSet {
    /// Creates a new empty set with the default configuration
    /// (`max_level = 32`, `promotion_probability = 0.5`).
    pub fn new() -> Self {
        Self::with_config(SkipSetConfig::default()).expect("default config is always valid")
    }

    /// Creates a new empty set with a custom configuration, validating it
    /// first.
    pub fn with_config(config: SkipSetConfig) -> Result<Self> {
        config.validate()?;

        let guard = &epoch::pin();
        let tail = Owned::new(Node::sentinel(Bound::PosInf, config.max_level)).into_shared(guard);

        let head_node = Node::sentinel(Bound::NegInf, config.max_level);
        for level in 0..=config.max_level {
            head_node.next[level].store(tail, Ordering::Relaxed);
        }

        log::debug!(
            "constructed ConcurrentSkipSet (max_level={}, p={})",
            config.max_level,
            config.promotion_probability
        );

        Ok(Self {
            head: Atomic::new(head_node),
            config,
            len: AtomicUsize::new(0),
        })
    }

    /// The approximate number of keys currently in the set.
    ///
    /// Grounded in the teacher's `MemTable::approximate_size` — a plain
    /// `AtomicUsize` counter, incremented on successful `insert` and
    /// decremented on successful `remove`. A racing reader may observe a
    /// count that was never exactly correct at any single instant; this is
    /// bookkeeping, not a new semantic surface.
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Relaxed)
    }

    /// `true` iff [`len`](Self::len) observed 0.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Walks top-down from `head`, filling `preds[0..=max_level]` and
    /// `succs[0..=max_level]`. Performs no locking, no validation, and
    /// never skips marked nodes — callers must revalidate.
    ///
    /// Returns the highest level at which `key` was observed, or `-1` if
    /// it was not observed at any level.
    fn find<'g>(
        &self,
        key: Bound,
        preds: &mut [Shared<'g, Node>],
        succs: &mut [Shared<'g, Node>],
        guard: &'g epoch::Guard,
    ) -> isize {
        let mut layer_found: isize = -1;
        let mut pred = self.head.load(Ordering::Acquire, guard);

        for level in (0..=self.config.max_level).rev() {
            let mut curr = unsafe { pred.deref() }.next(level, guard);

            while unsafe { curr.deref() }.key < key {
                pred = curr;
                curr = unsafe { pred.deref() }.next(level, guard);
            }

            preds[level] = pred;
            succs[level] = curr;

            if layer_found == -1 && unsafe { curr.deref() }.key == key {
                layer_found = level as isize;
            }
        }

        layer_found
    }

    /// Returns `true` iff `key` is currently a member: observed by `find`
    /// at some level, fully linked, and not marked. Never locks, never
    /// retries — the entire linearizable read path.
    pub fn contains(&self, key: i64) -> bool {
        let bound = Bound::Finite(key);
        let guard = &epoch::pin();
        let mut preds = vec![Shared::null(); self.config.max_level + 1];
        let mut succs = vec![Shared::null(); self.config.max_level + 1];

        let layer_found = self.find(bound, &mut preds, &mut succs, guard);
        if layer_found == -1 {
            return false;
        }

        let node = unsafe { succs[layer_found as usize].deref() };
        node.is_fully_linked() && !node.is_marked()
    }

    /// Inserts `key`. Returns `true` if it was added, `false` if it was
    /// already a member.
    pub fn insert(&self, key: i64) -> bool {
        let bound = Bound::Finite(key);
        let guard = &epoch::pin();

        loop {
            let mut preds = vec![Shared::null(); self.config.max_level + 1];
            let mut succs = vec![Shared::null(); self.config.max_level + 1];
            let layer_found = self.find(bound, &mut preds, &mut succs, guard);

            if layer_found != -1 {
                let found = unsafe { succs[layer_found as usize].deref() };
                if found.is_marked() {
                    log::trace!("insert({key}): found marked node mid-deletion, restarting");
                    continue;
                }
                while !found.is_fully_linked() {
                    std::hint::spin_loop();
                }
                return false;
            }

            let top = random_level(self.config.max_level, self.config.promotion_probability) - 1;
            debug_assert!(top < self.config.max_level);

            let mut locks = PredLocks::new();
            for level in 0..=top {
                locks.lock(preds[level]);
            }

            let valid = (0..=top).all(|level| {
                let pred = unsafe { preds[level].deref() };
                let succ = succs[level];
                !pred.is_marked()
                    && !unsafe { succ.deref() }.is_marked()
                    && pred.next(level, guard).as_raw() == succ.as_raw()
            });

            if !valid {
                log::trace!("insert({key}): validation failed, retrying");
                continue;
            }

            let new_node = Owned::new(Node::new(bound, top)).into_shared(guard);
            let new_ref = unsafe { new_node.deref() };
            for level in 0..=top {
                new_ref.next[level].store(succs[level], Ordering::Relaxed);
            }
            for level in 0..=top {
                let pred = unsafe { preds[level].deref() };
                pred.next[level].store(new_node, Ordering::Release);
            }
            new_ref.publish();

            drop(locks);
            self.len.fetch_add(1, Ordering::Relaxed);
            return true;
        }
    }

    /// Removes `key`. Returns `true` if it was removed, `false` if it was
    /// not a member.
    pub fn remove(&self, key: i64) -> bool {
        let bound = Bound::Finite(key);
        let guard = &epoch::pin();

        let mut victim: Option<Shared<'_, Node>> = None;
        let mut victim_guard: Option<MutexGuard<'_, ()>> = None;
        let mut top = 0usize;

        loop {
            let mut preds = vec![Shared::null(); self.config.max_level + 1];
            let mut succs = vec![Shared::null(); self.config.max_level + 1];
            let layer_found = self.find(bound, &mut preds, &mut succs, guard);

            if victim.is_none() {
                if layer_found == -1 {
                    return false;
                }
                let layer_found = layer_found as usize;
                let candidate = succs[layer_found];
                let candidate_ref = unsafe { candidate.deref() };

                if !candidate_ref.is_fully_linked()
                    || candidate_ref.is_marked()
                    || candidate_ref.top_level != layer_found
                {
                    return false;
                }

                let lock = candidate_ref.lock();
                if candidate_ref.is_marked() {
                    return false;
                }
                candidate_ref.mark();

                top = candidate_ref.top_level;
                victim = Some(candidate);
                victim_guard = Some(lock);
            }

            let victim_shared = victim.expect("victim set above");
            let victim_ref = unsafe { victim_shared.deref() };

            let mut locks = PredLocks::new();
            for level in 0..=top {
                locks.lock(preds[level]);
            }

            let valid = (0..=top).all(|level| {
                let pred = unsafe { preds[level].deref() };
                !pred.is_marked() && pred.next(level, guard).as_raw() == victim_shared.as_raw()
            });

            if !valid {
                log::trace!("remove({key}): predecessor validation failed, retrying");
                continue;
            }

            for level in (0..=top).rev() {
                let pred = unsafe { preds[level].deref() };
                let succ = victim_ref.next(level, guard);
                pred.next[level].store(succ, Ordering::Release);
            }

            drop(victim_guard.take());
            drop(locks);
            unsafe { guard.defer_destroy(victim_shared) };

            self.len.fetch_sub(1, Ordering::Relaxed);
            return true;
        }
    }
}

impl Default for ConcurrentSkipSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ConcurrentSkipSet {
    fn drop(&mut self) {
        let guard = &epoch::pin();
        let mut curr = self.head.load(Ordering::Acquire, guard);
        while !curr.is_null() {
            let next = unsafe { curr.deref() }.next(0, guard);
            unsafe {
                guard.defer_destroy(curr);
            }
            curr = next;
        }
    }
}

// ConcurrentSkipSet is Send + Sync because Atomic<Node>, AtomicUsize, and
// SkipSetConfig (a Copy struct of plain numerics) all are.
