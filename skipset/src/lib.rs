//! A concurrent ordered set of `i64` keys, backed by an optimistic lazy
//! skip list.
//!
//! `insert`, `remove`, and `contains` may be called by any number of
//! threads concurrently on one shared [`ConcurrentSkipSet`]. `contains` is
//! lock-free; `insert`/`remove` use fine-grained predecessor locking and a
//! two-flag (`marked`, `fully_linked`) per-node publication protocol so
//! that no thread ever observes a partially-inserted or partially-unlinked
//! node as a live member.
//!
//! # Architecture
//!
//! ```text
//! contains(k):  find(k) -> check fully_linked && !marked         (lock-free)
//! insert(k):    find(k) -> lock preds -> validate -> link -> publish
//! remove(k):    find(k) -> lock victim, mark -> lock preds -> validate -> unlink
//! ```
//!
//! - `node` (private): the per-node record (key, forward array, lock, flags).
//! - [`level`]: per-thread geometric random level generation.
//! - [`config`]: tunable `max_level`/`promotion_probability`.
//! - [`set`]: [`ConcurrentSkipSet`] itself.
//!
//! # Example
//!
//! ```
//! use skipset::ConcurrentSkipSet;
//!
//! let set = ConcurrentSkipSet::new();
//! assert!(set.insert(5));
//! assert!(!set.insert(5));
//! assert!(set.contains(5));
//! assert!(set.remove(5));
//! assert!(!set.contains(5));
//! ```
//!
//! Out of scope: persistence, iteration, range queries, multi-key
//! transactions, non-integer payloads, and strict real-time bounds. The
//! structure provides probabilistic O(log n) expected work per operation,
//! not a worst-case bound.

pub mod config;
pub mod level;
mod node;
pub mod set;

pub use config::SkipSetConfig;
pub use set::ConcurrentSkipSet;
pub use skipset_core::{Bound, Error, Result};
