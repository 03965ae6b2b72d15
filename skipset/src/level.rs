//! Random level generation for new nodes.
//!
//! Each thread owns its own PRNG in a `thread_local!` cell rather than
//! sharing one behind a lock — see `SPEC_FULL.md` §4.1 for why the
//! teacher's `Mutex<ThreadRng>` approach is exactly the contention this
//! crate avoids.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

thread_local! {
    static LEVEL_RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_entropy());
}

/// Draws `1 + count of consecutive Bernoulli(p) successes`, capped at
/// `max_level`.
///
/// The result is a 1-indexed *count* of levels (never 0), matching
/// `spec.md` §4.1 literally. Callers that need a 0-indexed `top_level`
/// subtract 1 at the call site (see `ConcurrentSkipSet::insert`).
pub fn random_level(max_level: usize, p: f64) -> usize {
    debug_assert!(max_level >= 1);
    debug_assert!(p > 0.0 && p < 1.0);

    LEVEL_RNG.with(|rng| {
        let mut rng = rng.borrow_mut();
        let mut level = 1;
        while level < max_level && rng.gen_bool(p) {
            level += 1;
        }
        level
    })
}
