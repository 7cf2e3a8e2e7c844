//! Per-thread generator behind free `seed` / `next` functions
//!
//! Each thread owns an independent [`SeededRng`], so there is no shared
//! mutable global and no locking. A thread that never calls [`seed`] draws
//! from the seed-0 sequence.

use std::cell::RefCell;

use super::SeededRng;

thread_local! {
    static THREAD_RNG: RefCell<SeededRng> = RefCell::new(SeededRng::default());
}

/// Re-seed the calling thread's generator
///
/// # Example
/// ```
/// use seedrand_core_rs::rng;
///
/// rng::seed(42);
/// assert_eq!(rng::next(), 8378238357520424465);
/// ```
pub fn seed(value: u64) {
    THREAD_RNG.with(|rng| rng.borrow_mut().seed(value));
}

/// Draw the next value in `[0, 2^63)` from the calling thread's generator
pub fn next() -> u64 {
    THREAD_RNG.with(|rng| rng.borrow_mut().next())
}

/// Run `f` with exclusive access to the calling thread's generator
///
/// # Panics
/// Panics if called re-entrantly from inside `f` (including via [`seed`] or
/// [`next`]).
pub fn with_thread_rng<R>(f: impl FnOnce(&mut SeededRng) -> R) -> R {
    THREAD_RNG.with(|rng| f(&mut rng.borrow_mut()))
}
