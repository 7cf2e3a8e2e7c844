//! Deterministic random number generation
//!
//! Seed expansion ([`expand`]) feeds a 128-bit-state generator
//! ([`SeededRng`]). Output is reproducible bit-for-bit from the seed.
//! CRITICAL: not cryptographically secure. Never use for tokens or keys.

mod error;
mod splitmix;
mod thread;
mod xoroshiro;

pub use error::RngError;
pub use splitmix::expand;
pub use thread::{next, seed, with_thread_rng};
pub use xoroshiro::{advance, SeededRng};
