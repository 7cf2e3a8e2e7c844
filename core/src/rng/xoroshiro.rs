//! Seeded 128-bit-state generator (xoroshiro128++ with 63-bit output)
//!
//! Fast, deterministic PRNG for simulation, sampling and procedural
//! generation. NOT cryptographically secure: the state is linear and can be
//! reconstructed from enough outputs.
//!
//! # Algorithm
//!
//! The state is two 64-bit words `(s0, s1)`, initialized from a single seed
//! by [`expand`]. Each step emits `rotl(s0 + s1, 17) + s0` and scrambles the
//! state with the (49, 21, 28) xor/shift/rotate triple. The emitted value is
//! shifted right by one bit, so it always fits in a non-negative `i64`.
//!
//! # Determinism
//!
//! Same seed → same sequence, on every platform. All arithmetic wraps.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::splitmix::expand;
use super::RngError;

/// Jump polynomial: advances the state by 2^64 steps
const JUMP: [u64; 2] = [0x2BD7_A6A6_E99C_2DDC, 0x0992_CCAF_6A6F_CA05];

/// Long-jump polynomial: advances the state by 2^96 steps
const LONG_JUMP: [u64; 2] = [0x360F_D5F2_CF8D_5D99, 0x9C6E_6877_736C_46E3];

/// Advance a raw `(s0, s1)` state by one step and return the 63-bit output
///
/// This is the whole generator step; [`SeededRng::next`] delegates here.
///
/// # Example
/// ```
/// use seedrand_core_rs::rng::{advance, expand};
///
/// let mut state = expand(42);
/// assert_eq!(advance(&mut state), 8378238357520424465);
/// ```
#[inline]
pub fn advance(state: &mut (u64, u64)) -> u64 {
    let (s0, mut s1) = *state;
    let result = s0.wrapping_add(s1).rotate_left(17).wrapping_add(s0);

    s1 ^= s0;
    state.0 = s0.rotate_left(49) ^ s1 ^ (s1 << 21);
    state.1 = s1.rotate_left(28);

    result >> 1
}

/// Deterministic random number generator with a 128-bit state
///
/// An unseeded generator (`SeededRng::default()`) is in exactly the state
/// produced by seeding with `0`.
///
/// # Example
/// ```
/// use seedrand_core_rs::SeededRng;
///
/// let mut rng = SeededRng::new(12345);
/// let value = rng.next();
/// assert!(value < 1 << 63);
/// let die = rng.range(1, 7); // [1, 7)
/// assert!((1..7).contains(&die));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRng")]
pub struct SeededRng {
    s0: u64,
    s1: u64,

    /// Outputs produced since the last (re)seed or restore point
    draws: u64,
}

impl SeededRng {
    /// Create a new RNG from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        let (s0, s1) = expand(seed);
        Self { s0, s1, draws: 0 }
    }

    /// Rebuild a generator from a raw state previously read with [`state`]
    ///
    /// # Errors
    /// Returns [`RngError::DegenerateState`] for `(0, 0)`, which the step
    /// function maps to itself forever.
    ///
    /// [`state`]: SeededRng::state
    pub fn from_state(s0: u64, s1: u64) -> Result<Self, RngError> {
        Self::from_parts(s0, s1, 0)
    }

    pub(crate) fn from_parts(s0: u64, s1: u64, draws: u64) -> Result<Self, RngError> {
        if s0 == 0 && s1 == 0 {
            return Err(RngError::DegenerateState);
        }
        debug!(s0, s1, draws, "restored rng state");
        Ok(Self { s0, s1, draws })
    }

    /// Re-seed in place; the sequence restarts exactly as for `new(seed)`
    pub fn seed(&mut self, seed: u64) {
        debug!(seed, previous_draws = self.draws, "reseeding rng");
        *self = Self::new(seed);
    }

    /// Generate the next value in `[0, 2^63)` and advance the state
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        let mut state = (self.s0, self.s1);
        let value = advance(&mut state);
        (self.s0, self.s1) = state;
        self.draws = self.draws.wrapping_add(1);
        value
    }

    /// Generate random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = max.wrapping_sub(min) as u64;
        min.wrapping_add((value % range_size) as i64)
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// Uses the top 53 of the 63 output bits.
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next() >> 10;
        value as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Skip ahead 2^64 steps
    ///
    /// Starting from one seed, calling `jump` once per worker yields 2^64
    /// non-overlapping subsequences, one generator per thread.
    pub fn jump(&mut self) {
        self.apply_polynomial(&JUMP);
        debug!(s0 = self.s0, s1 = self.s1, "rng jumped 2^64 steps");
    }

    /// Skip ahead 2^96 steps, for splitting streams across hosts
    pub fn long_jump(&mut self) {
        self.apply_polynomial(&LONG_JUMP);
        debug!(s0 = self.s0, s1 = self.s1, "rng jumped 2^96 steps");
    }

    fn apply_polynomial(&mut self, poly: &[u64; 2]) {
        let mut state = (self.s0, self.s1);
        let mut acc = (0u64, 0u64);

        for &word in poly {
            for bit in 0..64 {
                if word & (1u64 << bit) != 0 {
                    acc.0 ^= state.0;
                    acc.1 ^= state.1;
                }
                advance(&mut state);
            }
        }

        (self.s0, self.s1) = acc;
    }

    /// Get current RNG state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use seedrand_core_rs::SeededRng;
    ///
    /// let mut rng = SeededRng::new(7);
    /// let (s0, s1) = rng.state();
    /// let mut replay = SeededRng::from_state(s0, s1).unwrap();
    /// assert_eq!(rng.next(), replay.next());
    /// ```
    pub fn state(&self) -> (u64, u64) {
        (self.s0, self.s1)
    }

    /// Number of outputs produced since seeding or restore
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

/// Unchecked serde form; deserialization goes through `from_parts`
#[derive(Deserialize)]
struct RawRng {
    s0: u64,
    s1: u64,
    draws: u64,
}

impl TryFrom<RawRng> for SeededRng {
    type Error = RngError;

    fn try_from(raw: RawRng) -> Result<Self, Self::Error> {
        SeededRng::from_parts(raw.s0, raw.s1, raw.draws)
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Iterator for SeededRng {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(SeededRng::next(self))
    }
}
