//! SplitMix64 seed expansion
//!
//! Turns a single 64-bit seed into the two-word state of [`SeededRng`].
//! Every seed (zero included) maps to a well-mixed, non-degenerate state.
//!
//! [`SeededRng`]: super::SeededRng

/// Golden-ratio increment applied to the running value before each word
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

const MIX_MUL_1: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_MUL_2: u64 = 0x94D0_49BB_1331_11EB;

/// Advance the running value and return the next mixed word
#[inline]
fn splitmix64(running: &mut u64) -> u64 {
    *running = running.wrapping_add(GOLDEN_GAMMA);
    let mut z = *running;
    z = (z ^ (z >> 30)).wrapping_mul(MIX_MUL_1);
    z = (z ^ (z >> 27)).wrapping_mul(MIX_MUL_2);
    z ^ (z >> 31)
}

/// Expand a 64-bit seed into an initial `(s0, s1)` state
///
/// # Example
/// ```
/// use seedrand_core_rs::rng::expand;
///
/// let (s0, s1) = expand(0);
/// assert_eq!(s0, 0xE220_A839_7B1D_CDAF);
/// assert_ne!((s0, s1), (0, 0));
/// ```
pub fn expand(seed: u64) -> (u64, u64) {
    let mut running = seed;
    let s0 = splitmix64(&mut running);
    let s1 = splitmix64(&mut running);
    (s0, s1)
}
