//! Seedrand Core - Rust Engine
//!
//! Fast, reproducible pseudo-random numbers from a single 64-bit seed.
//!
//! # Architecture
//!
//! - **rng**: Seed expansion, the 128-bit-state generator, per-thread API
//! - **config**: Serde config for building seeded generators
//! - **checkpoint**: Save/restore generator state with integrity digest
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, bit-for-bit
//! 2. Every output fits in 63 bits (non-negative as `i64`)
//! 3. NOT cryptographically secure
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::{GeneratorSnapshot, CHECKPOINT_VERSION};
pub use config::GeneratorConfig;
pub use rng::{RngError, SeededRng};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn seedrand_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyGenerator>()?;
    Ok(())
}
