//! PyO3 wrapper for SeededRng
//!
//! # Example (from Python)
//!
//! ```python
//! from seedrand_core_rs import Generator
//!
//! rng = Generator(42)
//! assert rng.next() == 8378238357520424465
//! saved = rng.checkpoint()
//! resumed = Generator.from_checkpoint(saved)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::rng::{RngError, SeededRng};

fn to_py_err(err: RngError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for the Rust generator
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    inner: SeededRng,
}

#[pymethods]
impl PyGenerator {
    #[new]
    fn new(seed: u64) -> Self {
        PyGenerator {
            inner: SeededRng::new(seed),
        }
    }

    /// Re-seed; the sequence restarts from the new seed
    fn seed(&mut self, value: u64) {
        self.inner.seed(value);
    }

    /// Next value in [0, 2**63)
    fn next(&mut self) -> u64 {
        self.inner.next()
    }

    fn next_f64(&mut self) -> f64 {
        self.inner.next_f64()
    }

    /// Value in [min, max)
    ///
    /// Raises ValueError if min >= max
    fn range(&mut self, min: i64, max: i64) -> PyResult<i64> {
        if min >= max {
            return Err(PyValueError::new_err(format!(
                "min ({}) must be less than max ({})",
                min, max
            )));
        }
        Ok(self.inner.range(min, max))
    }

    fn jump(&mut self) {
        self.inner.jump();
    }

    fn long_jump(&mut self) {
        self.inner.long_jump();
    }

    fn state(&self) -> (u64, u64) {
        self.inner.state()
    }

    fn draws(&self) -> u64 {
        self.inner.draws()
    }

    /// Serialize to a JSON checkpoint string
    fn checkpoint(&self) -> PyResult<String> {
        self.inner.checkpoint().map_err(to_py_err)
    }

    /// Rebuild from a JSON checkpoint string
    ///
    /// Raises ValueError for malformed, tampered or degenerate checkpoints
    #[staticmethod]
    fn from_checkpoint(json: &str) -> PyResult<Self> {
        let inner = SeededRng::restore(json).map_err(to_py_err)?;
        Ok(PyGenerator { inner })
    }
}
