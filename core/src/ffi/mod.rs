//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings for exposing the Rust generator to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only expose what's needed
//! 2. **Simple types**: Integers, floats and JSON strings at the boundary
//! 3. **Validate inputs**: Check arguments before they reach a panicking path
//! 4. **Safe errors**: Convert all Rust errors to Python exceptions

pub mod generator;
