//! Xoshiro RNG Core - Rust Engine
//!
//! Fast, reproducible pseudo-random numbers from a single 64-bit seed.
//!
//! # Architecture
//!
//! - **rng**: splitmix64 seeding, xoshiro256+ stepping, double mapping
//! - **checkpoint**: Save/restore generator state mid-stream
//! - **config**: Seed configuration (fixed or clock-derived)
//!
//! # Critical Invariants
//!
//! 1. All arithmetic in seeding and stepping wraps modulo 2^64
//! 2. Same seed → same stream, on every platform
//! 3. Not cryptographically secure; not internally synchronized
//!
//! # Example
//! ```
//! use xoshiro_rng_core_rs::{initialize, next_double, next_u64};
//!
//! let mut state = initialize(1);
//! let raw = next_u64(&mut state);
//! let unit = next_double(&mut state);
//! assert_eq!(raw, 0x02CB_B47D_7745_25CC);
//! assert!((0.0..1.0).contains(&unit));
//! ```

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, StateSnapshot};
pub use config::{ConfigError, GeneratorConfig};
pub use rng::{initialize, next_double, next_u64, to_double, GeneratorState, StateError};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn xoshiro_rng_core_rs(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<ffi::generator::PyGenerator>()?;
    Ok(())
}
