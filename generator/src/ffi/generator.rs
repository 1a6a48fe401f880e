//! PyO3 wrapper for GeneratorState
//!
//! This module provides the Python interface to the Rust generator.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::checkpoint::StateSnapshot;
use crate::rng::GeneratorState;

/// Python wrapper for Rust GeneratorState
///
/// # Example (from Python)
///
/// ```python
/// from xoshiro_rng_core_rs import Generator
///
/// rng = Generator(42)
/// value = rng.next_u64()
/// saved = rng.snapshot()
///
/// resumed = Generator.restore(saved)
/// assert rng.next_f64() == resumed.next_f64()
/// ```
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    inner: GeneratorState,
}

#[pymethods]
impl PyGenerator {
    #[new]
    fn new(seed: u64) -> Self {
        PyGenerator {
            inner: GeneratorState::new(seed),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn next_f64(&mut self) -> f64 {
        self.inner.next_f64()
    }

    /// Serialize the current state to a JSON checkpoint string
    fn snapshot(&self) -> PyResult<String> {
        save_state(&self.inner).map_err(PyValueError::new_err)
    }

    /// Rebuild a generator from a JSON checkpoint string
    ///
    /// Raises ValueError if the JSON is malformed, the checksum does not
    /// match, or the state is all-zero.
    #[staticmethod]
    fn restore(json: &str) -> PyResult<Self> {
        let inner = restore_state(json).map_err(PyValueError::new_err)?;
        Ok(PyGenerator { inner })
    }
}

/// Checkpoint JSON for `state`; the error string becomes a Python ValueError
fn save_state(state: &GeneratorState) -> Result<String, String> {
    StateSnapshot::capture(state)
        .to_json()
        .map_err(|e| format!("Failed to save state: {}", e))
}

fn restore_state(json: &str) -> Result<GeneratorState, String> {
    StateSnapshot::from_json(json)
        .and_then(|snapshot| snapshot.restore())
        .map_err(|e| format!("Failed to restore state: {}", e))
}
