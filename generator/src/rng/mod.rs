//! Deterministic random number generation
//!
//! Uses xoshiro256+ seeded through splitmix64.
//! Same seed → same stream, on every platform.
//!
//! The free functions below are thin aliases over [`GeneratorState`] methods
//! for callers that prefer a procedural interface.

mod output;
mod splitmix;
mod xoshiro;

pub use output::to_double;
pub use xoshiro::{GeneratorState, StateError};

/// Seed a fresh generator state
///
/// Equivalent to [`GeneratorState::new`].
pub fn initialize(seed: u64) -> GeneratorState {
    GeneratorState::new(seed)
}

/// Advance `state` by one step and return the raw 64-bit output
pub fn next_u64(state: &mut GeneratorState) -> u64 {
    state.next_u64()
}

/// Advance `state` by one step and return a double in [0.0, 1.0)
pub fn next_double(state: &mut GeneratorState) -> f64 {
    state.next_f64()
}
