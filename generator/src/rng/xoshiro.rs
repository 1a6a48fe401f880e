//! xoshiro256+ random number generator
//!
//! This is a fast, long-period PRNG that is deterministic and suitable
//! for simulation and sampling. It is NOT cryptographically secure.
//!
//! # Algorithm
//!
//! xoshiro256+ keeps 256 bits of state in four 64-bit lanes. Each step
//! returns `lane[0] + lane[3]` and then scrambles the lanes with xor, shift
//! and rotate. The period is 2^256 - 1.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. Identical states produce
//! identical subsequent outputs.
//!
//! # Concurrency
//!
//! A state is a plain value. Sharing one across threads requires external
//! locking; giving each thread its own seeded state is usually simpler.

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::output::to_double;
use super::splitmix::expand_seed;

/// Errors raised when building a state from raw lanes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("Generator state must have at least one nonzero lane")]
    AllZero,
}

/// Deterministic random number generator using xoshiro256+
///
/// # Example
/// ```
/// use xoshiro_rng_core_rs::GeneratorState;
///
/// let mut rng = GeneratorState::new(12345);
/// let value = rng.next_u64();
/// let probability = rng.next_f64(); // [0.0, 1.0)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u64; 4]", into = "[u64; 4]")]
pub struct GeneratorState {
    /// Internal state (4 x 64-bit lanes), opaque to callers
    lanes: [u64; 4],
}

impl GeneratorState {
    /// Create a new generator from a seed
    ///
    /// Every seed is valid, zero included: the lanes come from splitmix64,
    /// never from the seed directly.
    ///
    /// # Example
    /// ```
    /// use xoshiro_rng_core_rs::GeneratorState;
    ///
    /// let rng = GeneratorState::new(0);
    /// assert!(rng.lanes().iter().any(|&lane| lane != 0));
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            lanes: expand_seed(seed),
        }
    }

    /// Rebuild a generator from previously captured lanes
    ///
    /// # Errors
    /// Returns [`StateError::AllZero`] for the all-zero state, which would
    /// emit zeros forever.
    ///
    /// # Example
    /// ```
    /// use xoshiro_rng_core_rs::GeneratorState;
    ///
    /// let mut rng1 = GeneratorState::new(12345);
    /// rng1.next_u64();
    ///
    /// let mut rng2 = GeneratorState::from_lanes(rng1.lanes()).unwrap();
    /// assert_eq!(rng1.next_u64(), rng2.next_u64());
    /// ```
    pub fn from_lanes(lanes: [u64; 4]) -> Result<Self, StateError> {
        if lanes.iter().all(|&lane| lane == 0) {
            warn!("Rejected all-zero generator state");
            return Err(StateError::AllZero);
        }
        Ok(Self { lanes })
    }

    /// Get current lanes (for checkpointing/replay)
    ///
    /// The values carry no meaning beyond reproducing the stream.
    pub fn lanes(&self) -> [u64; 4] {
        self.lanes
    }

    /// Generate next random u64 value
    ///
    /// This advances the internal state by exactly one step. The returned
    /// value is computed from the state before the step.
    pub fn next_u64(&mut self) -> u64 {
        let s = &mut self.lanes;
        let result = s[0].wrapping_add(s[3]);

        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;

        s[3] = rotl(s[3], 45);

        result
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// # Example
    /// ```
    /// use xoshiro_rng_core_rs::GeneratorState;
    ///
    /// let mut rng = GeneratorState::new(12345);
    /// let probability = rng.next_f64();
    /// assert!(probability >= 0.0 && probability < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        to_double(self.next_u64())
    }
}

impl TryFrom<[u64; 4]> for GeneratorState {
    type Error = StateError;

    fn try_from(lanes: [u64; 4]) -> Result<Self, Self::Error> {
        Self::from_lanes(lanes)
    }
}

impl From<GeneratorState> for [u64; 4] {
    fn from(state: GeneratorState) -> Self {
        state.lanes
    }
}

/// Rotate left; `k` must be in [1, 63]
#[inline]
fn rotl(x: u64, k: u32) -> u64 {
    (x << k) | (x >> (64 - k))
}
