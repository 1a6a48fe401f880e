//! Generator configuration
//!
//! A fixed seed gives a reproducible stream. Without one, the seed is taken
//! from the system clock and logged so the run can still be replayed.

use crate::rng::GeneratorState;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid generator config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for building a generator
///
/// # Example
/// ```
/// use xoshiro_rng_core_rs::{GeneratorConfig, GeneratorState};
///
/// let config = GeneratorConfig::from_json(r#"{"seed": 42}"#).unwrap();
/// assert_eq!(config.build(), GeneratorState::new(42));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Fixed seed; `None` means derive one from the clock
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Seed the generator will be built with
    ///
    /// Clock seeds differ between calls; resolve once and keep the value
    /// when reproducibility matters.
    pub fn resolve_seed(&self) -> u64 {
        match self.seed {
            Some(seed) => seed,
            None => {
                let seed = clock_seed();
                info!("No seed configured, using clock seed {}", seed);
                seed
            }
        }
    }

    pub fn build(&self) -> GeneratorState {
        let seed = self.resolve_seed();
        debug!("Building generator with seed {}", seed);
        GeneratorState::new(seed)
    }
}

/// Nanoseconds since the Unix epoch, truncated to 64 bits (0 before the epoch)
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}
