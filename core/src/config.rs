//! Generator configuration
//!
//! Lets an embedding application keep its seed alongside the rest of its
//! JSON config instead of hard-coding it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rng::{RngError, SeededRng};

/// Seed and warm-up settings for a [`SeededRng`]
///
/// # Example
/// ```
/// use seedrand_core_rs::GeneratorConfig;
///
/// let config = GeneratorConfig::from_json(r#"{ "seed": 42 }"#).unwrap();
/// assert_eq!(config.warmup, 0);
/// let mut rng = config.build();
/// assert_eq!(rng.next(), 8378238357520424465);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub seed: u64,

    /// Outputs discarded right after seeding
    #[serde(default)]
    pub warmup: u64,
}

impl GeneratorConfig {
    pub fn new(seed: u64) -> Self {
        Self { seed, warmup: 0 }
    }

    /// Parse from a JSON object
    pub fn from_json(json: &str) -> Result<Self, RngError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Seed a generator and run the warm-up draws
    pub fn build(&self) -> SeededRng {
        let mut rng = SeededRng::new(self.seed);
        for _ in 0..self.warmup {
            rng.next();
        }
        debug!(seed = self.seed, warmup = self.warmup, "built rng from config");
        rng
    }
}

impl From<&GeneratorConfig> for SeededRng {
    fn from(config: &GeneratorConfig) -> Self {
        config.build()
    }
}
