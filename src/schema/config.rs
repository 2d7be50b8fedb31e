//! Configuration types for universe runs.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_interval_ms() -> u64 {
    100
}

/// Top-level run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniverseConfig {
    /// Grid width in cells (columns).
    pub width: usize,
    /// Grid height in cells (rows).
    pub height: usize,
    /// Number of generations to compute. Zero means run until stopped.
    pub generations: u64,
    /// Pause between generations in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Fixed seed for the random number generator (None = system entropy).
    #[serde(default)]
    pub random_seed: Option<u64>,
    /// File read by `Seed::LoadFromFile` when the seed names no path.
    #[serde(default)]
    pub load_path: Option<PathBuf>,
    /// File the final grid is written to after the run.
    #[serde(default)]
    pub store_path: Option<PathBuf>,
    /// How seeding failures are handled.
    #[serde(default)]
    pub policy: ErrorPolicy,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 20,
            generations: 100,
            interval_ms: default_interval_ms(),
            random_seed: None,
            load_path: None,
            store_path: None,
            policy: ErrorPolicy::default(),
        }
    }
}

impl UniverseConfig {
    /// Get total grid size (width * height).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.width * self.height
    }

    /// Pause between generations.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Resolve the generation count into a termination policy.
    pub fn termination(&self) -> Termination {
        Termination::from_generations(self.generations)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// When a run stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Stop after exactly this many generations.
    Bounded(u64),
    /// Keep going until the renderer fails.
    Unbounded,
}

impl Termination {
    /// Map a legacy generation count, where 0 meant "forever".
    pub fn from_generations(generations: u64) -> Self {
        if generations == 0 {
            Termination::Unbounded
        } else {
            Termination::Bounded(generations)
        }
    }

    /// Whether another generation should be computed after `completed` ones.
    #[inline]
    pub fn should_continue(self, completed: u64) -> bool {
        match self {
            Termination::Bounded(limit) => completed < limit,
            Termination::Unbounded => true,
        }
    }
}

/// What a universe does when seeding fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Log the failure and carry on with the grid as it was.
    #[default]
    Lenient,
    /// Return the failure to the caller.
    Strict,
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions must be non-zero (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },
    #[error("Grid {width}x{height} does not fit in memory")]
    GridTooLarge { width: usize, height: usize },
}
