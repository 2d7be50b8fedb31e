//! Torus Life - Conway's Game of Life on a wraparound grid.
//!
//! Cells live on a `width x height` torus: the neighbor past the last column
//! is the first column, and likewise for rows. Each generation applies the
//! classic B3/S23 rule to the whole grid at once.
//!
//! # Architecture
//!
//! - `schema`: Run configuration, seeds and built-in patterns
//! - `compute`: Grid storage, the transition rule and the `Universe` driver
//! - `render`: Frame output and pacing between generations
//! - `snapshot`: Raw grid dumps on disk
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use torus_life::{
//!     compute::Universe,
//!     render::{SleepClock, TextRenderer},
//!     schema::{Seed, Termination},
//! };
//!
//! let mut universe = Universe::new(50, 20).unwrap();
//! let mut renderer = TextRenderer::new(std::io::stdout());
//!
//! let summary = universe
//!     .run(
//!         &Seed::FivePoint,
//!         Termination::Bounded(100),
//!         Duration::from_millis(100),
//!         &mut renderer,
//!         &mut SleepClock,
//!     )
//!     .unwrap();
//!
//! println!("{}", summary);
//! ```

pub mod compute;
pub mod render;
pub mod schema;
pub mod snapshot;

// Re-export commonly used types
pub use compute::{GenerationStats, Grid, RunSummary, Universe, UniverseError};
pub use schema::{ErrorPolicy, Seed, Termination, UniverseConfig};
