//! Universe - owns the grid and drives generations.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::rules::step_into;
use crate::render::{Clock, Renderer};
use crate::schema::patterns::FIVE_POINT;
use crate::schema::{ConfigError, ErrorPolicy, Seed, SeedError, Termination, UniverseConfig};
use crate::snapshot::{SnapshotError, read_snapshot, validate_cells, write_snapshot};

/// One in this many cells starts alive under `Seed::Random`.
const RANDOM_DENSITY_DIVISOR: u32 = 5;

/// Length of the `Seed::TenCellRow` line.
const TEN_CELL_ROW_LEN: usize = 10;

/// Errors raised while seeding or running a universe.
#[derive(Debug, thiserror::Error)]
pub enum UniverseError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error("Renderer failed: {0}")]
    Render(#[source] io::Error),
}

/// A toroidal Game of Life universe.
#[derive(Debug, Clone)]
pub struct Universe {
    grid: Grid,
    /// Next-generation buffer, swapped with `grid` after each step.
    scratch: Grid,
    rng: StdRng,
    policy: ErrorPolicy,
    load_path: Option<PathBuf>,
    generation: u64,
}

impl Universe {
    /// Create an all-dead universe with an entropy-seeded random generator.
    pub fn new(width: usize, height: usize) -> Result<Self, UniverseError> {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    /// Create an all-dead universe whose random seeding is reproducible.
    pub fn with_rng_seed(width: usize, height: usize, seed: u64) -> Result<Self, UniverseError> {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    /// Create a universe from a run configuration.
    pub fn from_config(config: &UniverseConfig) -> Result<Self, UniverseError> {
        config.validate()?;
        let universe = match config.random_seed {
            Some(seed) => Self::with_rng_seed(config.width, config.height, seed)?,
            None => Self::new(config.width, config.height)?,
        };
        Ok(Self {
            policy: config.policy,
            load_path: config.load_path.clone(),
            ..universe
        })
    }

    fn with_rng(width: usize, height: usize, rng: StdRng) -> Result<Self, UniverseError> {
        UniverseConfig {
            width,
            height,
            ..Default::default()
        }
        .validate()?;

        Ok(Self {
            grid: Grid::new(width, height),
            scratch: Grid::new(width, height),
            rng,
            policy: ErrorPolicy::default(),
            load_path: None,
            generation: 0,
        })
    }

    /// Set how seeding failures are handled.
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the file `Seed::LoadFromFile` reads when it names no path.
    pub fn with_load_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.load_path = Some(path.into());
        self
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Current grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations computed since the last reset.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Number of live cells.
    pub fn live_cells(&self) -> usize {
        self.grid.live_count()
    }

    pub fn stats(&self) -> GenerationStats {
        GenerationStats::from_universe(self)
    }

    /// Kill every cell and restart the generation count.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Advance one generation.
    pub fn next_generation(&mut self) {
        step_into(&self.grid, &mut self.scratch);
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
    }

    /// Apply a seed on top of the current grid.
    ///
    /// Failures go through the error policy: lenient logs them and returns
    /// `Ok`, strict returns them. Either way the grid is unchanged.
    pub fn seed(&mut self, seed: &Seed) -> Result<(), UniverseError> {
        let result = self.try_seed(seed);
        self.apply_policy(seed, result)
    }

    /// Apply a seed, returning any failure regardless of policy.
    pub fn try_seed(&mut self, seed: &Seed) -> Result<(), UniverseError> {
        log::debug!(
            "Seeding {}x{} grid with {}",
            self.width(),
            self.height(),
            seed.name()
        );

        match seed {
            Seed::Random => {
                self.seed_random();
                Ok(())
            }
            Seed::FivePoint => self.seed_cells(seed.name(), FIVE_POINT.cells),
            Seed::TenCellRow => self.seed_ten_cell_row(),
            Seed::LoadFromFile { path } => {
                let path = path
                    .as_ref()
                    .or(self.load_path.as_ref())
                    .cloned()
                    .ok_or(SeedError::MissingPath)?;
                self.load_from_file(path)
            }
            Seed::LoadFromMatrix { matrix } => {
                self.load_from_matrix(matrix)?;
                Ok(())
            }
            Seed::Unsupported => Err(SeedError::Unsupported.into()),
        }
    }

    fn apply_policy(
        &self,
        seed: &Seed,
        result: Result<(), UniverseError>,
    ) -> Result<(), UniverseError> {
        match (result, self.policy) {
            (Ok(()), _) => Ok(()),
            (Err(e), ErrorPolicy::Strict) => Err(e),
            (Err(e), ErrorPolicy::Lenient) => {
                log::error!("{} seed skipped: {}", seed.name(), e);
                Ok(())
            }
        }
    }

    fn seed_random(&mut self) {
        for row in 0..self.height() {
            for col in 0..self.width() {
                let alive = self.rng.gen_range(0..RANDOM_DENSITY_DIVISOR) == 0;
                self.grid.set(col, row, alive);
            }
        }
    }

    fn seed_cells(
        &mut self,
        name: &'static str,
        cells: &[(usize, usize)],
    ) -> Result<(), UniverseError> {
        if !cells.iter().all(|&(c, r)| self.grid.contains(c, r)) {
            return Err(self.out_of_bounds(name).into());
        }
        for &(c, r) in cells {
            self.grid.set(c, r, true);
        }
        Ok(())
    }

    fn seed_ten_cell_row(&mut self) -> Result<(), UniverseError> {
        let half = TEN_CELL_ROW_LEN / 2;
        let start = (self.width() / 2)
            .checked_sub(half)
            .ok_or_else(|| self.out_of_bounds("TenCellRow"))?;
        let row = self.height() / 2;
        let cells: Vec<(usize, usize)> = (start..start + TEN_CELL_ROW_LEN)
            .map(|c| (c, row))
            .collect();
        self.seed_cells("TenCellRow", &cells)
    }

    fn out_of_bounds(&self, seed: &'static str) -> SeedError {
        SeedError::OutOfBounds {
            seed,
            width: self.width(),
            height: self.height(),
        }
    }

    /// Copy an explicit `height x width` matrix of 0/1 bytes into the grid.
    ///
    /// The matrix is checked in full before any cell is written.
    pub fn load_from_matrix(&mut self, matrix: &[Vec<u8>]) -> Result<(), SeedError> {
        let (width, height) = (self.width(), self.height());

        let first_row = matrix.first().map_or(0, Vec::len);
        if matrix.len() != height || first_row != width {
            return Err(SeedError::MatrixDimensions {
                expected: format!("{}x{}", width, height),
                found: format!("{}x{}", first_row, matrix.len()),
            });
        }
        if let Some((r, row)) = matrix.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(SeedError::MatrixDimensions {
                expected: format!("{} cells in row {}", width, r),
                found: format!("{} cells", row.len()),
            });
        }
        for (r, row) in matrix.iter().enumerate() {
            if let Err(SnapshotError::InvalidCell { index, value }) = validate_cells(row) {
                return Err(SeedError::InvalidCell {
                    index: r * width + index,
                    value,
                });
            }
        }

        let cells: Vec<u8> = matrix.concat();
        self.grid.copy_from(&cells);
        Ok(())
    }

    /// Replace the grid with a snapshot read from `path`.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), UniverseError> {
        read_snapshot(path, &mut self.grid)?;
        Ok(())
    }

    /// Write the grid to `path` as a snapshot.
    pub fn store_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), UniverseError> {
        write_snapshot(path, &self.grid)?;
        Ok(())
    }

    /// Reset, seed, then render and step until `termination` says stop.
    ///
    /// The seeded state is always drawn before the first step, and every step
    /// is followed by a frame and a pause of `interval`. A renderer failure
    /// ends the run.
    pub fn run<R: Renderer, C: Clock>(
        &mut self,
        seed: &Seed,
        termination: Termination,
        interval: Duration,
        renderer: &mut R,
        clock: &mut C,
    ) -> Result<RunSummary, UniverseError> {
        self.reset();
        self.seed(seed)?;

        log::info!(
            "Running {}x{} universe: seed={}, {:?}, interval={:?}, live={}",
            self.width(),
            self.height(),
            seed.name(),
            termination,
            interval,
            self.live_cells()
        );

        renderer.draw_frame(&self.grid).map_err(UniverseError::Render)?;

        while termination.should_continue(self.generation) {
            self.next_generation();
            renderer.draw_frame(&self.grid).map_err(UniverseError::Render)?;
            clock.pause(interval);
        }

        let summary = RunSummary {
            generations: self.generation,
            final_stats: self.stats(),
        };
        log::info!("Run finished: {}", summary);
        Ok(summary)
    }
}

/// Population statistics for one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: u64,
    pub live_cells: usize,
    /// Fraction of cells alive (0.0-1.0).
    pub population_density: f32,
}

impl GenerationStats {
    pub fn from_universe(universe: &Universe) -> Self {
        let live_cells = universe.live_cells();
        Self {
            generation: universe.generation(),
            live_cells,
            population_density: live_cells as f32 / universe.grid().len() as f32,
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Generations computed after the seeded frame.
    pub generations: u64,
    pub final_stats: GenerationStats,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} generations, {} live cells ({:.1}% density)",
            self.generations,
            self.final_stats.live_cells,
            self.final_stats.population_density * 100.0
        )
    }
}
