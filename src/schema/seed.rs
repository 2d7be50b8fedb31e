//! Seed types for initializing a universe.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::patterns::{GOSPER_GLIDER_GUN, GOSPER_MATRIX_SIZE, matrix_from_cells};

/// How the grid is populated before the first generation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Seed {
    /// Each cell is alive with probability 1/5.
    Random,
    /// Five fixed cells at `(1,2) (2,3) (3,3) (3,2) (3,1)`.
    #[default]
    FivePoint,
    /// Ten live cells in a row, centered on the grid.
    TenCellRow,
    /// Raw grid dump read from disk.
    LoadFromFile {
        /// File to read (None = the universe's configured load path).
        #[serde(default)]
        path: Option<PathBuf>,
    },
    /// Explicit `height x width` matrix of 0/1 bytes.
    LoadFromMatrix {
        /// Rows, top to bottom.
        matrix: Vec<Vec<u8>>,
    },
    /// Any seed type this build does not know about.
    #[serde(other)]
    Unsupported,
}

impl Seed {
    /// Matrix seed holding a Gosper glider gun in a 40x40 field.
    pub fn gosper_glider_gun() -> Self {
        let cells = GOSPER_GLIDER_GUN.offset(1, 1);
        Seed::LoadFromMatrix {
            matrix: matrix_from_cells(GOSPER_MATRIX_SIZE, GOSPER_MATRIX_SIZE, &cells),
        }
    }

    /// Short name used in log output and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Seed::Random => "Random",
            Seed::FivePoint => "FivePoint",
            Seed::TenCellRow => "TenCellRow",
            Seed::LoadFromFile { .. } => "LoadFromFile",
            Seed::LoadFromMatrix { .. } => "LoadFromMatrix",
            Seed::Unsupported => "Unsupported",
        }
    }
}

/// Seeding failures.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("{seed} seed does not fit in a {width}x{height} grid")]
    OutOfBounds {
        seed: &'static str,
        width: usize,
        height: usize,
    },
    #[error("Matrix size does not match the grid: expected {expected}, found {found}")]
    MatrixDimensions { expected: String, found: String },
    #[error("Matrix cell {index} holds {value}, expected 0 or 1")]
    InvalidCell { index: usize, value: u8 },
    #[error("LoadFromFile seed has no path and no load path is configured")]
    MissingPath,
    #[error("Unsupported seed type")]
    Unsupported,
}
