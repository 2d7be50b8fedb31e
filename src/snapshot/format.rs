//! Raw grid dump: `width * height` bytes, row-major, one byte per cell.

use std::io;
use std::path::PathBuf;

use crate::compute::{ALIVE, DEAD};

/// Snapshot read/write failures.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Unable to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Snapshot size mismatch: expected {expected} bytes, found {found}")]
    Length { expected: usize, found: usize },
    #[error("Snapshot byte {index} holds {value}, expected 0 or 1")]
    InvalidCell { index: usize, value: u8 },
}

/// Check that every byte is a valid cell state.
pub fn validate_cells(bytes: &[u8]) -> Result<(), SnapshotError> {
    match bytes.iter().position(|&b| b != DEAD && b != ALIVE) {
        Some(index) => Err(SnapshotError::InvalidCell {
            index,
            value: bytes[index],
        }),
        None => Ok(()),
    }
}

/// Validate raw bytes as a grid of `expected` cells.
pub fn decode_cells(bytes: &[u8], expected: usize) -> Result<&[u8], SnapshotError> {
    if bytes.len() != expected {
        return Err(SnapshotError::Length {
            expected,
            found: bytes.len(),
        });
    }
    validate_cells(bytes)?;
    Ok(bytes)
}
