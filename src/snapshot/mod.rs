//! Grid snapshots on disk.
//!
//! # File Format
//!
//! A snapshot is a bare dump of the grid buffer with no header:
//!
//! ```text
//! width * height bytes, row-major (index = row * width + col)
//! each byte: 0 = dead, 1 = alive
//! ```
//!
//! The file does not record its dimensions, so a reader must use the same
//! `width x height` as the writer. Reads check the length and every byte
//! before touching the grid.

mod file;
mod format;

pub use file::{read_snapshot, write_snapshot};
pub use format::{SnapshotError, decode_cells, validate_cells};
