//! Reading and writing grid dumps on disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::format::{SnapshotError, decode_cells};
use crate::compute::Grid;

/// Write the grid's cells to `path`, replacing any existing file.
pub fn write_snapshot<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    let io_err = |source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(grid.cells()).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    log::debug!("Stored {} cells to {}", grid.len(), path.display());
    Ok(())
}

/// Read a dump from `path` into `grid`.
///
/// The file must hold exactly `grid.len()` bytes of 0/1. On any failure the
/// grid is left untouched.
pub fn read_snapshot<P: AsRef<Path>>(path: P, grid: &mut Grid) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let cells = decode_cells(&bytes, grid.len())?;
    grid.copy_from(cells);

    log::debug!("Loaded {} cells from {}", grid.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_snapshot_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grid.bin");

        let mut grid = Grid::new(6, 4);
        grid.set(0, 0, true);
        grid.set(5, 3, true);
        grid.set(2, 1, true);
        write_snapshot(&path, &grid).unwrap();

        assert_eq!(fs::metadata(&path).unwrap().len(), 24);

        let mut loaded = Grid::new(6, 4);
        read_snapshot(&path, &mut loaded).unwrap();
        assert_eq!(loaded, grid);
    }

    #[test]
    fn test_missing_file_leaves_grid() {
        let dir = tempdir().unwrap();
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, true);
        let before = grid.clone();

        let err = read_snapshot(dir.path().join("absent.bin"), &mut grid).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_wrong_dimensions_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("small.bin");
        write_snapshot(&path, &Grid::new(4, 4)).unwrap();

        let mut grid = Grid::new(5, 4);
        let err = read_snapshot(&path, &mut grid).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::Length {
                expected: 20,
                found: 16
            }
        ));
    }

    #[test]
    fn test_corrupt_bytes_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corrupt.bin");
        fs::write(&path, [0u8, 1, 7, 0]).unwrap();

        let mut grid = Grid::new(2, 2);
        let err = read_snapshot(&path, &mut grid).unwrap_err();
        assert!(matches!(err, SnapshotError::InvalidCell { index: 2, value: 7 }));
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("grid.bin");
        let err = write_snapshot(&path, &Grid::new(2, 2)).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }
}
