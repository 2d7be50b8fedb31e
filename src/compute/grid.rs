//! Flat row-major cell storage with toroidal neighbor lookup.

/// Cell state for a dead cell.
pub const DEAD: u8 = 0;
/// Cell state for a live cell.
pub const ALIVE: u8 = 1;

/// Offsets `(dc, dr)` of the eight Moore neighbors.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Rectangular grid of binary cells.
///
/// Cells are stored as `[row * width + col]`, each exactly `DEAD` or `ALIVE`.
/// The grid has no edges: lookups past the last column or row wrap around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create an all-dead grid. Both dimensions must be non-zero.
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        Self {
            cells: vec![DEAD; width * height],
            width,
            height,
        }
    }

    /// Grid width (columns).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height (rows).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert `(col, row)` to a flat index.
    #[inline]
    pub fn idx(&self, col: usize, row: usize) -> usize {
        row * self.width + col
    }

    /// Whether `(col, row)` lies inside the grid.
    #[inline]
    pub fn contains(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height
    }

    /// Raw cell bytes in row-major order.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Get the state at `(col, row)`.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> u8 {
        self.cells[self.idx(col, row)]
    }

    #[inline]
    pub fn is_alive(&self, col: usize, row: usize) -> bool {
        self.get(col, row) == ALIVE
    }

    /// Set `(col, row)` alive or dead.
    #[inline]
    pub fn set(&mut self, col: usize, row: usize, alive: bool) {
        let idx = self.idx(col, row);
        self.cells[idx] = if alive { ALIVE } else { DEAD };
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    /// Replace all cells. `cells` must already be validated to the grid size.
    pub(crate) fn copy_from(&mut self, cells: &[u8]) {
        self.cells.copy_from_slice(cells);
    }

    /// State at a possibly out-of-range coordinate, wrapped onto the torus.
    #[inline]
    pub fn get_wrapped(&self, col: isize, row: isize) -> u8 {
        let c = col.rem_euclid(self.width as isize) as usize;
        let r = row.rem_euclid(self.height as isize) as usize;
        self.get(c, r)
    }

    /// Number of live cells among the eight wrapped neighbors of `(col, row)`.
    pub fn live_neighbors(&self, col: usize, row: usize) -> u8 {
        let (col, row) = (col as isize, row as isize);
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dc, dr)| self.get_wrapped(col + dc, row + dr))
            .sum()
    }

    /// Count live cells in the whole grid.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == ALIVE).count()
    }

    /// Iterate over `(col, row)` of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == ALIVE)
            .map(move |(i, _)| (i % width, i / width))
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, u8> {
        self.cells.chunks(self.width)
    }
}
