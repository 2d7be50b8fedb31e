//! Built-in patterns, stored as live-cell `(col, row)` coordinates.

/// A named set of live cells.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    /// Live cells as `(col, row)`.
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Smallest `(width, height)` that contains every cell.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(w, h), &(c, r)| {
            (w.max(c + 1), h.max(r + 1))
        })
    }

    /// Same pattern moved by `(dc, dr)`.
    pub fn offset(&self, dc: usize, dr: usize) -> Vec<(usize, usize)> {
        self.cells.iter().map(|&(c, r)| (c + dc, r + dr)).collect()
    }
}

/// 2x2 still life.
pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

/// Period-2 oscillator, vertical phase.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(1, 0), (1, 1), (1, 2)],
};

/// The shape placed by `Seed::FivePoint`.
pub const FIVE_POINT: Pattern = Pattern {
    name: "FivePoint",
    cells: &[(1, 2), (2, 3), (3, 3), (3, 2), (3, 1)],
};

/// Gosper glider gun (36x9), emits a glider every 30 generations.
pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "GosperGliderGun",
    cells: &[
        (24, 0),
        (22, 1), (24, 1),
        (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
        (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
        (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
        (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
        (10, 6), (16, 6), (24, 6),
        (11, 7), (15, 7),
        (12, 8), (13, 8),
    ],
};

/// Side length of the square matrix `Seed::gosper_glider_gun` builds.
pub const GOSPER_MATRIX_SIZE: usize = 40;

/// Build a `height x width` 0/1 matrix with the given cells alive.
///
/// Cells outside the matrix are ignored.
pub fn matrix_from_cells(width: usize, height: usize, cells: &[(usize, usize)]) -> Vec<Vec<u8>> {
    let mut matrix = vec![vec![0u8; width]; height];
    for &(c, r) in cells {
        if r < height && c < width {
            matrix[r][c] = 1;
        }
    }
    matrix
}
