//! Transition rule for Conway's Game of Life (B3/S23).
//!
//! A live cell survives with two or three live neighbors; a dead cell is born
//! with exactly three. Everything else is dead in the next generation.

use super::grid::{ALIVE, DEAD, Grid};

/// Next state of a single cell given its current state and live neighbor count.
#[inline]
pub fn next_state(current: u8, live_neighbors: u8) -> u8 {
    match (current == ALIVE, live_neighbors) {
        (true, 2) | (true, 3) => ALIVE,
        (false, 3) => ALIVE,
        _ => DEAD,
    }
}

/// Compute the next generation of `current` into `next`.
///
/// Every neighbor count reads `current`; `next` is only written.
pub fn step_into(current: &Grid, next: &mut Grid) {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    for row in 0..current.height() {
        for col in 0..current.width() {
            let state = next_state(current.get(col, row), current.live_neighbors(col, row));
            next.set(col, row, state == ALIVE);
        }
    }
}

/// Compute the next generation of `current` as a new grid.
pub fn step(current: &Grid) -> Grid {
    let mut next = Grid::new(current.width(), current.height());
    step_into(current, &mut next);
    next
}
