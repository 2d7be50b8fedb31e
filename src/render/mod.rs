//! Display and pacing collaborators for the run loop.
//!
//! The universe draws through a [`Renderer`] once per frame and waits on a
//! [`Clock`] between generations. Neither keeps a reference to the grid
//! after the call returns.

mod clock;
mod text;

pub use clock::{Clock, NoopClock, SleepClock};
pub use text::{ALIVE_GLYPH, CLEAR_SCREEN, DEAD_GLYPH, TextRenderer};

use std::io;

use crate::compute::Grid;

/// Produces one visual frame per call.
pub trait Renderer {
    /// Draw `grid`, replacing whatever the previous frame showed.
    fn draw_frame(&mut self, grid: &Grid) -> io::Result<()>;
}

/// Renderer that draws nothing, for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_frame(&mut self, _grid: &Grid) -> io::Result<()> {
        Ok(())
    }
}
