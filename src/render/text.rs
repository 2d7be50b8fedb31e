//! Plain-text terminal renderer.

use std::io::{self, Write};

use super::Renderer;
use crate::compute::{ALIVE, Grid};

/// Glyph for a live cell.
pub const ALIVE_GLYPH: char = '*';
/// Glyph for a dead cell.
pub const DEAD_GLYPH: char = ' ';
/// ANSI sequence: clear screen, cursor to top-left.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Writes each frame as one line of glyphs per row.
pub struct TextRenderer<W: Write> {
    out: W,
    clear: bool,
    /// Reused line buffer.
    line: String,
}

impl<W: Write> TextRenderer<W> {
    /// Renderer that clears the terminal before each frame.
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear: true,
            line: String::new(),
        }
    }

    /// Renderer that appends frames without clearing.
    pub fn without_clear(out: W) -> Self {
        Self {
            clear: false,
            ..Self::new(out)
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw_frame(&mut self, grid: &Grid) -> io::Result<()> {
        if self.clear {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        for row in grid.rows() {
            self.line.clear();
            self.line.extend(
                row.iter()
                    .map(|&c| if c == ALIVE { ALIVE_GLYPH } else { DEAD_GLYPH }),
            );
            self.line.push('\n');
            self.out.write_all(self.line.as_bytes())?;
        }
        self.out.flush()
    }
}
