//! Symbol glyphs stamped into grid cells.

use crate::plan::ColourAssignment;
use crate::types::Colour;

use super::canvas::Canvas;
use super::layout::{GLYPH_PADDING, GLYPH_THICKNESS, GRID_SIZE};

/// The fixed glyph alphabet. Palettes regularly use more than six colours,
/// so pattern indices cycle through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Solid,
    Cross,
    OpenBox,
    VerticalBar,
    HorizontalBar,
    Corner,
}

impl Glyph {
    /// Map a pattern index to its glyph, cycling modulo the alphabet size.
    pub fn from_index(index: usize) -> Self {
        match index % 6 {
            0 => Glyph::Solid,
            1 => Glyph::Cross,
            2 => Glyph::OpenBox,
            3 => Glyph::VerticalBar,
            4 => Glyph::HorizontalBar,
            _ => Glyph::Corner,
        }
    }
}

/// Highlight colour for a glyph over the given fill: black on light fills,
/// white on dark ones, switching at a perceived luminance of 128.
pub fn highlight_for(fill: Colour) -> Colour {
    if fill.luminance() >= 128.0 {
        Colour::BLACK
    } else {
        Colour::WHITE
    }
}

/// Stamp one cell at `(x, y)`: fill it with the assignment's thread colour,
/// then draw its glyph in the contrasting highlight colour.
///
/// Glyph geometry lives inside the cell inset by [`GLYPH_PADDING`]; centred
/// bars sit `(cell - thickness)/2` from the cell edge. The open box and
/// corner are drawn by overpainting the highlight fill with the thread
/// colour; the overpaint deliberately runs to the inset's right edge (and
/// bottom edge, for the corner), reproducing the original renderer's
/// geometry pixel for pixel.
pub fn draw_symbol(canvas: &mut Canvas, assignment: &ColourAssignment, x: u32, y: u32) {
    let fill = assignment.entry.colour();
    let highlight = highlight_for(fill);

    canvas.fill_rect(x, y, GRID_SIZE, GRID_SIZE, fill);

    let ix = x + GLYPH_PADDING;
    let iy = y + GLYPH_PADDING;
    let inset = GRID_SIZE - 2 * GLYPH_PADDING;
    let mid = (GRID_SIZE - GLYPH_THICKNESS) / 2 - GLYPH_PADDING;

    match Glyph::from_index(assignment.pattern_index) {
        Glyph::Solid => {
            canvas.fill_rect(ix, iy, inset, inset, highlight);
        }
        Glyph::Cross => {
            canvas.fill_rect(ix + mid, iy, GLYPH_THICKNESS, inset, highlight);
            canvas.fill_rect(ix, iy + mid, inset, inset - 2 * mid, highlight);
        }
        Glyph::OpenBox => {
            canvas.fill_rect(ix, iy, inset, inset, highlight);
            canvas.fill_rect(
                ix + GLYPH_THICKNESS,
                iy + GLYPH_THICKNESS,
                inset - GLYPH_THICKNESS,
                inset - 2 * GLYPH_THICKNESS,
                fill,
            );
        }
        Glyph::VerticalBar => {
            canvas.fill_rect(ix + mid, iy, GLYPH_THICKNESS, inset, highlight);
        }
        Glyph::HorizontalBar => {
            canvas.fill_rect(ix, iy + mid, inset, GLYPH_THICKNESS, highlight);
        }
        Glyph::Corner => {
            canvas.fill_rect(ix, iy, inset, inset, highlight);
            canvas.fill_rect(
                ix + GLYPH_THICKNESS,
                iy + GLYPH_THICKNESS,
                inset - GLYPH_THICKNESS,
                inset - GLYPH_THICKNESS,
                fill,
            );
        }
    }
}
