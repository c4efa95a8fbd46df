//! Canvas layout arithmetic.
//!
//! All sizes are derived from the same constants so grid sizing, symbol
//! placement, and legend sizing can never disagree.

/// Outer margin around the whole canvas.
pub const CANVAS_MARGIN: u32 = 10;
/// Side length of one grid cell.
pub const GRID_SIZE: u32 = 14;
/// Inset from the cell edge to the glyph drawing area.
pub const GLYPH_PADDING: u32 = 4;
/// Stroke thickness for glyph bars and outlines.
pub const GLYPH_THICKNESS: u32 = 2;
/// Thickness of the grid separator lines.
pub const GRID_BORDER: u32 = 1;
/// Gap between the grid region and the legend column.
pub const LEGEND_LEFT_MARGIN: u32 = 20;
/// Gap between a legend swatch and its text, and between legend rows.
pub const LEGEND_MARGIN: u32 = 10;
/// Horizontal budget reserved for legend text.
pub const LEGEND_TEXT_WIDTH: u32 = 200;

/// Computed placement for one generation run.
///
/// `grid_w`/`grid_h` are the source image dimensions in cells;
/// `colour_count` is the number of assignment-table entries, which drives
/// the legend-side height bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    grid_w: u32,
    grid_h: u32,
    colour_count: u32,
}

impl Layout {
    pub fn new(grid_w: u32, grid_h: u32, colour_count: u32) -> Self {
        Self {
            grid_w,
            grid_h,
            colour_count,
        }
    }

    /// Width of the grid region in pixels, separator lines included.
    pub fn grid_pixel_width(&self) -> u32 {
        GRID_SIZE * self.grid_w + GRID_BORDER * (self.grid_w + 1)
    }

    /// Height of the grid region in pixels, separator lines included.
    pub fn grid_pixel_height(&self) -> u32 {
        GRID_SIZE * self.grid_h + GRID_BORDER * (self.grid_h + 1)
    }

    /// Fixed width of the legend column (swatch + margins + text budget).
    pub fn legend_pixel_width(&self) -> u32 {
        GRID_SIZE + LEGEND_LEFT_MARGIN + LEGEND_MARGIN + LEGEND_TEXT_WIDTH
    }

    /// Total canvas width.
    pub fn canvas_width(&self) -> u32 {
        2 * CANVAS_MARGIN + self.grid_pixel_width() + self.legend_pixel_width()
    }

    /// Total canvas height: the grid-driven and legend-driven minimums,
    /// whichever is taller, so neither is clipped.
    pub fn canvas_height(&self) -> u32 {
        let grid_driven = 2 * CANVAS_MARGIN + self.grid_pixel_height();
        let legend_driven =
            2 * CANVAS_MARGIN + (self.colour_count + 1) * GRID_SIZE + self.colour_count * GRID_SIZE;
        grid_driven.max(legend_driven)
    }

    /// Top-left pixel of the grid cell at `(x, y)`, inside its borders.
    pub fn cell_origin(&self, x: u32, y: u32) -> (u32, u32) {
        (
            CANVAS_MARGIN + GRID_BORDER + (GRID_SIZE + GRID_BORDER) * x,
            CANVAS_MARGIN + GRID_BORDER + (GRID_SIZE + GRID_BORDER) * y,
        )
    }

    /// Left edge of the legend column.
    pub fn legend_left(&self) -> u32 {
        CANVAS_MARGIN + self.grid_pixel_width() + LEGEND_LEFT_MARGIN
    }

    /// Top-left pixel of the legend swatch for `row`.
    pub fn legend_row_origin(&self, row: u32) -> (u32, u32) {
        (
            self.legend_left(),
            CANVAS_MARGIN + (GRID_SIZE + LEGEND_MARGIN) * row,
        )
    }

    /// Source grid width in cells.
    pub fn grid_w(&self) -> u32 {
        self.grid_w
    }

    /// Source grid height in cells.
    pub fn grid_h(&self) -> u32 {
        self.grid_h
    }
}
