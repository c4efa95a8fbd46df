//! Canvas composition: grid, symbols, legend, and PNG I/O.

mod canvas;
mod glyph;
pub mod layout;
mod legend;
mod png;
mod text;

pub use canvas::Canvas;
pub use glyph::{draw_symbol, highlight_for, Glyph};
pub use layout::Layout;
pub use legend::draw_legend;
pub use png::{open_image, write_png};
pub use text::{FontText, NullText, TextRenderer};

use image::RgbaImage;

use crate::plan::build_assignments;
use crate::types::{Colour, Palette};

/// A composed pattern image plus any non-fatal composition warnings.
#[derive(Debug)]
pub struct PlanImage {
    pub image: RgbaImage,
    /// Legend rows whose text could not be rendered.
    pub warnings: Vec<String>,
}

/// Generate the full cross-stitch pattern for a source image.
///
/// Builds the colour assignment table, sizes and grids the canvas, stamps
/// every opaque pixel's cell with its thread colour and glyph, and draws
/// the legend. The call owns all mutable state; palette and text renderer
/// are shared read-only, so concurrent calls never interfere.
///
/// Callers are responsible for bounding the input size (the CLI caps it at
/// 128x128) and for supplying a non-empty palette.
pub fn generate_plan(source: &RgbaImage, palette: &Palette, text: &dyn TextRenderer) -> PlanImage {
    let table = build_assignments(source, palette);
    let layout = Layout::new(source.width(), source.height(), table.len() as u32);

    let mut canvas = Canvas::new(&layout);
    canvas.draw_grid(&layout);

    for y in 0..source.height() {
        for x in 0..source.width() {
            let colour = Colour::from(*source.get_pixel(x, y));
            if colour.is_transparent() {
                continue;
            }
            if let Some(assignment) = table.get(colour) {
                let (px, py) = layout.cell_origin(x, y);
                draw_symbol(&mut canvas, assignment, px, py);
            }
        }
    }

    let warnings = draw_legend(&mut canvas, &layout, &table, text);

    PlanImage {
        image: canvas.into_image(),
        warnings,
    }
}
