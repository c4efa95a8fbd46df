//! Mutable pixel canvas for pattern composition.

use image::RgbaImage;
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::types::Colour;

use super::layout::{Layout, CANVAS_MARGIN, GRID_BORDER, GRID_SIZE};

/// The output pixel buffer, owned by one generation call.
///
/// Wraps an [`RgbaImage`] with the rectangle-fill primitive every drawing
/// routine is built from.
#[derive(Debug)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a canvas sized for `layout`, filled white.
    pub fn new(layout: &Layout) -> Self {
        let image = RgbaImage::new(layout.canvas_width(), layout.canvas_height());
        let mut canvas = Self { image };
        canvas.fill_rect(
            0,
            0,
            layout.canvas_width(),
            layout.canvas_height(),
            Colour::WHITE,
        );
        canvas
    }

    /// Fill an axis-aligned rectangle. Zero-sized rectangles are no-ops.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, colour: Colour) {
        if width == 0 || height == 0 {
            return;
        }
        draw_filled_rect_mut(
            &mut self.image,
            Rect::at(x as i32, y as i32).of_size(width, height),
            colour.into(),
        );
    }

    /// Draw the stitch grid: `w+1` vertical and `h+1` horizontal separator
    /// lines forming the cell lattice, offset by the canvas margin.
    pub fn draw_grid(&mut self, layout: &Layout) {
        let grid_w = layout.grid_pixel_width();
        let grid_h = layout.grid_pixel_height();

        for x in 0..=layout.grid_w() {
            let rx = CANVAS_MARGIN + (GRID_SIZE + GRID_BORDER) * x;
            self.fill_rect(rx, CANVAS_MARGIN, GRID_BORDER, grid_h, Colour::BLACK);
        }
        for y in 0..=layout.grid_h() {
            let ry = CANVAS_MARGIN + (GRID_SIZE + GRID_BORDER) * y;
            self.fill_rect(CANVAS_MARGIN, ry, grid_w, GRID_BORDER, Colour::BLACK);
        }
    }

    /// Read a pixel (for tests and assertions).
    pub fn get(&self, x: u32, y: u32) -> Colour {
        Colour::from(*self.image.get_pixel(x, y))
    }

    /// Mutable access to the underlying buffer, for text drawing.
    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    /// Hand the composed buffer back as the result image.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
