//! Text drawing capability for legend labels.
//!
//! The composer depends on this trait rather than on a font directly, so
//! text output can be stubbed in tests and degraded gracefully when no
//! usable font is available.

use std::fs;
use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use imageproc::drawing::draw_text_mut;

use crate::error::{Result, StitchError};
use crate::types::Colour;

use super::canvas::Canvas;

/// Legend text size in pixels (16pt at 72 DPI).
const FONT_SIZE: f32 = 16.0;

/// Draws legend text onto the canvas.
pub trait TextRenderer {
    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_text(&self, canvas: &mut Canvas, x: i32, y: i32, text: &str) -> Result<()>;
}

/// Renders text with a loaded TTF/OTF font.
pub struct FontText {
    font: FontVec,
    scale: PxScale,
}

impl FontText {
    /// Parse a font from raw bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let font = FontVec::try_from_vec(bytes).map_err(|e| StitchError::Parse {
            message: format!("Invalid font: {}", e),
            help: Some("The font must be a TTF or OTF file".to_string()),
        })?;
        Ok(Self {
            font,
            scale: PxScale::from(FONT_SIZE),
        })
    }

    /// Load a font from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| StitchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read font: {}", e),
        })?;
        Self::from_bytes(bytes)
    }
}

impl TextRenderer for FontText {
    fn draw_text(&self, canvas: &mut Canvas, x: i32, y: i32, text: &str) -> Result<()> {
        draw_text_mut(
            canvas.image_mut(),
            Colour::BLACK.into(),
            x,
            y,
            self.scale,
            &self.font,
            text,
        );
        Ok(())
    }
}

/// Renderer used when no font could be loaded: every draw reports failure,
/// which the legend turns into a warning while layout continues.
pub struct NullText;

impl TextRenderer for NullText {
    fn draw_text(&self, _canvas: &mut Canvas, _x: i32, _y: i32, _text: &str) -> Result<()> {
        Err(StitchError::Render {
            message: "no font loaded".to_string(),
        })
    }
}
