//! Core data types for pattern generation.

mod colour;
mod palette;

pub use colour::Colour;
pub use palette::{Palette, PaletteEntry};
