//! stitchplan - Cross-stitch pattern generator
//!
//! A library for turning small raster images into printable cross-stitch
//! patterns: every opaque pixel is matched to the nearest thread colour in
//! a palette, drawn as a symbol-filled grid cell, and listed in a legend
//! sorted by thread code.

pub mod cli;
pub mod error;
pub mod output;
pub mod plan;
pub mod render;
pub mod types;

pub use error::{Result, StitchError};
pub use plan::{build_assignments, colour_distance, nearest_entry, AssignmentTable, ColourAssignment};
pub use render::{
    generate_plan, write_png, Canvas, FontText, Glyph, Layout, NullText, PlanImage, TextRenderer,
};
pub use types::{Colour, Palette, PaletteEntry};
