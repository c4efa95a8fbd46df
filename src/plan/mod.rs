//! Pattern planning: palette matching and colour-to-symbol assignment.
//!
//! This stage decides, for every opaque source colour, which thread colour
//! represents it and which symbol marks it on the grid. Rendering consumes
//! the resulting [`AssignmentTable`] without touching the palette again.

mod assignment;
mod matcher;

pub use assignment::{build_assignments, AssignmentTable, ColourAssignment};
pub use matcher::{colour_distance, nearest_entry};
