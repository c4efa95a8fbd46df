//! Nearest-thread-colour matching.

use crate::types::{Colour, Palette};

use super::ColourAssignment;

/// Perceptual distance between two colours.
///
/// A "redmean" weighted Euclidean metric: the red and blue weights shift
/// with the average red level so the result tracks perceived difference
/// better than plain RGB distance. Alpha is ignored. Symmetric, and zero
/// for identical RGB values.
pub fn colour_distance(a: Colour, b: Colour) -> f64 {
    let rmean = (i32::from(a.r) + i32::from(b.r)) / 2;
    let dr = i32::from(a.r) - i32::from(b.r);
    let dg = i32::from(a.g) - i32::from(b.g);
    let db = i32::from(a.b) - i32::from(b.b);

    let sum = (((512 + rmean) * dr * dr) >> 8) + 4 * dg * dg + (((767 - rmean) * db * db) >> 8);
    f64::from(sum).sqrt()
}

/// Find the palette entry nearest to `colour`.
///
/// Linear scan over the whole palette; on exact distance ties the
/// first-encountered entry wins, so palette order is a deterministic
/// tie-break. The `pattern_hint` is carried verbatim as the assignment's
/// pattern index; the assignment builder replaces it when it discovers the
/// matched entry was already assigned.
///
/// The palette must be non-empty. [`Palette`](crate::types::Palette)
/// guarantees this at load time.
pub fn nearest_entry(colour: Colour, palette: &Palette, pattern_hint: usize) -> ColourAssignment {
    let mut best = &palette.entries()[0];
    let mut best_distance = colour_distance(colour, best.colour());

    for entry in &palette.entries()[1..] {
        let distance = colour_distance(colour, entry.colour());
        if distance < best_distance {
            best = entry;
            best_distance = distance;
        }
    }

    ColourAssignment {
        entry: best.clone(),
        pattern_index: pattern_hint,
    }
}
