//! Legend composition: one row per thread code used by the pattern.

use std::collections::HashMap;

use crate::plan::{AssignmentTable, ColourAssignment};

use super::canvas::Canvas;
use super::glyph::draw_symbol;
use super::layout::{Layout, GRID_SIZE, LEGEND_MARGIN};
use super::text::TextRenderer;

/// Sort key for thread codes: the code parsed as an integer.
///
/// Non-numeric codes (Blanc, Ecru, B5200) parse as 0 and therefore sort
/// before every numeric code. Kept as observed behaviour of the original
/// renderer rather than corrected.
fn code_sort_key(code: &str) -> i64 {
    code.parse().unwrap_or(0)
}

/// Draw the legend beside the grid.
///
/// Collects one representative assignment per distinct thread code (source
/// colours sharing a code were already collapsed to one assignment), sorts
/// rows by numeric code, and draws each row's glyph swatch followed by
/// `"<code>: <name>"`.
///
/// Text failures do not abort composition: the affected row keeps its
/// swatch, the failure is returned as a warning, and layout advances
/// normally.
pub fn draw_legend(
    canvas: &mut Canvas,
    layout: &Layout,
    table: &AssignmentTable,
    text: &dyn TextRenderer,
) -> Vec<String> {
    let mut by_code: HashMap<&str, &ColourAssignment> = HashMap::new();
    for (_, assignment) in table.iter() {
        by_code.insert(assignment.entry.code.as_str(), assignment);
    }

    let mut codes: Vec<&str> = by_code.keys().copied().collect();
    codes.sort_by_key(|code| code_sort_key(code));

    let mut warnings = Vec::new();

    for (row, code) in codes.iter().enumerate() {
        let assignment = by_code[code];
        let (x, y) = layout.legend_row_origin(row as u32);

        draw_symbol(canvas, assignment, x, y);

        let label = format!("{}: {}", assignment.entry.code, assignment.entry.name);
        let text_x = (x + GRID_SIZE + LEGEND_MARGIN) as i32;
        if let Err(e) = text.draw_text(canvas, text_x, y as i32, &label) {
            warnings.push(format!("Rendering legend text for {} failed: {}", code, e));
        }
    }

    warnings
}
