//! Colour-to-symbol assignment over a whole image.

use std::collections::HashMap;

use image::RgbaImage;

use crate::types::{Colour, Palette, PaletteEntry};

use super::matcher::nearest_entry;

/// A source colour's resolved thread colour and symbol slot.
///
/// `pattern_index` selects the glyph drawn for this colour (modulo the
/// glyph alphabet size) and is shared by every source colour that resolved
/// to the same palette entry.
#[derive(Debug, Clone)]
pub struct ColourAssignment {
    pub entry: PaletteEntry,
    pub pattern_index: usize,
}

/// Map from exact source pixel colour (alpha included) to its assignment.
///
/// Built once per generation run and discarded with it. Every opaque colour
/// in the source image has exactly one entry; fully transparent pixels
/// never appear.
#[derive(Debug, Default)]
pub struct AssignmentTable {
    assignments: HashMap<Colour, ColourAssignment>,
}

impl AssignmentTable {
    /// Look up the assignment for an exact source colour.
    pub fn get(&self, colour: Colour) -> Option<&ColourAssignment> {
        self.assignments.get(&colour)
    }

    /// Whether a source colour has been assigned.
    pub fn contains(&self, colour: Colour) -> bool {
        self.assignments.contains_key(&colour)
    }

    /// Number of distinct source colours assigned.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no colours were assigned (fully transparent image).
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterate over all (source colour, assignment) pairs. Order is
    /// unspecified; the legend sorts by thread code itself.
    pub fn iter(&self) -> impl Iterator<Item = (&Colour, &ColourAssignment)> {
        self.assignments.iter()
    }

    /// Find an existing assignment whose matched entry has the same RGB
    /// value. Linear scan; see [`build_assignments`] for why that stays.
    fn find_by_entry(&self, entry: &PaletteEntry) -> Option<&ColourAssignment> {
        self.assignments
            .values()
            .find(|a| a.entry.same_colour(entry))
    }

    fn insert(&mut self, colour: Colour, assignment: ColourAssignment) {
        self.assignments.insert(colour, assignment);
    }
}

/// Assign every distinct opaque colour in `image` to a palette entry and a
/// pattern index.
///
/// Pixels are visited in raster order (row-major, top-to-bottom then
/// left-to-right), so pattern indices follow first appearance. When a new
/// source colour matches a palette entry that an earlier colour already
/// matched, the earlier assignment is reused wholesale and the index
/// counter does not advance: the symbol alphabet grows with distinct
/// *palette entries used*, not distinct source colours.
///
/// The dedup pass is a linear scan inside the pixel scan, quadratic in the
/// number of distinct colours. Inputs are capped at 128x128 upstream and
/// palette coarseness keeps the distinct count low, so this is fine; a
/// hash keyed on the entry would have to preserve the first-seen index
/// semantics to replace it.
pub fn build_assignments(image: &RgbaImage, palette: &Palette) -> AssignmentTable {
    let mut table = AssignmentTable::default();
    let mut next_index = 0usize;

    for y in 0..image.height() {
        for x in 0..image.width() {
            let colour = Colour::from(*image.get_pixel(x, y));
            if colour.is_transparent() {
                continue;
            }
            if table.contains(colour) {
                continue;
            }

            let candidate = nearest_entry(colour, palette, next_index);
            match table.find_by_entry(&candidate.entry) {
                Some(existing) => {
                    let shared = existing.clone();
                    table.insert(colour, shared);
                }
                None => {
                    table.insert(colour, candidate);
                    next_index += 1;
                }
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use image::Rgba;
    use pretty_assertions::assert_eq;

    use super::*;

    fn palette_json(entries: &[(&str, u8, u8, u8)]) -> Palette {
        let records: Vec<_> = entries
            .iter()
            .map(|(code, r, g, b)| {
                serde_json::json!({"code": code, "name": format!("Colour {}", code), "r": r, "g": g, "b": b})
            })
            .collect();
        Palette::from_json("test", &serde_json::to_string(&records).unwrap()).unwrap()
    }

    fn image_from_rows(rows: &[&[[u8; 4]]]) -> RgbaImage {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let mut img = RgbaImage::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, px) in row.iter().enumerate() {
                img.put_pixel(x as u32, y as u32, Rgba(*px));
            }
        }
        img
    }

    #[test]
    fn test_transparent_pixels_excluded() {
        let img = image_from_rows(&[&[[0, 0, 0, 0], [10, 10, 10, 255]]]);
        let palette = palette_json(&[("310", 0, 0, 0)]);

        let table = build_assignments(&img, &palette);

        assert_eq!(table.len(), 1);
        assert!(!table.contains(Colour::new(0, 0, 0, 0)));
        assert!(table.contains(Colour::new(10, 10, 10, 255)));
    }

    #[test]
    fn test_dedup_shares_pattern_index() {
        // Two distinct source colours, both nearest to the single black entry
        let img = image_from_rows(&[&[[10, 10, 10, 255], [20, 20, 20, 255]]]);
        let palette = palette_json(&[("310", 0, 0, 0), ("Blanc", 255, 255, 255)]);

        let table = build_assignments(&img, &palette);

        assert_eq!(table.len(), 2);
        let a = table.get(Colour::rgb(10, 10, 10)).unwrap();
        let b = table.get(Colour::rgb(20, 20, 20)).unwrap();
        assert_eq!(a.entry.code, "310");
        assert_eq!(b.entry.code, "310");
        assert_eq!(a.pattern_index, b.pattern_index);
    }

    #[test]
    fn test_pattern_index_counts_entries_not_colours() {
        // Four source colours collapsing onto two palette entries
        let img = image_from_rows(&[
            &[[10, 10, 10, 255], [20, 20, 20, 255]],
            &[[250, 250, 250, 255], [240, 240, 240, 255]],
        ]);
        let palette = palette_json(&[("310", 0, 0, 0), ("Blanc", 255, 255, 255)]);

        let table = build_assignments(&img, &palette);

        assert_eq!(table.len(), 4);
        let indices: HashSet<usize> = table.iter().map(|(_, a)| a.pattern_index).collect();
        assert_eq!(indices.len(), 2);
    }

    #[test]
    fn test_indices_follow_raster_order() {
        // Black appears first (top-left), white second
        let img = image_from_rows(&[
            &[[0, 0, 0, 255], [255, 255, 255, 255]],
            &[[255, 255, 255, 255], [0, 0, 0, 255]],
        ]);
        let palette = palette_json(&[("Blanc", 255, 255, 255), ("310", 0, 0, 0)]);

        let table = build_assignments(&img, &palette);

        assert_eq!(table.get(Colour::BLACK).unwrap().pattern_index, 0);
        assert_eq!(table.get(Colour::WHITE).unwrap().pattern_index, 1);
    }

    #[test]
    fn test_alpha_is_part_of_the_key() {
        // Same RGB at two alpha levels: two table entries, one shared assignment
        let img = image_from_rows(&[&[[30, 30, 30, 255], [30, 30, 30, 128]]]);
        let palette = palette_json(&[("310", 0, 0, 0)]);

        let table = build_assignments(&img, &palette);

        assert_eq!(table.len(), 2);
        let opaque = table.get(Colour::new(30, 30, 30, 255)).unwrap();
        let translucent = table.get(Colour::new(30, 30, 30, 128)).unwrap();
        assert_eq!(opaque.pattern_index, translucent.pattern_index);
    }

    #[test]
    fn test_fully_transparent_image() {
        let img = image_from_rows(&[&[[0, 0, 0, 0], [255, 0, 0, 0]]]);
        let palette = palette_json(&[("310", 0, 0, 0)]);

        let table = build_assignments(&img, &palette);
        assert!(table.is_empty());
    }
}
