//! Thread palettes: ordered lists of named colours with vendor codes.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StitchError};

use super::Colour;

/// Embedded DMC thread palette, shipped with the binary.
const DMC_JSON: &str = include_str!("../../palettes/dmc.json");

/// One thread colour: vendor code, display name, and RGB value.
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteEntry {
    pub code: String,
    pub name: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PaletteEntry {
    /// The entry's colour as an opaque [`Colour`].
    pub fn colour(&self) -> Colour {
        Colour::rgb(self.r, self.g, self.b)
    }

    /// Compare entries by RGB value only. Two codes that share an RGB value
    /// collapse to one assignment during deduplication.
    pub fn same_colour(&self, other: &PaletteEntry) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

/// An ordered, non-empty collection of palette entries.
///
/// Order matters for matching ties (the first entry at minimum distance
/// wins), so entries are kept in file order. Code uniqueness is assumed
/// from the palette source and not enforced here.
#[derive(Debug, Clone)]
pub struct Palette {
    name: String,
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Parse a palette from a JSON array of `{code, name, r, g, b}` records.
    ///
    /// An empty palette is rejected here so the matcher can assume at least
    /// one entry exists.
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self> {
        let entries: Vec<PaletteEntry> =
            serde_json::from_str(json).map_err(|e| StitchError::Parse {
                message: format!("Invalid palette JSON: {}", e),
                help: Some(
                    "Expected an array of {\"code\", \"name\", \"r\", \"g\", \"b\"} records"
                        .to_string(),
                ),
            })?;

        if entries.is_empty() {
            return Err(StitchError::Validation {
                message: "Palette contains no colours".to_string(),
                help: Some("Add at least one thread colour to the palette file".to_string()),
            });
        }

        Ok(Self {
            name: name.into(),
            entries,
        })
    }

    /// Load a palette from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| StitchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read palette: {}", e),
        })?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("palette")
            .to_string();

        Self::from_json(name, &json)
    }

    /// The builtin DMC thread palette.
    pub fn dmc() -> Result<Self> {
        Self::from_json("dmc", DMC_JSON)
    }

    /// Palette name (file stem or builtin name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in palette order.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries. Always false for a palette that
    /// came through [`Palette::from_json`].
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, name: &str, r: u8, g: u8, b: u8) -> PaletteEntry {
        PaletteEntry {
            code: code.to_string(),
            name: name.to_string(),
            r,
            g,
            b,
        }
    }

    #[test]
    fn test_from_json() {
        let palette = Palette::from_json(
            "test",
            r#"[{"code": "310", "name": "Black", "r": 0, "g": 0, "b": 0}]"#,
        )
        .unwrap();

        assert_eq!(palette.len(), 1);
        assert_eq!(palette.entries()[0].code, "310");
        assert_eq!(palette.entries()[0].colour(), Colour::BLACK);
    }

    #[test]
    fn test_from_json_empty_rejected() {
        let result = Palette::from_json("test", "[]");
        assert!(matches!(result, Err(StitchError::Validation { .. })));
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Palette::from_json("test", "not json").is_err());
        assert!(Palette::from_json("test", r#"[{"code": "1"}]"#).is_err());
    }

    #[test]
    fn test_builtin_dmc() {
        let palette = Palette::dmc().unwrap();
        assert!(!palette.is_empty());
        assert_eq!(palette.name(), "dmc");
        // The builtin set carries non-numeric codes
        assert!(palette.entries().iter().any(|e| e.code == "Blanc"));
        assert!(palette.entries().iter().any(|e| e.code == "310"));
    }

    #[test]
    fn test_same_colour_ignores_code() {
        let a = entry("1", "One", 10, 20, 30);
        let b = entry("2", "Two", 10, 20, 30);
        let c = entry("1", "One", 10, 20, 31);
        assert!(a.same_colour(&b));
        assert!(!a.same_colour(&c));
    }
}
