//! Loaded fonts and the services used to read glyphs out of them.

use std::{
    collections::HashMap,
    fmt::Debug,
    path::{Path, PathBuf},
};

use crate::error::FontError;

/// Index of a glyph within its font
pub type GlyphId = u32;

/// The glyph fonts use for characters they don't have
pub const MISSING_GLYPH: GlyphId = 0;

/// Identifier given to each font a [`FontContext`](crate::context::FontContext) loads.
/// Ids count up from zero and are never reused.
pub type FontId = u32;

/// Answers which glyph a font uses for a character.
pub trait GlyphSource: Debug + Send + Sync {
    /// Returns [`MISSING_GLYPH`] if the font doesn't have the character.
    fn glyph_id(&self, ch: char) -> GlyphId;
}

/// Opens fonts. The metrics file is whatever companion file the loader's font format needs.
pub trait FontLoader: Debug + Send + Sync {
    fn load(&self, font_file: &Path, metrics_file: &Path) -> Result<Box<dyn GlyphSource>, FontError>;
}

/// One font to load: the style (or version) it is registered under, the font file and its
/// metrics file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub name: String,
    pub font_file: PathBuf,
    pub metrics_file: PathBuf,
}
impl FontSpec {
    pub fn new(
        name: impl Into<String>,
        font_file: impl Into<PathBuf>,
        metrics_file: impl Into<PathBuf>,
    ) -> FontSpec {
        FontSpec {
            name: name.into(),
            font_file: font_file.into(),
            metrics_file: metrics_file.into(),
        }
    }
}

#[derive(Debug)]
pub struct OtfFont {
    id: FontId,
    font_file: PathBuf,
    metrics_file: PathBuf,
    glyphs: Box<dyn GlyphSource>,
}
impl OtfFont {
    pub(crate) fn new(
        id: FontId,
        font_file: PathBuf,
        metrics_file: PathBuf,
        glyphs: Box<dyn GlyphSource>,
    ) -> OtfFont {
        OtfFont {
            id,
            font_file,
            metrics_file,
            glyphs,
        }
    }

    pub fn id(&self) -> FontId {
        self.id
    }

    pub fn font_file(&self) -> &Path {
        &self.font_file
    }

    pub fn metrics_file(&self) -> &Path {
        &self.metrics_file
    }

    pub fn glyph_id(&self, ch: char) -> GlyphId {
        self.glyphs.glyph_id(ch)
    }
}

/// The fonts used for text, keyed by style name. The empty style is the fallback for styles the
/// family doesn't have.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontFamily {
    styles: HashMap<String, FontId>,
}
impl FontFamily {
    pub fn new() -> FontFamily {
        FontFamily::default()
    }

    pub(crate) fn insert(&mut self, style: impl Into<String>, font: FontId) {
        self.styles.insert(style.into(), font);
    }

    pub fn get(&self, style: &str) -> Option<FontId> {
        self.styles.get(style).copied()
    }

    /// Get the font for the style, or the family's default font.
    pub fn get_or_default(&self, style: &str) -> Option<FontId> {
        self.get(style).or_else(|| self.get(""))
    }

    pub fn styles(&self) -> impl Iterator<Item = (&str, FontId)> {
        self.styles.iter().map(|(style, id)| (style.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// A resolved character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Char {
    /// The character as it was given
    pub code: char,
    /// The character after mapping it into its math alphabet. The same as `code` in text mode.
    pub display: char,
    pub font_id: FontId,
    pub glyph_id: GlyphId,
}
