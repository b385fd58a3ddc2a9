//! Glyph lookup for OpenType fonts through their `cmap` table.

use std::{
    collections::HashMap,
    fmt::{self, Debug},
    path::{Path, PathBuf},
};

use skrifa::{charmap::Charmap, raw::FontRef};

use crate::{
    error::FontError,
    font::{FontLoader, GlyphId, GlyphSource, MISSING_GLYPH},
};

/// Symbol cmaps put their characters in the private use area starting here
const SYMBOL_BASE: u32 = 0xF000;

/// Loads OpenType (`.otf`/`.ttf`) fonts. The cmap lives in the font itself, so the metrics file
/// is not read.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenTypeLoader;
impl FontLoader for OpenTypeLoader {
    fn load(
        &self,
        font_file: &Path,
        _metrics_file: &Path,
    ) -> Result<Box<dyn GlyphSource>, FontError> {
        let data = std::fs::read(font_file).map_err(|err| FontError::Io {
            path: font_file.to_path_buf(),
            message: err.to_string(),
        })?;
        let glyphs = OpenTypeGlyphs::new(font_file.to_path_buf(), &data)?;
        Ok(Box::new(glyphs))
    }
}

/// The cmap of a font, read once into a map from codepoint to glyph id
#[derive(Clone)]
pub struct OpenTypeGlyphs {
    path: PathBuf,
    glyphs: HashMap<u32, GlyphId>,
    is_symbol: bool,
}
impl OpenTypeGlyphs {
    pub fn new(path: PathBuf, data: &[u8]) -> Result<OpenTypeGlyphs, FontError> {
        let font = match FontRef::new(data) {
            Ok(font) => font,
            Err(err) => {
                return Err(FontError::Parse {
                    path,
                    message: err.to_string(),
                })
            }
        };

        let charmap = Charmap::new(&font);
        if !charmap.has_map() {
            log::warn!("font {} has no usable cmap subtable", path.display());
        }
        let glyphs: HashMap<u32, GlyphId> = charmap
            .mappings()
            .map(|(code, glyph)| (code, glyph.to_u32()))
            .collect();
        log::debug!("read {} cmap entries from {}", glyphs.len(), path.display());

        Ok(OpenTypeGlyphs {
            path,
            glyphs,
            is_symbol: charmap.is_symbol(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of characters the font has glyphs for
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
impl GlyphSource for OpenTypeGlyphs {
    fn glyph_id(&self, ch: char) -> GlyphId {
        let code = ch as u32;
        if let Some(glyph) = self.glyphs.get(&code) {
            return *glyph;
        }
        if self.is_symbol && code <= 0xFF {
            if let Some(glyph) = self.glyphs.get(&(code + SYMBOL_BASE)) {
                return *glyph;
            }
        }
        MISSING_GLYPH
    }
}
impl Debug for OpenTypeGlyphs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenTypeGlyphs")
            .field("path", &self.path)
            .field("len", &self.glyphs.len())
            .field("is_symbol", &self.is_symbol)
            .finish()
    }
}
