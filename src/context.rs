//! The fonts and alphabets used to turn characters into glyphs.
//!
//! A [`FontContext`] is configured once, by registering fonts and selecting which ones are active,
//! and is then only read while resolving characters. Every loaded font stays in the context for
//! as long as it lives, even after the name it was registered under is given to another font, so
//! a [`FontId`] handed out earlier stays valid.

use std::{
    collections::{hash_map::Entry, HashMap},
    path::Path,
};

use crate::{
    alphabet::MathVersion,
    error::{FontError, ResolveError},
    font::{Char, FontFamily, FontId, FontLoader, FontSpec, OtfFont},
    symbols::{SymbolDictionary, SYMBOLS},
    version::{FontStyle, VersionRegistry, MATH_STYLES},
    Mode,
};

#[derive(Debug)]
pub struct FontContext {
    loader: Box<dyn FontLoader>,
    symbols: Box<dyn SymbolDictionary>,
    versions: VersionRegistry,
    /// Every font loaded, indexed by id
    fonts: Vec<OtfFont>,
    main_fonts: HashMap<String, FontFamily>,
    math_fonts: HashMap<String, FontId>,
    /// Copy of the family at the time it was selected
    main_font: Option<FontFamily>,
    math_font: Option<FontId>,
    /// Names last passed to the select functions, kept to report unregistered selections
    main_font_name: Option<String>,
    math_font_name: Option<String>,
}
impl FontContext {
    /// Create a context which loads its fonts with `loader` and looks up named symbols in the
    /// built in symbol table.
    pub fn new(loader: impl FontLoader + 'static) -> FontContext {
        FontContext::with_symbols(loader, &*SYMBOLS)
    }

    pub fn with_symbols(
        loader: impl FontLoader + 'static,
        symbols: impl SymbolDictionary + 'static,
    ) -> FontContext {
        FontContext {
            loader: Box::new(loader),
            symbols: Box::new(symbols),
            versions: VersionRegistry::new(),
            fonts: Vec::new(),
            main_fonts: HashMap::new(),
            math_fonts: HashMap::new(),
            main_font: None,
            math_font: None,
            main_font_name: None,
            math_font_name: None,
        }
    }

    fn load(&mut self, spec: &FontSpec) -> Result<FontId, FontError> {
        let id = next_font_id(self.fonts.len(), &spec.font_file)?;
        let glyphs = self.loader.load(&spec.font_file, &spec.metrics_file)?;
        log::debug!("loaded font {} from {}", id, spec.font_file.display());
        self.fonts.push(OtfFont::new(
            id,
            spec.font_file.clone(),
            spec.metrics_file.clone(),
            glyphs,
        ));
        Ok(id)
    }

    /// Load a family of text fonts, one for each spec with the spec's name as the style name,
    /// and register it as `version_name`, replacing any family already registered under it.
    ///
    /// If a font fails to load the family isn't registered, but the fonts loaded before it are
    /// kept.
    pub fn add_main_font(
        &mut self,
        version_name: impl Into<String>,
        specs: &[FontSpec],
    ) -> Result<&FontFamily, FontError> {
        let version_name = version_name.into();
        let mut family = FontFamily::new();
        for spec in specs {
            let id = self.load(spec)?;
            family.insert(spec.name.clone(), id);
        }

        let family = match self.main_fonts.entry(version_name) {
            Entry::Occupied(mut entry) => {
                log::debug!("replacing main font family {:?}", entry.key());
                entry.insert(family);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(family),
        };
        Ok(family)
    }

    /// Load a math font and register it as `spec.name`, replacing any math font already
    /// registered under that name.
    pub fn add_math_font(&mut self, spec: &FontSpec) -> Result<FontId, FontError> {
        let id = self.load(spec)?;
        if let Some(old) = self.math_fonts.insert(spec.name.clone(), id) {
            log::debug!(
                "math font {:?} is now font {}, replacing font {}",
                spec.name,
                id,
                old
            );
        }
        Ok(id)
    }

    /// Make the named style (`TeX`, `ISO`, `French` or `upright`) the default math alphabet.
    /// Unknown names are ignored. Returns whether the style existed.
    pub fn set_default_version(&mut self, style_name: &str) -> bool {
        self.versions.set_default_version(style_name)
    }

    /// Select the text font family. An unregistered name leaves no family selected.
    pub fn select_main_font(&mut self, version_name: &str) {
        self.main_font = self.main_fonts.get(version_name).cloned();
        self.main_font_name = Some(version_name.to_string());
        if self.main_font.is_none() {
            log::warn!("no main font family registered as {:?}", version_name);
        }
    }

    /// Select the math font. An unregistered name leaves no math font selected.
    pub fn select_math_font(&mut self, version_name: &str) {
        self.math_font = self.math_fonts.get(version_name).copied();
        self.math_font_name = Some(version_name.to_string());
        if self.math_font.is_none() {
            log::warn!("no math font registered as {:?}", version_name);
        }
    }

    /// Get a font by its id. Negative and out of range ids have no font.
    pub fn get_font(&self, id: i64) -> Option<&OtfFont> {
        usize::try_from(id).ok().and_then(|index| self.fonts.get(index))
    }

    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    pub fn versions(&self) -> &VersionRegistry {
        &self.versions
    }

    pub fn versions_mut(&mut self) -> &mut VersionRegistry {
        &mut self.versions
    }

    /// The math alphabet that `version_name` resolves to
    pub fn math_version(&self, version_name: &str) -> &MathVersion {
        self.versions.resolve(version_name)
    }

    pub fn version_names(&self) -> impl Iterator<Item = &str> {
        self.versions.names()
    }

    pub fn style_names(&self) -> impl Iterator<Item = &'static str> {
        MATH_STYLES.iter().map(|(name, _)| *name)
    }

    pub fn main_font_family(&self, version_name: &str) -> Option<&FontFamily> {
        self.main_fonts.get(version_name)
    }

    pub fn math_font_id(&self, version_name: &str) -> Option<FontId> {
        self.math_fonts.get(version_name).copied()
    }

    pub fn main_font_names(&self) -> impl Iterator<Item = &str> {
        self.main_fonts.keys().map(String::as_str)
    }

    pub fn math_font_names(&self) -> impl Iterator<Item = &str> {
        self.math_fonts.keys().map(String::as_str)
    }

    pub fn selected_main_font(&self) -> Option<&FontFamily> {
        self.main_font.as_ref()
    }

    pub fn selected_math_font(&self) -> Option<&OtfFont> {
        self.math_font.and_then(|id| self.fonts.get(id as usize))
    }

    fn make_char(&self, code: char, display: char, font: &OtfFont) -> Char {
        let glyph_id = font.glyph_id(display);
        log::trace!(
            "resolved {:?} as {:?} in font {}: glyph {}",
            code,
            display,
            font.id(),
            glyph_id
        );
        Char {
            code,
            display,
            font_id: font.id(),
            glyph_id,
        }
    }

    /// Resolve a character in math mode, mapping it into the alphabet of `version_name`.
    pub fn resolve_math(&self, code: char, version_name: &str) -> Result<Char, ResolveError> {
        let font = self
            .selected_math_font()
            .ok_or_else(|| ResolveError::NoMathFont {
                version: self.math_font_name.clone(),
            })?;
        let display = self.versions.resolve(version_name).map(code);
        Ok(self.make_char(code, display, font))
    }

    /// Resolve a character in text mode. Falls back on the family's default style, then on the
    /// math font. The character is never mapped into a math alphabet.
    pub fn resolve_text(&self, code: char, style_name: &str) -> Result<Char, ResolveError> {
        let font = self
            .main_font
            .as_ref()
            .and_then(|family| family.get_or_default(style_name))
            .or(self.math_font)
            .and_then(|id| self.fonts.get(id as usize))
            .ok_or_else(|| ResolveError::NoMainFont {
                style: style_name.to_string(),
                family: self.main_font_name.clone(),
            })?;
        Ok(self.make_char(code, code, font))
    }

    /// Resolve a character in the given mode. `name` is the version name in math mode and the
    /// style name in text mode.
    pub fn resolve(&self, code: char, name: &str, mode: Mode) -> Result<Char, ResolveError> {
        match mode {
            Mode::Math => self.resolve_math(code, name),
            Mode::Text => self.resolve_text(code, name),
        }
    }

    /// Resolve a character by font style rather than by version name.
    pub fn resolve_styled(
        &self,
        _code: char,
        _style: FontStyle,
        _mode: Mode,
    ) -> Result<Char, ResolveError> {
        Err(ResolveError::Unsupported("resolving characters by font style"))
    }

    /// Resolve a named symbol, such as `\alpha`, in the mode it is defined in.
    /// `name` is passed on as the version or style name.
    ///
    /// Symbols defined in both modes are an error, since there is no way to tell which mode is
    /// wanted.
    pub fn resolve_named(&self, symbol: &str, name: &str) -> Result<Char, ResolveError> {
        let math = self.symbols.get(Mode::Math, symbol);
        let text = self.symbols.get(Mode::Text, symbol);
        match (math, text) {
            (Some(sym), None) => self.resolve_math(sym.replace, name),
            (None, Some(sym)) => self.resolve_text(sym.replace, name),
            (Some(_), Some(_)) => Err(ResolveError::AmbiguousSymbolMode(symbol.to_string())),
            (None, None) => Err(ResolveError::UnknownSymbol(symbol.to_string())),
        }
    }
}

/// The id the font loaded after `count` others gets
fn next_font_id(count: usize, font_file: &Path) -> Result<FontId, FontError> {
    FontId::try_from(count).map_err(|_| FontError::TooManyFonts {
        path: font_file.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::next_font_id;
    use crate::error::FontError;

    #[test]
    fn test_next_font_id() {
        assert_eq!(next_font_id(0, Path::new("a.otf")), Ok(0));
        assert_eq!(next_font_id(41, Path::new("a.otf")), Ok(41));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_font_ids_run_out() {
        let err = next_font_id(u32::MAX as usize + 1, Path::new("last.otf")).unwrap_err();
        assert_eq!(
            err,
            FontError::TooManyFonts {
                path: "last.otf".into()
            }
        );
        assert_eq!(next_font_id(u32::MAX as usize, Path::new("a.otf")), Ok(u32::MAX));
    }
}
