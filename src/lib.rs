//! Choosing glyphs and spacing for the characters of a math formula.
//!
//! [`spacing::classify`] gives the glue TeX puts between two adjacent atoms, and a
//! [`FontContext`] maps characters to glyphs, restyling letters and digits into the math
//! alphabets of the Mathematical Alphanumeric Symbols block.

pub mod alphabet;
pub mod config;
pub mod context;
pub mod error;
pub mod font;
pub mod glue;
#[cfg(feature = "opentype")]
pub mod opentype;
pub mod spacing;
mod spacing_data;
pub mod style;
pub mod symbols;
pub mod unit;
pub mod version;

pub use config::FontSetup;
pub use context::FontContext;
pub use error::{FontError, ResolveError};
pub use font::{Char, FontSpec};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    Math,
    Text,
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::{
        error::FontError,
        font::{FontLoader, GlyphId, GlyphSource},
        FontContext, FontSetup, FontSpec, Mode,
    };

    #[derive(Debug)]
    struct Identity;
    impl GlyphSource for Identity {
        fn glyph_id(&self, ch: char) -> GlyphId {
            ch as GlyphId
        }
    }

    #[derive(Debug)]
    struct IdentityLoader;
    impl FontLoader for IdentityLoader {
        fn load(&self, _: &Path, _: &Path) -> Result<Box<dyn GlyphSource>, FontError> {
            Ok(Box::new(Identity))
        }
    }

    #[test]
    fn test_configure() {
        let setup = FontSetup::default()
            .with_main_font("roman", vec![FontSpec::new("", "rm.otf", "rm.clm")])
            .with_math_font(FontSpec::new("xits", "xits.otf", "xits.clm"))
            .with_math_style("upright")
            .selecting("roman", "xits");

        let mut ctx = FontContext::new(IdentityLoader);
        ctx.configure(&setup).unwrap();

        assert_eq!(ctx.font_count(), 2);
        let ch = ctx.resolve('x', "", Mode::Math).unwrap();
        assert_eq!(ch.display, 'x');
        assert_eq!(ch.font_id, 1);
        let ch = ctx.resolve('x', "", Mode::Text).unwrap();
        assert_eq!(ch.font_id, 0);
        assert_eq!(ch.glyph_id, 'x' as GlyphId);
    }
}
