use std::path::Path;

use unimath::{
    font::{FontLoader, GlyphId, GlyphSource},
    spacing::AtomClass,
    symbols::{Symbol, SymbolDictionary, SYMBOLS},
    version::FontStyle,
    FontContext, FontError, FontSpec, Mode, ResolveError,
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

fn configured(ctx: &mut FontContext) {
    ctx.add_main_font("roman", &[FontSpec::new("", "rm.otf", "rm.clm")])
        .unwrap();
    ctx.add_math_font(&FontSpec::new("xits", "xits.otf", "xits.clm"))
        .unwrap();
    ctx.select_main_font("roman");
    ctx.select_math_font("xits");
}

fn context() -> FontContext {
    let mut ctx = FontContext::new(IdentityLoader);
    configured(&mut ctx);
    ctx
}

// =============================================================================
// Named Symbol Tests
// =============================================================================

#[test]
fn math_symbols_should_resolve_in_math_mode() {
    let ctx = context();
    let ch = ctx.resolve_named("\\alpha", "").unwrap();
    assert_eq!(ch.code, 'α');
    // Italic in the default alphabet
    assert_eq!(ch.display as u32, 0x1D6FC);
    assert_eq!(ch.font_id, 1);

    let ch = ctx.resolve_named("\\alpha", "mathrm").unwrap();
    assert_eq!(ch.display, 'α');

    let ch = ctx.resolve_named("\\leq", "mathbf").unwrap();
    assert_eq!(ch.display, '\u{2264}');
}

#[test]
fn text_symbols_should_resolve_in_text_mode() {
    let ctx = context();
    let ch = ctx.resolve_named("\\textdagger", "").unwrap();
    assert_eq!(ch.code, '\u{2020}');
    assert_eq!(ch.display, '\u{2020}');
    assert_eq!(ch.font_id, 0);
}

#[test]
fn symbols_in_both_modes_should_be_ambiguous() {
    let ctx = context();
    assert_eq!(
        ctx.resolve_named("\\S", ""),
        Err(ResolveError::AmbiguousSymbolMode("\\S".to_string()))
    );
}

#[test]
fn unknown_symbols_should_fail() {
    let ctx = context();
    assert_eq!(
        ctx.resolve_named("\\notasymbol", ""),
        Err(ResolveError::UnknownSymbol("\\notasymbol".to_string()))
    );
}

#[test]
fn custom_dictionary_should_be_used() {
    #[derive(Debug)]
    struct OnlyAleph;
    impl SymbolDictionary for OnlyAleph {
        fn get(&self, mode: Mode, name: &str) -> Option<Symbol> {
            match (mode, name) {
                (Mode::Math, "aleph") => Some(Symbol {
                    group: AtomClass::Ord,
                    replace: 'ℵ',
                }),
                _ => None,
            }
        }
    }

    let mut ctx = FontContext::with_symbols(IdentityLoader, OnlyAleph);
    configured(&mut ctx);
    assert_eq!(ctx.resolve_named("aleph", "").unwrap().display, 'ℵ');
    assert!(ctx.resolve_named("\\alpha", "").is_err());
}

#[test]
fn styled_resolution_should_be_unsupported() {
    let ctx = context();
    assert!(matches!(
        ctx.resolve_styled('a', FontStyle::Bf, Mode::Math),
        Err(ResolveError::Unsupported(_))
    ));
}

// =============================================================================
// Built In Dictionary Tests
// =============================================================================

#[test]
fn builtin_dictionary_should_classify_symbols() {
    assert_eq!(SYMBOLS.get(Mode::Math, "\\sum").unwrap().group, AtomClass::Op);
    assert_eq!(SYMBOLS.get(Mode::Math, "\\times").unwrap().group, AtomClass::Bin);
    assert_eq!(SYMBOLS.get(Mode::Math, "\\langle").unwrap().group, AtomClass::Open);
    assert_eq!(SYMBOLS.get(Mode::Math, "\\rangle").unwrap().group, AtomClass::Close);
    assert_eq!(SYMBOLS.get(Mode::Math, "\\Omega").unwrap().replace, 'Ω');
    assert!(SYMBOLS.get(Mode::Text, "\\Omega").is_none());
}
