use std::path::Path;

use unimath::{
    config::FamilySetup,
    font::{FontLoader, GlyphId, GlyphSource},
    FontContext, FontError, FontSetup, FontSpec, Mode,
};

#[derive(Debug)]
struct Identity;
impl GlyphSource for Identity {
    fn glyph_id(&self, ch: char) -> GlyphId {
        ch as GlyphId
    }
}

/// Fails on files that don't exist on a made up list
#[derive(Debug)]
struct ListLoader;
impl FontLoader for ListLoader {
    fn load(&self, font_file: &Path, _: &Path) -> Result<Box<dyn GlyphSource>, FontError> {
        if font_file.starts_with("missing") {
            Err(FontError::Io {
                path: font_file.to_path_buf(),
                message: "No such file or directory".to_string(),
            })
        } else {
            Ok(Box::new(Identity))
        }
    }
}

fn setup() -> FontSetup {
    FontSetup::default()
        .with_main_font(
            "roman",
            vec![
                FontSpec::new("", "fonts/rm.otf", "fonts/rm.clm"),
                FontSpec::new("bf", "fonts/bf.otf", "fonts/bf.clm"),
            ],
        )
        .with_math_font(FontSpec::new("xits", "fonts/xits.otf", "fonts/xits.clm"))
        .selecting("roman", "xits")
}

// =============================================================================
// Setup Tests
// =============================================================================

#[test]
fn default_setup_should_do_nothing() {
    let mut ctx = FontContext::new(ListLoader);
    ctx.configure(&FontSetup::default()).unwrap();
    assert_eq!(ctx.font_count(), 0);
    assert!(ctx.selected_main_font().is_none());
    assert!(ctx.selected_math_font().is_none());
}

#[test]
fn setup_should_register_and_select() {
    let mut ctx = FontContext::new(ListLoader);
    ctx.configure(&setup()).unwrap();

    assert_eq!(ctx.font_count(), 3);
    assert_eq!(ctx.resolve('a', "bf", Mode::Text).unwrap().font_id, 1);
    assert_eq!(ctx.resolve('a', "", Mode::Math).unwrap().font_id, 2);
    assert_eq!(ctx.resolve('a', "", Mode::Math).unwrap().display as u32, 0x1D44E);
}

#[test]
fn setup_should_set_math_style() {
    let mut ctx = FontContext::new(ListLoader);
    ctx.configure(&setup().with_math_style("upright")).unwrap();
    assert_eq!(ctx.resolve('a', "", Mode::Math).unwrap().display, 'a');

    let mut ctx = FontContext::new(ListLoader);
    ctx.configure(&setup().with_math_style("Fraktur")).unwrap();
    assert_eq!(ctx.resolve('a', "", Mode::Math).unwrap().display as u32, 0x1D44E);
}

#[test]
fn setup_should_stop_at_first_failure() {
    let mut setup = setup();
    setup.main_fonts.push(FamilySetup {
        name: "sans".to_string(),
        styles: vec![FontSpec::new("", "missing/sf.otf", "missing/sf.clm")],
    });

    let mut ctx = FontContext::new(ListLoader);
    let err = ctx.configure(&setup).unwrap_err();
    assert!(matches!(err, FontError::Io { .. }));
    assert!(err.to_string().contains("missing/sf.otf"), "{}", err);

    // The math fonts come after the main fonts so never got loaded
    assert_eq!(ctx.font_count(), 2);
    assert!(ctx.math_font_id("xits").is_none());
    assert!(ctx.selected_main_font().is_none());
}
