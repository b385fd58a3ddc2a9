use crate::{
    context::FontContext,
    error::FontError,
    font::FontSpec,
};

/// A main font family to register, under `name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySetup {
    pub name: String,
    /// The fonts of the family, each spec's name being its style name
    pub styles: Vec<FontSpec>,
}

/// Everything needed to set up a [`FontContext`] in one go.
///
/// Applying it registers the main font families, then the math fonts, then sets the default
/// math style and selects the active fonts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontSetup {
    pub main_fonts: Vec<FamilySetup>,
    /// Math fonts, each registered under its spec's name
    pub math_fonts: Vec<FontSpec>,
    /// One of the math styles: `TeX`, `ISO`, `French` or `upright`.
    /// If `None`, then the default stays `TeX`.
    pub math_style: Option<String>,
    pub main_font: Option<String>,
    pub math_font: Option<String>,
}
impl FontSetup {
    pub fn with_main_font(mut self, name: impl Into<String>, styles: Vec<FontSpec>) -> FontSetup {
        self.main_fonts.push(FamilySetup {
            name: name.into(),
            styles,
        });
        self
    }

    pub fn with_math_font(mut self, spec: FontSpec) -> FontSetup {
        self.math_fonts.push(spec);
        self
    }

    pub fn with_math_style(mut self, style: impl Into<String>) -> FontSetup {
        self.math_style = Some(style.into());
        self
    }

    pub fn selecting(
        mut self,
        main_font: impl Into<String>,
        math_font: impl Into<String>,
    ) -> FontSetup {
        self.main_font = Some(main_font.into());
        self.math_font = Some(math_font.into());
        self
    }
}

impl FontContext {
    /// Apply the setup, stopping at the first font that fails to load.
    pub fn configure(&mut self, setup: &FontSetup) -> Result<(), FontError> {
        for family in &setup.main_fonts {
            self.add_main_font(family.name.clone(), &family.styles)?;
        }
        for spec in &setup.math_fonts {
            self.add_math_font(spec)?;
        }
        if let Some(style) = &setup.math_style {
            self.set_default_version(style);
        }
        if let Some(name) = &setup.main_font {
            self.select_main_font(name);
        }
        if let Some(name) = &setup.math_font {
            self.select_math_font(name);
        }
        Ok(())
    }
}
