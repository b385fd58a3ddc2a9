use std::path::{Path, PathBuf};

use thiserror::Error;

/// An error from loading a font through a [`FontLoader`](crate::font::FontLoader)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontError {
    #[error("failed to read font file {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
    #[error("failed to parse font file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
    #[error("can't load font file {}: every font id is in use", .path.display())]
    TooManyFonts { path: PathBuf },
}
impl FontError {
    pub fn path(&self) -> &Path {
        match self {
            FontError::Io { path, .. }
            | FontError::Parse { path, .. }
            | FontError::TooManyFonts { path } => path,
        }
    }
}

/// An error from turning a character into a glyph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// `version` is the name last passed to `select_math_font`, if any
    #[error("no math font is selected{}", unregistered(.version))]
    NoMathFont { version: Option<String> },
    /// Neither the main font family nor the math font could provide the style.
    /// `family` is the name last passed to `select_main_font`, if any
    #[error("no font for text style {style:?} in main font {}", selection(.family))]
    NoMainFont {
        style: String,
        family: Option<String>,
    },
    #[error("unknown symbol {0:?}")]
    UnknownSymbol(String),
    /// The symbol is defined in both math and text mode, so there's no mode to resolve it in
    #[error("symbol {0:?} is defined in both math and text mode")]
    AmbiguousSymbolMode(String),
    #[error("{0} is not supported")]
    Unsupported(&'static str),
}

fn unregistered(version: &Option<String>) -> String {
    match version {
        Some(version) => format!(": {:?} is not registered", version),
        None => String::new(),
    }
}

fn selection(name: &Option<String>) -> String {
    match name {
        Some(name) => format!("{:?}", name),
        None => "(none selected)".to_string(),
    }
}
