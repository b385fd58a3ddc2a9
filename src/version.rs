//! Named math alphabets.
//!
//! There are two catalogs. The style catalog (`TeX`, `ISO`, `French`, `upright`) decides which
//! letters are italic by default, and the version catalog (`mathbf`, `mathfrak`, ...) holds the
//! alphabets that font commands select. The version catalog also has two sentinel entries, the
//! empty name and [`DEFAULT_VERSION_NAME`], which start out as the `TeX` style.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::alphabet::MathVersion;

pub const DEFAULT_VERSION_NAME: &str = "mathnormal";
pub const EMPTY_VERSION_NAME: &str = "";
pub const DEFAULT_STYLE_NAME: &str = "TeX";

const ALPHA: u32 = 0x03B1;
const CAPITAL_ALPHA: u32 = 0x0391;
const ZERO: u32 = '0' as u32;

pub const MATH_STYLES: &[(&str, MathVersion)] = &[
    (
        "TeX",
        MathVersion::new(ZERO, 0x1D44E, 0x1D434, 0x1D6FC, CAPITAL_ALPHA),
    ),
    (
        "ISO",
        MathVersion::new(ZERO, 0x1D44E, 0x1D434, 0x1D6FC, 0x1D6E2),
    ),
    (
        "French",
        MathVersion::new(ZERO, 0x1D44E, 'A' as u32, ALPHA, CAPITAL_ALPHA),
    ),
    ("upright", MathVersion::plain()),
];

#[rustfmt::skip]
pub const MATH_VERSIONS: &[(&str, MathVersion)] = &[
    ("mathrm", MathVersion::plain()),
    ("mathbf", MathVersion::new(0x1D7CE, 0x1D41A, 0x1D400, 0x1D6C2, 0x1D6A8)),
    ("mathit", MathVersion::new(ZERO, 0x1D44E, 0x1D434, 0x1D6FC, 0x1D6E2)),
    ("mathbfit", MathVersion::new(ZERO, 0x1D482, 0x1D468, 0x1D736, 0x1D71C)),
    ("mathcal", MathVersion::new(ZERO, 0x1D4B6, 0x1D49C, ALPHA, CAPITAL_ALPHA)),
    ("mathbfcal", MathVersion::new(ZERO, 0x1D4EA, 0x1D4D0, ALPHA, CAPITAL_ALPHA)),
    ("mathfrak", MathVersion::new(ZERO, 0x1D51E, 0x1D504, ALPHA, CAPITAL_ALPHA)),
    ("mathbb", MathVersion::new(0x1D7D8, 0x1D552, 0x1D538, ALPHA, CAPITAL_ALPHA)),
    ("mathbffrak", MathVersion::new(ZERO, 0x1D586, 0x1D56C, ALPHA, CAPITAL_ALPHA)),
    ("mathsf", MathVersion::new(0x1D7E2, 0x1D5BA, 0x1D5A0, ALPHA, CAPITAL_ALPHA)),
    ("mathsfbf", MathVersion::new(0x1D7EC, 0x1D5EE, 0x1D5D4, 0x1D770, 0x1D756)),
    ("mathsfit", MathVersion::new(ZERO, 0x1D622, 0x1D608, ALPHA, CAPITAL_ALPHA)),
    ("mathsfbfit", MathVersion::new(ZERO, 0x1D656, 0x1D63C, 0x1D7AA, 0x1D790)),
    ("mathtt", MathVersion::new(0x1D7F6, 0x1D68A, 0x1D670, ALPHA, CAPITAL_ALPHA)),
];

static STYLES: Lazy<HashMap<&'static str, MathVersion>> =
    Lazy::new(|| MATH_STYLES.iter().copied().collect());

/// Look up an entry of the style catalog.
pub fn math_style(name: &str) -> Option<&'static MathVersion> {
    STYLES.get(name)
}

/// The math versions available in a [`FontContext`](crate::context::FontContext), along with
/// which one is the default.
#[derive(Debug, Clone)]
pub struct VersionRegistry {
    versions: HashMap<String, MathVersion>,
    default: MathVersion,
}
impl VersionRegistry {
    pub fn new() -> VersionRegistry {
        let tex = MATH_STYLES[0].1;
        let mut versions: HashMap<String, MathVersion> = MATH_VERSIONS
            .iter()
            .map(|(name, version)| (name.to_string(), *version))
            .collect();
        versions.insert(EMPTY_VERSION_NAME.to_string(), tex);
        versions.insert(DEFAULT_VERSION_NAME.to_string(), tex);

        VersionRegistry {
            versions,
            default: tex,
        }
    }

    /// Make the named style the default alphabet.
    /// Returns whether the style existed, unknown names leave the default as it was.
    pub fn set_default_version(&mut self, style_name: &str) -> bool {
        let Some(style) = math_style(style_name) else {
            log::warn!("ignoring unknown math style {:?}", style_name);
            return false;
        };

        log::debug!("default math version is now the {} style", style_name);
        self.default = *style;
        self.versions.insert(DEFAULT_VERSION_NAME.to_string(), *style);
        true
    }

    /// Add or replace a version. Defining [`DEFAULT_VERSION_NAME`] also changes the default.
    ///
    /// Defining [`EMPTY_VERSION_NAME`] only changes what [`get`](Self::get) returns for it:
    /// [`resolve`](Self::resolve) always sends the empty name to the default.
    pub fn define_version(&mut self, name: impl Into<String>, version: MathVersion) {
        let name = name.into();
        if name == DEFAULT_VERSION_NAME {
            self.default = version;
        }
        if self.versions.insert(name.clone(), version).is_some() {
            log::debug!("replaced math version {:?}", name);
        }
    }

    /// Exact lookup, without falling back to the default.
    pub fn get(&self, name: &str) -> Option<&MathVersion> {
        self.versions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.versions.contains_key(name)
    }

    pub fn default_version(&self) -> &MathVersion {
        &self.default
    }

    /// Get the named version. An empty or unknown name gets the default version.
    pub fn resolve(&self, name: &str) -> &MathVersion {
        if name.is_empty() {
            return &self.default;
        }
        self.versions.get(name).unwrap_or(&self.default)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }
}
impl Default for VersionRegistry {
    fn default() -> Self {
        VersionRegistry::new()
    }
}

/// The font commands that select a math version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Rm,
    Bf,
    It,
    BfIt,
    Cal,
    BfCal,
    Frak,
    Bb,
    BfFrak,
    Sf,
    SfBf,
    SfIt,
    SfBfIt,
    Tt,
}
impl FontStyle {
    pub const ALL: [FontStyle; 14] = [
        FontStyle::Rm,
        FontStyle::Bf,
        FontStyle::It,
        FontStyle::BfIt,
        FontStyle::Cal,
        FontStyle::BfCal,
        FontStyle::Frak,
        FontStyle::Bb,
        FontStyle::BfFrak,
        FontStyle::Sf,
        FontStyle::SfBf,
        FontStyle::SfIt,
        FontStyle::SfBfIt,
        FontStyle::Tt,
    ];

    pub fn version_name(&self) -> &'static str {
        match self {
            FontStyle::Rm => "mathrm",
            FontStyle::Bf => "mathbf",
            FontStyle::It => "mathit",
            FontStyle::BfIt => "mathbfit",
            FontStyle::Cal => "mathcal",
            FontStyle::BfCal => "mathbfcal",
            FontStyle::Frak => "mathfrak",
            FontStyle::Bb => "mathbb",
            FontStyle::BfFrak => "mathbffrak",
            FontStyle::Sf => "mathsf",
            FontStyle::SfBf => "mathsfbf",
            FontStyle::SfIt => "mathsfit",
            FontStyle::SfBfIt => "mathsfbfit",
            FontStyle::Tt => "mathtt",
        }
    }

    pub fn from_version_name(name: &str) -> Option<FontStyle> {
        FontStyle::ALL
            .into_iter()
            .find(|style| style.version_name() == name)
    }
}
