use crate::{
    glue::{Glue, GlueKind},
    spacing_data::{self, SPACINGS},
    style::MathStyle,
};

/// The spacing role of a formula element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AtomClass {
    Ord = 0,
    Op = 1,
    Bin = 2,
    Rel = 3,
    Open = 4,
    Close = 5,
    Punct = 6,
    Inner = 7,
}
impl AtomClass {
    pub const ALL: [AtomClass; 8] = [
        AtomClass::Ord,
        AtomClass::Op,
        AtomClass::Bin,
        AtomClass::Rel,
        AtomClass::Open,
        AtomClass::Close,
        AtomClass::Punct,
        AtomClass::Inner,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ord" => Some(AtomClass::Ord),
            "op" => Some(AtomClass::Op),
            "bin" => Some(AtomClass::Bin),
            "rel" => Some(AtomClass::Rel),
            "open" => Some(AtomClass::Open),
            "close" => Some(AtomClass::Close),
            "punct" => Some(AtomClass::Punct),
            "inner" => Some(AtomClass::Inner),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AtomClass::Ord => "ord",
            AtomClass::Op => "op",
            AtomClass::Bin => "bin",
            AtomClass::Rel => "rel",
            AtomClass::Open => "open",
            AtomClass::Close => "close",
            AtomClass::Punct => "punct",
            AtomClass::Inner => "inner",
        }
    }
}

/// Get the kind of glue between two atoms, or `None` if that pair of atoms can't be adjacent.
pub fn glue_kind(left: AtomClass, right: AtomClass, style: MathStyle) -> Option<GlueKind> {
    SPACINGS[left.index()][right.index()].map(|vector| vector[style.index()])
}

/// Like [`classify`] but returns `None` for pairs which never occur instead of panicking.
pub fn try_classify(left: AtomClass, right: AtomClass, style: MathStyle) -> Option<&'static Glue> {
    glue_kind(left, right, style).map(GlueKind::glue)
}

/// Get the glue to insert between two adjacent atoms.
///
/// # Panics
/// If the pair is one that a well formed atom list never contains, such as two adjacent bin
/// atoms. The atom list should have had its bins turned into ords before reaching here.
pub fn classify(left: AtomClass, right: AtomClass, style: MathStyle) -> &'static Glue {
    match try_classify(left, right, style) {
        Some(glue) => glue,
        None => panic!(
            "no spacing between {} and {} atoms: the pair never occurs",
            left.as_str(),
            right.as_str()
        ),
    }
}

/// Whether the glue between the pair is dropped in script and scriptscript styles
pub fn is_conditional(left: AtomClass, right: AtomClass) -> bool {
    spacing_data::is_conditional(left.index(), right.index())
}
