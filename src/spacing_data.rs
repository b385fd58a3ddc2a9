//! Describes spaces between different classes of atoms.
//!
//! The table is the one on page 170 of The TeXbook. Rows are the left atom, columns the right
//! atom, both in [`AtomClass`](crate::spacing::AtomClass) order: ord, op, bin, rel, open, close,
//! punct, inner.

use crate::{glue::GlueKind, style::MathStyle};

pub(crate) const ATOM_CLASS_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    /// Inserted in every style
    Always(GlueKind),
    /// Inserted only in display and text styles
    Loose(GlueKind),
    /// Bin atoms are never adjacent to these, so the pair can't arise
    Never,
}

use Cell::{Always, Loose, Never};

const Z: Cell = Always(GlueKind::Default);
const T: Cell = Always(GlueKind::Thin);
const LT: Cell = Loose(GlueKind::Thin);
const LM: Cell = Loose(GlueKind::Medium);
const LK: Cell = Loose(GlueKind::Thick);
const N: Cell = Never;

#[rustfmt::skip]
const CELLS: [[Cell; ATOM_CLASS_COUNT]; ATOM_CLASS_COUNT] = [
    //   ord  op   bin  rel  open close punct inner
    [Z,   T,   LM,  LK,  Z,   Z,   Z,   LT], // ord
    [T,   T,   N,   LK,  Z,   Z,   Z,   LT], // op
    [LM,  LM,  N,   N,   LM,  N,   N,   LM], // bin
    [LK,  LK,  N,   Z,   LK,  Z,   Z,   LK], // rel
    [Z,   Z,   N,   Z,   Z,   Z,   Z,   Z ], // open
    [Z,   T,   LM,  LK,  Z,   Z,   Z,   LT], // close
    [LT,  LT,  N,   LT,  LT,  LT,  LT,  LT], // punct
    [LT,  T,   LM,  LK,  LT,  Z,   LT,  LT], // inner
];

/// The glue for each style, or `None` where the pair never occurs
pub(crate) type StyleVector = Option<[GlueKind; MathStyle::COUNT]>;

const fn bake(cell: Cell) -> StyleVector {
    match cell {
        Always(kind) => Some([kind; MathStyle::COUNT]),
        Loose(kind) => Some([kind, kind, GlueKind::Default, GlueKind::Default]),
        Never => None,
    }
}

const fn bake_table() -> [[StyleVector; ATOM_CLASS_COUNT]; ATOM_CLASS_COUNT] {
    let mut table = [[None; ATOM_CLASS_COUNT]; ATOM_CLASS_COUNT];
    let mut left = 0;
    while left < ATOM_CLASS_COUNT {
        let mut right = 0;
        while right < ATOM_CLASS_COUNT {
            table[left][right] = bake(CELLS[left][right]);
            right += 1;
        }
        left += 1;
    }
    table
}

pub(crate) const SPACINGS: [[StyleVector; ATOM_CLASS_COUNT]; ATOM_CLASS_COUNT] = bake_table();

/// Whether the cell only has its glue in display and text styles
pub(crate) fn is_conditional(left: usize, right: usize) -> bool {
    matches!(CELLS[left][right], Loose(kind) if kind != GlueKind::Default)
}
