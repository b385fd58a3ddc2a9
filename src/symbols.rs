use std::{collections::HashMap, fmt::Debug};

use once_cell::sync::Lazy;

use crate::{spacing::AtomClass, Mode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    /// The spacing class of the symbol
    pub group: AtomClass,
    /// The character the symbol is drawn with
    pub replace: char,
}

/// Dictionary from symbol names, such as `\alpha`, to their characters.
pub trait SymbolDictionary: Debug + Send + Sync {
    fn get(&self, mode: Mode, name: &str) -> Option<Symbol>;
}

#[derive(Debug, Clone, Default)]
pub struct Symbols {
    pub math: HashMap<&'static str, Symbol>,
    pub text: HashMap<&'static str, Symbol>,
}
impl Symbols {
    pub fn contains_key(&self, mode: Mode, key: &str) -> bool {
        match mode {
            Mode::Math => self.math.contains_key(key),
            Mode::Text => self.text.contains_key(key),
        }
    }

    /// Math symbol
    fn math(&mut self, g: AtomClass, r: char, name: &'static str) {
        self.math.insert(name, Symbol { group: g, replace: r });
    }

    /// Text symbol
    fn text(&mut self, g: AtomClass, r: char, name: &'static str) {
        self.text.insert(name, Symbol { group: g, replace: r });
    }

    /// Symbol with the same character in both modes
    fn both(&mut self, g: AtomClass, r: char, name: &'static str) {
        self.math(g, r, name);
        self.text(g, r, name);
    }
}
impl<D: SymbolDictionary + ?Sized> SymbolDictionary for &D {
    fn get(&self, mode: Mode, name: &str) -> Option<Symbol> {
        (**self).get(mode, name)
    }
}
impl SymbolDictionary for Symbols {
    fn get(&self, mode: Mode, name: &str) -> Option<Symbol> {
        match mode {
            Mode::Math => self.math.get(name).copied(),
            Mode::Text => self.text.get(name).copied(),
        }
    }
}

const GREEK_SMALL: &[(char, &str)] = &[
    ('α', "\\alpha"),
    ('β', "\\beta"),
    ('γ', "\\gamma"),
    ('δ', "\\delta"),
    ('ε', "\\varepsilon"),
    ('ζ', "\\zeta"),
    ('η', "\\eta"),
    ('θ', "\\theta"),
    ('ι', "\\iota"),
    ('κ', "\\kappa"),
    ('λ', "\\lambda"),
    ('μ', "\\mu"),
    ('ν', "\\nu"),
    ('ξ', "\\xi"),
    ('ο', "\\omicron"),
    ('π', "\\pi"),
    ('ρ', "\\rho"),
    ('ς', "\\varsigma"),
    ('σ', "\\sigma"),
    ('τ', "\\tau"),
    ('υ', "\\upsilon"),
    ('φ', "\\varphi"),
    ('χ', "\\chi"),
    ('ψ', "\\psi"),
    ('ω', "\\omega"),
];

const GREEK_CAPITAL: &[(char, &str)] = &[
    ('Γ', "\\Gamma"),
    ('Δ', "\\Delta"),
    ('Θ', "\\Theta"),
    ('Λ', "\\Lambda"),
    ('Ξ', "\\Xi"),
    ('Π', "\\Pi"),
    ('Σ', "\\Sigma"),
    ('Υ', "\\Upsilon"),
    ('Φ', "\\Phi"),
    ('Ψ', "\\Psi"),
    ('Ω', "\\Omega"),
];

pub static SYMBOLS: Lazy<Symbols> = Lazy::new(|| {
    let mut s = Symbols::default();

    let ord = AtomClass::Ord;
    let op = AtomClass::Op;
    let bin = AtomClass::Bin;
    let rel = AtomClass::Rel;
    let open = AtomClass::Open;
    let close = AtomClass::Close;
    let punct = AtomClass::Punct;

    for (ch, name) in GREEK_SMALL.iter().chain(GREEK_CAPITAL) {
        s.math(ord, *ch, *name);
    }
    // These are the lunate and loopy variants, outside of the contiguous greek runs
    s.math(ord, '\u{03f5}', "\\epsilon");
    s.math(ord, '\u{03d5}', "\\phi");
    s.math(ord, '\u{03d1}', "\\vartheta");
    s.math(ord, '\u{03d6}', "\\varpi");
    s.math(ord, '\u{03f1}', "\\varrho");

    // Relation Symbols
    s.math(rel, '\u{2261}', "\\equiv");
    s.math(rel, '\u{227a}', "\\prec");
    s.math(rel, '\u{227b}', "\\succ");
    s.math(rel, '\u{223c}', "\\sim");
    s.math(rel, '\u{2243}', "\\simeq");
    s.math(rel, '\u{2264}', "\\leq");
    s.math(rel, '\u{2265}', "\\geq");
    s.math(rel, '\u{2260}', "\\neq");
    s.math(rel, '\u{2208}', "\\in");
    s.math(rel, '\u{2282}', "\\subset");
    s.math(rel, '\u{2283}', "\\supset");
    s.math(rel, '\u{221d}', "\\propto");
    s.math(rel, '\u{2192}', "\\to");
    s.math(rel, '\u{21d2}', "\\Rightarrow");
    s.math(rel, '\u{21a6}', "\\mapsto");

    // Binary Operators
    s.math(bin, '\u{00b1}', "\\pm");
    s.math(bin, '\u{2213}', "\\mp");
    s.math(bin, '\u{00d7}', "\\times");
    s.math(bin, '\u{00f7}', "\\div");
    s.math(bin, '\u{22c5}', "\\cdot");
    s.math(bin, '\u{2218}', "\\circ");
    s.math(bin, '\u{2229}', "\\cap");
    s.math(bin, '\u{222a}', "\\cup");
    s.math(bin, '\u{2227}', "\\wedge");
    s.math(bin, '\u{2228}', "\\vee");

    // Large Operators
    s.math(op, '\u{2211}', "\\sum");
    s.math(op, '\u{220f}', "\\prod");
    s.math(op, '\u{222b}', "\\int");
    s.math(op, '\u{222e}', "\\oint");

    // Delimiters
    s.math(open, '\u{27e8}', "\\langle");
    s.math(close, '\u{27e9}', "\\rangle");
    s.math(open, '\u{230a}', "\\lfloor");
    s.math(close, '\u{230b}', "\\rfloor");
    s.math(open, '\u{2308}', "\\lceil");
    s.math(close, '\u{2309}', "\\rceil");
    s.math(open, '{', "\\{");
    s.math(close, '}', "\\}");

    // Punctuation
    s.math(punct, '.', "\\ldotp");
    s.math(punct, '\u{22c5}', "\\cdotp");

    // Misc Symbols
    s.math(ord, '\u{221e}', "\\infty");
    s.math(ord, '\u{2202}', "\\partial");
    s.math(ord, '\u{2207}', "\\nabla");
    s.math(ord, '\u{2200}', "\\forall");
    s.math(ord, '\u{2203}', "\\exists");
    s.math(ord, '\u{2205}', "\\emptyset");
    s.math(ord, '\u{2135}', "\\aleph");
    s.math(ord, '\u{210f}', "\\hbar");
    s.math(ord, '\u{2113}', "\\ell");

    // Text only
    s.text(ord, '\u{2020}', "\\textdagger");
    s.text(ord, '\u{2021}', "\\textdaggerdbl");
    s.text(ord, '\u{2013}', "\\textendash");
    s.text(ord, '\u{2014}', "\\textemdash");
    s.text(ord, '\u{00a9}', "\\copyright");

    // Math and Text
    s.both(ord, '#', "\\#");
    s.both(ord, '&', "\\&");
    s.both(ord, '\u{00a7}', "\\S");
    s.both(ord, '\u{00b6}', "\\P");
    s.both(ord, '\u{2020}', "\\dag");
    s.both(ord, '\u{2021}', "\\ddag");

    s
});
