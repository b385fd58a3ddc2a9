//! Mapping of letters and digits into the Mathematical Alphanumeric Symbols block.
//!
//! Each math alphabet occupies contiguous runs of 10 digits, 26 small and 26 capital latin
//! letters, and 25 small and 25 capital greek letters. An alphabet is described by the first
//! codepoint of each run, and an alphabet without a styled variant of a run uses the plain base
//! (`'0'`, `'a'`, `0x03B1`, ...) for it instead.

/// The kinds of characters an alphabet can restyle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CharClass {
    Digit = 0,
    LatinSmall = 1,
    LatinCapital = 2,
    GreekSmall = 3,
    GreekCapital = 4,
}
impl CharClass {
    pub const ALL: [CharClass; 5] = [
        CharClass::Digit,
        CharClass::LatinSmall,
        CharClass::LatinCapital,
        CharClass::GreekSmall,
        CharClass::GreekCapital,
    ];

    /// Number of characters in the run
    pub fn len(self) -> u32 {
        match self {
            CharClass::Digit => 10,
            CharClass::LatinSmall | CharClass::LatinCapital => 26,
            CharClass::GreekSmall | CharClass::GreekCapital => 25,
        }
    }

    /// The unstyled codepoint the run starts at
    pub fn plain_base(self) -> u32 {
        match self {
            CharClass::Digit => '0' as u32,
            CharClass::LatinSmall => 'a' as u32,
            CharClass::LatinCapital => 'A' as u32,
            // α
            CharClass::GreekSmall => 0x03B1,
            // Α
            CharClass::GreekCapital => 0x0391,
        }
    }
}

/// Get the class of the character and its offset from the start of the class' run.
/// Returns `None` for characters that no alphabet changes.
pub fn classify(ch: char) -> Option<(CharClass, u32)> {
    let code = ch as u32;
    CharClass::ALL.into_iter().find_map(|class| {
        let base = class.plain_base();
        if code >= base && code < base + class.len() {
            Some((class, code - base))
        } else {
            None
        }
    })
}

/// A math alphabet, such as bold or fraktur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MathVersion {
    bases: [u32; 5],
}
impl MathVersion {
    pub const fn new(
        digit: u32,
        latin_small: u32,
        latin_capital: u32,
        greek_small: u32,
        greek_capital: u32,
    ) -> MathVersion {
        MathVersion {
            bases: [digit, latin_small, latin_capital, greek_small, greek_capital],
        }
    }

    /// The alphabet which leaves every character as is
    pub const fn plain() -> MathVersion {
        MathVersion::new('0' as u32, 'a' as u32, 'A' as u32, 0x03B1, 0x0391)
    }

    pub fn base(&self, class: CharClass) -> u32 {
        self.bases[class as usize]
    }

    /// Whether the alphabet has its own glyphs for the class
    pub fn restyles(&self, class: CharClass) -> bool {
        self.base(class) != class.plain_base()
    }

    /// Map the character into this alphabet. Characters which aren't digits, or latin or greek
    /// letters are returned unchanged, as are characters whose mapped codepoint isn't a `char`.
    pub fn map(&self, ch: char) -> char {
        match classify(ch) {
            Some((class, offset)) => self
                .base(class)
                .checked_add(offset)
                .and_then(char::from_u32)
                .unwrap_or(ch),
            None => ch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, CharClass, MathVersion};

    #[test]
    fn test_classify() {
        assert_eq!(classify('0'), Some((CharClass::Digit, 0)));
        assert_eq!(classify('9'), Some((CharClass::Digit, 9)));
        assert_eq!(classify('a'), Some((CharClass::LatinSmall, 0)));
        assert_eq!(classify('z'), Some((CharClass::LatinSmall, 25)));
        assert_eq!(classify('Z'), Some((CharClass::LatinCapital, 25)));
        assert_eq!(classify('α'), Some((CharClass::GreekSmall, 0)));
        assert_eq!(classify('ω'), Some((CharClass::GreekSmall, 24)));
        assert_eq!(classify('Α'), Some((CharClass::GreekCapital, 0)));
        assert_eq!(classify('Ω'), Some((CharClass::GreekCapital, 24)));

        assert_eq!(classify('+'), None);
        assert_eq!(classify('/'), None);
        assert_eq!(classify(':'), None);
        assert_eq!(classify('ϑ'), None);
        assert_eq!(classify('\u{1D400}'), None);
    }

    #[test]
    fn test_plain_is_identity() {
        let plain = MathVersion::plain();
        for ch in ['0', '7', 'q', 'Q', 'β', 'Σ', '+', 'é'] {
            assert_eq!(plain.map(ch), ch);
        }
        for class in CharClass::ALL {
            assert!(!plain.restyles(class));
        }
    }

    #[test]
    fn test_unmappable_bases() {
        let version = MathVersion::new(u32::MAX, 0xD800, 0x10FFFF, 'α' as u32, 'Α' as u32);
        // Past u32::MAX
        assert_eq!(version.map('5'), '5');
        // Surrogates
        assert_eq!(version.map('a'), 'a');
        // Past the last codepoint
        assert_eq!(version.map('A'), '\u{10FFFF}');
        assert_eq!(version.map('B'), 'B');
        assert_eq!(version.map('β'), 'β');
    }
}
