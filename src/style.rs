/// The four math styles, ordered from the least to the most cramped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum MathStyle {
    Display = 0,
    Text = 1,
    Script = 2,
    ScriptScript = 3,
}
impl MathStyle {
    pub const COUNT: usize = 4;

    pub const ALL: [MathStyle; MathStyle::COUNT] = [
        MathStyle::Display,
        MathStyle::Text,
        MathStyle::Script,
        MathStyle::ScriptScript,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Script and scriptscript styles, where conditional spacing is dropped
    pub const fn is_tight(self) -> bool {
        self.index() >= 2
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MathStyle::Display => "display",
            MathStyle::Text => "text",
            MathStyle::Script => "script",
            MathStyle::ScriptScript => "scriptscript",
        }
    }

    pub fn from_str(s: &str) -> Option<MathStyle> {
        match s {
            "display" => Some(MathStyle::Display),
            "text" => Some(MathStyle::Text),
            "script" => Some(MathStyle::Script),
            "scriptscript" => Some(MathStyle::ScriptScript),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MathStyle;

    #[test]
    fn test_style_order() {
        for (i, style) in MathStyle::ALL.iter().enumerate() {
            assert_eq!(style.index(), i);
            assert_eq!(MathStyle::from_str(style.as_str()), Some(*style));
        }

        assert!(MathStyle::Display < MathStyle::ScriptScript);
        assert!(!MathStyle::Text.is_tight());
        assert!(MathStyle::Script.is_tight());
    }
}
