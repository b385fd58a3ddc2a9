//! The fixed catalog of spacing quantities inserted between atoms.

use crate::unit::{Em, Mu};

/// Index of an entry in [`GLUES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GlueKind {
    Default = 0,
    Thin = 1,
    Medium = 2,
    Thick = 3,
}
impl GlueKind {
    pub const ALL: [GlueKind; 4] = [
        GlueKind::Default,
        GlueKind::Thin,
        GlueKind::Medium,
        GlueKind::Thick,
    ];

    pub fn glue(self) -> &'static Glue {
        &GLUES[self as usize]
    }
}

/// A spacing quantity with its stretchability and shrinkability, in mu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glue {
    pub name: &'static str,
    pub space: Mu,
    pub stretch: Mu,
    pub shrink: Mu,
}
impl Glue {
    const fn new(name: &'static str, space: f64, stretch: f64, shrink: f64) -> Glue {
        Glue {
            name,
            space: Mu(space),
            stretch: Mu(stretch),
            shrink: Mu(shrink),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.space.0 == 0.0 && self.stretch.0 == 0.0 && self.shrink.0 == 0.0
    }

    /// `(space, stretch, shrink)` in ems for a font with the given quad
    pub fn to_em(&self, quad: f64) -> (Em, Em, Em) {
        (
            self.space.to_em(quad),
            self.stretch.to_em(quad),
            self.shrink.to_em(quad),
        )
    }
}

pub const GLUES: [Glue; 4] = [
    Glue::new("default", 0.0, 0.0, 0.0),
    Glue::new("thin", 3.0, 0.0, 0.0),
    Glue::new("med", 4.0, 4.0, 2.0),
    Glue::new("thick", 5.0, 0.0, 5.0),
];

pub fn glue_by_name(name: &str) -> Option<&'static Glue> {
    GLUES.iter().find(|glue| glue.name == name)
}

#[cfg(test)]
mod tests {
    use super::{glue_by_name, GlueKind, GLUES};
    use crate::unit::Em;

    #[test]
    fn test_catalog() {
        for kind in GlueKind::ALL {
            assert_eq!(kind.glue(), &GLUES[kind as usize]);
        }

        let med = glue_by_name("med").unwrap();
        assert_eq!(med.space.0, 4.0);
        assert_eq!(med.stretch.0, 4.0);
        assert_eq!(med.shrink.0, 2.0);
        assert!(GlueKind::Default.glue().is_empty());
        assert!(glue_by_name("huge").is_none());
    }

    #[test]
    fn test_glue_to_em() {
        let (space, stretch, shrink) = GlueKind::Thick.glue().to_em(1.8);
        assert!((space.0 - 0.5).abs() < 1e-9);
        assert_eq!(stretch, Em(0.0));
        assert!((shrink.0 - 0.5).abs() < 1e-9);
    }
}
