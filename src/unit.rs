/// Math unit, 1/18 of an em
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mu(pub f64);
impl Mu {
    pub const PER_EM: f64 = 18.0;

    /// Convert into ems given the quad of the current font.
    pub fn to_em(&self, quad: f64) -> Em {
        Em(self.0 * quad / Self::PER_EM)
    }
}

/// An f64 in em, which is a unit relative to the font size of the parent
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Em(pub f64);
