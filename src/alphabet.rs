//! Mapping between printable characters and physical pixel positions.

/// The wall's stock letter layout: 50 glyphs, letters scattered out of order
/// with `*` filler between them so the spelled words look hand-strung.
pub const DEFAULT_ALPHABET: &str = "!*z*y*xw*vu*t**k*l*m*n*op*q*rs***j*i*hgf*ed*cb*a**";

/// Ordered set of glyphs strung along the strip, one pixel per glyph.
///
/// Lookup is by first occurrence, so repeated filler glyphs all resolve to
/// the first filler pixel. The set is lowercase-only by construction (apart
/// from marker glyphs); callers normalize input before lookup. Characters
/// that are not on the wall resolve to `None`, which the engine renders as a
/// timed gap rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    glyphs: Vec<char>,
}

impl Alphabet {
    /// Creates an alphabet from an ordered glyph string.
    pub fn new(glyphs: &str) -> Self {
        Self {
            glyphs: glyphs.chars().collect(),
        }
    }

    /// Number of glyphs (and therefore mapped pixels).
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns true if the alphabet has no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// 0-based position of `glyph` on the wall, if present.
    pub fn index_of(&self, glyph: char) -> Option<usize> {
        self.glyphs.iter().position(|&g| g == glyph)
    }

    /// Physical pixel position of `glyph`: its index plus the strip shift.
    pub fn pixel_for(&self, glyph: char, shift: usize) -> Option<usize> {
        self.index_of(glyph).map(|index| index + shift)
    }

    /// Iterates the glyphs in strip order.
    pub fn glyphs(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.iter().copied()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET)
    }
}
