//! Immutable wall configuration, built once at startup.

use crate::alphabet::Alphabet;
use crate::color::{self, Rgb};

/// Everything the engine depends on, gathered into one immutable struct and
/// passed by reference into the dispatcher and engine.
#[derive(Debug, Clone)]
pub struct WallConfig {
    /// Total number of pixels on the strip.
    pub led_count: usize,
    /// Offset added to every alphabet index to reach the physical pixel,
    /// letting the mapped region start partway along the strip.
    pub shift: usize,
    /// Flicker sub-iterations per flickered pixel.
    pub flicker_loops: u32,
    /// Brightness factor re-applied on each flicker sub-iteration. Reserved
    /// hook for scaled-brightness flicker; 1.0 is an identity pass.
    pub flicker_scale: f32,
    /// The wall's letter layout.
    pub alphabet: Alphabet,
    /// Colors assigned round-robin when the strip initializes.
    pub palette: Vec<Rgb>,
    /// Color a spelled letter lights up in.
    pub highlight: Rgb,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            led_count: 50,
            shift: 0,
            flicker_loops: 3,
            flicker_scale: 1.0,
            alphabet: Alphabet::default(),
            palette: color::show_palette(),
            highlight: color::RED,
        }
    }
}

impl WallConfig {
    /// Checks the invariants the engine assumes.
    ///
    /// # Errors
    /// * `EmptyAlphabet` - the alphabet has no glyphs
    /// * `EmptyPalette` - no colors to initialize the strip with
    /// * `MappedRegionOutOfRange` - `shift + alphabet.len()` exceeds the strip
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let needed = self.shift + self.alphabet.len();
        if needed > self.led_count {
            return Err(ConfigError::MappedRegionOutOfRange {
                needed,
                led_count: self.led_count,
            });
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The alphabet has no glyphs.
    EmptyAlphabet,

    /// The palette has no colors.
    EmptyPalette,

    /// The shifted alphabet does not fit on the strip.
    MappedRegionOutOfRange {
        /// Pixels required by the shifted alphabet.
        needed: usize,
        /// Pixels available on the strip.
        led_count: usize,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyAlphabet => {
                write!(f, "alphabet must have at least one glyph")
            }
            ConfigError::EmptyPalette => {
                write!(f, "palette must have at least one color")
            }
            ConfigError::MappedRegionOutOfRange { needed, led_count } => {
                write!(
                    f,
                    "shifted alphabet needs {} pixels but the strip has {}",
                    needed, led_count
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
