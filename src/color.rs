//! Color helpers for the wall.
//!
//! The strip works in 8-bit RGB, so colors are `palette::Srgb<u8>` throughout.
//! Provides the named colors the show uses, the fixed palette the strip is
//! initialized with, and channel scaling with clamping.

use palette::Srgb;

/// 8-bit RGB color, the native format of the strip.
pub type Rgb = Srgb<u8>;

pub const OFF: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const PURPLE: Rgb = Rgb::new(128, 0, 128);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const ORANGE: Rgb = Rgb::new(255, 50, 0);
pub const TURQUOISE: Rgb = Rgb::new(64, 224, 208);

/// The fixed 50-color sequence the strip is initialized with, tuned to match
/// the show prop. Assigned round-robin when the mapped region is longer than
/// the palette.
pub fn show_palette() -> Vec<Rgb> {
    vec![
        YELLOW, GREEN, RED, BLUE, ORANGE, TURQUOISE, GREEN,
        YELLOW, PURPLE, RED, GREEN, BLUE, YELLOW, RED, TURQUOISE, GREEN, RED, BLUE, GREEN, ORANGE,
        YELLOW, GREEN, RED, BLUE, ORANGE, TURQUOISE, RED, BLUE,
        ORANGE, RED, YELLOW, GREEN, PURPLE, BLUE, YELLOW, ORANGE, TURQUOISE, RED, GREEN, YELLOW, PURPLE,
        YELLOW, GREEN, RED, BLUE, ORANGE, TURQUOISE, GREEN, BLUE, ORANGE,
    ]
}

/// Parses a palette given as `;`-separated `r,g,b` triples, e.g.
/// `"255,255,0;0,255,0;255,0,0"`. Whitespace around entries and channels is
/// ignored; channels must be decimal values in `[0, 255]`.
pub fn parse_palette(input: &str) -> Result<Vec<Rgb>, PaletteParseError> {
    let colors: Vec<Rgb> = input
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_color)
        .collect::<Result<_, _>>()?;

    if colors.is_empty() {
        return Err(PaletteParseError::Empty);
    }
    Ok(colors)
}

fn parse_color(entry: &str) -> Result<Rgb, PaletteParseError> {
    let invalid = || PaletteParseError::InvalidEntry {
        entry: entry.to_string(),
    };

    let mut channels = entry.split(',').map(|channel| {
        channel
            .trim()
            .parse::<u8>()
            .map_err(|_| invalid())
    });
    let red = channels.next().ok_or_else(invalid)??;
    let green = channels.next().ok_or_else(invalid)??;
    let blue = channels.next().ok_or_else(invalid)??;
    if channels.next().is_some() {
        return Err(invalid());
    }
    Ok(Rgb::new(red, green, blue))
}

/// Palette string parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteParseError {
    /// No color entries in the string.
    Empty,

    /// An entry was not an `r,g,b` triple with channels in `[0, 255]`.
    InvalidEntry {
        /// The offending entry text.
        entry: String,
    },
}

impl core::fmt::Display for PaletteParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PaletteParseError::Empty => {
                write!(f, "palette string has no color entries")
            }
            PaletteParseError::InvalidEntry { entry } => {
                write!(
                    f,
                    "invalid palette entry `{}`: expected `r,g,b` with channels 0-255",
                    entry
                )
            }
        }
    }
}

impl std::error::Error for PaletteParseError {}

/// Scales every channel by `factor`, clamping the result to `[0, 255]`.
pub fn scale(color: Rgb, factor: f32) -> Rgb {
    let (red, green, blue) = color.into_components();
    Rgb::new(
        scale_channel(red, factor),
        scale_channel(green, factor),
        scale_channel(blue, factor),
    )
}

#[inline]
fn scale_channel(value: u8, factor: f32) -> u8 {
    (f32::from(value) * factor).clamp(0.0, 255.0) as u8
}
