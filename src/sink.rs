//! Strip hardware abstraction and the bundled terminal simulator.

use std::fmt::Write as _;
use std::io::{self, Write as _};

use crate::color::{OFF, Rgb};

/// Trait for abstracting the addressable LED strip.
///
/// Implement this for your strip hardware (SPI, PWM, a network bridge) to let
/// the engine drive it. Writes are buffered until [`show`](PixelSink::show)
/// commits them in one visible update. Pixel state is owned by the sink and
/// read back through [`get_pixel`](PixelSink::get_pixel); the engine never
/// assumes direct memory access. Handle any hardware errors internally -
/// these methods cannot fail.
pub trait PixelSink {
    /// One-time hardware initialization, invoked once before the first pixel
    /// write. The default is a no-op for sinks that are ready on
    /// construction, like the bundled simulator.
    fn begin(&mut self) {}

    /// Buffers a color write for the pixel at `index`.
    ///
    /// Out-of-range indices must be ignored rather than panic.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Returns the buffered color of the pixel at `index` (off when out of range).
    fn get_pixel(&self, index: usize) -> Rgb;

    /// Commits all buffered pixel writes to the display in one update.
    fn show(&mut self);
}

/// Strip simulator that renders the pixels as a line of truecolor dots,
/// redrawn in place on stdout.
#[derive(Debug)]
pub struct TerminalStrip {
    pixels: Vec<Rgb>,
}

impl TerminalStrip {
    /// Creates a dark strip of `led_count` pixels.
    pub fn new(led_count: usize) -> Self {
        Self {
            pixels: vec![OFF; led_count],
        }
    }

    /// Number of pixels on the strip.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Returns true if the strip has zero pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

impl PixelSink for TerminalStrip {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn get_pixel(&self, index: usize) -> Rgb {
        self.pixels.get(index).copied().unwrap_or(OFF)
    }

    fn show(&mut self) {
        let mut line = String::with_capacity(self.pixels.len() * 24 + 8);
        line.push('\r');
        for color in &self.pixels {
            let (red, green, blue) = color.into_components();
            let _ = write!(line, "\x1b[38;2;{red};{green};{blue}m\u{25cf}");
        }
        line.push_str("\x1b[0m");

        let mut out = io::stdout().lock();
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }
}
