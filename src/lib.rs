#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Alphabet`**: Maps printable characters to physical pixel positions, with a configurable shift
//! - **`AnimationEngine`**: Plays one message as the four-phase show (initialize, flicker, spell, finale)
//! - **`EventDispatcher`**: Polls an event stream and serializes animation runs, one message at a time
//! - **`PixelSink`**: Trait to implement for your LED strip hardware (a terminal simulator is bundled)
//! - **`Clock`** / **`Rng`**: Injected timing and randomness, swappable for deterministic test doubles
//! - **`WallConfig`**: Immutable configuration (strip length, shift, palette, alphabet, flicker depth)
//!
//! Colors are 8-bit [`Rgb`] (`palette::Srgb<u8>`), the strip's native format;
//! channel arithmetic clamps to `[0, 255]`.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod alphabet;
pub mod color;
pub mod config;
pub mod dispatcher;
pub mod engine;
pub mod rng;
pub mod sink;
pub mod source;
pub mod time;

pub use alphabet::{Alphabet, DEFAULT_ALPHABET};
pub use color::Rgb;
pub use config::{ConfigError, WallConfig};
pub use dispatcher::{
    DispatchError, DispatcherState, Event, EventDispatcher, EventSource, normalize,
};
pub use engine::{AnimationEngine, Phase};
pub use rng::{FastRng, Rng};
pub use sink::{PixelSink, TerminalStrip};
pub use source::{ConsoleSource, FileEventSource};
pub use time::{Clock, SystemClock};
