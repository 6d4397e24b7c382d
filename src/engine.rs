//! Animation sequencing engine.
//!
//! Provides [`AnimationEngine`], which turns one normalized chat message into
//! the wall's four-phase light show: palette initialize, random flicker,
//! letter-by-letter spelling, and the closing "run" finale. One engine value
//! is created per triggered message and consumed by [`AnimationEngine::run`],
//! so runs can never overlap or be replayed.

use std::time::Duration;

use crate::color;
use crate::config::WallConfig;
use crate::rng::Rng;
use crate::sink::PixelSink;
use crate::time::Clock;

/// The literal the finale spells and blinks.
const FINALE_WORD: &str = "run";

/// Random single-pixel flickers played while the wall "listens".
const FLICKER_PASSES: usize = 20;
/// Synchronized blinks of the finale word's pixels.
const GROUP_BLINKS: usize = 20;
/// Full-strip strobe passes closing the finale.
const STROBE_PASSES: usize = 15;

/// How long a spelled letter stays lit.
const LETTER_HOLD: Duration = Duration::from_secs(1);
/// Dark gap between spelled letters.
const LETTER_GAP: Duration = Duration::from_millis(500);
/// Stall for a character that is not on the wall.
const BLANK_HOLD: Duration = Duration::from_millis(750);
/// Beat of silence between the wall going dark and spelling starting.
const PRE_SPELL_PAUSE: Duration = Duration::from_millis(1750);

/// Where an animation run currently is in its phase sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No run in progress.
    Idle,
    /// Phase A: strip initializing to the show palette.
    Init,
    /// Phase B: listening pause and random flicker.
    Flicker,
    /// Phase C: message spelled out letter by letter.
    Spell,
    /// Phase D: terminal "run" finale.
    Finale,
}

/// Drives one animation run against a [`PixelSink`].
///
/// The engine borrows the immutable [`WallConfig`] plus injected randomness
/// and timing, and owns nothing else; the sink is borrowed only for the
/// duration of each call, keeping it the single source of pixel truth.
pub struct AnimationEngine<'a, R: Rng, C: Clock> {
    config: &'a WallConfig,
    rng: &'a mut R,
    clock: &'a mut C,
    phase: Phase,
}

impl<'a, R: Rng, C: Clock> AnimationEngine<'a, R, C> {
    /// Creates an engine for a single run.
    ///
    /// `config` is assumed valid (see [`WallConfig::validate`]).
    pub fn new(config: &'a WallConfig, rng: &'a mut R, clock: &'a mut C) -> Self {
        Self {
            config,
            rng,
            clock,
            phase: Phase::Idle,
        }
    }

    /// Plays the full show for one message, consuming the engine.
    ///
    /// Executes the four phases strictly in order, each blocking until it
    /// completes. `word` must already be normalized (lowercased, punctuation
    /// stripped); characters not on the wall render as timed gaps.
    pub fn run<S: PixelSink>(mut self, sink: &mut S, word: &str) {
        self.enter(Phase::Init);
        self.init_lights(sink);

        self.enter(Phase::Flicker);
        self.pre_flicker(sink);

        self.enter(Phase::Spell);
        self.spell_word(sink, word);

        self.enter(Phase::Finale);
        self.run_finale(sink);

        self.enter(Phase::Idle);
    }

    /// Phase A: sets every mapped pixel to the palette, round-robin, with a
    /// single flush at the end. Deterministic and idempotent.
    pub fn init_lights<S: PixelSink>(&mut self, sink: &mut S) {
        let palette = &self.config.palette;
        for index in 0..self.config.alphabet.len() {
            sink.set_pixel(index + self.config.shift, palette[index % palette.len()]);
        }
        sink.show();
    }

    /// Phase B: a long "listening" pause, then random pixels flicker.
    pub fn pre_flicker<S: PixelSink>(&mut self, sink: &mut S) {
        let listen = self.rng.pick(5, 9);
        self.clock.sleep(Duration::from_secs(listen));

        let lo = self.config.shift as u64;
        let hi = (self.config.shift + self.config.alphabet.len() - 1) as u64;
        for _ in 0..FLICKER_PASSES {
            let pixel = self.rng.pick(lo, hi) as usize;
            self.flicker(sink, pixel);
            sink.show();
            self.hold_ms(10, 50);
        }
    }

    /// Flickers a single pixel and restores it to its original color.
    ///
    /// Snapshots the pixel first, then for `flicker_loops - 1` sub-iterations
    /// goes dark and comes back at the current color scaled by
    /// `flicker_scale` with per-channel clamping. The final restore writes
    /// the exact snapshot, so the net effect is always a return to baseline.
    /// The restore is not flushed here; the caller's next flush commits it.
    pub fn flicker<S: PixelSink>(&mut self, sink: &mut S, pixel: usize) {
        let original = sink.get_pixel(pixel);

        for _ in 1..self.config.flicker_loops {
            let current = sink.get_pixel(pixel);

            sink.set_pixel(pixel, color::OFF);
            sink.show();
            self.hold_ms(10, 50);

            sink.set_pixel(pixel, color::scale(current, self.config.flicker_scale));
            sink.show();
            self.hold_ms(10, 80);
        }

        sink.set_pixel(pixel, original);
    }

    /// Phase C: darkens the wall in shuffled order, then spells `word` one
    /// letter at a time.
    pub fn spell_word<S: PixelSink>(&mut self, sink: &mut S, word: &str) {
        let shift = self.config.shift;

        // Kill the lights in a randomized order so the wipe isn't linear.
        let mut order: Vec<usize> = (0..self.config.alphabet.len()).collect();
        self.rng.shuffle(&mut order);
        for index in order {
            sink.set_pixel(index + shift, color::OFF);
            sink.show();
            self.hold_ms(10, 80);
        }

        self.clock.sleep(PRE_SPELL_PAUSE);

        for character in word.chars() {
            match self.config.alphabet.pixel_for(character, shift) {
                Some(pixel) => {
                    sink.set_pixel(pixel, self.config.highlight);
                    sink.show();
                    self.clock.sleep(LETTER_HOLD);

                    sink.set_pixel(pixel, color::OFF);
                    sink.show();
                    self.clock.sleep(LETTER_GAP);
                }
                None => self.clock.sleep(BLANK_HOLD),
            }
        }
    }

    /// Phase D: spells "run", frantically blinks its three letters as a
    /// group, then strobes the whole strip. Every pass ends dark, so the
    /// wall is off when the run completes.
    pub fn run_finale<S: PixelSink>(&mut self, sink: &mut S) {
        self.spell_word(sink, FINALE_WORD);

        let shift = self.config.shift;
        let group: Vec<usize> = FINALE_WORD
            .chars()
            .filter_map(|character| self.config.alphabet.pixel_for(character, shift))
            .collect();

        for _ in 0..GROUP_BLINKS {
            for &pixel in &group {
                sink.set_pixel(pixel, self.config.highlight);
            }
            sink.show();
            self.hold_ms(15, 100);

            for &pixel in &group {
                sink.set_pixel(pixel, color::OFF);
            }
            sink.show();
            self.hold_ms(50, 150);
        }

        for _ in 0..STROBE_PASSES {
            self.init_lights(sink);
            self.hold_ms(50, 150);

            for index in 0..self.config.alphabet.len() {
                sink.set_pixel(index + shift, color::OFF);
            }
            sink.show();
            self.hold_ms(50, 150);
        }
    }

    fn enter(&mut self, next: Phase) {
        log::debug!("animation phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    /// Sleeps a uniform random duration in `[lo, hi]` milliseconds.
    fn hold_ms(&mut self, lo: u64, hi: u64) {
        let millis = self.rng.pick(lo, hi);
        self.clock.sleep(Duration::from_millis(millis));
    }
}
