//! Shared test infrastructure for alphawall integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::collections::VecDeque;
use std::time::Duration;

use alphawall::color::OFF;
use alphawall::{Clock, Event, EventSource, PixelSink, Rgb, Rng};

// ============================================================================
// Recording PixelSink
// ============================================================================

/// One operation observed by the recording strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SinkOp {
    Set { index: usize, color: Rgb },
    Show,
}

/// PixelSink double that keeps real pixel state and a full operation log.
pub struct RecordingStrip {
    pixels: Vec<Rgb>,
    pub ops: Vec<SinkOp>,
    /// `begin` calls, counted separately from the pixel operation log.
    pub begins: usize,
}

impl RecordingStrip {
    pub fn new(led_count: usize) -> Self {
        Self {
            pixels: vec![OFF; led_count],
            ops: Vec::new(),
            begins: 0,
        }
    }

    /// Current color of a pixel.
    pub fn pixel(&self, index: usize) -> Rgb {
        self.pixels[index]
    }

    /// Snapshot of the whole strip.
    pub fn pixels(&self) -> Vec<Rgb> {
        self.pixels.clone()
    }

    /// Just the pixel writes, in order.
    pub fn set_ops(&self) -> Vec<(usize, Rgb)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SinkOp::Set { index, color } => Some((*index, *color)),
                SinkOp::Show => None,
            })
            .collect()
    }

    /// Number of flushes observed.
    pub fn show_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == SinkOp::Show).count()
    }

    /// Forgets the log (pixel state is kept).
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl PixelSink for RecordingStrip {
    fn begin(&mut self) {
        assert!(self.ops.is_empty(), "begin must precede all pixel writes");
        self.begins += 1;
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
        self.ops.push(SinkOp::Set { index, color });
    }

    fn get_pixel(&self, index: usize) -> Rgb {
        self.pixels.get(index).copied().unwrap_or(OFF)
    }

    fn show(&mut self) {
        self.ops.push(SinkOp::Show);
    }
}

// ============================================================================
// Manual Clock
// ============================================================================

/// Clock double that records requested sleeps instead of blocking.
#[derive(Debug, Default)]
pub struct ManualClock {
    pub sleeps: Vec<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_slept(&self) -> Duration {
        self.sleeps.iter().sum()
    }
}

impl Clock for ManualClock {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}

// ============================================================================
// Scripted Rng
// ============================================================================

/// Deterministic Rng double: every draw returns the low bound and shuffles
/// leave the permutation in identity order, so operation sequences are exact.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    picks: VecDeque<u64>,
}

impl ScriptedRng {
    /// Draws return the low bound; shuffle is the identity.
    pub fn low() -> Self {
        Self::default()
    }

    /// Queues explicit values for the next draws; once exhausted, draws fall
    /// back to the low bound.
    pub fn with_picks(picks: impl IntoIterator<Item = u64>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

impl Rng for ScriptedRng {
    fn pick(&mut self, lo: u64, hi: u64) -> u64 {
        match self.picks.pop_front() {
            Some(value) => value.clamp(lo, hi),
            None => lo,
        }
    }

    fn shuffle(&mut self, _items: &mut [usize]) {}
}

// ============================================================================
// Fake EventSource
// ============================================================================

/// EventSource double fed from a queue of poll batches; the stream closes
/// when the queue empties.
pub struct FakeSource {
    pub connect_ok: bool,
    batches: VecDeque<Vec<Event>>,
    pub polls: usize,
}

impl FakeSource {
    pub fn new(batches: impl IntoIterator<Item = Vec<Event>>) -> Self {
        Self {
            connect_ok: true,
            batches: batches.into_iter().collect(),
            polls: 0,
        }
    }

    pub fn refusing_connection() -> Self {
        Self {
            connect_ok: false,
            batches: VecDeque::new(),
            polls: 0,
        }
    }

    /// Single batch carrying one text message.
    pub fn single_message(text: &str) -> Self {
        Self::new([vec![Event {
            text: Some(text.to_string()),
        }]])
    }
}

impl EventSource for FakeSource {
    fn connect(&mut self) -> bool {
        self.connect_ok
    }

    fn poll(&mut self) -> Option<Vec<Event>> {
        self.polls += 1;
        self.batches.pop_front()
    }
}
