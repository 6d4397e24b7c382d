//! Event dispatch: one serialized animation run per chat message.
//!
//! The dispatcher polls an [`EventSource`], normalizes incoming text and
//! plays exactly one animation at a time. It does not poll while a run is in
//! progress, so messages arriving mid-show are dropped by design.

use std::time::Duration;

use crate::config::WallConfig;
use crate::engine::AnimationEngine;
use crate::rng::{FastRng, Rng};
use crate::sink::PixelSink;
use crate::time::{Clock, SystemClock};

/// Delay between polls of the event source.
const DEFAULT_POLL_DELAY: Duration = Duration::from_secs(1);

/// A single raw event from the stream. Fields other than the message text
/// are ignored by the wall, so they are not modeled here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Message text, absent for non-message events.
    pub text: Option<String>,
}

/// Trait for abstracting the chat event stream.
///
/// Implementations own the connection lifecycle; the dispatcher only sees
/// batches of events. There is no reconnect policy - a failed connect is
/// fatal to the dispatcher.
pub trait EventSource {
    /// Establishes the connection. `false` signals a fatal auth or
    /// configuration failure.
    fn connect(&mut self) -> bool;

    /// Returns the next batch of events, or `None` once the stream has
    /// closed. An empty batch is a normal quiet poll.
    fn poll(&mut self) -> Option<Vec<Event>>;
}

/// The dispatcher's per-message state. Never concurrent: `Processing` covers
/// exactly one animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    /// Waiting for the next qualifying message.
    Idle,
    /// An animation run is playing.
    Processing,
}

/// Errors that can occur while dispatching events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// The event source failed to establish its connection.
    ConnectionFailed,
}

impl core::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DispatchError::ConnectionFailed => {
                write!(f, "connection failed: invalid token or unreachable event source")
            }
        }
    }
}

impl std::error::Error for DispatchError {}

/// Consumes an event stream and triggers one [`AnimationEngine`] run per
/// non-empty message.
pub struct EventDispatcher<'a, E: EventSource, R: Rng, C: Clock> {
    source: E,
    config: &'a WallConfig,
    rng: R,
    clock: C,
    poll_delay: Duration,
    state: DispatcherState,
}

impl<'a, E: EventSource> EventDispatcher<'a, E, FastRng, SystemClock> {
    /// Creates a dispatcher with wall-clock timing and entropy-seeded
    /// randomness.
    pub fn new(source: E, config: &'a WallConfig) -> Self {
        Self::with_parts(source, config, FastRng::new(), SystemClock)
    }
}

impl<'a, E: EventSource, R: Rng, C: Clock> EventDispatcher<'a, E, R, C> {
    /// Creates a dispatcher with explicit randomness and timing, the
    /// constructor tests use to inject deterministic doubles.
    pub fn with_parts(source: E, config: &'a WallConfig, rng: R, clock: C) -> Self {
        Self {
            source,
            config,
            rng,
            clock,
            poll_delay: DEFAULT_POLL_DELAY,
            state: DispatcherState::Idle,
        }
    }

    /// Sets the delay between event polls.
    pub fn poll_delay(mut self, delay: Duration) -> Self {
        self.poll_delay = delay;
        self
    }

    /// Returns the dispatcher's current state.
    pub fn state(&self) -> DispatcherState {
        self.state
    }

    /// Connects and runs the dispatch loop until the stream closes.
    ///
    /// Each qualifying message plays a full animation to completion before
    /// the source is polled again; the sink is exclusively borrowed for the
    /// run's duration.
    ///
    /// # Errors
    /// * `ConnectionFailed` - the source refused to connect; not retried
    pub fn run<S: PixelSink>(&mut self, sink: &mut S) -> Result<(), DispatchError> {
        sink.begin();

        if !self.source.connect() {
            return Err(DispatchError::ConnectionFailed);
        }
        log::info!("connected and running");

        while let Some(batch) = self.source.poll() {
            if let Some(raw) = first_text(&batch) {
                let message = normalize(&raw);
                if !message.is_empty() {
                    log::info!("event received: {raw}");
                    self.state = DispatcherState::Processing;

                    let engine = AnimationEngine::new(self.config, &mut self.rng, &mut self.clock);
                    engine.run(sink, &message);

                    self.state = DispatcherState::Idle;
                }
            }
            self.clock.sleep(self.poll_delay);
        }

        log::info!("event stream closed");
        Ok(())
    }
}

/// Extracts the first event in a poll batch that carries a text field.
fn first_text(batch: &[Event]) -> Option<String> {
    batch.iter().find_map(|event| event.text.clone())
}

/// Lowercases `text` and strips ASCII punctuation. Whitespace survives, so
/// word gaps render as timed pauses when spelled.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|character| !character.is_ascii_punctuation())
        .collect()
}
