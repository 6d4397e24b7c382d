//! Integration tests for the event dispatcher

mod common;
use common::*;

use std::time::Duration;

use alphawall::color::OFF;
use alphawall::{
    Alphabet, DispatchError, DispatcherState, Event, EventDispatcher, WallConfig,
};

fn test_config() -> WallConfig {
    WallConfig {
        led_count: 4,
        alphabet: Alphabet::new("hi*w"),
        flicker_loops: 1,
        ..WallConfig::default()
    }
}

#[test]
fn connect_failure_is_fatal_and_polls_nothing() {
    let config = test_config();
    let source = FakeSource::refusing_connection();
    let mut strip = RecordingStrip::new(config.led_count);

    let mut dispatcher =
        EventDispatcher::with_parts(source, &config, ScriptedRng::low(), ManualClock::new());
    let result = dispatcher.run(&mut strip);

    assert_eq!(result, Err(DispatchError::ConnectionFailed));
    assert!(strip.ops.is_empty());
}

#[test]
fn empty_normalized_text_triggers_no_animation() {
    let config = test_config();
    // Punctuation-only message normalizes to the empty string.
    let source = FakeSource::single_message("?!...");
    let mut strip = RecordingStrip::new(config.led_count);

    let mut dispatcher =
        EventDispatcher::with_parts(source, &config, ScriptedRng::low(), ManualClock::new());
    dispatcher.run(&mut strip).unwrap();

    assert!(strip.ops.is_empty());
    assert_eq!(dispatcher.state(), DispatcherState::Idle);
}

#[test]
fn textless_events_are_skipped() {
    let config = test_config();
    let source = FakeSource::new([vec![Event { text: None }], vec![]]);
    let mut strip = RecordingStrip::new(config.led_count);

    let mut dispatcher =
        EventDispatcher::with_parts(source, &config, ScriptedRng::low(), ManualClock::new());
    dispatcher.run(&mut strip).unwrap();

    assert!(strip.ops.is_empty());
}

#[test]
fn a_message_plays_one_full_animation() {
    let config = test_config();
    let source = FakeSource::single_message("Hi!");
    let mut strip = RecordingStrip::new(config.led_count);

    let mut dispatcher =
        EventDispatcher::with_parts(source, &config, ScriptedRng::low(), ManualClock::new());
    dispatcher.run(&mut strip).unwrap();

    // The show ran (flushes happened) and the wall ended dark.
    assert!(strip.show_count() > 0);
    for index in 0..config.alphabet.len() {
        assert_eq!(strip.pixel(index), OFF);
    }
    assert_eq!(dispatcher.state(), DispatcherState::Idle);
}

#[test]
fn dispatcher_sleeps_the_poll_delay_between_polls() {
    let config = test_config();
    // Three quiet polls, then the stream closes.
    let source = FakeSource::new([vec![], vec![], vec![]]);
    let mut strip = RecordingStrip::new(config.led_count);
    let mut clock = ManualClock::new();

    let mut dispatcher =
        EventDispatcher::with_parts(source, &config, ScriptedRng::low(), &mut clock)
            .poll_delay(Duration::from_millis(250));
    dispatcher.run(&mut strip).unwrap();

    assert!(strip.ops.is_empty());
    assert_eq!(clock.sleeps, vec![Duration::from_millis(250); 3]);
}

#[test]
fn sink_is_initialized_once_before_any_writes() {
    let config = test_config();
    let source = FakeSource::single_message("hi");
    let mut strip = RecordingStrip::new(config.led_count);

    let mut dispatcher =
        EventDispatcher::with_parts(source, &config, ScriptedRng::low(), ManualClock::new());
    dispatcher.run(&mut strip).unwrap();

    // The RecordingStrip itself asserts begin preceded the first write.
    assert_eq!(strip.begins, 1);
    assert!(strip.show_count() > 0);
}

#[test]
fn stream_close_ends_the_loop_cleanly() {
    let config = test_config();
    let source = FakeSource::new([]);
    let mut strip = RecordingStrip::new(config.led_count);

    let mut dispatcher =
        EventDispatcher::with_parts(source, &config, ScriptedRng::low(), ManualClock::new());
    assert!(dispatcher.run(&mut strip).is_ok());
}
