//! Bundled [`EventSource`] implementations.
//!
//! The real chat transport is a collaborator behind the [`EventSource`]
//! contract; these two implementations cover local use: replaying a recorded
//! event file and reading messages interactively from stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use crate::dispatcher::{Event, EventSource};

/// Replays chat events from a file, one message per line.
#[derive(Debug)]
pub struct FileEventSource {
    lines: Lines<BufReader<File>>,
}

impl FileEventSource {
    /// Opens `path` for replay.
    pub fn open(path: &Path) -> io::Result<Self> {
        Ok(Self {
            lines: BufReader::new(File::open(path)?).lines(),
        })
    }
}

impl EventSource for FileEventSource {
    fn connect(&mut self) -> bool {
        true
    }

    fn poll(&mut self) -> Option<Vec<Event>> {
        match self.lines.next() {
            Some(Ok(line)) => Some(vec![Event { text: Some(line) }]),
            Some(Err(error)) => {
                log::warn!("replay file read failed: {error}");
                None
            }
            None => None,
        }
    }
}

/// Reads messages from stdin, standing in for a live chat transport.
///
/// Holds the credential the way a real transport would; an empty token is a
/// fatal connect failure, mirroring an auth rejection.
#[derive(Debug)]
pub struct ConsoleSource {
    token: String,
}

impl ConsoleSource {
    /// Creates a source authenticated by `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl EventSource for ConsoleSource {
    fn connect(&mut self) -> bool {
        if self.token.is_empty() {
            return false;
        }
        log::debug!("authenticated with a {}-byte token", self.token.len());
        true
    }

    fn poll(&mut self) -> Option<Vec<Event>> {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(vec![Event {
                text: Some(line.trim_end().to_string()),
            }]),
            Err(error) => {
                log::warn!("stdin read failed: {error}");
                None
            }
        }
    }
}
