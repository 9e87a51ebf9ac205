// src/notify.rs

//! User-facing notices emitted while loading configuration.
//!
//! The loader reports what it repaired or assumed (missing timeouts, no
//! proxy, ...) through a [`Notify`] sink instead of printing directly, so
//! embedders can route the messages anywhere and tests can run silent.

use std::thread;
use std::time::Duration;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational: a default was applied or an optional feature is off.
    Info,
    /// Something the user probably wants to reconsider.
    Warning,
}

/// Sink for configuration notices.
pub trait Notify {
    fn notify(&mut self, level: NoticeLevel, message: &str);
}

/// Sink that prints to the terminal: info to stdout, warnings to stderr.
#[derive(Debug, Default)]
pub struct ConsoleNotify {
    quiet: bool,
    pace: Option<Duration>,
}

impl ConsoleNotify {
    /// `quiet` drops informational notices (warnings always print).
    /// `pace` pauses after each printed notice, giving the slow, readable
    /// startup output the original tool had; `None` disables pacing.
    pub fn new(quiet: bool, pace: Option<Duration>) -> Self {
        Self { quiet, pace }
    }
}

impl Notify for ConsoleNotify {
    fn notify(&mut self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info if self.quiet => return,
            NoticeLevel::Info => println!("{message}"),
            NoticeLevel::Warning => eprintln!("warning: {message}"),
        }

        if let Some(pause) = self.pace {
            thread::sleep(pause);
        }
    }
}

/// Sink that records every notice in memory.
///
/// Used by the test suite, and useful for embedders that want to surface
/// notices somewhere other than a terminal.
#[derive(Debug, Default)]
pub struct RecordingNotify {
    notices: Vec<(NoticeLevel, String)>,
}

impl RecordingNotify {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices seen so far, in emission order.
    pub fn notices(&self) -> &[(NoticeLevel, String)] {
        &self.notices
    }

    /// Messages recorded at the given level, in emission order.
    pub fn messages_at(&self, level: NoticeLevel) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

impl Notify for RecordingNotify {
    fn notify(&mut self, level: NoticeLevel, message: &str) {
        self.notices.push((level, message.to_string()));
    }
}
