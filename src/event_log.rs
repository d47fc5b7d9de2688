//! In-app event log shown on the log page.
//!
//! Every entry is also forwarded to `tracing`, so the terminal log and the
//! on-screen log always agree. The on-screen buffer keeps the last
//! [`LOG_ENTRIES`] lines; older lines are dropped.
//!
//! ```text
//! 00012.345 I A5-1 -90 -> -95 dBm (AP input: 45)
//! 00013.002 W Snapshot failed: permission denied
//! ```

use core::fmt::Write;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use handover_common::colors::{LOG_ERROR, LOG_INFO, LOG_WARN};
use handover_common::thresholds::ap_input;
use heapless::{Deque, String};

use crate::state::Change;

/// Number of lines kept on screen.
pub const LOG_ENTRIES: usize = 32;

/// Maximum characters per message (longer messages are truncated).
pub const LOG_MSG_LEN: usize = 80;

/// Log severity, mirrored onto `tracing` levels.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LogLevel {
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Display color on the log page.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Info => LOG_INFO,
            Self::Warn => LOG_WARN,
            Self::Error => LOG_ERROR,
        }
    }

    /// Single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// A single log entry with level, message, and time since startup.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String<LOG_MSG_LEN>,
    pub elapsed_ms: u64,
}

impl LogEntry {
    fn new(
        level: LogLevel,
        message: &str,
        elapsed_ms: u64,
    ) -> Self {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        for c in message.chars() {
            if msg.push(c).is_err() {
                break;
            }
        }
        Self {
            level,
            message: msg,
            elapsed_ms,
        }
    }

    /// `SSSSS.mmm` timestamp column.
    pub fn timestamp(&self) -> String<12> {
        let mut s: String<12> = String::new();
        let secs = (self.elapsed_ms / 1000) % 100_000;
        let _ = write!(s, "{secs:05}.{:03}", self.elapsed_ms % 1000);
        s
    }
}

/// Ring buffer of recent events.
pub struct EventLog {
    started: Instant,
    entries: Deque<LogEntry, LOG_ENTRIES>,
    /// Total entries ever pushed, used for change detection.
    total: usize,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            entries: Deque::new(),
            total: 0,
        }
    }

    /// Push a message. If the buffer is full, the oldest line is dropped.
    pub fn push(
        &mut self,
        level: LogLevel,
        message: &str,
    ) {
        match level {
            LogLevel::Info => tracing::info!(target: "handover::events", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "handover::events", "{message}"),
            LogLevel::Error => tracing::error!(target: "handover::events", "{message}"),
        }

        if self.entries.is_full() {
            self.entries.pop_front();
        }
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        self.entries.push_back(LogEntry::new(level, message, elapsed_ms)).ok();
        self.total += 1;
    }

    pub fn info(
        &mut self,
        message: &str,
    ) {
        self.push(LogLevel::Info, message);
    }

    pub fn warn(
        &mut self,
        message: &str,
    ) {
        self.push(LogLevel::Warn, message);
    }

    pub fn error(
        &mut self,
        message: &str,
    ) {
        self.push(LogLevel::Error, message);
    }

    /// Log a control state change in human-readable form.
    pub fn record_change(
        &mut self,
        change: Change,
    ) {
        self.info(&describe_change(change));
    }

    /// Entries, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> { self.entries.iter() }

    /// Number of lines currently held.
    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[allow(dead_code)]
    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Entries pushed since startup, including dropped ones.
    #[inline]
    pub const fn total(&self) -> usize { self.total }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

/// One-line description of a control state change.
pub fn describe_change(change: Change) -> String<LOG_MSG_LEN> {
    let mut s: String<LOG_MSG_LEN> = String::new();
    match change {
        Change::Selected(param) => {
            let _ = write!(s, "Selected {}", param.label());
        }
        Change::Value { param, old, new } if param.shows_ap_input() => {
            let _ = write!(
                s,
                "{} {old} -> {new} {} (AP input: {})",
                param.short_name(),
                param.unit(),
                ap_input(new)
            );
        }
        Change::Value { param, old, new } => {
            let _ = write!(s, "{} {old} -> {new} {}", param.short_name(), param.unit());
        }
        Change::Reset => {
            let _ = s.push_str("Thresholds reset to defaults");
        }
        Change::Mode(mode) => {
            let _ = write!(s, "Region mode: {}", mode.label());
        }
    }
    s
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use handover_common::{Parameter, RegionMode};

    use super::*;

    #[test]
    fn test_push_and_iter() {
        let mut log = EventLog::new();
        assert!(log.is_empty());
        log.info("first");
        log.warn("second");

        let lines: Vec<&str> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(lines, ["first", "second"]);
        assert_eq!(log.iter().nth(1).map(|e| e.level), Some(LogLevel::Warn));
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut log = EventLog::new();
        for i in 0..LOG_ENTRIES + 3 {
            log.info(&format!("line {i}"));
        }
        assert_eq!(log.len(), LOG_ENTRIES);
        assert_eq!(log.total(), LOG_ENTRIES + 3);
        assert_eq!(log.iter().next().map(|e| e.message.as_str()), Some("line 3"));
    }

    #[test]
    fn test_long_message_truncated() {
        let mut log = EventLog::new();
        log.error(&"x".repeat(200));
        assert_eq!(log.iter().next().map(|e| e.message.len()), Some(LOG_MSG_LEN));
    }

    #[test]
    fn test_timestamp_format() {
        let entry = LogEntry::new(LogLevel::Info, "m", 12_345);
        assert_eq!(entry.timestamp().as_str(), "00012.345");
    }

    #[test]
    fn test_describe_threshold_change() {
        let change = Change::Value {
            param: Parameter::A5Serving,
            old: -90,
            new: -95,
        };
        assert_eq!(describe_change(change).as_str(), "A5-1 -90 -> -95 dBm (AP input: 45)");
    }

    #[test]
    fn test_describe_hysteresis_change() {
        let change = Change::Value {
            param: Parameter::Hysteresis,
            old: 3,
            new: 4,
        };
        assert_eq!(describe_change(change).as_str(), "Hyst 3 -> 4 dB");
    }

    #[test]
    fn test_describe_mode_change() {
        assert_eq!(describe_change(Change::Mode(RegionMode::Exact)).as_str(), "Region mode: EXACT");
    }

    #[test]
    fn test_level_prefixes() {
        assert_eq!(LogLevel::Info.prefix(), 'I');
        assert_eq!(LogLevel::Warn.prefix(), 'W');
        assert_eq!(LogLevel::Error.prefix(), 'E');
    }
}
