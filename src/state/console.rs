//! Bounded in-app console, the terminal stand-in for a browser devtools console

use chrono::{DateTime, Local};
use std::collections::VecDeque;

pub const DEFAULT_CONSOLE_CAPACITY: usize = 200;

/// Severity of a console line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Log,
    Info,
    Warn,
}

impl ConsoleLevel {
    pub fn tag(&self) -> &'static str {
        match self {
            ConsoleLevel::Log => "log",
            ConsoleLevel::Info => "info",
            ConsoleLevel::Warn => "warn",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConsoleEntry {
    pub at: DateTime<Local>,
    pub level: ConsoleLevel,
    pub message: String,
}

impl ConsoleEntry {
    /// `HH:MM:SS` prefix used by the console pane
    pub fn timestamp(&self) -> String {
        self.at.format("%H:%M:%S").to_string()
    }
}

/// Ring buffer of console lines; the oldest line goes first when full
#[derive(Debug, Clone)]
pub struct Console {
    entries: VecDeque<ConsoleEntry>,
    capacity: usize,
}

impl Default for Console {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CONSOLE_CAPACITY)
    }
}

impl Console {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_CONSOLE_CAPACITY)),
            capacity,
        }
    }

    pub fn push(&mut self, level: ConsoleLevel, message: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(ConsoleEntry {
            at: Local::now(),
            level,
            message: message.into(),
        });
    }

    pub fn log(&mut self, message: impl Into<String>) {
        self.push(ConsoleLevel::Log, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ConsoleLevel::Info, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(ConsoleLevel::Warn, message);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[allow(dead_code)]
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &ConsoleEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Messages only, oldest first
    #[allow(dead_code)]
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    /// The last `n` entries, oldest first
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &ConsoleEntry> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip)
    }
}
