//! Application state definitions

use super::forms::FormFocus;
use std::collections::VecDeque;

/// Front-end state that lives outside the hosted component
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Element that receives key input
    pub focus: FormFocus,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Number of default-action reloads so far
    pub reloads: u32,
    /// Errors waiting to be shown, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.error_queue.push_back(message.into());
    }

    /// Error currently on screen, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn has_error(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Dismiss the error on screen; the next queued one (if any) takes its place
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
