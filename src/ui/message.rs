//! Transient on-screen messages.
//!
//! While any message is shown, panel tooltips stay hidden so the two texts
//! never overlap.

use crate::renderer::{Surface, Text};
use std::collections::VecDeque;

/// Maximum messages shown at once; the oldest is dropped first
const MAX_MESSAGES: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct TimedEntry {
    pub text: String,
    pub x: i32,
    pub y: i32,
    /// Milliseconds left before the message disappears
    pub remaining_ms: f64,
}

/// Message overlay owned by the game session
#[derive(Debug)]
pub struct TimedMessage {
    entries: VecDeque<TimedEntry>,
    text: Text,
}

impl Default for TimedMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl TimedMessage {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_MESSAGES),
            text: Text::panel(),
        }
    }

    /// Show `text` at `(x, y)` for `duration_ms` milliseconds
    pub fn add_message(&mut self, text: impl Into<String>, x: i32, y: i32, duration_ms: f64) {
        if self.entries.len() >= MAX_MESSAGES {
            self.entries.pop_front();
        }
        self.entries.push_back(TimedEntry {
            text: text.into(),
            x,
            y,
            remaining_ms: duration_ms,
        });
    }

    /// Age every message by `elapsed_ms` and drop the expired ones
    pub fn update(&mut self, elapsed_ms: f64) {
        for entry in &mut self.entries {
            entry.remaining_ms -= elapsed_ms;
        }
        self.entries.retain(|entry| entry.remaining_ms > 0.0);
    }

    pub fn has_message(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn messages(&self) -> impl Iterator<Item = &TimedEntry> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn render(&self, g: &mut dyn Surface) {
        for entry in &self.entries {
            g.draw_text(&self.text, entry.x, entry.y, &entry.text);
        }
    }
}
