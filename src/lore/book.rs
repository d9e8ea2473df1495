//! Received flavor text: lore per fish and the shopkeeper conversation.

use crate::core::constants::LORE_PENDING_TEXT;
use std::collections::HashMap;
use uuid::Uuid;

/// Lore lines keyed by fish id.
#[derive(Debug, Clone, Default)]
pub struct LoreBook {
    entries: HashMap<Uuid, String>,
}

impl LoreBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, fish_id: Uuid, text: String) {
        self.entries.insert(fish_id, text);
    }

    pub fn get(&self, fish_id: Uuid) -> Option<&str> {
        self.entries.get(&fish_id).map(String::as_str)
    }

    /// The lore line, or the placeholder while the request is in flight.
    pub fn text_or_pending(&self, fish_id: Uuid) -> &str {
        self.get(fish_id).unwrap_or(LORE_PENDING_TEXT)
    }

    /// Forgets a fish, e.g. after it is sold.
    pub fn remove(&mut self, fish_id: Uuid) {
        self.entries.remove(&fish_id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The conversation with the shopkeeper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatLog {
    lines: Vec<String>,
    awaiting_reply: bool,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the player's line and returns the history to send.
    ///
    /// Blank input and input sent while a reply is pending are dropped.
    pub fn say(&mut self, text: &str) -> Option<Vec<String>> {
        let text = text.trim();
        if text.is_empty() || self.awaiting_reply {
            return None;
        }
        self.lines.push(format!("You: {}", text));
        self.awaiting_reply = true;
        Some(self.lines.clone())
    }

    pub fn receive(&mut self, text: &str) {
        self.lines.push(format!("Keep: {}", text));
        self.awaiting_reply = false;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }
}
