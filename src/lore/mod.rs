//! Flavor text: fish lore and shopkeeper chat.
//!
//! A [`LoreService`] produces text. The [`LoreDispatcher`] runs it off the
//! simulation thread and turns every failure into a fixed fallback line.

pub mod book;
pub mod client;
pub mod dispatcher;

pub use book::{ChatLog, LoreBook};
pub use client::GeminiClient;
pub use dispatcher::{LoreDispatcher, LoreRequester, LoreUpdate};

use crate::core::constants::{
    CHAT_EMPTY_TEXT, CHAT_FAILED_TEXT, CHAT_UNCONFIGURED_TEXT, LORE_EMPTY_TEXT, LORE_FAILED_TEXT,
    LORE_UNCONFIGURED_TEXT,
};
use crate::fishing::{Fish, Rarity};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoreError {
    #[error("lore service is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Http(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("service returned no text")]
    EmptyResponse,
}

/// What the lore service needs to know about a catch.
#[derive(Debug, Clone, PartialEq)]
pub struct LoreRequest {
    pub fish_id: Uuid,
    pub species: &'static str,
    pub rarity: Rarity,
    pub weight: f64,
}

impl LoreRequest {
    pub fn for_fish(fish: &Fish) -> Self {
        Self {
            fish_id: fish.id,
            species: fish.name(),
            rarity: fish.rarity,
            weight: fish.weight,
        }
    }

    pub fn prompt(&self) -> String {
        format!(
            "Describe a mythical or legendary {} {} caught in a pixel art river. \
             It weighs {:.1} lbs. One short sentence, poetic and mysterious.",
            self.rarity.name(),
            self.species,
            self.weight
        )
    }
}

/// Prompt for the shopkeeper's next line given the chat so far.
pub fn chat_prompt(history: &[String]) -> String {
    let history = serde_json::to_string(history).unwrap_or_else(|_| "[]".to_string());
    format!(
        "You are a mysterious shopkeeper by a pixelated river. \
         You sell fishing gear to an old man. \
         User conversation history: {}. \
         Respond to the last message in character. Keep it brief (max 15 words).",
        history
    )
}

/// A source of generated flavor text. Calls may block.
pub trait LoreService: Send + Sync {
    /// One or two sentences about a caught fish.
    fn describe(&self, request: &LoreRequest) -> Result<String, LoreError>;

    /// The shopkeeper's reply to the last line of `history`.
    fn reply(&self, history: &[String]) -> Result<String, LoreError>;
}

/// Whether lore is requested for a fish of this rarity.
pub fn wants_lore(rarity: Rarity) -> bool {
    rarity != Rarity::Common
}

fn text_or_fallback(
    result: Result<String, LoreError>,
    unconfigured: &str,
    failed: &str,
    empty: &str,
) -> String {
    match result {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) | Err(LoreError::EmptyResponse) => empty.to_string(),
        Err(LoreError::NotConfigured) => unconfigured.to_string(),
        Err(err) => {
            tracing::warn!(error = %err, "lore service failed");
            failed.to_string()
        }
    }
}

/// Resolves a lore result to display text.
pub fn lore_text(result: Result<String, LoreError>) -> String {
    text_or_fallback(result, LORE_UNCONFIGURED_TEXT, LORE_FAILED_TEXT, LORE_EMPTY_TEXT)
}

/// Resolves a chat result to display text.
pub fn chat_text(result: Result<String, LoreError>) -> String {
    text_or_fallback(result, CHAT_UNCONFIGURED_TEXT, CHAT_FAILED_TEXT, CHAT_EMPTY_TEXT)
}
