//! Conversation turns and the append-only transcript store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::texts;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

/// A single chat turn. Immutable once appended to a [`Transcript`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    pub sent_at: DateTime<Utc>,
    /// Set on bot turns produced by a failed remote call.
    #[serde(default)]
    pub is_error: bool,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text.into(), false)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Speaker::Bot, text.into(), false)
    }

    pub fn bot_error(text: impl Into<String>) -> Self {
        Self::new(Speaker::Bot, text.into(), true)
    }

    fn new(speaker: Speaker, text: String, is_error: bool) -> Self {
        Self {
            speaker,
            text,
            sent_at: Utc::now(),
            is_error,
        }
    }
}

/// Ordered sequence of turns. Insertion order is display order.
///
/// Turns are never edited or removed; [`Transcript::reset`] swaps the whole
/// sequence for a single fresh greeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self {
            turns: vec![Turn::bot(texts::GREETING)],
        }
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}
