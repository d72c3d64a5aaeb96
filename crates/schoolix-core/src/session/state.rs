//! The per-session state value threaded through the controller.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::mode::Mode;
use super::record::ExtractedFields;

/// Verification failures allowed before the session locks.
pub const MAX_STRIKES: u8 = 2;

/// Which remote client a call goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoteTarget {
    Verifier,
    Assistant,
}

/// Everything the controller needs to decide the next step.
///
/// A plain value: the controller takes one in and hands a new one back, so the
/// state machine can be exercised without any rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub id: Uuid,
    pub mode: Mode,
    /// Verification failures seen in this session.
    pub failed_attempts: u8,
    /// Once set, only a restart clears it.
    pub locked: bool,
    pub fields: ExtractedFields,
    /// Registration answers accepted so far; drives positional extraction.
    pub answers_collected: usize,
    /// Remote call that failed on transport and may be retried.
    #[serde(default)]
    pub pending_retry: Option<RemoteTarget>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            mode: Mode::Choice,
            failed_attempts: 0,
            locked: false,
            fields: ExtractedFields::default(),
            answers_collected: 0,
            pending_retry: None,
        }
    }

    /// Whether the presentation layer should take ordinary input.
    ///
    /// The lock never applies to the assistant.
    pub fn accepts_input(&self) -> bool {
        !self.locked || self.mode == Mode::Assistant
    }
}
