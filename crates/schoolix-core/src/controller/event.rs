use serde::{Deserialize, Serialize};

use crate::outcome::VerificationOutcome;
use crate::session::{RemoteTarget, SessionState, StudentRecord};
use crate::texts::is_restart;

/// Something that happened to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Explicit full reset.
    Restart,
    /// A user message. A message equal to the restart command acts as [`Event::Restart`].
    Input(String),
    /// The user asked to re-send the call that last failed on transport.
    RetryRequested,
    /// Interpreted reply of the verification client.
    Verification(VerificationOutcome),
    /// Reply of the assistant client.
    AssistantReply(String),
    /// A remote call gave up (non-transient error or retries exhausted).
    RemoteFailed(RemoteTarget),
}

impl Event {
    pub fn is_restart(&self) -> bool {
        match self {
            Event::Restart => true,
            Event::Input(text) => is_restart(text),
            _ => false,
        }
    }
}

/// Side effect requested by a transition, executed by the caller in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Replace the transcript with a fresh greeting.
    ResetTranscript,
    /// Append a bot turn.
    Reply(String),
    /// Append a bot turn flagged as a transport error (offers a retry).
    ReplyError(String),
    /// Call the verification client with the full transcript.
    InvokeVerifier,
    /// Call the assistant client with the trimmed transcript.
    InvokeAssistant,
    /// Hand the record to the notification sink.
    Notify(StudentRecord),
}

/// Result of one step of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub effects: Vec<Effect>,
}

impl Transition {
    pub fn new(state: SessionState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }

    /// No change and nothing to do.
    pub fn unchanged(state: &SessionState) -> Self {
        Self::new(state.clone(), Vec::new())
    }

    /// Convenience for tests and logging: the text of every reply effect.
    pub fn replies(&self) -> Vec<&str> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Reply(text) | Effect::ReplyError(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
