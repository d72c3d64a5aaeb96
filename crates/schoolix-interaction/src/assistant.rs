//! Assistant agent: open-ended Q&A over a trimmed transcript.

use std::sync::Arc;

use schoolix_core::config::ModelSettings;
use schoolix_core::model::{ChatModel, RemoteError};
use schoolix_core::texts;
use schoolix_core::transcript::{Speaker, Turn};

use crate::prompts::ASSISTANT_SYSTEM_INSTRUCTION;
use crate::remote_client::RemoteClient;
use crate::retry::RetryPolicy;

/// Most recent turns the assistant ever sees.
pub const ASSISTANT_WINDOW: usize = 10;

pub struct AssistantAgent {
    client: RemoteClient,
}

impl AssistantAgent {
    pub fn new(model: Arc<dyn ChatModel>, settings: &ModelSettings, retry: RetryPolicy) -> Self {
        Self {
            client: RemoteClient::from_settings(
                model,
                ASSISTANT_SYSTEM_INSTRUCTION,
                settings,
                retry,
                texts::ASSISTANT_EMPTY,
            ),
        }
    }

    /// Answers using only the turns after the assistant was unlocked.
    pub async fn reply(&self, turns: &[Turn]) -> Result<String, RemoteError> {
        let relevant = relevant_turns(turns);
        if relevant.iter().all(|turn| turn.is_error) {
            return Ok(texts::ASSISTANT_IDLE.to_string());
        }
        self.client.invoke(relevant).await
    }
}

/// Turns after the last bot turn that unlocked the assistant, capped to the
/// last [`ASSISTANT_WINDOW`]. Keeps the registration dialogue out of Q&A.
pub fn relevant_turns(turns: &[Turn]) -> &[Turn] {
    let start = turns
        .iter()
        .rposition(|turn| {
            turn.speaker == Speaker::Bot
                && (turn.text.contains(texts::PASSWORD_ACCEPTED_MARKER)
                    || turn.text.contains(texts::SUCCESS_SENTINEL))
        })
        .map(|index| index + 1)
        .unwrap_or(0);

    let after = &turns[start..];
    &after[after.len().saturating_sub(ASSISTANT_WINDOW)..]
}
