//! A remote model bound to one instruction set.

use std::sync::Arc;

use schoolix_core::config::ModelSettings;
use schoolix_core::model::{ChatModel, ModelMessage, ModelRequest, RemoteError};
use schoolix_core::transcript::Turn;

use crate::retry::{RetryPolicy, with_retry};

/// Sends turns plus a fixed instruction set and temperature to a [`ChatModel`].
///
/// Transient failures are retried per the [`RetryPolicy`]; an empty reply is
/// replaced by `empty_fallback`.
pub struct RemoteClient {
    model: Arc<dyn ChatModel>,
    instruction: &'static str,
    temperature: f32,
    retry: RetryPolicy,
    empty_fallback: &'static str,
}

impl RemoteClient {
    pub fn new(
        model: Arc<dyn ChatModel>,
        instruction: &'static str,
        temperature: f32,
        retry: RetryPolicy,
        empty_fallback: &'static str,
    ) -> Self {
        Self {
            model,
            instruction,
            temperature,
            retry,
            empty_fallback,
        }
    }

    pub fn from_settings(
        model: Arc<dyn ChatModel>,
        instruction: &'static str,
        settings: &ModelSettings,
        retry: RetryPolicy,
        empty_fallback: &'static str,
    ) -> Self {
        Self::new(model, instruction, settings.temperature, retry, empty_fallback)
    }

    /// Returns the trimmed reply, or the fallback text when it is empty.
    pub async fn invoke(&self, turns: &[Turn]) -> Result<String, RemoteError> {
        let request = ModelRequest {
            messages: ModelMessage::from_turns(turns),
            system_instruction: self.instruction.to_string(),
            temperature: self.temperature,
        };

        let text = with_retry(&self.retry, || self.model.generate(&request)).await?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::warn!("Model returned an empty reply");
            Ok(self.empty_fallback.to_string())
        } else {
            Ok(trimmed.to_string())
        }
    }
}
