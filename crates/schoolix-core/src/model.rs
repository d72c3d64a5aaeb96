//! Remote model request types and the `ChatModel` seam.
//!
//! The controller never talks HTTP. It hands a [`ModelRequest`] to whatever
//! implements [`ChatModel`] and receives free text back.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transcript::{Speaker, Turn};

/// Role of a message as the remote model understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelRole {
    User,
    Model,
}

impl From<Speaker> for ModelRole {
    fn from(speaker: Speaker) -> Self {
        match speaker {
            Speaker::User => ModelRole::User,
            Speaker::Bot => ModelRole::Model,
        }
    }
}

/// One entry of the ordered conversation submitted to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMessage {
    pub role: ModelRole,
    pub content: String,
}

impl ModelMessage {
    /// Maps turns onto model messages, dropping turns flagged as transport errors.
    pub fn from_turns(turns: &[Turn]) -> Vec<ModelMessage> {
        turns
            .iter()
            .filter(|turn| !turn.is_error)
            .map(|turn| ModelMessage {
                role: turn.speaker.into(),
                content: turn.text.clone(),
            })
            .collect()
    }
}

/// A complete request: conversation, fixed instruction set and sampling temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRequest {
    pub messages: Vec<ModelMessage>,
    pub system_instruction: String,
    pub temperature: f32,
}

/// Failure reported by a remote model call.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct RemoteError {
    /// HTTP status, when the failure came from a response.
    pub status_code: Option<u16>,
    pub message: String,
}

impl RemoteError {
    pub fn new(status_code: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    /// Rate-limited or service-unavailable, by status code or by the description.
    pub fn is_transient(&self) -> bool {
        matches!(self.status_code, Some(429) | Some(503))
            || self.message.contains("429")
            || self.message.contains("503")
    }
}

/// Anything able to turn a [`ModelRequest`] into response text.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn generate(&self, request: &ModelRequest) -> Result<String, RemoteError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_by_status_code() {
        assert!(RemoteError::new(Some(429), "Too Many Requests").is_transient());
        assert!(RemoteError::new(Some(503), "Unavailable").is_transient());
        assert!(!RemoteError::new(Some(400), "Bad Request").is_transient());
        assert!(!RemoteError::new(Some(500), "Internal").is_transient());
    }

    #[test]
    fn test_transient_by_message() {
        assert!(RemoteError::new(None, "upstream replied 503 Service Unavailable").is_transient());
        assert!(RemoteError::new(None, "got 429 from proxy").is_transient());
        assert!(!RemoteError::new(None, "connection reset").is_transient());
    }

    #[test]
    fn test_from_turns_maps_roles_and_skips_errors() {
        let turns = vec![
            Turn::bot("Hello"),
            Turn::user("Aarav Sharma"),
            Turn::bot_error("service down"),
        ];

        let messages = ModelMessage::from_turns(&turns);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ModelRole::Model);
        assert_eq!(messages[1].role, ModelRole::User);
        assert_eq!(messages[1].content, "Aarav Sharma");
    }
}
