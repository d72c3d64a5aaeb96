//! Verification agent: the security instruction set plus outcome parsing.

use std::sync::Arc;

use schoolix_core::config::ModelSettings;
use schoolix_core::model::{ChatModel, RemoteError};
use schoolix_core::outcome::VerificationOutcome;
use schoolix_core::texts;
use schoolix_core::transcript::Turn;

use crate::prompts::SECURITY_SYSTEM_INSTRUCTION;
use crate::remote_client::RemoteClient;
use crate::retry::RetryPolicy;

pub struct VerificationAgent {
    client: RemoteClient,
}

impl VerificationAgent {
    pub fn new(model: Arc<dyn ChatModel>, settings: &ModelSettings, retry: RetryPolicy) -> Self {
        Self {
            client: RemoteClient::from_settings(
                model,
                SECURITY_SYSTEM_INSTRUCTION,
                settings,
                retry,
                texts::VERIFIER_EMPTY,
            ),
        }
    }

    /// Sends the full transcript and interprets the reply.
    pub async fn verify(&self, turns: &[Turn]) -> Result<VerificationOutcome, RemoteError> {
        let raw = self.client.invoke(turns).await?;
        Ok(VerificationOutcome::parse(&raw))
    }
}
