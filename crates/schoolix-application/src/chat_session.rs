//! Chat session use case.
//!
//! Owns one transcript and one session state, runs user messages through the
//! controller and executes the effects it asks for. Every mutating call takes
//! `&mut self`, so a session has at most one send in flight.

use std::collections::VecDeque;
use std::sync::Arc;

use schoolix_core::config::AppConfig;
use schoolix_core::controller::{Controller, Effect, Event};
use schoolix_core::model::ChatModel;
use schoolix_core::notify::Notifier;
use schoolix_core::session::{RemoteTarget, SessionState};
use schoolix_core::texts::is_restart;
use schoolix_core::transcript::{Transcript, Turn};
use schoolix_interaction::{AssistantAgent, RetryPolicy, VerificationAgent};

/// Why a message was not taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Blank input.
    Empty,
    /// The session is locked and not in assistant mode.
    Locked,
}

/// Result of [`ChatSession::send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Accepted,
    Rejected(RejectReason),
}

pub struct ChatSession {
    controller: Controller,
    state: SessionState,
    transcript: Transcript,
    verifier: VerificationAgent,
    assistant: AssistantAgent,
    notifier: Arc<dyn Notifier>,
}

impl ChatSession {
    pub fn new(
        controller: Controller,
        verifier: VerificationAgent,
        assistant: AssistantAgent,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let state = SessionState::new();
        tracing::info!("Session {} started", state.id);
        Self {
            controller,
            state,
            transcript: Transcript::new(),
            verifier,
            assistant,
            notifier,
        }
    }

    /// Wires agents and controller from the loaded configuration.
    pub fn from_config(
        config: &AppConfig,
        verifier_model: Arc<dyn ChatModel>,
        assistant_model: Arc<dyn ChatModel>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let retry = RetryPolicy::from(&config.retry);
        Self::new(
            Controller::new(config.shared_secret.clone()),
            VerificationAgent::new(verifier_model, &config.verifier, retry.clone()),
            AssistantAgent::new(assistant_model, &config.assistant, retry),
            notifier,
        )
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether ordinary input is currently accepted.
    pub fn accepts_input(&self) -> bool {
        self.state.accepts_input()
    }

    /// Whether the last remote call failed and can be re-sent.
    pub fn can_retry(&self) -> bool {
        self.state.pending_retry.is_some()
            && self.transcript.last().is_some_and(|turn| turn.is_error)
    }

    /// Handles one user message. The restart command is honoured even when locked.
    pub async fn send(&mut self, input: &str) -> SendOutcome {
        if is_restart(input) {
            self.dispatch(Event::Restart).await;
            return SendOutcome::Accepted;
        }
        if input.trim().is_empty() {
            return SendOutcome::Rejected(RejectReason::Empty);
        }
        if !self.state.accepts_input() {
            tracing::debug!("Session {} is locked, input rejected", self.state.id);
            return SendOutcome::Rejected(RejectReason::Locked);
        }

        self.transcript.push(Turn::user(input));
        self.dispatch(Event::Input(input.to_string())).await;
        SendOutcome::Accepted
    }

    /// Re-sends the remote call that last failed. Returns false when there is none.
    pub async fn retry(&mut self) -> bool {
        if !self.can_retry() {
            return false;
        }
        self.dispatch(Event::RetryRequested).await;
        true
    }

    async fn dispatch(&mut self, event: Event) {
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            let transition = self.controller.transition(&self.state, event);
            self.state = transition.state;

            for effect in transition.effects {
                match effect {
                    Effect::ResetTranscript => self.transcript.reset(),
                    Effect::Reply(text) => self.transcript.push(Turn::bot(text)),
                    Effect::ReplyError(text) => self.transcript.push(Turn::bot_error(text)),
                    Effect::InvokeVerifier => {
                        let next = match self.verifier.verify(self.transcript.turns()).await {
                            Ok(outcome) => Event::Verification(outcome),
                            Err(err) => {
                                tracing::error!("Security module error: {}", err);
                                Event::RemoteFailed(RemoteTarget::Verifier)
                            }
                        };
                        queue.push_back(next);
                    }
                    Effect::InvokeAssistant => {
                        let next = match self.assistant.reply(self.transcript.turns()).await {
                            Ok(text) => Event::AssistantReply(text),
                            Err(err) => {
                                tracing::error!("Assistant API error: {}", err);
                                Event::RemoteFailed(RemoteTarget::Assistant)
                            }
                        };
                        queue.push_back(next);
                    }
                    Effect::Notify(record) => self.notifier.notify(record),
                }
            }
        }
    }
}
