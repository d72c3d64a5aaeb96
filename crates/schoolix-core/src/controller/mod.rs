//! Conversation-mode controller.
//!
//! The controller is a transition table: `(SessionState, Event)` goes in, a new
//! `SessionState` and a list of [`Effect`]s come out. It performs no I/O; the
//! application layer executes the effects (remote calls, notifications,
//! transcript writes) and feeds results back in as further events.
//!
//! Only one path sets `locked`: a verification failure that brings
//! `failed_attempts` up to [`MAX_STRIKES`]. Only a restart clears it.

mod event;

pub use event::{Effect, Event, Transition};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::outcome::VerificationOutcome;
use crate::session::{MAX_STRIKES, Mode, RemoteTarget, SessionState};
use crate::texts;
use crate::validation::is_valid_name;

/// Decides what each user message or remote result does to a session.
pub struct Controller<R: Rng = StdRng> {
    shared_secret: String,
    rng: R,
}

impl Controller<StdRng> {
    /// Creates a controller guarding the assistant with `shared_secret`.
    pub fn new(shared_secret: impl Into<String>) -> Self {
        Self::with_rng(shared_secret, StdRng::from_entropy())
    }
}

impl<R: Rng> Controller<R> {
    /// Creates a controller with a caller-supplied random source for the strike texts.
    pub fn with_rng(shared_secret: impl Into<String>, rng: R) -> Self {
        Self {
            shared_secret: shared_secret.into(),
            rng,
        }
    }

    /// Applies `event` to `state`.
    pub fn transition(&mut self, state: &SessionState, event: Event) -> Transition {
        if event.is_restart() {
            return Self::restart(state);
        }

        let transition = match (state.mode, event) {
            (_, Event::RetryRequested) => Self::retry(state),
            (_, Event::RemoteFailed(target)) => Self::remote_failed(state, target),

            (Mode::Choice, Event::Input(text)) => Self::choose(state, &text),
            (Mode::Auth, Event::Input(text)) => self.check_password(state, &text),
            (Mode::Registration, Event::Input(text)) => Self::register_answer(state, &text),
            (Mode::Assistant, Event::Input(_)) => {
                let mut next = state.clone();
                next.pending_retry = None;
                Transition::new(next, vec![Effect::InvokeAssistant])
            }

            (Mode::Registration, Event::Verification(outcome)) => {
                self.apply_verification(state, outcome)
            }
            (Mode::Assistant, Event::AssistantReply(text)) => {
                let mut next = state.clone();
                next.pending_retry = None;
                Transition::new(next, vec![Effect::Reply(text)])
            }

            (mode, event) => {
                tracing::debug!("Ignoring {:?} in mode {}", event, mode);
                Transition::unchanged(state)
            }
        };

        if transition.state.mode != state.mode {
            tracing::info!(
                "Session {} mode {} -> {}",
                state.id,
                state.mode,
                transition.state.mode
            );
        }
        transition
    }

    fn restart(state: &SessionState) -> Transition {
        tracing::info!("Session {} restarted", state.id);
        let mut next = SessionState::new();
        next.id = state.id;
        Transition::new(next, vec![Effect::ResetTranscript])
    }

    fn retry(state: &SessionState) -> Transition {
        let effect = match state.pending_retry {
            Some(RemoteTarget::Verifier) if state.mode == Mode::Registration && !state.locked => {
                Effect::InvokeVerifier
            }
            Some(RemoteTarget::Assistant) if state.mode == Mode::Assistant => {
                Effect::InvokeAssistant
            }
            _ => return Transition::unchanged(state),
        };
        Transition::new(state.clone(), vec![effect])
    }

    fn remote_failed(state: &SessionState, target: RemoteTarget) -> Transition {
        let text = match target {
            RemoteTarget::Verifier => texts::VERIFIER_UNAVAILABLE,
            RemoteTarget::Assistant => texts::ASSISTANT_UNAVAILABLE,
        };
        let mut next = state.clone();
        next.pending_retry = Some(target);
        Transition::new(next, vec![Effect::ReplyError(text.to_string())])
    }

    fn choose(state: &SessionState, input: &str) -> Transition {
        let mut next = state.clone();
        let reply = match Mode::from_choice(input) {
            Some(Mode::Registration) => {
                next.mode = Mode::Registration;
                texts::REGISTRATION_OPENING
            }
            Some(mode) => {
                next.mode = mode;
                texts::AUTH_OPENING
            }
            None => texts::CHOICE_REJECTED,
        };
        Transition::new(next, vec![Effect::Reply(reply.to_string())])
    }

    fn check_password(&self, state: &SessionState, input: &str) -> Transition {
        let mut next = state.clone();
        let reply = if input == self.shared_secret {
            next.mode = Mode::Assistant;
            texts::PASSWORD_ACCEPTED
        } else {
            tracing::info!("Session {} password rejected", state.id);
            texts::PASSWORD_REJECTED
        };
        Transition::new(next, vec![Effect::Reply(reply.to_string())])
    }

    fn register_answer(state: &SessionState, input: &str) -> Transition {
        if state.locked {
            return Transition::unchanged(state);
        }
        if state.answers_collected == 0 && !is_valid_name(input) {
            return Transition::new(
                state.clone(),
                vec![Effect::Reply(texts::NAME_REJECTED.to_string())],
            );
        }

        let mut next = state.clone();
        next.fields.record_answer(next.answers_collected, input);
        next.answers_collected += 1;
        next.pending_retry = None;
        Transition::new(next, vec![Effect::InvokeVerifier])
    }

    fn apply_verification(
        &mut self,
        state: &SessionState,
        outcome: VerificationOutcome,
    ) -> Transition {
        if state.locked {
            return Transition::unchanged(state);
        }

        let mut next = state.clone();
        next.pending_retry = None;

        match outcome {
            VerificationOutcome::Continue(text) => Transition::new(next, vec![Effect::Reply(text)]),
            VerificationOutcome::Failed(_) => {
                next.failed_attempts = next.failed_attempts.saturating_add(1);
                let reply = if next.failed_attempts >= MAX_STRIKES {
                    tracing::warn!("Session {} locked after {} failures", state.id, next.failed_attempts);
                    next.locked = true;
                    texts::FINAL_DENIAL.to_string()
                } else {
                    let variant = texts::STRIKE_VARIANTS
                        .choose(&mut self.rng)
                        .copied()
                        .unwrap_or(texts::STRIKE_VARIANTS[0]);
                    texts::strike_warning(variant, next.failed_attempts, MAX_STRIKES)
                };
                Transition::new(next, vec![Effect::Reply(reply)])
            }
            VerificationOutcome::Succeeded { text, record } => {
                next.mode = Mode::Assistant;
                let record = record.unwrap_or_else(|| state.fields.to_record());
                Transition::new(
                    next,
                    vec![
                        Effect::Reply(format!("{text}{}", texts::SUCCESS_SUFFIX)),
                        Effect::Notify(record),
                    ],
                )
            }
        }
    }
}

#[cfg(test)]
mod tests;
