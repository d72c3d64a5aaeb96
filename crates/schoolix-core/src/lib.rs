//! Domain core for the Schoolix verification chat.
//!
//! Holds the transcript store, the per-session state value, the
//! conversation-mode controller and the seams (`ChatModel`, `Notifier`,
//! `SecretService`) the outer crates implement. Nothing here performs I/O.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod notify;
pub mod outcome;
pub mod secret;
pub mod session;
pub mod texts;
pub mod transcript;
pub mod validation;

// Re-export common types
pub use controller::{Controller, Effect, Event, Transition};
pub use error::{Result, SchoolixError};
pub use model::{ChatModel, ModelMessage, ModelRequest, ModelRole, RemoteError};
pub use notify::{NoopNotifier, Notifier};
pub use outcome::VerificationOutcome;
pub use session::{Mode, RemoteTarget, SessionState, StudentRecord};
pub use transcript::{Speaker, Transcript, Turn};
