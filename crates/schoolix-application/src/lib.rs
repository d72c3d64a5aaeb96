//! Application layer: the chat session use case tying controller, agents and
//! notification sink together.

pub mod chat_session;

pub use chat_session::{ChatSession, RejectReason, SendOutcome};
