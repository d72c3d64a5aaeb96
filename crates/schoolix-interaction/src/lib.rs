//! Remote model plumbing: the Gemini REST client, retry with backoff, and the
//! two agents (verification and assistant) built on top of them.

pub mod assistant;
pub mod gemini_api_agent;
pub mod prompts;
pub mod remote_client;
pub mod retry;
pub mod verifier;

pub use assistant::AssistantAgent;
pub use gemini_api_agent::GeminiApiClient;
pub use remote_client::RemoteClient;
pub use retry::{RetryPolicy, with_retry, with_retry_and_hook};
pub use verifier::VerificationAgent;
