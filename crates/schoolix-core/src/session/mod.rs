//! Session domain: conversation modes, the per-session state value and the
//! student fields collected during registration.

pub mod mode;
pub mod record;
pub mod state;

pub use mode::Mode;
pub use record::{ExtractedFields, StudentRecord};
pub use state::{MAX_STRIKES, RemoteTarget, SessionState};
