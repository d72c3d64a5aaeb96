//! Infrastructure: config directory, `config.toml`, `secret.json` and the
//! webhook notification sink.

pub mod config_service;
pub mod paths;
pub mod secret_service;
pub mod webhook;

pub use config_service::ConfigService;
pub use paths::SchoolixPaths;
pub use secret_service::SecretServiceImpl;
pub use webhook::{WebhookNotifier, WebhookPayload};
