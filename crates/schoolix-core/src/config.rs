//! Configuration data types.
//!
//! `config.toml` holds behaviour settings, `secret.json` holds the API key.
//! Every `config.toml` key is optional and falls back to the defaults below.

use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_SHARED_SECRET: &str = "sjvs@ix@";
pub const DEFAULT_VERIFIER_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ASSISTANT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_VERIFIER_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_ASSISTANT_TEMPERATURE: f32 = 0.7;

/// Root of `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Password between AUTH and ASSISTANT. Compared by exact equality.
    pub shared_secret: String,
    /// Endpoint receiving verified student records. No webhook when unset.
    pub webhook_url: Option<String>,
    #[serde(default = "ModelSettings::verifier", deserialize_with = "verifier_table")]
    pub verifier: ModelSettings,
    #[serde(default = "ModelSettings::assistant", deserialize_with = "assistant_table")]
    pub assistant: ModelSettings,
    pub retry: RetrySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            shared_secret: DEFAULT_SHARED_SECRET.to_string(),
            webhook_url: None,
            verifier: ModelSettings::verifier(),
            assistant: ModelSettings::assistant(),
            retry: RetrySettings::default(),
        }
    }
}

/// Model selection and sampling for one remote client.
///
/// A table that sets only one key keeps that client's default for the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSettings {
    pub model: String,
    pub temperature: f32,
}

impl ModelSettings {
    pub fn verifier() -> Self {
        Self {
            model: DEFAULT_VERIFIER_MODEL.to_string(),
            temperature: DEFAULT_VERIFIER_TEMPERATURE,
        }
    }

    pub fn assistant() -> Self {
        Self {
            model: DEFAULT_ASSISTANT_MODEL.to_string(),
            temperature: DEFAULT_ASSISTANT_TEMPERATURE,
        }
    }
}

/// `[verifier]` table with per-key fallbacks.
#[derive(Deserialize)]
struct VerifierTable {
    #[serde(default = "default_verifier_model")]
    model: String,
    #[serde(default = "default_verifier_temperature")]
    temperature: f32,
}

/// `[assistant]` table with per-key fallbacks.
#[derive(Deserialize)]
struct AssistantTable {
    #[serde(default = "default_assistant_model")]
    model: String,
    #[serde(default = "default_assistant_temperature")]
    temperature: f32,
}

fn default_verifier_model() -> String {
    DEFAULT_VERIFIER_MODEL.to_string()
}

fn default_verifier_temperature() -> f32 {
    DEFAULT_VERIFIER_TEMPERATURE
}

fn default_assistant_model() -> String {
    DEFAULT_ASSISTANT_MODEL.to_string()
}

fn default_assistant_temperature() -> f32 {
    DEFAULT_ASSISTANT_TEMPERATURE
}

fn verifier_table<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ModelSettings, D::Error> {
    VerifierTable::deserialize(deserializer).map(ModelSettings::from)
}

fn assistant_table<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<ModelSettings, D::Error> {
    AssistantTable::deserialize(deserializer).map(ModelSettings::from)
}

impl From<VerifierTable> for ModelSettings {
    fn from(table: VerifierTable) -> Self {
        Self {
            model: table.model,
            temperature: table.temperature,
        }
    }
}

impl From<AssistantTable> for ModelSettings {
    fn from(table: AssistantTable) -> Self {
        Self {
            model: table.model,
            temperature: table.temperature,
        }
    }
}

/// Backoff settings for transient remote failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrySettings {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub backoff_factor: u32,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 1000,
            backoff_factor: 2,
        }
    }
}

/// Root configuration structure for secret.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.verifier.temperature, 0.3);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: AppConfig = toml::from_str(
            r#"
shared_secret = "letmein"
webhook_url = "https://example.com/hook"

[assistant]
model = "gemini-2.5-flash"
temperature = 0.5

[retry]
max_attempts = 5
"#,
        )
        .unwrap();

        assert_eq!(config.shared_secret, "letmein");
        assert_eq!(config.webhook_url.as_deref(), Some("https://example.com/hook"));
        assert_eq!(config.assistant.model, "gemini-2.5-flash");
        assert_eq!(config.verifier.model, DEFAULT_VERIFIER_MODEL);
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.initial_delay_ms, 1000);
    }

    #[test]
    fn test_model_table_with_one_key_keeps_client_defaults() {
        let config: AppConfig = toml::from_str("[verifier]\nmodel = \"x\"\n").unwrap();
        assert_eq!(config.verifier.model, "x");
        assert_eq!(config.verifier.temperature, DEFAULT_VERIFIER_TEMPERATURE);
        assert_eq!(config.assistant, ModelSettings::assistant());

        let config: AppConfig = toml::from_str("[assistant]\ntemperature = 0.2\n").unwrap();
        assert_eq!(config.assistant.model, DEFAULT_ASSISTANT_MODEL);
        assert_eq!(config.assistant.temperature, 0.2);
        assert_eq!(config.verifier, ModelSettings::verifier());
    }

    #[test]
    fn test_secret_json() {
        let secrets: SecretConfig =
            serde_json::from_str(r#"{"gemini":{"api_key":"abc"}}"#).unwrap();
        let gemini = secrets.gemini.unwrap();
        assert_eq!(gemini.api_key, "abc");
    }
}
