//! Secret service implementation.
//!
//! Reads `secret.json` and lets `GEMINI_API_KEY` (then `API_KEY`) from the
//! environment take precedence over the file.

use std::path::PathBuf;

use schoolix_core::config::{GeminiConfig, SecretConfig};
use schoolix_core::error::{Result, SchoolixError};
use schoolix_core::secret::SecretService;

use crate::paths::SchoolixPaths;

const ENV_KEYS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Clone)]
pub struct SecretServiceImpl {
    path: PathBuf,
}

impl SecretServiceImpl {
    pub fn new(paths: &SchoolixPaths) -> Self {
        Self {
            path: paths.secret_file(),
        }
    }

    fn read_file(&self) -> Result<SecretConfig> {
        if !self.path.exists() {
            return Ok(SecretConfig::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Resolves the Gemini API key or fails with a message naming where to put it.
    pub async fn gemini_api_key(&self) -> Result<String> {
        self.load_secrets()
            .await?
            .gemini
            .map(|gemini| gemini.api_key)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                SchoolixError::config(format!(
                    "Gemini API key not found: set GEMINI_API_KEY or add it to {}",
                    self.path.display()
                ))
            })
    }
}

/// Replaces the file's key with the first non-empty environment value.
fn apply_env_override(
    mut config: SecretConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> SecretConfig {
    let from_env = ENV_KEYS
        .iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.trim().is_empty());

    if let Some(api_key) = from_env {
        config.gemini = Some(GeminiConfig { api_key });
    }
    config
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig> {
        let config = self.read_file()?;
        Ok(apply_env_override(config, |key| std::env::var(key).ok()))
    }
}
