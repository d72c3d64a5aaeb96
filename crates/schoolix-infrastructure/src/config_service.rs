//! Loading of `config.toml`.

use std::fs;
use std::path::PathBuf;

use schoolix_core::config::AppConfig;
use schoolix_core::error::Result;

use crate::paths::SchoolixPaths;

/// Reads the application configuration. A missing file means defaults.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(paths: &SchoolixPaths) -> Self {
        Self {
            path: paths.config_file(),
        }
    }

    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::info!(
                "No config file at {}, using defaults",
                self.path.display()
            );
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config: AppConfig = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", self.path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SchoolixPaths::new(Some(temp_dir.path())).unwrap();

        let config = ConfigService::new(&paths).load().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_reads_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SchoolixPaths::new(Some(temp_dir.path())).unwrap();
        fs::write(
            paths.config_file(),
            "shared_secret = \"open-sesame\"\n[retry]\ninitial_delay_ms = 250\n",
        )
        .unwrap();

        let config = ConfigService::new(&paths).load().unwrap();
        assert_eq!(config.shared_secret, "open-sesame");
        assert_eq!(config.retry.initial_delay_ms, 250);
        assert_eq!(config.retry.max_attempts, 3);
    }

    #[test]
    fn test_broken_toml_is_a_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SchoolixPaths::new(Some(temp_dir.path())).unwrap();
        fs::write(paths.config_file(), "shared_secret = ").unwrap();

        let err = ConfigService::new(&paths).load().unwrap_err();
        assert!(err.to_string().contains("TOML"));
    }
}
