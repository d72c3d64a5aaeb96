//! Path management for Schoolix configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/schoolix/          # Config directory
//! ├── config.toml              # Behaviour settings (all keys optional)
//! ├── secret.json              # API key
//! └── logs/                    # Application logs
//!     └── schoolix.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

use schoolix_core::error::{Result, SchoolixError};

const APP_DIR: &str = "schoolix";

/// Resolves every file Schoolix reads or writes from one root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolixPaths {
    root: PathBuf,
}

impl SchoolixPaths {
    /// Uses `base` when given, otherwise `~/.config/schoolix`.
    pub fn new(base: Option<&Path>) -> Result<Self> {
        let root = match base {
            Some(path) => path.to_path_buf(),
            None => Self::default_root()?,
        };
        Ok(Self { root })
    }

    fn default_root() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SchoolixError::config("Could not determine home directory"))?;
        Ok(home.join(".config").join(APP_DIR))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn secret_file(&self) -> PathBuf {
        self.root.join("secret.json")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }
}
