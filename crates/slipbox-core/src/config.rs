//! Collection configuration for slipbox
//!
//! Configuration is stored in `slipbox.toml` at the root of the notes
//! directory. Every field is optional; missing fields fall back to the
//! zetteldeft conventions (`§` marker, `.org` notes).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlipboxError};

/// Config file name looked up inside the notes directory
pub const CONFIG_FILE: &str = "slipbox.toml";

/// Marker character that introduces a link token
pub const DEFAULT_MARKER: char = '§';

/// File extension (without dot) of note sources
pub const DEFAULT_EXTENSION: &str = "org";

/// Collection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Link marker character
    #[serde(default = "default_marker")]
    pub marker: char,

    /// Note file extension, without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SlipboxError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load `slipbox.toml` from the notes directory, falling back to
    /// defaults when the file is absent
    ///
    /// A present-but-malformed config file is an error.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            let config = Self::load(&path)?;
            tracing::debug!(path = %path.display(), "loaded collection config");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }
}

fn default_marker() -> char {
    DEFAULT_MARKER
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            marker: DEFAULT_MARKER,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}
