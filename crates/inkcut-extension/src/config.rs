//! YAML configuration for the extension.
//!
//! ```yaml
//! launcher:
//!   kind: source
//!   python: ~/inkcut/venv/bin/python
//!   script: ~/inkcut/main.py
//! protocol: hpgl
//! ```

use std::path::Path;

use inkcut_protocol::ProtocolKind;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ExtensionResult;
use crate::launcher::Launcher;

/// Extension configuration. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionConfig {
    /// How Inkcut is started.
    pub launcher: Launcher,
    /// Protocol used when encoding command jobs.
    pub protocol: ProtocolKind,
}

impl ExtensionConfig {
    /// Parse a config from YAML text.
    pub fn from_yaml(text: &str) -> ExtensionResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> ExtensionResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&text)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
