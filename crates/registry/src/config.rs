//! Publish configuration.
//!
//! ```toml
//! [handoff]
//! on-repeat = "merge-by-key"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::sink::RepeatPolicy;

/// Top-level publish configuration. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct PublishConfig {
	pub handoff: HandoffConfig,
}

/// Settings for the buffered handoff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct HandoffConfig {
	/// Resolution for a publish into an already occupied pending slot.
	pub on_repeat: RepeatPolicy,
}

impl PublishConfig {
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(content)?)
	}

	/// Reads and parses a TOML config file.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let config = Self::from_toml_str(&content)?;
		tracing::debug!(path = %path.display(), on_repeat = ?config.handoff.on_repeat, "loaded publish config");
		Ok(config)
	}
}
