//! Registry settings loaded from TOML.
//!
//! ```toml
//! default_host = "standalone"
//! log_navigation = true
//! ```

use crate::error::SettingsError;
use crate::path::HostContext;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for [`PathRegistry`](crate::PathRegistry).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterSettings {
	/// Host used when the current location does not imply one.
	pub default_host: HostContext,
	/// Log every host decision at `info` instead of `debug`.
	pub log_navigation: bool,
}

impl RouterSettings {
	/// Parses settings from a TOML document. Missing keys keep their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(source)?)
	}

	/// Reads settings from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let content = fs::read_to_string(path.as_ref())?;
		Self::from_toml_str(&content)
	}
}
