//! Error types for the path registry.

use thiserror::Error;

/// Error type for typed extraction from the current location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
	/// A location segment could not be parsed as the requested type.
	#[error("Failed to parse segment[{index}] '{raw_value}' as {type_name}: {message}")]
	ParseError {
		/// Position of the segment, numbered like [`AppPath::id_index`](crate::AppPath::id_index).
		index: usize,
		/// Requested type name.
		type_name: &'static str,
		/// Raw segment value.
		raw_value: String,
		/// Error message from parsing.
		message: String,
	},
}

/// Error type for loading [`RouterSettings`](crate::RouterSettings).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}
