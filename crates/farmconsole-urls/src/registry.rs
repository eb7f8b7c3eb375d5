//! Accessors that read the current location.
//!
//! A [`PathRegistry`] owns a [`LocationProvider`] and asks it for a fresh
//! [`Location`] on every call. Everything that depends on where the user
//! currently is lives here; the pure builders live in [`path`](crate::path).

use crate::error::PathError;
use crate::location::Location;
use crate::path::{self, AppPath, HostContext, LocationQuery};
use crate::provider::LocationProvider;
use crate::settings::RouterSettings;
use std::str::FromStr;

/// Reads and compares the current location.
pub struct PathRegistry<L> {
	provider: L,
	settings: RouterSettings,
}

impl<L: std::fmt::Debug> std::fmt::Debug for PathRegistry<L> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PathRegistry")
			.field("provider", &self.provider)
			.field("default_host", &self.settings.default_host)
			.finish()
	}
}

impl<L: LocationProvider> PathRegistry<L> {
	/// Creates a registry with default settings.
	pub fn new(provider: L) -> Self {
		Self::with_settings(provider, RouterSettings::default())
	}

	/// Creates a registry with explicit settings.
	pub fn with_settings(provider: L, settings: RouterSettings) -> Self {
		Self { provider, settings }
	}

	/// Returns the provider.
	pub fn provider(&self) -> &L {
		&self.provider
	}

	/// Returns the settings.
	pub fn settings(&self) -> &RouterSettings {
		&self.settings
	}

	/// Returns the current location.
	pub fn location(&self) -> Location {
		self.provider.current()
	}

	/// Returns whether the current location begins with `path`.
	///
	/// Used for active-state checks: while `/app/designer/plants/1` is
	/// open, `starts_with(&path::plants())` holds. The query is part of the
	/// comparison, so `settings(Some("os"))` matches while it is open.
	pub fn starts_with(&self, path: &AppPath) -> bool {
		self.location().starts_with(path)
	}

	/// Returns whether the current location, query included, is exactly `path`.
	pub fn equals(&self, path: &AppPath) -> bool {
		self.location().equals(path)
	}

	/// Returns the current location's final segment.
	pub fn last_chunk(&self) -> Option<String> {
		self.location().last_segment().map(str::to_string)
	}

	/// Returns whether the current final segment equals the final piece of `path`.
	pub fn last_chunk_equals(&self, path: &AppPath) -> bool {
		self.last_chunk().as_deref() == Some(path.last_chunk())
	}

	/// Returns the slug for the view `path`.
	///
	/// `path` is the view's base path, e.g. [`path::crop_search()`]; the slug
	/// is read from the current location at `path.id_index()`.
	pub fn get_slug(&self, path: &AppPath) -> Option<String> {
		let index = path.id_index();
		let slug = self.location().segment(index).map(str::to_string);
		if slug.is_none() {
			tracing::debug!(view = %path, index, "no slug in current location");
		}
		slug
	}

	/// Returns the id for the view `path`, parsed as `T`.
	///
	/// # Errors
	///
	/// Returns [`PathError::ParseError`] if a segment is present but does not
	/// parse as `T`.
	pub fn get_id<T>(&self, path: &AppPath) -> Result<Option<T>, PathError>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		let index = path.id_index();
		let Some(raw) = self.get_slug(path) else {
			return Ok(None);
		};
		raw.parse::<T>()
			.map(Some)
			.map_err(|e| PathError::ParseError {
				index,
				type_name: std::any::type_name::<T>(),
				raw_value: raw,
				message: e.to_string(),
			})
	}

	/// Returns the host implied by the current location.
	///
	/// Falls back to [`RouterSettings::default_host`] outside `/app`.
	pub fn host_context(&self) -> HostContext {
		let location = self.location();
		let host = location
			.host_context()
			.unwrap_or(self.settings.default_host);
		if self.settings.log_navigation {
			tracing::info!(location = %location, ?host, "resolved host context");
		} else {
			tracing::debug!(location = %location, ?host, "resolved host context");
		}
		host
	}

	/// Sequence path in the current host.
	///
	/// Inside the designer this is `/app/designer/sequences`, on the
	/// standalone sequence page it is `/app/sequences`.
	pub fn sequences(&self) -> AppPath {
		path::sequences(self.host_context())
	}

	/// Regimen path in the current host.
	pub fn regimens(&self) -> AppPath {
		path::regimens(self.host_context())
	}

	/// Returns a query parameter of the current location.
	pub fn query(&self, key: &str) -> Option<String> {
		self.location().query(key).map(str::to_string)
	}

	/// The setting named by `?highlight=`, as written by [`path::settings`].
	pub fn highlight(&self) -> Option<String> {
		self.query("highlight")
	}

	/// The page named by `?page=`, as written by [`path::help`] and [`path::developer`].
	pub fn help_page(&self) -> Option<String> {
		self.query("page")
	}

	/// The coordinates written by [`path::location`].
	pub fn location_query(&self) -> LocationQuery {
		self.location().location_query()
	}
}
