//! Sources of the current location.
//!
//! [`PathRegistry`](crate::PathRegistry) never reads a global. It asks a
//! [`LocationProvider`] each time it needs the location: the browser in
//! production, a [`MockLocation`] in tests.

use crate::location::Location;
use crate::path::AppPath;
use parking_lot::RwLock;
use std::sync::Arc;

/// Supplies the current location.
pub trait LocationProvider: Send + Sync {
	/// Returns the location as of this call.
	fn current(&self) -> Location;
}

impl<F> LocationProvider for F
where
	F: Fn() -> Location + Send + Sync,
{
	fn current(&self) -> Location {
		self()
	}
}

/// Settable location for tests.
///
/// Clones share one location, so a test can hand a clone to a registry
/// and keep mocking through its own handle.
///
/// ```
/// use farmconsole_urls::{MockLocation, PathRegistry, path};
///
/// let location = MockLocation::default();
/// let registry = PathRegistry::new(location.clone());
///
/// location.mock(path::plants().id(1));
/// assert!(registry.starts_with(&path::plants()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockLocation {
	inner: Arc<RwLock<Location>>,
}

impl MockLocation {
	/// Creates a mock that starts at `path`.
	pub fn new(path: impl Into<AppPath>) -> Self {
		let mock = Self::default();
		mock.mock(path);
		mock
	}

	/// Replaces the current location and returns the path.
	pub fn mock(&self, path: impl Into<AppPath>) -> AppPath {
		let path = path.into();
		tracing::trace!(path = %path, "mocking current location");
		*self.inner.write() = Location::from(&path);
		path
	}
}

impl LocationProvider for MockLocation {
	fn current(&self) -> Location {
		self.inner.read().clone()
	}
}

/// Reads `window.location` through the History API bindings.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

#[cfg(target_arch = "wasm32")]
impl LocationProvider for BrowserLocation {
	fn current(&self) -> Location {
		let Some(location) = web_sys::window().map(|window| window.location()) else {
			tracing::debug!("no window available, using root location");
			return Location::default();
		};
		let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
		let search = location.search().unwrap_or_default();
		Location::parse(&format!("{}{}", pathname, search))
	}
}
