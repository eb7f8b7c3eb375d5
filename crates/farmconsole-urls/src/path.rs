//! Path builders for every named console view.
//!
//! Builders are pure: they never look at the current location. Views that
//! nest differently depending on which page hosts them (sequences and
//! regimens) take an explicit [`HostContext`]; [`PathRegistry`](crate::PathRegistry)
//! supplies that context from its location provider.
//!
//! ```
//! use farmconsole_urls::path::{self, LocationQuery};
//!
//! assert_eq!(path::plants(), "/app/designer/plants");
//! assert_eq!(path::plants().id(1), "/app/designer/plants/1");
//! assert_eq!(path::settings(Some("os")), "/app/designer/settings?highlight=os");
//! assert_eq!(
//! 	path::location(LocationQuery::at(0.0, 0.0)),
//! 	"/app/designer/location?x=0?y=0",
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// Prefix shared by every in-app view.
pub const APP_PREFIX: &str = "/app";

/// A built application path.
///
/// Compares equal to plain strings so callers can match on it directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppPath(String);

impl AppPath {
	/// Wraps an already-built path.
	pub fn new(path: impl Into<String>) -> Self {
		Self(path.into())
	}

	/// Returns the path as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the path and returns the inner string.
	pub fn into_string(self) -> String {
		self.0
	}

	/// Appends one identifier segment.
	///
	/// `V().id(x)` is always `V()` followed by `/` and `x`. Numbers are
	/// rendered with `Display`, so `0` is a present id like any other.
	pub fn id(mut self, id: impl fmt::Display) -> Self {
		// Writing into a String cannot fail.
		let _ = write!(self.0, "/{}", id);
		self
	}

	/// Appends a `?key=value` pair.
	///
	/// Every pair is introduced by its own `?`, never by `&`, giving paths
	/// like `/app/designer/location?x=1?y=2`. Existing links and the
	/// views that read them depend on this exact shape, so it is kept even
	/// though it is not a standard query string.
	pub fn query(mut self, key: &str, value: impl fmt::Display) -> Self {
		let _ = write!(self.0, "?{}={}", key, value);
		self
	}

	/// Returns the segment position at which this view's identifier sits.
	///
	/// This is the number of `/`-separated pieces of the path, counting the
	/// empty piece before the leading slash: `/app` is 2, `/app/designer`
	/// is 3. The value depends only on the built path, never on the current
	/// location, and is the position [`Location::segment`](crate::Location::segment)
	/// expects.
	pub fn id_index(&self) -> usize {
		self.0.split('/').count()
	}

	/// Returns the path relative to the in-app router.
	///
	/// Removes exactly one leading `/app` segment: `/app/designer/plants`
	/// becomes `/designer/plants`. Paths outside `/app` are returned as-is.
	pub fn route(&self) -> &str {
		match self.0.strip_prefix(APP_PREFIX) {
			Some(rest) if rest.is_empty() || rest.starts_with(['/', '?']) => rest,
			_ => &self.0,
		}
	}

	/// Returns the final `/`-separated piece of the path, query excluded.
	pub fn last_chunk(&self) -> &str {
		let path = self.0.split('?').next().unwrap_or_default();
		path.rsplit('/').next().unwrap_or_default()
	}
}

impl fmt::Display for AppPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for AppPath {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<AppPath> for String {
	fn from(path: AppPath) -> Self {
		path.0
	}
}

impl From<&str> for AppPath {
	fn from(path: &str) -> Self {
		Self::new(path)
	}
}

impl From<String> for AppPath {
	fn from(path: String) -> Self {
		Self(path)
	}
}

impl PartialEq<str> for AppPath {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for AppPath {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

impl PartialEq<String> for AppPath {
	fn eq(&self, other: &String) -> bool {
		&self.0 == other
	}
}

/// The page that hosts a shared sub-view.
///
/// Sequence and regimen editors render both inside the designer panel and
/// as standalone pages; links they generate must stay in the same host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostContext {
	/// Nested under `/app/designer`.
	#[default]
	Designer,
	/// A top-level page under `/app`.
	Standalone,
}

/// Optional coordinates for the location view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocationQuery {
	pub x: Option<f64>,
	pub y: Option<f64>,
	pub z: Option<f64>,
}

impl LocationQuery {
	/// Coordinates in the XY plane.
	pub fn at(x: f64, y: f64) -> Self {
		Self {
			x: Some(x),
			y: Some(y),
			z: None,
		}
	}

	/// Adds a Z coordinate.
	pub fn with_z(mut self, z: f64) -> Self {
		self.z = Some(z);
		self
	}
}

/// Renders a coordinate the way the console prints numbers.
///
/// Magnitudes of at least `1e21` or below `1e-6` use exponent form with an
/// explicit sign (`1e+21`, `1.5e-7`); non-finite values print as `NaN`,
/// `Infinity` and `-Infinity`.
pub(crate) fn format_number(value: f64) -> String {
	if value.is_nan() {
		return "NaN".to_string();
	}
	if value.is_infinite() {
		return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
	}
	// -0.0 would otherwise print as "-0"
	if value == 0.0 {
		return "0".to_string();
	}
	let magnitude = value.abs();
	if !(1e-6..1e21).contains(&magnitude) {
		let exp = format!("{:e}", value);
		return match exp.split_once('e') {
			Some((mantissa, exponent)) if !exponent.starts_with('-') => {
				format!("{}e+{}", mantissa, exponent)
			}
			_ => exp,
		};
	}
	value.to_string()
}

fn app_view(name: &str) -> AppPath {
	AppPath::new(APP_PREFIX).id(name)
}

fn designer_view(name: &str) -> AppPath {
	designer().id(name)
}

/// `/app`
pub fn app() -> AppPath {
	AppPath::new(APP_PREFIX)
}

/// `/app/designer`
pub fn designer() -> AppPath {
	app_view("designer")
}

/// `/app/designer/plants`
pub fn plants() -> AppPath {
	designer_view("plants")
}

/// `/app/designer/plants/crop_search`; the id of this view is a crop slug.
pub fn crop_search() -> AppPath {
	plants().id("crop_search")
}

/// `/app/designer/gardens`
pub fn saved_gardens() -> AppPath {
	designer_view("gardens")
}

/// `/app/designer/gardens/templates`
pub fn plant_templates() -> AppPath {
	saved_gardens().id("templates")
}

/// `/app/designer/groups`
pub fn groups() -> AppPath {
	designer_view("groups")
}

/// `/app/designer/zones`
pub fn zones() -> AppPath {
	designer_view("zones")
}

/// `/app/designer/points`
pub fn points() -> AppPath {
	designer_view("points")
}

/// `/app/designer/weeds`
pub fn weeds() -> AppPath {
	designer_view("weeds")
}

/// `/app/designer/tools`
pub fn tools() -> AppPath {
	designer_view("tools")
}

/// `/app/designer/tool_slots`
pub fn tool_slots() -> AppPath {
	designer_view("tool_slots")
}

/// `/app/designer/farm_events`
pub fn farm_events() -> AppPath {
	designer_view("farm_events")
}

/// `/app/designer/sensors`
pub fn sensors() -> AppPath {
	designer_view("sensors")
}

/// `/app/designer/peripherals`
pub fn peripherals() -> AppPath {
	designer_view("peripherals")
}

/// `/app/designer/photos`
pub fn photos() -> AppPath {
	designer_view("photos")
}

/// `/app/designer/controls`
pub fn controls() -> AppPath {
	designer_view("controls")
}

/// `/app/designer/logs`
pub fn logs() -> AppPath {
	designer_view("logs")
}

/// `/app/designer/messages`
pub fn messages() -> AppPath {
	designer_view("messages")
}

/// `/app/designer/tours`
pub fn tours() -> AppPath {
	designer_view("tours")
}

/// `/app/designer/farmware`
pub fn farmware() -> AppPath {
	designer_view("farmware")
}

/// `/app/designer/sequences`
pub fn designer_sequences() -> AppPath {
	designer_view("sequences")
}

/// `/app/sequences`
pub fn sequence_page() -> AppPath {
	app_view("sequences")
}

/// Sequence path for the given host.
pub fn sequences(host: HostContext) -> AppPath {
	match host {
		HostContext::Designer => designer_sequences(),
		HostContext::Standalone => sequence_page(),
	}
}

/// `/app/designer/regimens`
pub fn designer_regimens() -> AppPath {
	designer_view("regimens")
}

/// `/app/regimens`
pub fn regimen_page() -> AppPath {
	app_view("regimens")
}

/// Regimen path for the given host.
pub fn regimens(host: HostContext) -> AppPath {
	match host {
		HostContext::Designer => designer_regimens(),
		HostContext::Standalone => regimen_page(),
	}
}

/// `/app/designer/settings`, optionally highlighting one setting.
pub fn settings(highlight: Option<&str>) -> AppPath {
	let path = designer_view("settings");
	match highlight {
		Some(setting) => path.query("highlight", setting),
		None => path,
	}
}

/// `/app/designer/help`, optionally opening a help page.
pub fn help(page: Option<&str>) -> AppPath {
	let path = designer_view("help");
	match page {
		Some(page) => path.query("page", page),
		None => path,
	}
}

/// `/app/designer/developer`, optionally opening a developer page.
pub fn developer(page: Option<&str>) -> AppPath {
	let path = designer_view("developer");
	match page {
		Some(page) => path.query("page", page),
		None => path,
	}
}

/// `/app/designer/location` with optional coordinates.
///
/// Coordinates are only written once both `x` and `y` are known; `z` is
/// written after them when it is also present. A lone `x` yields the bare
/// path.
pub fn location(query: LocationQuery) -> AppPath {
	let path = designer_view("location");
	let (Some(x), Some(y)) = (query.x, query.y) else {
		return path;
	};
	let path = path
		.query("x", format_number(x))
		.query("y", format_number(y));
	match query.z {
		Some(z) => path.query("z", format_number(z)),
		None => path,
	}
}

/// `/`, the login page.
pub fn login() -> AppPath {
	AppPath::new("/")
}

/// `/logout`
pub fn logout() -> AppPath {
	AppPath::new("/logout")
}

/// `/tos_update`
pub fn terms_of_service() -> AppPath {
	AppPath::new("/tos_update")
}

/// `/password_reset`
pub fn password_reset() -> AppPath {
	AppPath::new("/password_reset")
}

/// `/demo`
pub fn demo() -> AppPath {
	AppPath::new("/demo")
}
