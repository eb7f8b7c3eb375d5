//! The parsed current location.

use crate::path::{APP_PREFIX, AppPath, HostContext, LocationQuery};
use std::fmt;

/// The current application URL, split into segments.
///
/// Only non-empty segments are kept, so `/app//designer/` and
/// `/app/designer` are the same location. Segment positions follow
/// [`AppPath::id_index`]: position 0 is the root before the first `/` and
/// never holds a value, position 1 is `app`, position 2 the view group and
/// so on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
	segments: Vec<String>,
	query: Option<String>,
}

impl Location {
	/// Parses a path with an optional query.
	///
	/// Everything after the first `?` is kept as the raw query.
	pub fn parse(url: &str) -> Self {
		let (path, query) = match url.split_once('?') {
			Some((path, query)) => (path, Some(query.to_string())),
			None => (url, None),
		};
		Self {
			segments: path
				.split('/')
				.filter(|segment| !segment.is_empty())
				.map(str::to_string)
				.collect(),
			query: query.filter(|q| !q.is_empty()),
		}
	}

	/// Builds a location from already-split segments.
	pub fn from_segments<I, S>(segments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			segments: segments
				.into_iter()
				.map(Into::into)
				.filter(|segment: &String| !segment.is_empty())
				.collect(),
			query: None,
		}
	}

	/// Returns the non-empty segments in order.
	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// Returns the segment at `position`.
	///
	/// Returns `None` for position 0 and for positions past the end.
	pub fn segment(&self, position: usize) -> Option<&str> {
		position
			.checked_sub(1)
			.and_then(|index| self.segments.get(index))
			.map(String::as_str)
	}

	/// Returns the final segment.
	pub fn last_segment(&self) -> Option<&str> {
		self.segments.last().map(String::as_str)
	}

	/// Renders the path part, without the query.
	pub fn path(&self) -> String {
		format!("/{}", self.segments.join("/"))
	}

	/// Returns the raw query, without its leading `?`.
	pub fn raw_query(&self) -> Option<&str> {
		self.query.as_deref()
	}

	/// Returns the value of a query parameter.
	///
	/// Pairs are separated by `?`, the format [`AppPath::query`] writes.
	/// `&` is accepted as well. The first matching key wins.
	pub fn query(&self, key: &str) -> Option<&str> {
		self.query
			.as_deref()?
			.split(['?', '&'])
			.filter_map(|pair| pair.split_once('='))
			.find(|(k, _)| *k == key)
			.map(|(_, value)| value)
	}

	/// Reads back the coordinates written by [`path::location`](crate::path::location).
	///
	/// Values that are missing or not numbers are left as `None`.
	pub fn location_query(&self) -> LocationQuery {
		let coordinate = |key| self.query(key).and_then(|v| v.parse::<f64>().ok());
		LocationQuery {
			x: coordinate("x"),
			y: coordinate("y"),
			z: coordinate("z"),
		}
	}

	/// Returns the host this location implies, if any.
	///
	/// Locations under `/app/designer` are [`HostContext::Designer`]; any other
	/// page under `/app` is [`HostContext::Standalone`]. Locations outside
	/// `/app`, or `/app` itself, imply nothing.
	pub fn host_context(&self) -> Option<HostContext> {
		let app = APP_PREFIX.trim_start_matches('/');
		match (self.segment(1), self.segment(2)) {
			(Some(root), Some("designer")) if root == app => Some(HostContext::Designer),
			(Some(root), Some(_)) if root == app => Some(HostContext::Standalone),
			_ => None,
		}
	}

	/// Returns whether the rendered location, query included, begins with `path`.
	///
	/// This is a plain string prefix test, so `/app/designer/plants`
	/// also starts with `/app/designer/pla`.
	pub fn starts_with(&self, path: &AppPath) -> bool {
		self.to_string().starts_with(path.as_str())
	}

	/// Returns whether the rendered location, query included, is exactly `path`.
	pub fn equals(&self, path: &AppPath) -> bool {
		self.to_string() == path.as_str()
	}
}

impl fmt::Display for Location {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.path())?;
		if let Some(query) = &self.query {
			write!(f, "?{}", query)?;
		}
		Ok(())
	}
}

impl From<&AppPath> for Location {
	fn from(path: &AppPath) -> Self {
		Self::parse(path.as_str())
	}
}

impl From<AppPath> for Location {
	fn from(path: AppPath) -> Self {
		Self::parse(path.as_str())
	}
}

impl From<&str> for Location {
	fn from(url: &str) -> Self {
		Self::parse(url)
	}
}
