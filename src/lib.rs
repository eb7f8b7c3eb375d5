//! # farmconsole
//!
//! The URL layer of the farm console web app.
//!
//! This facade re-exports the workspace crates behind feature flags:
//!
//! - `urls` (default) - path builders, location accessors and resource paths
//!
//! ## Example
//!
//! ```rust
//! use farmconsole::prelude::*;
//!
//! let location = MockLocation::new(path::plants().id(1));
//! let registry = PathRegistry::new(location);
//!
//! assert!(registry.starts_with(&path::plants()));
//! assert_eq!(file_path::icon(Icon::Plant), "/app-resources/img/icons/plant.svg");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "urls")]
#[cfg_attr(docsrs, doc(cfg(feature = "urls")))]
pub use farmconsole_urls as urls;

/// Commonly used types.
#[cfg(feature = "urls")]
#[cfg_attr(docsrs, doc(cfg(feature = "urls")))]
pub mod prelude {
	pub use farmconsole_urls::{
		AppPath, HostContext, Icon, Location, LocationProvider, LocationQuery, MockLocation,
		PathRegistry, RouterSettings, file_path, path,
	};
}
