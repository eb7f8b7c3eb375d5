//! Path registry for the farm console.
//!
//! This crate builds, parses and compares the console's URLs:
//!
//! - [`path`]: pure builders for every named view (`/app/designer/plants`, ...)
//! - [`Location`]: the current URL split into positioned segments
//! - [`PathRegistry`]: accessors over an injected [`LocationProvider`]
//! - [`file_path`]: static resource paths under `/app-resources`
//!
//! # Quick Start
//!
//! ```rust
//! use farmconsole_urls::{MockLocation, PathRegistry, path};
//!
//! let location = MockLocation::new(path::crop_search().id("mint"));
//! let registry = PathRegistry::new(location.clone());
//!
//! assert_eq!(registry.get_slug(&path::crop_search()).as_deref(), Some("mint"));
//!
//! location.mock(path::sequence_page().id(4));
//! assert_eq!(registry.sequences().id(4), "/app/sequences/4");
//! ```

pub mod error;
pub mod file_path;
pub mod location;
pub mod path;
pub mod provider;
pub mod registry;
pub mod settings;

pub use error::{PathError, SettingsError};
pub use file_path::{Icon, ImageFormat};
pub use location::Location;
pub use path::{AppPath, HostContext, LocationQuery};
#[cfg(target_arch = "wasm32")]
pub use provider::BrowserLocation;
pub use provider::{LocationProvider, MockLocation};
pub use registry::PathRegistry;
pub use settings::RouterSettings;
