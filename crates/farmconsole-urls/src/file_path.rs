//! Paths of static resources served under `/app-resources`.

use std::fmt;

/// Root of every static resource.
pub const RESOURCES_ROOT: &str = "/app-resources";

/// Fallback icon for weeds without a picture.
pub const DEFAULT_WEED_ICON: &str = "/app-resources/img/generic-weed.svg";

/// Fallback icon for plants without a picture.
pub const DEFAULT_ICON: &str = "/app-resources/img/icons/generic-plant.svg";

/// `/app-resources/languages/<code>.json`
pub fn language(code: &str) -> String {
	format!("{}/languages/{}.json", RESOURCES_ROOT, code)
}

/// `/app-resources/img/icons/<icon>.svg`
pub fn icon(icon: Icon) -> String {
	format!("{}/img/icons/{}.svg", RESOURCES_ROOT, icon)
}

/// `/app-resources/img/<name>.<ext>`
pub fn image(name: &str, format: ImageFormat) -> String {
	format!("{}/img/{}.{}", RESOURCES_ROOT, name, format.extension())
}

/// Raster and vector formats served from `/app-resources/img`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ImageFormat {
	#[default]
	Png,
	Svg,
	Jpg,
}

impl ImageFormat {
	/// File extension without the dot.
	pub fn extension(self) -> &'static str {
		match self {
			Self::Png => "png",
			Self::Svg => "svg",
			Self::Jpg => "jpg",
		}
	}
}

macro_rules! icons {
	($($variant:ident => $name:literal),* $(,)?) => {
		/// Icons served from `/app-resources/img/icons`.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum Icon {
			$($variant,)*
		}

		impl Icon {
			/// Every icon, in declaration order.
			pub const ALL: &'static [Icon] = &[$(Icon::$variant,)*];

			/// File stem of the icon.
			pub fn as_str(self) -> &'static str {
				match self {
					$(Icon::$variant => $name,)*
				}
			}
		}
	};
}

icons! {
	Map => "map",
	Plant => "plant",
	Weeds => "weeds",
	Points => "point",
	Groups => "groups",
	Zones => "zones",
	Sequence => "sequence",
	Regimens => "regimens",
	FarmEvents => "calendar",
	Controls => "controls",
	Sensors => "sensors",
	Peripherals => "peripherals",
	Photos => "photos",
	Tools => "tool",
	Farmware => "farmware",
	Logs => "logs",
	Messages => "messages",
	Settings => "settings",
	Help => "help",
	Location => "location",
	Developer => "developer",
}

impl fmt::Display for Icon {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
