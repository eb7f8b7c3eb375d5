//! Path registry integration tests
//!
//! Tests for the public API covering:
//! - Happy path: view builders, mocking and reading back the location
//! - Edge cases: zero ids, missing slugs, partial location queries
//! - Sanity: prefix and id-index properties over arbitrary ids

use farmconsole_urls::path::{self, LocationQuery};
use farmconsole_urls::{AppPath, HostContext, MockLocation, PathRegistry, RouterSettings};
use proptest::prelude::*;
use rstest::*;
use std::io::Write;

#[fixture]
fn location() -> MockLocation {
	MockLocation::new(path::designer())
}

#[fixture]
fn registry(location: MockLocation) -> (MockLocation, PathRegistry<MockLocation>) {
	(location.clone(), PathRegistry::new(location))
}

// ============================================================================
// Happy Path Tests
// ============================================================================

#[rstest]
fn test_returns_path(registry: (MockLocation, PathRegistry<MockLocation>)) {
	let (location, registry) = registry;
	assert_eq!(path::plants(), "/app/designer/plants");
	assert_eq!(path::plants().id(1), "/app/designer/plants/1");

	location.mock(path::designer_sequences().id("sequence"));
	assert_eq!(registry.sequences().id("sequence"), "/app/designer/sequences/sequence");

	location.mock(path::sequence_page().id("sequence"));
	assert_eq!(registry.sequences().id("sequence"), "/app/sequences/sequence");
}

#[rstest]
fn test_returns_path_start_result(registry: (MockLocation, PathRegistry<MockLocation>)) {
	let (location, registry) = registry;
	location.mock(path::plants().id(1));
	assert!(registry.starts_with(&path::plants()));

	location.mock(path::weeds().id(1));
	assert!(!registry.starts_with(&path::plants()));
}

#[rstest]
fn test_modifies_path(location: MockLocation) {
	assert_eq!(location.mock(path::plants()), "/app/designer/plants");
	assert_eq!(path::plants().route(), "/designer/plants");
}

#[rstest]
#[case(path::app(), 2)]
#[case(path::designer(), 3)]
#[case(path::plants(), 4)]
#[case(path::groups(), 4)]
#[case(path::crop_search(), 5)]
#[case(path::crop_search().id("mint"), 6)]
#[case(path::plant_templates().id(1), 6)]
fn test_returns_index(
	registry: (MockLocation, PathRegistry<MockLocation>),
	#[case] view: AppPath,
	#[case] expected: usize,
) {
	let (location, _registry) = registry;
	// The index never depends on where the user is.
	location.mock(path::logout());
	assert_eq!(view.id_index(), expected);
	location.mock(path::weeds().id(12));
	assert_eq!(view.id_index(), expected);
}

#[rstest]
fn test_returns_slug(registry: (MockLocation, PathRegistry<MockLocation>)) {
	let (location, registry) = registry;
	location.mock(path::crop_search().id("slug"));
	assert_eq!(registry.get_slug(&path::crop_search()).as_deref(), Some("slug"));
}

#[rstest]
fn test_returns_path_with_query() {
	assert_eq!(path::settings(Some("os")), "/app/designer/settings?highlight=os");
	assert_eq!(path::help(Some("os")), "/app/designer/help?page=os");
	assert_eq!(path::developer(Some("os")), "/app/designer/developer?page=os");
}

#[rstest]
fn test_returns_location_path() {
	assert_eq!(path::location(LocationQuery::default()), "/app/designer/location");
	assert_eq!(
		path::location(LocationQuery {
			x: Some(0.0),
			..Default::default()
		}),
		"/app/designer/location"
	);
	assert_eq!(
		path::location(LocationQuery::at(0.0, 0.0)),
		"/app/designer/location?x=0?y=0"
	);
	assert_eq!(
		path::location(LocationQuery::at(0.0, 0.0).with_z(0.0)),
		"/app/designer/location?x=0?y=0?z=0"
	);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

#[rstest]
fn test_slug_missing_when_location_is_short(
	registry: (MockLocation, PathRegistry<MockLocation>),
) {
	let (location, registry) = registry;
	location.mock(path::plants());
	assert_eq!(registry.get_slug(&path::crop_search()), None);
}

#[rstest]
fn test_location_query_round_trip(registry: (MockLocation, PathRegistry<MockLocation>)) {
	let (location, registry) = registry;
	let query = LocationQuery::at(120.0, 340.5).with_z(-25.0);
	location.mock(path::location(query));
	assert_eq!(registry.location_query(), query);
}

#[rstest]
fn test_settings_from_file_drive_default_host(location: MockLocation) {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "default_host = \"standalone\"").unwrap();

	let settings = RouterSettings::from_file(file.path()).unwrap();
	assert_eq!(settings.default_host, HostContext::Standalone);

	let registry = PathRegistry::with_settings(location.clone(), settings);
	location.mock(path::demo());
	assert_eq!(registry.sequences().id(1), "/app/sequences/1");
}

// ============================================================================
// Property Tests
// ============================================================================

const STATIC_VIEWS: &[fn() -> AppPath] = &[
	path::app,
	path::designer,
	path::plants,
	path::crop_search,
	path::saved_gardens,
	path::plant_templates,
	path::groups,
	path::zones,
	path::points,
	path::weeds,
	path::tools,
	path::tool_slots,
	path::farm_events,
	path::sensors,
	path::peripherals,
	path::photos,
	path::controls,
	path::logs,
	path::messages,
	path::tours,
	path::farmware,
	path::designer_sequences,
	path::sequence_page,
	path::designer_regimens,
	path::regimen_page,
];

proptest! {
	#[test]
	fn prop_id_extends_base(view in 0..STATIC_VIEWS.len(), id in "[a-z0-9_-]{1,16}") {
		let base = STATIC_VIEWS[view]();
		let with_id = base.clone().id(&id);

		prop_assert!(with_id.as_str().starts_with(base.as_str()));
		prop_assert!(with_id.as_str().len() > base.as_str().len());
		prop_assert_eq!(with_id.as_str(), format!("{}/{}", base, id));
		prop_assert_eq!(with_id.id_index(), base.id_index() + 1);
	}

	#[test]
	fn prop_mocked_id_reads_back(view in 0..STATIC_VIEWS.len(), id in 0u64..1_000_000) {
		let base = STATIC_VIEWS[view]();
		let location = MockLocation::new(base.clone().id(id));
		let registry = PathRegistry::new(location);

		prop_assert_eq!(registry.get_id::<u64>(&base), Ok(Some(id)));
	}

	#[test]
	fn prop_route_removes_only_app_prefix(view in 0..STATIC_VIEWS.len()) {
		let built = STATIC_VIEWS[view]();
		prop_assert_eq!(format!("/app{}", built.route()), built.as_str());
	}
}
