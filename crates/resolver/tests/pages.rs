//! End-to-end page lookups over a JSON snapshot of the external database.
//!
//! These tests load a snapshot from disk the way the CLI does, wrap it in a
//! client deadline, and check the page data handed to rendering.

use std::sync::Arc;
use std::time::Duration;

use biteclub_resolver::{MemorySource, Origin, ResolvedRestaurant, RestaurantLookup, SiteConfig, Timed};
use pretty_assertions::assert_eq;

const SNAPSHOT: &str = r#"{
	"restaurants": [
		{ "id": "r1", "name": "Chicken Salad Chick", "phone": "(352) 555-0100", "active": true },
		{ "id": "r2", "name": "Moms Original Kitchen", "operatingHours": { "Monday": "Closed" } },
		{ "id": "r3", "name": "Gator Corner Deli", "logoUrl": "/logos/gcd.png", "active": false },
		{ "id": "r4", "name": "Pan Cubano" }
	],
	"menuItems": [
		{ "id": "c2", "restaurantId": "r1", "name": "Pimento Cheese", "price": 8.99, "category": "Sides", "available": true },
		{ "id": "c1", "restaurantId": "r1", "name": "Fancy Nancy", "price": 10.49, "category": "Chicken Salads", "available": true },
		{ "id": "c3", "restaurantId": "r1", "name": "Seasonal Soup", "price": 4.99, "category": "Sides", "available": false }
	]
}"#;

async fn lookup() -> RestaurantLookup {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("snapshot.json");
	tokio::fs::write(&path, SNAPSHOT).await.unwrap();

	let config = SiteConfig::from_toml("[features]\nlive_data = true\n").unwrap();
	let source = Arc::new(Timed::new(MemorySource::load(&path).await.unwrap(), config.api.timeout()));
	RestaurantLookup::new(source.clone(), source).configure(&config)
}

#[tokio::test]
async fn test_known_slug_gets_live_menu() {
	let resolved = lookup().await.lookup("chicken-salad-chick").await.unwrap();

	assert_eq!(resolved.origin, Origin::Merged);
	assert_eq!(resolved.phone, "(352) 555-0100");
	let names: Vec<_> = resolved.menu.iter().map(|item| item.name.as_str()).collect();
	assert_eq!(names, ["Fancy Nancy", "Pimento Cheese"]);
}

#[tokio::test]
async fn test_fuzzy_match_applies_external_hours() {
	let resolved = lookup().await.lookup("moms-og").await.unwrap();

	assert_eq!(resolved.origin, Origin::Merged);
	assert_eq!(resolved.name, "Mom's OG");
	assert_eq!(resolved.hours.len(), 1);
	// no external menu items, static menu stays
	assert_eq!(resolved.menu.len(), 3);
}

#[tokio::test]
async fn test_inactive_record_leaves_page_unresolved() {
	let lookup = lookup().await;
	assert!(lookup.lookup("gator-corner-deli").await.is_err());

	let resolution = lookup.resolver().resolve("gator-corner-deli").await;
	assert!(resolution.is_not_found());
	assert_eq!(resolution.attempts().len(), 3);
	assert_eq!(resolution.failures().count(), 0);
}

#[tokio::test]
async fn test_unknown_slug_is_terminal_not_found() {
	let err = lookup().await.lookup("totally-unknown-place").await.unwrap_err();
	assert_eq!(err.to_string(), "restaurant not found: totally-unknown-place");
}

#[tokio::test]
async fn test_page_slugs_include_external_only_restaurants() {
	let slugs = lookup().await.page_slugs().await;
	assert_eq!(
		slugs,
		[
			"moms-og",
			"chicken-salad-chick",
			"big-mills-cheesesteaks",
			"gumbys-pizza",
			"sushi-2-go",
			"moms-original-kitchen",
			"pan-cubano",
		]
	);
}

#[tokio::test]
async fn test_empty_snapshot_serves_static_pages() {
	let source = Timed::new(MemorySource::default(), Duration::from_secs(1));
	let lookup = RestaurantLookup::new(Arc::new(source.clone()), Arc::new(source));
	let resolved: ResolvedRestaurant = lookup.lookup("sushi-2-go").await.unwrap();
	assert_eq!(resolved.origin, Origin::Static);
}

#[tokio::test]
async fn test_missing_snapshot_is_a_transport_error() {
	let dir = tempfile::tempdir().unwrap();
	let err = MemorySource::load(&dir.path().join("absent.json")).await.unwrap_err();
	assert!(err.to_string().starts_with("transport failure:"));
}
