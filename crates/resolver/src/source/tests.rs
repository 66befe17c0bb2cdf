use std::time::Duration;

use pretty_assertions::assert_eq;

use super::*;

fn snapshot() -> MemorySource {
	MemorySource::new(
		vec![
			ExternalRestaurant::new("r1", "Gator Pizza"),
			ExternalRestaurant::new("r2", "Gator Pizza Express").inactive(),
			ExternalRestaurant::new("r3", "Big Mill's Cheesesteaks"),
			ExternalRestaurant::new("r4", "Gator Pizza Downtown"),
		],
		vec![
			ExternalMenuItem::new("m1", "r1", "Pepperoni", 12.0).with_category("Pizzas"),
			ExternalMenuItem::new("m2", "r1", "Garlic Knots", 5.0).with_category("Sides"),
			ExternalMenuItem::new("m3", "r1", "Cheese", 10.0).with_category("Pizzas"),
			ExternalMenuItem::new("m4", "r1", "Soda", 2.0),
			ExternalMenuItem::new("m5", "r1", "Calzone", 11.0).with_category("Pizzas").unavailable(),
			ExternalMenuItem::new("m6", "r3", "Cheesesteak", 12.0),
		],
	)
}

#[tokio::test]
async fn exact_name_ignores_case_and_requires_equality() {
	let source = snapshot();
	let hit = source.find_active_by_exact_name("gator PIZZA").await;
	assert_eq!(hit.map(|r| r.map(|r| r.id)), Ok(Some("r1".to_string())));
	assert_eq!(source.find_active_by_exact_name("gator").await, Ok(None));
}

#[tokio::test]
async fn name_contains_returns_first_active_in_collection_order() {
	let source = snapshot();
	let hit = source.find_active_by_name_contains("pizza ").await;
	assert_eq!(hit.map(|r| r.map(|r| r.id)), Ok(Some("r4".to_string())));
}

#[tokio::test]
async fn inactive_records_are_never_returned() {
	let source = snapshot();
	assert_eq!(source.find_active_by_exact_name("Gator Pizza Express").await, Ok(None));
	let ids: Vec<_> = source.list_active().await.unwrap_or_default().into_iter().map(|r| r.id).collect();
	assert_eq!(ids, ["r1", "r3", "r4"]);
}

#[tokio::test]
async fn menu_items_are_available_and_ordered_by_category_then_name() {
	let source = snapshot();
	let names: Vec<_> = source
		.available_menu_items("r1")
		.await
		.unwrap_or_default()
		.into_iter()
		.map(|item| item.name)
		.collect();
	assert_eq!(names, ["Cheese", "Pepperoni", "Garlic Knots", "Soda"]);
	assert_eq!(source.available_menu_items("missing").await, Ok(Vec::new()));
}

#[test]
fn snapshot_json_uses_camel_case() {
	let json = r#"{
		"restaurants": [
			{"id": "r1", "name": "Thai Town", "operatingHours": {"Monday": "11-9", "Sunday": "Closed"}, "logoUrl": "/logo.png"}
		],
		"menuItems": [
			{"id": "m1", "restaurantId": "r1", "name": "Pad Thai", "price": 11.5}
		]
	}"#;
	let source = MemorySource::from_json(json).unwrap();
	let record = &source.restaurants()[0];
	assert!(record.active);
	assert_eq!(record.logo_url.as_deref(), Some("/logo.png"));
	let days: Vec<_> = record.operating_hours.iter().flat_map(|h| h.keys()).collect();
	assert_eq!(days, ["Monday", "Sunday"]);
	assert!(source.menu_items()[0].available);
}

#[test]
fn malformed_snapshot_is_reported() {
	let err = MemorySource::from_json("{\"restaurants\": 3}").unwrap_err();
	assert!(matches!(err, SourceError::Malformed(_)));
}

#[tokio::test]
async fn missing_snapshot_file_is_a_transport_failure() {
	let dir = tempfile::tempdir().unwrap();
	let err = MemorySource::load(&dir.path().join("absent.json")).await.unwrap_err();
	assert!(matches!(err, SourceError::Transport(_)));
}

#[tokio::test]
async fn snapshot_file_round_trips() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("snapshot.json");
	std::fs::write(&path, serde_json::to_string(&snapshot()).unwrap()).unwrap();
	assert_eq!(MemorySource::load(&path).await, Ok(snapshot()));
}

struct Stalled;

#[async_trait]
impl RestaurantSource for Stalled {
	async fn find_active_by_exact_name(&self, _name: &str) -> Result<Option<ExternalRestaurant>, SourceError> {
		tokio::time::sleep(Duration::from_secs(60)).await;
		Ok(None)
	}

	async fn find_active_by_name_contains(&self, _needle: &str) -> Result<Option<ExternalRestaurant>, SourceError> {
		Err(SourceError::Transport("refused".into()))
	}

	async fn list_active(&self) -> Result<Vec<ExternalRestaurant>, SourceError> {
		Ok(Vec::new())
	}
}

#[tokio::test(start_paused = true)]
async fn timed_source_reports_elapsed_deadline() {
	let source = Timed::new(Stalled, Duration::from_secs(10));
	assert_eq!(source.find_active_by_exact_name("x").await, Err(SourceError::Timeout(Duration::from_secs(10))));
	assert_eq!(source.find_active_by_name_contains("x").await, Err(SourceError::Transport("refused".into())));
	assert_eq!(source.list_active().await, Ok(Vec::new()));
}

#[tokio::test]
async fn arc_sources_delegate() {
	let source: Arc<dyn RestaurantSource> = Arc::new(snapshot());
	assert_eq!(source.list_active().await.map(|all| all.len()), Ok(3));
}
