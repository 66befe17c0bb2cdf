use biteclub_catalog::find;
use pretty_assertions::assert_eq;

use super::*;

const NO_ITEMS: &[ExternalMenuItem] = &[];

fn moms() -> &'static RestaurantDef {
	find("moms-og").unwrap()
}

fn live_items(count: usize) -> Vec<ExternalMenuItem> {
	(0..count)
		.map(|i| ExternalMenuItem::new(format!("x{i}"), "r1", format!("Item {i}"), 5.0 + i as f64).with_category("Live"))
		.collect()
}

#[test]
fn static_only_is_unmodified() {
	let resolved = merge(Some(moms()), None).unwrap();
	assert_eq!(resolved, ResolvedRestaurant::from_static(moms()));
	assert_eq!(resolved.origin, Origin::Static);
	assert_eq!(resolved.menu.len(), 3);
	assert_eq!(resolved.hours.get("Sunday").map(String::as_str), Some("12:00 PM - 8:00 PM"));
}

#[test]
fn empty_external_menu_keeps_static_menu() {
	let record = ExternalRestaurant::new("r1", "Mom's OG");
	let resolved = merge(Some(moms()), Some((&record, NO_ITEMS))).unwrap();

	assert_eq!(resolved.origin, Origin::Merged);
	let static_menu: Vec<MenuItem> = moms().menu.iter().map(MenuItem::from).collect();
	assert_eq!(resolved.menu, static_menu);
}

#[test]
fn non_empty_external_menu_replaces_static_menu() {
	let record = ExternalRestaurant::new("r1", "Mom's OG");
	let items = live_items(5);
	let resolved = merge(Some(moms()), Some((&record, items.as_slice()))).unwrap();

	let ids: Vec<_> = resolved.menu.iter().map(|item| item.id.as_str()).collect();
	assert_eq!(ids, ["x0", "x1", "x2", "x3", "x4"]);
	assert!(resolved.menu.iter().all(|item| item.category == "Live"));
}

#[test]
fn external_fields_override_only_when_non_empty() {
	let record = ExternalRestaurant::new("r1", "Mom's OG")
		.with_phone("(352) 555-9999")
		.with_description("   ")
		.with_hours([("Monday", "Closed")]);
	let resolved = merge(Some(moms()), Some((&record, NO_ITEMS))).unwrap();

	assert_eq!(resolved.phone, "(352) 555-9999");
	assert_eq!(resolved.description, moms().description);
	assert_eq!(resolved.hours.len(), 1);
	assert_eq!(resolved.hours.get("Monday").map(String::as_str), Some("Closed"));
}

#[test]
fn empty_external_hours_keep_static_hours() {
	let record = ExternalRestaurant::new("r1", "Mom's OG").with_hours(Vec::<(String, String)>::new());
	let resolved = merge(Some(moms()), Some((&record, NO_ITEMS))).unwrap();
	assert_eq!(resolved.hours.len(), 7);
}

#[test]
fn merged_keeps_static_presentation_fields() {
	let record = ExternalRestaurant::new("r1", "Totally Different Name");
	let resolved = merge(Some(moms()), Some((&record, live_items(1).as_slice()))).unwrap();

	assert_eq!(resolved.name, "Mom's OG");
	assert_eq!(resolved.slug, "moms-og");
	assert_eq!(resolved.coordinates, moms().coordinates);
	assert_eq!(resolved.specialties, ["Mac & Cheese", "Fried Chicken", "Meatloaf"]);
	assert_eq!(resolved.image, moms().image);
}

#[test]
fn external_only_uses_default_projection() {
	let record = ExternalRestaurant::new("r9", "Pan  Cubano")
		.with_phone("(352) 555-0199")
		.with_description("Cuban sandwiches");
	let mut items = live_items(1);
	items[0].category = None;
	let resolved = merge(None, Some((&record, items.as_slice()))).unwrap();

	assert_eq!(resolved.origin, Origin::External);
	assert_eq!(resolved.slug, "pan-cubano");
	assert_eq!(resolved.name, "Pan  Cubano");
	assert_eq!(resolved.description, "Cuban sandwiches");
	assert_eq!(resolved.long_description, "Cuban sandwiches");
	assert_eq!(resolved.cuisine, ["American"]);
	assert_eq!(resolved.rating, DEFAULT_PROJECTION.rating);
	assert_eq!(resolved.review_count, 0);
	assert_eq!(resolved.price_range, PriceRange::Moderate);
	assert_eq!(resolved.coordinates, DEFAULT_PROJECTION.coordinates);
	assert_eq!(resolved.student_discount, "10%");
	assert_eq!(resolved.image, DEFAULT_PROJECTION.image);
	assert!(resolved.specialties.is_empty() && resolved.gallery.is_empty());
	assert_eq!(resolved.menu[0].category, DEFAULT_PROJECTION.menu_category);
}

#[test]
fn external_only_prefers_logo_over_default_image() {
	let mut record = ExternalRestaurant::new("r9", "Stella21");
	record.logo_url = Some("/logos/stella21.png".into());
	let resolved = merge(None, Some((&record, NO_ITEMS))).unwrap();
	assert_eq!(resolved.image, "/logos/stella21.png");
}

#[test]
fn neither_source_is_terminal() {
	assert_eq!(merge(None, None), None);
}

#[test]
fn slugify_collapses_whitespace() {
	assert_eq!(slugify("Chicken Salad Chick"), "chicken-salad-chick");
	assert_eq!(slugify("  Gator\tCorner  Deli "), "gator-corner-deli");
	assert_eq!(slugify(""), "");
}

#[test]
fn resolved_restaurant_serializes_camel_case() {
	let json = serde_json::to_value(ResolvedRestaurant::from_static(moms())).unwrap();
	assert_eq!(json["origin"], "static");
	assert_eq!(json["priceRange"], "$$");
	assert_eq!(json["reviewCount"], 342);
	assert_eq!(json["menu"][0]["studentSpecial"], false);
}
