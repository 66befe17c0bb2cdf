//! Merging static restaurant pages with external records.
//!
//! External data wins where it is present and non-empty; everything the
//! external database does not carry (coordinates, images, cuisine tags,
//! specialties) always comes from the static page or, for restaurants with no
//! static page, from [`DEFAULT_PROJECTION`].

use biteclub_catalog::{Coordinates, MenuItemDef, PriceRange, RestaurantDef};
use indexmap::IndexMap;
use serde::Serialize;

use crate::record::{ExternalMenuItem, ExternalRestaurant};

/// Defaults for restaurants that exist only in the external database.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultProjection {
	pub cuisine: &'static [&'static str],
	pub rating: f64,
	pub review_count: u32,
	pub price_range: PriceRange,
	pub coordinates: Coordinates,
	pub distance_from_campus: &'static str,
	pub student_discount: &'static str,
	pub image: &'static str,
	/// Category given to external menu items that have none.
	pub menu_category: &'static str,
}

pub const DEFAULT_PROJECTION: DefaultProjection = DefaultProjection {
	cuisine: &["American"],
	rating: 4.5,
	review_count: 0,
	price_range: PriceRange::Moderate,
	coordinates: Coordinates::new(0.0, 0.0),
	distance_from_campus: "0.5 miles",
	student_discount: "10%",
	image: "/images/restaurants/default.jpg",
	menu_category: "Main",
};

/// Which data sources contributed to a [`ResolvedRestaurant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
	/// Static page only.
	Static,
	/// Static page enriched with an external record.
	Merged,
	/// Synthesized from an external record alone.
	External,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
	pub id: String,
	pub name: String,
	pub description: String,
	pub price: f64,
	pub category: String,
	pub popular: bool,
	pub student_special: bool,
	pub dietary_info: Vec<String>,
}

impl From<&MenuItemDef> for MenuItem {
	fn from(def: &MenuItemDef) -> Self {
		Self {
			id: def.id.to_string(),
			name: def.name.to_string(),
			description: def.description.to_string(),
			price: def.price,
			category: def.category.to_string(),
			popular: def.popular,
			student_special: def.student_special,
			dietary_info: strings(def.dietary_info),
		}
	}
}

impl MenuItem {
	fn from_external(item: &ExternalMenuItem, defaults: &DefaultProjection) -> Self {
		Self {
			id: item.id.clone(),
			name: item.name.clone(),
			description: item.description.clone().unwrap_or_default(),
			price: item.price,
			category: non_empty(item.category.as_deref()).unwrap_or(defaults.menu_category).to_string(),
			popular: false,
			student_special: false,
			dietary_info: Vec::new(),
		}
	}
}

/// Restaurant view handed to page rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRestaurant {
	pub origin: Origin,
	pub id: String,
	pub slug: String,
	pub name: String,
	pub cuisine: Vec<String>,
	pub rating: f64,
	pub review_count: u32,
	pub description: String,
	pub long_description: String,
	pub address: String,
	pub phone: String,
	pub website: Option<String>,
	pub hours: IndexMap<String, String>,
	pub coordinates: Coordinates,
	pub distance_from_campus: String,
	pub price_range: PriceRange,
	pub image: String,
	pub gallery: Vec<String>,
	pub specialties: Vec<String>,
	pub student_discount: String,
	pub popular_items: Vec<String>,
	pub menu: Vec<MenuItem>,
}

impl ResolvedRestaurant {
	/// The static page, unmodified.
	pub fn from_static(def: &RestaurantDef) -> Self {
		Self {
			origin: Origin::Static,
			id: def.id.to_string(),
			slug: def.slug.to_string(),
			name: def.name.to_string(),
			cuisine: strings(def.cuisine),
			rating: def.rating,
			review_count: def.review_count,
			description: def.description.to_string(),
			long_description: def.long_description.to_string(),
			address: def.address.to_string(),
			phone: def.phone.to_string(),
			website: def.website.map(str::to_string),
			hours: def.hours.iter().map(|&(day, text)| (day.to_string(), text.to_string())).collect(),
			coordinates: def.coordinates,
			distance_from_campus: def.distance_from_campus.to_string(),
			price_range: def.price_range,
			image: def.image.to_string(),
			gallery: strings(def.gallery),
			specialties: strings(def.specialties),
			student_discount: def.student_discount.to_string(),
			popular_items: strings(def.popular_items),
			menu: def.menu.iter().map(MenuItem::from).collect(),
		}
	}

	/// The static page with live menu, phone, description and hours applied.
	///
	/// A non-empty external menu replaces the static one entirely; an empty
	/// one leaves the static menu in place.
	pub fn enriched(def: &RestaurantDef, record: &ExternalRestaurant, menu: &[ExternalMenuItem]) -> Self {
		let mut merged = Self::from_static(def);
		merged.origin = Origin::Merged;
		if !menu.is_empty() {
			merged.menu = external_menu(menu, &DEFAULT_PROJECTION);
		}
		if let Some(phone) = non_empty(record.phone.as_deref()) {
			merged.phone = phone.to_string();
		}
		if let Some(description) = non_empty(record.description.as_deref()) {
			merged.description = description.to_string();
		}
		if let Some(hours) = record.operating_hours.as_ref().filter(|hours| !hours.is_empty()) {
			merged.hours = hours.clone();
		}
		merged
	}

	/// A restaurant with no static page, filled in from `defaults`.
	pub fn from_external(record: &ExternalRestaurant, menu: &[ExternalMenuItem], defaults: &DefaultProjection) -> Self {
		let description = record.description.clone().unwrap_or_default();
		Self {
			origin: Origin::External,
			id: record.id.clone(),
			slug: slugify(&record.name),
			name: record.name.clone(),
			cuisine: strings(defaults.cuisine),
			rating: defaults.rating,
			review_count: defaults.review_count,
			long_description: description.clone(),
			description,
			address: String::new(),
			phone: record.phone.clone().unwrap_or_default(),
			website: None,
			hours: record.operating_hours.clone().unwrap_or_default(),
			coordinates: defaults.coordinates,
			distance_from_campus: defaults.distance_from_campus.to_string(),
			price_range: defaults.price_range,
			image: non_empty(record.logo_url.as_deref()).unwrap_or(defaults.image).to_string(),
			gallery: Vec::new(),
			specialties: Vec::new(),
			student_discount: defaults.student_discount.to_string(),
			popular_items: Vec::new(),
			menu: external_menu(menu, defaults),
		}
	}
}

/// Combines whatever data exists for one slug.
///
/// Returns `None` only when there is neither a static page nor an external
/// record, which callers treat as a terminal not-found.
pub fn merge(content: Option<&RestaurantDef>, live: Option<(&ExternalRestaurant, &[ExternalMenuItem])>) -> Option<ResolvedRestaurant> {
	match (content, live) {
		(Some(def), Some((record, menu))) => Some(ResolvedRestaurant::enriched(def, record, menu)),
		(Some(def), None) => Some(ResolvedRestaurant::from_static(def)),
		(None, Some((record, menu))) => Some(ResolvedRestaurant::from_external(record, menu, &DEFAULT_PROJECTION)),
		(None, None) => None,
	}
}

/// Page slug for an external name: lowercased, whitespace runs become `-`.
pub fn slugify(name: &str) -> String {
	name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

fn external_menu(items: &[ExternalMenuItem], defaults: &DefaultProjection) -> Vec<MenuItem> {
	items.iter().map(|item| MenuItem::from_external(item, defaults)).collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
	value.filter(|v| !v.trim().is_empty())
}

fn strings(values: &[&str]) -> Vec<String> {
	values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests;
