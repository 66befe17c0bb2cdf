//! Restaurant directory queries over a [`Catalog`].

use std::cmp::Ordering;

use crate::Catalog;
use crate::def::RestaurantDef;

/// Default radius for [`Catalog::near_campus`], in miles.
pub const DEFAULT_CAMPUS_RADIUS_MILES: f64 = 1.0;

/// Ordering applied to directory results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
	/// Closest first. Entries without a parseable distance go last.
	#[default]
	Distance,
	/// Highest rated first.
	Rating,
	/// Alphabetical by name, ignoring case.
	Name,
}

/// Search and filter parameters of the directory page.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryQuery<'a> {
	/// Case-insensitive text matched against name and short description.
	pub search: &'a str,
	/// Cuisine tag to keep, matched case-insensitively. `None` keeps all.
	pub cuisine: Option<&'a str>,
	pub sort: SortOrder,
}

impl<'a> DirectoryQuery<'a> {
	pub fn search(mut self, text: &'a str) -> Self {
		self.search = text;
		self
	}

	pub fn cuisine(mut self, tag: &'a str) -> Self {
		self.cuisine = Some(tag);
		self
	}

	pub fn sort(mut self, sort: SortOrder) -> Self {
		self.sort = sort;
		self
	}

	fn matches(&self, def: &RestaurantDef, needle: &str) -> bool {
		let matches_search = needle.is_empty() || def.name.to_lowercase().contains(needle) || def.description.to_lowercase().contains(needle);
		let matches_cuisine = self.cuisine.is_none_or(|tag| def.has_cuisine(tag));
		matches_search && matches_cuisine
	}
}

impl Catalog {
	/// Filters and sorts the catalog for the directory page.
	pub fn query(&self, query: &DirectoryQuery<'_>) -> Vec<&'static RestaurantDef> {
		let needle = query.search.trim().to_lowercase();
		let mut hits: Vec<_> = self.iter().filter(|def| query.matches(def, &needle)).collect();
		hits.sort_by(|a, b| compare(query.sort, a, b));
		hits
	}

	/// Distinct cuisine tags in first-seen order.
	pub fn cuisines(&self) -> Vec<&'static str> {
		let mut seen = Vec::new();
		for tag in self.iter().flat_map(|def| def.cuisine.iter().copied()) {
			if !seen.contains(&tag) {
				seen.push(tag);
			}
		}
		seen
	}

	/// Restaurants with a cuisine tag containing `category`, ignoring case.
	pub fn by_category(&self, category: &str) -> Vec<&'static RestaurantDef> {
		let needle = category.to_lowercase();
		self.iter().filter(|def| def.cuisine.iter().any(|c| c.to_lowercase().contains(&needle))).collect()
	}

	/// Restaurants at most `max_miles` from campus.
	pub fn near_campus(&self, max_miles: f64) -> Vec<&'static RestaurantDef> {
		self.iter().filter(|def| def.distance_miles().is_some_and(|miles| miles <= max_miles)).collect()
	}
}

fn compare(sort: SortOrder, a: &RestaurantDef, b: &RestaurantDef) -> Ordering {
	match sort {
		SortOrder::Distance => {
			let a = a.distance_miles().unwrap_or(f64::INFINITY);
			let b = b.distance_miles().unwrap_or(f64::INFINITY);
			a.total_cmp(&b)
		}
		SortOrder::Rating => b.rating.total_cmp(&a.rating),
		SortOrder::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
	}
}
