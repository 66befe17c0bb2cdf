//! Static restaurant definitions.
//!
//! Everything here is `&'static` and compiled into the binary. Owned views
//! are built by the resolver when a definition is merged with live data.

use serde::{Deserialize, Serialize};

/// Price bracket shown on restaurant cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
	#[serde(rename = "$")]
	Budget,
	#[serde(rename = "$$")]
	Moderate,
	#[serde(rename = "$$$")]
	Premium,
}

impl PriceRange {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Budget => "$",
			Self::Moderate => "$$",
			Self::Premium => "$$$",
		}
	}
}

/// Map position of a restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
	pub lat: f64,
	pub lng: f64,
}

impl Coordinates {
	pub const fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}
}

/// One entry of a static menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuItemDef {
	pub id: &'static str,
	pub name: &'static str,
	pub description: &'static str,
	pub price: f64,
	pub category: &'static str,
	pub popular: bool,
	pub student_special: bool,
	pub dietary_info: &'static [&'static str],
}

impl MenuItemDef {
	pub const fn new(id: &'static str, name: &'static str, description: &'static str, price: f64, category: &'static str) -> Self {
		Self {
			id,
			name,
			description,
			price,
			category,
			popular: false,
			student_special: false,
			dietary_info: &[],
		}
	}

	/// Marks the item as a crowd favorite.
	pub const fn popular(mut self) -> Self {
		self.popular = true;
		self
	}

	/// Marks the item as a student special.
	pub const fn student_special(mut self) -> Self {
		self.student_special = true;
		self
	}

	pub const fn dietary(mut self, info: &'static [&'static str]) -> Self {
		self.dietary_info = info;
		self
	}
}

/// A statically authored restaurant page.
///
/// The slug is the URL key of the page and is unique within a catalog. The
/// menu of every built-in definition is non-empty so a rendered page always
/// has something to show when live data is unavailable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestaurantDef {
	pub id: &'static str,
	pub slug: &'static str,
	pub name: &'static str,
	pub cuisine: &'static [&'static str],
	pub rating: f64,
	pub review_count: u32,
	pub description: &'static str,
	pub long_description: &'static str,
	pub address: &'static str,
	pub phone: &'static str,
	pub website: Option<&'static str>,
	/// Opening hours keyed by weekday, in display order.
	pub hours: &'static [(&'static str, &'static str)],
	pub coordinates: Coordinates,
	/// Free-text distance such as `"0.2 miles"`.
	pub distance_from_campus: &'static str,
	pub price_range: PriceRange,
	pub image: &'static str,
	pub gallery: &'static [&'static str],
	pub specialties: &'static [&'static str],
	pub student_discount: &'static str,
	pub popular_items: &'static [&'static str],
	pub menu: &'static [MenuItemDef],
}

impl RestaurantDef {
	/// Parses the leading number of [`Self::distance_from_campus`].
	///
	/// Returns `None` when the text does not start with a number.
	pub fn distance_miles(&self) -> Option<f64> {
		parse_miles(self.distance_from_campus)
	}

	/// Returns true if any cuisine tag equals `tag`, ignoring case.
	pub fn has_cuisine(&self, tag: &str) -> bool {
		self.cuisine.iter().any(|c| c.eq_ignore_ascii_case(tag))
	}
}

pub(crate) fn parse_miles(text: &str) -> Option<f64> {
	let number = text.split_whitespace().next()?;
	number.parse::<f64>().ok().filter(|miles| miles.is_finite())
}
