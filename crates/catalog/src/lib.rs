//! Static restaurant content for the Bite Club site.
//!
//! The catalog holds the hand-authored restaurant pages compiled into the
//! binary, indexed by slug. It never performs I/O and lookups cannot fail.
//! The [`aliases`] table maps page slugs to the names the external restaurant
//! database is expected to use, and [`directory`] implements the search,
//! filter, and sort behavior of the restaurant directory page.

use std::sync::LazyLock;

use rustc_hash::FxHashMap as HashMap;

pub mod aliases;
mod builtins;
pub mod def;
pub mod directory;

pub use aliases::{ALIASES, AliasTable};
pub use builtins::RESTAURANTS;
pub use def::{Coordinates, MenuItemDef, PriceRange, RestaurantDef};
pub use directory::{DEFAULT_CAMPUS_RADIUS_MILES, DirectoryQuery, SortOrder};

/// Catalog of the built-in restaurants.
pub static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(RESTAURANTS));

/// Slug-indexed set of restaurant definitions.
#[derive(Debug, Clone)]
pub struct Catalog {
	entries: &'static [RestaurantDef],
	by_slug: HashMap<&'static str, usize>,
}

impl Catalog {
	/// Indexes `entries` by slug. A repeated slug keeps its first definition.
	pub fn new(entries: &'static [RestaurantDef]) -> Self {
		let mut by_slug = HashMap::default();
		for (idx, def) in entries.iter().enumerate() {
			by_slug.entry(def.slug).or_insert(idx);
		}
		Self { entries, by_slug }
	}

	/// Finds a definition by slug.
	pub fn get(&self, slug: &str) -> Option<&'static RestaurantDef> {
		let entries = self.entries;
		self.by_slug.get(slug).map(|&idx| &entries[idx])
	}

	pub fn contains(&self, slug: &str) -> bool {
		self.by_slug.contains_key(slug)
	}

	/// Iterates definitions in authored order.
	pub fn iter(&self) -> impl Iterator<Item = &'static RestaurantDef> + use<> {
		let entries: &'static [RestaurantDef] = self.entries;
		entries.iter()
	}

	/// Slugs in authored order.
	pub fn slugs(&self) -> impl Iterator<Item = &'static str> + use<> {
		self.iter().map(|def| def.slug)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Finds a built-in restaurant by slug.
pub fn find(slug: &str) -> Option<&'static RestaurantDef> {
	CATALOG.get(slug)
}

/// Returns all built-in restaurants in authored order.
pub fn all() -> impl Iterator<Item = &'static RestaurantDef> {
	CATALOG.iter()
}
