//! Slug to external-name alias table.
//!
//! The external database has no slug column, so each page slug maps to the
//! restaurant name the database is expected to hold. Slugs without an entry
//! fall back to a hyphen-to-space transform.

use std::borrow::Cow;
use std::sync::LazyLock;

use rustc_hash::FxHashMap as HashMap;

/// Built-in alias entries, `(slug, expected external name)`.
pub static BUILTIN_ALIASES: &[(&str, &str)] = &[
	("moms-og", "Mom's OG"),
	("chicken-salad-chick", "Chicken Salad Chick"),
	("big-mills-cheesesteaks", "Big Mill's Cheesesteaks"),
	("gator-pizza", "Gator Pizza"),
	("sushi-2-go", "Sushi 2 Go"),
	("hungry-bagel", "The Hungry Bagel"),
	("frank-and-steins", "Frank & Steins"),
	("burrito-fresh", "Burrito Fresh"),
	("hummus-kebab", "Hummus & Kebab"),
	("thai-town", "Thai Town"),
	("humble-pizza", "Humble Pizza"),
	("twisted-dilla", "Twisted Dilla"),
	("backyard-bbq", "Backyard BBQ"),
	("bagel-n-noodle", "Bagel 'N' Noodle"),
	("stella21", "Stella21"),
	("pan-cubano", "Pan Cubano"),
	("french-quarter", "French Quarter"),
	("gator-corner-deli", "Gator Corner Deli"),
	("midtown-eats", "Midtown Eats"),
	("campus-grind", "Campus Grind"),
	("gator-subs", "Gator Subs"),
];

/// Alias table built from [`BUILTIN_ALIASES`].
pub static ALIASES: LazyLock<AliasTable> = LazyLock::new(|| AliasTable::new(BUILTIN_ALIASES));

/// Indexed slug to external-name map.
///
/// Keys are unique; when the source slice repeats a slug the first entry
/// wins. Values may repeat.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
	by_slug: HashMap<&'static str, &'static str>,
}

impl AliasTable {
	pub fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
		let mut by_slug = HashMap::default();
		for &(slug, name) in entries {
			by_slug.entry(slug).or_insert(name);
		}
		Self { by_slug }
	}

	/// Returns the aliased external name for `slug`, if any.
	pub fn get(&self, slug: &str) -> Option<&'static str> {
		self.by_slug.get(slug).copied()
	}

	/// Returns the name the external record for `slug` is expected to carry.
	pub fn expected_name<'a>(&self, slug: &'a str) -> Cow<'a, str> {
		match self.get(slug) {
			Some(name) => Cow::Borrowed(name),
			None => Cow::Owned(slug.replace('-', " ")),
		}
	}

	pub fn len(&self) -> usize {
		self.by_slug.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_slug.is_empty()
	}
}

/// Looks up `slug` in the built-in table.
pub fn get(slug: &str) -> Option<&'static str> {
	ALIASES.get(slug)
}

/// Expected external name for `slug` using the built-in table.
pub fn expected_name(slug: &str) -> Cow<'_, str> {
	ALIASES.expected_name(slug)
}
