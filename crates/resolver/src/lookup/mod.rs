//! Restaurant page data: static catalog plus live external records.
//!
//! [`RestaurantLookup`] is the single entry point page rendering uses. It
//! resolves the slug, fetches the live menu, and merges the result over the
//! static page. External failures never escape; the only error a caller sees
//! is [`LookupError::NotFound`].

use std::sync::Arc;

use biteclub_catalog::{ALIASES, AliasTable, CATALOG, Catalog, RestaurantDef};
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::merge::{ResolvedRestaurant, merge, slugify};
use crate::record::ExternalRestaurant;
use crate::resolve::{FuzzyPolicy, Resolution, Resolver};
use crate::source::{MenuSource, RestaurantSource};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
	/// Neither a static page nor an external record exists for the slug.
	#[error("restaurant not found: {slug}")]
	NotFound { slug: String },
}

pub type Result<T> = std::result::Result<T, LookupError>;

/// Shared, per-process restaurant lookup.
#[derive(Clone)]
pub struct RestaurantLookup {
	catalog: &'static Catalog,
	aliases: &'static AliasTable,
	restaurants: Arc<dyn RestaurantSource>,
	menus: Arc<dyn MenuSource>,
	live_data: bool,
	fuzzy: FuzzyPolicy,
}

impl RestaurantLookup {
	/// Lookup over the built-in catalog and aliases with live data enabled.
	pub fn new(restaurants: Arc<dyn RestaurantSource>, menus: Arc<dyn MenuSource>) -> Self {
		Self {
			catalog: &CATALOG,
			aliases: &ALIASES,
			restaurants,
			menus,
			live_data: true,
			fuzzy: FuzzyPolicy::default(),
		}
	}

	#[must_use]
	pub fn with_catalog(mut self, catalog: &'static Catalog) -> Self {
		self.catalog = catalog;
		self
	}

	#[must_use]
	pub fn with_aliases(mut self, aliases: &'static AliasTable) -> Self {
		self.aliases = aliases;
		self
	}

	/// When off, static pages are served and no external query is made.
	#[must_use]
	pub fn live_data(mut self, enabled: bool) -> Self {
		self.live_data = enabled;
		self
	}

	#[must_use]
	pub fn fuzzy(mut self, policy: FuzzyPolicy) -> Self {
		self.fuzzy = policy;
		self
	}

	/// Applies the feature flag and resolver settings of `config`.
	#[must_use]
	pub fn configure(self, config: &SiteConfig) -> Self {
		self.live_data(config.features.live_data).fuzzy(config.resolver.fuzzy)
	}

	pub fn catalog(&self) -> &'static Catalog {
		self.catalog
	}

	pub fn resolver(&self) -> Resolver<'_> {
		Resolver::new(&*self.restaurants, self.aliases).fuzzy(self.fuzzy)
	}

	/// Page data for `slug`.
	pub async fn lookup(&self, slug: &str) -> Result<ResolvedRestaurant> {
		self.lookup_resolved(slug).await.1
	}

	/// Page data for `slug` together with the resolution that produced it.
	///
	/// The resolution is `None` when live data is off and nothing was queried.
	pub async fn lookup_resolved(&self, slug: &str) -> (Option<Resolution>, Result<ResolvedRestaurant>) {
		let content = self.catalog.get(slug);
		if !self.live_data {
			return (None, merge(content, None).ok_or_else(|| not_found(slug)));
		}

		let resolution = self.resolver().resolve(slug).await;
		let page = self.merge_live(slug, content, resolution.record()).await;
		(Some(resolution), page)
	}

	async fn merge_live(&self, slug: &str, content: Option<&RestaurantDef>, record: Option<&ExternalRestaurant>) -> Result<ResolvedRestaurant> {
		let Some(record) = record else {
			tracing::debug!(slug = %slug, has_static = content.is_some(), "no external record");
			return merge(content, None).ok_or_else(|| not_found(slug));
		};

		let menu = match self.menus.available_menu_items(&record.id).await {
			Ok(menu) => menu,
			Err(err) => {
				tracing::warn!(slug = %slug, id = %record.id, error = %err, "menu query failed, serving static page");
				return merge(content, None).ok_or_else(|| not_found(slug));
			}
		};

		merge(content, Some((record, menu.as_slice()))).ok_or_else(|| not_found(slug))
	}

	/// Slugs to pre-render: static slugs in catalog order, then slugs derived
	/// from active external names not already present.
	pub async fn page_slugs(&self) -> Vec<String> {
		let mut seen = FxHashSet::default();
		let mut slugs: Vec<String> = self.catalog.slugs().filter(|slug| seen.insert(*slug)).map(str::to_string).collect();
		if !self.live_data {
			return slugs;
		}

		let records = match self.restaurants.list_active().await {
			Ok(records) => records,
			Err(err) => {
				tracing::warn!(error = %err, "listing external restaurants failed, using static slugs");
				return slugs;
			}
		};

		let mut derived = FxHashSet::default();
		for record in records.iter().filter(|record| record.active) {
			let slug = slugify(&record.name);
			if slug.is_empty() || seen.contains(slug.as_str()) || !derived.insert(slug.clone()) {
				continue;
			}
			slugs.push(slug);
		}
		slugs
	}
}

fn not_found(slug: &str) -> LookupError {
	LookupError::NotFound { slug: slug.to_string() }
}
