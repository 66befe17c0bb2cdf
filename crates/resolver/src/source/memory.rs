use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{MenuSource, RestaurantSource, SourceError};
use crate::record::{ExternalMenuItem, ExternalRestaurant};

/// In-memory snapshot of the external database.
///
/// Exact and substring queries return the first qualifying record in
/// collection order. Snapshots serialize as
/// `{"restaurants": [...], "menuItems": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySource {
	#[serde(default)]
	restaurants: Vec<ExternalRestaurant>,
	#[serde(default)]
	menu_items: Vec<ExternalMenuItem>,
}

impl MemorySource {
	pub fn new(restaurants: Vec<ExternalRestaurant>, menu_items: Vec<ExternalMenuItem>) -> Self {
		Self { restaurants, menu_items }
	}

	/// Decodes a JSON snapshot.
	pub fn from_json(json: &str) -> Result<Self, SourceError> {
		serde_json::from_str(json).map_err(|e| SourceError::Malformed(e.to_string()))
	}

	/// Reads and decodes a JSON snapshot file.
	pub async fn load(path: &Path) -> Result<Self, SourceError> {
		let json = tokio::fs::read_to_string(path)
			.await
			.map_err(|e| SourceError::Transport(format!("{}: {e}", path.display())))?;
		Self::from_json(&json)
	}

	pub fn restaurants(&self) -> &[ExternalRestaurant] {
		&self.restaurants
	}

	pub fn menu_items(&self) -> &[ExternalMenuItem] {
		&self.menu_items
	}

	fn first_active(&self, pred: impl Fn(&str) -> bool) -> Option<ExternalRestaurant> {
		self.restaurants.iter().find(|r| r.active && pred(&r.name.to_lowercase())).cloned()
	}
}

#[async_trait]
impl RestaurantSource for MemorySource {
	async fn find_active_by_exact_name(&self, name: &str) -> Result<Option<ExternalRestaurant>, SourceError> {
		let name = name.to_lowercase();
		Ok(self.first_active(|candidate| candidate == name))
	}

	async fn find_active_by_name_contains(&self, needle: &str) -> Result<Option<ExternalRestaurant>, SourceError> {
		let needle = needle.to_lowercase();
		Ok(self.first_active(|candidate| candidate.contains(&needle)))
	}

	async fn list_active(&self) -> Result<Vec<ExternalRestaurant>, SourceError> {
		Ok(self.restaurants.iter().filter(|r| r.active).cloned().collect())
	}
}

#[async_trait]
impl MenuSource for MemorySource {
	async fn available_menu_items(&self, restaurant_id: &str) -> Result<Vec<ExternalMenuItem>, SourceError> {
		let mut items: Vec<_> = self
			.menu_items
			.iter()
			.filter(|item| item.available && item.restaurant_id == restaurant_id)
			.cloned()
			.collect();
		// Uncategorized items sort after categorized ones.
		items.sort_by(|a, b| {
			(a.category.is_none(), &a.category, &a.name).cmp(&(b.category.is_none(), &b.category, &b.name))
		});
		Ok(items)
	}
}
