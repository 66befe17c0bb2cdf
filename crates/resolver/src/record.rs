//! Records owned by the external restaurant database.
//!
//! Field names follow the database's camelCase JSON so snapshots and API
//! payloads deserialize without translation. This crate only ever reads them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A restaurant row in the external database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRestaurant {
	pub id: String,
	/// Free-text name; the authoritative key for matching.
	pub name: String,
	#[serde(default)]
	pub phone: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub logo_url: Option<String>,
	/// Opening hours keyed by weekday, in the order the database returned them.
	#[serde(default)]
	pub operating_hours: Option<IndexMap<String, String>>,
	#[serde(default = "default_true")]
	pub active: bool,
}

impl ExternalRestaurant {
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			phone: None,
			description: None,
			logo_url: None,
			operating_hours: None,
			active: true,
		}
	}

	#[must_use]
	pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
		self.phone = Some(phone.into());
		self
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	#[must_use]
	pub fn with_hours<I, K, V>(mut self, hours: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.operating_hours = Some(hours.into_iter().map(|(day, text)| (day.into(), text.into())).collect());
		self
	}

	#[must_use]
	pub fn inactive(mut self) -> Self {
		self.active = false;
		self
	}
}

/// A menu item row linked to an [`ExternalRestaurant`] by `restaurant_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalMenuItem {
	pub id: String,
	pub restaurant_id: String,
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
	pub price: f64,
	#[serde(default)]
	pub category: Option<String>,
	#[serde(default = "default_true")]
	pub available: bool,
}

impl ExternalMenuItem {
	pub fn new(id: impl Into<String>, restaurant_id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
		Self {
			id: id.into(),
			restaurant_id: restaurant_id.into(),
			name: name.into(),
			description: None,
			price,
			category: None,
			available: true,
		}
	}

	#[must_use]
	pub fn with_category(mut self, category: impl Into<String>) -> Self {
		self.category = Some(category.into());
		self
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	#[must_use]
	pub fn unavailable(mut self) -> Self {
		self.available = false;
		self
	}
}

const fn default_true() -> bool {
	true
}
