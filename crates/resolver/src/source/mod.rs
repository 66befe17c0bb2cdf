//! Read-only query interfaces to the external restaurant database.
//!
//! Every query returns an explicit [`SourceError`] on failure so callers can
//! branch on it rather than rely on error suppression. The resolver records
//! these failures and falls back; nothing here is retried.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::record::{ExternalMenuItem, ExternalRestaurant};

mod memory;
mod timed;

pub use memory::MemorySource;
pub use timed::Timed;

/// Failure of a single external query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
	/// The service could not be reached or refused the request.
	#[error("transport failure: {0}")]
	Transport(String),
	/// The query did not complete within the client deadline.
	#[error("query timed out after {0:?}")]
	Timeout(Duration),
	/// The service answered with a payload that could not be decoded.
	#[error("malformed response: {0}")]
	Malformed(String),
}

/// Restaurant queries. Only active records are ever returned.
#[async_trait]
pub trait RestaurantSource: Send + Sync {
	/// Active record whose name equals `name`, ignoring case.
	async fn find_active_by_exact_name(&self, name: &str) -> Result<Option<ExternalRestaurant>, SourceError>;

	/// Active record whose name contains `needle`, ignoring case.
	async fn find_active_by_name_contains(&self, needle: &str) -> Result<Option<ExternalRestaurant>, SourceError>;

	/// Every active record, in collection order.
	async fn list_active(&self) -> Result<Vec<ExternalRestaurant>, SourceError>;
}

/// Menu queries.
#[async_trait]
pub trait MenuSource: Send + Sync {
	/// Available items of one restaurant, ordered by category then name.
	async fn available_menu_items(&self, restaurant_id: &str) -> Result<Vec<ExternalMenuItem>, SourceError>;
}

#[async_trait]
impl<S: RestaurantSource + ?Sized> RestaurantSource for Arc<S> {
	async fn find_active_by_exact_name(&self, name: &str) -> Result<Option<ExternalRestaurant>, SourceError> {
		(**self).find_active_by_exact_name(name).await
	}

	async fn find_active_by_name_contains(&self, needle: &str) -> Result<Option<ExternalRestaurant>, SourceError> {
		(**self).find_active_by_name_contains(needle).await
	}

	async fn list_active(&self) -> Result<Vec<ExternalRestaurant>, SourceError> {
		(**self).list_active().await
	}
}

#[async_trait]
impl<S: MenuSource + ?Sized> MenuSource for Arc<S> {
	async fn available_menu_items(&self, restaurant_id: &str) -> Result<Vec<ExternalMenuItem>, SourceError> {
		(**self).available_menu_items(restaurant_id).await
	}
}

#[cfg(test)]
mod tests;
