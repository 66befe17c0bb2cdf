use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use super::{MenuSource, RestaurantSource, SourceError};
use crate::record::{ExternalMenuItem, ExternalRestaurant};

/// Bounds every query of the wrapped source by a client deadline.
///
/// An elapsed deadline becomes [`SourceError::Timeout`]; the in-flight query
/// is dropped.
#[derive(Debug, Clone)]
pub struct Timed<S> {
	inner: S,
	limit: Duration,
}

impl<S> Timed<S> {
	pub fn new(inner: S, limit: Duration) -> Self {
		Self { inner, limit }
	}

	pub fn limit(&self) -> Duration {
		self.limit
	}

	pub fn into_inner(self) -> S {
		self.inner
	}

	async fn bounded<T>(&self, query: impl Future<Output = Result<T, SourceError>>) -> Result<T, SourceError> {
		tokio::time::timeout(self.limit, query)
			.await
			.unwrap_or(Err(SourceError::Timeout(self.limit)))
	}
}

#[async_trait]
impl<S: RestaurantSource> RestaurantSource for Timed<S> {
	async fn find_active_by_exact_name(&self, name: &str) -> Result<Option<ExternalRestaurant>, SourceError> {
		self.bounded(self.inner.find_active_by_exact_name(name)).await
	}

	async fn find_active_by_name_contains(&self, needle: &str) -> Result<Option<ExternalRestaurant>, SourceError> {
		self.bounded(self.inner.find_active_by_name_contains(needle)).await
	}

	async fn list_active(&self) -> Result<Vec<ExternalRestaurant>, SourceError> {
		self.bounded(self.inner.list_active()).await
	}
}

#[async_trait]
impl<S: MenuSource> MenuSource for Timed<S> {
	async fn available_menu_items(&self, restaurant_id: &str) -> Result<Vec<ExternalMenuItem>, SourceError> {
		self.bounded(self.inner.available_menu_items(restaurant_id)).await
	}
}
