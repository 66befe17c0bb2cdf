//! Hand-off links from the marketing site into the ordering app.

use url::Url;

use crate::config::AppUrls;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
	#[error("invalid {field} URL {value:?}: {source}")]
	Invalid {
		field: &'static str,
		value: String,
		#[source]
		source: url::ParseError,
	},
	/// The URL parsed but cannot carry a path, e.g. `mailto:`.
	#[error("{field} URL {value:?} cannot be used as a base")]
	NotABase { field: &'static str, value: String },
}

/// Parsed app entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLinks {
	login: Url,
	signup: Url,
	dashboard: Url,
	order: Url,
}

impl AppLinks {
	pub fn new(urls: &AppUrls) -> Result<Self, LinkError> {
		Ok(Self {
			login: parse("login", &urls.login)?,
			signup: parse("signup", &urls.signup)?,
			dashboard: parse("dashboard", &urls.dashboard)?,
			order: parse("order", &urls.order)?,
		})
	}

	/// Login page, returning the user to `redirect` afterwards.
	pub fn login(&self, redirect: Option<&str>) -> Url {
		let mut url = self.login.clone();
		if let Some(redirect) = redirect {
			url.query_pairs_mut().append_pair("redirect", redirect);
		}
		url
	}

	/// Signup page tagged with the referring `source` and site UTM parameters.
	pub fn signup(&self, source: Option<&str>) -> Url {
		let mut url = self.signup.clone();
		{
			let mut query = url.query_pairs_mut();
			if let Some(source) = source {
				query.append_pair("source", source);
			}
			query.append_pair("utm_source", "marketing_site").append_pair("utm_medium", "website");
		}
		url
	}

	pub fn dashboard(&self) -> &Url {
		&self.dashboard
	}

	/// Ordering page of one restaurant, `{order}/restaurants/{slug}`.
	pub fn restaurant_order(&self, slug: &str) -> Url {
		let mut url = self.order.clone();
		if let Ok(mut segments) = url.path_segments_mut() {
			segments.pop_if_empty().push("restaurants").push(slug);
		}
		url
	}
}

fn parse(field: &'static str, value: &str) -> Result<Url, LinkError> {
	let url = Url::parse(value).map_err(|source| LinkError::Invalid {
		field,
		value: value.to_string(),
		source,
	})?;
	if url.cannot_be_a_base() {
		return Err(LinkError::NotABase {
			field,
			value: value.to_string(),
		});
	}
	Ok(url)
}
