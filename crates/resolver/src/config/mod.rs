//! Site configuration.
//!
//! Configuration is read from TOML and then overridden from the environment.
//! Every field has a default, so an empty file (or no file) is valid:
//!
//! ```toml
//! [api]
//! base_url = "https://api.biteclubmealplan.com"
//! timeout_ms = 10000
//!
//! [app]
//! order = "https://app.biteclubmealplan.com/order"
//!
//! [features]
//! live_data = true
//!
//! [resolver]
//! fuzzy = { ranked = { min_score = 0.6 } }
//! ```
//!
//! # Environment
//!
//! | variable | field |
//! |---|---|
//! | `BITECLUB_API_URL` | `api.base_url` |
//! | `BITECLUB_API_KEY` | `api.api_key` |
//! | `BITECLUB_LIVE_DATA` | `features.live_data` (`true`/`false`/`1`/`0`) |
//! | `BITECLUB_APP_URL` | base of every `app` URL |

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resolve::FuzzyPolicy;

/// Domain every production API URL is expected to live under.
pub const PRODUCTION_DOMAIN: &str = "biteclubmealplan.com";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("I/O error reading {path}: {error}")]
	Io { path: PathBuf, error: std::io::Error },

	/// An environment override could not be parsed.
	#[error("invalid value {value:?} for {key}")]
	InvalidValue { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
	pub base_url: String,
	pub api_key: Option<String>,
	pub version: String,
	/// Client deadline for every external query, in milliseconds.
	pub timeout_ms: u64,
}

impl ApiConfig {
	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_ms)
	}
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			base_url: "https://api.biteclubmealplan.com".to_string(),
			api_key: None,
			version: "v1".to_string(),
			timeout_ms: 10_000,
		}
	}
}

/// Entry points of the ordering app the site hands users off to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppUrls {
	pub login: String,
	pub signup: String,
	pub dashboard: String,
	pub order: String,
}

impl AppUrls {
	/// App URLs rooted at `base`.
	pub fn rooted_at(base: &str) -> Self {
		let base = base.trim_end_matches('/');
		Self {
			login: format!("{base}/login"),
			signup: format!("{base}/signup"),
			dashboard: format!("{base}/dashboard"),
			order: format!("{base}/order"),
		}
	}
}

impl Default for AppUrls {
	fn default() -> Self {
		Self::rooted_at("https://app.biteclubmealplan.com")
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
	/// Query the external database. When off, pages use static content only.
	pub live_data: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
	pub fuzzy: FuzzyPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	pub api: ApiConfig,
	pub app: AppUrls,
	pub features: Features,
	pub resolver: ResolverConfig,
}

/// Non-fatal configuration problem reported by [`SiteConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	ApiUrlNotProduction(String),
	MissingApiKey,
	/// Ranked fuzzy `min_score` is NaN or outside `0.0..=1.0`, so every or no candidate passes.
	MinScoreOutOfRange(String),
}

impl fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ApiUrlNotProduction(url) => write!(f, "API URL {url} is not under {PRODUCTION_DOMAIN}"),
			Self::MissingApiKey => f.write_str("API key not configured"),
			Self::MinScoreOutOfRange(score) => write!(f, "fuzzy min_score {score} is not within 0..=1"),
		}
	}
}

impl SiteConfig {
	pub fn from_toml(text: &str) -> Result<Self> {
		Ok(toml::from_str(text)?)
	}

	pub fn load(path: &Path) -> Result<Self> {
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml(&text)
	}

	/// Applies overrides from the process environment.
	pub fn apply_env(&mut self) -> Result<()> {
		self.apply_overrides(|key| std::env::var(key).ok())
	}

	/// Applies overrides from `lookup`, which maps a variable name to its value.
	pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
		if let Some(url) = lookup("BITECLUB_API_URL") {
			self.api.base_url = url;
		}
		if let Some(key) = lookup("BITECLUB_API_KEY") {
			self.api.api_key = Some(key).filter(|k| !k.is_empty());
		}
		if let Some(flag) = lookup("BITECLUB_LIVE_DATA") {
			self.features.live_data = parse_flag("BITECLUB_LIVE_DATA", &flag)?;
		}
		if let Some(base) = lookup("BITECLUB_APP_URL") {
			self.app = AppUrls::rooted_at(&base);
		}
		Ok(())
	}

	/// Checks resolver settings, and in production the settings a deployment needs.
	pub fn validate(&self, production: bool) -> Vec<ConfigWarning> {
		let mut warnings = Vec::new();
		if let FuzzyPolicy::Ranked { min_score } = self.resolver.fuzzy
			&& !(0.0..=1.0).contains(&min_score)
		{
			warnings.push(ConfigWarning::MinScoreOutOfRange(min_score.to_string()));
		}
		if !production {
			return warnings;
		}
		if !self.api.base_url.contains(PRODUCTION_DOMAIN) {
			warnings.push(ConfigWarning::ApiUrlNotProduction(self.api.base_url.clone()));
		}
		if self.api.api_key.is_none() {
			warnings.push(ConfigWarning::MissingApiKey);
		}
		warnings
	}
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool> {
	match value.trim().to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Ok(true),
		"false" | "0" | "no" | "off" | "" => Ok(false),
		_ => Err(ConfigError::InvalidValue {
			key,
			value: value.to_string(),
		}),
	}
}
