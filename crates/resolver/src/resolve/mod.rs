//! Tiered slug to external-record resolution.
//!
//! # Tiers
//!
//! 1. **Exact**: active record named exactly the expected name, ignoring case.
//! 2. **Substring**: active record whose name contains the expected name.
//! 3. **Fuzzy**: one full listing of active records, scanned in memory with
//!    [`similar`](crate::similarity::similar).
//!
//! The expected name comes from the alias table, or the slug with hyphens
//! turned into spaces. The first tier that hits wins, so at most three
//! queries are issued per slug and each later tier is more expensive than
//! the one before it.
//!
//! # Failures
//!
//! A failed query is recorded as a [`AttemptOutcome::Failed`] attempt and
//! the next tier runs as if the query had missed. Resolution itself never
//! fails; callers fall back to static content on [`Resolution::is_not_found`].

use std::borrow::Cow;

use biteclub_catalog::AliasTable;
use serde::{Deserialize, Serialize};

use crate::record::ExternalRestaurant;
use crate::similarity;
use crate::source::{RestaurantSource, SourceError};

/// One of the three matching strategies, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
	Exact,
	Substring,
	Fuzzy,
}

impl Tier {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Exact => "exact",
			Self::Substring => "substring",
			Self::Fuzzy => "fuzzy",
		}
	}
}

/// Candidate selection of the fuzzy tier.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FuzzyPolicy {
	/// First similar record in collection order.
	///
	/// This does not prefer the closest candidate: a short name like
	/// `"Moms"` listed before `"Moms Original"` wins for `"Mom's OG"`.
	#[default]
	FirstMatch,
	/// Highest [`similarity::score`] among similar records, discarded below
	/// `min_score`. Ties keep collection order.
	Ranked { min_score: f64 },
}

/// Result of one tier.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
	Hit,
	Miss,
	Failed(SourceError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
	pub tier: Tier,
	pub outcome: AttemptOutcome,
}

/// Outcome of resolving one slug.
///
/// Either a matched record with the tier that produced it, or not found.
/// The attempts are kept in both cases so transport failures stay
/// distinguishable from plain misses.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
	expected_name: String,
	matched: Option<(Tier, ExternalRestaurant)>,
	attempts: Vec<Attempt>,
}

impl Resolution {
	fn new(expected_name: String) -> Self {
		Self {
			expected_name,
			matched: None,
			attempts: Vec::with_capacity(3),
		}
	}

	/// Name the tiers searched for.
	pub fn expected_name(&self) -> &str {
		&self.expected_name
	}

	pub fn record(&self) -> Option<&ExternalRestaurant> {
		self.matched.as_ref().map(|(_, record)| record)
	}

	pub fn into_record(self) -> Option<ExternalRestaurant> {
		self.matched.map(|(_, record)| record)
	}

	/// Tier that produced the match.
	pub fn tier(&self) -> Option<Tier> {
		self.matched.as_ref().map(|(tier, _)| *tier)
	}

	pub fn is_not_found(&self) -> bool {
		self.matched.is_none()
	}

	pub fn attempts(&self) -> &[Attempt] {
		&self.attempts
	}

	/// Query failures absorbed while resolving.
	pub fn failures(&self) -> impl Iterator<Item = (Tier, &SourceError)> {
		self.attempts.iter().filter_map(|attempt| match &attempt.outcome {
			AttemptOutcome::Failed(err) => Some((attempt.tier, err)),
			_ => None,
		})
	}

	fn record_attempt(&mut self, tier: Tier, found: Result<Option<ExternalRestaurant>, SourceError>) -> bool {
		let outcome = match found {
			Ok(Some(record)) if record.active => {
				tracing::debug!(expected = %self.expected_name, tier = tier.as_str(), id = %record.id, "restaurant resolved");
				self.matched = Some((tier, record));
				AttemptOutcome::Hit
			}
			Ok(_) => {
				tracing::debug!(expected = %self.expected_name, tier = tier.as_str(), "no match");
				AttemptOutcome::Miss
			}
			Err(err) => {
				tracing::warn!(expected = %self.expected_name, tier = tier.as_str(), error = %err, "restaurant query failed, falling back");
				AttemptOutcome::Failed(err)
			}
		};
		let hit = outcome == AttemptOutcome::Hit;
		self.attempts.push(Attempt { tier, outcome });
		hit
	}
}

/// Resolves page slugs against a [`RestaurantSource`].
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
	source: &'a dyn RestaurantSource,
	aliases: &'a AliasTable,
	fuzzy: FuzzyPolicy,
}

impl<'a> Resolver<'a> {
	pub fn new(source: &'a dyn RestaurantSource, aliases: &'a AliasTable) -> Self {
		Self {
			source,
			aliases,
			fuzzy: FuzzyPolicy::default(),
		}
	}

	#[must_use]
	pub fn fuzzy(mut self, policy: FuzzyPolicy) -> Self {
		self.fuzzy = policy;
		self
	}

	/// Aliased name for `slug`, or the slug with hyphens replaced by spaces.
	pub fn expected_name<'s>(&self, slug: &'s str) -> Cow<'s, str> {
		self.aliases.expected_name(slug)
	}

	/// Runs the tiers for `slug`, stopping at the first hit.
	///
	/// Empty or whitespace-only slugs resolve to not found without querying.
	pub async fn resolve(&self, slug: &str) -> Resolution {
		if slug.trim().is_empty() {
			return Resolution::new(String::new());
		}

		let mut resolution = Resolution::new(self.expected_name(slug).into_owned());
		let expected = resolution.expected_name.clone();

		let exact = self.source.find_active_by_exact_name(&expected).await;
		if resolution.record_attempt(Tier::Exact, exact) {
			return resolution;
		}

		let substring = self.source.find_active_by_name_contains(&expected).await;
		if resolution.record_attempt(Tier::Substring, substring) {
			return resolution;
		}

		let fuzzy = self.source.list_active().await.map(|records| self.pick_fuzzy(&expected, records));
		resolution.record_attempt(Tier::Fuzzy, fuzzy);
		resolution
	}

	fn pick_fuzzy(&self, expected: &str, records: Vec<ExternalRestaurant>) -> Option<ExternalRestaurant> {
		let mut candidates = records
			.into_iter()
			.filter(|record| record.active && similarity::similar(expected, &record.name));

		match self.fuzzy {
			FuzzyPolicy::FirstMatch => candidates.next(),
			FuzzyPolicy::Ranked { min_score } => {
				let mut best: Option<(f64, ExternalRestaurant)> = None;
				for record in candidates {
					let score = similarity::score(expected, &record.name);
					if score >= min_score && best.as_ref().is_none_or(|(top, _)| score > *top) {
						best = Some((score, record));
					}
				}
				best.map(|(_, record)| record)
			}
		}
	}
}
