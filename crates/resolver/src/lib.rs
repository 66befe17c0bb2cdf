//! Restaurant identity resolution for the Bite Club site.
//!
//! Restaurant pages are authored statically in [`biteclub_catalog`] and keyed
//! by slug, while live menus, hours and contact details live in an external
//! database keyed by free-text name. This crate bridges the two:
//!
//! * [`resolve`] maps a slug to an external record through exact, substring
//!   and fuzzy name matching.
//! * [`merge`] combines the static page with the matched record.
//! * [`lookup`] runs both for page rendering and enumerates page slugs.
//!
//! External queries go through the [`source`] traits and may fail; those
//! failures degrade to static content and never reach the caller.

pub mod config;
pub mod links;
pub mod lookup;
pub mod merge;
pub mod record;
pub mod resolve;
pub mod similarity;
pub mod source;

pub use config::SiteConfig;
pub use links::AppLinks;
pub use lookup::{LookupError, RestaurantLookup};
pub use merge::{DEFAULT_PROJECTION, Origin, ResolvedRestaurant, merge};
pub use record::{ExternalMenuItem, ExternalRestaurant};
pub use resolve::{FuzzyPolicy, Resolution, Resolver, Tier};
pub use similarity::similar;
pub use source::{MemorySource, MenuSource, RestaurantSource, SourceError, Timed};
