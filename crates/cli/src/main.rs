//! Bite Club restaurant tool.
//!
//! Resolves restaurant pages against a JSON snapshot of the external
//! database, browses the static directory, enumerates page slugs, and prints
//! app hand-off links. Without `--snapshot` every command works from static
//! content alone.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use biteclub_catalog::{CATALOG, DirectoryQuery, RestaurantDef, SortOrder};
use biteclub_resolver::{AppLinks, MemorySource, RestaurantLookup, SiteConfig, Timed};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "biteclub")]
#[command(about = "Bite Club restaurant pages and identity resolution")]
struct Args {
	/// Site configuration file (TOML)
	#[arg(short, long, value_name = "PATH", global = true)]
	config: Option<PathBuf>,

	/// JSON snapshot of the external database; enables live data
	#[arg(short, long, value_name = "PATH", global = true)]
	snapshot: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Resolve a page slug and print the restaurant as JSON
	Resolve {
		/// Page slug, e.g. `moms-og`
		slug: String,
	},
	/// List directory restaurants
	List {
		/// Text matched against name and description
		#[arg(long, default_value = "")]
		search: String,
		/// Cuisine tag to keep
		#[arg(long)]
		cuisine: Option<String>,
		#[arg(long, value_enum, default_value_t = Sort::Distance)]
		sort: Sort,
		/// Only restaurants within this many miles of campus
		#[arg(long, value_name = "MILES", num_args = 0..=1, default_missing_value = "1.0")]
		near: Option<f64>,
	},
	/// Print every page slug to pre-render
	Slugs,
	/// Print app hand-off links
	Links {
		/// Restaurant to build an order link for
		#[arg(long)]
		slug: Option<String>,
		/// Path to return to after login
		#[arg(long)]
		redirect: Option<String>,
		/// Signup source tag
		#[arg(long)]
		source: Option<String>,
	},
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Sort {
	Distance,
	Rating,
	Name,
}

impl From<Sort> for SortOrder {
	fn from(sort: Sort) -> Self {
		match sort {
			Sort::Distance => SortOrder::Distance,
			Sort::Rating => SortOrder::Rating,
			Sort::Name => SortOrder::Name,
		}
	}
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	let config = load_config(args.config.as_deref())?;

	match args.command {
		Command::Resolve { slug } => {
			let lookup = build_lookup(&config, args.snapshot.as_deref()).await?;
			let (resolution, restaurant) = lookup.lookup_resolved(&slug).await;
			if let Some(resolution) = resolution {
				info!(
					slug = %slug,
					expected = resolution.expected_name(),
					tier = ?resolution.tier(),
					failures = resolution.failures().count(),
					"resolution finished"
				);
			}
			let restaurant = restaurant?;
			println!("{}", serde_json::to_string_pretty(&restaurant)?);
		}
		Command::List {
			search,
			cuisine,
			sort,
			near,
		} => {
			let mut query = DirectoryQuery::default().search(&search).sort(sort.into());
			if let Some(tag) = cuisine.as_deref() {
				query = query.cuisine(tag);
			}
			for def in directory(&query, near) {
				println!(
					"{:<24} {:<28} {:>4.1} {:<4} {}",
					def.slug,
					def.name,
					def.rating,
					def.price_range.as_str(),
					def.distance_from_campus
				);
			}
		}
		Command::Slugs => {
			let lookup = build_lookup(&config, args.snapshot.as_deref()).await?;
			for slug in lookup.page_slugs().await {
				println!("{slug}");
			}
		}
		Command::Links { slug, redirect, source } => {
			let links = AppLinks::new(&config.app)?;
			println!("login      {}", links.login(redirect.as_deref()));
			println!("signup     {}", links.signup(source.as_deref()));
			println!("dashboard  {}", links.dashboard());
			if let Some(slug) = slug {
				println!("order      {}", links.restaurant_order(&slug));
			}
		}
	}

	Ok(())
}

/// Directory results, limited to `near` miles of campus when given.
fn directory(query: &DirectoryQuery<'_>, near: Option<f64>) -> Vec<&'static RestaurantDef> {
	let mut hits = CATALOG.query(query);
	if let Some(max) = near {
		hits.retain(|def| def.distance_miles().is_some_and(|miles| miles <= max));
	}
	hits
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig, Box<dyn std::error::Error>> {
	let mut config = match path {
		Some(path) => SiteConfig::load(path)?,
		None => SiteConfig::default(),
	};
	config.apply_env()?;
	for warning in config.validate(config.features.live_data) {
		warn!(%warning, "configuration");
	}
	Ok(config)
}

async fn build_lookup(config: &SiteConfig, snapshot: Option<&Path>) -> Result<RestaurantLookup, Box<dyn std::error::Error>> {
	let Some(path) = snapshot else {
		if config.features.live_data {
			warn!("live data enabled but no snapshot given, serving static pages");
		}
		let empty = Arc::new(MemorySource::default());
		return Ok(RestaurantLookup::new(empty.clone(), empty).configure(config).live_data(false));
	};

	let source = MemorySource::load(path).await?;
	info!(
		path = %path.display(),
		restaurants = source.restaurants().len(),
		menu_items = source.menu_items().len(),
		"snapshot loaded"
	);
	let source = Arc::new(Timed::new(source, config.api.timeout()));
	Ok(RestaurantLookup::new(source.clone(), source).configure(config).live_data(true))
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("biteclub_resolver=debug,biteclub=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(verbose).init();
}

#[cfg(test)]
mod tests {
	use biteclub_catalog::DEFAULT_CAMPUS_RADIUS_MILES;
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn args_are_consistent() {
		Args::command().debug_assert();
	}

	#[test]
	fn global_flags_follow_subcommand() {
		let args = Args::parse_from(["biteclub", "resolve", "moms-og", "--snapshot", "db.json", "-v"]);
		assert!(args.verbose);
		assert_eq!(args.snapshot.as_deref(), Some(Path::new("db.json")));
		assert!(matches!(args.command, Command::Resolve { slug } if slug == "moms-og"));
	}

	#[test]
	fn list_defaults_to_distance_without_radius() {
		let args = Args::parse_from(["biteclub", "list"]);
		let Command::List { sort, near, search, cuisine } = args.command else {
			panic!("expected list");
		};
		assert_eq!(sort, Sort::Distance);
		assert_eq!(near, None);
		assert!(search.is_empty() && cuisine.is_none());

		let args = Args::parse_from(["biteclub", "list", "--sort", "rating", "--near"]);
		let Command::List { sort, near, .. } = args.command else {
			panic!("expected list");
		};
		assert_eq!(sort, Sort::Rating);
		assert_eq!(near, Some(DEFAULT_CAMPUS_RADIUS_MILES));
	}

	#[test]
	fn radius_is_applied_as_given() {
		let query = DirectoryQuery::default();
		assert!(directory(&query, Some(0.0)).is_empty());
		assert!(directory(&query, Some(-1.0)).is_empty());

		let args = Args::parse_from(["biteclub", "list", "--near", "0"]);
		assert!(matches!(args.command, Command::List { near: Some(miles), .. } if miles == 0.0));

		let slugs: Vec<_> = directory(&query, Some(0.3)).iter().map(|def| def.slug).collect();
		assert_eq!(slugs, ["moms-og", "gumbys-pizza", "chicken-salad-chick"]);
		assert_eq!(directory(&query, None).len(), CATALOG.len());
	}
}
