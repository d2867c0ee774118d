// ParcelScout - main.rs
//
// CLI entry point. Handles:
// 1. Argument parsing
// 2. Config and logging initialisation (debug mode support)
// 3. Catalog loading (seed or user file)
// 4. One search interaction: query sentence + manual filter flags

use clap::Parser;
use parcelscout::app::session::Session;
use parcelscout::core::catalog;
use parcelscout::core::export;
use parcelscout::core::model::{CatalogSummary, Listing, ListingCategory};
use parcelscout::platform::config::{self, PlatformPaths};
use parcelscout::util::constants;
use parcelscout::util::error::{CatalogError, ParcelScoutError, Result};
use parcelscout::util::logging;
use std::path::{Path, PathBuf};

/// Find land parcels from a plain-English sentence.
#[derive(Parser, Debug)]
#[command(name = "parcelscout", version = constants::APP_VERSION, about)]
struct Cli {
    /// Query sentence, e.g. 20-50 acres in AZ under 100k with road access
    query: Vec<String>,

    /// Catalog JSON file (defaults to config, then the built-in seed catalog)
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Filter: two-letter state code
    #[arg(long, value_name = "CODE")]
    state: Option<String>,

    /// Filter: county name
    #[arg(long, value_name = "NAME")]
    county: Option<String>,

    /// Filter: category (land, farm, ranch, estate)
    #[arg(long, value_parser = parse_category)]
    category: Option<ListingCategory>,

    /// Filter: required feature tag, e.g. "Road Access"
    #[arg(long, value_name = "TAG")]
    feature: Option<String>,

    /// Filter: minimum acreage (inclusive)
    #[arg(long, value_name = "N")]
    min_acres: Option<f64>,

    /// Filter: maximum acreage (inclusive)
    #[arg(long, value_name = "N")]
    max_acres: Option<f64>,

    /// Filter: minimum price in dollars (inclusive)
    #[arg(long, value_name = "N")]
    min_price: Option<f64>,

    /// Filter: maximum price in dollars (inclusive)
    #[arg(long, value_name = "N")]
    max_price: Option<f64>,

    /// Write matching listings to a CSV file
    #[arg(long, value_name = "PATH")]
    export_csv: Option<PathBuf>,

    /// Write matching listings to a JSON file
    #[arg(long, value_name = "PATH")]
    export_json: Option<PathBuf>,

    /// Print only the match count
    #[arg(long)]
    count_only: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(long)]
    debug: bool,
}

fn parse_category(s: &str) -> std::result::Result<ListingCategory, String> {
    ListingCategory::parse(s).ok_or_else(|| {
        format!(
            "unknown category '{s}', expected one of: {}",
            ListingCategory::all()
                .iter()
                .map(|c| c.label().to_lowercase())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            std::process::ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = PlatformPaths::resolve();
    let app_config = config::load_config(&paths.config_file())?;

    logging::init(cli.debug, app_config.logging.level.as_deref());

    // Catalog source precedence: --catalog flag > config path > embedded seed.
    // A --catalog flag resolves from the working directory; a config path
    // resolves from the platform data directory.
    let catalog_path = cli.catalog.clone().or_else(|| {
        app_config
            .catalog
            .path
            .as_deref()
            .map(|p| paths.resolve_catalog_path(p))
    });
    let listings = match catalog_path {
        Some(ref path) => load_catalog_file(path)?,
        None => catalog::load_seed_catalog()?,
    };

    let mut session = Session::new(listings);

    // Text path first: the query sentence merges into the (empty) filter.
    let sentence = cli.query.join(" ");
    if !sentence.trim().is_empty() {
        session.submit_text(&sentence);
    }

    // Manual flags behave like the form controls: each one replaces its
    // dimension. State before county, so an explicit --county survives the
    // county reset that a state change performs.
    if cli.state.is_some() {
        session.set_state(cli.state.as_ref().map(|s| s.to_uppercase()));
    }
    if cli.county.is_some() {
        session.set_county(cli.county.clone());
    }
    if cli.category.is_some() {
        session.set_category(cli.category);
    }
    if cli.feature.is_some() {
        session.set_feature(cli.feature.clone());
    }
    if cli.min_price.is_some() || cli.max_price.is_some() {
        let (min, max) = {
            let active = session.active_filter();
            (
                cli.min_price.or(active.price_min),
                cli.max_price.or(active.price_max),
            )
        };
        session.set_price_range(min, max);
    }
    if cli.min_acres.is_some() || cli.max_acres.is_some() {
        let (min, max) = {
            let active = session.active_filter();
            (
                cli.min_acres.or(active.acres_min),
                cli.max_acres.or(active.acres_max),
            )
        };
        session.set_acre_range(min, max);
    }

    let matches: Vec<Listing> = session.matches().cloned().collect();

    if cli.count_only {
        println!("{}", matches.len());
    } else {
        print_matches(&matches, &session.catalog_summary());
    }

    if let Some(ref path) = cli.export_csv {
        let file = std::fs::File::create(path).map_err(|e| ParcelScoutError::Io {
            path: path.clone(),
            operation: "create export file",
            source: e,
        })?;
        let written = export::export_csv(&matches, file, path, app_config.export.max_entries)?;
        eprintln!("wrote {written} listings to {}", path.display());
    }
    if let Some(ref path) = cli.export_json {
        let file = std::fs::File::create(path).map_err(|e| ParcelScoutError::Io {
            path: path.clone(),
            operation: "create export file",
            source: e,
        })?;
        let written = export::export_json(&matches, file, path, app_config.export.max_entries)?;
        eprintln!("wrote {written} listings to {}", path.display());
    }

    Ok(())
}

fn load_catalog_file(path: &Path) -> Result<Vec<Listing>> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(catalog::parse_catalog(
        &content,
        &path.display().to_string(),
    )?)
}

fn print_matches(matches: &[Listing], summary: &CatalogSummary) {
    for listing in matches {
        let price = listing
            .price
            .map(|p| format!("${p:.0}"))
            .unwrap_or_else(|| "price on request".to_string());
        let features = if listing.features.is_empty() {
            String::new()
        } else {
            format!("  [{}]", listing.features.join(", "))
        };
        println!(
            "{:<28} {:>7.1} ac  {:>16}  {}, {} {}{}",
            listing.id, listing.acres, price, listing.county, listing.state, listing.title, features
        );
    }
    let coverage = match summary.acreage_range {
        Some((lo, hi)) => format!(
            " ({} states, {lo}-{hi} acres in catalog)",
            summary.listings_by_state.len()
        ),
        None => String::new(),
    };
    println!(
        "{} of {} listings match{coverage}",
        matches.len(),
        summary.total_listings
    );
}
