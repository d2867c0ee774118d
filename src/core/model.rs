// ParcelScout - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no CLI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Listing (one catalog record)
// =============================================================================

/// A single land parcel for sale, as loaded from a catalog file.
///
/// Listings are created once at catalog-load time and never mutated by
/// this core; the filter pipeline only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Stable slug identifying the listing (e.g. "cochise-40-ac-ranchette").
    pub id: String,

    /// Display title.
    pub title: String,

    /// Two-letter state code (e.g. "AZ").
    pub state: String,

    /// County name without the "County" suffix (e.g. "Cochise").
    pub county: String,

    /// Parcel category.
    pub category: ListingCategory,

    /// Parcel size in acres. Always positive (enforced at catalog load).
    pub acres: f64,

    /// Asking price in dollars. `None` for price-on-request listings;
    /// non-negative when present (enforced at catalog load).
    #[serde(default)]
    pub price: Option<f64>,

    /// Canonical feature tags (e.g. "Road Access", "Power Nearby", "No HOA").
    #[serde(default)]
    pub features: Vec<String>,

    /// Descriptive text shown on the listing page.
    #[serde(default)]
    pub description: String,

    /// Date the listing went live. Informational only; carried for export.
    #[serde(default)]
    pub listed: Option<NaiveDate>,
}

impl Listing {
    /// The haystack searched by the free-text `query` dimension:
    /// title, county, state, and category label concatenated, lower-cased.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.county,
            self.state,
            self.category.label()
        )
        .to_lowercase()
    }
}

// =============================================================================
// Listing category
// =============================================================================

/// Parcel category, a closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingCategory {
    Land,
    Farm,
    Ranch,
    Estate,
}

impl ListingCategory {
    /// Returns all variants in display order.
    pub fn all() -> &'static [ListingCategory] {
        &[
            ListingCategory::Land,
            ListingCategory::Farm,
            ListingCategory::Ranch,
            ListingCategory::Estate,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ListingCategory::Land => "Land",
            ListingCategory::Farm => "Farm",
            ListingCategory::Ranch => "Ranch",
            ListingCategory::Estate => "Estate",
        }
    }

    /// Parse a user-supplied category name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "land" => Some(ListingCategory::Land),
            "farm" => Some(ListingCategory::Farm),
            "ranch" => Some(ListingCategory::Ranch),
            "estate" => Some(ListingCategory::Estate),
            _ => None,
        }
    }
}

impl std::fmt::Display for ListingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Filter (structured search intent)
// =============================================================================

/// Structured representation of the user's current search intent.
///
/// Every field is optional; `None` means "no constraint on this dimension".
/// A Filter is a transient value: each interaction produces a fresh one via
/// [`Filter::merged`](crate::core::filter) and supersedes the previous.
///
/// The model does not enforce ordering between a lower and upper bound on
/// the same dimension; `min > max` is a legitimate filter that matches
/// nothing, never an error.
///
/// `feature` holds a single tag even though listings carry several. This is
/// a deliberate representational constraint of the query grammar; the last
/// matching keyword wins (see core::extract).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    /// Free-text substring search (case-insensitive).
    pub query: Option<String>,

    /// Two-letter state code, stored upper-cased.
    pub state: Option<String>,

    /// County name, stored title-cased.
    pub county: Option<String>,

    /// Parcel category.
    pub category: Option<ListingCategory>,

    /// Single canonical feature tag the listing must carry.
    pub feature: Option<String>,

    /// Inclusive price floor in dollars.
    pub price_min: Option<f64>,

    /// Inclusive price ceiling in dollars.
    pub price_max: Option<f64>,

    /// Inclusive acreage floor.
    pub acres_min: Option<f64>,

    /// Inclusive acreage ceiling.
    pub acres_max: Option<f64>,
}

// =============================================================================
// Catalog summary
// =============================================================================

/// Summary statistics for a loaded catalog, for the status line.
#[derive(Debug, Clone, Default)]
pub struct CatalogSummary {
    /// Total listings loaded.
    pub total_listings: usize,

    /// Listings per state code.
    pub listings_by_state: std::collections::HashMap<String, usize>,

    /// Smallest and largest acreage in the catalog (None when empty).
    pub acreage_range: Option<(f64, f64)>,
}

impl CatalogSummary {
    /// Build a summary from a loaded catalog.
    pub fn from_listings(listings: &[Listing]) -> Self {
        let mut by_state = std::collections::HashMap::new();
        let mut range: Option<(f64, f64)> = None;
        for l in listings {
            *by_state.entry(l.state.clone()).or_insert(0) += 1;
            range = Some(match range {
                None => (l.acres, l.acres),
                Some((lo, hi)) => (lo.min(l.acres), hi.max(l.acres)),
            });
        }
        Self {
            total_listings: listings.len(),
            listings_by_state: by_state,
            acreage_range: range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_text_includes_category_label() {
        let listing = Listing {
            id: "t".into(),
            title: "High Desert Retreat".into(),
            state: "AZ".into(),
            county: "Mohave".into(),
            category: ListingCategory::Ranch,
            acres: 40.0,
            price: Some(55_000.0),
            features: vec![],
            description: String::new(),
            listed: None,
        };
        let text = listing.search_text();
        assert!(text.contains("high desert retreat"));
        assert!(text.contains("mohave"));
        assert!(text.contains("az"));
        assert!(text.contains("ranch"));
    }

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!(ListingCategory::parse("FARM"), Some(ListingCategory::Farm));
        assert_eq!(ListingCategory::parse("land"), Some(ListingCategory::Land));
        assert_eq!(ListingCategory::parse("condo"), None);
    }

    #[test]
    fn test_summary_acreage_range() {
        let mk = |id: &str, acres: f64| Listing {
            id: id.into(),
            title: id.into(),
            state: "NM".into(),
            county: "Luna".into(),
            category: ListingCategory::Land,
            acres,
            price: None,
            features: vec![],
            description: String::new(),
            listed: None,
        };
        let listings = vec![mk("a", 5.0), mk("b", 120.0), mk("c", 0.5)];
        let summary = CatalogSummary::from_listings(&listings);
        assert_eq!(summary.total_listings, 3);
        assert_eq!(summary.acreage_range, Some((0.5, 120.0)));
        assert_eq!(summary.listings_by_state.get("NM"), Some(&3));
    }
}
