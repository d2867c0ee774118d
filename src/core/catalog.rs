// ParcelScout - core/catalog.rs
//
// Catalog parsing and validation.
// Core layer: accepts JSON strings, never touches the filesystem.
// I/O is handled by the caller (CLI / app layer) which feeds content here.

use crate::core::model::Listing;
use crate::util::constants;
use crate::util::error::CatalogError;
use std::collections::HashSet;

/// Built-in seed catalog, embedded so the binary works with no external
/// files. Replaced entirely when the user supplies their own catalog.
const SEED_CATALOG_JSON: &str = include_str!("../../assets/seed_catalog.json");

/// Parse and validate a catalog from a JSON array of listings.
///
/// `origin` names the source for error messages (a file path, or "seed").
/// Validation rules:
///   - id and title must be non-empty
///   - ids must be unique across the catalog
///   - acres must be positive
///   - price, when present, must be non-negative and finite
///   - at most MAX_CATALOG_SIZE listings
pub fn parse_catalog(json: &str, origin: &str) -> Result<Vec<Listing>, CatalogError> {
    let listings: Vec<Listing> =
        serde_json::from_str(json).map_err(|e| CatalogError::JsonParse {
            origin: origin.to_string(),
            source: e,
        })?;

    if listings.len() > constants::MAX_CATALOG_SIZE {
        return Err(CatalogError::TooManyListings {
            count: listings.len(),
            max: constants::MAX_CATALOG_SIZE,
        });
    }

    let mut seen_ids: HashSet<&str> = HashSet::with_capacity(listings.len());
    for listing in &listings {
        if listing.id.trim().is_empty() {
            return Err(CatalogError::MissingField {
                listing_id: listing.title.clone(),
                field: "id",
            });
        }
        if listing.title.trim().is_empty() {
            return Err(CatalogError::MissingField {
                listing_id: listing.id.clone(),
                field: "title",
            });
        }
        if !seen_ids.insert(&listing.id) {
            return Err(CatalogError::DuplicateId {
                id: listing.id.clone(),
            });
        }
        if listing.acres <= 0.0 || !listing.acres.is_finite() {
            return Err(CatalogError::InvalidAcreage {
                listing_id: listing.id.clone(),
                acres: listing.acres,
            });
        }
        if let Some(price) = listing.price {
            if price < 0.0 || !price.is_finite() {
                return Err(CatalogError::InvalidPrice {
                    listing_id: listing.id.clone(),
                    price,
                });
            }
        }
    }

    tracing::debug!(origin, listings = listings.len(), "Catalog loaded");
    Ok(listings)
}

/// Load the built-in seed catalog.
///
/// The embedded JSON is validated by the unit tests below, so failure here
/// is a build defect; the error is still propagated rather than unwrapped.
pub fn load_seed_catalog() -> Result<Vec<Listing>, CatalogError> {
    parse_catalog(SEED_CATALOG_JSON, "seed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_parses_and_validates() {
        let listings = load_seed_catalog().expect("embedded seed catalog must be valid");
        assert!(!listings.is_empty());
        // Every supported state is represented in the seed data.
        for state in crate::util::constants::SUPPORTED_STATES {
            assert!(
                listings.iter().any(|l| l.state == *state),
                "seed catalog missing state {state}"
            );
        }
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"[
            {"id": "x", "title": "A", "state": "AZ", "county": "Pima", "category": "land", "acres": 1.0},
            {"id": "x", "title": "B", "state": "AZ", "county": "Pima", "category": "land", "acres": 2.0}
        ]"#;
        let result = parse_catalog(json, "test");
        assert!(
            matches!(result, Err(CatalogError::DuplicateId { ref id }) if id == "x"),
            "expected DuplicateId, got {result:?}"
        );
    }

    #[test]
    fn test_rejects_oversized_catalog() {
        let count = constants::MAX_CATALOG_SIZE + 1;
        let entries: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"id": "lot-{i}", "title": "Lot {i}", "state": "AZ", "county": "Pima", "category": "land", "acres": 1.0}}"#
                )
            })
            .collect();
        let json = format!("[{}]", entries.join(","));
        let result = parse_catalog(&json, "test");
        assert!(
            matches!(
                result,
                Err(CatalogError::TooManyListings { count: c, max })
                    if c == count && max == constants::MAX_CATALOG_SIZE
            ),
            "expected TooManyListings, got {result:?}"
        );
    }

    #[test]
    fn test_rejects_non_positive_acreage() {
        let json = r#"[
            {"id": "x", "title": "A", "state": "NM", "county": "Luna", "category": "land", "acres": 0.0}
        ]"#;
        assert!(matches!(
            parse_catalog(json, "test"),
            Err(CatalogError::InvalidAcreage { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_price() {
        let json = r#"[
            {"id": "x", "title": "A", "state": "NM", "county": "Luna", "category": "land", "acres": 5.0, "price": -1.0}
        ]"#;
        assert!(matches!(
            parse_catalog(json, "test"),
            Err(CatalogError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_id() {
        let json = r#"[
            {"id": "  ", "title": "A", "state": "TX", "county": "Brewster", "category": "land", "acres": 5.0}
        ]"#;
        assert!(matches!(
            parse_catalog(json, "test"),
            Err(CatalogError::MissingField { field: "id", .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            parse_catalog("not json", "test"),
            Err(CatalogError::JsonParse { .. })
        ));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"[
            {"id": "bare", "title": "Bare", "state": "OK", "county": "Pushmataha", "category": "land", "acres": 3.0}
        ]"#;
        let listings = parse_catalog(json, "test").unwrap();
        assert_eq!(listings[0].price, None);
        assert!(listings[0].features.is_empty());
        assert_eq!(listings[0].listed, None);
    }
}
