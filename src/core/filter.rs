// ParcelScout - core/filter.rs
//
// Filter merging and the predicate evaluator.
// All defined filter dimensions are AND-combined.
// Core layer: pure logic, no I/O or CLI dependencies.

use crate::core::model::{Filter, Listing};

impl Filter {
    /// Returns true if no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.state.is_none()
            && self.county.is_none()
            && self.category.is_none()
            && self.feature.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.acres_min.is_none()
            && self.acres_max.is_none()
    }

    /// Merge a partial filter into this one, producing a new Filter.
    ///
    /// Field-wise overwrite: every field set in `partial` replaces the
    /// corresponding field here; unset fields keep their prior value.
    /// Idempotent -- merging the same partial twice yields the same result.
    ///
    /// No cross-field repair happens here (a state change does not clear
    /// county); field-reset rules belong to the layer issuing them, see
    /// `app::session`.
    pub fn merged(&self, partial: &Filter) -> Filter {
        Filter {
            query: partial.query.clone().or_else(|| self.query.clone()),
            state: partial.state.clone().or_else(|| self.state.clone()),
            county: partial.county.clone().or_else(|| self.county.clone()),
            category: partial.category.or(self.category),
            feature: partial.feature.clone().or_else(|| self.feature.clone()),
            price_min: partial.price_min.or(self.price_min),
            price_max: partial.price_max.or(self.price_max),
            acres_min: partial.acres_min.or(self.acres_min),
            acres_max: partial.acres_max.or(self.acres_max),
        }
    }
}

/// Apply a filter to a slice of listings, returning indices of matches.
///
/// Returns a Vec of indices into the original catalog slice, in catalog
/// order -- the evaluator filters, it never reorders. This avoids copying
/// listings and makes the filtered view cheap to rebuild per interaction.
///
/// An empty filter matches the entire catalog. A lower bound above its
/// upper bound on the same dimension cannot be satisfied by any listing,
/// so the result is empty; that is a legitimate filter, not an error.
pub fn apply_filter(listings: &[Listing], filter: &Filter) -> Vec<usize> {
    if filter.is_empty() {
        return (0..listings.len()).collect();
    }

    let query_lower = filter.query.as_deref().map(str::to_lowercase);

    listings
        .iter()
        .enumerate()
        .filter(|(_, listing)| matches_all(listing, filter, query_lower.as_deref()))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check if a single listing satisfies every defined filter dimension.
fn matches_all(listing: &Listing, filter: &Filter, query_lower: Option<&str>) -> bool {
    // Free-text query (case-insensitive substring over title/county/state/category)
    if let Some(q) = query_lower {
        if !q.is_empty() && !listing.search_text().contains(q) {
            return false;
        }
    }

    // State (case-insensitive equality)
    if let Some(ref state) = filter.state {
        if !listing.state.eq_ignore_ascii_case(state) {
            return false;
        }
    }

    // County (case-insensitive equality)
    if let Some(ref county) = filter.county {
        if !listing.county.eq_ignore_ascii_case(county) {
            return false;
        }
    }

    // Category (closed enum, direct equality)
    if let Some(category) = filter.category {
        if listing.category != category {
            return false;
        }
    }

    // Feature tag (set membership in the listing's tags)
    if let Some(ref feature) = filter.feature {
        if !listing.features.iter().any(|tag| tag == feature) {
            return false;
        }
    }

    // Price bounds (inclusive). Listings without a price are excluded by
    // any price bound.
    if let Some(min) = filter.price_min {
        match listing.price {
            Some(p) if p < min => return false,
            None => return false,
            _ => {}
        }
    }
    if let Some(max) = filter.price_max {
        match listing.price {
            Some(p) if p > max => return false,
            None => return false,
            _ => {}
        }
    }

    // Acreage bounds (inclusive)
    if let Some(min) = filter.acres_min {
        if listing.acres < min {
            return false;
        }
    }
    if let Some(max) = filter.acres_max {
        if listing.acres > max {
            return false;
        }
    }

    true
}
