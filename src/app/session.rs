// ParcelScout - app/session.rs
//
// Search session: the active Filter threaded across interactions, the
// catalog it runs against, and the memoized filtered view.
//
// Each interaction produces a fresh Filter value that supersedes the
// previous one; nothing here mutates a Filter in place.

use crate::core::extract::extract;
use crate::core::filter::apply_filter;
use crate::core::model::{CatalogSummary, Filter, Listing};

/// One user's search session against a loaded catalog.
#[derive(Debug)]
pub struct Session {
    /// The listing catalog, read-only after load.
    catalog: Vec<Listing>,

    /// Bumped whenever the catalog is replaced; part of the memo key.
    catalog_generation: u64,

    /// The user's current search intent.
    active: Filter,

    /// Indices into `catalog` matching `active`, in catalog order.
    matched: Vec<usize>,

    /// The (filter, catalog generation) pair `matched` was computed for.
    /// Re-evaluation is skipped when the key is structurally unchanged;
    /// this is an optimisation only -- evaluation is deterministic either way.
    memo_key: Option<(Filter, u64)>,
}

impl Session {
    /// Start a session with an empty filter; every listing matches.
    pub fn new(catalog: Vec<Listing>) -> Self {
        let mut session = Self {
            catalog,
            catalog_generation: 0,
            active: Filter::default(),
            matched: Vec::new(),
            memo_key: None,
        };
        session.reevaluate();
        session
    }

    /// Submit a free-text query sentence.
    ///
    /// Extracts a partial filter from the text, merges it into the active
    /// filter, and re-evaluates. Unrecognised text extracts nothing and
    /// leaves the active filter unchanged. Returns the match count.
    ///
    /// Unlike [`set_state`](Self::set_state), a state change arriving via
    /// text does NOT clear the county -- the merge performs no cross-field
    /// repair.
    pub fn submit_text(&mut self, text: &str) -> usize {
        let partial = extract(text);
        self.active = self.active.merged(&partial);
        self.reevaluate();
        self.matched.len()
    }

    // -------------------------------------------------------------------
    // Manual controls (the form-control path)
    // -------------------------------------------------------------------

    /// Set or clear the state code.
    ///
    /// Selecting a different state also clears the county, since county
    /// choices are state-scoped in the manual controls. This reset applies
    /// only here: the text-extraction path deliberately leaves county
    /// untouched when it changes state.
    pub fn set_state(&mut self, state: Option<String>) {
        if self.active.state != state {
            self.active = Filter {
                state,
                county: None,
                ..self.active.clone()
            };
            self.reevaluate();
        }
    }

    /// Set or clear the county name.
    pub fn set_county(&mut self, county: Option<String>) {
        self.active = Filter {
            county,
            ..self.active.clone()
        };
        self.reevaluate();
    }

    /// Set or clear the category.
    pub fn set_category(&mut self, category: Option<crate::core::model::ListingCategory>) {
        self.active = Filter {
            category,
            ..self.active.clone()
        };
        self.reevaluate();
    }

    /// Set or clear the feature tag.
    pub fn set_feature(&mut self, feature: Option<String>) {
        self.active = Filter {
            feature,
            ..self.active.clone()
        };
        self.reevaluate();
    }

    /// Set or clear the free-text query string.
    pub fn set_query(&mut self, query: Option<String>) {
        self.active = Filter {
            query,
            ..self.active.clone()
        };
        self.reevaluate();
    }

    /// Set or clear the price bounds.
    pub fn set_price_range(&mut self, price_min: Option<f64>, price_max: Option<f64>) {
        self.active = Filter {
            price_min,
            price_max,
            ..self.active.clone()
        };
        self.reevaluate();
    }

    /// Set or clear the acreage bounds.
    pub fn set_acre_range(&mut self, acres_min: Option<f64>, acres_max: Option<f64>) {
        self.active = Filter {
            acres_min,
            acres_max,
            ..self.active.clone()
        };
        self.reevaluate();
    }

    /// Reset every dimension; all listings match again.
    pub fn clear_filter(&mut self) {
        self.active = Filter::default();
        self.reevaluate();
    }

    /// Replace the catalog, keeping the active filter.
    pub fn replace_catalog(&mut self, catalog: Vec<Listing>) {
        self.catalog = catalog;
        self.catalog_generation += 1;
        self.reevaluate();
    }

    // -------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------

    /// The active filter.
    pub fn active_filter(&self) -> &Filter {
        &self.active
    }

    /// Matching listings in catalog order.
    pub fn matches(&self) -> impl Iterator<Item = &Listing> {
        self.matched.iter().map(|&idx| &self.catalog[idx])
    }

    /// Number of matching listings.
    pub fn match_count(&self) -> usize {
        self.matched.len()
    }

    /// Total catalog size.
    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    /// Summary statistics for the loaded catalog.
    pub fn catalog_summary(&self) -> CatalogSummary {
        CatalogSummary::from_listings(&self.catalog)
    }

    /// Recompute the filtered view unless the (filter, catalog) pair is
    /// unchanged since the last evaluation.
    fn reevaluate(&mut self) {
        let key = (self.active.clone(), self.catalog_generation);
        if self.memo_key.as_ref() == Some(&key) {
            tracing::trace!("Filter and catalog unchanged, keeping memoized result");
            return;
        }
        self.matched = apply_filter(&self.catalog, &self.active);
        self.memo_key = Some(key);
        tracing::debug!(
            matches = self.matched.len(),
            catalog = self.catalog.len(),
            "Filter re-evaluated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::ListingCategory;

    fn make_listing(id: &str, state: &str, county: &str, acres: f64, price: f64) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("{acres} acres near {county}"),
            state: state.to_string(),
            county: county.to_string(),
            category: ListingCategory::Land,
            acres,
            price: Some(price),
            features: vec!["Road Access".to_string()],
            description: String::new(),
            listed: None,
        }
    }

    fn session() -> Session {
        Session::new(vec![
            make_listing("a", "AZ", "Cochise", 40.0, 42_500.0),
            make_listing("b", "AZ", "Mohave", 5.0, 8_900.0),
            make_listing("c", "NM", "Luna", 80.0, 64_000.0),
        ])
    }

    #[test]
    fn test_new_session_matches_everything() {
        let s = session();
        assert_eq!(s.match_count(), 3);
        assert!(s.active_filter().is_empty());
    }

    #[test]
    fn test_submit_text_narrows_and_accumulates() {
        let mut s = session();
        assert_eq!(s.submit_text("in AZ"), 2);
        // Second sentence refines the first; state constraint persists.
        assert_eq!(s.submit_text("at least 10 acres"), 1);
        assert_eq!(s.matches().next().unwrap().id, "a");
    }

    #[test]
    fn test_unrecognised_text_changes_nothing() {
        let mut s = session();
        s.submit_text("in AZ");
        let before = s.active_filter().clone();
        s.submit_text("something with zero recognisable phrases");
        assert_eq!(s.active_filter(), &before);
        assert_eq!(s.match_count(), 2);
    }

    #[test]
    fn test_repeat_submission_is_idempotent() {
        let mut s = session();
        s.submit_text("20-50 acres in AZ under 100k with road access");
        let filter_once = s.active_filter().clone();
        let count_once = s.match_count();
        s.submit_text("20-50 acres in AZ under 100k with road access");
        assert_eq!(s.active_filter(), &filter_once);
        assert_eq!(s.match_count(), count_once);
    }

    #[test]
    fn test_manual_state_change_clears_county() {
        let mut s = session();
        s.set_state(Some("AZ".to_string()));
        s.set_county(Some("Cochise".to_string()));
        assert_eq!(s.match_count(), 1);

        s.set_state(Some("NM".to_string()));
        assert_eq!(s.active_filter().county, None);
        assert_eq!(s.match_count(), 1);
        assert_eq!(s.matches().next().unwrap().id, "c");
    }

    #[test]
    fn test_text_state_change_keeps_county() {
        let mut s = session();
        s.set_state(Some("AZ".to_string()));
        s.set_county(Some("Cochise".to_string()));

        // Text path: state flips to NM but county survives the merge,
        // leaving a combination no listing satisfies.
        s.submit_text("looking in NM now");
        assert_eq!(s.active_filter().county, Some("Cochise".to_string()));
        assert_eq!(s.match_count(), 0);
    }

    #[test]
    fn test_clear_filter_restores_full_catalog() {
        let mut s = session();
        s.submit_text("under 10k");
        assert_eq!(s.match_count(), 1);
        s.clear_filter();
        assert_eq!(s.match_count(), 3);
    }

    #[test]
    fn test_replace_catalog_reapplies_active_filter() {
        let mut s = session();
        s.submit_text("in NM");
        assert_eq!(s.match_count(), 1);

        s.replace_catalog(vec![
            make_listing("x", "NM", "Taos", 2.0, 6_500.0),
            make_listing("y", "NM", "Luna", 80.0, 64_000.0),
            make_listing("z", "TX", "Brewster", 50.0, 47_500.0),
        ]);
        assert_eq!(s.match_count(), 2);
        assert_eq!(s.catalog_len(), 3);
    }

    #[test]
    fn test_setters_cover_every_dimension() {
        let mut s = session();
        s.set_query(Some("luna".to_string()));
        assert_eq!(s.match_count(), 1);
        s.set_query(None);

        s.set_category(Some(ListingCategory::Land));
        assert_eq!(s.match_count(), 3);
        s.set_category(Some(ListingCategory::Estate));
        assert_eq!(s.match_count(), 0);
        s.set_category(None);

        s.set_feature(Some("Road Access".to_string()));
        assert_eq!(s.match_count(), 3);
        s.set_feature(None);

        s.set_price_range(Some(10_000.0), Some(50_000.0));
        assert_eq!(s.match_count(), 1);
        s.set_price_range(None, None);

        s.set_acre_range(Some(100.0), Some(10.0));
        assert_eq!(s.match_count(), 0, "contradictory bounds match nothing");
    }
}
