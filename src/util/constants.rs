// ParcelScout - util/constants.rs
//
// Single source of truth for named constants, limits, and the fixed
// extraction vocabularies.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ParcelScout";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ParcelScout";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Extraction vocabularies
// =============================================================================

/// Two-letter state codes the extractor recognises as standalone tokens.
/// Tokens are matched case-insensitively and stored upper-cased.
pub const SUPPORTED_STATES: &[&str] = &[
    "AZ", "NM", "CO", "UT", "NV", "TX", "OK", "CA", "WA", "OR",
];

/// Feature-keyword vocabulary, tested in this order as case-insensitive
/// substring checks. The filter holds a single feature slot, so a later
/// entry in this table overwrites an earlier match within the same text.
pub const FEATURE_KEYWORDS: &[(&str, &str)] = &[
    ("road", "Road Access"),
    ("power", "Power Nearby"),
    ("no hoa", "No HOA"),
];

// =============================================================================
// Catalog limits
// =============================================================================

/// Maximum number of listings accepted in a single catalog.
/// The evaluator is a full linear scan per interaction; this bound keeps
/// a malformed or runaway catalog file from making every keystroke slow.
pub const MAX_CATALOG_SIZE: usize = 50_000;

// =============================================================================
// Export limits
// =============================================================================

/// Default maximum number of listings in a single export.
pub const DEFAULT_MAX_EXPORT_ENTRIES: usize = 10_000;

/// Hard upper bound on the export limit (prevents configuration mistakes).
pub const ABSOLUTE_MAX_EXPORT_ENTRIES: usize = 100_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config specify one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in config.toml.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
