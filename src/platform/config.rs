// ParcelScout - platform/config.rs
//
// Platform config-directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use std::path::{Path, PathBuf};

/// Resolved platform paths for ParcelScout configuration and data.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/parcelscout/).
    pub config_dir: PathBuf,

    /// Data directory (e.g. user-supplied catalog files).
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Full path to config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Resolve a catalog path from config.toml.
    ///
    /// A relative `[catalog] path` is anchored at the data directory, so a
    /// config file can say `path = "listings.json"` and keep the catalog
    /// next to the rest of the app's data. Absolute paths pass through
    /// unchanged.
    pub fn resolve_catalog_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[catalog]` section.
    pub catalog: CatalogSection,
    /// `[export]` section.
    pub export: ExportSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// Default catalog file loaded when --catalog is not passed.
    /// None means the built-in seed catalog.
    pub path: Option<PathBuf>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// Maximum listings allowed in a single export.
    pub max_entries: usize,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            max_entries: constants::DEFAULT_MAX_EXPORT_ENTRIES,
        }
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: trace, debug, info, warn, error.
    pub level: Option<String>,
}

/// Load and validate config.toml from the given path.
///
/// A missing file is not an error; defaults apply. A present-but-invalid
/// file is an error -- silently ignoring a malformed config hides user
/// mistakes.
pub fn load_config(path: &Path) -> Result<RawConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(RawConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: RawConfig = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_config(&config)?;
    tracing::debug!(path = %path.display(), "Config loaded");
    Ok(config)
}

/// Range-check config values at startup.
fn validate_config(config: &RawConfig) -> Result<(), ConfigError> {
    if config.export.max_entries == 0
        || config.export.max_entries > constants::ABSOLUTE_MAX_EXPORT_ENTRIES
    {
        return Err(ConfigError::ValueOutOfRange {
            field: "export.max_entries".to_string(),
            value: config.export.max_entries.to_string(),
            expected: format!("1..={}", constants::ABSOLUTE_MAX_EXPORT_ENTRIES),
        });
    }

    if let Some(ref level) = config.logging.level {
        if !constants::VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValueOutOfRange {
                field: "logging.level".to_string(),
                value: level.clone(),
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    Ok(())
}
