//! Configuration loading and resolution
//!
//! Settings come from a TOML file under the platform config directory,
//! with the Unsplash credential resolvable from the environment as well.
//! Priority for the credential: ENV → TOML. A warning is logged when it
//! is present in multiple sources (potential misconfiguration).

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Environment variable overriding the TOML `unsplash_access_key`
pub const UNSPLASH_KEY_ENV: &str = "QUOTEIT_UNSPLASH_ACCESS_KEY";

const DEFAULT_QUOTE_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_ENRICHMENT_TIMEOUT_MS: u64 = 5_000;

/// Enrichment delivery mode
///
/// `Synchronous` waits for the bounded enrichment join before returning a
/// fully-populated quote; `Optimistic` returns the base quote immediately
/// and delivers enrichment as a follow-up update. Synchronous is the
/// default: the join adds at most `enrichment_timeout_ms` and callers get
/// one complete record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnrichMode {
    #[default]
    Synchronous,
    Optimistic,
}

impl EnrichMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrichMode::Synchronous => "synchronous",
            EnrichMode::Optimistic => "optimistic",
        }
    }

    fn parse(s: &str) -> Result<Self> {
        match s {
            "synchronous" => Ok(EnrichMode::Synchronous),
            "optimistic" => Ok(EnrichMode::Optimistic),
            other => Err(Error::Config(format!(
                "Unknown enrichment_mode '{}' (expected 'synchronous' or 'optimistic')",
                other
            ))),
        }
    }
}

/// Raw TOML configuration file contents; every field optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub quote_timeout_ms: Option<u64>,
    pub enrichment_timeout_ms: Option<u64>,
    pub enrichment_mode: Option<String>,
    pub unsplash_access_key: Option<String>,
    pub favorites_path: Option<PathBuf>,
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Ambient timeout for quote provider requests
    pub quote_timeout: Duration,
    /// Per-lookup timeout for enrichment requests
    pub enrichment_timeout: Duration,
    /// Enrichment delivery mode (see [`EnrichMode`])
    pub enrichment_mode: EnrichMode,
    /// Optional credential for the image-search portrait fallback
    pub unsplash_access_key: Option<String>,
    /// Location of the persisted favorites snapshot
    pub favorites_path: PathBuf,
}

impl Config {
    /// Load configuration from the platform config file, falling back to
    /// defaults when the file is missing.
    pub fn load() -> Result<Self> {
        let toml_config = load_toml_config()?;
        Self::resolve(toml_config)
    }

    /// Resolve a raw TOML config (plus environment) into runtime settings
    pub fn resolve(toml_config: TomlConfig) -> Result<Self> {
        let enrichment_mode = match toml_config.enrichment_mode.as_deref() {
            Some(s) => EnrichMode::parse(s)?,
            None => EnrichMode::default(),
        };

        let env_key = std::env::var(UNSPLASH_KEY_ENV).ok();
        let unsplash_access_key =
            resolve_unsplash_key(env_key, toml_config.unsplash_access_key.as_ref());

        Ok(Config {
            quote_timeout: Duration::from_millis(
                toml_config.quote_timeout_ms.unwrap_or(DEFAULT_QUOTE_TIMEOUT_MS),
            ),
            enrichment_timeout: Duration::from_millis(
                toml_config
                    .enrichment_timeout_ms
                    .unwrap_or(DEFAULT_ENRICHMENT_TIMEOUT_MS),
            ),
            enrichment_mode,
            unsplash_access_key,
            favorites_path: toml_config
                .favorites_path
                .unwrap_or_else(default_favorites_path),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            quote_timeout: Duration::from_millis(DEFAULT_QUOTE_TIMEOUT_MS),
            enrichment_timeout: Duration::from_millis(DEFAULT_ENRICHMENT_TIMEOUT_MS),
            enrichment_mode: EnrichMode::default(),
            unsplash_access_key: None,
            favorites_path: default_favorites_path(),
        }
    }
}

/// Resolve the Unsplash access key from ENV → TOML priority
///
/// Warns when the key is configured in multiple sources.
fn resolve_unsplash_key(env_key: Option<String>, toml_key: Option<&String>) -> Option<String> {
    let env_valid = env_key.as_deref().map(is_valid_key).unwrap_or(false);
    let toml_valid = toml_key.map(|k| is_valid_key(k)).unwrap_or(false);

    if env_valid && toml_valid {
        warn!(
            "Unsplash access key found in both {} and the config file. Using the environment value.",
            UNSPLASH_KEY_ENV
        );
    }

    if env_valid {
        info!("Unsplash access key loaded from environment variable");
        return env_key;
    }

    if toml_valid {
        info!("Unsplash access key loaded from config file");
        return toml_key.cloned();
    }

    None
}

/// Validate an API key (non-empty, non-whitespace)
fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

/// Platform config file path: `<config_dir>/quoteit/config.toml`
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("quoteit").join("config.toml"))
}

/// Default favorites snapshot path: `<data_local_dir>/quoteit/favorites.json`
pub fn default_favorites_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("quoteit"))
        .unwrap_or_else(|| PathBuf::from("./quoteit_data"))
        .join("favorites.json")
}

/// Read and parse the platform config file; missing file yields defaults
fn load_toml_config() -> Result<TomlConfig> {
    let Some(path) = config_file_path() else {
        return Ok(TomlConfig::default());
    };

    if !path.exists() {
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let config = Config::resolve(TomlConfig::default()).unwrap();
        assert_eq!(config.quote_timeout, Duration::from_millis(10_000));
        assert_eq!(config.enrichment_timeout, Duration::from_millis(5_000));
        assert_eq!(config.enrichment_mode, EnrichMode::Synchronous);
    }

    #[test]
    fn test_resolve_explicit_values() {
        let toml_config = TomlConfig {
            quote_timeout_ms: Some(2_000),
            enrichment_timeout_ms: Some(500),
            enrichment_mode: Some("optimistic".to_string()),
            unsplash_access_key: None,
            favorites_path: Some(PathBuf::from("/tmp/favs.json")),
        };

        let config = Config::resolve(toml_config).unwrap();
        assert_eq!(config.quote_timeout, Duration::from_millis(2_000));
        assert_eq!(config.enrichment_timeout, Duration::from_millis(500));
        assert_eq!(config.enrichment_mode, EnrichMode::Optimistic);
        assert_eq!(config.favorites_path, PathBuf::from("/tmp/favs.json"));
    }

    #[test]
    fn test_resolve_rejects_unknown_mode() {
        let toml_config = TomlConfig {
            enrichment_mode: Some("eager".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            Config::resolve(toml_config),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_env_key_wins_over_toml() {
        let toml_key = "toml-key".to_string();
        let resolved = resolve_unsplash_key(Some("env-key".to_string()), Some(&toml_key));
        assert_eq!(resolved.as_deref(), Some("env-key"));
    }

    #[test]
    fn test_blank_env_key_falls_through_to_toml() {
        let toml_key = "toml-key".to_string();
        let resolved = resolve_unsplash_key(Some("   ".to_string()), Some(&toml_key));
        assert_eq!(resolved.as_deref(), Some("toml-key"));
    }

    #[test]
    fn test_no_key_configured() {
        assert_eq!(resolve_unsplash_key(None, None), None);
    }

    #[test]
    fn test_toml_parse() {
        let toml_config: TomlConfig = toml::from_str(
            r#"
            quote_timeout_ms = 3000
            enrichment_mode = "synchronous"
            "#,
        )
        .unwrap();

        assert_eq!(toml_config.quote_timeout_ms, Some(3000));
        assert_eq!(toml_config.enrichment_mode.as_deref(), Some("synchronous"));
        assert!(toml_config.unsplash_access_key.is_none());
    }
}
