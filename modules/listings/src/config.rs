//! Configuration for the listings module
//!
//! Feature flags are re-read on every snapshot so changes between requests
//! are observed; a snapshot is immutable for the request it serves.

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Request-time feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flags {
    /// Inject the synthetic slow path on single-listing reads
    pub errors: bool,

    /// Allow create/update/delete
    pub enable_crud: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            errors: false,
            enable_crud: true,
        }
    }
}

/// Source of per-request flag snapshots.
pub trait FlagSource: Send + Sync {
    /// Take a fresh snapshot of the flags.
    fn snapshot(&self) -> Flags;
}

/// Fixed flags, mainly for tests and embedded use.
impl FlagSource for Flags {
    fn snapshot(&self) -> Flags {
        *self
    }
}

/// Flag source backed by a figment provider stack:
/// defaults, then an optional YAML file, then the `ERRORS` and
/// `ENABLE_CRUD` environment variables.
pub struct FigmentFlagSource {
    config_path: String,
}

impl FigmentFlagSource {
    pub fn new(config_path: impl Into<String>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    fn figment(&self) -> Figment {
        Figment::from(Serialized::defaults(Flags::default()))
            .merge(Yaml::file(&self.config_path))
            .merge(Env::raw().only(&["errors", "enable_crud"]))
    }
}

impl FlagSource for FigmentFlagSource {
    fn snapshot(&self) -> Flags {
        match self.figment().extract() {
            Ok(flags) => flags,
            Err(error) => {
                tracing::warn!(%error, "invalid flag configuration, using defaults");
                Flags::default()
            }
        }
    }
}

/// Errors raised while loading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] figment::Error),
}

/// Server bootstrap configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,

    /// Per-request timeout; must exceed the synthetic delay (~1s)
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    /// Load from the YAML file at `config_path` with `LISTINGS_`-prefixed
    /// environment overrides.
    pub fn load(config_path: &str) -> Result<Self, ConfigError> {
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Yaml::file(config_path))
            .merge(Env::prefixed("LISTINGS_"))
            .extract()?;
        Ok(config)
    }
}
