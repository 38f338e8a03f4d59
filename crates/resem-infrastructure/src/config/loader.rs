//! Configuration loader
//!
//! Merges configuration from defaults, a TOML file, and prefixed
//! environment variables using figment.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use resem_domain::error::{Error, Result};

use super::types::AppConfig;

/// Default configuration file searched in the working directory
const DEFAULT_CONFIG_FILE: &str = "resem.toml";

/// Environment variable prefix. Nested keys use a double underscore so
/// multi-word field names survive the split (e.g.,
/// `RESEM_EMBEDDING__TIMEOUT_SECS` maps to `embedding.timeout_secs`).
const CONFIG_ENV_PREFIX: &str = "RESEM";

/// Separator between nested config keys in environment variables. A single
/// underscore would also split inside field names like
/// `max_unbounded_pairs` and make them unreachable.
const CONFIG_ENV_SEPARATOR: &str = "__";

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load and validate configuration from all sources.
    ///
    /// Later sources override earlier ones:
    /// 1. `AppConfig::default()`
    /// 2. TOML file (explicit path, or `resem.toml` if present)
    /// 3. Environment variables with the prefix, sections separated by a
    ///    double underscore (e.g., `RESEM_STORE__ANN_PARTITIONS`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        let path = self
            .config_path
            .clone()
            .or_else(|| Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()));
        if let Some(path) = path {
            tracing::debug!(path = %path.display(), exists = path.exists(), "loading config file");
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let config: AppConfig = figment
            .extract()
            .map_err(|e| Error::config(format!("failed to load configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
