//! Configuration for the tenant filter module.
//!
//! The section lives under `modules.tenant_filter.config`:
//!
//! ```yaml
//! modules:
//!   tenant_filter:
//!     config:
//!       broad_scope_warning: true
//!       log_decisions: false
//! ```
//!
//! Environment variables override the file, e.g.
//! `WW_MODULES__TENANT_FILTER__CONFIG__LOG_DECISIONS=true`.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::{Deserialize, Serialize};

/// Key path of the module section inside the application config.
pub const CONFIG_PATH: &str = "modules.tenant_filter.config";

/// Environment prefix for overrides.
pub const ENV_PREFIX: &str = "WW_";

/// Configuration error for the tenant filter module.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid tenant_filter config: {0}")]
    Invalid(#[source] Box<figment::Error>),
}

/// Module configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TenantFilterConfig {
    /// Log a warning whenever a government principal without a district is
    /// granted national visibility.
    pub broad_scope_warning: bool,

    /// Log every produced predicate at debug level.
    pub log_decisions: bool,
}

impl Default for TenantFilterConfig {
    fn default() -> Self {
        Self {
            broad_scope_warning: true,
            log_decisions: false,
        }
    }
}

impl TenantFilterConfig {
    /// Extracts the module section, falling back to defaults when it is absent.
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` if the section exists but cannot be deserialized.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        match figment.find_value(CONFIG_PATH) {
            Ok(value) => value
                .deserialize()
                .map_err(|e| ConfigError::Invalid(Box::new(e))),
            Err(e) if e.missing() => Ok(Self::default()),
            Err(e) => Err(ConfigError::Invalid(Box::new(e))),
        }
    }

    /// Loads the YAML file at `path` merged with `WW_` environment overrides.
    ///
    /// A missing file behaves like an empty one.
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` if the merged section is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::from_figment(&figment)
    }
}
