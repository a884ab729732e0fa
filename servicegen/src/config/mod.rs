//! Project configuration
//!
//! `servicegen new` drops a `.servicegen.toml` at the project root;
//! `servicegen resource` reads it back to learn which project it is working
//! in. Environment variables with the `SERVICEGEN_` prefix override file
//! values.

use std::path::Path;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration file name at the project root
pub const CONFIG_FILE: &str = ".servicegen.toml";

/// Per-project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name, used in generated module headers
    pub project_name: String,
    /// Database backend; only `postgres` is supported
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_database() -> String {
    "postgres".to_string()
}

impl ProjectConfig {
    /// Load the configuration for the project rooted at `project_root`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the file is missing or malformed, and
    /// [`Error::UnsupportedDatabase`] when the merged configuration names a
    /// backend other than `postgres`.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config: Self = Figment::new()
            .merge(Toml::file(project_root.join(CONFIG_FILE)))
            .merge(Env::prefixed("SERVICEGEN_"))
            .extract()
            .map_err(|e| Error::Config(Box::new(e)))?;

        if config.database != "postgres" {
            return Err(Error::UnsupportedDatabase {
                database: config.database,
            });
        }

        Ok(config)
    }
}
