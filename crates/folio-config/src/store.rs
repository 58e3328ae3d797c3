//! Document store location.
//!
//! A local libSQL file is used unless both `url` and `auth_token` are set, in
//! which case the store connects to the remote database instead.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

fn default_path() -> PathBuf {
    PathBuf::from(".folio/content.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Local database file. `:memory:` opens a throwaway in-process database.
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Remote database URL (e.g., `libsql://portfolio.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl StoreConfig {
    /// Whether the remote database should be used.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Whether the local path names an in-process database.
    pub fn is_in_memory(&self) -> bool {
        self.path.as_os_str() == ":memory:"
    }

    /// Reject half-configured remote settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when exactly one of `url` and
    /// `auth_token` is set, or when the URL does not use a libSQL-compatible
    /// scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (self.url.is_empty(), self.auth_token.is_empty()) {
            (false, true) => {
                return Err(ConfigError::InvalidValue {
                    field: "store.auth_token".into(),
                    reason: "required when store.url is set".into(),
                });
            }
            (true, false) => {
                return Err(ConfigError::InvalidValue {
                    field: "store.url".into(),
                    reason: "required when store.auth_token is set".into(),
                });
            }
            _ => {}
        }
        if !self.url.is_empty()
            && !["libsql://", "https://", "http://"]
                .iter()
                .any(|scheme| self.url.starts_with(scheme))
        {
            return Err(ConfigError::InvalidValue {
                field: "store.url".into(),
                reason: format!("unsupported scheme in '{}'", self.url),
            });
        }
        Ok(())
    }
}
