//! Cloud Datastore target configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatastoreConfig {
    /// Google Cloud project that owns the Datastore database.
    #[serde(default)]
    pub project_id: String,

    /// Named database inside the project. Empty selects the default database.
    #[serde(default)]
    pub database_id: String,
}

impl DatastoreConfig {
    /// Check if a target project is set.
    pub fn is_configured(&self) -> bool {
        !self.project_id.is_empty()
    }

    /// Return `self` if configured, else a `NotConfigured` error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when `project_id` is empty.
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if self.is_configured() {
            Ok(self)
        } else {
            Err(ConfigError::NotConfigured {
                section: "datastore".into(),
            })
        }
    }
}
