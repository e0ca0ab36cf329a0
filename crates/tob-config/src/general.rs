//! General application configuration.

use serde::{Deserialize, Serialize};
use tob_core::enums::Sdk;

/// Pretty-print JSON output unless told otherwise.
const fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// SDK assumed by commands that accept `--sdk` when the flag is absent.
    #[serde(default)]
    pub default_sdk: Option<Sdk>,

    /// Indent JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_sdk: None,
            pretty: default_pretty(),
        }
    }
}
