//! Cart configuration.

use serde::{Deserialize, Serialize};

use crate::CartError;

/// Storage key the cart is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "olda_cart_v1";

/// Configuration for a cart store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Key of the durable copy.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Retry a rejected write without logo image data.
    #[serde(default = "default_logo_stripping")]
    pub strip_logos_on_failure: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_logo_stripping() -> bool {
    true
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            strip_logos_on_failure: default_logo_stripping(),
        }
    }
}

impl CartConfig {
    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CartError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Enable or disable the logo-stripping retry.
    pub fn with_logo_stripping(mut self, enabled: bool) -> Self {
        self.strip_logos_on_failure = enabled;
        self
    }
}
