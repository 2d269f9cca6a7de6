//! Store configuration.

use serde::{Deserialize, Serialize};

/// Store configuration kept in `.gilded/config.yml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Shop settings.
    #[serde(default)]
    pub shop: ShopSettings,

    /// End-of-day aging settings.
    #[serde(default)]
    pub aging: AgingSettings,
}

fn default_version() -> u32 {
    1
}

/// Shop-level settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopSettings {
    /// Shop name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Settings for the end-of-day run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgingSettings {
    /// Days aged by one run when none are given.
    #[serde(default = "default_days")]
    pub default_days: u32,

    /// Reject new items that break the model rules.
    #[serde(default = "default_validate")]
    pub validate_on_add: bool,
}

fn default_days() -> u32 {
    1
}

fn default_validate() -> bool {
    true
}

impl Default for AgingSettings {
    fn default() -> Self {
        Self {
            default_days: default_days(),
            validate_on_add: default_validate(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: 1,
            shop: ShopSettings::default(),
            aging: AgingSettings::default(),
        }
    }
}

impl StoreConfig {
    /// Create a new config with the given shop name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            shop: ShopSettings {
                name: Some(name.into()),
            },
            ..Default::default()
        }
    }
}
