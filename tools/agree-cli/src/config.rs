//! CLI configuration.

use agree_auth::{PasswordRules, RegistrationPolicy};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Names searched for when no `--config` is given, in priority order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["agree.toml", ".agree.toml", "agree.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Store branding.
    #[serde(default)]
    pub store: StoreConfig,

    /// Catalog dataset.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Account rules.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Display settings.
    #[serde(default)]
    pub ui: UiConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Password rules derived from the auth section.
    pub fn password_rules(&self) -> PasswordRules {
        PasswordRules {
            min_length: self.auth.min_password_length,
        }
    }
}

/// Store branding shown on the splash and home screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store name.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Line shown under the name.
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

fn default_store_name() -> String {
    "Agree".to_string()
}

fn default_tagline() -> String {
    "Healthy Vegetarian Food Delivery".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            tagline: default_tagline(),
        }
    }
}

/// Catalog dataset location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Menu file (TOML or JSON). The built-in menu is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Account rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum password length at registration.
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    /// What registering again does to an existing account.
    #[serde(default)]
    pub on_existing_account: RegistrationPolicy,
}

fn default_min_password_length() -> usize {
    PasswordRules::DEFAULT_MIN_LENGTH
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_password_length: default_min_password_length(),
            on_existing_account: RegistrationPolicy::default(),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme at startup.
    #[serde(default)]
    pub theme: Theme,

    /// How long the splash screen stays up.
    #[serde(default = "default_splash_millis")]
    pub splash_millis: u64,
}

fn default_splash_millis() -> u64 {
    2000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            splash_millis: default_splash_millis(),
        }
    }
}

/// Generate a default agree.toml config file.
pub fn generate_default_config(store_name: &str) -> String {
    format!(
        r#"# Agree storefront configuration

[store]
name = "{store_name}"
tagline = "Healthy Vegetarian Food Delivery"

[catalog]
# path = "menu.toml"

[auth]
min_password_length = 6
# "overwrite" replaces an existing account, "reject" refuses
on_existing_account = "overwrite"

[ui]
theme = "light"
splash_millis = 2000
"#,
        store_name = store_name
    )
}
