//! # Client configuration — `portfolio.toml`
//!
//! Defines the TOML file that tells the client where the remote API lives and
//! how long transient UI feedback stays on screen
//! (filename: [`PortfolioConfig::filename`] = `"portfolio.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://portfolio-api-three-black.vercel.app/api/v1"
//!
//! [ui]
//! alert_dismiss_ms = 5000      # inline alerts clear themselves after this
//! register_redirect_ms = 2000  # pause before returning to the login view
//! save_close_ms = 1500         # pause before closing the project form
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`PortfolioConfig`] | Top-level config. Builder helper (`with_base_url`), TOML (de)serialisation, and the canonical filename. |
//! | [`ApiConfig`] | Remote API section — the base URL every endpoint hangs off. |
//! | [`UiConfig`] | Timing of alerts and delayed navigation, in milliseconds. |
//!
//! Every field has a serde default, so a missing or empty file is equivalent
//! to [`PortfolioConfig::default`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Base URL of the hosted portfolio API.
pub const DEFAULT_API_BASE: &str = "https://portfolio-api-three-black.vercel.app/api/v1";

/// Top-level configuration stored in `portfolio.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `https://host/api/v1`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// UI timing configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_alert_dismiss_ms")]
    pub alert_dismiss_ms: u64,
    #[serde(default = "default_register_redirect_ms")]
    pub register_redirect_ms: u64,
    #[serde(default = "default_save_close_ms")]
    pub save_close_ms: u64,
}

fn default_alert_dismiss_ms() -> u64 {
    5000
}

fn default_register_redirect_ms() -> u64 {
    2000
}

fn default_save_close_ms() -> u64 {
    1500
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: default_alert_dismiss_ms(),
            register_redirect_ms: default_register_redirect_ms(),
            save_close_ms: default_save_close_ms(),
        }
    }
}

impl UiConfig {
    pub fn alert_dismiss(&self) -> Duration {
        Duration::from_millis(self.alert_dismiss_ms)
    }

    pub fn register_redirect(&self) -> Duration {
        Duration::from_millis(self.register_redirect_ms)
    }

    pub fn save_close(&self) -> Duration {
        Duration::from_millis(self.save_close_ms)
    }
}

impl PortfolioConfig {
    /// Builder method to point the client at another API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portfolio.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    #[cfg(test)]
    pub(crate) fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
