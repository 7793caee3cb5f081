//! Page configuration.
//!
//! Every tunable lives in [`SiteConfig`]. Defaults describe the production
//! landing page; a page can override any subset through an embedded block:
//!
//! ```html
//! <script type="application/json" id="landing-config">
//!   { "release": { "repo": "owner/other-releases" }, "log_level": "debug" }
//! </script>
//! ```
//!
//! A malformed block is reported and ignored; the page runs on defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use carousel::config::CarouselConfig;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::i18n::Language;
use crate::view::ViewBinding;

/// Id of the optional JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

pub const DEFAULT_REPO: &str = "RyanWez/ahkyaway_mhat-releases";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_WEB_BASE: &str = "https://github.com";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub release: ReleaseConfig,
    pub storage: StorageKeys,
    pub default_language: Language,
    pub carousel: CarouselConfig,
    pub reveal: RevealConfig,
    /// `error`, `warn`, `info`, `debug`, or `trace`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            release: ReleaseConfig::default(),
            storage: StorageKeys::default(),
            default_language: Language::En,
            carousel: CarouselConfig::default(),
            reveal: RevealConfig::default(),
            log_level: "info".into(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON or mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the page's config block. No block means defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the block is present but invalid.
    pub fn read<V: ViewBinding>(view: &V) -> Result<Self, ConfigError> {
        let Some(node) = view.by_id(CONFIG_ELEMENT_ID) else {
            return Ok(Self::default());
        };
        let raw = view.text(&node);
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_json(&raw)
    }

    /// Parsed log level; unknown names mean `info`.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(self.log_level.trim()).unwrap_or(log::Level::Info)
    }
}

/// Where releases live and how Android assets are recognized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// `owner/name` of the releases repository.
    pub repo: String,
    pub api_base: String,
    pub web_base: String,
    /// Preferred architecture marker in APK names.
    pub arch_marker: String,
    /// Marker of the all-architectures APK.
    pub universal_marker: String,
    /// Package extension, including the dot.
    pub package_extension: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            repo: DEFAULT_REPO.into(),
            api_base: DEFAULT_API_BASE.into(),
            web_base: DEFAULT_WEB_BASE.into(),
            arch_marker: "arm64-v8a".into(),
            universal_marker: "universal".into(),
            package_extension: ".apk".into(),
        }
    }
}

impl ReleaseConfig {
    /// Latest-release JSON endpoint.
    #[must_use]
    pub fn latest_release_api_url(&self) -> String {
        format!("{}/repos/{}/releases/latest", self.api_base.trim_end_matches('/'), self.repo)
    }

    /// Human releases page, used for every non-Android platform.
    #[must_use]
    pub fn releases_page_url(&self) -> String {
        format!("{}/{}/releases", self.web_base.trim_end_matches('/'), self.repo)
    }

    /// Latest release page, used when Android asset resolution fails.
    #[must_use]
    pub fn latest_release_page_url(&self) -> String {
        format!("{}/latest", self.releases_page_url())
    }
}

/// Local storage keys.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub theme: String,
    pub language: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self { theme: "landing-theme".into(), language: "landing-language".into() }
    }
}

/// Scroll highlighting and reveal tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction at which a section owns the nav highlight.
    pub nav_threshold: f64,
    /// Visible fraction at which a `.reveal` element fades in.
    pub reveal_threshold: f64,
    /// Scroll offset (px) under which the home link is forced active.
    pub home_offset_px: f64,
    /// Href of the home nav link.
    pub home_href: String,
    /// Root margin for the reveal observer.
    pub reveal_root_margin: String,
    /// Elements that receive the `reveal` class at boot.
    pub reveal_targets: Vec<String>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            nav_threshold: 0.3,
            reveal_threshold: 0.1,
            home_offset_px: 100.0,
            home_href: "#hero".into(),
            reveal_root_margin: "0px 0px -50px 0px".into(),
            reveal_targets: vec![".section-header".into(), ".download-container".into(), ".platform-grid".into()],
        }
    }
}
