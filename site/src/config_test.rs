#![allow(clippy::float_cmp)]

use super::*;
use crate::view::memory::MemoryView;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_urls_point_at_release_repo() {
    let release = ReleaseConfig::default();
    assert_eq!(
        release.latest_release_api_url(),
        "https://api.github.com/repos/RyanWez/ahkyaway_mhat-releases/releases/latest"
    );
    assert_eq!(release.releases_page_url(), "https://github.com/RyanWez/ahkyaway_mhat-releases/releases");
    assert_eq!(
        release.latest_release_page_url(),
        "https://github.com/RyanWez/ahkyaway_mhat-releases/releases/latest"
    );
}

#[test]
fn default_storage_keys() {
    let keys = StorageKeys::default();
    assert_eq!(keys.theme, "landing-theme");
    assert_eq!(keys.language, "landing-language");
}

#[test]
fn default_reveal_tuning() {
    let reveal = RevealConfig::default();
    assert_eq!(reveal.nav_threshold, 0.3);
    assert_eq!(reveal.reveal_threshold, 0.1);
    assert_eq!(reveal.home_offset_px, 100.0);
    assert_eq!(reveal.reveal_targets.len(), 3);
}

#[test]
fn trailing_slash_in_bases_is_ignored() {
    let release = ReleaseConfig {
        api_base: "https://ghe.example.com/api/v3/".into(),
        web_base: "https://ghe.example.com/".into(),
        repo: "acme/app".into(),
        ..ReleaseConfig::default()
    };
    assert_eq!(release.latest_release_api_url(), "https://ghe.example.com/api/v3/repos/acme/app/releases/latest");
    assert_eq!(release.releases_page_url(), "https://ghe.example.com/acme/app/releases");
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn partial_override_keeps_defaults() {
    let config = SiteConfig::from_json(r#"{"release": {"repo": "acme/app"}, "log_level": "debug"}"#).unwrap();
    assert_eq!(config.release.repo, "acme/app");
    assert_eq!(config.release.package_extension, ".apk");
    assert_eq!(config.storage, StorageKeys::default());
    assert_eq!(config.log_level(), log::Level::Debug);
}

#[test]
fn nested_carousel_override() {
    let config = SiteConfig::from_json(r#"{"carousel": {"gap_px": 12}}"#).unwrap();
    assert_eq!(config.carousel.gap_px, 12.0);
    assert_eq!(config.carousel.velocity_threshold, 0.5);
}

#[test]
fn default_language_accepts_code() {
    let config = SiteConfig::from_json(r#"{"default_language": "my"}"#).unwrap();
    assert_eq!(config.default_language, Language::My);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(SiteConfig::from_json("{release:"), Err(ConfigError::Parse(_))));
}

#[test]
fn unknown_log_level_means_info() {
    let config = SiteConfig { log_level: "chatty".into(), ..SiteConfig::default() };
    assert_eq!(config.log_level(), log::Level::Info);
}

// =============================================================
// Reading from the page
// =============================================================

#[test]
fn read_without_block_is_default() {
    let view = MemoryView::new();
    assert_eq!(SiteConfig::read(&view).unwrap(), SiteConfig::default());
}

#[test]
fn read_empty_block_is_default() {
    let view = MemoryView::new();
    let node = view.add_with_id("script", CONFIG_ELEMENT_ID);
    view.set_text(&node, "  \n ");
    assert_eq!(SiteConfig::read(&view).unwrap(), SiteConfig::default());
}

#[test]
fn read_parses_block() {
    let view = MemoryView::new();
    let node = view.add_with_id("script", CONFIG_ELEMENT_ID);
    view.set_text(&node, r#"{"storage": {"theme": "t"}}"#);
    let config = SiteConfig::read(&view).unwrap();
    assert_eq!(config.storage.theme, "t");
    assert_eq!(config.storage.language, "landing-language");
}

#[test]
fn read_reports_bad_block() {
    let view = MemoryView::new();
    let node = view.add_with_id("script", CONFIG_ELEMENT_ID);
    view.set_text(&node, "not json");
    assert!(SiteConfig::read(&view).is_err());
}
