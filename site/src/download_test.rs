use std::cell::Cell;

use futures::executor::block_on;

use super::*;
use crate::error::LookupError;
use crate::release::{Release, ReleaseAsset};
use crate::view::memory::MemoryView;

const RELEASES_PAGE: &str = "https://github.com/RyanWez/ahkyaway_mhat-releases/releases";
const LATEST_PAGE: &str = "https://github.com/RyanWez/ahkyaway_mhat-releases/releases/latest";

struct Counting {
    calls: Cell<usize>,
    result: Result<Release, LookupError>,
}

impl Counting {
    fn ok(names: &[&str]) -> Self {
        let assets = names
            .iter()
            .map(|n| ReleaseAsset { name: (*n).into(), browser_download_url: format!("https://dl/{n}") })
            .collect();
        Self { calls: Cell::new(0), result: Ok(Release { assets }) }
    }

    fn failing() -> Self {
        Self { calls: Cell::new(0), result: Err(LookupError::Transport("offline".into())) }
    }
}

impl ReleaseSource for Counting {
    async fn latest_release(&self) -> Result<Release, LookupError> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

fn button(view: &MemoryView) -> usize {
    let btn = view.add_with_id("button", HERO_DOWNLOAD_ID);
    view.set_markup(&btn, "<span>Download</span>");
    let label = view.add_child(btn, "span");
    view.set_text(&label, "Download");
    btn
}

fn click(view: &MemoryView, control: Option<usize>, platform: Platform, source: &Counting) -> DownloadOutcome {
    block_on(initiate_download(view, control.as_ref(), platform, source, &ReleaseConfig::default()))
}

// =============================================================
// resolve_download_target
// =============================================================

#[test]
fn non_android_opens_releases_page_without_lookup() {
    let source = Counting::ok(&["app-arm64-v8a.apk"]);
    for platform in [Platform::Ios, Platform::MacOs, Platform::Windows, Platform::Linux, Platform::Web] {
        let target = block_on(resolve_download_target(platform, &source, &ReleaseConfig::default()));
        assert_eq!(target, DownloadTarget::OpenInNewContext(RELEASES_PAGE.into()));
    }
    assert_eq!(source.calls.get(), 0);
}

#[test]
fn android_saves_selected_asset() {
    let source = Counting::ok(&["app-universal.apk", "app-arm64-v8a.apk"]);
    let target = block_on(resolve_download_target(Platform::Android, &source, &ReleaseConfig::default()));
    assert_eq!(target, DownloadTarget::SaveViaLink("https://dl/app-arm64-v8a.apk".into()));
    assert_eq!(source.calls.get(), 1);
}

#[test]
fn android_lookup_failure_saves_latest_page() {
    let source = Counting::failing();
    let target = block_on(resolve_download_target(Platform::Android, &source, &ReleaseConfig::default()));
    assert_eq!(target.url(), LATEST_PAGE);
}

// =============================================================
// initiate_download
// =============================================================

#[test]
fn desktop_click_opens_new_context() {
    let view = MemoryView::new();
    let btn = button(&view);
    let outcome = click(&view, Some(btn), Platform::Windows, &Counting::failing());

    assert_eq!(outcome, DownloadOutcome::Launched(DownloadTarget::OpenInNewContext(RELEASES_PAGE.into())));
    assert_eq!(view.opened(), vec![RELEASES_PAGE.to_owned()]);
    assert!(view.saved().is_empty());
}

#[test]
fn android_click_saves_via_link() {
    let view = MemoryView::new();
    let btn = button(&view);
    click(&view, Some(btn), Platform::Android, &Counting::ok(&["app-arm64-v8a.apk"]));

    assert_eq!(view.saved(), vec!["https://dl/app-arm64-v8a.apk".to_owned()]);
    assert!(view.opened().is_empty());
}

#[test]
fn control_is_restored_after_launch() {
    let view = MemoryView::new();
    let btn = button(&view);
    click(&view, Some(btn), Platform::Android, &Counting::failing());

    assert!(!view.has_class(&btn, "loading"));
    assert!(!view.is_disabled(btn));
    assert_eq!(view.markup(&btn), "<span>Download</span>");
}

#[test]
fn loading_control_is_busy() {
    let view = MemoryView::new();
    let btn = button(&view);
    view.add_class(&btn, "loading");
    let source = Counting::ok(&["app-arm64-v8a.apk"]);

    assert_eq!(click(&view, Some(btn), Platform::Android, &source), DownloadOutcome::Busy);
    assert_eq!(source.calls.get(), 0);
    assert!(view.saved().is_empty());
    assert!(view.has_class(&btn, "loading"));
}

#[test]
fn missing_control_still_launches() {
    let view = MemoryView::new();
    let outcome = click(&view, None, Platform::Linux, &Counting::failing());
    assert!(matches!(outcome, DownloadOutcome::Launched(DownloadTarget::OpenInNewContext(_))));
    assert_eq!(view.opened().len(), 1);
}

#[test]
fn show_loading_marks_control() {
    let view = MemoryView::new();
    let btn = button(&view);
    let label = view.query_within(&btn, "span").unwrap();

    let snapshot = show_loading(&view, &btn);
    assert!(view.has_class(&btn, "loading"));
    assert!(view.is_disabled(btn));
    assert_eq!(view.text(&label), "Loading...");
    assert_eq!(snapshot.markup, "<span>Download</span>");

    restore(&view, snapshot);
    assert!(!view.has_class(&btn, "loading"));
    assert!(!view.is_disabled(btn));
}
