//! Smart download button behavior.
//!
//! A click resolves where this visitor's build lives and sends them there:
//! Android gets the APK from the latest release (saved through a transient
//! link), every other platform gets the releases page in a new tab.
//!
//! The triggering button doubles as the re-entrancy guard: while it carries
//! the `loading` class, further clicks are ignored.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use crate::config::ReleaseConfig;
use crate::platform::Platform;
use crate::release::{ReleaseSource, resolve_android};
use crate::view::ViewBinding;

/// Navbar download button.
pub const NAV_DOWNLOAD_ID: &str = "download-btn";
/// Hero download button.
pub const HERO_DOWNLOAD_ID: &str = "hero-download-btn";

const LOADING_CLASS: &str = "loading";
const LOADING_LABEL: &str = "Loading...";

/// Where a download click sends the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadTarget {
    /// Open a page in a new browsing context.
    OpenInNewContext(String),
    /// Download a file through a transient link.
    SaveViaLink(String),
}

impl DownloadTarget {
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::OpenInNewContext(url) | Self::SaveViaLink(url) => url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// A previous click on this control is still resolving.
    Busy,
    Launched(DownloadTarget),
}

/// Resolve the target for `platform`. Only Android touches the network.
pub async fn resolve_download_target<R>(platform: Platform, source: &R, config: &ReleaseConfig) -> DownloadTarget
where
    R: ReleaseSource + ?Sized,
{
    if platform.resolves_dynamically() {
        let resolution = resolve_android(source, config).await;
        DownloadTarget::SaveViaLink(resolution.url)
    } else {
        DownloadTarget::OpenInNewContext(config.releases_page_url())
    }
}

/// Saved appearance of a control, restored after the download launches.
struct ControlSnapshot<N> {
    node: N,
    markup: String,
}

fn show_loading<V: ViewBinding>(view: &V, node: &V::Node) -> ControlSnapshot<V::Node> {
    let snapshot = ControlSnapshot { node: node.clone(), markup: view.markup(node) };
    view.add_class(node, LOADING_CLASS);
    view.set_disabled(node, true);
    if let Some(label) = view.query_within(node, "span") {
        view.set_text(&label, LOADING_LABEL);
    }
    snapshot
}

fn restore<V: ViewBinding>(view: &V, snapshot: ControlSnapshot<V::Node>) {
    view.remove_class(&snapshot.node, LOADING_CLASS);
    view.set_disabled(&snapshot.node, false);
    view.set_markup(&snapshot.node, &snapshot.markup);
}

/// Handle a click on a download control.
///
/// `control` is the clicked button, if known. The control is restored to its
/// original markup, class, and enabled state whatever the resolution outcome.
pub async fn initiate_download<V, R>(
    view: &V,
    control: Option<&V::Node>,
    platform: Platform,
    source: &R,
    config: &ReleaseConfig,
) -> DownloadOutcome
where
    V: ViewBinding,
    R: ReleaseSource + ?Sized,
{
    if let Some(node) = control
        && view.has_class(node, LOADING_CLASS)
    {
        return DownloadOutcome::Busy;
    }

    let snapshot = control.map(|node| show_loading(view, node));
    let target = resolve_download_target(platform, source, config).await;
    log::info!("download: {} -> {}", platform.as_str(), target.url());

    match &target {
        DownloadTarget::OpenInNewContext(url) => view.open_in_new_context(url),
        DownloadTarget::SaveViaLink(url) => view.save_via_link(url),
    }

    if let Some(snapshot) = snapshot {
        restore(view, snapshot);
    }
    DownloadOutcome::Launched(target)
}
