//! Latest-release lookup and Android asset selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Android visitors get the APK from the latest published release instead of
//! the releases page. This is a best-effort enhancement: the lookup is one
//! unauthenticated GET with no retry, and any failure resolves to the static
//! latest-release page.
//!
//! ERROR HANDLING
//! ==============
//! [`ReleaseSource`] returns an explicit `Result`; [`resolve_android`] owns the
//! fallback policy and records why it fell back in [`Resolution`].

#[cfg(test)]
#[path = "release_test.rs"]
mod release_test;

use serde::Deserialize;

use crate::config::ReleaseConfig;
use crate::error::LookupError;

/// One downloadable file attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// The subset of the releases API response we read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// Where the latest release comes from.
#[allow(async_fn_in_trait)]
pub trait ReleaseSource {
    /// Fetch the latest published release.
    async fn latest_release(&self) -> Result<Release, LookupError>;
}

/// Pick the best Android package: architecture build, then universal build, then any package.
#[must_use]
pub fn select_asset<'a>(assets: &'a [ReleaseAsset], config: &ReleaseConfig) -> Option<&'a ReleaseAsset> {
    let ext = config.package_extension.as_str();
    let packages = || assets.iter().filter(move |a| a.name.ends_with(ext));

    packages()
        .find(|a| a.name.contains(&config.arch_marker))
        .or_else(|| packages().find(|a| a.name.contains(&config.universal_marker)))
        .or_else(|| packages().next())
}

/// Why a resolution used the static page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    Lookup(LookupError),
    NoMatchingAsset,
}

/// Outcome of an Android download resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub url: String,
    /// Name of the chosen asset, or why none was chosen.
    pub source: Result<String, FallbackReason>,
}

impl Resolution {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source.is_err()
    }
}

/// Resolve the Android download URL, falling back to the latest release page.
pub async fn resolve_android<R>(source: &R, config: &ReleaseConfig) -> Resolution
where
    R: ReleaseSource + ?Sized,
{
    let fallback = |reason: FallbackReason| {
        log::debug!("release: using static page ({reason:?})");
        Resolution { url: config.latest_release_page_url(), source: Err(reason) }
    };

    let release = match source.latest_release().await {
        Ok(release) => release,
        Err(err) => return fallback(FallbackReason::Lookup(err)),
    };
    match select_asset(&release.assets, config) {
        Some(asset) => Resolution { url: asset.browser_download_url.clone(), source: Ok(asset.name.clone()) },
        None => fallback(FallbackReason::NoMatchingAsset),
    }
}

/// The GitHub releases API.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct GithubReleases {
    api_url: String,
}

#[cfg(feature = "hydrate")]
impl GithubReleases {
    #[must_use]
    pub fn new(config: &ReleaseConfig) -> Self {
        Self { api_url: config.latest_release_api_url() }
    }
}

#[cfg(feature = "hydrate")]
impl ReleaseSource for GithubReleases {
    async fn latest_release(&self) -> Result<Release, LookupError> {
        let resp = gloo_net::http::Request::get(&self.api_url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        let status = resp.status();
        if !(200..300).contains(&status) {
            return Err(LookupError::Status(status));
        }
        resp.json::<Release>()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))
    }
}
