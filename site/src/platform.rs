//! Client platform detection from user-agent and platform strings.

#[cfg(test)]
#[path = "platform_test.rs"]
mod platform_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    MacOs,
    Windows,
    Linux,
    /// Anything else; served the releases page.
    Web,
}

impl Platform {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Web => "web",
        }
    }

    /// Whether downloads for this platform are resolved against the latest release.
    #[must_use]
    pub fn resolves_dynamically(self) -> bool {
        self == Self::Android
    }
}

/// Classify the client. Mobile user agents win over desktop platform strings,
/// and Android wins over iOS.
#[must_use]
pub fn detect(user_agent: &str, platform: &str) -> Platform {
    let ua = user_agent.to_lowercase();
    let platform = platform.to_lowercase();

    if ua.contains("android") {
        return Platform::Android;
    }
    if ["iphone", "ipad", "ipod"].iter().any(|m| ua.contains(m)) {
        return Platform::Ios;
    }

    if platform.contains("win") {
        Platform::Windows
    } else if platform.contains("mac") {
        Platform::MacOs
    } else if platform.contains("linux") {
        Platform::Linux
    } else {
        Platform::Web
    }
}

/// Detect from `navigator`.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn detect_browser(window: &web_sys::Window) -> Platform {
    let navigator = window.navigator();
    let user_agent = navigator.user_agent().unwrap_or_default();
    let platform = navigator.platform().unwrap_or_default();
    detect(&user_agent, &platform)
}
