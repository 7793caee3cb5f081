//! Light/dark theme initialization and toggle.
//!
//! The active theme is the `data-theme` attribute on `<html>`; CSS keys off
//! it. The visitor's choice is persisted; without one, the system
//! `prefers-color-scheme` hint decides.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::prefs::PreferenceStore;
use crate::view::{THEME_ATTR, ViewBinding};

/// Body transition applied on toggle so the color swap fades.
pub const TOGGLE_TRANSITION: &str = "background-color 0.5s ease, color 0.5s ease";

/// Id of the theme toggle button.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_dark_hint(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

fn set_root_theme<V: ViewBinding>(view: &V, theme: Theme) {
    if let Some(root) = view.root() {
        view.set_attribute(&root, THEME_ATTR, theme.as_str());
    }
}

/// Apply the stored theme, or the system hint when none is stored.
pub fn initialize<V, S>(view: &V, store: &S, key: &str, prefers_dark: bool) -> Theme
where
    V: ViewBinding,
    S: PreferenceStore + ?Sized,
{
    let theme = store
        .get(key)
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_else(|| Theme::from_dark_hint(prefers_dark));
    set_root_theme(view, theme);
    theme
}

/// The theme currently on the root element. Anything but `dark` reads as light.
pub fn current<V: ViewBinding>(view: &V) -> Theme {
    let attr = view.root().and_then(|root| view.attribute(&root, THEME_ATTR));
    match attr.as_deref() {
        Some("dark") => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Flip the theme, persist it, and fade the body colors.
pub fn toggle<V, S>(view: &V, store: &S, key: &str) -> Theme
where
    V: ViewBinding,
    S: PreferenceStore + ?Sized,
{
    let next = current(view).toggled();
    set_root_theme(view, next);
    store.set(key, next.as_str());
    if let Some(body) = view.body() {
        view.set_style(&body, "transition", TOGGLE_TRANSITION);
    }
    next
}

/// System dark-mode hint from `prefers-color-scheme`.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn system_prefers_dark(window: &web_sys::Window) -> bool {
    match window.match_media("(prefers-color-scheme: dark)") {
        Ok(Some(query)) => query.matches(),
        _ => false,
    }
}
