//! Page localization: English and Burmese.
//!
//! Elements tagged `data-i18n="dotted.key"` get their content replaced with
//! the active language's string. Strings containing `<` are written as
//! markup (the hero title carries a `<br>` and a styled `<span>`), all
//! others as plain text. Unknown keys leave the element untouched.
//!
//! TRADE-OFFS
//! ==========
//! A stored language code that is neither `en` nor `my` is treated as the
//! configured default for rendering and toggling. The stored value itself is
//! left alone until the visitor toggles.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use serde::Deserialize;

use crate::dictionary::Dictionary;
use crate::prefs::PreferenceStore;
use crate::view::{I18N_ATTR, ViewBinding};

/// Id of the language toggle button.
pub const LANG_TOGGLE_ID: &str = "lang-toggle";
const FLAG_SELECTOR: &str = ".flag-icon";

/// Supported page languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    My,
}

impl Language {
    /// Storage / dictionary code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::My => "my",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "en" => Some(Self::En),
            "my" => Some(Self::My),
            _ => None,
        }
    }

    /// The other supported language.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::My,
            Self::My => Self::En,
        }
    }

    /// Flag shown on the toggle while this language is active.
    #[must_use]
    pub fn flag(self) -> &'static str {
        match self {
            Self::En => "🇺🇸",
            Self::My => "🇲🇲",
        }
    }
}

/// Write `lang` into every tagged element, the root `lang` attribute, and the toggle flag.
///
/// Returns how many tagged elements were updated.
pub fn apply<V: ViewBinding>(view: &V, dictionary: &Dictionary, lang: Language) -> usize {
    let mut updated = 0;
    for node in view.query_all(&format!("[{I18N_ATTR}]")) {
        let Some(key) = view.attribute(&node, I18N_ATTR) else {
            continue;
        };
        let Some(value) = dictionary.resolve(lang, &key) else {
            log::debug!("i18n: no {} string for {key:?}", lang.code());
            continue;
        };
        if value.contains('<') {
            view.set_markup(&node, value);
        } else {
            view.set_text(&node, value);
        }
        updated += 1;
    }

    if let Some(root) = view.root() {
        view.set_attribute(&root, "lang", lang.code());
    }
    if let Some(toggle) = view.by_id(LANG_TOGGLE_ID)
        && let Some(flag) = view.query_within(&toggle, FLAG_SELECTOR)
    {
        view.set_text(&flag, lang.flag());
    }
    updated
}

/// The stored language, normalized to a supported one.
pub fn stored_language<S: PreferenceStore + ?Sized>(store: &S, key: &str, default: Language) -> Language {
    match store.get(key) {
        None => default,
        Some(raw) => Language::parse(&raw).unwrap_or_else(|| {
            log::debug!("i18n: unsupported stored language {raw:?}, using {}", default.code());
            default
        }),
    }
}

/// Apply the stored (or default) language at page load.
pub fn initialize<V, S>(view: &V, store: &S, key: &str, dictionary: &Dictionary, default: Language) -> Language
where
    V: ViewBinding,
    S: PreferenceStore + ?Sized,
{
    let lang = stored_language(store, key, default);
    apply(view, dictionary, lang);
    lang
}

/// Switch to the other language, persist it, and re-apply.
pub fn toggle<V, S>(view: &V, store: &S, key: &str, dictionary: &Dictionary, default: Language) -> Language
where
    V: ViewBinding,
    S: PreferenceStore + ?Sized,
{
    let next = stored_language(store, key, default).toggled();
    store.set(key, next.code());
    apply(view, dictionary, next);
    next
}
