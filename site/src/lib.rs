//! # site
//!
//! WASM behavior layer for the AhKyaway Mhat landing page. The HTML and CSS
//! are static; this crate hydrates them at load time with theme switching,
//! English/Burmese localization, the screenshot carousel (from the
//! `carousel` crate), platform-aware downloads, and scroll effects.
//!
//! Everything that touches the browser sits behind the `hydrate` feature.
//! The remaining modules are plain Rust over the [`view::ViewBinding`] and
//! [`prefs::PreferenceStore`] seams and are tested natively.

pub mod bootstrap;
pub mod config;
pub mod dictionary;
pub mod download;
pub mod error;
pub mod events;
pub mod i18n;
pub mod platform;
pub mod prefs;
pub mod release;
pub mod reveal;
pub mod theme;
pub mod view;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    if let Err(err) = bootstrap::start() {
        web_sys::console::error_2(&wasm_bindgen::JsValue::from_str("landing page bootstrap failed:"), &err);
    }
}
