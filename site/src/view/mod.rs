//! View binding: the small DOM capability set the page logic needs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Theme, localization, download, and reveal logic are written against
//! [`ViewBinding`] instead of `web-sys` so they can run natively in tests.
//! The browser implementation is [`web::WebView`] (hydrate only); tests use
//! [`memory::MemoryView`].
//!
//! Mutating methods take `&self`: DOM handles are shared references with
//! interior mutability on both implementations. Writes are best-effort and
//! never fail outward.

#[cfg(test)]
pub mod memory;
#[cfg(feature = "hydrate")]
pub mod web;

/// Root attribute holding the active theme.
pub const THEME_ATTR: &str = "data-theme";

/// Attribute carrying a dotted dictionary key.
pub const I18N_ATTR: &str = "data-i18n";

/// DOM capabilities used by page behavior.
///
/// Selectors are CSS selectors. Implementations only need to support the
/// simple forms this crate uses: `.class`, `#id`, `[attr]`, `tag`, and
/// comma-separated lists of those.
pub trait ViewBinding {
    /// Element handle.
    type Node: Clone;

    /// The document element (`<html>`).
    fn root(&self) -> Option<Self::Node>;
    /// The `<body>` element.
    fn body(&self) -> Option<Self::Node>;
    fn by_id(&self, id: &str) -> Option<Self::Node>;
    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    /// First descendant of `node` matching `selector`.
    fn query_within(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    fn text(&self, node: &Self::Node) -> String;
    fn set_text(&self, node: &Self::Node, text: &str);
    fn markup(&self, node: &Self::Node) -> String;
    fn set_markup(&self, node: &Self::Node, markup: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);

    fn set_style(&self, node: &Self::Node, property: &str, value: &str);
    fn set_disabled(&self, node: &Self::Node, disabled: bool);

    /// Open `url` in a new browsing context.
    fn open_in_new_context(&self, url: &str);
    /// Download `url` through a transient `<a download>` link.
    fn save_via_link(&self, url: &str);
}
