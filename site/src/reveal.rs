//! Scroll effects: nav highlighting, fade-in reveals, smooth anchor scrolling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two intersection observers drive this module in the browser. The section
//! observer publishes [`PageEvent::SectionInFocus`] and the page highlights
//! the matching `.nav-link`. The reveal observer adds `visible` to `.reveal`
//! elements directly. A passive scroll listener forces the home link active
//! near the top of the page, where no section reaches the threshold.
//!
//! Reveal is one-way: once `visible`, an element stays visible.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::view::ViewBinding;

/// Links highlighted by section visibility.
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
/// Sections tracked for nav highlighting.
pub const SECTION_SELECTOR: &str = "section[id]";
/// In-page anchors that scroll smoothly.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub const REVEAL_CLASS: &str = "reveal";
pub const VISIBLE_CLASS: &str = "visible";
const ACTIVE_CLASS: &str = "active";

/// Whether an intersection sample has its target at least `threshold` visible.
///
/// Observers also fire on the way out, while the target still intersects
/// below the threshold; those samples don't count.
#[must_use]
pub fn crosses_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

/// Make the links pointing at `href` the only active nav links.
///
/// Returns whether any link matched.
pub fn highlight_href<V: ViewBinding>(view: &V, href: &str) -> bool {
    let mut matched = false;
    for link in view.query_all(NAV_LINK_SELECTOR) {
        if view.attribute(&link, "href").as_deref() == Some(href) {
            view.add_class(&link, ACTIVE_CLASS);
            matched = true;
        } else {
            view.remove_class(&link, ACTIVE_CLASS);
        }
    }
    matched
}

/// Highlight the nav link for section `id`.
pub fn highlight_section<V: ViewBinding>(view: &V, id: &str) -> bool {
    highlight_href(view, &format!("#{id}"))
}

/// Scroll hook: near the top the home link is forced active.
///
/// Returns whether the highlight was touched.
pub fn on_scroll<V: ViewBinding>(view: &V, home_offset_px: f64, home_href: &str, scroll_y: f64) -> bool {
    if scroll_y >= home_offset_px {
        return false;
    }
    highlight_href(view, home_href);
    true
}

/// Mark `node` visible. Returns `false` if it already was.
pub fn reveal<V: ViewBinding>(view: &V, node: &V::Node) -> bool {
    if view.has_class(node, VISIBLE_CLASS) {
        return false;
    }
    view.add_class(node, VISIBLE_CLASS);
    true
}

/// Add the `reveal` class to every element matching one of `selectors`.
///
/// Runs before the reveal observer is installed so tagged elements are observed.
pub fn tag_reveal_targets<V: ViewBinding>(view: &V, selectors: &[String]) -> usize {
    if selectors.is_empty() {
        return 0;
    }
    let targets = view.query_all(&selectors.join(", "));
    for node in &targets {
        view.add_class(node, REVEAL_CLASS);
    }
    targets.len()
}

/// Element id an in-page anchor points at. `#` alone points nowhere.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(feature = "hydrate")]
pub use browser::{install_reveal_observer, install_section_observer, install_smooth_scroll};

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use carousel::dom::listen;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{
        Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
        ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    };

    use super::{ANCHOR_SELECTOR, REVEAL_CLASS, SECTION_SELECTOR, anchor_target, crosses_threshold, reveal};
    use crate::config::RevealConfig;
    use crate::events::{EventBus, PageEvent};
    use crate::view::ViewBinding;
    use crate::view::web::WebView;

    type EntryHandler = Box<dyn Fn(&IntersectionObserverEntry)>;

    fn observe_all(
        view: &WebView,
        selector: &str,
        init: &IntersectionObserverInit,
        on_entry: EntryHandler,
    ) -> Result<usize, JsValue> {
        let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() {
                        on_entry(entry);
                    }
                }
            },
        );
        let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), init)?;
        cb.forget();

        let targets = view.query_all(selector);
        for target in &targets {
            observer.observe(target);
        }
        Ok(targets.len())
    }

    /// Publish [`PageEvent::SectionInFocus`] as sections cross the nav threshold.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the observer cannot be created.
    pub fn install_section_observer(
        view: &WebView,
        config: &RevealConfig,
        bus: Rc<EventBus<PageEvent>>,
    ) -> Result<usize, JsValue> {
        let threshold = config.nav_threshold;
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin("0px");

        observe_all(
            view,
            SECTION_SELECTOR,
            &init,
            Box::new(move |entry: &IntersectionObserverEntry| {
                if crosses_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                    bus.publish(&PageEvent::SectionInFocus { id: entry.target().id() });
                }
            }),
        )
    }

    /// Fade in `.reveal` elements as they enter the viewport.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the observer cannot be created.
    pub fn install_reveal_observer(view: &WebView, config: &RevealConfig) -> Result<usize, JsValue> {
        let threshold = config.reveal_threshold;
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(&config.reveal_root_margin);

        let target_view = view.clone();
        observe_all(
            view,
            &format!(".{REVEAL_CLASS}"),
            &init,
            Box::new(move |entry: &IntersectionObserverEntry| {
                if crosses_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                    reveal(&target_view, &entry.target());
                }
            }),
        )
    }

    fn scroll_to(document: &Document, href: &str) {
        let Some(target) = anchor_target(href).and_then(|id| document.get_element_by_id(id)) else {
            log::debug!("reveal: no scroll target for {href:?}");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }

    /// Smooth-scroll every in-page anchor to its target.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a click listener cannot be registered.
    pub fn install_smooth_scroll(view: &WebView) -> Result<usize, JsValue> {
        let anchors: Vec<Element> = view.query_all(ANCHOR_SELECTOR);
        for anchor in &anchors {
            let document = view.document().clone();
            let href = anchor.get_attribute("href").unwrap_or_default();
            listen(anchor, "click", None, move |event| {
                event.prevent_default();
                scroll_to(&document, &href);
            })?;
        }
        Ok(anchors.len())
    }
}
