//! Browser [`ViewBinding`] over `web-sys`.
//!
//! DOM writes that fail (detached nodes, blocked popups) are logged at
//! `debug` and otherwise ignored; the page keeps its static content.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlAnchorElement, HtmlButtonElement, HtmlElement};

use super::ViewBinding;

fn note(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        log::debug!("view: {what} failed: {err:?}");
    }
}

#[derive(Debug, Clone)]
pub struct WebView {
    document: Document,
}

impl WebView {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn click_transient_link(&self, url: &str) -> Result<(), JsValue> {
        let body = self.document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
        let link = self.document.create_element("a")?.dyn_into::<HtmlAnchorElement>()?;
        link.set_href(url);
        link.set_download("");
        link.set_target("_blank");
        body.append_child(&link)?;
        link.click();
        body.remove_child(&link)?;
        Ok(())
    }
}

impl ViewBinding for WebView {
    type Node = Element;

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::debug!("view: bad selector {selector:?}: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| match node.dyn_into::<Element>() {
                Ok(el) => Some(el),
                Err(other) => {
                    log::debug!("view: non-element match for {selector:?}: {other:?}");
                    None
                }
            })
            .collect()
    }

    fn query_within(&self, node: &Element, selector: &str) -> Option<Element> {
        match node.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::debug!("view: bad selector {selector:?}: {err:?}");
                None
            }
        }
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        note(node.set_attribute(name, value), "set_attribute");
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn markup(&self, node: &Element) -> String {
        node.inner_html()
    }

    fn set_markup(&self, node: &Element, markup: &str) {
        node.set_inner_html(markup);
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        note(node.class_list().add_1(class), "add_class");
    }

    fn remove_class(&self, node: &Element, class: &str) {
        note(node.class_list().remove_1(class), "remove_class");
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            note(el.style().set_property(property, value), "set_style");
        }
    }

    fn set_disabled(&self, node: &Element, disabled: bool) {
        if let Some(button) = node.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            note(node.set_attribute("disabled", ""), "set_disabled");
        } else {
            note(node.remove_attribute("disabled"), "set_disabled");
        }
    }

    fn open_in_new_context(&self, url: &str) {
        let Some(window) = self.document.default_view() else {
            return;
        };
        note(window.open_with_url_and_target(url, "_blank").map(|_| ()), "open");
    }

    fn save_via_link(&self, url: &str) {
        note(self.click_transient_link(url), "save_via_link");
    }
}
