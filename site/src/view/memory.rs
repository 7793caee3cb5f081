//! In-memory [`ViewBinding`] for native tests.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::ViewBinding;

#[derive(Debug, Clone, Default)]
struct MemNode {
    tag: String,
    parent: Option<usize>,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    text: String,
    markup: Option<String>,
    disabled: bool,
}

/// A flat element arena with parent links. Index 0 is `<html>`, 1 is `<body>`.
#[derive(Debug)]
pub struct MemoryView {
    nodes: RefCell<Vec<MemNode>>,
    opened: RefCell<Vec<String>>,
    saved: RefCell<Vec<String>>,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryView {
    pub const ROOT: usize = 0;
    pub const BODY: usize = 1;

    pub fn new() -> Self {
        let root = MemNode { tag: "html".into(), ..MemNode::default() };
        let body = MemNode { tag: "body".into(), parent: Some(Self::ROOT), ..MemNode::default() };
        Self { nodes: RefCell::new(vec![root, body]), opened: RefCell::default(), saved: RefCell::default() }
    }

    /// Append a `tag` element under `<body>`.
    pub fn add(&self, tag: &str) -> usize {
        self.add_child(Self::BODY, tag)
    }

    /// Append a `tag` element under `parent`.
    pub fn add_child(&self, parent: usize, tag: &str) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(MemNode { tag: tag.into(), parent: Some(parent), ..MemNode::default() });
        nodes.len() - 1
    }

    /// Append an element with an `id` under `<body>`.
    pub fn add_with_id(&self, tag: &str, id: &str) -> usize {
        let node = self.add(tag);
        self.set_attribute(&node, "id", id);
        node
    }

    pub fn style(&self, node: usize, property: &str) -> Option<String> {
        self.nodes.borrow()[node].styles.get(property).cloned()
    }

    pub fn is_disabled(&self, node: usize) -> bool {
        self.nodes.borrow()[node].disabled
    }

    /// URLs passed to [`ViewBinding::open_in_new_context`].
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    /// URLs passed to [`ViewBinding::save_via_link`].
    pub fn saved(&self) -> Vec<String> {
        self.saved.borrow().clone()
    }

    fn matches(node: &MemNode, selector: &str) -> bool {
        selector.split(',').map(str::trim).any(|simple| {
            if let Some(class) = simple.strip_prefix('.') {
                node.classes.iter().any(|c| c == class)
            } else if let Some(id) = simple.strip_prefix('#') {
                node.attrs.get("id").is_some_and(|v| v == id)
            } else if let Some(attr) = simple.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
                node.attrs.contains_key(attr)
            } else {
                node.tag == simple
            }
        })
    }

    fn is_descendant(nodes: &[MemNode], mut node: usize, ancestor: usize) -> bool {
        while let Some(parent) = nodes[node].parent {
            if parent == ancestor {
                return true;
            }
            node = parent;
        }
        false
    }
}

impl ViewBinding for MemoryView {
    type Node = usize;

    fn root(&self) -> Option<usize> {
        Some(Self::ROOT)
    }

    fn body(&self) -> Option<usize> {
        Some(Self::BODY)
    }

    fn by_id(&self, id: &str) -> Option<usize> {
        self.nodes.borrow().iter().position(|n| n.attrs.get("id").is_some_and(|v| v == id))
    }

    fn query_all(&self, selector: &str) -> Vec<usize> {
        let nodes = self.nodes.borrow();
        (0..nodes.len()).filter(|&i| Self::matches(&nodes[i], selector)).collect()
    }

    fn query_within(&self, node: &usize, selector: &str) -> Option<usize> {
        let nodes = self.nodes.borrow();
        (0..nodes.len()).find(|&i| Self::is_descendant(&nodes, i, *node) && Self::matches(&nodes[i], selector))
    }

    fn attribute(&self, node: &usize, name: &str) -> Option<String> {
        self.nodes.borrow()[*node].attrs.get(name).cloned()
    }

    fn set_attribute(&self, node: &usize, name: &str, value: &str) {
        self.nodes.borrow_mut()[*node].attrs.insert(name.into(), value.into());
    }

    fn text(&self, node: &usize) -> String {
        self.nodes.borrow()[*node].text.clone()
    }

    fn set_text(&self, node: &usize, text: &str) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[*node].text = text.into();
        nodes[*node].markup = None;
    }

    fn markup(&self, node: &usize) -> String {
        let nodes = self.nodes.borrow();
        nodes[*node].markup.clone().unwrap_or_else(|| nodes[*node].text.clone())
    }

    fn set_markup(&self, node: &usize, markup: &str) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[*node].markup = Some(markup.into());
        nodes[*node].text = markup.into();
    }

    fn has_class(&self, node: &usize, class: &str) -> bool {
        self.nodes.borrow()[*node].classes.iter().any(|c| c == class)
    }

    fn add_class(&self, node: &usize, class: &str) {
        if !self.has_class(node, class) {
            self.nodes.borrow_mut()[*node].classes.push(class.into());
        }
    }

    fn remove_class(&self, node: &usize, class: &str) {
        self.nodes.borrow_mut()[*node].classes.retain(|c| c != class);
    }

    fn set_style(&self, node: &usize, property: &str, value: &str) {
        self.nodes.borrow_mut()[*node].styles.insert(property.into(), value.into());
    }

    fn set_disabled(&self, node: &usize, disabled: bool) {
        self.nodes.borrow_mut()[*node].disabled = disabled;
    }

    fn open_in_new_context(&self, url: &str) {
        self.opened.borrow_mut().push(url.into());
    }

    fn save_via_link(&self, url: &str) {
        self.saved.borrow_mut().push(url.into());
    }
}
