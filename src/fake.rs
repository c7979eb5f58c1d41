//! In-memory page used by the unit tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Default)]
struct FakeElement {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    inner_html: Option<String>,
    offset_top: f64,
}

#[derive(Debug)]
struct FakeDom {
    elements: Vec<FakeElement>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    scroll_y: f64,
    scroll_requests: Vec<f64>,
}

impl FakeDom {
    fn new() -> Self {
        let mut dom = Self {
            elements: Vec::new(),
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            scroll_y: 0.0,
            scroll_requests: Vec::new(),
        };
        dom.root = dom.create("html");
        dom.head = dom.create("head");
        dom.body = dom.create("body");
        dom.append(dom.root, dom.head);
        dom.append(dom.root, dom.body);
        dom
    }

    fn create(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.elements.len());
        self.elements.push(FakeElement {
            tag: tag.to_ascii_lowercase(),
            ..FakeElement::default()
        });
        id
    }

    fn append(&mut self, parent: NodeId, child: NodeId) {
        if let Some(previous) = self.elements[child.0].parent.take() {
            self.elements[previous.0].children.retain(|id| *id != child);
        }
        self.elements[child.0].parent = Some(parent);
        self.elements[parent.0].children.push(child);
    }

    fn is_attached(&self, node: NodeId) -> bool {
        let mut current = node;
        loop {
            if current == self.root {
                return true;
            }
            match self.elements[current.0].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Nodes in document order, like `querySelectorAll`.
    fn document_order(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.elements[node.0].children.iter().rev().copied());
        }
        out
    }

    fn matches(&self, node: NodeId, selector: &SimpleSelector) -> bool {
        let element = &self.elements[node.0];
        if let Some(tag) = &selector.tag {
            if &element.tag != tag {
                return false;
            }
        }
        if let Some(id) = &selector.id {
            if element.attrs.get("id") != Some(id) {
                return false;
            }
        }
        selector
            .classes
            .iter()
            .all(|class| element.classes.contains(class))
            && selector
                .attrs
                .iter()
                .all(|name| element.attrs.contains_key(name))
    }

    fn select(&self, selector: &str) -> Vec<NodeId> {
        let parsed: Vec<SimpleSelector> = selector
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(SimpleSelector::parse)
            .collect();
        self.document_order()
            .into_iter()
            .filter(|node| self.is_attached(*node))
            .filter(|node| parsed.iter().any(|simple| self.matches(*node, simple)))
            .collect()
    }
}

#[derive(Debug, Default)]
struct SimpleSelector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<String>,
}

impl SimpleSelector {
    fn parse(raw: &str) -> Self {
        let is_marker = |c: char| matches!(c, '.' | '#' | '[');
        let mut selector = Self::default();
        let end = raw.find(is_marker).unwrap_or(raw.len());
        if end > 0 {
            selector.tag = Some(raw[..end].to_ascii_lowercase());
        }
        let mut rest = &raw[end..];
        while let Some(marker) = rest.chars().next() {
            match marker {
                '[' => {
                    let close = rest.find(']').unwrap_or(rest.len());
                    selector.attrs.push(rest[1..close].to_string());
                    rest = &rest[(close + 1).min(rest.len())..];
                }
                '.' | '#' => {
                    let body = &rest[1..];
                    let end = body.find(is_marker).unwrap_or(body.len());
                    let name = body[..end].to_string();
                    if marker == '.' {
                        selector.classes.push(name);
                    } else {
                        selector.id = Some(name);
                    }
                    rest = &body[end..];
                }
                _ => break,
            }
        }
        selector
    }
}

#[derive(Clone)]
pub(crate) struct FakePage {
    dom: Rc<RefCell<FakeDom>>,
}

impl FakePage {
    pub(crate) fn new() -> Self {
        Self {
            dom: Rc::new(RefCell::new(FakeDom::new())),
        }
    }

    pub(crate) fn body_id(&self) -> NodeId {
        self.dom.borrow().body
    }

    pub(crate) fn head_id(&self) -> NodeId {
        self.dom.borrow().head
    }

    /// Appends a new element to the body.
    pub(crate) fn add(&self, tag: &str, classes: &[&str]) -> NodeId {
        let body = self.body_id();
        self.add_to(body, tag, classes)
    }

    pub(crate) fn add_to(&self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let mut dom = self.dom.borrow_mut();
        let node = dom.create(tag);
        dom.elements[node.0].classes = classes.iter().map(|class| class.to_string()).collect();
        dom.append(parent, node);
        node
    }

    pub(crate) fn attr(&self, node: NodeId, name: &str, value: &str) -> NodeId {
        self.set_attribute(&node, name, value);
        node
    }

    pub(crate) fn offset(&self, node: NodeId, top: f64) -> NodeId {
        self.dom.borrow_mut().elements[node.0].offset_top = top;
        node
    }

    pub(crate) fn with_text(&self, node: NodeId, text: &str) -> NodeId {
        self.set_text(&node, text);
        node
    }

    pub(crate) fn set_scroll(&self, y: f64) {
        self.dom.borrow_mut().scroll_y = y;
    }

    pub(crate) fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.dom.borrow().elements[node.0]
            .styles
            .get(property)
            .cloned()
    }

    pub(crate) fn classes(&self, node: NodeId) -> Vec<String> {
        self.dom.borrow().elements[node.0].classes.clone()
    }

    pub(crate) fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.dom.borrow().elements[node.0].children.clone()
    }

    pub(crate) fn inner_html(&self, node: NodeId) -> Option<String> {
        self.dom.borrow().elements[node.0].inner_html.clone()
    }

    pub(crate) fn scroll_requests(&self) -> Vec<f64> {
        self.dom.borrow().scroll_requests.clone()
    }
}

impl Page for FakePage {
    type Node = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.dom.borrow().select(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.dom.borrow().select(selector)
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        self.query(&format!("#{id}"))
    }

    fn head(&self) -> Option<NodeId> {
        Some(self.head_id())
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.body_id())
    }

    fn create_element(&self, tag: &str) -> Option<NodeId> {
        Some(self.dom.borrow_mut().create(tag))
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) {
        self.dom.borrow_mut().append(*parent, *child);
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let dom = self.dom.borrow();
        let element = &dom.elements[node.0];
        if name == "class" {
            return Some(element.classes.join(" "));
        }
        element.attrs.get(name).cloned()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        let mut dom = self.dom.borrow_mut();
        let element = &mut dom.elements[node.0];
        if name == "class" {
            element.classes = value.split_whitespace().map(str::to_string).collect();
        } else {
            element.attrs.insert(name.to_string(), value.to_string());
        }
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        let mut dom = self.dom.borrow_mut();
        let styles = &mut dom.elements[node.0].styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut dom = self.dom.borrow_mut();
        let classes = &mut dom.elements[node.0].classes;
        if !classes.iter().any(|existing| existing == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.dom.borrow_mut().elements[node.0]
            .classes
            .retain(|existing| existing != class);
    }

    fn toggle_class(&self, node: &NodeId, class: &str) {
        let present = self.has_class(node, class);
        self.set_class(node, class, !present);
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.dom.borrow().elements[node.0]
            .classes
            .iter()
            .any(|existing| existing == class)
    }

    fn text(&self, node: &NodeId) -> String {
        self.dom.borrow().elements[node.0].text.clone()
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.dom.borrow_mut().elements[node.0].text = text.to_string();
    }

    fn set_inner_html(&self, node: &NodeId, html: &str) {
        self.dom.borrow_mut().elements[node.0].inner_html = Some(html.to_string());
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.dom.borrow().elements[node.0].offset_top
    }

    fn scroll_y(&self) -> f64 {
        self.dom.borrow().scroll_y
    }

    fn scroll_to(&self, top: f64) {
        let mut dom = self.dom.borrow_mut();
        dom.scroll_requests.push(top);
        dom.scroll_y = top;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn selector_lists_match_in_document_order() {
        let page = FakePage::new();
        let about = page.add("div", &["about-text"]);
        let section = page.attr(page.add("section", &[]), "id", "skills");
        let card = page.add_to(section, "div", &["cert-card", "wide"]);
        let _plain = page.add("section", &[]);

        assert_eq!(
            page.query_all(".cert-card, .about-text"),
            vec![about, card]
        );
        assert_eq!(page.query_all("section[id]"), vec![section]);
        assert_eq!(page.query("div.cert-card.wide"), Some(card));
        assert_eq!(page.by_id("skills"), Some(section));
    }

    #[test]
    fn detached_elements_are_not_found() {
        let page = FakePage::new();
        let orphan = page.create_element("div").unwrap();
        page.add_class(&orphan, "gradient-orb");
        assert_eq!(page.query(".gradient-orb"), None);

        let body = page.body_id();
        page.append_child(&body, &orphan);
        assert_eq!(page.query(".gradient-orb"), Some(orphan));
    }
}
