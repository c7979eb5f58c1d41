/// The slice of the DOM the effects need. Every method is infallible from the
/// caller's point of view: a platform failure degrades to a no-op or `None`.
pub trait Page: Clone + 'static {
    type Node: Clone + PartialEq + 'static;

    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn by_id(&self, id: &str) -> Option<Self::Node>;

    fn head(&self) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;
    fn create_element(&self, tag: &str) -> Option<Self::Node>;
    fn append_child(&self, parent: &Self::Node, child: &Self::Node);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    fn toggle_class(&self, node: &Self::Node, class: &str);
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn set_class(&self, node: &Self::Node, class: &str, enabled: bool) {
        if enabled {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    fn text(&self, node: &Self::Node) -> String;
    fn set_text(&self, node: &Self::Node, text: &str);
    fn set_inner_html(&self, node: &Self::Node, html: &str);

    fn offset_top(&self, node: &Self::Node) -> f64;
    fn scroll_y(&self) -> f64;
    /// Smooth-scrolls the viewport so its top edge lands at `top`.
    fn scroll_to(&self, top: f64);
}

/// One visibility change reported by the platform observer.
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection<N> {
    pub target: N,
    pub is_intersecting: bool,
}

impl<N> Intersection<N> {
    pub fn new(target: N, is_intersecting: bool) -> Self {
        Self {
            target,
            is_intersecting,
        }
    }
}

/// Options handed to the platform visibility observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl VisibilityOptions {
    pub const fn at(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: "0px",
        }
    }

    pub const fn with_margin(self, root_margin: &'static str) -> Self {
        Self {
            threshold: self.threshold,
            root_margin,
        }
    }
}
