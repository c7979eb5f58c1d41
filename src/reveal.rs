use crate::page::{Intersection, Page, VisibilityOptions};

pub const BLOCK_SELECTOR: &str = ".stat-item, .about-text, .about-image, .skill-category, \
    .timeline-item, .education-card, .cert-card, .contact-method";
pub const VISIBILITY: VisibilityOptions =
    VisibilityOptions::at(0.1).with_margin("0px 0px -100px 0px");

/// Content blocks fade in the first time they scroll into view.
pub struct FadeIn<N> {
    blocks: Vec<N>,
}

impl<N: Clone + PartialEq> FadeIn<N> {
    pub fn attach<P: Page<Node = N>>(page: &P) -> Self {
        Self {
            blocks: page.query_all(BLOCK_SELECTOR),
        }
    }

    pub fn observed(&self) -> Vec<N> {
        self.blocks.clone()
    }

    pub fn on_intersections<P: Page<Node = N>>(&self, page: &P, entries: &[Intersection<N>]) {
        for entry in entries.iter().filter(|entry| entry.is_intersecting) {
            page.add_class(&entry.target, "fade-in");
        }
    }
}
