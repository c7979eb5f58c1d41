use crate::page::{Intersection, Page, VisibilityOptions};

pub const BAR_SELECTOR: &str = ".skill-progress";
pub const PROGRESS_ATTRIBUTE: &str = "data-progress";
pub const VISIBILITY: VisibilityOptions = VisibilityOptions::at(0.5);

/// Fills each skill bar to its `data-progress` percentage once it shows.
pub struct SkillBars<N> {
    bars: Vec<N>,
}

impl<N: Clone + PartialEq> SkillBars<N> {
    pub fn attach<P: Page<Node = N>>(page: &P) -> Self {
        Self {
            bars: page.query_all(BAR_SELECTOR),
        }
    }

    pub fn observed(&self) -> Vec<N> {
        self.bars.clone()
    }

    pub fn on_intersections<P: Page<Node = N>>(&self, page: &P, entries: &[Intersection<N>]) {
        for entry in entries.iter().filter(|entry| entry.is_intersecting) {
            if let Some(progress) = page.attribute(&entry.target, PROGRESS_ATTRIBUTE) {
                page.set_style(&entry.target, "width", &format!("{progress}%"));
            }
        }
    }
}
