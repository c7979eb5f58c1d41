use crate::config::FxConfig;
use crate::page::Page;

pub const HEADER_ID: &str = "main-nav";
pub const TOGGLE_ID: &str = "navToggle";
pub const MENU_ID: &str = "navMenu";
pub const LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";

/// Mobile menu, in-page smooth scrolling and scroll-spy for the header links.
pub struct Navigation<N> {
    header: Option<N>,
    toggle: Option<N>,
    menu: Option<N>,
    links: Vec<N>,
    header_offset: f64,
    scrolled_threshold: f64,
    section_lookahead: f64,
}

impl<N: Clone + PartialEq> Navigation<N> {
    pub fn attach<P: Page<Node = N>>(page: &P, config: &FxConfig) -> Self {
        Self {
            header: page.by_id(HEADER_ID),
            toggle: page.by_id(TOGGLE_ID),
            menu: page.by_id(MENU_ID),
            links: page.query_all(LINK_SELECTOR),
            header_offset: config.header_offset,
            scrolled_threshold: config.scrolled_threshold,
            section_lookahead: config.section_lookahead,
        }
    }

    pub fn links(&self) -> &[N] {
        &self.links
    }

    pub fn toggle(&self) -> Option<&N> {
        self.toggle.as_ref()
    }

    pub fn on_toggle<P: Page<Node = N>>(&self, page: &P) {
        if let Some(menu) = &self.menu {
            page.toggle_class(menu, "active");
        }
        if let Some(toggle) = &self.toggle {
            page.toggle_class(toggle, "active");
        }
    }

    /// Closes the mobile menu and scrolls to the linked section, keeping it
    /// clear of the fixed header. The caller cancels the default navigation.
    pub fn on_link_click<P: Page<Node = N>>(&self, page: &P, link: &N) {
        self.close_menu(page);
        let Some(href) = page.attribute(link, "href") else {
            return;
        };
        let Some(section_id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
            return;
        };
        if let Some(section) = page.by_id(section_id) {
            page.scroll_to(page.offset_top(&section) - self.header_offset);
        }
    }

    pub fn on_scroll<P: Page<Node = N>>(&self, page: &P) {
        let scroll_y = page.scroll_y();
        if let Some(header) = &self.header {
            page.set_class(header, "scrolled", scroll_y > self.scrolled_threshold);
        }

        let sections: Vec<(String, f64)> = page
            .query_all(SECTION_SELECTOR)
            .iter()
            .filter_map(|section| {
                let id = page.attribute(section, "id")?;
                Some((id, page.offset_top(section)))
            })
            .collect();
        let current = current_section(&sections, scroll_y, self.section_lookahead)
            .map(|id| format!("#{id}"));

        for link in &self.links {
            let active = current.is_some() && page.attribute(link, "href") == current;
            page.set_class(link, "active", active);
        }
    }

    fn close_menu<P: Page<Node = N>>(&self, page: &P) {
        if let Some(menu) = &self.menu {
            page.remove_class(menu, "active");
        }
        if let Some(toggle) = &self.toggle {
            page.remove_class(toggle, "active");
        }
    }
}

/// The last section (in document order) whose top, pulled up by `lookahead`,
/// is at or above the scroll position.
pub fn current_section(sections: &[(String, f64)], scroll_y: f64, lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|(_, top)| scroll_y >= top - lookahead)
        .map(|(id, _)| id.as_str())
}
