use crate::config::FxConfig;
use crate::page::Page;

pub const BUTTON_CLASS: &str = "back-to-top";
const ICON: &str = r#"<i class="fas fa-arrow-up"></i>"#;

pub struct BackToTop<N> {
    button: Option<N>,
    threshold: f64,
}

impl<N: Clone + PartialEq> BackToTop<N> {
    /// Creates the floating button and appends it to the body.
    pub fn create<P: Page<Node = N>>(page: &P, config: &FxConfig) -> Self {
        let button = page.body().and_then(|body| {
            let button = page.create_element("button")?;
            page.set_attribute(&button, "class", BUTTON_CLASS);
            page.set_inner_html(&button, ICON);
            page.set_attribute(&button, "aria-label", "Back to top");
            page.append_child(&body, &button);
            Some(button)
        });
        Self {
            button,
            threshold: config.back_to_top_threshold,
        }
    }

    pub fn button(&self) -> Option<&N> {
        self.button.as_ref()
    }

    pub fn on_scroll<P: Page<Node = N>>(&self, page: &P) {
        if let Some(button) = &self.button {
            page.set_class(button, "visible", page.scroll_y() > self.threshold);
        }
    }

    pub fn on_click<P: Page<Node = N>>(&self, page: &P) {
        page.scroll_to(0.0);
    }
}
