use crate::config::FxConfig;
use crate::page::Page;

pub const ORB_SELECTOR: &str = ".gradient-orb";

/// Hero orbs drift with the scroll, each a little faster than the previous.
pub struct Parallax<N> {
    orbs: Vec<N>,
    base: f64,
    step: f64,
}

impl<N: Clone + PartialEq> Parallax<N> {
    pub fn attach<P: Page<Node = N>>(page: &P, config: &FxConfig) -> Self {
        Self {
            orbs: page.query_all(ORB_SELECTOR),
            base: config.parallax_base,
            step: config.parallax_step,
        }
    }

    pub fn speed(&self, index: usize) -> f64 {
        self.base + index as f64 * self.step
    }

    pub fn on_scroll<P: Page<Node = N>>(&self, page: &P) {
        let scrolled = page.scroll_y();
        for (index, orb) in self.orbs.iter().enumerate() {
            let offset = scrolled * self.speed(index);
            page.set_style(orb, "transform", &format!("translateY({offset}px)"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakePage;
    use pretty_assertions::assert_eq;

    #[test]
    fn speed_grows_with_index() {
        let page = FakePage::new();
        let parallax = Parallax::attach(&page, &FxConfig::default());
        assert_eq!(parallax.speed(0), 0.5);
        assert!((parallax.speed(2) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn orbs_translate_by_scaled_offset() {
        let page = FakePage::new();
        let first = page.add("div", &["gradient-orb"]);
        let second = page.add("div", &["gradient-orb"]);
        let parallax = Parallax::attach(&page, &FxConfig::default());

        page.set_scroll(200.0);
        parallax.on_scroll(&page);
        assert_eq!(page.style(first, "transform").as_deref(), Some("translateY(100px)"));
        assert_eq!(page.style(second, "transform").as_deref(), Some("translateY(140px)"));

        page.set_scroll(0.0);
        parallax.on_scroll(&page);
        assert_eq!(page.style(first, "transform").as_deref(), Some("translateY(0px)"));
    }
}
