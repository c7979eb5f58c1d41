use std::cell::RefCell;
use std::rc::Rc;

use crate::back_to_top::BackToTop;
use crate::clock::Scheduler;
use crate::config::FxConfig;
use crate::cursor_trail::{self, CursorTrail};
use crate::konami::EasterEgg;
use crate::nav::Navigation;
use crate::page::{Intersection, Page};
use crate::parallax::Parallax;
use crate::reveal::FadeIn;
use crate::skills::SkillBars;
use crate::stats::StatsCounter;
use crate::styles::{self, BASE_STYLES, BASE_STYLE_ID};
use crate::typing;

/// Every page effect, wired to one page. Platform bindings route browser
/// events into the `on_*` methods.
pub struct Effects<P: Page, S: Scheduler> {
    page: P,
    scheduler: S,
    pub nav: Navigation<P::Node>,
    pub parallax: Parallax<P::Node>,
    pub stats: StatsCounter<P::Node>,
    pub skills: SkillBars<P::Node>,
    pub fade_in: FadeIn<P::Node>,
    pub back_to_top: BackToTop<P::Node>,
    pub easter_egg: EasterEgg,
    pub cursor_trail: Option<Rc<RefCell<CursorTrail>>>,
    typing: bool,
}

impl<P: Page, S: Scheduler> Effects<P, S> {
    pub fn install(page: P, scheduler: S, config: &FxConfig) -> Self {
        greet();
        styles::inject(&page, BASE_STYLE_ID, BASE_STYLES);
        let back_to_top = BackToTop::create(&page, config);

        let nav = Navigation::attach(&page, config);
        tracing::debug!("nav: {} links", nav.links().len());
        let parallax = Parallax::attach(&page, config);
        let stats = StatsCounter::attach(&page, config);
        let skills = SkillBars::attach(&page);
        let fade_in = FadeIn::attach(&page);
        let typing = typing::attach(&page, &scheduler, config);
        if !typing {
            tracing::debug!("typing: no hero title");
        }

        let cursor_trail = config.cursor_trail.then(|| {
            let trail = Rc::new(RefCell::new(CursorTrail::new(config.cursor_easing)));
            cursor_trail::mount(&page, &scheduler, trail.clone());
            trail
        });

        Self {
            nav,
            parallax,
            stats,
            skills,
            fade_in,
            back_to_top,
            easter_egg: EasterEgg::new(config),
            cursor_trail,
            typing,
            page,
            scheduler,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn typing(&self) -> bool {
        self.typing
    }

    pub fn on_scroll(&self) {
        self.nav.on_scroll(&self.page);
        self.parallax.on_scroll(&self.page);
        self.back_to_top.on_scroll(&self.page);
    }

    pub fn on_nav_toggle(&self) {
        self.nav.on_toggle(&self.page);
    }

    pub fn on_nav_link(&self, link: &P::Node) {
        self.nav.on_link_click(&self.page, link);
    }

    pub fn on_back_to_top(&self) {
        self.back_to_top.on_click(&self.page);
    }

    pub fn on_key(&mut self, code: u32) {
        self.easter_egg.on_key(&self.page, &self.scheduler, code);
    }

    pub fn on_mouse_move(&self, x: f64, y: f64) {
        if let Some(trail) = &self.cursor_trail {
            trail.borrow_mut().on_mouse_move(x, y);
        }
    }

    pub fn on_stats_visibility(&mut self, entries: &[Intersection<P::Node>]) {
        self.stats
            .on_intersections(&self.page, &self.scheduler, entries);
    }

    pub fn on_skills_visibility(&self, entries: &[Intersection<P::Node>]) {
        self.skills.on_intersections(&self.page, entries);
    }

    pub fn on_blocks_visibility(&self, entries: &[Intersection<P::Node>]) {
        self.fade_in.on_intersections(&self.page, entries);
    }
}

fn greet() {
    tracing::info!("👋 Hello there!");
    tracing::info!("🚀 Thanks for checking out the code!");
    tracing::info!("💼 Looking for a data scientist? Let's connect!");
}
