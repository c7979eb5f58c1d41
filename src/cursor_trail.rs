use std::cell::RefCell;
use std::rc::Rc;

use crate::clock::{self, Scheduler};
use crate::page::Page;

pub const TRAIL_CLASS: &str = "cursor-trail";

/// A dot that eases toward the pointer a fixed fraction per frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CursorTrail {
    pointer: (f64, f64),
    trail: (f64, f64),
    easing: f64,
}

impl CursorTrail {
    pub fn new(easing: f64) -> Self {
        Self {
            easing,
            ..Self::default()
        }
    }

    pub fn on_mouse_move(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    pub fn position(&self) -> (f64, f64) {
        self.trail
    }

    pub fn frame(&mut self) -> (f64, f64) {
        self.trail.0 += (self.pointer.0 - self.trail.0) * self.easing;
        self.trail.1 += (self.pointer.1 - self.trail.1) * self.easing;
        self.trail
    }
}

/// Mounts the trail dot and animates it for the rest of the page lifetime.
pub fn mount<P, S>(page: &P, scheduler: &S, trail: Rc<RefCell<CursorTrail>>) -> Option<P::Node>
where
    P: Page,
    S: Scheduler,
{
    let body = page.body()?;
    let dot = page.create_element("div")?;
    page.set_attribute(&dot, "class", TRAIL_CLASS);
    page.append_child(&body, &dot);

    let page = page.clone();
    let animated = dot.clone();
    clock::every_frame(scheduler, move || {
        let (x, y) = trail.borrow_mut().frame();
        page.set_style(&animated, "left", &format!("{x}px"));
        page.set_style(&animated, "top", &format!("{y}px"));
        true
    });
    Some(dot)
}
