use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::clock::{Scheduler, Task};
use crate::config::FxConfig;
use crate::effects::Effects;
use crate::error::FxError;
use crate::page::{Intersection, Page, VisibilityOptions};
use crate::{reveal, skills, stats};

type WebEffects = Rc<RefCell<Effects<WebPage, TimerScheduler>>>;
type EventClosure = Closure<dyn FnMut(Event)>;
type ObserverClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn js_error(context: &'static str) -> impl FnOnce(JsValue) -> FxError {
    move |value| FxError::Js {
        context,
        message: format!("{value:?}"),
    }
}

#[derive(Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn new() -> Result<Self, FxError> {
        let window = web_sys::window().ok_or(FxError::WindowMissing)?;
        let document = window.document().ok_or(FxError::DocumentMissing)?;
        Ok(Self { window, document })
    }
}

impl Page for WebPage {
    type Node = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn head(&self) -> Option<Element> {
        self.query("head")
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn create_element(&self, tag: &str) -> Option<Element> {
        self.document.create_element(tag).ok()
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        let _ = parent.append_child(child);
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        if let Some(element) = node.dyn_ref::<HtmlElement>() {
            let _ = element.style().set_property(property, value);
        }
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn toggle_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().toggle(class);
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_inner_html(&self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn offset_top(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .map(|element| f64::from(element.offset_top()))
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// `setTimeout` / `requestAnimationFrame` backed scheduler.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerScheduler;

impl Scheduler for TimerScheduler {
    fn set_timeout(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let _ = Timeout::new(millis, task).forget();
    }

    fn request_frame(&self, task: Task) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move |_timestamp: f64| task());
        let _ = window.request_animation_frame(callback.unchecked_ref());
    }
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: EventClosure,
}

struct Observer {
    observer: IntersectionObserver,
    _closure: ObserverClosure,
}

/// Owns every listener and observer; dropping it detaches them.
pub struct Installed {
    listeners: Vec<Listener>,
    observers: Vec<Observer>,
}

impl Installed {
    fn listen<F>(
        &mut self,
        target: impl Into<EventTarget>,
        event: &'static str,
        handler: F,
    ) -> Result<(), FxError>
    where
        F: FnMut(Event) + 'static,
    {
        let target = target.into();
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(js_error("addEventListener"))?;
        self.listeners.push(Listener {
            target,
            event,
            closure,
        });
        Ok(())
    }

    fn observe<F>(
        &mut self,
        targets: Vec<Element>,
        options: VisibilityOptions,
        mut handler: F,
    ) -> Result<(), FxError>
    where
        F: FnMut(&[Intersection<Element>]) + 'static,
    {
        if targets.is_empty() {
            return Ok(());
        }
        let closure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let entries: Vec<Intersection<Element>> = entries
                    .iter()
                    .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                    .map(|entry| Intersection::new(entry.target(), entry.is_intersecting()))
                    .collect();
                handler(&entries);
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
                .map_err(js_error("IntersectionObserver"))?;
        for target in &targets {
            observer.observe(target);
        }
        self.observers.push(Observer {
            observer,
            _closure: closure,
        });
        Ok(())
    }
}

impl Drop for Installed {
    fn drop(&mut self) {
        for listener in &self.listeners {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.closure.as_ref().unchecked_ref(),
            );
        }
        for observer in &self.observers {
            observer.observer.disconnect();
        }
    }
}

/// Runs every page effect against the live document and wires it to the
/// browser's event streams.
pub fn install() -> Result<Installed, FxError> {
    let page = WebPage::new()?;
    let config = FxConfig::from_page(&page);
    let effects: WebEffects = Rc::new(RefCell::new(Effects::install(
        page.clone(),
        TimerScheduler,
        &config,
    )));
    let mut installed = Installed {
        listeners: Vec::new(),
        observers: Vec::new(),
    };

    let (toggle, links, button, stat_blocks, bars, blocks) = {
        let effects = effects.borrow();
        (
            effects.nav.toggle().cloned(),
            effects.nav.links().to_vec(),
            effects.back_to_top.button().cloned(),
            effects.stats.observed(),
            effects.skills.observed(),
            effects.fade_in.observed(),
        )
    };

    tracing::debug!("fx: attach scroll listener");
    let on_scroll = effects.clone();
    installed.listen(page.window.clone(), "scroll", move |_event| {
        if let Ok(effects) = on_scroll.try_borrow() {
            effects.on_scroll();
        }
    })?;

    if let Some(toggle) = toggle {
        let on_toggle = effects.clone();
        installed.listen(toggle, "click", move |_event| {
            if let Ok(effects) = on_toggle.try_borrow() {
                effects.on_nav_toggle();
            }
        })?;
    }

    tracing::debug!("fx: attach {} nav link listeners", links.len());
    for link in links {
        let on_link = effects.clone();
        let target = link.clone();
        installed.listen(link, "click", move |event: Event| {
            event.prevent_default();
            if let Ok(effects) = on_link.try_borrow() {
                effects.on_nav_link(&target);
            }
        })?;
    }

    if let Some(button) = button {
        let on_click = effects.clone();
        installed.listen(button, "click", move |_event| {
            if let Ok(effects) = on_click.try_borrow() {
                effects.on_back_to_top();
            }
        })?;
    }

    let on_key = effects.clone();
    installed.listen(page.document.clone(), "keydown", move |event: Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if let Ok(mut effects) = on_key.try_borrow_mut() {
            effects.on_key(event.key_code());
        }
    })?;

    if config.cursor_trail {
        let on_move = effects.clone();
        installed.listen(page.document.clone(), "mousemove", move |event: Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if let Ok(effects) = on_move.try_borrow() {
                effects.on_mouse_move(f64::from(event.client_x()), f64::from(event.client_y()));
            }
        })?;
    }

    tracing::debug!("fx: observe stats, skill bars and content blocks");
    let on_stats = effects.clone();
    installed.observe(stat_blocks, stats::VISIBILITY, move |entries| {
        if let Ok(mut effects) = on_stats.try_borrow_mut() {
            effects.on_stats_visibility(entries);
        }
    })?;
    let on_bars = effects.clone();
    installed.observe(bars, skills::VISIBILITY, move |entries| {
        if let Ok(effects) = on_bars.try_borrow() {
            effects.on_skills_visibility(entries);
        }
    })?;
    let on_blocks = effects;
    installed.observe(blocks, reveal::VISIBILITY, move |entries| {
        if let Ok(effects) = on_blocks.try_borrow() {
            effects.on_blocks_visibility(entries);
        }
    })?;

    Ok(installed)
}
