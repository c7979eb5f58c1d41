use std::collections::VecDeque;
use std::time::Duration;

use crate::clock::Scheduler;
use crate::config::FxConfig;
use crate::page::Page;
use crate::styles::{self, RAINBOW_KEYFRAMES, RAINBOW_STYLE_ID};

/// ↑ ↑ ↓ ↓ ← → ← → B A as DOM key codes.
pub const KONAMI_SEQUENCE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];
pub const RAINBOW_ANIMATION: &str = "rainbow 2s infinite";

/// Rolling window over the most recent key codes.
#[derive(Clone, Debug)]
pub struct KeySequence {
    target: &'static [u32],
    recent: VecDeque<u32>,
}

impl KeySequence {
    pub fn new(target: &'static [u32]) -> Self {
        Self {
            target,
            recent: VecDeque::with_capacity(target.len() + 1),
        }
    }

    pub fn konami() -> Self {
        Self::new(&KONAMI_SEQUENCE)
    }

    pub fn recent(&self) -> &VecDeque<u32> {
        &self.recent
    }

    /// Records a key and reports whether the window now ends with the
    /// full target sequence.
    pub fn push(&mut self, code: u32) -> bool {
        self.recent.push_back(code);
        while self.recent.len() > self.target.len() {
            self.recent.pop_front();
        }
        !self.target.is_empty() && self.recent.iter().eq(self.target.iter())
    }
}

/// Cycles the page hue for a few seconds when the Konami code is entered.
pub struct EasterEgg {
    keys: KeySequence,
    duration: Duration,
    activations: usize,
}

impl EasterEgg {
    pub fn new(config: &FxConfig) -> Self {
        Self {
            keys: KeySequence::konami(),
            duration: config.easter_egg_duration(),
            activations: 0,
        }
    }

    pub fn activations(&self) -> usize {
        self.activations
    }

    pub fn on_key<P: Page, S: Scheduler>(&mut self, page: &P, scheduler: &S, code: u32) {
        if self.keys.push(code) {
            self.activations += 1;
            activate(page, scheduler, self.duration);
        }
    }
}

pub fn activate<P: Page, S: Scheduler>(page: &P, scheduler: &S, duration: Duration) {
    let Some(body) = page.body() else {
        return;
    };
    tracing::info!("easter egg: rainbow mode");
    styles::inject(page, RAINBOW_STYLE_ID, RAINBOW_KEYFRAMES);
    page.set_style(&body, "animation", RAINBOW_ANIMATION);

    let page = page.clone();
    scheduler.set_timeout(
        duration,
        Box::new(move || page.set_style(&body, "animation", "")),
    );
}
