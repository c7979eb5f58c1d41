use std::time::Duration;

use crate::clock::{self, Phase, Scheduler, Tick};
use crate::config::FxConfig;
use crate::page::Page;

pub const HEADING_SELECTOR: &str = ".hero-title";
pub const DONE_CLASS: &str = "typing-done";

/// Reveals a string one character per step.
#[derive(Clone, Debug, PartialEq)]
pub struct TypingEffect {
    chars: Vec<char>,
    shown: usize,
    phase: Phase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingStep {
    Revealed(usize),
    Finished,
}

impl TypingEffect {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            phase: Phase::Pending,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn step(&mut self) -> TypingStep {
        if self.shown < self.chars.len() {
            self.shown += 1;
            self.phase = Phase::Running;
            TypingStep::Revealed(self.shown)
        } else {
            self.phase = Phase::Complete;
            TypingStep::Finished
        }
    }
}

/// Clears the hero heading and types it back in after a pause. Returns
/// `false` when the page has no heading.
pub fn attach<P, S>(page: &P, scheduler: &S, config: &FxConfig) -> bool
where
    P: Page,
    S: Scheduler,
{
    let Some(heading) = page.query(HEADING_SELECTOR) else {
        return false;
    };
    let mut effect = TypingEffect::new(&page.text(&heading));
    page.set_text(&heading, "");

    let page = page.clone();
    let interval: Duration = config.typing_interval();
    clock::after(scheduler, config.typing_delay(), move || match effect.step() {
        TypingStep::Revealed(_) => {
            page.set_text(&heading, &effect.visible());
            Tick::Again(interval)
        }
        TypingStep::Finished => {
            page.add_class(&heading, DONE_CLASS);
            Tick::Done
        }
    });
    true
}
