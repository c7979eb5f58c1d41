use std::time::Duration;

use crate::clock::{self, Phase, Scheduler, Tick};
use crate::config::FxConfig;
use crate::page::{Intersection, Page, VisibilityOptions};

pub const SECTION_SELECTOR: &str = ".stats-section";
pub const NUMBER_SELECTOR: &str = ".stat-number";
pub const TARGET_ATTRIBUTE: &str = "data-target";
pub const VISIBILITY: VisibilityOptions = VisibilityOptions::at(0.5);

/// Count-up from zero towards `target` in equal increments.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    count: f64,
    increment: f64,
    phase: Phase,
}

impl CounterAnimation {
    pub fn new(target: i64, steps: u32) -> Self {
        Self {
            target,
            count: 0.0,
            increment: target as f64 / f64::from(steps.max(1)),
            phase: Phase::Pending,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advances one tick and returns the value to display. Once the count
    /// reaches the target the animation completes on the exact target.
    pub fn step(&mut self) -> i64 {
        if self.count < self.target as f64 {
            self.count += self.increment;
            self.phase = Phase::Running;
            (self.count.ceil() as i64).min(self.target)
        } else {
            self.phase = Phase::Complete;
            self.target
        }
    }
}

/// Counts every stat number up once, the first time the stats block shows.
pub struct StatsCounter<N> {
    section: Option<N>,
    numbers: Vec<N>,
    animated: bool,
    steps: u32,
    interval: Duration,
}

impl<N: Clone + PartialEq + 'static> StatsCounter<N> {
    pub fn attach<P: Page<Node = N>>(page: &P, config: &FxConfig) -> Self {
        Self {
            section: page.query(SECTION_SELECTOR),
            numbers: page.query_all(NUMBER_SELECTOR),
            animated: false,
            steps: config.counter_steps,
            interval: config.counter_interval(),
        }
    }

    pub fn observed(&self) -> Vec<N> {
        self.section.iter().cloned().collect()
    }

    pub fn animated(&self) -> bool {
        self.animated
    }

    pub fn on_intersections<P, S>(&mut self, page: &P, scheduler: &S, entries: &[Intersection<N>])
    where
        P: Page<Node = N>,
        S: Scheduler,
    {
        for entry in entries {
            if entry.is_intersecting && !self.animated {
                self.animate(page, scheduler);
                self.animated = true;
            }
        }
    }

    fn animate<P, S>(&self, page: &P, scheduler: &S)
    where
        P: Page<Node = N>,
        S: Scheduler,
    {
        tracing::debug!("stats: counting {} numbers", self.numbers.len());
        for number in &self.numbers {
            let Some(target) = page
                .attribute(number, TARGET_ATTRIBUTE)
                .and_then(|raw| raw.trim().parse::<i64>().ok())
            else {
                continue;
            };
            let mut counter = CounterAnimation::new(target, self.steps);
            let page = page.clone();
            let number = number.clone();
            let interval = self.interval;
            clock::start(scheduler, move || {
                let shown = counter.step();
                page.set_text(&number, &shown.to_string());
                match counter.phase() {
                    Phase::Complete => Tick::Done,
                    _ => Tick::Again(interval),
                }
            });
        }
    }
}
