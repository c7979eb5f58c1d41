use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Virtual duration of one animation frame.
pub const FRAME: Duration = Duration::from_millis(16);

pub type Task = Box<dyn FnOnce()>;

/// Deferred callbacks on the UI thread.
pub trait Scheduler: Clone + 'static {
    fn set_timeout(&self, delay: Duration, task: Task);
    fn request_frame(&self, task: Task);
}

/// Lifecycle of a one-shot animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Pending,
    Running,
    Complete,
}

/// What a stepped animation wants next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Again(Duration),
    Done,
}

/// Runs `step` right away, then keeps rescheduling it while it asks to.
pub fn start<S, F>(scheduler: &S, mut step: F)
where
    S: Scheduler,
    F: FnMut() -> Tick + 'static,
{
    if let Tick::Again(delay) = step() {
        after(scheduler, delay, step);
    }
}

/// Runs `step` once `delay` has elapsed, then keeps rescheduling it while it
/// asks to.
pub fn after<S, F>(scheduler: &S, delay: Duration, mut step: F)
where
    S: Scheduler,
    F: FnMut() -> Tick + 'static,
{
    let next = scheduler.clone();
    scheduler.set_timeout(
        delay,
        Box::new(move || {
            if let Tick::Again(delay) = step() {
                after(&next, delay, step);
            }
        }),
    );
}

/// Runs `step` on every animation frame while it returns `true`.
pub fn every_frame<S, F>(scheduler: &S, mut step: F)
where
    S: Scheduler,
    F: FnMut() -> bool + 'static,
{
    let next = scheduler.clone();
    scheduler.request_frame(Box::new(move || {
        if step() {
            every_frame(&next, step);
        }
    }));
}

struct PendingTask {
    due_at: Duration,
    order: u64,
    task: Task,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_order: u64,
    queue: Vec<PendingTask>,
}

/// Deterministic scheduler: nothing runs until the clock is advanced.
/// Animation frames are timeouts of one [`FRAME`].
#[derive(Clone, Default)]
pub struct VirtualClock {
    state: Rc<RefCell<ClockState>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Moves time forward, running every task that falls due on the way in
    /// (due time, scheduling order). Tasks scheduled by a running task are
    /// picked up in the same call when they fall inside the window.
    pub fn advance(&self, delta: Duration) -> usize {
        let target = self.now() + delta;
        let mut ran = 0;
        while let Some(task) = self.pop_due(target) {
            task();
            ran += 1;
        }
        self.state.borrow_mut().now = target;
        ran
    }

    pub fn advance_ms(&self, millis: u64) -> usize {
        self.advance(Duration::from_millis(millis))
    }

    /// Runs everything queued, however far in the future.
    pub fn flush(&self) -> usize {
        let mut ran = 0;
        while let Some(task) = self.pop_due(Duration::MAX) {
            task();
            ran += 1;
        }
        ran
    }

    fn pop_due(&self, limit: Duration) -> Option<Task> {
        let mut state = self.state.borrow_mut();
        let index = state
            .queue
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due_at <= limit)
            .min_by_key(|(_, pending)| (pending.due_at, pending.order))
            .map(|(index, _)| index)?;
        let pending = state.queue.remove(index);
        state.now = state.now.max(pending.due_at);
        Some(pending.task)
    }
}

impl Scheduler for VirtualClock {
    fn set_timeout(&self, delay: Duration, task: Task) {
        let mut state = self.state.borrow_mut();
        let due_at = state.now + delay;
        let order = state.next_order;
        state.next_order += 1;
        state.queue.push(PendingTask {
            due_at,
            order,
            task,
        });
    }

    fn request_frame(&self, task: Task) {
        self.set_timeout(FRAME, task);
    }
}
