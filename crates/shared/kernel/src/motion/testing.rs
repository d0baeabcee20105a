//! In-memory [`Viewport`] with a synthetic clock.
//!
//! Clones share state: hand one clone to a controller and drive the page through another.

use super::viewport::{ScrollBehavior, TimerId, Viewport, WatchId};
use crate::error::ViewportError;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug)]
struct FakeState {
    observing: bool,
    timers: bool,
    now: Duration,
    next_id: u64,
    watchers: BTreeMap<WatchId, (String, f64)>,
    queue: BTreeMap<TimerId, Duration>,
    scheduled: usize,
    scroll: Option<f64>,
    tops: HashMap<String, f64>,
    scrolls: Vec<(f64, ScrollBehavior)>,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            observing: true,
            timers: true,
            now: Duration::ZERO,
            next_id: 1,
            watchers: BTreeMap::new(),
            queue: BTreeMap::new(),
            scheduled: 0,
            scroll: Some(0.0),
            tops: HashMap::new(),
            scrolls: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeViewport {
    state: Rc<RefCell<FakeState>>,
}

impl FakeViewport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An environment without intersection observation, timers or scrolling.
    #[must_use]
    pub fn unavailable() -> Self {
        let viewport = Self::new();
        {
            let mut state = viewport.state.borrow_mut();
            state.observing = false;
            state.timers = false;
            state.scroll = None;
        }
        viewport
    }

    /// Observation works but scheduling timers fails.
    #[must_use]
    pub fn without_timers(self) -> Self {
        self.state.borrow_mut().timers = false;
        self
    }

    #[must_use]
    pub fn with_anchor(self, anchor: &str, top: f64) -> Self {
        self.set_anchor_top(anchor, top);
        self
    }

    pub fn set_anchor_top(&self, anchor: &str, top: f64) {
        self.state.borrow_mut().tops.insert(anchor.to_owned(), top);
    }

    pub fn set_scroll(&self, offset: f64) {
        self.state.borrow_mut().scroll = Some(offset);
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    #[must_use]
    pub fn watcher_count(&self) -> usize {
        self.state.borrow().watchers.len()
    }

    /// Timers scheduled and neither fired nor cancelled.
    #[must_use]
    pub fn timer_count(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Timers ever scheduled.
    #[must_use]
    pub fn scheduled_total(&self) -> usize {
        self.state.borrow().scheduled
    }

    /// The live watch on `target`, if any.
    #[must_use]
    pub fn watch_for(&self, target: &str) -> Option<WatchId> {
        self.state.borrow().watchers.iter().find(|(_, (t, _))| t == target).map(|(id, _)| *id)
    }

    #[must_use]
    pub fn scroll_requests(&self) -> Vec<(f64, ScrollBehavior)> {
        self.state.borrow().scrolls.clone()
    }

    /// Moves the clock forward by `by` and returns the timers that came due, ordered by
    /// due time then scheduling order.
    pub fn advance(&self, by: Duration) -> Vec<TimerId> {
        let mut state = self.state.borrow_mut();
        state.now += by;
        let now = state.now;

        let mut due: Vec<(Duration, TimerId)> =
            state.queue.iter().filter(|(_, at)| **at <= now).map(|(id, at)| (*at, *id)).collect();
        due.sort();
        for (_, id) in &due {
            state.queue.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }

    /// Jumps the clock to the earliest pending timer and fires it.
    pub fn fire_next(&self) -> Option<(Duration, TimerId)> {
        let mut state = self.state.borrow_mut();
        let (id, at) = state.queue.iter().min_by_key(|(id, at)| (**at, **id)).map(|(i, a)| (*i, *a))?;
        state.queue.remove(&id);
        state.now = state.now.max(at);
        Some((at, id))
    }

    fn next_id(state: &mut FakeState) -> u64 {
        let id = state.next_id;
        state.next_id += 1;
        id
    }
}

impl Viewport for FakeViewport {
    fn observe(&mut self, target: &str, threshold: f64) -> Result<WatchId, ViewportError> {
        let mut state = self.state.borrow_mut();
        if !state.observing {
            return Err(ViewportError::unavailable("fake viewport without observer"));
        }
        let id = WatchId(Self::next_id(&mut state));
        state.watchers.insert(id, (target.to_owned(), threshold));
        Ok(id)
    }

    fn unobserve(&mut self, watch: WatchId) {
        self.state.borrow_mut().watchers.remove(&watch);
    }

    fn schedule(&mut self, delay: Duration) -> Result<TimerId, ViewportError> {
        let mut state = self.state.borrow_mut();
        if !state.timers {
            return Err(ViewportError::unavailable("fake viewport without timers"));
        }
        let id = TimerId(Self::next_id(&mut state));
        let due = state.now + delay;
        state.queue.insert(id, due);
        state.scheduled += 1;
        Ok(id)
    }

    fn cancel(&mut self, timer: TimerId) {
        self.state.borrow_mut().queue.remove(&timer);
    }

    fn scroll_offset(&self) -> Option<f64> {
        self.state.borrow().scroll
    }

    fn anchor_top(&self, anchor: &str) -> Option<f64> {
        self.state.borrow().tops.get(anchor).copied()
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) -> Result<(), ViewportError> {
        let mut state = self.state.borrow_mut();
        if state.scroll.is_none() {
            return Err(ViewportError::unavailable("fake viewport cannot scroll"));
        }
        state.scrolls.push((offset, behavior));
        Ok(())
    }
}
