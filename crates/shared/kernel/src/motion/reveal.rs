use super::viewport::{TimerId, Viewport, WatchId};
use std::borrow::Cow;
use std::time::Duration;
use tracing::{debug, trace};

const DEFAULT_THRESHOLD: f64 = 0.1;
const DEFAULT_STEP: Duration = Duration::from_millis(100);

/// The transition a revealed child plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RevealEffect {
    #[default]
    SlideInUp,
    SlideInLeft,
    FadeScale,
}

impl RevealEffect {
    /// CSS class toggled on a child once it is revealed.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::SlideInUp => "slide-in-up",
            Self::SlideInLeft => "slide-in-left",
            Self::FadeScale => "fade-scale",
        }
    }
}

/// Parameters of one section's reveal.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    /// Element id of the observed container.
    pub container: Cow<'static, str>,
    /// Number of marked children, in document order.
    pub children: usize,
    /// Visible fraction at which the environment reports the container as intersecting.
    /// Always within `0.0..=1.0`.
    pub threshold: f64,
    /// Delay between consecutive children.
    pub step: Duration,
    pub effect: RevealEffect,
}

impl RevealConfig {
    pub fn new(container: impl Into<Cow<'static, str>>, children: usize) -> Self {
        Self {
            container: container.into(),
            children,
            threshold: DEFAULT_THRESHOLD,
            step: DEFAULT_STEP,
            effect: RevealEffect::default(),
        }
    }

    /// Sets the observation threshold, clamped to `0.0..=1.0`. `NaN` keeps the default.
    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_nan() { DEFAULT_THRESHOLD } else { threshold.clamp(0.0, 1.0) };
        self
    }

    #[must_use]
    pub const fn step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub const fn effect(mut self, effect: RevealEffect) -> Self {
        self.effect = effect;
        self
    }

    /// Delay of child `index` after activation: `index × step`.
    #[must_use]
    pub fn delay_of(&self, index: usize) -> Duration {
        self.step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Watching the container, nothing revealed yet.
    Armed,
    /// Activated; some children still wait for their timer.
    Staggering,
    /// Every child revealed (or there were none).
    Complete,
    /// The environment cannot observe: everything is shown, unanimated.
    Degraded,
    /// Released; late events are ignored.
    TornDown,
}

/// Reveals a container's marked children one by one the first time it scrolls into view.
///
/// The controller owns its watch and timers. [`RevealController::teardown`] (also run on
/// drop) cancels what is still pending and releases the watch; events arriving afterwards
/// are no-ops.
#[derive(Debug)]
pub struct RevealController<V: Viewport> {
    viewport: V,
    config: RevealConfig,
    phase: RevealPhase,
    watch: Option<WatchId>,
    pending: Vec<Option<TimerId>>,
    revealed: Vec<bool>,
}

impl<V: Viewport> RevealController<V> {
    /// Acquires an intersection watch on the container.
    ///
    /// A container with no marked children never acquires anything and starts
    /// [`RevealPhase::Complete`]. An environment without intersection support yields
    /// [`RevealPhase::Degraded`].
    pub fn mount(mut viewport: V, config: RevealConfig) -> Self {
        let children = config.children;
        let (phase, watch) = if children == 0 {
            (RevealPhase::Complete, None)
        } else {
            match viewport.observe(&config.container, config.threshold) {
                Ok(watch) => {
                    trace!(container = %config.container, %watch, children, "Reveal armed");
                    (RevealPhase::Armed, Some(watch))
                },
                Err(e) => {
                    debug!(container = %config.container, error = %e, "Reveal degraded to static");
                    (RevealPhase::Degraded, None)
                },
            }
        };

        Self {
            viewport,
            config,
            phase,
            watch,
            pending: vec![None; children],
            revealed: vec![false; children],
        }
    }

    /// Handles an intersection report for `watch`.
    ///
    /// The environment only reports at threshold crossings, so `intersecting` decides on
    /// its own; `ratio` is informational (browsers round it and may report slightly less
    /// than the threshold on the crossing itself). Returns `true` only for the report that
    /// activates the reveal. Activation releases the watch, so exits and re-entries can
    /// never trigger it again.
    pub fn on_intersection(&mut self, watch: WatchId, intersecting: bool, ratio: f64) -> bool {
        if self.phase != RevealPhase::Armed || self.watch != Some(watch) || !intersecting {
            return false;
        }

        self.release_watch();
        self.phase = RevealPhase::Staggering;
        debug!(container = %self.config.container, ratio, "Reveal activated");

        for index in 0..self.config.children {
            let delay = self.config.delay_of(index);
            match self.viewport.schedule(delay) {
                Ok(timer) => self.pending[index] = Some(timer),
                Err(e) => {
                    debug!(container = %self.config.container, index, error = %e, "Timer unavailable, revealing now");
                    self.revealed[index] = true;
                },
            }
        }
        self.settle();

        true
    }

    /// Handles an environment that accepted `watch` but could not start observing (missing
    /// element, rejected options). The section degrades to fully visible. Returns `true`
    /// when this changed the phase.
    pub fn on_watch_failed(&mut self, watch: WatchId) -> bool {
        if self.phase != RevealPhase::Armed || self.watch != Some(watch) {
            return false;
        }
        self.watch = None;
        self.phase = RevealPhase::Degraded;
        debug!(container = %self.config.container, %watch, "Observation failed, revealing statically");
        true
    }

    /// Handles a fired timer. Returns the index of the child it reveals, or `None` for
    /// timers this controller does not own (stale, cancelled, or after teardown).
    pub fn on_timer(&mut self, timer: TimerId) -> Option<usize> {
        if self.phase != RevealPhase::Staggering {
            return None;
        }

        let index = self.pending.iter().position(|slot| *slot == Some(timer))?;
        self.pending[index] = None;
        self.revealed[index] = true;
        trace!(container = %self.config.container, index, %timer, "Child revealed");
        self.settle();

        Some(index)
    }

    /// Cancels pending timers and releases the watch. Idempotent.
    pub fn teardown(&mut self) {
        if self.phase == RevealPhase::TornDown {
            return;
        }

        let mut cancelled = 0usize;
        for timer in self.pending.iter_mut().filter_map(Option::take) {
            self.viewport.cancel(timer);
            cancelled += 1;
        }
        self.release_watch();
        self.phase = RevealPhase::TornDown;
        trace!(container = %self.config.container, cancelled, "Reveal torn down");
    }

    /// Whether child `index` should render in its revealed state.
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        if index >= self.config.children {
            return false;
        }
        self.phase == RevealPhase::Degraded || self.revealed[index]
    }

    #[must_use]
    pub const fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[must_use]
    pub const fn config(&self) -> &RevealConfig {
        &self.config
    }

    #[must_use]
    pub const fn watch(&self) -> Option<WatchId> {
        self.watch
    }

    /// Timers still waiting to fire, in child order.
    #[must_use]
    pub fn pending_timers(&self) -> Vec<TimerId> {
        self.pending.iter().flatten().copied().collect()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        if self.phase == RevealPhase::Degraded {
            return self.config.children;
        }
        self.revealed.iter().filter(|r| **r).count()
    }

    fn release_watch(&mut self) {
        if let Some(watch) = self.watch.take() {
            self.viewport.unobserve(watch);
        }
    }

    fn settle(&mut self) {
        if self.phase == RevealPhase::Staggering && self.pending.iter().all(Option::is_none) {
            self.phase = RevealPhase::Complete;
            debug!(container = %self.config.container, "Reveal complete");
        }
    }
}

impl<V: Viewport> Drop for RevealController<V> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::DetachedViewport;
    use crate::motion::testing::FakeViewport;

    fn config(children: usize) -> RevealConfig {
        RevealConfig::new("about", children).step(Duration::from_millis(100))
    }

    #[test]
    fn leaving_reports_do_not_activate() {
        let viewport = FakeViewport::new();
        let mut reveal = RevealController::mount(viewport.clone(), config(2));
        let watch = reveal.watch().expect("armed");

        assert!(!reveal.on_intersection(watch, false, 0.0));
        assert!(!reveal.on_intersection(watch, false, 0.05));
        assert_eq!(reveal.phase(), RevealPhase::Armed);
        assert_eq!(viewport.timer_count(), 0);
    }

    #[test]
    fn rounded_crossing_still_activates() {
        let viewport = FakeViewport::new();
        let mut reveal = RevealController::mount(viewport.clone(), config(2));
        let watch = reveal.watch().expect("armed");

        assert!(reveal.on_intersection(watch, true, 0.099_999));
        assert_eq!(reveal.phase(), RevealPhase::Staggering);
        assert_eq!(viewport.timer_count(), 2);
    }

    #[test]
    fn partly_visible_at_mount_activates() {
        let viewport = FakeViewport::new();
        let mut reveal = RevealController::mount(viewport, config(1));
        let watch = reveal.watch().expect("armed");
        assert!(reveal.on_intersection(watch, true, 0.05));
    }

    #[test]
    fn failed_observation_degrades_to_visible() {
        let viewport = FakeViewport::new();
        let mut reveal = RevealController::mount(viewport.clone(), config(3));
        let watch = reveal.watch().expect("armed");

        assert!(!reveal.on_watch_failed(WatchId(9_999)));
        assert!(reveal.on_watch_failed(watch));
        assert_eq!(reveal.phase(), RevealPhase::Degraded);
        assert_eq!(reveal.revealed_count(), 3);
        assert!(!reveal.on_intersection(watch, true, 1.0));
        assert!(!reveal.on_watch_failed(watch));
    }

    #[test]
    fn threshold_is_kept_in_range() {
        assert!((config(1).threshold(1.5).threshold - 1.0).abs() < f64::EPSILON);
        assert!(config(1).threshold(-0.2).threshold.abs() < f64::EPSILON);
        assert!((config(1).threshold(f64::NAN).threshold - 0.1).abs() < f64::EPSILON);
        assert!((config(1).threshold(0.25).threshold - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn foreign_watch_is_ignored() {
        let viewport = FakeViewport::new();
        let mut reveal = RevealController::mount(viewport, config(2));
        assert!(!reveal.on_intersection(WatchId(9_999), true, 1.0));
        assert_eq!(reveal.phase(), RevealPhase::Armed);
    }

    #[test]
    fn zero_children_schedules_nothing() {
        let viewport = FakeViewport::new();
        let reveal = RevealController::mount(viewport.clone(), config(0));

        assert_eq!(reveal.phase(), RevealPhase::Complete);
        assert_eq!(viewport.watcher_count(), 0);
        assert_eq!(viewport.timer_count(), 0);
        assert!(!reveal.is_revealed(0));
    }

    #[test]
    fn detached_environment_degrades_to_visible() {
        let mut reveal = RevealController::mount(DetachedViewport, config(3));
        assert_eq!(reveal.phase(), RevealPhase::Degraded);
        assert!((0..3).all(|i| reveal.is_revealed(i)));
        assert!(!reveal.is_revealed(3));
        assert_eq!(reveal.revealed_count(), 3);
        assert!(!reveal.on_intersection(WatchId(0), true, 1.0));
    }

    #[test]
    fn schedule_failure_reveals_child_immediately() {
        let viewport = FakeViewport::new().without_timers();
        let mut reveal = RevealController::mount(viewport.clone(), config(2));
        let watch = reveal.watch().expect("armed");

        assert!(reveal.on_intersection(watch, true, 0.5));
        assert_eq!(reveal.phase(), RevealPhase::Complete);
        assert!(reveal.is_revealed(0) && reveal.is_revealed(1));
        assert_eq!(viewport.watcher_count(), 0);
    }

    #[test]
    fn teardown_is_idempotent_and_runs_on_drop() {
        let viewport = FakeViewport::new();
        let mut reveal = RevealController::mount(viewport.clone(), config(4));
        let watch = reveal.watch().expect("armed");
        reveal.on_intersection(watch, true, 1.0);
        assert_eq!(viewport.timer_count(), 4);

        reveal.teardown();
        reveal.teardown();
        assert_eq!(reveal.phase(), RevealPhase::TornDown);
        assert_eq!(viewport.timer_count(), 0);

        let other = RevealController::mount(viewport.clone(), config(2));
        assert_eq!(viewport.watcher_count(), 1);
        drop(other);
        assert_eq!(viewport.watcher_count(), 0);
    }

    #[test]
    fn delay_grows_linearly() {
        let cfg = config(0).step(Duration::from_millis(150));
        assert_eq!(cfg.delay_of(0), Duration::ZERO);
        assert_eq!(cfg.delay_of(3), Duration::from_millis(450));
        assert_eq!(RevealEffect::FadeScale.class(), "fade-scale");
    }
}
