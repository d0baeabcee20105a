use crate::error::ViewportError;
use std::fmt;
use std::time::Duration;

/// Handle for an intersection watch acquired with [`Viewport::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WatchId(pub u64);

/// Handle for a timer scheduled with [`Viewport::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl fmt::Display for WatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "watch#{}", self.0)
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

impl ScrollBehavior {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Instant => "instant",
        }
    }
}

/// The rendering environment as seen by the page mechanics.
///
/// Implementations are cheap handles (cloned into each controller). Acquisition methods
/// return a handle the caller must release; release methods must tolerate handles that
/// are unknown or already released. Events (intersection changes, fired timers, scroll)
/// are delivered by the owner of the environment, not through this trait.
pub trait Viewport {
    /// Starts watching the element with id `target`, reporting visible fractions that
    /// cross `threshold`.
    ///
    /// # Errors
    /// [`ViewportError::Unavailable`] when the environment cannot observe intersection.
    fn observe(&mut self, target: &str, threshold: f64) -> Result<WatchId, ViewportError>;

    fn unobserve(&mut self, watch: WatchId);

    /// Schedules a timer that fires once after `delay`.
    ///
    /// # Errors
    /// [`ViewportError::Unavailable`] when the environment has no timer source.
    fn schedule(&mut self, delay: Duration) -> Result<TimerId, ViewportError>;

    fn cancel(&mut self, timer: TimerId);

    /// Current vertical scroll offset of the document, `None` if unknown.
    fn scroll_offset(&self) -> Option<f64>;

    /// Document top offset of the element with id `anchor`, `None` if absent.
    fn anchor_top(&self, anchor: &str) -> Option<f64>;

    /// Scrolls the document to `offset`.
    ///
    /// # Errors
    /// [`ViewportError::Unavailable`] when the environment cannot scroll.
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) -> Result<(), ViewportError>;
}

/// A non-interactive environment (static rendering, headless export).
///
/// Every acquisition fails with [`ViewportError::Unavailable`] and every query is empty, so
/// controllers mounted on it degrade to "fully visible, never scrolls".
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedViewport;

impl Viewport for DetachedViewport {
    fn observe(&mut self, _target: &str, _threshold: f64) -> Result<WatchId, ViewportError> {
        Err(ViewportError::unavailable("detached document has no intersection observer"))
    }

    fn unobserve(&mut self, _watch: WatchId) {}

    fn schedule(&mut self, _delay: Duration) -> Result<TimerId, ViewportError> {
        Err(ViewportError::unavailable("detached document has no timers"))
    }

    fn cancel(&mut self, _timer: TimerId) {}

    fn scroll_offset(&self) -> Option<f64> {
        None
    }

    fn anchor_top(&self, _anchor: &str) -> Option<f64> {
        None
    }

    fn scroll_to(&mut self, _offset: f64, _behavior: ScrollBehavior) -> Result<(), ViewportError> {
        Err(ViewportError::unavailable("detached document cannot scroll"))
    }
}
