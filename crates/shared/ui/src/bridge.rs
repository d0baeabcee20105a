//! The DOM side of [`Viewport`]: a small script evaluated in the page that hosts the
//! `IntersectionObserver`, the `setTimeout` timers and the scroll listener.
//!
//! Evaluation is asynchronous, so the Rust half keeps a cached [`LayoutSnapshot`] that the
//! script refreshes on every scroll and resize. Commands are fire-and-forget: ids are
//! allocated locally and the script answers with events carrying the same ids.

use dioxus::document::{self, Eval};
use folio_kernel::error::{ViewportError, ViewportErrorExt};
use folio_kernel::motion::{ScrollBehavior, TimerId, Viewport, WatchId};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;
use tracing::trace;

const BRIDGE_JS: &str = include_str!("bridge.js");

/// Messages to the page script.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub(crate) enum Command<'a> {
    Observe { id: u64, target: &'a str, threshold: f64 },
    Unobserve { id: u64 },
    Schedule { id: u64, delay_ms: u64 },
    Cancel { id: u64 },
    Track { anchors: &'a [&'a str] },
    ScrollTo { top: f64, behavior: &'static str },
}

/// Messages from the page script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BridgeEvent {
    /// First message after evaluation; `observer` is false in engines without
    /// `IntersectionObserver`.
    Ready { observer: bool },
    /// Threshold crossing. `intersecting` is the observer's own verdict; `ratio` is the
    /// rounded visible fraction.
    Intersect { id: u64, intersecting: bool, ratio: f64 },
    /// The script accepted an `observe` command but could not start observing.
    ObserveFailed { id: u64, reason: String },
    Timer { id: u64 },
    /// Scroll offset plus the document top of each tracked anchor (`None` if absent).
    Layout { scroll: f64, tops: Vec<Option<f64>> },
}

/// Last layout reported by the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutSnapshot {
    anchors: Vec<String>,
    scroll: Option<f64>,
    tops: Vec<Option<f64>>,
}

impl LayoutSnapshot {
    pub(crate) fn track(&mut self, anchors: &[&str]) {
        self.anchors = anchors.iter().map(|a| (*a).to_owned()).collect();
        self.tops.clear();
    }

    pub(crate) fn apply(&mut self, scroll: f64, tops: Vec<Option<f64>>) {
        self.scroll = Some(scroll);
        self.tops = tops;
    }

    #[must_use]
    pub const fn scroll(&self) -> Option<f64> {
        self.scroll
    }

    #[must_use]
    pub fn anchor_top(&self, anchor: &str) -> Option<f64> {
        let index = self.anchors.iter().position(|a| a == anchor)?;
        self.tops.get(index).copied().flatten()
    }
}

/// [`Viewport`] backed by the page script. Clones share ids and the layout snapshot.
#[derive(Clone)]
pub struct DomViewport {
    eval: Eval,
    observer: bool,
    next_id: Rc<Cell<u64>>,
    layout: Rc<RefCell<LayoutSnapshot>>,
}

impl fmt::Debug for DomViewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomViewport")
            .field("observer", &self.observer)
            .field("next_id", &self.next_id.get())
            .field("layout", &self.layout.borrow())
            .finish_non_exhaustive()
    }
}

impl DomViewport {
    fn new(eval: Eval, observer: bool) -> Self {
        Self {
            eval,
            observer,
            next_id: Rc::new(Cell::new(1)),
            layout: Rc::new(RefCell::new(LayoutSnapshot::default())),
        }
    }

    /// Starts layout reports for `anchors`; the page answers with [`BridgeEvent::Layout`]
    /// immediately and after every scroll or resize.
    ///
    /// # Errors
    /// [`ViewportError::Bridge`] if the page script is gone.
    pub fn track(&self, anchors: &[&str]) -> Result<(), ViewportError> {
        self.layout.borrow_mut().track(anchors);
        self.send(&Command::Track { anchors }).context("track anchors")
    }

    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        self.layout.borrow().clone()
    }

    fn allocate(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn send(&self, command: &Command<'_>) -> Result<(), ViewportError> {
        trace!(?command, "Bridge command");
        self.eval.send(command).map_err(|e| ViewportError::bridge(e.to_string()))
    }
}

impl Viewport for DomViewport {
    fn observe(&mut self, target: &str, threshold: f64) -> Result<WatchId, ViewportError> {
        if !self.observer {
            return Err(ViewportError::unavailable("IntersectionObserver is not supported"));
        }
        let id = self.allocate();
        self.send(&Command::Observe { id, target, threshold }).context("observe section")?;
        Ok(WatchId(id))
    }

    fn unobserve(&mut self, watch: WatchId) {
        released(self.send(&Command::Unobserve { id: watch.0 }), "watch", watch.0);
    }

    fn schedule(&mut self, delay: Duration) -> Result<TimerId, ViewportError> {
        let id = self.allocate();
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.send(&Command::Schedule { id, delay_ms }).context("schedule timer")?;
        Ok(TimerId(id))
    }

    fn cancel(&mut self, timer: TimerId) {
        released(self.send(&Command::Cancel { id: timer.0 }), "timer", timer.0);
    }

    fn scroll_offset(&self) -> Option<f64> {
        self.layout.borrow().scroll()
    }

    fn anchor_top(&self, anchor: &str) -> Option<f64> {
        self.layout.borrow().anchor_top(anchor)
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) -> Result<(), ViewportError> {
        self.send(&Command::ScrollTo { top: offset, behavior: behavior.as_str() }).context("scroll")
    }
}

/// Reports a release the script never received. The page keeps the observer or timer alive
/// and may still answer with its id, which the controllers ignore.
fn released(result: Result<(), ViewportError>, kind: &'static str, id: u64) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            trace!(kind, id, error = %e, "Release not delivered to the page");
            false
        },
    }
}

/// One evaluated page script and the viewport that talks to it.
pub struct Bridge {
    eval: Eval,
    viewport: DomViewport,
}

impl fmt::Debug for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bridge").field("viewport", &self.viewport).finish_non_exhaustive()
    }
}

impl Bridge {
    /// Evaluates the page script and waits for its handshake.
    ///
    /// # Errors
    /// [`ViewportError::Bridge`] when the renderer cannot evaluate scripts (static
    /// rendering) or the handshake is malformed.
    pub async fn connect() -> Result<Self, ViewportError> {
        let mut eval = document::eval(BRIDGE_JS);
        let hello = eval
            .recv::<BridgeEvent>()
            .await
            .map_err(|e| ViewportError::bridge(e.to_string()))
            .context("bridge handshake")?;

        match hello {
            BridgeEvent::Ready { observer } => {
                trace!(observer, "Bridge connected");
                Ok(Self { eval, viewport: DomViewport::new(eval, observer) })
            },
            other => Err(ViewportError::bridge(format!("unexpected handshake {other:?}"))),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> DomViewport {
        self.viewport.clone()
    }

    /// Waits for the next page event. Layout reports refresh the viewport snapshot before
    /// they are returned.
    ///
    /// # Errors
    /// [`ViewportError::Bridge`] once the page script stops answering.
    pub async fn next_event(&mut self) -> Result<BridgeEvent, ViewportError> {
        let event = self
            .eval
            .recv::<BridgeEvent>()
            .await
            .map_err(|e| ViewportError::bridge(e.to_string()))?;

        if let BridgeEvent::Layout { scroll, tops } = &event {
            self.viewport.layout.borrow_mut().apply(*scroll, tops.clone());
        }
        Ok(event)
    }
}
