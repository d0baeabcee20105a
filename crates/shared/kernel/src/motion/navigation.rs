use super::viewport::{ScrollBehavior, Viewport};
use folio_domain::config::NavigationConfig;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Picks the active section for a scroll position.
///
/// Scans `tops` from last to first and returns the first index whose top is at or above
/// `effective` (the scroll offset plus lookahead). Sections missing from the document
/// (`None`) are skipped. `None` when every present section is still below `effective`.
#[must_use]
pub fn select_active(tops: &[Option<f64>], effective: f64) -> Option<usize> {
    scan_backward(tops.len(), |i| tops[i], effective)
}

fn scan_backward(count: usize, top_of: impl Fn(usize) -> Option<f64>, effective: f64) -> Option<usize> {
    (0..count).rev().find(|&i| top_of(i).is_some_and(|top| top <= effective))
}

/// Tracks which section occupies the top of the viewport and scrolls to sections.
///
/// The anchor list is injected at construction; its order is the layout order. The
/// initial active section is the first anchor and stays put until a scroll report
/// selects another one.
#[derive(Debug)]
pub struct NavigationController<V: Viewport> {
    viewport: V,
    anchors: Vec<Cow<'static, str>>,
    active: Option<usize>,
    config: NavigationConfig,
}

impl<V: Viewport> NavigationController<V> {
    pub fn new<I, A>(viewport: V, anchors: I, config: NavigationConfig) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Cow<'static, str>>,
    {
        let anchors: Vec<Cow<'static, str>> = anchors.into_iter().map(Into::into).collect();
        let active = (!anchors.is_empty()).then_some(0);
        Self { viewport, anchors, active, config }
    }

    /// Re-evaluates the active section against the current scroll offset.
    ///
    /// O(number of anchors); touches nothing but the active flag. Returns `true` when the
    /// active section changed. Without a known scroll offset this is a no-op.
    pub fn on_scroll(&mut self) -> bool {
        let Some(offset) = self.viewport.scroll_offset() else {
            return false;
        };
        let effective = offset + self.config.lookahead;

        let viewport = &self.viewport;
        let anchors = &self.anchors;
        let found = scan_backward(anchors.len(), |i| viewport.anchor_top(&anchors[i]), effective);

        match found {
            Some(index) if Some(index) != self.active => {
                trace!(anchor = %self.anchors[index], offset, "Active section changed");
                self.active = Some(index);
                true
            },
            _ => false,
        }
    }

    /// Smooth-scrolls so that `anchor` sits just below the fixed header.
    ///
    /// Returns the requested scroll offset (`top − header_clearance`), or `None` when the
    /// anchor is not in the document or the environment cannot scroll.
    pub fn navigate_to(&mut self, anchor: &str) -> Option<f64> {
        let Some(top) = self.viewport.anchor_top(anchor) else {
            debug!(anchor, "Navigation target not in document");
            return None;
        };
        let target = top - self.config.header_clearance;

        match self.viewport.scroll_to(target, ScrollBehavior::Smooth) {
            Ok(()) => {
                debug!(anchor, target, "Scrolling to section");
                Some(target)
            },
            Err(e) => {
                debug!(anchor, error = %e, "Scroll unavailable");
                None
            },
        }
    }

    /// Id of the active section, `None` only for an empty anchor list.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| &*self.anchors[i])
    }

    #[must_use]
    pub fn is_active(&self, anchor: &str) -> bool {
        self.active() == Some(anchor)
    }

    #[must_use]
    pub fn anchors(&self) -> &[Cow<'static, str>] {
        &self.anchors
    }

    #[must_use]
    pub const fn config(&self) -> &NavigationConfig {
        &self.config
    }
}
