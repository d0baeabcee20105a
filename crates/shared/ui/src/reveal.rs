use crate::bridge::{Bridge, BridgeEvent, DomViewport};
use crate::config::use_site_config;
use dioxus::prelude::*;
use folio_domain::Anchor;
use folio_kernel::motion::{RevealConfig, RevealController, RevealEffect, RevealPhase, TimerId, Viewport, WatchId};
use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::Rc;
use tracing::debug;

/// Reveal state of one section, as seen by its render function.
///
/// Slots are numbered in document order. A slot outside the declared count carries no
/// reveal class and therefore always shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    flags: Signal<Vec<bool>>,
    effect: RevealEffect,
}

impl Reveal {
    #[must_use]
    pub fn is_revealed(&self, slot: usize) -> bool {
        self.flags.read().get(slot).copied().unwrap_or(false)
    }

    /// Class list for slot `slot`, appended to `base`.
    ///
    /// Marked slots always carry `reveal`; once revealed they also get `is-revealed` and
    /// the effect class that plays the transition.
    #[must_use]
    pub fn class(&self, slot: usize, base: &str) -> String {
        let flags = self.flags.read();
        let marker = match flags.get(slot) {
            None => return base.to_owned(),
            Some(true) => format!("reveal is-revealed {}", self.effect.class()),
            Some(false) => "reveal".to_owned(),
        };
        if base.is_empty() { marker } else { format!("{base} {marker}") }
    }

    #[must_use]
    pub fn slots(&self) -> usize {
        self.flags.read().len()
    }

    #[must_use]
    pub const fn effect(&self) -> RevealEffect {
        self.effect
    }
}

/// Staggered reveal of the section at `anchor` with `slots` marked children.
///
/// The controller lives for as long as the calling component: unmounting tears it down,
/// cancelling pending timers and releasing the observer. When the page cannot evaluate the
/// bridge script every slot is shown at once.
pub fn use_reveal(anchor: Anchor, slots: usize, effect: RevealEffect) -> Reveal {
    let site = use_site_config();
    let mut flags = use_signal(|| vec![false; slots]);
    let owner = use_reveal_owner::<DomViewport>();

    use_hook(move || {
        let config = RevealConfig::new(anchor.id(), slots)
            .threshold(site.motion.threshold)
            .step(site.motion.step(anchor))
            .effect(effect);

        spawn(async move {
            let mut bridge = match Bridge::connect().await {
                Ok(bridge) => bridge,
                Err(e) => {
                    debug!(section = %anchor, error = %e, "Reveal bridge unavailable, showing content");
                    flags.set(vec![true; slots]);
                    return;
                },
            };

            let Some(mut progress) = owner.arm(bridge.viewport(), config) else {
                return;
            };
            loop {
                if let Some(next) = progress.flags.take() {
                    flags.set(next);
                }
                if progress.settled {
                    break;
                }
                let Ok(event) = bridge.next_event().await else {
                    break;
                };
                progress = owner.forward(&event);
            }
        });
    });

    Reveal { flags, effect }
}

/// Outcome of feeding the controller: new flags when something changed, and whether the
/// section has nothing left to wait for.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Progress {
    pub(crate) flags: Option<Vec<bool>>,
    pub(crate) settled: bool,
}

impl Progress {
    fn of<V: Viewport>(controller: &RevealController<V>, changed: bool) -> Self {
        Self {
            flags: changed.then(|| revealed_flags(controller)),
            settled: matches!(
                controller.phase(),
                RevealPhase::Complete | RevealPhase::Degraded | RevealPhase::TornDown
            ),
        }
    }
}

enum Slot<V: Viewport> {
    Connecting,
    Live(RevealController<V>),
    Released,
}

/// Shared home of a section's controller, between the bridge task and the component.
///
/// Releasing is final: a controller armed afterwards is never created, so a section that
/// unmounts while the bridge connects leaves nothing behind.
pub(crate) struct RevealOwner<V: Viewport>(Rc<RefCell<Slot<V>>>);

impl<V: Viewport> Clone for RevealOwner<V> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<V: Viewport> fmt::Debug for RevealOwner<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &*self.0.borrow() {
            Slot::Connecting => "connecting",
            Slot::Live(_) => "live",
            Slot::Released => "released",
        };
        f.debug_tuple("RevealOwner").field(&state).finish()
    }
}

impl<V: Viewport> RevealOwner<V> {
    fn new() -> Self {
        Self(Rc::new(RefCell::new(Slot::Connecting)))
    }

    /// Mounts the controller on `viewport`. `None` once the owner has been released.
    pub(crate) fn arm(&self, viewport: V, config: RevealConfig) -> Option<Progress> {
        let mut slot = self.0.borrow_mut();
        if !matches!(*slot, Slot::Connecting) {
            debug!(section = %config.container, "Section gone before the bridge connected");
            return None;
        }
        let controller = RevealController::mount(viewport, config);
        let progress = Progress::of(&controller, true);
        *slot = Slot::Live(controller);
        Some(progress)
    }

    /// Feeds one page event to the live controller.
    pub(crate) fn forward(&self, event: &BridgeEvent) -> Progress {
        let mut slot = self.0.borrow_mut();
        let Slot::Live(controller) = &mut *slot else {
            return Progress { flags: None, settled: true };
        };
        let changed = match event {
            BridgeEvent::Intersect { id, intersecting, ratio } => {
                controller.on_intersection(WatchId(*id), *intersecting, *ratio)
            },
            BridgeEvent::ObserveFailed { id, reason } => {
                debug!(section = %controller.config().container, %reason, "Section not observable");
                controller.on_watch_failed(WatchId(*id))
            },
            BridgeEvent::Timer { id } => controller.on_timer(TimerId(*id)).is_some(),
            BridgeEvent::Ready { .. } | BridgeEvent::Layout { .. } => false,
        };
        Progress::of(controller, changed)
    }

    /// Tears the controller down, or prevents it from ever being armed.
    pub(crate) fn release(&self) {
        let previous = mem::replace(&mut *self.0.borrow_mut(), Slot::Released);
        if let Slot::Live(mut controller) = previous {
            controller.teardown();
        }
    }

    #[cfg(test)]
    fn phase(&self) -> Option<RevealPhase> {
        match &*self.0.borrow() {
            Slot::Live(controller) => Some(controller.phase()),
            Slot::Connecting | Slot::Released => None,
        }
    }
}

/// Owner of a section controller that is released when the calling component unmounts.
pub(crate) fn use_reveal_owner<V: Viewport + 'static>() -> RevealOwner<V> {
    let owner = use_hook(RevealOwner::new);
    use_drop({
        let owner = owner.clone();
        move || owner.release()
    });
    owner
}

fn revealed_flags<V: Viewport>(controller: &RevealController<V>) -> Vec<bool> {
    (0..controller.config().children).map(|i| controller.is_revealed(i)).collect()
}
