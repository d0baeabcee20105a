//! Page mechanics driven by viewport events.
//!
//! Both controllers are single-threaded state owners: the environment reports events
//! (intersection, fired timer, scroll), the owner forwards them, and the controller mutates
//! its own flags. Nothing here blocks or awaits.

mod navigation;
mod reveal;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
mod viewport;

pub use navigation::{NavigationController, select_active};
pub use reveal::{RevealConfig, RevealController, RevealEffect, RevealPhase};
pub use viewport::{DetachedViewport, ScrollBehavior, TimerId, Viewport, WatchId};
