//! # Folio UI
//!
//! Dioxus glue between the framework-free page mechanics in `folio-kernel` and the rendered
//! document:
//!
//! * [`bridge`]: the DOM [`Viewport`](folio_kernel::motion::Viewport), one evaluated script
//!   per owner hosting the observer, the timers and the scroll listener.
//! * [`use_reveal`]: staggered reveal of a section's marked children.
//! * [`use_navigation_provider`] / [`NavBar`]: active-section tracking and smooth scrolling.
//! * Building blocks shared by the section slices: [`SectionShell`], [`SectionHeader`],
//!   [`IconGlyph`], [`OutboundLink`].
//!
//! Content hides before its reveal only when the bridge script has marked the document root
//! with `motion-ready`; without scripting or without `IntersectionObserver` the page renders
//! fully visible.

pub mod bridge;
mod config;
mod icon;
mod link;
mod navigation;
mod reveal;
mod section;

pub use config::use_site_config;
pub use icon::{IconGlyph, icon_paths};
pub use link::OutboundLink;
pub use navigation::{NavBar, Navigation, use_navigation, use_navigation_provider};
pub use reveal::{Reveal, use_reveal};
pub use section::{SectionHeader, SectionShell, background_style, header_slots, tone_class};

pub mod prelude {
    pub use crate::{
        IconGlyph, OutboundLink, Reveal, SectionHeader, SectionShell, background_style, header_slots,
        tone_class, use_navigation, use_reveal, use_site_config,
    };
    pub use folio_domain::{Anchor, BadgeStyle, Icon, StyleTable, Tone};
    pub use folio_kernel::motion::RevealEffect;
}
