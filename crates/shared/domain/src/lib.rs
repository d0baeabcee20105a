//! # Domain Models
//!
//! This crate contains the pure portfolio types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no rendering, no DOM access, no timers. Just literal-friendly data, the
//! anchor contract shared by navigation and sections, and the category style tables.

pub mod anchors;
pub mod config;
pub mod link;
pub mod models;
pub mod style;

pub use anchors::{Anchor, NAV_ITEMS};
pub use link::LinkAttrs;
pub use style::{BadgeStyle, Icon, StyleTable, Tone};
