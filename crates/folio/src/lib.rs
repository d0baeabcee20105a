//! Facade crate for the portfolio page.
//! Re-exports domain/kernel/ui primitives and composes the section slices into one document.
//! Keep this crate thin: it should compose other crates, not implement page logic.
//!
//! ## Usage
//! - Provide a [`SiteConfig`](domain::config::SiteConfig) as root context (optional; the
//!   defaults apply otherwise).
//! - Render [`Portfolio`] as the root component.

use dioxus::prelude::*;
pub use folio_domain as domain;
use folio_domain::Anchor;
use folio_hero::content::NAME;
pub use folio_kernel as kernel;
pub use folio_ui as ui;
use folio_ui::{NavBar, use_navigation_provider};

/// Section slices, one per anchor.
pub mod sections {
    pub use folio_about as about;
    pub use folio_contact as contact;
    pub use folio_experience as experience;
    pub use folio_hero as hero;
    pub use folio_projects as projects;
    pub use folio_skills as skills;

    pub use folio_about::About;
    pub use folio_contact::Contact;
    pub use folio_experience::Experience;
    pub use folio_hero::Hero;
    pub use folio_projects::Projects;
    pub use folio_skills::Skills;
}

/// Anchors in the order [`Portfolio`] lays them out.
pub const LAYOUT: [Anchor; 6] = Anchor::ALL;

/// The whole page: fixed navigation bar over the six sections in [`LAYOUT`] order.
#[component]
pub fn Portfolio() -> Element {
    use_navigation_provider();

    rsx! {
        div { class: "portfolio",
            NavBar { brand: "{NAME}" }
            main { class: "page",
                sections::Hero {}
                sections::About {}
                sections::Experience {}
                sections::Projects {}
                sections::Skills {}
                sections::Contact {}
            }
        }
    }
}
