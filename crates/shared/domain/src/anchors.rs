//! Document anchors.
//!
//! The six ids below are a contract between the navigation bar, the intra-page links and
//! the section containers. Renaming any of them breaks navigation.

use crate::models::NavItem;
use strum_macros::{AsRefStr, Display, EnumString, IntoStaticStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, AsRefStr, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Anchor {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Anchor {
    /// Layout order, top to bottom.
    pub const ALL: [Self; 6] =
        [Self::Home, Self::About, Self::Experience, Self::Projects, Self::Skills, Self::Contact];

    /// The element id used in the rendered document.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    /// Position of the anchor in layout order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Menu entries. Order defines both the menu and the scroll detection order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { anchor: Anchor::Home, label: "Home" },
    NavItem { anchor: Anchor::About, label: "About" },
    NavItem { anchor: Anchor::Experience, label: "Experience" },
    NavItem { anchor: Anchor::Projects, label: "Projects" },
    NavItem { anchor: Anchor::Skills, label: "Skills" },
    NavItem { anchor: Anchor::Contact, label: "Contact" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn ids_roundtrip_through_strum() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.to_string(), anchor.id());
            assert_eq!(Anchor::from_str(anchor.id()).ok(), Some(anchor));
        }
        assert!(Anchor::from_str("blog").is_err());
    }

    #[test]
    fn nav_items_follow_layout_order() {
        let anchors: Vec<_> = NAV_ITEMS.iter().map(|item| item.anchor).collect();
        assert_eq!(anchors, Anchor::ALL);
        assert!(NAV_ITEMS.iter().enumerate().all(|(i, item)| item.anchor.index() == i));
    }
}
