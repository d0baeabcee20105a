//! Page navigation: which section is under the header, and smooth scrolling to sections.
//!
//! The page root calls [`use_navigation_provider`] once; the bar and any intra-page button
//! reach the same state through [`use_navigation`].

use crate::bridge::{Bridge, BridgeEvent, DomViewport};
use crate::config::use_site_config;
use crate::icon::IconGlyph;
use dioxus::prelude::*;
use folio_domain::models::NavItem;
use folio_domain::{Anchor, Icon, NAV_ITEMS};
use folio_kernel::motion::NavigationController;
use std::str::FromStr;
use tracing::debug;

/// Shared handle to the page navigation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Navigation {
    active: Signal<Anchor>,
    controller: Signal<Option<NavigationController<DomViewport>>>,
}

impl Navigation {
    /// The highlighted section. Starts at [`Anchor::Home`].
    #[must_use]
    pub fn active(&self) -> Anchor {
        *self.active.read()
    }

    #[must_use]
    pub fn is_active(&self, anchor: Anchor) -> bool {
        self.active() == anchor
    }

    /// Whether the page bridge is up and scroll requests can be honoured.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.controller.read().is_some()
    }

    /// Smooth-scrolls to `anchor`. Returns `false` when nothing was scrolled, so callers can
    /// fall back to the browser's own fragment navigation.
    pub fn navigate_to(mut self, anchor: Anchor) -> bool {
        let target = self.controller.write().as_mut().and_then(|nav| nav.navigate_to(anchor.id()));
        debug!(section = %anchor, ?target, "Navigate");
        target.is_some()
    }
}

/// Creates the page navigation state, provides it to descendants and starts the scroll
/// bridge.
pub fn use_navigation_provider() -> Navigation {
    let site = use_site_config();
    let nav = use_context_provider(|| Navigation { active: Signal::new(Anchor::Home), controller: Signal::new(None) });

    use_hook(move || {
        let settings = site.navigation;
        spawn(async move {
            let mut nav = nav;
            let mut bridge = match Bridge::connect().await {
                Ok(bridge) => bridge,
                Err(e) => {
                    debug!(error = %e, "Navigation bridge unavailable, keeping fragment links");
                    return;
                },
            };

            let viewport = bridge.viewport();
            let ids = Anchor::ALL.map(Anchor::id);
            if let Err(e) = viewport.track(&ids) {
                debug!(error = %e, "Cannot track section layout");
                return;
            }
            nav.controller.set(Some(NavigationController::new(viewport, ids, settings)));

            while let Ok(event) = bridge.next_event().await {
                if !matches!(event, BridgeEvent::Layout { .. }) {
                    continue;
                }
                let changed = {
                    let mut controller = nav.controller.write();
                    match controller.as_mut() {
                        Some(c) => {
                            if c.on_scroll() {
                                c.active().and_then(|id| Anchor::from_str(id).ok())
                            } else {
                                None
                            }
                        }
                        None => None,
                    }
                };
                if let Some(anchor) = changed {
                    nav.active.set(anchor);
                }
            }
        });
    });

    nav
}

/// The navigation state provided by the page root, if any.
pub fn use_navigation() -> Option<Navigation> {
    try_use_context::<Navigation>()
}

/// Fixed header with the brand, one link per section and a mobile menu toggle.
#[component]
pub fn NavBar(brand: String) -> Element {
    let mut open = use_signal(|| false);
    let active = use_navigation().map_or(Anchor::Home, |n| n.active());

    rsx! {
        nav { class: "site-nav",
            div { class: "site-nav-inner",
                a { class: "nav-brand text-gradient", href: "#home", "{brand}" }
                div { class: if open() { "nav-links is-open" } else { "nav-links" },
                    for item in NAV_ITEMS.iter().copied() {
                        NavLink {
                            key: "{item.anchor}",
                            item,
                            active: item.anchor == active,
                            onselect: move |_| open.set(false),
                        }
                    }
                }
                button {
                    class: "nav-toggle",
                    r#type: "button",
                    aria_label: "Toggle menu",
                    aria_expanded: "{open}",
                    onclick: move |_| {
                        let next = !open();
                        open.set(next);
                    },
                    IconGlyph { icon: Icon::Menu }
                }
            }
        }
    }
}

#[component]
fn NavLink(item: NavItem, active: bool, onselect: EventHandler<Anchor>) -> Element {
    let nav = use_navigation();
    let anchor = item.anchor;

    rsx! {
        a {
            class: if active { "nav-link is-active" } else { "nav-link" },
            href: "#{anchor}",
            aria_current: if active { "true" } else { "false" },
            onclick: move |evt: MouseEvent| {
                if nav.is_some_and(|n| n.navigate_to(anchor)) {
                    evt.prevent_default();
                }
                onselect.call(anchor);
            },
            "{item.label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Page() -> Element {
        let nav = use_navigation_provider();
        let (active, connected) = (nav.active(), nav.is_connected());
        rsx! {
            NavBar { brand: "Kushnir Ustym" }
            p { id: "nav-state", "{active} connected={connected}" }
        }
    }

    #[test]
    fn bar_lists_sections_in_layout_order() {
        let html = dioxus_ssr::render_element(rsx! { Page {} });
        let positions: Vec<usize> = Anchor::ALL
            .iter()
            .map(|a| html.find(&format!(r##"href="#{a}""##)).expect("link rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{html}");
    }

    #[test]
    fn home_is_active_before_any_scroll() {
        let html = dioxus_ssr::render_element(rsx! { Page {} });
        assert_eq!(html.matches("nav-link is-active").count(), 1, "{html}");
        assert!(html.contains(r##"class="nav-link is-active" href="#home""##), "{html}");
        assert!(html.contains("home connected=false"), "{html}");
    }

    #[test]
    fn bar_renders_without_provider() {
        let html = dioxus_ssr::render_element(rsx! { NavBar { brand: "Folio" } });
        assert!(html.contains("Folio"));
        assert!(html.contains("nav-toggle"));
    }
}
