//! Hero section slice (`#home`): name, role line, contact line, social links, the call to
//! action that scrolls to `#about`, and a pointer-following backdrop.

pub mod content;
mod orbs;

pub use orbs::{OrbLayout, Pointer, StageArea};

use crate::content::{CALL_TO_ACTION, EMAIL, LOCATION, NAME, ROLE_ACCENT, ROLE_PRIMARY, SOCIAL_LINKS};
use dioxus::prelude::*;
use folio_domain::models::ContactChannel;
use folio_ui::prelude::*;
use tracing::trace;

/// Title, role, contact line, socials, call to action, scroll indicator.
const SLOTS: usize = 6;

#[component]
pub fn Hero(#[props(default = SOCIAL_LINKS)] socials: &'static [ContactChannel]) -> Element {
    let site = use_site_config();
    let reveal = use_reveal(Anchor::Home, SLOTS, RevealEffect::SlideInUp);
    let navigation = use_navigation();
    let mut pointer = use_signal(Pointer::default);
    let mut area = use_signal(StageArea::default);

    let orbs = OrbLayout::follow(pointer());
    let backdrop = background_style(site.assets.hero_background.as_deref(), (0.8, 0.6));

    rsx! {
        SectionShell { anchor: Anchor::Home, class: "hero animated-bg particles", style: backdrop,
            div {
                class: "hero-stage",
                onmounted: move |evt: MountedEvent| async move {
                    if let Ok(rect) = evt.get_client_rect().await {
                        area.write().resize(rect.width(), rect.height());
                    }
                },
                onresize: move |evt: ResizeEvent| {
                    if let Ok(size) = evt.get_border_box_size() {
                        area.write().resize(size.width, size.height);
                    }
                },
                onmousemove: move |evt: MouseEvent| {
                    let at = evt.element_coordinates();
                    if let Some(next) = area.read().pointer(at.x, at.y) {
                        pointer.set(next);
                    }
                },

                div { class: "orb orb-primary", style: orbs.primary_style() }
                div { class: "orb orb-accent", style: orbs.accent_style() }

                div { class: "hero-content",
                    h1 { class: reveal.class(0, "hero-title"),
                        span { class: "text-gradient text-glow", "{NAME}" }
                    }
                    p { class: reveal.class(1, "hero-role"),
                        span { class: "tone-primary", "{ROLE_PRIMARY}" }
                        " & "
                        span { class: "tone-accent", "{ROLE_ACCENT}" }
                    }
                    div { class: reveal.class(2, "hero-contact"),
                        span { class: "hero-contact-item",
                            IconGlyph { icon: Icon::MapPin }
                            "{LOCATION}"
                        }
                        span { class: "hero-contact-item",
                            IconGlyph { icon: Icon::Mail }
                            "{EMAIL}"
                        }
                    }
                    div { class: reveal.class(3, "hero-socials"),
                        for channel in socials.iter() {
                            if let Some(href) = channel.href {
                                OutboundLink {
                                    key: "{channel.label}",
                                    href: href.to_owned(),
                                    class: format!("social-link {}", tone_class(channel.tone)),
                                    label: channel.label.to_owned(),
                                    IconGlyph { icon: channel.icon }
                                }
                            }
                        }
                    }
                    a {
                        class: reveal.class(4, "cta glow-primary"),
                        href: format!("#{}", Anchor::About.id()),
                        onclick: move |evt: MouseEvent| {
                            if navigation.is_some_and(|nav| nav.navigate_to(Anchor::About)) {
                                evt.prevent_default();
                            } else {
                                trace!("Call to action falls back to fragment navigation");
                            }
                        },
                        "{CALL_TO_ACTION}"
                        IconGlyph { icon: Icon::ChevronDown, class: "bounce" }
                    }
                }
            }

            div { class: reveal.class(5, "scroll-indicator"), "aria-hidden": "true" }
        }
    }
}
