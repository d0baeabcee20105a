//! Projects section slice (`#projects`): featured project cards with full details and a
//! compact grid of the remaining projects.

pub mod content;

use crate::content::{CATEGORY_STYLES, COMPACT_STACK, MORE_TITLE, PROJECTS, SUBTITLE, TITLE};
use dioxus::prelude::*;
use folio_domain::models::Project;
use folio_ui::prelude::*;

#[component]
pub fn Projects(#[props(default = PROJECTS)] projects: &'static [Project]) -> Element {
    let site = use_site_config();
    let (featured, other) = Project::partition(projects);

    let first_card = header_slots(true);
    let more = first_card + featured.len();
    let slots = more + usize::from(!other.is_empty());
    let reveal = use_reveal(Anchor::Projects, slots, RevealEffect::SlideInUp);
    let backdrop = background_style(site.assets.projects_background.as_deref(), (0.9, 0.8));

    rsx! {
        SectionShell { anchor: Anchor::Projects, class: "projects fixed-bg", style: backdrop,
            SectionHeader { title: "{TITLE}", subtitle: SUBTITLE.to_owned(), reveal }

            div { class: "project-grid featured",
                for (i, project) in featured.iter().enumerate() {
                    FeaturedCard {
                        key: "{project.title}",
                        project: **project,
                        class: reveal.class(first_card + i, "card project-card hover-lift"),
                    }
                }
            }

            if !other.is_empty() {
                div { class: reveal.class(more, "more-projects"),
                    h3 { class: "more-title", "{MORE_TITLE}" }
                    div { class: "project-grid compact",
                        for project in other.iter() {
                            CompactCard { key: "{project.title}", project: **project }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FeaturedCard(project: Project, class: String) -> Element {
    let badge = CATEGORY_STYLES.lookup(project.category);

    rsx! {
        article { class,
            div { class: "project-head",
                span { class: format!("badge {}", tone_class(badge.tone)),
                    IconGlyph { icon: badge.icon }
                    "{project.category}"
                }
                div { class: "project-links",
                    OutboundLink {
                        href: project.url.to_owned(),
                        class: "icon-button",
                        label: format!("Open {}", project.title),
                        IconGlyph { icon: Icon::ExternalLink }
                    }
                    button {
                        class: "icon-button",
                        r#type: "button",
                        disabled: true,
                        aria_label: "Source not published",
                        IconGlyph { icon: Icon::Github }
                    }
                }
            }
            h3 { class: "project-title", "{project.title}" }
            p { class: "project-subtitle tone-accent", "{project.subtitle}" }
            div { class: "meta muted",
                IconGlyph { icon: Icon::Calendar }
                "{project.period}"
            }
            if !project.client.is_empty() {
                div { class: "meta muted project-client",
                    IconGlyph { icon: Icon::Building }
                    "{project.client}"
                }
            }
            p { class: "project-summary", "{project.summary}" }
            div { class: "chips",
                for tag in project.stack {
                    span { class: "chip", "{tag}" }
                }
            }
            p { class: "project-role",
                span { class: "tone-primary", "Role: " }
                "{project.role}"
            }
        }
    }
}

#[component]
fn CompactCard(project: Project) -> Element {
    let badge = CATEGORY_STYLES.lookup(project.category);
    let (shown, hidden) = project.stack_preview(COMPACT_STACK);

    rsx! {
        article { class: "card project-card compact hover-lift",
            div { class: "project-head",
                IconGlyph { icon: badge.icon, class: tone_class(badge.tone).to_owned() }
                OutboundLink {
                    href: project.url.to_owned(),
                    class: "icon-button",
                    label: format!("Open {}", project.title),
                    IconGlyph { icon: Icon::ExternalLink }
                }
            }
            h4 { class: "project-title", "{project.title}" }
            p { class: "project-subtitle", "{project.subtitle}" }
            div { class: "chips",
                for tag in shown {
                    span { class: "chip", "{tag}" }
                }
                if hidden > 0 {
                    span { class: "chip chip-more", "+{hidden}" }
                }
            }
        }
    }
}
