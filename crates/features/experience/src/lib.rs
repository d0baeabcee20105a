//! Experience section slice (`#experience`): an alternating timeline of engagements with a
//! kind badge, followed by a band of key achievements.

pub mod content;

use crate::content::{ACHIEVEMENTS_TITLE, ENTRIES, KEY_ACHIEVEMENTS, KIND_STYLES, TITLE};
use dioxus::prelude::*;
use folio_domain::models::{ExperienceEntry, Milestone};
use folio_ui::prelude::*;

#[component]
pub fn Experience(
    #[props(default = ENTRIES)] entries: &'static [ExperienceEntry],
    #[props(default = KEY_ACHIEVEMENTS)] achievements: &'static [Milestone],
) -> Element {
    let first_entry = header_slots(false);
    let band = first_entry + entries.len();
    let slots = band + usize::from(!achievements.is_empty());
    let reveal = use_reveal(Anchor::Experience, slots, RevealEffect::SlideInLeft);

    rsx! {
        SectionShell { anchor: Anchor::Experience, class: "experience",
            SectionHeader { title: "{TITLE}", reveal }

            div { class: "timeline",
                div { class: "timeline-line" }
                for (i, entry) in entries.iter().enumerate() {
                    TimelineItem {
                        key: "{entry.title}",
                        entry: *entry,
                        side: (if i % 2 == 0 { "is-left" } else { "is-right" }),
                        class: reveal.class(first_entry + i, "timeline-item"),
                    }
                }
            }

            if !achievements.is_empty() {
                div { class: reveal.class(band, "card milestones"),
                    h3 { class: "tone-primary", "{ACHIEVEMENTS_TITLE}" }
                    div { class: "milestone-grid",
                        for milestone in achievements.iter() {
                            div { key: "{milestone.headline}", class: format!("milestone {}", tone_class(milestone.tone)),
                                div { class: "milestone-headline", "{milestone.headline}" }
                                div { class: "milestone-caption", "{milestone.caption}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TimelineItem(entry: ExperienceEntry, side: &'static str, class: String) -> Element {
    let badge = KIND_STYLES.lookup(entry.kind);

    rsx! {
        div { class: "{class} {side}",
            div { class: "timeline-dot glow-primary" }
            div { class: "card timeline-card hover-lift",
                div { class: "timeline-meta",
                    span { class: format!("badge {}", tone_class(badge.tone)),
                        IconGlyph { icon: badge.icon }
                        "{entry.kind}"
                    }
                    span { class: "meta",
                        IconGlyph { icon: Icon::Calendar }
                        "{entry.period}"
                    }
                }
                h3 { class: "timeline-title", "{entry.title}" }
                div { class: "meta tone-accent",
                    IconGlyph { icon: Icon::Building }
                    "{entry.organization}"
                }
                div { class: "meta muted",
                    IconGlyph { icon: Icon::MapPin }
                    "{entry.location}"
                }
                ul { class: "achievements",
                    for line in entry.achievements {
                        li { "{line}" }
                    }
                }
            }
        }
    }
}
