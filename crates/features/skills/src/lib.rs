//! Skills section slice (`#skills`): skill category cards, payment integration chips and
//! proficiency tiers.

pub mod content;

use crate::content::{CATEGORIES, PAYMENTS_TITLE, PAYMENT_APIS, PROFICIENCY, SUBTITLE, TITLE};
use dioxus::prelude::*;
use folio_domain::models::{Milestone, SkillCategory};
use folio_ui::prelude::*;

#[component]
pub fn Skills(
    #[props(default = CATEGORIES)] categories: &'static [SkillCategory],
    #[props(default = PAYMENT_APIS)] payments: &'static [&'static str],
    #[props(default = PROFICIENCY)] proficiency: &'static [Milestone],
) -> Element {
    let site = use_site_config();

    let first_card = header_slots(true);
    let payments_slot = first_card + categories.len();
    let tiers_slot = payments_slot + usize::from(!payments.is_empty());
    let slots = tiers_slot + usize::from(!proficiency.is_empty());

    let reveal = use_reveal(Anchor::Skills, slots, RevealEffect::FadeScale);
    let backdrop = background_style(site.assets.skills_background.as_deref(), (0.85, 0.85));

    rsx! {
        SectionShell { anchor: Anchor::Skills, class: "skills", style: backdrop,
            SectionHeader { title: "{TITLE}", subtitle: SUBTITLE.to_owned(), reveal }

            div { class: "skill-grid",
                for (i, category) in categories.iter().enumerate() {
                    div {
                        key: "{category.title}",
                        class: reveal.class(first_card + i, &format!("card skill-card hover-lift {}", tone_class(category.tone))),
                        div { class: "skill-head",
                            span { class: "skill-icon", IconGlyph { icon: category.icon } }
                            h3 { "{category.title}" }
                        }
                        ul { class: "skill-list",
                            for skill in category.skills {
                                li { span { class: "dot" } "{skill}" }
                            }
                        }
                    }
                }
            }

            if !payments.is_empty() {
                div { class: reveal.class(payments_slot, "payments"),
                    h3 { class: "tone-primary", "{PAYMENTS_TITLE}" }
                    div { class: "chips",
                        for api in payments.iter() {
                            span { key: "{api}", class: "chip chip-lg hover-lift", "{api}" }
                        }
                    }
                }
            }

            if !proficiency.is_empty() {
                div { class: reveal.class(tiers_slot, "tiers"),
                    for tier in proficiency.iter() {
                        div { key: "{tier.headline}", class: "card tier hover-lift",
                            div { class: format!("tier-headline {}", tone_class(tier.tone)), "{tier.headline}" }
                            div { class: "muted", "{tier.caption}" }
                        }
                    }
                }
            }
        }
    }
}
