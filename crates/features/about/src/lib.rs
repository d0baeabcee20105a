//! About section slice (`#about`): biography, education card and highlight cards.

pub mod content;

use crate::content::{BIO, EDUCATION, HEADLINE, HIGHLIGHTS, TITLE};
use dioxus::prelude::*;
use folio_domain::models::{Education, Highlight};
use folio_ui::prelude::*;

#[component]
pub fn About(
    #[props(default = HIGHLIGHTS)] highlights: &'static [Highlight],
    #[props(default = EDUCATION)] education: Education,
) -> Element {
    let intro = header_slots(false);
    let first_highlight = intro + 2;
    let reveal = use_reveal(Anchor::About, first_highlight + highlights.len(), RevealEffect::SlideInUp);

    rsx! {
        SectionShell { anchor: Anchor::About, class: "about",
            div { class: "section-wash" }
            SectionHeader { title: "{TITLE}", reveal }

            div { class: "about-grid",
                div { class: "about-text",
                    div { class: reveal.class(intro, "about-intro"),
                        h3 { class: "tone-primary", "{HEADLINE}" }
                        for paragraph in BIO {
                            p { class: "lead", "{paragraph}" }
                        }
                    }
                    div { class: reveal.class(intro + 1, "card education hover-lift"),
                        h4 { class: "tone-accent", "Education" }
                        p { class: "education-degree", "{education.degree}" }
                        p { class: "muted", "{education.institution}" }
                        p { class: "muted", "{education.details}" }
                    }
                }

                div { class: "highlight-grid",
                    for (i, item) in highlights.iter().enumerate() {
                        div { key: "{item.title}", class: reveal.class(first_highlight + i, "card highlight hover-lift"),
                            div { class: "highlight-icon tone-primary",
                                IconGlyph { icon: item.icon }
                            }
                            h4 { "{item.title}" }
                            p { class: "muted", "{item.description}" }
                        }
                    }
                }
            }
        }
    }
}
