//! Contact section slice (`#contact`): contact channels, availability, a message form that
//! is not wired to any backend, and the page footer.

pub mod content;

use crate::content::{
    AVAILABILITY, AVAILABILITY_TITLE, CHANNELS, FOOTER, FOOTER_NOTE, FORM_FIELDS, FORM_TITLE, INTRO, INTRO_TITLE,
    SUBMIT_LABEL, SUBTITLE, TITLE,
};
use dioxus::prelude::*;
use folio_domain::models::ContactChannel;
use folio_ui::prelude::*;
use tracing::debug;

#[component]
pub fn Contact(#[props(default = CHANNELS)] channels: &'static [ContactChannel]) -> Element {
    let intro = header_slots(true);
    let first_channel = intro + 1;
    let availability = first_channel + channels.len();
    let form = availability + 1;
    let footer = form + 1;
    let reveal = use_reveal(Anchor::Contact, footer + 1, RevealEffect::SlideInUp);

    rsx! {
        SectionShell { anchor: Anchor::Contact, class: "contact animated-bg particles",
            SectionHeader { title: "{TITLE}", subtitle: SUBTITLE.to_owned(), reveal }

            div { class: "contact-grid",
                div { class: "contact-info",
                    div { class: reveal.class(intro, "contact-intro"),
                        h3 { class: "tone-primary", "{INTRO_TITLE}" }
                        p { class: "lead", "{INTRO}" }
                    }

                    div { class: "channels",
                        for (i, channel) in channels.iter().enumerate() {
                            ChannelCard {
                                key: "{channel.label}",
                                channel: *channel,
                                class: reveal.class(first_channel + i, "card channel hover-lift"),
                            }
                        }
                    }

                    div { class: reveal.class(availability, "card availability"),
                        h4 { class: "tone-accent", "{AVAILABILITY_TITLE}" }
                        for line in AVAILABILITY {
                            p { class: "muted", "{line}" }
                        }
                    }
                }

                div { class: reveal.class(form, "contact-form-wrap"),
                    MessageForm {}
                }
            }

            footer { class: reveal.class(footer, "site-footer"),
                p { class: "muted", "{FOOTER}" }
                p { class: "muted small", "{FOOTER_NOTE}" }
            }
        }
    }
}

#[component]
fn ChannelCard(channel: ContactChannel, class: String) -> Element {
    let body = rsx! {
        div { class: "channel-row",
            span { class: format!("channel-icon {}", tone_class(channel.tone)),
                IconGlyph { icon: channel.icon }
            }
            div {
                div { class: "channel-label muted", "{channel.label}" }
                div { class: "channel-value", "{channel.value}" }
            }
        }
    };

    match channel.href {
        Some(href) => rsx! {
            OutboundLink { href: href.to_owned(), class: "{class} is-link", {body} }
        },
        None => rsx! {
            div { class, {body} }
        },
    }
}

#[component]
fn MessageForm() -> Element {
    rsx! {
        div { class: "card contact-form",
            h3 { class: "tone-primary", "{FORM_TITLE}" }
            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    debug!("Contact form submitted, no delivery is configured");
                },
                for field in FORM_FIELDS {
                    div { key: "{field.id}", class: "field",
                        label { r#for: field.id, "{field.label}" }
                        if let Some(kind) = field.kind {
                            input { r#type: kind, id: field.id, name: field.id, placeholder: field.placeholder }
                        } else {
                            textarea { id: field.id, name: field.id, rows: "5", placeholder: field.placeholder }
                        }
                    }
                }
                button { class: "button-primary glow-primary hover-lift", r#type: "submit",
                    IconGlyph { icon: Icon::Send }
                    "{SUBMIT_LABEL}"
                }
            }
        }
    }
}
