use crate::reveal::Reveal;
use dioxus::prelude::*;
use folio_domain::{Anchor, Tone};

/// Base colour painted under every section background image.
const SECTION_COLOUR: &str = "rgb(34, 39, 54)";

/// Number of reveal slots a [`SectionHeader`] occupies.
#[must_use]
pub const fn header_slots(has_subtitle: bool) -> usize {
    if has_subtitle { 3 } else { 2 }
}

/// Modifier class for a tone, e.g. `tone-accent`.
#[must_use]
pub const fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => "tone-primary",
        Tone::Accent => "tone-accent",
        Tone::Secondary => "tone-secondary",
        Tone::Muted => "tone-muted",
    }
}

/// Inline style for a section backdrop: a solid colour, optionally covered by `image`
/// under a vertical shade from `shade.0` to `shade.1` opacity.
///
/// URLs that could break out of the CSS `url('...')` token are dropped and the plain colour
/// remains.
#[must_use]
pub fn background_style(image: Option<&str>, shade: (f32, f32)) -> String {
    let colour = format!("background-color: {SECTION_COLOUR};");
    match image.map(str::trim).filter(|url| is_safe_url(url)) {
        Some(url) => format!(
            "{colour} background-image: linear-gradient(rgba(34, 39, 54, {top}), rgba(34, 39, 54, {bottom})), url('{url}'); \
             background-size: cover; background-position: center;",
            top = shade.0,
            bottom = shade.1,
        ),
        None => colour,
    }
}

fn is_safe_url(url: &str) -> bool {
    !url.is_empty() && !url.chars().any(|c| c.is_control() || matches!(c, '\'' | '"' | '(' | ')' | '\\'))
}

/// A top-level page section anchored at `anchor`.
#[component]
pub fn SectionShell(
    anchor: Anchor,
    #[props(default)] class: String,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    rsx! {
        section {
            id: anchor.id(),
            class: "section section-{anchor} {class}",
            style,
            div { class: "section-inner", {children} }
        }
    }
}

/// Section title, gradient divider and optional subtitle. Occupies the first
/// [`header_slots`] reveal slots.
#[component]
pub fn SectionHeader(title: String, #[props(default)] subtitle: Option<String>, reveal: Reveal) -> Element {
    rsx! {
        header { class: "section-header",
            h2 { class: reveal.class(0, "section-title"),
                span { class: "text-gradient", "{title}" }
            }
            div { class: reveal.class(1, "section-divider") }
            if let Some(subtitle) = subtitle.as_deref() {
                p { class: reveal.class(2, "section-subtitle"), "{subtitle}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_layers_image_over_colour() {
        let style = background_style(Some("/assets/hero-bg.jpg"), (0.8, 0.6));
        assert!(style.starts_with("background-color: rgb(34, 39, 54);"));
        assert!(style.contains("rgba(34, 39, 54, 0.8), rgba(34, 39, 54, 0.6)"));
        assert!(style.contains("url('/assets/hero-bg.jpg')"));
    }

    #[test]
    fn missing_or_hostile_image_degrades_to_colour() {
        let plain = "background-color: rgb(34, 39, 54);";
        assert_eq!(background_style(None, (0.9, 0.8)), plain);
        assert_eq!(background_style(Some("   "), (0.9, 0.8)), plain);
        assert_eq!(background_style(Some("x'); color: red; ('"), (0.9, 0.8)), plain);
    }

    #[test]
    fn tone_classes_are_distinct() {
        let classes = [Tone::Primary, Tone::Accent, Tone::Secondary, Tone::Muted].map(tone_class);
        assert_eq!(classes, ["tone-primary", "tone-accent", "tone-secondary", "tone-muted"]);
        assert_eq!(header_slots(true), 3);
    }

    #[test]
    fn shell_carries_the_anchor_id() {
        let html = dioxus_ssr::render_element(rsx! {
            SectionShell { anchor: Anchor::Skills, class: "animated-bg", p { "body" } }
        });
        assert!(html.contains(r#"id="skills""#), "{html}");
        assert!(html.contains("section section-skills animated-bg"));
        assert!(html.contains("<p>body</p>"));
    }
}
