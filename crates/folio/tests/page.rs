use dioxus::prelude::*;
use folio::domain::config::SiteConfig;
use folio::{LAYOUT, Portfolio};

fn render_with(config: SiteConfig) -> String {
    let mut dom = VirtualDom::new(Portfolio).with_root_context(config);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render() -> String {
    dioxus_ssr::render_element(rsx! { Portfolio {} })
}

#[test]
fn sections_follow_layout_order() {
    let html = render();
    let positions: Vec<usize> = LAYOUT
        .iter()
        .map(|a| html.find(&format!(r#"<section id="{a}""#)).expect("section rendered"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{html}");
}

#[test]
fn every_anchor_has_exactly_one_section_and_one_link() {
    let html = render();
    for anchor in LAYOUT {
        assert_eq!(html.matches(&format!(r#"id="{anchor}""#)).count(), 1, "{anchor}");
        assert!(html.contains(&format!(r##"href="#{anchor}""##)), "{anchor}");
    }
    assert_eq!(html.matches("nav-link is-active").count(), 1);
}

#[test]
fn nothing_is_revealed_before_the_bridge_runs() {
    let html = render();
    assert!(html.contains(" reveal"));
    assert!(!html.contains("is-revealed"), "{html}");
}

#[test]
fn rendering_is_idempotent() {
    assert_eq!(render(), render());
}

#[test]
fn root_config_reaches_the_sections() {
    let mut config = SiteConfig::default();
    config.assets.hero_background = None;
    config.assets.projects_background = Some("/media/projects.webp".to_owned());

    let html = render_with(config);
    assert!(!html.contains("hero-bg.jpg"), "{html}");
    assert!(html.contains("/media/projects.webp"), "{html}");
    assert!(html.contains("skills-bg.jpg"), "untouched defaults stay: {html}");
}
