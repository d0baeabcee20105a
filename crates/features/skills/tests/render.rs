use dioxus::prelude::*;
use folio_skills::Skills;
use folio_skills::content::{CATEGORIES, PROFICIENCY};

fn render() -> String {
    dioxus_ssr::render_element(rsx! { Skills {} })
}

#[test]
fn every_category_gets_a_toned_card() {
    let html = render();
    assert_eq!(html.matches("card skill-card").count(), CATEGORIES.len(), "{html}");
    assert_eq!(html.matches("skill-card hover-lift tone-primary").count(), 3);
    assert_eq!(html.matches("skill-card hover-lift tone-accent").count(), 3);
    assert!(html.contains("icon-database"));
}

#[test]
fn marks_header_cards_payments_and_tiers() {
    let html = render();
    // 3 header slots, 6 cards, the payments block and the tiers band.
    assert_eq!(html.matches(" reveal\"").count(), 11, "{html}");
    assert!(html.contains("Stripe API"));
    for tier in PROFICIENCY {
        assert!(html.contains(tier.headline));
    }
}

#[test]
fn backdrop_keeps_an_even_shade() {
    let html = render();
    assert!(html.contains("rgba(34, 39, 54, 0.85), rgba(34, 39, 54, 0.85)"), "{html}");
}

#[test]
fn rendering_is_idempotent() {
    assert_eq!(render(), render());
}

#[test]
fn empty_tables_render_the_shell() {
    let html = dioxus_ssr::render_element(rsx! { Skills { categories: &[], payments: &[], proficiency: &[] } });
    assert!(html.contains(r#"id="skills""#));
    assert!(!html.contains("skill-card"), "{html}");
    assert!(!html.contains("payments"));
    assert!(!html.contains("tiers"));
    assert_eq!(html.matches(" reveal\"").count(), 3, "only the header is marked: {html}");
}
