use folio::LAYOUT;
use folio::domain::config::SiteConfig;
use folio_site::{STYLESHEET, render_document};

#[test]
fn document_is_standalone() {
    let html = render_document(&SiteConfig::default());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Kushnir Ustym | Portfolio</title>"), "{html}");
    assert!(html.contains(STYLESHEET));
    assert!(!html.contains("<script"), "exports carry no script");
}

#[test]
fn document_holds_every_section_in_order() {
    let html = render_document(&SiteConfig::default());
    let mut last = 0;
    for anchor in LAYOUT {
        let at = html.find(&format!(r#"<section id="{anchor}""#)).expect("section rendered");
        assert!(at > last, "{anchor} out of order");
        last = at;
    }
}

#[test]
fn configured_title_is_escaped() {
    let mut config = SiteConfig::default();
    config.window.title = "Dev & Chain".to_owned();
    let html = render_document(&config);
    assert!(html.contains("<title>Dev &amp; Chain</title>"));
}

#[test]
fn export_is_deterministic() {
    let config = SiteConfig::default();
    assert_eq!(render_document(&config), render_document(&config));
}
