use dioxus::prelude::*;
use folio_domain::models::Project;
use folio_domain::{BadgeStyle, Icon, Tone};
use folio_projects::Projects;
use folio_projects::content::{CATEGORY_STYLES, PROJECTS};

fn render() -> String {
    dioxus_ssr::render_element(rsx! { Projects {} })
}

const LONG_STACK: &[Project] = &[Project {
    title: "Ledger",
    subtitle: "Side ledger",
    period: "2025",
    client: "Self",
    role: "Author",
    stack: &["Rust", "Dioxus", "Wasm", "Tokio", "Serde"],
    url: "https://ledger.example.org",
    summary: "A ledger.",
    category: "quantum",
    featured: false,
}];

#[test]
fn categories_resolve_through_the_style_table() {
    assert_eq!(CATEGORY_STYLES.lookup("blockchain"), BadgeStyle::new(Icon::Layers, Tone::Accent));
    assert_eq!(CATEGORY_STYLES.lookup("fullstack").tone, Tone::Primary);
    assert_eq!(CATEGORY_STYLES.lookup("backend").tone, Tone::Secondary);
    assert_eq!(CATEGORY_STYLES.lookup("mobile"), BadgeStyle::new(Icon::Code, Tone::Muted));
}

#[test]
fn featured_projects_come_first() {
    let html = render();
    let (featured, other) = Project::partition(PROJECTS);
    assert_eq!(featured.len(), 3);
    assert_eq!(html.matches("card project-card hover-lift").count(), 3, "{html}");
    assert_eq!(html.matches("project-card compact").count(), other.len(), "{html}");

    let more = html.find("Additional Projects").expect("compact block rendered");
    for project in featured {
        assert!(html.find(project.title).is_some_and(|at| at < more), "{}", project.title);
    }
    for project in other {
        assert!(html.find(project.title).is_some_and(|at| at > more), "{}", project.title);
    }
}

#[test]
fn featured_cards_name_the_client() {
    let html = render();
    let (featured, other) = Project::partition(PROJECTS);
    assert_eq!(html.matches("project-client").count(), featured.len(), "{html}");
    assert!(html.contains("Freelance blockchain demo for local fintech startup"));
    assert!(html.contains("Side project portfolio"));
    for project in other {
        assert!(!html.contains(project.client), "compact cards stay compact: {}", project.client);
    }
}

#[test]
fn project_links_open_in_a_new_tab() {
    let html = render();
    assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), PROJECTS.len(), "{html}");
    assert!(html.contains(r#"href="https://tokenswapua.com""#));
}

#[test]
fn compact_cards_cap_the_stack() {
    let html = dioxus_ssr::render_element(rsx! { Projects { projects: LONG_STACK } });
    assert!(html.contains("Wasm"));
    assert!(!html.contains("Tokio"), "{html}");
    assert!(html.contains("+2"));
    assert!(html.contains("tone-muted"), "unknown category falls back: {html}");
}

#[test]
fn rendering_is_idempotent() {
    assert_eq!(render(), render());
}

#[test]
fn empty_table_renders_the_shell() {
    let html = dioxus_ssr::render_element(rsx! { Projects { projects: &[] } });
    assert!(html.contains(r#"id="projects""#));
    assert!(!html.contains("project-card"), "{html}");
    assert!(!html.contains("Additional Projects"));
}
