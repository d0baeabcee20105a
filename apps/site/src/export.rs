use crate::VIEWPORT_META;
use dioxus::prelude::*;
use folio::Portfolio;
use folio::domain::config::SiteConfig;
use tracing::debug;

/// The page stylesheet, inlined into exported documents.
pub const STYLESHEET: &str = include_str!("../assets/main.css");

/// Renders the page with `config` into a standalone HTML document.
///
/// The document carries no script, so the page stays fully visible and navigation falls back
/// to plain fragment links.
#[must_use]
pub fn render_document(config: &SiteConfig) -> String {
    let mut dom = VirtualDom::new(Portfolio).with_root_context(config.clone());
    dom.rebuild_in_place();
    let body = dioxus_ssr::render(&dom);
    debug!(bytes = body.len(), "Rendered page body");

    let text = &config.window.title;
    let head_title = dioxus_ssr::render_element(rsx! {
        title { "{text}" }
    });

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n{VIEWPORT_META}\n\
         {head_title}\n<style>\n{STYLESHEET}</style>\n</head>\n<body>\n<div id=\"main\">{body}</div>\n\
         </body>\n</html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_markup_is_rendered_as_text() {
        let mut config = SiteConfig::default();
        config.window.title = "<script>alert(1)</script>".to_owned();
        let html = render_document(&config);
        assert!(!html.contains("<script>"), "{html}");
        assert!(html.contains("<title>&lt;script&gt;alert(1)&lt;/script&gt;</title>"), "{html}");
    }
}
