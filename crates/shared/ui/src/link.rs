use dioxus::prelude::*;
use folio_domain::LinkAttrs;

/// An anchor element whose `target`/`rel` follow from its `href`: external links open in a
/// new tab without access to the opener, everything else stays in place.
#[component]
pub fn OutboundLink(
    href: String,
    #[props(default)] class: String,
    #[props(default)] label: Option<String>,
    children: Element,
) -> Element {
    let attrs = LinkAttrs::for_href(&href);
    rsx! {
        a {
            href: "{href}",
            class,
            target: attrs.target,
            rel: attrs.rel,
            aria_label: label,
            {children}
        }
    }
}
