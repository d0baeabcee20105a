//! Outbound link attributes.

/// `target`/`rel` pair for an anchor element.
///
/// External (`http`/`https`) links open in a new tab and must not leak `window.opener`.
/// `mailto:`, in-page and relative links keep the default browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkAttrs {
    pub target: Option<&'static str>,
    pub rel: Option<&'static str>,
}

impl LinkAttrs {
    pub const EXTERNAL: Self = Self { target: Some("_blank"), rel: Some("noopener noreferrer") };
    pub const SAME_CONTEXT: Self = Self { target: None, rel: None };

    #[must_use]
    pub fn for_href(href: &str) -> Self {
        if is_external(href) { Self::EXTERNAL } else { Self::SAME_CONTEXT }
    }
}

/// Whether `href` leaves the page for another origin.
#[must_use]
pub fn is_external(href: &str) -> bool {
    let href = href.trim_start();
    ["http://", "https://", "//"]
        .iter()
        .any(|scheme| href.get(..scheme.len()).is_some_and(|p| p.eq_ignore_ascii_case(scheme)))
}
