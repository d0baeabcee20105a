use dioxus::prelude::*;
use folio_domain::config::SiteConfig;

/// The site configuration provided by the page root, or the defaults when rendered
/// outside of it (tests, isolated previews).
pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_default()
}
