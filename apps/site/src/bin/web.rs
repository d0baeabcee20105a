//! Browser entry point, built with `dx serve --features web --bin folio-web`.

use folio_site::{App, SiteApp};

fn main() {
    dioxus::logger::initialize_default();
    SiteApp::default().launch(App);
}
