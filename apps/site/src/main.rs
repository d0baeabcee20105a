#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use folio::domain::config::SiteConfig;
use folio::kernel::config::load_site_config;
use folio_site::{App, SiteApp};

fn main() -> anyhow::Result<()> {
    let config: SiteConfig = load_site_config(None::<&str>).context("Critical: Configuration is malformed")?;
    let _log = folio_site::init_logging(env!("CARGO_PKG_NAME"), &config.logging)?;

    tracing::info!(title = %config.window.title, "Launching portfolio");
    SiteApp::new(config).launch(App);

    Ok(())
}
