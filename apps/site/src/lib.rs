//! Launchers for the portfolio page: the interactive app (desktop webview or browser) and a
//! static HTML export.

mod export;

pub use export::{STYLESHEET, render_document};

use dioxus::prelude::*;
use folio::Portfolio;
use folio::domain::config::SiteConfig;
use folio::ui::use_site_config;

#[cfg(not(target_arch = "wasm32"))]
use folio_logger::{FileOutput, Logger, LoggerError, parse_level};

const MAIN_CSS: Asset = asset!("/assets/main.css");

pub(crate) const VIEWPORT_META: &str = r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#;

/// Root component of the interactive app.
#[component]
pub fn App() -> Element {
    let title = use_site_config().window.title.clone();

    rsx! {
        document::Title { "{title}" }
        document::Stylesheet { href: MAIN_CSS }
        Portfolio {}
    }
}

#[derive(Debug, Clone, Default)]
pub struct SiteApp {
    config: SiteConfig,
}

impl SiteApp {
    #[must_use]
    pub const fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The entry point for launching the app. The config becomes the root context of
    /// the page. Only available with a renderer feature (`desktop` or `web`).
    #[cfg(any(feature = "desktop", feature = "web"))]
    pub fn launch(self, root: fn() -> Element) {
        let config = self.config;

        #[cfg(feature = "desktop")]
        let builder = {
            use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

            let window = WindowBuilder::new()
                .with_title(&config.window.title)
                .with_inner_size(LogicalSize { width: config.window.width, height: config.window.height });
            LaunchBuilder::desktop()
                .with_cfg(Config::default().with_window(window).with_custom_head(VIEWPORT_META.into()))
        };
        #[cfg(all(feature = "web", not(feature = "desktop")))]
        let builder = LaunchBuilder::web();

        builder.with_context_provider(move || Box::new(config.clone())).launch(root);
    }
}

/// Installs the global subscriber described by the `logging` config section.
///
/// # Errors
/// Returns an error if the level is unknown, the log directory cannot be used or a
/// subscriber is already installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(name: &str, logging: &folio::domain::config::LoggingConfig) -> Result<Logger, LoggerError> {
    let mut builder = Logger::builder().name(name).level(parse_level(&logging.level)?);
    if let Some(directory) = &logging.directory {
        builder = builder.file(FileOutput::new(directory.clone()).json(logging.json));
    }
    builder.init()
}
