//! Renders the portfolio into a single static HTML file.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use folio::domain::config::SiteConfig;
    use folio::kernel::config::load_site_config;
    use std::fs;
    use std::path::PathBuf;
    use tracing::info;

    #[derive(Debug, Parser)]
    #[command(name = "folio-export", about = "Render the portfolio to a static HTML document")]
    struct Args {
        /// Output file.
        #[arg(short, long, default_value = "dist/index.html")]
        out: PathBuf,
        /// Config file; `folio.toml` in the working directory is used when present.
        #[arg(short, long)]
        config: Option<PathBuf>,
    }

    let args = Args::parse();
    let config: SiteConfig = load_site_config(args.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _log = folio_site::init_logging("folio-export", &config.logging)?;

    let html = folio_site::render_document(&config);
    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("Cannot create {}", parent.display()))?;
    }
    fs::write(&args.out, &html).with_context(|| format!("Cannot write {}", args.out.display()))?;

    info!(out = %args.out.display(), bytes = html.len(), "Static page exported");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
