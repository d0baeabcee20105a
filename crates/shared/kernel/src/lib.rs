//! Kernel utilities shared across section slices.
//! Keep this crate framework-free: it owns the page mechanics (reveal staggering and
//! scroll bookkeeping) behind the [`Viewport`](motion::Viewport) capability, plus config
//! loading for native launchers. Rendering lives in `folio-ui`.
//!
//! ## Reveal a section
//! ```rust
//! use folio_kernel::motion::{DetachedViewport, RevealConfig, RevealController, RevealPhase};
//!
//! // Without an observation primitive the section degrades to fully visible.
//! let reveal = RevealController::mount(DetachedViewport, RevealConfig::new("about", 3));
//! assert_eq!(reveal.phase(), RevealPhase::Degraded);
//! assert!(reveal.is_revealed(2));
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use folio_kernel::config::load_config;
//! let cfg: folio_kernel::domain::config::SiteConfig = load_config(Some("folio.toml"))?;
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod error;
pub mod motion;

pub use folio_domain as domain;
