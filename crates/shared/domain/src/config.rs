use crate::anchors::Anchor;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Top-level site configuration shared by the launcher and the page.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub window: WindowConfig,
    pub motion: MotionConfig,
    pub navigation: NavigationConfig,
    pub assets: AssetsConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into component contexts.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Native window settings (desktop renderer) and the document title.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Reveal animation tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Visible fraction of a section that activates its reveal.
    pub threshold: f64,
    pub hero_step_ms: u64,
    pub about_step_ms: u64,
    pub experience_step_ms: u64,
    pub projects_step_ms: u64,
    pub skills_step_ms: u64,
    pub contact_step_ms: u64,
}

/// Scroll bookkeeping offsets, in CSS pixels.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Added to the scroll offset before matching section tops.
    pub lookahead: f64,
    /// Subtracted from a section top when scrolling to it (fixed header height).
    pub header_clearance: f64,
}

/// Background images. Opaque URLs; a missing image leaves the section colour visible.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub hero_background: Option<String>,
    pub projects_background: Option<String>,
    pub skills_background: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<PathBuf>,
    pub json: bool,
}

impl MotionConfig {
    /// Per-child stagger step of the section at `anchor`.
    #[must_use]
    pub const fn step(&self, anchor: Anchor) -> Duration {
        let ms = match anchor {
            Anchor::Home => self.hero_step_ms,
            Anchor::About => self.about_step_ms,
            Anchor::Experience => self.experience_step_ms,
            Anchor::Projects => self.projects_step_ms,
            Anchor::Skills => self.skills_step_ms,
            Anchor::Contact => self.contact_step_ms,
        };
        Duration::from_millis(ms)
    }
}

// --- Default ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Kushnir Ustym | Portfolio".to_owned(), width: 1280.0, height: 860.0 }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            hero_step_ms: 100,
            about_step_ms: 100,
            experience_step_ms: 200,
            projects_step_ms: 150,
            skills_step_ms: 100,
            contact_step_ms: 100,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { lookahead: 100.0, header_clearance: 80.0 }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            hero_background: Some("/assets/hero-bg.jpg".to_owned()),
            projects_background: Some("/assets/projects-bg.jpg".to_owned()),
            skills_background: Some("/assets/skills-bg.jpg".to_owned()),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false }
    }
}
