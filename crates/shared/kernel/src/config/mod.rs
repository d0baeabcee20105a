use crate::domain::config::SiteConfig;
use crate::error::format_context;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment prefix for overrides, e.g. `FOLIO__MOTION__THRESHOLD=0.2`.
pub const ENV_PREFIX: &str = "FOLIO";

/// Config file looked up in the working directory when no path is given (any extension
/// supported by the `config` crate, e.g. `folio.toml`).
pub const DEFAULT_FILE: &str = "folio";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Invalid config{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}


pub trait ConfigErrorExt<T> {
    /// # Errors
    /// Wraps the underlying error into [`ConfigError`] with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Loads the site configuration by layering a file under environment overrides.
///
/// 1. **Base File**: an explicit `path` must exist. Without a path, the optional
///    [`DEFAULT_FILE`] in the working directory is used when present, otherwise every
///    value falls back to `T`'s serde defaults.
/// 2. **Environment Overrides**: variables prefixed with `FOLIO__`; nested keys are
///    separated by double underscores (`FOLIO__NAVIGATION__HEADER_CLEARANCE` maps to
///    `navigation.header_clearance`).
///
/// # Errors
/// Returns an error if an explicit file is missing or unreadable, or if the merged values
/// do not match the structure of `T`.
///
/// # Example
/// ```rust
/// use folio_kernel::config::load_config;
/// use folio_kernel::domain::config::SiteConfig;
///
/// let cfg: SiteConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(cfg.motion.threshold > 0.0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path
        .map_or_else(|| (PathBuf::from(DEFAULT_FILE), false), |p| (p.as_ref().to_path_buf(), true));

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        );

    info!(path = %effective_path.display(), required, "Loading site config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads a [`SiteConfig`] with [`load_config`] and rejects values the page cannot use.
///
/// # Errors
/// Everything [`load_config`] reports, plus [`ConfigError::Invalid`] when
/// `motion.threshold` is not a finite fraction in `0.0..=1.0`.
pub fn load_site_config(path: Option<impl AsRef<Path>>) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = load_config(path)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
    let threshold = config.motion.threshold;
    if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
        return Err(ConfigError::Invalid {
            message: format!("motion.threshold must be within 0.0..=1.0, got {threshold}").into(),
            context: Some("Failed to validate config".into()),
        });
    }
    Ok(())
}
