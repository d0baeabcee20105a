//! # Logger
//!
//! Installs the global `tracing` subscriber for the native portfolio launchers: a compact
//! console layer, an optional rolling file (plain or JSON) written through a non-blocking
//! worker, and `RUST_LOG`-style filtering.
//!
//! The browser build does not use this crate; it logs through the Dioxus web logger.
//!
//! ## Example
//!
//! ```rust
//! # use folio_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("folio")
//!     .level(LevelFilter::DEBUG)
//!     .env_filter("folio_kernel=trace")
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

/// Where and how log files are written.
#[derive(Debug, Clone)]
pub struct FileOutput {
    directory: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl FileOutput {
    /// Daily-rotated plain-text files in `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        }
    }

    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Writes one JSON object per event instead of plain text.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

/// Configures and installs the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    level: LevelFilter,
    env_filter: Option<String>,
    console: bool,
    file: Option<FileOutput>,
}

impl LoggerBuilder {
    /// Identifies the application; used as the log file prefix (`folio.2025-01-31.log`).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Default level for targets without an explicit directive.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Adds directives such as `folio_ui=debug,dioxus=warn`.
    ///
    /// `RUST_LOG` is ignored when an explicit filter is set. Invalid directives make
    /// [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn file(mut self, output: FileOutput) -> Self {
        self.file = Some(output);
        self
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the whole program: it owns the worker that
    /// flushes file output.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`, an
    ///   invalid filter, or no output at all.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] if the log directory or file
    ///   cannot be created.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let filter = self.build_filter()?;

        let mut layers = Vec::new();
        if self.console {
            layers.push(layer().compact().with_target(true).with_ansi(true).boxed());
        }

        let guard = match &self.file {
            Some(output) => {
                fs::create_dir_all(&output.directory).context(format!(
                    "Failed to create log directory {}",
                    output.directory.display()
                ))?;

                let appender = RollingFileAppender::builder()
                    .rotation(output.rotation.clone())
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(output.max_files)
                    .build(&output.directory)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if output.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        tracing::debug!(name = %self.name, file = self.file.is_some(), "Logger initialized");

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::invalid("Logger name cannot be empty"));
        }
        if !self.console && self.file.is_none() {
            return Err(LoggerError::invalid("No outputs enabled. Enable console or file output."));
        }
        if self.file.as_ref().is_some_and(|f| f.max_files == 0) {
            return Err(LoggerError::invalid("max_files must be greater than zero"));
        }
        Ok(())
    }

    fn build_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.env_filter {
            None => Ok(builder.from_env_lossy()),
            Some(directives) => builder
                .parse(directives)
                .map_err(|e| LoggerError::invalid(format!("Invalid env filter '{directives}': {e}"))),
        }
    }
}

/// Handle to the installed logging system. Dropping it flushes and stops file output.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Console-only, `INFO` level, named `folio`.
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder {
            name: "folio".to_owned(),
            level: LevelFilter::INFO,
            env_filter: None,
            console: true,
            file: None,
        }
    }

    /// Whether a file worker is attached.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

/// Parses a level name from configuration (`"info"`, `"DEBUG"`, `"off"`).
///
/// # Errors
/// [`LoggerError::InvalidConfiguration`] for anything `tracing` does not recognise.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim())
        .map_err(|_| LoggerError::invalid(format!("Unknown log level '{level}'")))
}
