//! # Logging Initialization
//!
//! Every event is written twice: once to the console (errors to stderr,
//! everything else to stdout) and once to the file for its exact level,
//! `info.log`, `warn.log` or `error.log`, under the configured directory.
//!
//! Each file sits behind its own mutex, taken once per formatted line, so
//! concurrent callers never interleave output. Events carry explicit
//! `component` and `operation` fields instead of caller introspection; see
//! [`ComponentLogger`].

mod sinks;

pub use sinks::{LogFiles, ERROR_LOG, INFO_LOG, WARN_LOG};

use once_cell::sync::OnceCell;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use tracing::{Level, Subscriber};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use ink_shared::config::LoggingConfig;

static INIT: OnceCell<()> = OnceCell::new();

/// Failures setting up log sinks
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid log level filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Build the console + per-level file subscriber without installing it
///
/// Useful on its own with `tracing::subscriber::with_default`.
pub fn build_subscriber(
    config: &LoggingConfig,
) -> Result<impl Subscriber + Send + Sync + 'static, LoggingError> {
    let filter = EnvFilter::try_new(&config.level).map_err(|e| LoggingError::InvalidFilter {
        filter: config.level.clone(),
        message: e.to_string(),
    })?;
    let files = LogFiles::open(&config.directory)?;

    let console = tracing_subscriber::fmt::layer()
        .with_ansi(config.ansi)
        .with_writer(io::stderr.with_max_level(Level::ERROR).or_else(io::stdout));

    Ok(tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(level_file_layer(files.info, Level::INFO))
        .with(level_file_layer(files.warn, Level::WARN))
        .with(level_file_layer(files.error, Level::ERROR)))
}

fn level_file_layer<S>(file: File, level: Level) -> impl Layer<S>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .with_filter(filter_fn(move |metadata| *metadata.level() == level))
}

/// Install the logging subscriber as the process-wide default
///
/// Later calls are no-ops once this succeeded.
///
/// # Errors
///
/// Directory or file failures from [`LogFiles::open`], an unparsable level
/// filter, or `LoggingError::AlreadyInitialized` if another global
/// subscriber got there first.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    INIT.get_or_try_init(|| {
        let subscriber = build_subscriber(config)?;
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|_| LoggingError::AlreadyInitialized)
    })?;

    Ok(())
}

/// Leveled logging tagged with a fixed component name
///
/// ```ignore
/// const LOG: ComponentLogger = ComponentLogger::new("auth");
/// LOG.warn("login", format_args!("{} failed attempts", attempts));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentLogger {
    component: &'static str,
}

impl ComponentLogger {
    pub const fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn info(&self, operation: &str, message: fmt::Arguments<'_>) {
        tracing::info!(component = self.component, operation, "{}", message);
    }

    pub fn warn(&self, operation: &str, message: fmt::Arguments<'_>) {
        tracing::warn!(component = self.component, operation, "{}", message);
    }

    pub fn error(&self, operation: &str, message: fmt::Arguments<'_>) {
        tracing::error!(component = self.component, operation, "{}", message);
    }
}
