//! # Logger
//!
//! Logging for the `tinct` binary: a compact console stream for interactive runs and an
//! optional rolling log file (plain text or JSON lines) for diagnosing converter and settings
//! problems after the fact. Both outputs share one `EnvFilter`, so `RUST_LOG` still works.
//!
//! Most callers start from the `[logging]` section of the application config:
//!
//! ```rust,no_run
//! # use tinct_domain::config::LoggingConfig;
//! let _logger = tinct_logger::Logger::from_config("tinct", &LoggingConfig::default()).unwrap();
//! tracing::info!("Application context started");
//! ```
//!
//! The builder covers the rest, e.g. tracing the property store into a JSON file:
//!
//! ```rust,no_run
//! # use tinct_logger::{LevelFilter, LogFile, Logger};
//! let _logger = Logger::builder()
//!     .name("tinct")
//!     .console(false)
//!     .directives("tinct_dynv=trace")
//!     .file(LogFile::new("logs").json(true))
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::path::{Path, PathBuf};
use tinct_domain::config::LoggingConfig;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Rotated files kept next to the active one.
const DEFAULT_KEEP: usize = 7;
const LOG_SUFFIX: &str = "log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

/// Where and how the rolling log file is written.
#[derive(Debug, Clone)]
pub struct LogFile {
    directory: PathBuf,
    rotation: Rotation,
    keep: usize,
    json: bool,
}

impl LogFile {
    /// A daily-rotated plain-text log in `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into(), rotation: Rotation::DAILY, keep: DEFAULT_KEEP, json: false }
    }

    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Number of log files retained; must be at least one.
    #[must_use]
    pub const fn keep(mut self, files: usize) -> Self {
        self.keep = files;
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

/// Builder state before [`LoggerBuilder::name`] is called.
#[derive(Debug)]
pub struct Unnamed;
/// Builder state once the log name (and file prefix) is known.
#[derive(Debug)]
pub struct Named(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}

/// Configures the global subscriber. [`LoggerBuilder::init`] is only available once a name
/// has been set.
#[derive(Debug)]
#[must_use = "The builder does nothing until `init` is called."]
pub struct LoggerBuilder<N: Sealed = Unnamed> {
    name: N,
    level: LevelFilter,
    directives: Option<String>,
    console: bool,
    file: Option<LogFile>,
}

impl LoggerBuilder<Unnamed> {
    /// Names the log; the name also prefixes rolling file names (`tinct.2026-10-19.log`).
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder {
            name: Named(name.into()),
            level: self.level,
            directives: self.directives,
            console: self.console,
            file: self.file,
        }
    }
}

impl<N: Sealed> LoggerBuilder<N> {
    /// Default level for targets without an explicit directive.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Per-target directives such as `tinct_converters=debug`, used instead of `RUST_LOG`.
    pub fn directives(mut self, directives: impl Into<String>) -> Self {
        self.directives = Some(directives.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    pub fn file(mut self, file: LogFile) -> Self {
        self.file = Some(file);
        self
    }
}

impl LoggerBuilder<Named> {
    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive until exit; dropping it flushes the log file.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for an empty name, no enabled output, a zero
    /// retention or bad directives; [`LoggerError::Io`] / [`LoggerError::Appender`] if the
    /// log file cannot be opened; [`LoggerError::Subscriber`] if logging is already set up.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Named(name) = self.name;
        if name.trim().is_empty() {
            return Err(invalid("Logger name cannot be empty", None));
        }
        if !self.console && self.file.is_none() {
            return Err(invalid("Enable console output or a log file", None));
        }
        if self.file.as_ref().is_some_and(|file| file.keep == 0) {
            return Err(invalid("At least one log file must be kept", Some("keep")));
        }

        let filter = env_filter(self.level, self.directives.as_deref())?;

        let mut layers = Vec::new();
        if self.console {
            layers.push(console_layer());
        }
        let guard = match &self.file {
            Some(file) => {
                let (layer, guard) = file_layer(&name, file)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard, directory: self.file.map(|file| file.directory) })
    }
}

/// Handle to the installed logging outputs.
#[must_use = "Dropping the handle stops the background log file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
    directory: Option<PathBuf>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { name: Unnamed, level: LevelFilter::INFO, directives: None, console: true, file: None }
    }

    /// Sets up logging from the `[logging]` config section.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] if `config.level` is not a level name, otherwise
    /// the errors of [`LoggerBuilder::init`].
    pub fn from_config(name: &str, config: &LoggingConfig) -> Result<Self, LoggerError> {
        let level = config.level.parse::<LevelFilter>().map_err(|e| {
            invalid(format!("Invalid level '{}': {e}", config.level), Some("logging.level"))
        })?;

        let mut builder = Self::builder().name(name).console(config.console).level(level);
        if let Some(directory) = &config.directory {
            builder = builder.file(LogFile::new(directory).json(config.json));
        }
        builder.init()
    }

    /// Directory of the rolling log file, if one is written.
    #[must_use]
    pub fn log_directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    #[must_use]
    pub const fn writes_file(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Closing log file");
        }
    }
}

fn console_layer<S>() -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    fmt::layer().compact().with_ansi(true).boxed()
}

fn file_layer<S>(name: &str, file: &LogFile) -> Result<(BoxedLayer<S>, WorkerGuard), LoggerError>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    fs::create_dir_all(&file.directory)
        .context(format!("Creating log directory {}", file.directory.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(file.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_SUFFIX)
        .max_log_files(file.keep)
        .build(&file.directory)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if file.json { layer.json().boxed() } else { layer.boxed() };
    Ok((layer, guard))
}

fn env_filter(level: LevelFilter, directives: Option<&str>) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    match directives {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            invalid(format!("Invalid directives '{directives}': {e}"), Some("directives"))
        }),
    }
}

fn invalid(message: impl Into<std::borrow::Cow<'static, str>>, context: Option<&'static str>) -> LoggerError {
    LoggerError::InvalidConfiguration { message: message.into(), context: context.map(Into::into) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_starts_with_console_at_info() {
        let builder = Logger::builder().name("tinct");
        assert!(builder.console);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert!(builder.file.is_none());
        assert!(builder.directives.is_none());
    }

    #[test]
    fn log_file_defaults_and_options() {
        let file = LogFile::new("logs");
        assert_eq!(file.keep, DEFAULT_KEEP);
        assert!(!file.json);
        assert_eq!(file.directory(), Path::new("logs"));

        let file = file.rotation(Rotation::HOURLY).keep(2).json(true);
        assert_eq!(file.rotation, Rotation::HOURLY);
        assert_eq!(file.keep, 2);
        assert!(file.json);
    }

    #[test]
    fn settings_can_precede_the_name() {
        let builder =
            Logger::builder().console(false).level(LevelFilter::TRACE).file(LogFile::new("x")).name("tinct");
        assert!(!builder.console);
        assert_eq!(builder.level, LevelFilter::TRACE);
        assert_eq!(builder.name.0, "tinct");
    }

    #[test]
    fn invalid_settings_are_rejected_before_install() {
        let err = Logger::builder().name("  ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("tinct").console(false).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("tinct").file(LogFile::new("logs").keep(0)).init().unwrap_err();
        assert_eq!(err.context_str(), Some("keep"));

        let err = Logger::builder().name("tinct").directives("tinct=[").init().unwrap_err();
        assert_eq!(err.context_str(), Some("directives"));
    }

    #[test]
    fn unknown_level_name_is_rejected() {
        let config = LoggingConfig { level: "chatty".to_owned(), ..LoggingConfig::default() };
        let err = Logger::from_config("tinct", &config).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert_eq!(err.context_str(), Some("logging.level"));
    }
}
