//! Program metadata and diagnostics verbosity.
//!
//! Everything here is presentation: the parser never reads the metadata, the
//! help page and the logging setup do.

use tracing::level_filters::LevelFilter;

/// How much the library reports on the diagnostics channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    ErrorsOnly,
    ErrorsAndWarnings,
    #[default]
    All,
}

impl LogLevel {
    pub fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::ErrorsOnly => LevelFilter::ERROR,
            LogLevel::ErrorsAndWarnings => LevelFilter::WARN,
            LogLevel::All => LevelFilter::INFO,
        }
    }
}

/// Host-supplied settings, copied into the dispatcher by
/// [`Dispatcher::set_config`](crate::Dispatcher::set_config).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub log_level: LogLevel,
    /// Program name shown in the help header
    pub name: String,
    pub description: Option<String>,
    /// Version string, `x.y.z`
    pub version: Option<String>,
    /// Replaces the generated `<program> [options] [arguments]` line
    pub usage: Option<String>,
    pub copyright: Option<String>,
    pub license: Option<String>,
}

impl Config {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn copyright(mut self, text: impl Into<String>) -> Self {
        self.copyright = Some(text.into());
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }
}
