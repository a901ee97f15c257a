use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use log::LevelFilter;

/// Logging configuration shared by the binary and embedding applications.
#[derive(Clone, Debug, Args)]
pub struct LogOptions {
    /// Structured logging level.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,
    /// Logging output format.
    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    #[arg(long = "log-timestamp", global = true)]
    pub log_timestamp: bool,
    /// Optional output file path for logs. Unset means stderr.
    #[arg(long = "log-output", global = true)]
    pub log_output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: false,
            log_output: None,
        }
    }
}

impl LogOptions {
    pub fn log_output_path(&self) -> Option<&Path> {
        self.log_output.as_deref()
    }
}
