//! Common processing logic shared between commands.

use super::config::Config;
use crate::Result;
use crate::catalog::{RawRecord, RecordSets, load_catalog};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

/// Arguments shared by every command that reads a catalog
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to the catalog CSV file
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Utf8PathBuf,

    /// Path to configuration file (default is `eda.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

/// Settings resolved from [`CommonArgs`]
#[derive(Debug)]
pub struct Common {
    pub config: Config,
    pub use_colors: bool,
    input: Utf8PathBuf,
}

impl Common {
    /// Initialize logging and load the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded
    pub fn new(args: &CommonArgs) -> Result<Self> {
        init_logging(args.log_level);

        let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;

        Ok(Self {
            config,
            use_colors: use_colors(args.color),
            input: args.input.clone(),
        })
    }

    /// Read the raw catalog rows
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or lacks a required column
    pub fn load_raw(&self) -> Result<Vec<RawRecord>> {
        load_catalog(&self.input)
    }

    /// Normalize raw rows into record sets using the configured date formats
    #[must_use]
    pub fn build_sets(&self, raw: &[RawRecord]) -> RecordSets {
        RecordSets::from_raw(raw, &self.config.normalizer())
    }

    /// Read and normalize the catalog in one step
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded
    pub fn load_sets(&self) -> Result<RecordSets> {
        let raw = self.load_raw()?;
        Ok(self.build_sets(&raw))
    }
}

/// Initialize logger based on log level
///
/// Repeated initialization, as happens when commands run several times in one process, is ignored.
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

/// Decide whether console output should be colorized
pub fn use_colors(color: ColorMode) -> bool {
    match color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            use std::io::{IsTerminal, stdout};
            stdout().is_terminal()
        }
    }
}
