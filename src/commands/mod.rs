//! Command-line interface and orchestration for catalog-eda
//!
//! This module implements the CLI commands and drives the catalog pipeline end to end:
//! loading, normalization, aggregation, and reporting. It handles argument parsing,
//! configuration management, and the high-level workflows.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **export**: Compute every aggregate view once and write one CSV artifact per view,
//!   optionally also an Excel workbook, a JSON document, and console tables
//! - **dashboard**: Load the catalog into a session snapshot and serve a line-based
//!   interactive session with year, type, and region controls
//! - **profile**: Report missing values before and after normalization
//! - **init**: Generate a default configuration file
//! - **validate**: Check configuration file syntax and values
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler. Every handler writes through a [`Host`] so the whole
//! tool can run in-process under test.
//!
//! The `common` module provides logging setup, color mode handling, configuration
//! loading, and catalog loading shared by the commands that read a catalog.

mod common;
mod config;
mod dashboard;
mod export;
mod host;
mod init;
mod profile;
mod run;
mod validate;

pub use dashboard::{DashboardArgs, run_dashboard};
pub use export::{ExportArgs, export_views};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use profile::{ProfileArgs, profile_catalog};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
