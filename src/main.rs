//! Exploratory analysis of a streaming catalog from the command line.
//!
//! # Quick Start
//!
//! Write every aggregate view to `eda-output/`, one CSV file per view:
//!
//! ```bash
//! catalog-eda export --input titles.csv
//! ```
//!
//! Also produce an Excel workbook and a JSON document:
//!
//! ```bash
//! catalog-eda export --input titles.csv --excel views.xlsx --json views.json
//! ```
//!
//! Explore interactively, starting with movies added between 2016 and 2020:
//!
//! ```bash
//! catalog-eda dashboard --input titles.csv --years 2016-2020 --types Movie
//! ```
//!
//! Inspect missing values before and after cleaning:
//!
//! ```bash
//! catalog-eda profile --input titles.csv
//! ```
//!
//! # Configuration
//!
//! `catalog-eda init` writes the default `eda.toml`. Settings cover the date formats tried
//! when parsing `date_added`, the sizes of the ranked views, the genres followed over time,
//! and the number of rows in the dashboard's data sample. `catalog-eda validate` checks a
//! configuration file without reading any catalog.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use catalog_eda::{Host, run};
use std::io::{BufRead, Write};
use std::io::{stderr, stdin, stdout};

/// Default host bound to the process's standard streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn input(&mut self) -> impl BufRead {
        stdin().lock()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args())
}
