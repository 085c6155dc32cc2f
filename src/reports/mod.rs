//! Report generation for aggregate views
//!
//! # Implementation Model
//!
//! Every generator consumes [`ViewTable`](crate::views::ViewTable)s, the rectangular
//! rendering of an aggregate view, so the same data can be written in any format:
//! - **Console**: aligned text tables with bars for count views, optional ANSI colors
//! - **CSV**: one document per view, the artifact format of the static export
//! - **Excel**: a workbook with one worksheet per view
//! - **JSON**: a single document holding every view keyed by artifact name
//!
//! The console module also renders the dashboard's overview metrics, current controls,
//! data sample, and the catalog profile. Views without rows render as "(no data)".

mod common;
mod console;
mod csv;
mod excel;
mod json;

pub use self::csv::generate as generate_csv;
pub use common::{NO_DATA, format_cell, format_share};
pub use console::generate as generate_console;
pub use console::{write_controls, write_overview, write_profile, write_sample, write_view};
pub use excel::generate as generate_xlsx;
pub use json::generate as generate_json;
