//! Interactive, filterable exploration of a loaded catalog
//!
//! # Implementation Model
//!
//! A [`Dashboard`] borrows the record sets held by a session's snapshot and owns the
//! current [`DashboardControls`]: a year range, a set of content types, and a set of regions.
//! The available values for each control are derived once from the data as
//! [`ControlOptions`].
//!
//! Titles and genre records are narrowed by year range and content type, country records by
//! year range and region. Views are recomputed synchronously whenever they are requested after
//! a control change, and results are memoized by the control values, so revisiting a
//! selection is free.
//!
//! Sessions are driven line by line through [`SessionCommand`].

mod command;
mod controls;
mod session;

pub use command::{SESSION_HELP, Selection, SessionCommand, parse_region, parse_selection, parse_year_range};
pub use controls::{ControlOptions, DashboardControls, FALLBACK_YEAR_BOUNDS, FALLBACK_YEAR_SELECTION};
pub use session::{Dashboard, FilteredViews, MAX_CACHED_STATES, Overview};
