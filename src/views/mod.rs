//! Aggregate views over catalog record sets
//!
//! # Implementation Model
//!
//! Two value types carry every result:
//! - [`CountView`]: ordered `(key, count)` entries from grouping on one key. Ranked views
//!   list the most frequent key first and keep first-seen order among ties.
//! - [`PivotView`]: a dense rows × columns matrix where absent combinations are zero.
//!
//! The free functions in [`aggregate`] compute individual views; [`CatalogViews`] computes
//! the full set of named views (identified by [`ViewKind`]) in one pass and renders any of
//! them as a [`ViewTable`] for the report writers.
//!
//! [`FilterSpec`] narrows record sets before aggregation. Views are never updated in place;
//! a different filter simply produces a new [`CatalogViews`].

pub mod aggregate;
mod catalog_views;
mod count_view;
mod filter;
mod pivot_view;
mod view_kind;
mod view_table;

pub use catalog_views::{CatalogViews, DEFAULT_FOCUS_GENRES, ViewOptions};
pub use count_view::CountView;
pub use filter::{Facets, FilterSpec};
pub use pivot_view::PivotView;
pub use view_kind::ViewKind;
pub use view_table::{Cell, ViewTable};
