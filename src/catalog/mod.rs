//! Catalog loading and normalization
//!
//! This module turns raw CSV rows into the three immutable record sets every aggregate
//! view is computed from.
//!
//! # Implementation Model
//!
//! - **Loading**: [`read_catalog`] validates the header once and reads every row into a
//!   [`RawRecord`], mapping standard missing-value markers to absent fields.
//! - **Normalization**: [`FieldNormalizer`] maps each raw row to exactly one
//!   [`NormalizedRecord`]. It never fails; malformed values become absent values.
//! - **Explosion**: multi-value fields (`listed_in`, `country`) are split on `", "` into
//!   [`GenreRecord`]s and [`CountryRecord`]s which share their source record.
//! - **Regions**: [`Region::resolve`] maps a country name through a fixed table.
//!
//! [`CatalogProfile`] reports missing values before and after normalization.
//!
//! [`RecordSets`] bundles the three sets produced by one pipeline run, and
//! [`SnapshotCell`] holds them for the lifetime of a session so the file is read once.

mod explode;
mod loader;
mod normalized_record;
mod normalizer;
mod profile;
mod raw_record;
mod record_sets;
mod region;
mod snapshot;
mod title_kind;

pub use explode::{CountryRecord, GenreRecord, VALUE_SEPARATOR, explode_countries, explode_genres, split_values};
pub use loader::{load_catalog, read_catalog};
pub use normalized_record::{KIDS_RATINGS, NormalizedRecord, UNKNOWN};
pub use normalizer::{DEFAULT_DATE_FORMATS, FieldNormalizer};
pub use profile::CatalogProfile;
pub use raw_record::{Column, MISSING_MARKERS, RawRecord};
pub use record_sets::RecordSets;
pub use region::Region;
pub use snapshot::SnapshotCell;
pub use title_kind::TitleKind;
