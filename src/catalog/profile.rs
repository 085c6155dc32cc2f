use super::normalized_record::NormalizedRecord;
use super::raw_record::{Column, RawRecord};
use std::sync::Arc;

/// Missing-value report of a catalog before and after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogProfile {
    pub rows: usize,

    /// Absent cells per source column
    pub raw_missing: Vec<(Column, usize)>,

    /// Absent values per normalized field
    pub normalized_missing: Vec<(&'static str, usize)>,
}

impl CatalogProfile {
    #[must_use]
    pub fn new(raw: &[RawRecord], titles: &[Arc<NormalizedRecord>]) -> Self {
        let missing = |absent: fn(&NormalizedRecord) -> bool| titles.iter().filter(|t| absent(t)).count();

        Self {
            rows: raw.len(),
            raw_missing: RawRecord::missing_counts(raw),
            normalized_missing: vec![
                ("type", missing(|t| t.kind.is_none())),
                ("date_added", missing(|t| t.date_added.is_none())),
                ("year_added", missing(|t| t.year_added().is_none())),
                ("month_added", missing(|t| t.month_added().is_none())),
                ("release_year", missing(|t| t.release_year.is_none())),
                ("rating", missing(|t| t.rating.is_none())),
                ("duration_value", missing(|t| t.duration_value.is_none())),
                ("duration_unit", missing(|t| t.duration_unit.is_none())),
            ],
        }
    }
}
