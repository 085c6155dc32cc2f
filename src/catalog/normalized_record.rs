use super::title_kind::TitleKind;
use chrono::{Datelike, NaiveDate};

/// Sentinel used for absent multi-value fields.
pub const UNKNOWN: &str = "Unknown";

/// Ratings that mark a title as suitable for kids.
pub const KIDS_RATINGS: [&str; 6] = ["TV-Y", "TV-Y7", "TV-G", "G", "PG", "TV-PG"];

/// A catalog entry after cleaning, one per source row.
///
/// The year and month added are derived from [`Self::date_added`] on demand, so they are
/// absent exactly when the date is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    /// Source `show_id`, or a synthetic `row-<n>` id when the source has none
    pub id: String,
    pub title: Option<String>,
    pub kind: Option<TitleKind>,

    /// Original `date_added` text, kept for inspection
    pub date_added_raw: Option<String>,
    pub date_added: Option<NaiveDate>,
    pub release_year: Option<i32>,

    /// Comma-separated genres, or [`UNKNOWN`]
    pub listed_in: String,

    /// Comma-separated production countries, or [`UNKNOWN`]
    pub country: String,
    pub rating: Option<String>,
    pub duration_raw: Option<String>,
    pub duration_value: Option<u32>,
    pub duration_unit: Option<String>,
    pub is_movie: bool,
    pub is_kids: bool,
}

impl NormalizedRecord {
    #[must_use]
    pub fn year_added(&self) -> Option<i32> {
        self.date_added.map(|date| date.year())
    }

    #[must_use]
    pub fn month_added(&self) -> Option<u32> {
        self.date_added.map(|date| date.month())
    }

    /// Human-readable duration such as `90 min`, if anything could be extracted.
    #[must_use]
    pub fn duration_label(&self) -> Option<String> {
        match (self.duration_value, self.duration_unit.as_deref()) {
            (Some(value), Some(unit)) => Some(format!("{value} {unit}")),
            (Some(value), None) => Some(value.to_string()),
            (None, Some(unit)) => Some(unit.to_string()),
            (None, None) => None,
        }
    }
}
