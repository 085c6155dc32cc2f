//! Common utilities shared across report generators.

use crate::catalog::NormalizedRecord;
use crate::views::Cell;

/// Text shown in place of a view that has no rows.
pub const NO_DATA: &str = "(no data)";

/// Format a cell for human consumption.
///
/// Shares are rendered as percentages with one decimal place; everything else uses its
/// natural text form.
pub fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Share(share) => format_share(*share),
        other => other.to_string(),
    }
}

/// Format a fraction in `[0, 1]` as a percentage.
pub fn format_share(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

/// Headers of the data sample table.
pub const SAMPLE_HEADERS: [&str; 9] = [
    "id",
    "title",
    "type",
    "country",
    "date_added",
    "release_year",
    "rating",
    "duration",
    "listed_in",
];

/// The data sample columns of one record, in [`SAMPLE_HEADERS`] order.
pub fn sample_row(record: &NormalizedRecord) -> [String; 9] {
    [
        record.id.clone(),
        record.title.clone().unwrap_or_default(),
        record.kind.as_ref().map(ToString::to_string).unwrap_or_default(),
        record.country.clone(),
        record
            .date_added
            .map_or_else(|| record.date_added_raw.clone().unwrap_or_default(), |date| date.format("%Y-%m-%d").to_string()),
        record.release_year.map(|year| year.to_string()).unwrap_or_default(),
        record.rating.clone().unwrap_or_default(),
        record.duration_label().unwrap_or_default(),
        record.listed_in.clone(),
    ]
}
