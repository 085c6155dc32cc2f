use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// Cell values treated as missing when reading the catalog.
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None",
    "n/a", "nan", "null",
];

/// Catalog columns read by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Column {
    ShowId,
    Type,
    Title,
    Country,
    DateAdded,
    ReleaseYear,
    Rating,
    Duration,
    ListedIn,
}

impl Column {
    /// Number of columns read from the catalog.
    pub const COUNT: usize = 9;

    /// Header names accepted for this column, in order of preference.
    #[must_use]
    pub const fn header_aliases(self) -> &'static [&'static str] {
        match self {
            Self::ShowId => &["show_id", "id"],
            Self::Type => &["type"],
            Self::Title => &["title"],
            Self::Country => &["country"],
            Self::DateAdded => &["date_added"],
            Self::ReleaseYear => &["release_year"],
            Self::Rating => &["rating"],
            Self::Duration => &["duration"],
            Self::ListedIn => &["listed_in"],
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One catalog row as read from the source, before any cleaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub show_id: Option<String>,
    pub kind: Option<String>,
    pub title: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<String>,
    pub release_year: Option<String>,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub listed_in: Option<String>,
}

impl RawRecord {
    /// Build a record by asking for the cell of every column.
    ///
    /// Cells matching one of the [`MISSING_MARKERS`] are stored as absent.
    pub fn from_cells<'a>(mut cell: impl FnMut(Column) -> Option<&'a str>) -> Self {
        let mut value = |column| cell(column).filter(|text| !is_missing(text)).map(str::to_string);

        Self {
            show_id: value(Column::ShowId),
            kind: value(Column::Type),
            title: value(Column::Title),
            country: value(Column::Country),
            date_added: value(Column::DateAdded),
            release_year: value(Column::ReleaseYear),
            rating: value(Column::Rating),
            duration: value(Column::Duration),
            listed_in: value(Column::ListedIn),
        }
    }

    #[must_use]
    pub fn get(&self, column: Column) -> Option<&str> {
        let field = match column {
            Column::ShowId => &self.show_id,
            Column::Type => &self.kind,
            Column::Title => &self.title,
            Column::Country => &self.country,
            Column::DateAdded => &self.date_added,
            Column::ReleaseYear => &self.release_year,
            Column::Rating => &self.rating,
            Column::Duration => &self.duration,
            Column::ListedIn => &self.listed_in,
        };
        field.as_deref()
    }

    /// Count absent values per column over a set of raw records.
    #[must_use]
    pub fn missing_counts(records: &[Self]) -> Vec<(Column, usize)> {
        Column::iter()
            .map(|column| (column, records.iter().filter(|r| r.get(column).is_none()).count()))
            .collect()
    }
}

fn is_missing(text: &str) -> bool {
    MISSING_MARKERS.contains(&text)
}
