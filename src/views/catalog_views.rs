use super::aggregate;
use super::count_view::CountView;
use super::pivot_view::PivotView;
use super::view_kind::ViewKind;
use super::view_table::{Cell, ViewTable};
use crate::catalog::{RecordSets, Region, TitleKind};
use strum::IntoEnumIterator;

/// Genres followed over time when none are configured.
pub const DEFAULT_FOCUS_GENRES: [&str; 3] = ["Documentaries", "International Movies", "Dramas"];

/// Knobs that shape the ranked views.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewOptions {
    pub top_genres: usize,
    pub top_genres_by_type: usize,
    pub top_countries: usize,
    pub focus_genres: Vec<String>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            top_genres: 15,
            top_genres_by_type: 10,
            top_countries: 10,
            focus_genres: DEFAULT_FOCUS_GENRES.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Every named aggregate view computed from one set of records.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogViews {
    pub type_counts: CountView<TitleKind>,
    pub titles_per_year: CountView<i32>,
    pub year_type_counts: PivotView<i32, TitleKind>,
    pub year_type_share: PivotView<i32, TitleKind, f64>,
    pub rating_year: PivotView<String, i32>,
    pub genre_trends: CountView<(i32, String)>,
    pub top_genres: CountView<String>,
    pub top_genres_by_type: CountView<(String, TitleKind)>,
    pub rating_counts: CountView<String>,
    pub top_countries: CountView<String>,
    pub region_counts: CountView<Region>,
}

impl CatalogViews {
    #[must_use]
    pub fn compute(sets: &RecordSets, options: &ViewOptions) -> Self {
        let year_type_counts = aggregate::year_type_counts(&sets.titles);
        let year_type_share = aggregate::year_type_share(&year_type_counts);

        Self {
            type_counts: aggregate::type_counts(&sets.titles),
            titles_per_year: aggregate::titles_per_year(&sets.titles),
            year_type_counts,
            year_type_share,
            rating_year: aggregate::rating_year_counts(&sets.titles),
            genre_trends: aggregate::genre_trends(&sets.genres, &options.focus_genres),
            top_genres: aggregate::genre_counts(&sets.genres).top_k(options.top_genres),
            top_genres_by_type: aggregate::genre_type_counts(&sets.genres, options.top_genres_by_type),
            rating_counts: aggregate::rating_counts(&sets.titles),
            top_countries: aggregate::country_counts(&sets.countries).top_k(options.top_countries),
            region_counts: aggregate::region_counts(&sets.countries),
        }
    }

    #[must_use]
    pub fn table(&self, kind: ViewKind) -> ViewTable {
        let text = |s: &String| vec![Cell::Text(s.clone())];

        match kind {
            ViewKind::TypeCounts => ViewTable::from_counts(kind, &["type"], &self.type_counts, |k| vec![Cell::Text(k.to_string())]),
            ViewKind::TitlesPerYear => ViewTable::from_counts(kind, &["year_added"], &self.titles_per_year, |y| vec![Cell::Year(*y)]),
            ViewKind::YearTypeCounts => {
                ViewTable::from_pivot(kind, "year_added", &self.year_type_counts, |y| Cell::Year(*y), Cell::Count)
            }
            ViewKind::YearTypeShare => {
                ViewTable::from_pivot(kind, "year_added", &self.year_type_share, |y| Cell::Year(*y), Cell::Share)
            }
            ViewKind::RatingYearHeatmap => {
                ViewTable::from_pivot(kind, "rating", &self.rating_year, |r| Cell::Text(r.clone()), Cell::Count)
            }
            ViewKind::GenreTrends => ViewTable::from_counts(kind, &["year_added", "genre"], &self.genre_trends, |(y, g)| {
                vec![Cell::Year(*y), Cell::Text(g.clone())]
            }),
            ViewKind::TopGenres => ViewTable::from_counts(kind, &["genre"], &self.top_genres, text),
            ViewKind::TopGenresByType => ViewTable::from_counts(kind, &["genre", "type"], &self.top_genres_by_type, |(g, t)| {
                vec![Cell::Text(g.clone()), Cell::Text(t.to_string())]
            }),
            ViewKind::RatingDistribution => ViewTable::from_counts(kind, &["rating"], &self.rating_counts, text),
            ViewKind::TopCountries => ViewTable::from_counts(kind, &["country"], &self.top_countries, text),
            ViewKind::TitlesByRegion => {
                ViewTable::from_counts(kind, &["region"], &self.region_counts, |r| vec![Cell::Text(r.to_string())])
            }
        }
    }

    /// Tables for every view, in presentation order.
    pub fn tables(&self) -> impl Iterator<Item = ViewTable> {
        ViewKind::iter().map(|kind| self.table(kind))
    }
}
