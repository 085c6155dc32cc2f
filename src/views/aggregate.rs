//! Grouped counts and pivots over record sets.
//!
//! Every function here is a pure function of its input slice. Records whose grouping key is
//! absent (no type, no year, no rating) are left out of that grouping.

use super::count_view::CountView;
use super::pivot_view::PivotView;
use crate::catalog::{CountryRecord, GenreRecord, NormalizedRecord, Region, TitleKind};
use std::collections::HashSet;
use std::sync::Arc;

/// Titles per content type, ordered by type.
#[must_use]
pub fn type_counts(titles: &[Arc<NormalizedRecord>]) -> CountView<TitleKind> {
    CountView::tally(titles.iter().filter_map(|t| t.kind.clone())).sorted_by_key()
}

/// Titles per year added, ordered by year.
#[must_use]
pub fn titles_per_year(titles: &[Arc<NormalizedRecord>]) -> CountView<i32> {
    CountView::tally(titles.iter().filter_map(|t| t.year_added())).sorted_by_key()
}

/// Titles per (year added, content type).
#[must_use]
pub fn year_type_counts(titles: &[Arc<NormalizedRecord>]) -> PivotView<i32, TitleKind> {
    PivotView::tally(titles.iter().filter_map(|t| Some((t.year_added()?, t.kind.clone()?))))
}

/// Share of each content type within each year; rows sum to one.
#[must_use]
pub fn year_type_share(counts: &PivotView<i32, TitleKind>) -> PivotView<i32, TitleKind, f64> {
    counts.row_shares()
}

/// Titles per (rating, year added); ratings and years without the other are excluded.
#[must_use]
pub fn rating_year_counts(titles: &[Arc<NormalizedRecord>]) -> PivotView<String, i32> {
    PivotView::tally(titles.iter().filter_map(|t| Some((t.rating.clone()?, t.year_added()?))))
}

/// Genre records per (year added, genre) for the focus genres, ordered by year then genre.
#[must_use]
pub fn genre_trends(genres: &[GenreRecord], focus: &[String]) -> CountView<(i32, String)> {
    let focus: HashSet<&str> = focus.iter().map(String::as_str).collect();

    CountView::tally(
        genres
            .iter()
            .filter(|g| focus.contains(g.genre.as_str()))
            .filter_map(|g| Some((g.source.year_added()?, g.genre.clone()))),
    )
    .sorted_by_key()
}

/// Genre records per genre, most frequent first.
#[must_use]
pub fn genre_counts(genres: &[GenreRecord]) -> CountView<String> {
    CountView::tally(genres.iter().map(|g| g.genre.clone())).ranked()
}

/// Genre records per (genre, content type) for the `top_n` most frequent genres.
#[must_use]
pub fn genre_type_counts(genres: &[GenreRecord], top_n: usize) -> CountView<(String, TitleKind)> {
    let top = genre_counts(genres).top_k(top_n);
    let top: HashSet<&str> = top.keys().map(String::as_str).collect();

    CountView::tally(
        genres
            .iter()
            .filter(|g| top.contains(g.genre.as_str()))
            .filter_map(|g| Some((g.genre.clone(), g.source.kind.clone()?))),
    )
    .sorted_by_key()
}

/// Titles per rating, most frequent first.
#[must_use]
pub fn rating_counts(titles: &[Arc<NormalizedRecord>]) -> CountView<String> {
    CountView::tally(titles.iter().filter_map(|t| t.rating.clone())).ranked()
}

/// Country records per country, most frequent first.
#[must_use]
pub fn country_counts(countries: &[CountryRecord]) -> CountView<String> {
    CountView::tally(countries.iter().map(|c| c.country.clone())).ranked()
}

/// Country records per region, most frequent first.
#[must_use]
pub fn region_counts(countries: &[CountryRecord]) -> CountView<Region> {
    CountView::tally(countries.iter().map(|c| c.region)).ranked()
}
