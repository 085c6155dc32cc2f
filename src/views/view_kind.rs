use strum::{EnumIter, IntoEnumIterator};

/// The named aggregate views, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum ViewKind {
    TypeCounts,
    TitlesPerYear,
    YearTypeCounts,
    YearTypeShare,
    RatingYearHeatmap,
    GenreTrends,
    TopGenres,
    TopGenresByType,
    RatingDistribution,
    TopCountries,
    TitlesByRegion,
}

impl ViewKind {
    /// 1-based position of the view.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize + 1
    }

    /// Stable artifact name, prefixed with the view's ordinal.
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::TypeCounts => "01_count_movies_vs_tv",
            Self::TitlesPerYear => "02_titles_per_year",
            Self::YearTypeCounts => "03_movies_vs_tv_over_time",
            Self::YearTypeShare => "04_share_movies_vs_tv_over_time",
            Self::RatingYearHeatmap => "05_heatmap_rating_year",
            Self::GenreTrends => "06_genre_trends",
            Self::TopGenres => "07_top_15_genres",
            Self::TopGenresByType => "08_top_genres_by_type",
            Self::RatingDistribution => "09_rating_distribution",
            Self::TopCountries => "10_top_10_countries",
            Self::TitlesByRegion => "11_titles_by_region",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TypeCounts => "Count of Movies vs TV Shows",
            Self::TitlesPerYear => "Number of Titles Added per Year",
            Self::YearTypeCounts => "Movies vs TV Shows Added Over Time",
            Self::YearTypeShare => "Share of Movies vs TV Shows Added Over Time",
            Self::RatingYearHeatmap => "Number of Titles by Rating and Year Added",
            Self::GenreTrends => "Trend of Selected Genres Over Time",
            Self::TopGenres => "Top Genres",
            Self::TopGenresByType => "Top Genres by Type",
            Self::RatingDistribution => "Distribution of Content Ratings",
            Self::TopCountries => "Top Content-Producing Countries",
            Self::TitlesByRegion => "Titles by Region",
        }
    }

    /// Worksheet name, within Excel's 31 character limit.
    #[must_use]
    pub const fn sheet_name(self) -> &'static str {
        match self {
            Self::TypeCounts => "01 Types",
            Self::TitlesPerYear => "02 Titles per year",
            Self::YearTypeCounts => "03 Types over time",
            Self::YearTypeShare => "04 Type share over time",
            Self::RatingYearHeatmap => "05 Rating by year",
            Self::GenreTrends => "06 Genre trends",
            Self::TopGenres => "07 Top genres",
            Self::TopGenresByType => "08 Top genres by type",
            Self::RatingDistribution => "09 Ratings",
            Self::TopCountries => "10 Top countries",
            Self::TitlesByRegion => "11 Regions",
        }
    }

    /// Find a view by ordinal (`7`, `07`) or by artifact name, with or without its prefix.
    #[must_use]
    pub fn find(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(ordinal) = text.parse::<usize>() {
            return Self::iter().find(|kind| kind.ordinal() == ordinal);
        }

        Self::iter().find(|kind| {
            let stem = kind.file_stem();
            stem == text || stem.split_once('_').is_some_and(|(_, name)| name == text)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_match_file_stems() {
        for kind in ViewKind::iter() {
            assert!(kind.file_stem().starts_with(&format!("{:02}_", kind.ordinal())), "{kind:?}");
        }
        assert_eq!(ViewKind::iter().count(), 11);
    }

    #[test]
    fn test_sheet_names_fit_excel_limit() {
        for kind in ViewKind::iter() {
            assert!(kind.sheet_name().len() <= 31, "{kind:?}");
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(ViewKind::find("7"), Some(ViewKind::TopGenres));
        assert_eq!(ViewKind::find("07"), Some(ViewKind::TopGenres));
        assert_eq!(ViewKind::find("11_titles_by_region"), Some(ViewKind::TitlesByRegion));
        assert_eq!(ViewKind::find("heatmap_rating_year"), Some(ViewKind::RatingYearHeatmap));
        assert_eq!(ViewKind::find("0"), None);
        assert_eq!(ViewKind::find("12"), None);
        assert_eq!(ViewKind::find("nonsense"), None);
    }
}
