use super::explode::{CountryRecord, GenreRecord, explode_countries, explode_genres};
use super::normalized_record::NormalizedRecord;
use super::normalizer::FieldNormalizer;
use super::raw_record::RawRecord;
use std::sync::Arc;

/// The three record sets produced by one pipeline run.
///
/// Sets are never updated after construction; filtering produces new sets with the same shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSets {
    pub titles: Vec<Arc<NormalizedRecord>>,
    pub genres: Vec<GenreRecord>,
    pub countries: Vec<CountryRecord>,
}

impl RecordSets {
    /// Normalize raw rows and derive the exploded sets from them.
    #[must_use]
    pub fn from_raw(records: &[RawRecord], normalizer: &FieldNormalizer) -> Self {
        let titles = normalizer.normalize_all(records);
        Self::from_titles(titles)
    }

    #[must_use]
    pub fn from_titles(titles: Vec<NormalizedRecord>) -> Self {
        let titles: Vec<_> = titles.into_iter().map(Arc::new).collect();
        let genres = explode_genres(&titles);
        let countries = explode_countries(&titles);

        log::debug!(
            "built record sets: {} titles, {} genre records, {} country records",
            titles.len(),
            genres.len(),
            countries.len()
        );

        Self { titles, genres, countries }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_builds_all_sets() {
        let raw = vec![
            RawRecord {
                show_id: Some("s1".into()),
                listed_in: Some("Dramas, Comedies".into()),
                country: Some("India, Japan".into()),
                ..RawRecord::default()
            },
            RawRecord {
                show_id: Some("s2".into()),
                ..RawRecord::default()
            },
        ];

        let sets = RecordSets::from_raw(&raw, &FieldNormalizer::default());
        assert_eq!(sets.titles.len(), 2);
        assert_eq!(sets.genres.len(), 3);
        assert_eq!(sets.countries.len(), 3);
        assert!(Arc::ptr_eq(&sets.genres[0].source, &sets.titles[0]));
    }

    #[test]
    fn test_empty_input() {
        let sets = RecordSets::from_raw(&[], &FieldNormalizer::default());
        assert!(sets.is_empty());
        assert!(sets.genres.is_empty());
        assert!(sets.countries.is_empty());
    }
}
