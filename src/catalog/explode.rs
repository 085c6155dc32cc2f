use super::normalized_record::NormalizedRecord;
use super::region::Region;
use std::sync::Arc;

/// Separator between values of a multi-value field.
pub const VALUE_SEPARATOR: &str = ", ";

/// Split a multi-value field into its values, in source order.
///
/// Empty text yields a single empty value, so every record is represented at least once.
pub fn split_values(text: &str) -> impl Iterator<Item = &str> {
    text.split(VALUE_SEPARATOR)
}

/// One (title, genre) pair from the title's `listed_in` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreRecord {
    pub source: Arc<NormalizedRecord>,
    pub genre: String,
}

/// One (title, country) pair from the title's `country` field, with its region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub source: Arc<NormalizedRecord>,
    pub country: String,
    pub region: Region,
}

/// Explode titles into one record per listed genre.
#[must_use]
pub fn explode_genres(titles: &[Arc<NormalizedRecord>]) -> Vec<GenreRecord> {
    titles
        .iter()
        .flat_map(|title| {
            split_values(&title.listed_in).map(|genre| GenreRecord {
                source: Arc::clone(title),
                genre: genre.to_string(),
            })
        })
        .collect()
}

/// Explode titles into one record per production country, resolving each country's region.
#[must_use]
pub fn explode_countries(titles: &[Arc<NormalizedRecord>]) -> Vec<CountryRecord> {
    titles
        .iter()
        .flat_map(|title| {
            split_values(&title.country).map(|country| CountryRecord {
                source: Arc::clone(title),
                country: country.to_string(),
                region: Region::resolve(country),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FieldNormalizer, RawRecord, UNKNOWN};

    fn title(id: &str, listed_in: Option<&str>, country: Option<&str>) -> Arc<NormalizedRecord> {
        let raw = RawRecord {
            show_id: Some(id.into()),
            kind: Some("Movie".into()),
            date_added: Some("2019-06-01".into()),
            listed_in: listed_in.map(Into::into),
            country: country.map(Into::into),
            ..RawRecord::default()
        };
        Arc::new(FieldNormalizer::default().normalize(&raw, 1))
    }

    #[test]
    fn test_explode_preserves_order_and_fields() {
        let titles = vec![title("s1", Some("A, B, C"), None)];
        let genres = explode_genres(&titles);

        let values: Vec<&str> = genres.iter().map(|g| g.genre.as_str()).collect();
        assert_eq!(values, ["A", "B", "C"]);
        for genre in &genres {
            assert_eq!(genre.source.id, "s1");
            assert_eq!(genre.source.year_added(), Some(2019));
            assert_eq!(*genre.source, *titles[0]);
        }
    }

    #[test]
    fn test_explode_unknown_yields_single_record() {
        let titles = vec![title("s1", None, None)];
        let genres = explode_genres(&titles);
        assert_eq!(genres.len(), 1);
        assert_eq!(genres[0].genre, UNKNOWN);

        let countries = explode_countries(&titles);
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].country, UNKNOWN);
        assert_eq!(countries[0].region, Region::Other);
    }

    #[test]
    fn test_explode_empty_text_keeps_record() {
        let titles = vec![title("s1", Some(""), Some(""))];
        assert_eq!(explode_genres(&titles)[0].genre, "");
        assert_eq!(explode_countries(&titles)[0].country, "");
    }

    #[test]
    fn test_explode_countries_resolves_regions() {
        let titles = vec![title("s1", None, Some("India, France, Atlantis"))];
        let countries = explode_countries(&titles);

        let pairs: Vec<(&str, Region)> = countries.iter().map(|c| (c.country.as_str(), c.region)).collect();
        assert_eq!(pairs, [("India", Region::Asia), ("France", Region::Europe), ("Atlantis", Region::Other)]);
    }

    #[test]
    fn test_explode_covers_every_pair() {
        let titles = vec![title("s1", Some("Dramas, Comedies"), None), title("s2", Some("Dramas"), None)];
        let pairs: Vec<(String, String)> = explode_genres(&titles)
            .into_iter()
            .map(|g| (g.source.id.clone(), g.genre))
            .collect();

        assert_eq!(
            pairs,
            [
                ("s1".to_string(), "Dramas".to_string()),
                ("s1".to_string(), "Comedies".to_string()),
                ("s2".to_string(), "Dramas".to_string()),
            ]
        );
    }

    #[test]
    fn test_separator_requires_space() {
        let values: Vec<&str> = split_values("A,B, C").collect();
        assert_eq!(values, ["A,B", "C"]);
    }
}
