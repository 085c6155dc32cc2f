use super::normalized_record::{KIDS_RATINGS, NormalizedRecord, UNKNOWN};
use super::raw_record::RawRecord;
use super::title_kind::TitleKind;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Date formats tried, in order, when no formats are configured.
pub const DEFAULT_DATE_FORMATS: [&str; 4] = ["%B %d, %Y", "%Y-%m-%d", "%d-%b-%y", "%m/%d/%Y"];

static DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("invalid regex"));
static LETTERS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z]+").expect("invalid regex"));

/// Cleans raw catalog rows into [`NormalizedRecord`]s.
///
/// Normalization is total: every raw row yields exactly one record, and malformed values are
/// absorbed as absent fields rather than reported.
#[derive(Debug, Clone)]
pub struct FieldNormalizer {
    date_formats: Vec<String>,
}

impl FieldNormalizer {
    #[must_use]
    pub const fn new(date_formats: Vec<String>) -> Self {
        Self { date_formats }
    }

    /// Normalize every row, numbering rows from 1 for synthetic ids.
    #[must_use]
    pub fn normalize_all(&self, records: &[RawRecord]) -> Vec<NormalizedRecord> {
        let normalized: Vec<_> = records.iter().enumerate().map(|(index, raw)| self.normalize(raw, index + 1)).collect();

        let undated = normalized.iter().filter(|r| r.date_added.is_none()).count();
        if undated > 0 {
            log::debug!("{undated} of {} records have no usable date_added", normalized.len());
        }

        normalized
    }

    /// Normalize a single row; `row` is the 1-based data row used when the id is absent.
    #[must_use]
    pub fn normalize(&self, raw: &RawRecord, row: usize) -> NormalizedRecord {
        let kind = raw.kind.as_deref().map(TitleKind::from);
        let rating = raw.rating.clone();
        let (duration_value, duration_unit) = raw.duration.as_deref().map_or((None, None), split_duration);

        NormalizedRecord {
            id: raw.show_id.clone().unwrap_or_else(|| format!("row-{row}")),
            title: raw.title.clone(),
            date_added_raw: raw.date_added.clone(),
            date_added: raw.date_added.as_deref().and_then(|text| self.parse_date(text)),
            release_year: raw.release_year.as_deref().and_then(|text| text.trim().parse().ok()),
            listed_in: raw.listed_in.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            country: raw.country.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            duration_raw: raw.duration.clone(),
            duration_value,
            duration_unit,
            is_movie: kind == Some(TitleKind::Movie),
            is_kids: rating.as_deref().is_some_and(|r| KIDS_RATINGS.contains(&r)),
            kind,
            rating,
        }
    }

    /// Parse a date with the first matching format; whitespace around the text is ignored.
    #[must_use]
    pub fn parse_date(&self, text: &str) -> Option<NaiveDate> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let parsed = self
            .date_formats
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok());

        if parsed.is_none() {
            log::trace!("unparsable date_added '{trimmed}'");
        }

        parsed
    }
}

impl Default for FieldNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMATS.iter().map(ToString::to_string).collect())
    }
}

/// Extract the first digit run and the first letter run of a duration.
fn split_duration(text: &str) -> (Option<u32>, Option<String>) {
    let value = DIGITS_REGEX.find(text).and_then(|m| m.as_str().parse().ok());
    let unit = LETTERS_REGEX.find(text).map(|m| m.as_str().to_string());
    (value, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawRecord {
        RawRecord {
            show_id: Some("s1".into()),
            kind: Some("Movie".into()),
            title: Some("Blood & Water".into()),
            country: Some("South Africa".into()),
            date_added: Some(" September 24, 2021".into()),
            release_year: Some("2021".into()),
            rating: Some("TV-MA".into()),
            duration: Some("90 min".into()),
            listed_in: Some("International TV Shows, TV Dramas".into()),
        }
    }

    #[test]
    fn test_parse_date_trims_whitespace() {
        let record = FieldNormalizer::default().normalize(&raw(), 1);
        assert_eq!(record.date_added, NaiveDate::from_ymd_opt(2021, 9, 24));
        assert_eq!(record.year_added(), Some(2021));
        assert_eq!(record.month_added(), Some(9));
        assert_eq!(record.date_added_raw.as_deref(), Some(" September 24, 2021"));
    }

    #[test]
    fn test_parse_date_accepts_alternate_formats() {
        let normalizer = FieldNormalizer::default();
        assert_eq!(normalizer.parse_date("2020-01-15"), NaiveDate::from_ymd_opt(2020, 1, 15));
        assert_eq!(normalizer.parse_date("Sep 5, 2019"), NaiveDate::from_ymd_opt(2019, 9, 5));
    }

    #[test]
    fn test_unparsable_date_clears_year_and_month() {
        let mut source = raw();
        source.date_added = Some("someday soon".into());
        let record = FieldNormalizer::default().normalize(&source, 1);

        assert_eq!(record.date_added, None);
        assert_eq!(record.year_added(), None);
        assert_eq!(record.month_added(), None);
    }

    #[test]
    fn test_custom_date_formats() {
        let normalizer = FieldNormalizer::new(vec!["%d.%m.%Y".to_string()]);
        assert_eq!(normalizer.parse_date("01.02.2020"), NaiveDate::from_ymd_opt(2020, 2, 1));
        assert_eq!(normalizer.parse_date("2020-02-01"), None);
    }

    #[test]
    fn test_absent_multi_value_fields_become_unknown() {
        let mut source = raw();
        source.country = None;
        source.listed_in = None;
        let record = FieldNormalizer::default().normalize(&source, 1);

        assert_eq!(record.country, UNKNOWN);
        assert_eq!(record.listed_in, UNKNOWN);
    }

    #[test]
    fn test_empty_multi_value_field_is_kept() {
        let mut source = raw();
        source.country = Some(String::new());
        let record = FieldNormalizer::default().normalize(&source, 1);
        assert_eq!(record.country, "");
    }

    #[test]
    fn test_duration_extraction() {
        assert_eq!(split_duration("90 min"), (Some(90), Some("min".to_string())));
        assert_eq!(split_duration("2 Seasons"), (Some(2), Some("Seasons".to_string())));
        assert_eq!(split_duration("Seasons"), (None, Some("Seasons".to_string())));
        assert_eq!(split_duration("45"), (Some(45), None));
        assert_eq!(split_duration(""), (None, None));
        assert_eq!(split_duration("99999999999 min"), (None, Some("min".to_string())));
    }

    #[test]
    fn test_is_movie_requires_exact_type() {
        let normalizer = FieldNormalizer::default();
        let mut source = raw();
        assert!(normalizer.normalize(&source, 1).is_movie);

        source.kind = Some("movie".into());
        let record = normalizer.normalize(&source, 1);
        assert!(!record.is_movie);
        assert_eq!(record.kind, Some(TitleKind::Other("movie".into())));

        source.kind = None;
        let record = normalizer.normalize(&source, 1);
        assert!(!record.is_movie);
        assert_eq!(record.kind, None);
    }

    #[test]
    fn test_is_kids_ratings() {
        let normalizer = FieldNormalizer::default();
        let mut source = raw();
        assert!(!normalizer.normalize(&source, 1).is_kids);

        for rating in KIDS_RATINGS {
            source.rating = Some(rating.into());
            assert!(normalizer.normalize(&source, 1).is_kids, "{rating} should be a kids rating");
        }

        source.rating = None;
        assert!(!normalizer.normalize(&source, 1).is_kids);
    }

    #[test]
    fn test_missing_id_gets_row_id() {
        let mut source = raw();
        source.show_id = None;
        let records = FieldNormalizer::default().normalize_all(&[raw(), source]);
        assert_eq!(records[0].id, "s1");
        assert_eq!(records[1].id, "row-2");
    }

    #[test]
    fn test_release_year_parsing() {
        let mut source = raw();
        source.release_year = Some(" 1999 ".into());
        assert_eq!(FieldNormalizer::default().normalize(&source, 1).release_year, Some(1999));

        source.release_year = Some("199x".into());
        assert_eq!(FieldNormalizer::default().normalize(&source, 1).release_year, None);
    }
}
