use crate::Result;
use crate::views::{Cell, ViewTable};
use core::fmt::Write;
use serde_json::json;

/// Write every view as one JSON document.
///
/// Each view becomes an object keyed by its artifact name, holding its title, column headers,
/// and rows as arrays of values in header order.
#[expect(unused_results, reason = "Map::insert intentionally overwrites values")]
pub fn generate<W: Write>(tables: &[ViewTable], writer: &mut W) -> Result<()> {
    let mut views = serde_json::Map::new();

    for table in tables {
        let rows: Vec<serde_json::Value> = table
            .rows
            .iter()
            .map(|row| json!(row.iter().map(cell_to_json).collect::<Vec<_>>()))
            .collect();

        let mut view = serde_json::Map::new();
        view.insert("title".to_string(), json!(table.kind.title()));
        view.insert("columns".to_string(), json!(table.headers));
        view.insert("rows".to_string(), json!(rows));

        views.insert(table.kind.file_stem().to_string(), json!(view));
    }

    let output = json!({
        "views": views
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

fn cell_to_json(cell: &Cell) -> serde_json::Value {
    match cell {
        Cell::Text(text) => json!(text),
        Cell::Year(year) => json!(year),
        Cell::Count(count) => json!(count),
        Cell::Share(share) => json!(share),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FieldNormalizer, RawRecord, RecordSets};
    use crate::views::{CatalogViews, ViewKind, ViewOptions};
    use strum::IntoEnumIterator;

    #[test]
    fn test_json_has_every_view() {
        let raw = vec![RawRecord {
            show_id: Some("s1".into()),
            kind: Some("Movie".into()),
            date_added: Some("2020-05-01".into()),
            rating: Some("PG".into()),
            country: Some("Japan".into()),
            ..RawRecord::default()
        }];
        let sets = RecordSets::from_raw(&raw, &FieldNormalizer::default());
        let tables: Vec<_> = CatalogViews::compute(&sets, &ViewOptions::default()).tables().collect();

        let mut out = String::new();
        generate(&tables, &mut out).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        for kind in ViewKind::iter() {
            assert!(parsed["views"][kind.file_stem()].is_object(), "{kind:?}");
        }

        let types = &parsed["views"]["01_count_movies_vs_tv"];
        assert_eq!(types["columns"], json!(["type", "count"]));
        assert_eq!(types["rows"], json!([["Movie", 1]]));

        let regions = &parsed["views"]["11_titles_by_region"];
        assert_eq!(regions["rows"], json!([["Asia", 1]]));
    }
}
