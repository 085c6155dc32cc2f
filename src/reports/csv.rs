use crate::Result;
use crate::views::{Cell, ViewTable};
use std::io::Write;

/// Write one view as a CSV document: a header row followed by one record per row.
///
/// Shares are written as raw fractions so the artifact stays machine-readable.
pub fn generate<W: Write>(table: &ViewTable, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(&table.headers)?;
    for row in &table.rows {
        csv_writer.write_record(row.iter().map(Cell::to_string))?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{CountView, PivotView, ViewKind};

    fn render(table: &ViewTable) -> String {
        let mut buf = Vec::new();
        generate(table, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_count_view_csv() {
        let view = CountView::from_entries(vec![("Dramas, Romance".to_string(), 2), ("Horror".to_string(), 1)]);
        let table = ViewTable::from_counts(ViewKind::TopGenres, &["genre"], &view, |g| vec![Cell::Text(g.clone())]);

        assert_eq!(render(&table), "genre,count\n\"Dramas, Romance\",2\nHorror,1\n");
    }

    #[test]
    fn test_share_view_csv() {
        let counts = PivotView::tally([(2020, "Movie".to_string()), (2020, "TV Show".to_string()), (2020, "Movie".to_string())]);
        let shares = counts.row_shares();
        let table = ViewTable::from_pivot(ViewKind::YearTypeShare, "year_added", &shares, |y| Cell::Year(*y), Cell::Share);

        let csv = render(&table);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("year_added,Movie,TV Show"));
        assert!(lines.next().unwrap().starts_with("2020,0.666"));
    }

    #[test]
    fn test_empty_view_writes_header_only() {
        let view: CountView<String> = CountView::from_entries(Vec::new());
        let table = ViewTable::from_counts(ViewKind::TopCountries, &["country"], &view, |c| vec![Cell::Text(c.clone())]);
        assert_eq!(render(&table), "country,count\n");
    }
}
