use super::common::{NO_DATA, SAMPLE_HEADERS, format_cell, sample_row};
use crate::Result;
use crate::catalog::{CatalogProfile, NormalizedRecord};
use crate::dashboard::{ControlOptions, DashboardControls, Overview};
use crate::views::{Cell, ViewTable};
use core::fmt::{self, Display, Write};
use owo_colors::OwoColorize;
use std::io::{IsTerminal, stdout};
use std::sync::Arc;
use terminal_size::{Width, terminal_size};

const DEFAULT_TERMINAL_WIDTH: usize = 120;
const COLUMN_GAP: usize = 2;
const MAX_COLUMN_WIDTH: usize = 32;
const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 40;
const BAR: &str = "█";

/// Write every table, one after the other.
pub fn generate<W: Write>(tables: &[ViewTable], use_colors: bool, writer: &mut W) -> Result<()> {
    let mut reporter = ConsoleReporter::new(writer, use_colors);
    for (index, table) in tables.iter().enumerate() {
        if index > 0 {
            writeln!(reporter.writer)?;
        }
        reporter.write_view(table)?;
    }
    Ok(())
}

/// Write a single view with its title.
pub fn write_view<W: Write>(table: &ViewTable, use_colors: bool, writer: &mut W) -> Result<()> {
    ConsoleReporter::new(writer, use_colors).write_view(table)
}

pub fn write_overview<W: Write>(overview: &Overview, use_colors: bool, writer: &mut W) -> Result<()> {
    let mut reporter = ConsoleReporter::new(writer, use_colors);
    reporter.write_heading("Overview")?;
    reporter.write_field("Titles", overview.total)?;
    reporter.write_field("Movies", overview.movies)?;
    reporter.write_field("TV Shows", overview.tv_shows)?;
    Ok(())
}

/// Write the data sample table.
pub fn write_sample<W: Write>(records: &[Arc<NormalizedRecord>], use_colors: bool, writer: &mut W) -> Result<()> {
    let mut reporter = ConsoleReporter::new(writer, use_colors);
    reporter.write_heading(&format!("Data Sample ({} rows)", records.len()))?;

    if records.is_empty() {
        writeln!(reporter.writer, "{NO_DATA}")?;
        return Ok(());
    }

    let headers: Vec<String> = SAMPLE_HEADERS.iter().map(ToString::to_string).collect();
    let rows: Vec<Vec<String>> = records.iter().map(|record| sample_row(record).to_vec()).collect();
    reporter.write_grid(&headers, &rows, &[false; SAMPLE_HEADERS.len()], None)
}

pub fn write_controls<W: Write>(controls: &DashboardControls, options: &ControlOptions, use_colors: bool, writer: &mut W) -> Result<()> {
    let mut reporter = ConsoleReporter::new(writer, use_colors);
    reporter.write_heading("Controls")?;
    reporter.write_field(
        "Years",
        format!(
            "{}-{} (available {}-{})",
            controls.years.start(),
            controls.years.end(),
            options.year_bounds.start(),
            options.year_bounds.end()
        ),
    )?;
    reporter.write_field(
        "Types",
        format!("{} (available: {})", join_or_none(&controls.kinds), join_or_none(&options.kinds)),
    )?;
    reporter.write_field(
        "Regions",
        format!("{} (available: {})", join_or_none(&controls.regions), join_or_none(&options.regions)),
    )?;
    Ok(())
}

/// Write the missing-value report of a catalog.
pub fn write_profile<W: Write>(profile: &CatalogProfile, use_colors: bool, writer: &mut W) -> Result<()> {
    let mut reporter = ConsoleReporter::new(writer, use_colors);
    reporter.write_field("Rows", profile.rows)?;
    writeln!(reporter.writer)?;

    let headers = vec!["column".to_string(), "missing".to_string()];

    reporter.write_heading("Missing values before cleaning")?;
    let rows: Vec<Vec<String>> = profile
        .raw_missing
        .iter()
        .map(|(column, count)| vec![column.to_string(), count.to_string()])
        .collect();
    reporter.write_grid(&headers, &rows, &[false, true], None)?;
    writeln!(reporter.writer)?;

    reporter.write_heading("Missing values after cleaning")?;
    let rows: Vec<Vec<String>> = profile
        .normalized_missing
        .iter()
        .map(|(field, count)| vec![(*field).to_string(), count.to_string()])
        .collect();
    reporter.write_grid(&headers, &rows, &[false, true], None)
}

struct ConsoleReporter<'a, W: Write> {
    writer: &'a mut W,
    colors: ColorScheme,
    terminal_width: usize,
}

impl<'a, W: Write> ConsoleReporter<'a, W> {
    fn new(writer: &'a mut W, use_colors: bool) -> Self {
        Self::with_width(writer, use_colors, detect_terminal_width())
    }

    const fn with_width(writer: &'a mut W, use_colors: bool, terminal_width: usize) -> Self {
        Self {
            writer,
            colors: ColorScheme { enabled: use_colors },
            terminal_width,
        }
    }

    fn write_view(&mut self, table: &ViewTable) -> Result<()> {
        self.write_heading(&format!("[{:02}] {}", table.kind.ordinal(), table.kind.title()))?;

        if table.is_empty() {
            writeln!(self.writer, "{NO_DATA}")?;
            return Ok(());
        }

        let right_aligned: Vec<bool> = (0..table.headers.len())
            .map(|col| table.rows.iter().all(|row| !matches!(row.get(col), Some(Cell::Text(_)))))
            .collect();

        let rows: Vec<Vec<String>> = table.rows.iter().map(|row| row.iter().map(format_cell).collect()).collect();

        let counts: Option<Vec<u64>> = table
            .rows
            .iter()
            .map(|row| match row.last() {
                Some(Cell::Count(count)) if table.headers.last().is_some_and(|h| h == "count") => Some(*count),
                _ => None,
            })
            .collect();

        self.write_grid(&table.headers, &rows, &right_aligned, counts.as_deref())
    }

    fn write_heading(&mut self, text: &str) -> Result<()> {
        self.colors.write_bold(self.writer, text)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_field(&mut self, label: &str, value: impl Display) -> Result<()> {
        writeln!(self.writer, "  {label:<8}: {value}")?;
        Ok(())
    }

    /// Write aligned columns, optionally followed by a bar per row scaled to the largest count.
    fn write_grid(&mut self, headers: &[String], rows: &[Vec<String>], right_aligned: &[bool], bars: Option<&[u64]>) -> Result<()> {
        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                rows.iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .chain([header.chars().count()])
                    .max()
                    .unwrap_or(0)
                    .min(MAX_COLUMN_WIDTH)
            })
            .collect();

        let table_width = widths.iter().sum::<usize>() + COLUMN_GAP * widths.len().saturating_sub(1);
        let bar_width = self
            .terminal_width
            .saturating_sub(table_width + COLUMN_GAP)
            .min(MAX_BAR_WIDTH);
        let bars = bars.filter(|_| bar_width >= MIN_BAR_WIDTH);
        let max_count = bars.and_then(|counts| counts.iter().copied().max()).unwrap_or(0);

        for (col, header) in headers.iter().enumerate() {
            let text = pad(header, widths[col], right_aligned.get(col).copied().unwrap_or(false));
            if col > 0 {
                write!(self.writer, "{:COLUMN_GAP$}", "")?;
            }
            self.colors.write_bold(self.writer, &text)?;
        }
        writeln!(self.writer)?;
        self.colors.write_dimmed(self.writer, &"─".repeat(table_width))?;
        writeln!(self.writer)?;

        for (index, row) in rows.iter().enumerate() {
            for (col, width) in widths.iter().enumerate() {
                let cell = row.get(col).map_or("", String::as_str);
                if col > 0 {
                    write!(self.writer, "{:COLUMN_GAP$}", "")?;
                }
                write!(self.writer, "{}", pad(cell, *width, right_aligned.get(col).copied().unwrap_or(false)))?;
            }

            if let Some(counts) = bars
                && let Some(&count) = counts.get(index)
            {
                write!(self.writer, "{:COLUMN_GAP$}", "")?;
                self.colors.write_bar(self.writer, &BAR.repeat(bar_length(count, max_count, bar_width)))?;
            }
            writeln!(self.writer)?;
        }

        Ok(())
    }
}

struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    fn write_bold<W: Write>(&self, writer: &mut W, text: &str) -> fmt::Result {
        if self.enabled {
            write!(writer, "{}", text.bold())
        } else {
            write!(writer, "{text}")
        }
    }

    fn write_dimmed<W: Write>(&self, writer: &mut W, text: &str) -> fmt::Result {
        if self.enabled {
            write!(writer, "{}", text.dimmed())
        } else {
            write!(writer, "{text}")
        }
    }

    fn write_bar<W: Write>(&self, writer: &mut W, text: &str) -> fmt::Result {
        if self.enabled {
            write!(writer, "{}", text.green())
        } else {
            write!(writer, "{text}")
        }
    }
}

fn pad(text: &str, width: usize, right: bool) -> String {
    let text = truncate(text, width);
    if right {
        format!("{text:>width$}")
    } else {
        format!("{text:<width$}")
    }
}

fn truncate(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }

    let mut result: String = text.chars().take(max_width.saturating_sub(1)).collect();
    result.push('…');
    result
}

/// Number of bar characters for `count`, rounded, with the largest count filling `width`.
fn bar_length(count: u64, max_count: u64, width: usize) -> usize {
    if max_count == 0 {
        return 0;
    }

    let width = width as u64;
    let length = (count * width + max_count / 2) / max_count;
    usize::try_from(length).unwrap_or(0)
}

fn join_or_none<T: Display>(values: impl IntoIterator<Item = T>) -> String {
    let joined: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    if joined.is_empty() { "(none)".to_string() } else { joined.join(", ") }
}

fn detect_terminal_width() -> usize {
    if stdout().is_terminal() {
        terminal_size().map_or(DEFAULT_TERMINAL_WIDTH, |(Width(w), _)| usize::from(w))
    } else {
        DEFAULT_TERMINAL_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RecordSets, TitleKind};
    use crate::views::{CatalogViews, CountView, ViewKind, ViewOptions};

    fn render(table: &ViewTable) -> String {
        render_at_width(table, DEFAULT_TERMINAL_WIDTH)
    }

    fn render_at_width(table: &ViewTable, width: usize) -> String {
        let mut out = String::new();
        ConsoleReporter::with_width(&mut out, false, width).write_view(table).unwrap();
        out
    }

    #[test]
    fn test_view_includes_title_rows_and_bars() {
        let view = CountView::from_entries(vec![(TitleKind::Movie, 6), (TitleKind::TvShow, 3)]);
        let table = ViewTable::from_counts(ViewKind::TypeCounts, &["type"], &view, |k| vec![Cell::Text(k.to_string())]);
        let out = render(&table);

        assert!(out.starts_with("[01] Count of Movies vs TV Shows\n"));
        assert!(out.contains("Movie"));
        assert!(out.contains("TV Show"));

        let movie_bar = out.lines().find(|l| l.starts_with("Movie")).unwrap().matches(BAR).count();
        let show_bar = out.lines().find(|l| l.starts_with("TV Show")).unwrap().matches(BAR).count();
        assert_eq!(movie_bar, MAX_BAR_WIDTH);
        assert_eq!(show_bar, MAX_BAR_WIDTH / 2);
    }

    #[test]
    fn test_bars_shrink_with_terminal_width() {
        let view = CountView::from_entries(vec![(TitleKind::Movie, 6), (TitleKind::TvShow, 3)]);
        let table = ViewTable::from_counts(ViewKind::TypeCounts, &["type"], &view, |k| vec![Cell::Text(k.to_string())]);

        // The table itself is 14 columns wide and one more gap precedes the bar.
        let medium = render_at_width(&table, 28);
        let movie_bar = medium.lines().find(|l| l.starts_with("Movie")).unwrap().matches(BAR).count();
        assert_eq!(movie_bar, 12);

        let narrow = render_at_width(&table, 20);
        assert_eq!(narrow.matches(BAR).count(), 0);
        assert!(narrow.contains("TV Show"));
    }

    #[test]
    fn test_empty_view_shows_no_data() {
        let views = CatalogViews::compute(&RecordSets::default(), &ViewOptions::default());
        let out = render(&views.table(ViewKind::TopCountries));
        assert!(out.contains(NO_DATA));
    }

    #[test]
    fn test_generate_writes_every_table() {
        let views = CatalogViews::compute(&RecordSets::default(), &ViewOptions::default());
        let tables: Vec<_> = views.tables().collect();

        let mut out = String::new();
        generate(&tables, false, &mut out).unwrap();
        assert_eq!(out.matches(NO_DATA).count(), 11);
        assert!(out.contains("[11] Titles by Region"));
    }

    #[test]
    fn test_no_escape_codes_without_colors() {
        let view = CountView::from_entries(vec![("Dramas".to_string(), 3)]);
        let table = ViewTable::from_counts(ViewKind::TopGenres, &["genre"], &view, |g| vec![Cell::Text(g.clone())]);
        assert!(!render(&table).contains('\u{1b}'));

        let mut colored = String::new();
        write_view(&table, true, &mut colored).unwrap();
        assert!(colored.contains('\u{1b}'));
    }

    #[test]
    fn test_overview() {
        let mut out = String::new();
        write_overview(&Overview { total: 5, movies: 3, tv_shows: 2 }, false, &mut out).unwrap();
        assert!(out.contains("Titles  : 5"));
        assert!(out.contains("Movies  : 3"));
        assert!(out.contains("TV Shows: 2"));
    }

    #[test]
    fn test_truncate_and_bar_length() {
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 4), "abc");
        assert_eq!(bar_length(5, 10, 40), 20);
        assert_eq!(bar_length(0, 10, 40), 0);
        assert_eq!(bar_length(3, 0, 40), 0);
    }
}
