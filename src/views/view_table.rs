use super::count_view::CountView;
use super::pivot_view::PivotView;
use super::view_kind::ViewKind;
use core::fmt::{Display, Formatter};

/// A single value in a view table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Year(i32),
    Count(u64),
    Share(f64),
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Year(year) => write!(f, "{year}"),
            Self::Count(count) => write!(f, "{count}"),
            Self::Share(share) => write!(f, "{share}"),
        }
    }
}

/// Rectangular rendering of an aggregate view shared by every report format.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTable {
    pub kind: ViewKind,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ViewTable {
    /// One row per entry: the key cells followed by the count.
    pub fn from_counts<K>(kind: ViewKind, key_headers: &[&str], view: &CountView<K>, key_cells: impl Fn(&K) -> Vec<Cell>) -> Self {
        let headers = key_headers.iter().map(ToString::to_string).chain(["count".to_string()]).collect();

        let rows = view
            .entries()
            .iter()
            .map(|(key, count)| {
                let mut row = key_cells(key);
                row.push(Cell::Count(*count));
                row
            })
            .collect();

        Self { kind, headers, rows }
    }

    /// One row per pivot row: the row key followed by a cell per column.
    pub fn from_pivot<R, C: Display, V: Copy>(
        kind: ViewKind,
        row_header: &str,
        pivot: &PivotView<R, C, V>,
        row_cell: impl Fn(&R) -> Cell,
        value_cell: impl Fn(V) -> Cell,
    ) -> Self {
        let headers = core::iter::once(row_header.to_string())
            .chain(pivot.columns().iter().map(ToString::to_string))
            .collect();

        let rows = pivot
            .iter_rows()
            .map(|(key, values)| core::iter::once(row_cell(key)).chain(values.iter().map(|&v| value_cell(v))).collect())
            .collect();

        Self { kind, headers, rows }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
