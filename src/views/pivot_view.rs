use std::collections::{BTreeMap, BTreeSet};

/// Dense two-key matrix of values.
///
/// Rows and columns are sorted ascending and every cell in the rows × columns product is
/// defined, with zero standing in for combinations that never occur.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotView<R, C, V = u64> {
    rows: Vec<R>,
    columns: Vec<C>,
    cells: Vec<Vec<V>>,
}

impl<R, C, V> PivotView<R, C, V> {
    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    #[must_use]
    pub fn columns(&self) -> &[C] {
        &self.columns
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows with their values.
    pub fn iter_rows(&self) -> impl Iterator<Item = (&R, &[V])> {
        self.rows.iter().zip(self.cells.iter().map(Vec::as_slice))
    }
}

impl<R: Ord, C: Ord, V: Copy> PivotView<R, C, V> {
    /// Value at `(row, column)`, or `None` when either key is outside the domain.
    pub fn get(&self, row: &R, column: &C) -> Option<V> {
        let r = self.rows.binary_search(row).ok()?;
        let c = self.columns.binary_search(column).ok()?;
        Some(self.cells[r][c])
    }
}

impl<R: Ord + Clone, C: Ord + Clone> PivotView<R, C, u64> {
    /// Count `(row, column)` pairs into a dense matrix.
    ///
    /// The domain is the distinct rows and columns present in `pairs`.
    pub fn tally(pairs: impl IntoIterator<Item = (R, C)>) -> Self {
        let mut counts: BTreeMap<(R, C), u64> = BTreeMap::new();
        for pair in pairs {
            *counts.entry(pair).or_insert(0) += 1;
        }

        let rows: Vec<R> = counts.keys().map(|(r, _)| r.clone()).collect::<BTreeSet<_>>().into_iter().collect();
        let columns: Vec<C> = counts.keys().map(|(_, c)| c.clone()).collect::<BTreeSet<_>>().into_iter().collect();

        let mut cells = vec![vec![0; columns.len()]; rows.len()];
        for ((row, column), count) in counts {
            if let (Ok(r), Ok(c)) = (rows.binary_search(&row), columns.binary_search(&column)) {
                cells[r][c] = count;
            }
        }

        Self { rows, columns, cells }
    }

    /// Divide each row by its total so every non-empty row sums to one.
    ///
    /// A row whose total is zero becomes all zeros.
    #[must_use]
    pub fn row_shares(&self) -> PivotView<R, C, f64> {
        let cells = self
            .cells
            .iter()
            .map(|row| {
                let total: u64 = row.iter().sum();
                row.iter()
                    .map(|&count| if total == 0 { 0.0 } else { as_f64(count) / as_f64(total) })
                    .collect()
            })
            .collect();

        PivotView {
            rows: self.rows.clone(),
            columns: self.columns.clone(),
            cells,
        }
    }
}

#[expect(clippy::cast_precision_loss, reason = "Title counts are far below 2^52")]
fn as_f64(count: u64) -> f64 {
    count as f64
}
