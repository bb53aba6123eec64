//! In-memory sensor log table.
//!
//! A [`SensorTable`] keeps the CSV cells as raw strings and coerces on
//! access: [`SensorTable::numeric`] turns an empty, whitespace-only or
//! non-numeric cell into `None`. Missing readings stay missing all the way
//! through scoring; they are never defaulted to zero.

use log::{info, warn};

/// A loaded sensor log: one header row plus raw data cells.
#[derive(Debug, Clone)]
pub struct SensorTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SensorTable {
    /// Builds a table from a header row and data rows.
    ///
    /// Rows shorter than the header are padded with empty cells so that
    /// ragged input behaves like cells that were never recorded.
    pub fn new(headers: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        for row in rows.iter_mut() {
            if row.len() < width {
                row.resize(width, String::new());
            }
        }
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Index of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Raw cell content at (row, column index).
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Numeric value of a cell, coerced.
    ///
    /// Empty, whitespace-only and non-numeric cells are `None`. Literal
    /// `NaN`/`inf` cells also coerce to `None`: a score must be a real
    /// number, and `str::parse::<f64>` would otherwise accept them.
    pub fn numeric(&self, row: usize, col: usize) -> Option<f64> {
        let raw = self.cell(row, col)?.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Audits the table for empty cells.
    pub fn null_report(&self) -> NullReport {
        let mut per_column = vec![0usize; self.headers.len()];
        let mut rows_with_nulls = Vec::new();

        for (row_idx, row) in self.rows.iter().enumerate() {
            let mut null_columns = Vec::new();
            for (col_idx, cell) in row.iter().enumerate() {
                if cell.trim().is_empty() {
                    per_column[col_idx] += 1;
                    null_columns.push(self.headers[col_idx].clone());
                }
            }
            if !null_columns.is_empty() {
                rows_with_nulls.push((row_idx, null_columns));
            }
        }

        NullReport {
            headers: self.headers.clone(),
            per_column,
            rows_with_nulls,
            num_rows: self.rows.len(),
        }
    }
}

/// Per-column and per-row summary of empty cells in a [`SensorTable`].
#[derive(Debug, Clone)]
pub struct NullReport {
    headers: Vec<String>,
    per_column: Vec<usize>,
    /// Row index plus the names of the columns that were empty in that row.
    rows_with_nulls: Vec<(usize, Vec<String>)>,
    num_rows: usize,
}

impl NullReport {
    /// Total number of empty cells across the table.
    pub fn total_nulls(&self) -> usize {
        self.per_column.iter().sum()
    }

    /// Empty-cell count of a named column, if the column exists.
    pub fn nulls_in_column(&self, name: &str) -> Option<usize> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(self.per_column[idx])
    }

    /// Indices of rows containing at least one empty cell.
    pub fn rows_with_nulls(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows_with_nulls.iter().map(|(idx, _)| *idx)
    }

    /// Writes the audit to the log, mirroring the study's preprocessing check.
    pub fn log(&self) {
        let total = self.total_nulls();
        if total == 0 {
            info!("null audit: no empty cells in {} rows", self.num_rows);
            return;
        }

        info!(
            "null audit: {total} empty cells across {} of {} rows",
            self.rows_with_nulls.len(),
            self.num_rows
        );
        for (header, count) in self.headers.iter().zip(&self.per_column) {
            if *count > 0 {
                let pct = if self.num_rows > 0 {
                    100.0 * *count as f64 / self.num_rows as f64
                } else {
                    0.0
                };
                info!("  column '{header}': {count} empty ({pct:.2}%)");
            }
        }
        for (row_idx, columns) in &self.rows_with_nulls {
            warn!("  row {row_idx} has empty cells in: {}", columns.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SensorTable {
        SensorTable::new(
            vec!["id".into(), "t".into(), "h".into()],
            vec![
                vec!["1".into(), "21.5".into(), "55".into()],
                vec!["2".into(), "".into(), "60".into()],
                vec!["3".into(), "n/a".into(), " 48.2 ".into()],
            ],
        )
    }

    #[test]
    fn test_numeric_coercion() {
        let t = table();
        let t_col = t.column_index("t").unwrap();
        let h_col = t.column_index("h").unwrap();

        assert_eq!(t.numeric(0, t_col), Some(21.5));
        // Empty cell is missing, not zero.
        assert_eq!(t.numeric(1, t_col), None);
        // Non-numeric text is coerced to missing.
        assert_eq!(t.numeric(2, t_col), None);
        // Surrounding whitespace is tolerated.
        assert_eq!(t.numeric(2, h_col), Some(48.2));
    }

    #[test]
    fn test_non_finite_cells_are_missing() {
        // `str::parse::<f64>` accepts these spellings; the table must not.
        let t = SensorTable::new(
            vec!["v".into()],
            vec![
                vec!["NaN".into()],
                vec!["nan".into()],
                vec!["inf".into()],
                vec!["-inf".into()],
                vec!["infinity".into()],
            ],
        );
        for row in 0..t.num_rows() {
            assert_eq!(t.numeric(row, 0), None, "row {row} must coerce to missing");
        }
    }

    #[test]
    fn test_short_rows_are_padded() {
        let t = SensorTable::new(
            vec!["a".into(), "b".into()],
            vec![vec!["1".into()]],
        );
        let b = t.column_index("b").unwrap();
        assert_eq!(t.cell(0, b), Some(""));
        assert_eq!(t.numeric(0, b), None);
    }

    #[test]
    fn test_null_report_counts() {
        let report = table().null_report();
        assert_eq!(report.total_nulls(), 1);
        assert_eq!(report.nulls_in_column("t"), Some(1));
        assert_eq!(report.nulls_in_column("h"), Some(0));
        assert_eq!(report.rows_with_nulls().collect::<Vec<_>>(), vec![1]);
    }
}
