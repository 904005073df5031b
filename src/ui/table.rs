//! Table rendering for formatted output.

use console::measure_text_width;

/// Spaces between columns.
const COLUMN_PADDING: usize = 6;

/// A borderless table whose columns are padded to their widest cell.
///
/// Widths are measured on visible text, so styled cells line up with plain
/// ones. The last column is never padded.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(measure_text_width(cell));
            }
        }

        self.rows.push(row);
    }

    /// Render the header and every row, one line each.
    pub fn render(&self) -> String {
        let mut output = self.render_row(&self.headers);
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::new();
        let last = self.column_widths.len().saturating_sub(1);

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            s.push_str(cell);
            if i < last {
                let fill = width + COLUMN_PADDING - measure_text_width(cell);
                s.push_str(&" ".repeat(fill));
            }
        }

        s
    }
}
