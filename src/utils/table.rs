//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

struct Column {
    header: String,
    width: usize,
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table whose column widths fit both headers and cells.
    pub fn fitted(headers: &[&str], rows: &[Vec<String>]) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let cells_w = rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.width())
                    .max()
                    .unwrap_or(0);
                Column {
                    header: h.to_string(),
                    width: h.width().max(cells_w),
                }
            })
            .collect();

        Self {
            columns,
            rows: rows.to_vec(),
        }
    }

    /// Render header, a separator line made of `sep`, then the rows.
    pub fn render(&self, sep: &str) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        let sep = if sep.is_empty() { "-" } else { sep };
        out.push_str(&sep.repeat(total / sep.width().max(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad(cell, col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

/// Left-align by display width, so wide characters line up.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}
