//! Plain-text table rendering for CLI outputs.
//!
//! Columns declare a minimum width; the actual width grows to fit the widest
//! cell, measured in display columns so wide glyphs line up.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    header: String,
    min_width: usize,
}

impl Column {
    pub fn new(header: &str, min_width: usize) -> Self {
        Self {
            header: header.to_string(),
            min_width,
        }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    fn fitted_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| c.min_width.max(UnicodeWidthStr::width(c.header.as_str())))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        widths
    }

    pub fn render(&self) -> String {
        let widths = self.fitted_widths();
        let mut out = String::new();

        for (col, width) in self.columns.iter().zip(&widths) {
            pad_to(&mut out, &col.header, *width);
        }
        out.push('\n');

        for width in &widths {
            out.push_str(&"-".repeat(*width));
            out.push_str("  ");
        }
        out.push('\n');

        for row in &self.rows {
            for (cell, width) in row.iter().zip(&widths) {
                pad_to(&mut out, cell, *width);
            }
            out.push('\n');
        }

        out
    }
}

fn pad_to(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    let used = UnicodeWidthStr::width(text);
    for _ in used..width + 2 {
        out.push(' ');
    }
}
