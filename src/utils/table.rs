//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_right, truncate};
use ansi_term::Style;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    /// Upper bound for the column width; longer cells are truncated.
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

struct Row {
    cells: Vec<String>,
    style: Option<Style>,
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(Row { cells, style: None });
    }

    /// Same as [`Table::add_row`], painting the whole line with `style`.
    pub fn add_styled_row(&mut self, cells: Vec<String>, style: Style) {
        self.rows.push(Row {
            cells,
            style: Some(style),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|r| r.cells.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0);
                widest.min(col.max_width)
            })
            .collect()
    }

    fn line(cells: &[String], widths: &[usize]) -> String {
        let mut out = String::new();
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            out.push_str(&pad_right(&truncate(cell, *width), *width));
            if i + 1 < widths.len() {
                out.push_str(" | ");
            }
        }
        out.trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        out.push_str(&Style::new().bold().paint(Self::line(&headers, &widths)).to_string());
        out.push('\n');

        let total = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let text = Self::line(&row.cells, &widths);
            match row.style {
                Some(style) => out.push_str(&style.paint(text).to_string()),
                None => out.push_str(&text),
            }
            out.push('\n');
        }

        out
    }
}
