//! Table rendering utilities for CLI listings.

use regex::Regex;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render with per-column widths sized to the widest cell.
    /// Widths are display widths: ANSI color codes are ignored and
    /// accented names line up.
    pub fn render(&self) -> String {
        let ansi_re = Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
        let width_of = |s: &str| ansi_re.replace_all(s, "").width();

        let cols = self.headers.len();
        let mut widths: Vec<usize> = self.headers.iter().map(|h| width_of(h)).collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(cols) {
                widths[i] = widths[i].max(width_of(cell));
            }
        }

        let mut out = String::new();

        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(&pad(h, width_of(h), widths[i]));
            out.push(' ');
        }
        out.push('\n');

        for (i, _) in self.headers.iter().enumerate() {
            out.push_str(&"-".repeat(widths[i]));
            out.push(' ');
        }
        out.push('\n');

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(cols) {
                out.push_str(&pad(cell, width_of(cell), widths[i]));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, current: usize, width: usize) -> String {
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}
