//! Table rendering utilities for CLI outputs.
//! Column widths follow the widest cell (display width, ANSI codes excluded).

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    separator: char,
}

fn visible_width(s: &str) -> usize {
    let mut plain = String::with_capacity(s.len());
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, c) => plain.push(c),
        }
    }
    UnicodeWidthStr::width(plain.as_str())
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            separator: '-',
        }
    }

    /// Character used for the rule under the header.
    pub fn with_separator(mut self, sep: char) -> Self {
        self.separator = sep;
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| visible_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(visible_width(cell));
            }
        }
        widths
    }

    fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
        for (i, w) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            out.push_str(cell);
            out.push_str(&" ".repeat(w.saturating_sub(visible_width(cell)) + 2));
        }
        let trimmed = out.trim_end_matches(' ').len();
        out.truncate(trimmed);
        out.push('\n');
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        Self::push_line(&mut out, &self.headers, &widths);
        let total: usize = widths.iter().map(|w| w + 2).sum();
        out.extend(std::iter::repeat_n(self.separator, total.saturating_sub(2)));
        out.push('\n');

        for row in &self.rows {
            Self::push_line(&mut out, row, &widths);
        }

        out
    }
}
