use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

/// Bordered text table with a header line and an optional footer.
#[derive(Debug, Clone)]
pub struct TextTable {
    headers: Vec<String>,
    alignments: Vec<Align>,
    rows: Vec<Vec<String>>,
    footer: Option<Vec<String>>,
}

impl TextTable {
    pub fn new<S: AsRef<str>>(headers: &[S], alignments: &[Align]) -> Self {
        let headers: Vec<String> = headers.iter().map(|h| h.as_ref().to_string()).collect();
        let mut alignments = alignments.to_vec();
        alignments.resize(headers.len(), Align::Left);
        Self {
            headers,
            alignments,
            rows: Vec::new(),
            footer: None,
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(self.fit(row));
    }

    pub fn set_footer(&mut self, footer: Vec<String>) {
        self.footer = Some(self.fit(footer));
    }

    fn fit(&self, mut row: Vec<String>) -> Vec<String> {
        row.resize(self.headers.len(), String::new());
        row
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| visible_width_ansi(h)).collect();
        for row in self.rows.iter().chain(self.footer.iter()) {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(visible_width_ansi(cell));
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let border = border_line(&widths);

        let mut out = String::new();
        out.push_str(&border);
        let header_align = vec![Align::Center; self.headers.len()];
        out.push_str(&row_line(&self.headers, &widths, &header_align));
        out.push_str(&border);
        for row in &self.rows {
            out.push_str(&row_line(row, &widths, &self.alignments));
        }
        if let Some(footer) = &self.footer {
            if !self.rows.is_empty() {
                out.push_str(&border);
            }
            out.push_str(&row_line(footer, &widths, &self.alignments));
        }
        out.push_str(&border);
        out
    }
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn row_line(cells: &[String], widths: &[usize], alignments: &[Align]) -> String {
    let mut line = String::from("|");
    for ((cell, w), align) in cells.iter().zip(widths).zip(alignments) {
        let padded = match align {
            Align::Left => pad_end_display(cell, *w),
            Align::Right => pad_start_display(cell, *w),
            Align::Center => pad_center_display(cell, *w),
        };
        line.push(' ');
        line.push_str(&padded);
        line.push_str(" |");
    }
    line.push('\n');
    line
}

fn pad_end_display(s: &str, width: usize) -> String {
    let w = visible_width_ansi(s);
    if w >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - w))
}

fn pad_start_display(s: &str, width: usize) -> String {
    let w = visible_width_ansi(s);
    if w >= width {
        return s.to_string();
    }
    format!("{}{}", " ".repeat(width - w), s)
}

fn pad_center_display(s: &str, width: usize) -> String {
    let w = visible_width_ansi(s);
    if w >= width {
        return s.to_string();
    }
    let left = (width - w) / 2;
    let right = width - w - left;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(right))
}

pub fn visible_width_ansi(s: &str) -> usize {
    let mut width: usize = 0;
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            let _ = chars.next();
            for ch2 in chars.by_ref() {
                if ch2 == 'm' {
                    break;
                }
            }
            continue;
        }
        width = width.saturating_add(UnicodeWidthChar::width(ch).unwrap_or(0));
    }
    width
}
