//! Word wrapping for styled lines.
//!
//! Read screens pre-wrap their content so the number of rows on screen is
//! known exactly; that count bounds how far a tab can scroll.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap every line to `width` columns.
pub fn wrap_lines(lines: Vec<Line<'static>>, width: usize) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

/// Wrap one line at word boundaries. Words wider than `width` are split.
///
/// Spaces at a wrap point are dropped; styles carry over to every row.
pub fn wrap_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 || line.width() <= width {
        return vec![line];
    }

    let line_style = line.style;
    let alignment = line.alignment;
    let mut rows = RowBuilder::new(width);

    for span in &line.spans {
        let style = span.style;
        let mut word = String::new();
        for c in span.content.chars() {
            if c == ' ' {
                rows.push_word(&mut word, style);
                rows.push_space(style);
            } else {
                word.push(c);
            }
        }
        rows.push_word(&mut word, style);
    }

    rows.finish()
        .into_iter()
        .map(|spans| {
            let mut row = Line::from(spans).style(line_style);
            row.alignment = alignment;
            row
        })
        .collect()
}

struct RowBuilder {
    width: usize,
    rows: Vec<Vec<Span<'static>>>,
    current: Vec<Span<'static>>,
    used: usize,
}

impl RowBuilder {
    fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
            current: Vec::new(),
            used: 0,
        }
    }

    fn break_row(&mut self) {
        while self
            .current
            .last()
            .is_some_and(|span| span.content.trim().is_empty())
        {
            self.current.pop();
        }
        self.rows.push(std::mem::take(&mut self.current));
        self.used = 0;
    }

    fn push_space(&mut self, style: Style) {
        // Leading spaces survive only on the first row.
        if self.used == 0 && !self.rows.is_empty() {
            return;
        }
        if self.used + 1 > self.width {
            self.break_row();
            return;
        }
        self.current.push(Span::styled(" ", style));
        self.used += 1;
    }

    fn push_word(&mut self, word: &mut String, style: Style) {
        if word.is_empty() {
            return;
        }
        let text = std::mem::take(word);
        let w = text.width();

        if self.used + w <= self.width {
            self.current.push(Span::styled(text, style));
            self.used += w;
            return;
        }
        if w <= self.width {
            self.break_row();
            self.current.push(Span::styled(text, style));
            self.used = w;
            return;
        }

        // Too long for any row: split by character.
        let mut chunk = String::new();
        for c in text.chars() {
            let cw = c.width().unwrap_or(0);
            if self.used + chunk.width() + cw > self.width {
                if !chunk.is_empty() {
                    self.current.push(Span::styled(std::mem::take(&mut chunk), style));
                }
                self.break_row();
            }
            chunk.push(c);
        }
        if !chunk.is_empty() {
            self.used += chunk.width();
            self.current.push(Span::styled(chunk, style));
        }
    }

    fn finish(mut self) -> Vec<Vec<Span<'static>>> {
        if !self.current.is_empty() || self.rows.is_empty() {
            self.rows.push(self.current);
        }
        self.rows
    }
}
