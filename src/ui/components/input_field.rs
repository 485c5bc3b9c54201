//! Input Field Component
//!
//! A labelled text input with focus handling, password masking, help text
//! and inline error display.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Whether to mask the value (for passwords)
    pub is_password: bool,
    /// Optional error message to display below the input
    pub error: Option<&'a str>,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
    /// Optional dim hint below the input
    pub help: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            is_password: false,
            error: None,
            placeholder: None,
            help: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn help(mut self, help: &'a str) -> Self {
        self.help = Some(help);
        self
    }
}

/// Rows needed for an input field:
/// - 1 for label
/// - 3 for input box (border + content + border)
/// - 1 each for help and error, if present
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    let mut height = 4;
    if config.help.is_some() {
        height += 1;
    }
    if config.error.is_some() {
        height += 1;
    }
    height
}

/// Text shown inside the box, before the cursor.
fn display_value(config: &InputFieldConfig) -> (String, bool) {
    if config.is_password {
        return ("\u{2022}".repeat(config.value.chars().count()), false);
    }
    match config.placeholder {
        Some(placeholder) if config.value.is_empty() => (placeholder.to_string(), true),
        _ => (config.value.to_string(), false),
    }
}

/// Keep the end of `text` that fits in `width` columns, so the cursor
/// stays visible while typing past the edge.
fn visible_tail(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

/// Render an input field with label, input box, help and optional error.
///
/// Returns the height consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let mut y_offset = 0;
    let row = |y: u16, height: u16| Rect {
        x: area.x,
        y: area.y + y,
        width: area.width,
        height,
    };

    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        row(y_offset, 1),
    );
    y_offset += 1;

    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let (mut content, is_placeholder) = display_value(config);
    let text_style = if is_placeholder || !config.focused {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default().fg(Color::White)
    };
    if config.focused {
        if is_placeholder {
            content.clear();
        }
        // Inner width less one column for the cursor.
        let room = area.width.saturating_sub(3) as usize;
        content = visible_tail(&content, room).to_string();
        content.push('\u{2588}'); // Block cursor
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(content, text_style))).block(block),
        row(y_offset, 3),
    );
    y_offset += 3;

    if let Some(help) = config.help {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(help, Style::default().fg(COLOR_DIM)))),
            row(y_offset, 1),
        );
        y_offset += 1;
    }

    if let Some(error) = config.error {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
                Span::styled(error, Style::default().fg(COLOR_ERROR)),
            ])),
            row(y_offset, 1),
        );
        y_offset += 1;
    }

    y_offset
}

// ============================================================================
// Tests
// ============================================================================
