//! Tab Selector Component
//!
//! A horizontal tab bar. The selected tab gets a `▶` marker; compact
//! terminals get the short labels.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
    /// Optional hotkey shown before the label
    pub hotkey: Option<char>,
}

impl<'a> TabItem<'a> {
    pub fn new(label: &'a str, short_label: &'a str) -> Self {
        Self {
            label,
            short_label,
            hotkey: None,
        }
    }

    pub fn hotkey(mut self, key: char) -> Self {
        self.hotkey = Some(key);
        self
    }
}

/// Render a horizontal tab selector.
///
/// ```ignore
/// let items = vec![TabItem::new("Dashboard", "Home"), TabItem::new("Loans", "Loans")];
/// let line = render_tab_selector(&items, 0, &ctx);
/// ```
pub fn render_tab_selector(items: &[TabItem<'_>], selected: usize, ctx: &LayoutContext) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };
        let text = match item.hotkey {
            Some(key) if !ctx.is_extra_small() => format!("{} {}", key, label),
            _ => label.to_string(),
        };

        if idx == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                text,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            let dim = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ", dim));
            spans.push(Span::styled(text, dim));
        }

        if idx + 1 < items.len() {
            let spacing = if ctx.is_extra_small() { " " } else { "   " };
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<TabItem<'static>> {
        vec![
            TabItem::new("Dashboard", "Home").hotkey('1'),
            TabItem::new("Discussions", "Talk").hotkey('2'),
        ]
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_marker_before_selected() {
        let ctx = LayoutContext::new(120, 40);
        let line = text(&render_tab_selector(&items(), 1, &ctx));

        let marker = line.find("▶").unwrap();
        assert!(marker > line.find("Dashboard").unwrap());
        assert!(marker < line.find("Discussions").unwrap());
    }

    #[test]
    fn test_compact_uses_short_labels() {
        let ctx = LayoutContext::new(70, 30);
        let line = text(&render_tab_selector(&items(), 0, &ctx));
        assert!(line.contains("1 Home"));
        assert!(!line.contains("Dashboard"));
    }

    #[test]
    fn test_extra_small_drops_hotkeys() {
        let ctx = LayoutContext::new(50, 14);
        let line = text(&render_tab_selector(&items(), 0, &ctx));
        assert!(line.contains("Home"));
        assert!(!line.contains("1 Home"));
    }
}
