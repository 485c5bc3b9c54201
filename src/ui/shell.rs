//! Tab bar and key-hint footer around the main tabs.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Tab};
use crate::ui::components::{render_tab_selector, TabItem};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM};

const HOTKEYS: [char; 5] = ['1', '2', '3', '4', '5'];

pub fn render_tab_bar(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let items: Vec<TabItem> = Tab::ALL
        .iter()
        .zip(HOTKEYS)
        .map(|(tab, key)| TabItem::new(tab.label(), tab.short_label()).hotkey(key))
        .collect();
    let line = render_tab_selector(&items, app.tab.index(), ctx);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Key hints for the current tab.
pub fn footer_hint(app: &App) -> &'static str {
    if app.tab.is_form() {
        "Tab next tab · ↑/↓ field · Enter pay · Ctrl+C quit"
    } else {
        "Tab/1-5 switch · r refresh · ↑/↓ scroll · q quit"
    }
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        footer_hint(app),
        Style::default().fg(COLOR_DIM),
    )];
    if let Some(user) = &app.user {
        spans.push(Span::styled(
            format!("  ·  {}", user),
            Style::default().fg(COLOR_DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
