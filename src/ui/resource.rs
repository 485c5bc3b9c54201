//! Scaffold every read screen renders through: header, then the loading,
//! empty or populated body.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::lifecycle::Rendered;
use crate::ui::layout::LayoutContext;
use crate::ui::states::{refresh_badge, render_empty, render_loading};
use crate::ui::theme::{COLOR_DIM, COLOR_HEADER};
use crate::ui::wrap::wrap_lines;

/// Screen-level inputs that don't come from the loader.
pub struct ResourceFrame<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub loading_text: &'a str,
    pub tick: u64,
    pub scroll: u16,
}

/// Render `rendered` into `area`, calling `body` for populated content.
///
/// Returns the largest useful scroll offset: wrapped rows beyond what the
/// body area shows. Zero for the loading and empty states.
pub fn render_resource<V>(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    screen: &ResourceFrame<'_>,
    rendered: &Rendered<V>,
    body: impl FnOnce(&V, &LayoutContext) -> Vec<Line<'static>>,
) -> u16 {
    let area = ctx.content_column(area);
    let [header_area, body_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    render_header(frame, header_area, screen, rendered.is_refreshing());

    match rendered {
        Rendered::Loading => {
            render_loading(frame, body_area, screen.loading_text, screen.tick);
            0
        }
        Rendered::Empty { state, .. } => {
            render_empty(frame, body_area, state);
            0
        }
        Rendered::Populated { view, .. } => {
            let rows = wrap_lines(body(view, ctx), body_area.width as usize);
            let max_scroll = scroll_limit(rows.len(), body_area.height);
            let paragraph = Paragraph::new(rows).scroll((screen.scroll.min(max_scroll), 0));
            frame.render_widget(paragraph, body_area);
            max_scroll
        }
    }
}

fn scroll_limit(rows: usize, visible: u16) -> u16 {
    rows.saturating_sub(visible as usize).min(u16::MAX as usize) as u16
}

fn render_header(frame: &mut Frame, area: Rect, screen: &ResourceFrame<'_>, refreshing: bool) {
    let mut title = vec![Span::styled(
        screen.title.to_string(),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    if refreshing {
        title.push(Span::raw("  "));
        title.extend(refresh_badge(screen.tick).spans);
    }

    let mut lines = vec![Line::from(title)];
    if let Some(subtitle) = screen.subtitle {
        lines.push(Line::styled(subtitle.to_string(), Style::default().fg(COLOR_DIM)));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// A thin divider between cards.
pub fn divider(ctx: &LayoutContext) -> Line<'static> {
    let width = ctx.width.min(crate::ui::layout::MAX_CONTENT_WIDTH) as usize;
    Line::styled("─".repeat(width.saturating_sub(2)), Style::default().fg(COLOR_DIM))
}

/// `label value` with a dim label.
pub fn labelled(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} ", label), Style::default().fg(COLOR_DIM)),
        Span::raw(value.into()),
    ])
}
