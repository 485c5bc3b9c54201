//! Discussions tab.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::app::App;
use crate::lifecycle::ResourceScreen;
use crate::screens::discussions::{DiscussionCard, SUBTITLE, TITLE};
use crate::ui::layout::LayoutContext;
use crate::ui::resource::{divider, render_resource, ResourceFrame};
use crate::ui::theme::COLOR_DIM;

/// Returns the tab's max scroll offset.
pub fn render_discussions(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) -> u16 {
    let screen = ResourceFrame {
        title: TITLE,
        subtitle: Some(SUBTITLE),
        loading_text: app.discussions.screen().loading_text(),
        tick: app.tick_count,
        scroll: app.scroll_offset(),
    };
    render_resource(
        frame,
        area,
        ctx,
        &screen,
        &app.discussions.rendered(),
        |cards, ctx| discussion_lines(cards, ctx),
    )
}

pub fn discussion_lines(cards: &[DiscussionCard], ctx: &LayoutContext) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for card in cards {
        lines.push(Line::from(vec![
            Span::styled(
                card.author.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(card.date.clone(), Style::default().fg(COLOR_DIM)),
        ]));
        lines.push(Line::styled(
            card.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(card.content.clone()));
        lines.push(divider(ctx));
    }
    lines
}
