//! Loans tab.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::app::App;
use crate::lifecycle::ResourceScreen;
use crate::screens::loans::{LoanCard, SUBTITLE, TITLE};
use crate::ui::layout::LayoutContext;
use crate::ui::resource::{divider, labelled, render_resource, ResourceFrame};
use crate::ui::theme::{COLOR_AMOUNT, COLOR_BADGE};

/// Returns the tab's max scroll offset.
pub fn render_loans(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) -> u16 {
    let screen = ResourceFrame {
        title: TITLE,
        subtitle: Some(SUBTITLE),
        loading_text: app.loans.screen().loading_text(),
        tick: app.tick_count,
        scroll: app.scroll_offset(),
    };
    render_resource(
        frame,
        area,
        ctx,
        &screen,
        &app.loans.rendered(),
        |cards, ctx| loan_lines(cards, ctx),
    )
}

pub fn loan_lines(cards: &[LoanCard], ctx: &LayoutContext) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for card in cards {
        lines.push(Line::from(vec![
            Span::styled(
                card.amount.clone(),
                Style::default()
                    .fg(COLOR_AMOUNT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", card.status.label()),
                Style::default().fg(COLOR_BADGE),
            ),
        ]));
        lines.push(Line::raw(card.purpose.clone()));
        lines.push(labelled("Applied:", card.applied.clone()));
        if let Some(due) = &card.due {
            lines.push(labelled("Due Date:", due.clone()));
        }
        lines.push(divider(ctx));
    }
    lines
}
