//! Dashboard tab: greeting, stat cards and the two recent lists.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::app::App;
use crate::lifecycle::{Rendered, ResourceScreen};
use crate::screens::dashboard::{DashboardView, GREETING, NO_CONTRIBUTIONS, NO_LOANS};
use crate::ui::layout::LayoutContext;
use crate::ui::resource::{divider, render_resource, ResourceFrame};
use crate::ui::theme::{COLOR_AMOUNT, COLOR_BADGE, COLOR_DIM, COLOR_HEADER};

/// Returns the tab's max scroll offset.
pub fn render_dashboard(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) -> u16 {
    let rendered = app.dashboard.rendered();
    let member = match &rendered {
        Rendered::Populated { view, .. } if !view.member_name.is_empty() => {
            Some(view.member_name.as_str())
        }
        _ => app.user.as_deref(),
    };

    let screen = ResourceFrame {
        title: GREETING,
        subtitle: member,
        loading_text: app.dashboard.screen().loading_text(),
        tick: app.tick_count,
        scroll: app.scroll_offset(),
    };
    render_resource(frame, area, ctx, &screen, &rendered, dashboard_lines)
}

fn section(title: &str) -> Line<'static> {
    Line::styled(
        title.to_string(),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn dashboard_lines(view: &DashboardView, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Stat cards side by side when there is room, stacked otherwise.
    if ctx.is_narrow() {
        for card in &view.stats {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", card.label), Style::default().fg(COLOR_DIM)),
                Span::styled(
                    card.value.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
        }
    } else {
        let mut labels = Vec::new();
        let mut values = Vec::new();
        for card in &view.stats {
            labels.push(Span::styled(
                format!("{:<24}", card.label),
                Style::default().fg(COLOR_DIM),
            ));
            values.push(Span::styled(
                format!("{:<24}", card.value),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(labels));
        lines.push(Line::from(values));
    }

    lines.push(Line::raw(""));
    lines.push(section("Recent Contributions"));
    lines.push(divider(ctx));
    if view.recent_contributions.is_empty() {
        lines.push(Line::styled(NO_CONTRIBUTIONS, Style::default().fg(COLOR_DIM)));
    }
    for row in &view.recent_contributions {
        lines.push(Line::from(vec![
            Span::styled(row.amount.clone(), Style::default().fg(COLOR_AMOUNT)),
            Span::raw("  "),
            Span::raw(row.description.clone()),
            Span::raw("  "),
            Span::styled(row.date.clone(), Style::default().fg(COLOR_DIM)),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(section("Recent Loans"));
    lines.push(divider(ctx));
    if view.recent_loans.is_empty() {
        lines.push(Line::styled(NO_LOANS, Style::default().fg(COLOR_DIM)));
    }
    for row in &view.recent_loans {
        lines.push(Line::from(vec![
            Span::styled(row.amount.clone(), Style::default().fg(COLOR_AMOUNT)),
            Span::raw("  "),
            Span::raw(row.purpose.clone()),
            Span::raw("  "),
            Span::styled(row.status.label().to_string(), Style::default().fg(COLOR_BADGE)),
        ]));
    }

    lines
}
