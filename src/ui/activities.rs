//! Activities tab.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::app::App;
use crate::lifecycle::ResourceScreen;
use crate::screens::activities::{ActivityCard, SUBTITLE, TITLE};
use crate::ui::layout::LayoutContext;
use crate::ui::resource::{divider, render_resource, ResourceFrame};
use crate::ui::theme::{COLOR_BADGE, COLOR_DIM};

/// Returns the tab's max scroll offset.
pub fn render_activities(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) -> u16 {
    let screen = ResourceFrame {
        title: TITLE,
        subtitle: Some(SUBTITLE),
        loading_text: app.activities.screen().loading_text(),
        tick: app.tick_count,
        scroll: app.scroll_offset(),
    };
    render_resource(
        frame,
        area,
        ctx,
        &screen,
        &app.activities.rendered(),
        |cards, ctx| activity_lines(cards, ctx),
    )
}

pub fn activity_lines(cards: &[ActivityCard], ctx: &LayoutContext) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for card in cards {
        lines.push(Line::from(vec![
            Span::styled(
                card.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", card.kind_label),
                Style::default().fg(COLOR_BADGE),
            ),
        ]));
        if let Some(description) = &card.description {
            lines.push(Line::raw(description.clone()));
        }
        lines.push(Line::styled(card.when.clone(), Style::default().fg(COLOR_DIM)));
        lines.push(divider(ctx));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityType;

    #[test]
    fn test_card_without_description() {
        let cards = vec![ActivityCard {
            title: "AGM".to_string(),
            kind: ActivityType::Meeting,
            kind_label: "Meeting".to_string(),
            description: None,
            when: "10/03/2024 at 14:00".to_string(),
        }];
        let lines = activity_lines(&cards, &LayoutContext::default());
        let text: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(text[0], "AGM  [Meeting]");
        assert_eq!(text[1], "10/03/2024 at 14:00");
        assert_eq!(lines.len(), 3);
    }
}
