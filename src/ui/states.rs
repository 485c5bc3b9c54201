//! Loading, empty and refreshing states shared by the read screens.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::Paragraph,
    Frame,
};

use crate::lifecycle::EmptyState;
use crate::ui::components::{render_status_indicator, spinner_frame_for_tick, StatusIndicatorType};
use crate::ui::theme::{COLOR_DIM, COLOR_HEADER};

/// Spinner with the screen's loading text, centred in `area`.
pub fn render_loading(frame: &mut Frame, area: Rect, text: &str, tick: u64) {
    let line = render_status_indicator(&StatusIndicatorType::spinner(
        text,
        spinner_frame_for_tick(tick),
    ));
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, vertical_center(area, 1));
}

/// Empty-state title and message, centred in `area`.
pub fn render_empty(frame: &mut Frame, area: Rect, state: &EmptyState) {
    //   "{title}"
    //   ""
    //   "{message}"
    let text = Text::from(vec![
        Line::styled(
            state.title.clone(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(state.message.clone(), Style::default().fg(COLOR_DIM)),
    ]);

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, vertical_center(area, 3));
}

/// Small badge shown in a screen header while a refresh runs.
pub fn refresh_badge(tick: u64) -> Line<'static> {
    render_status_indicator(&StatusIndicatorType::spinner(
        "Refreshing...",
        spinner_frame_for_tick(tick),
    ))
}

fn vertical_center(area: Rect, text_height: u16) -> Rect {
    let height = text_height.min(area.height);
    let y_offset = area.height.saturating_sub(height) / 2;
    Rect::new(area.x, area.y + y_offset, area.width, height)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_empty_state_is_centred() {
        let mut terminal = Terminal::new(TestBackend::new(60, 11)).unwrap();
        terminal
            .draw(|frame| {
                render_empty(
                    frame,
                    frame.area(),
                    &EmptyState::new("No Loans Yet", "You haven't applied for any loans yet."),
                );
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..60).map(|x| buffer[(x, 4)].symbol()).collect();
        assert_eq!(row.trim(), "No Loans Yet");
        assert!(screen_text(&terminal).contains("You haven't applied for any loans yet."));
    }

    #[test]
    fn test_loading_shows_text() {
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        terminal
            .draw(|frame| render_loading(frame, frame.area(), "Loading loans...", 0))
            .unwrap();
        assert!(screen_text(&terminal).contains("◐ Loading loans..."));
    }

    #[test]
    fn test_refresh_badge_text() {
        let line = refresh_badge(6);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "◓ Refreshing...");
    }
}
