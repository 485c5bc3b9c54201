//! Sign-in screen.

use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::screens::login::{LoginField, LoginForm, SUBTITLE, TITLE};
use crate::ui::components::{
    render_input_field, render_status_indicator, spinner_frame_for_tick, InputFieldConfig,
    StatusIndicatorType,
};
use crate::ui::layout::{centered_rect, LayoutContext};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

/// Title, subtitle, two fields, error, button and hint.
const CARD_HEIGHT: u16 = 18;

pub fn render_login_screen(frame: &mut Frame, form: &LoginForm, tick: u64) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer_block, area);

    let inner = area.inner(Margin::new(2, 1));
    let card = centered_rect(inner, ctx.bounded_width(50, 30, 56), CARD_HEIGHT);
    let row = |y: u16, height: u16| {
        Rect::new(card.x, card.y + y, card.width, height.min(card.height.saturating_sub(y)))
    };

    let header = vec![
        Line::styled(
            TITLE,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(SUBTITLE, Style::default().fg(COLOR_DIM)),
    ];
    frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), row(0, 2));
    if card.height < CARD_HEIGHT {
        return;
    }

    let mut y = 3;
    y += render_input_field(
        frame,
        row(y, 4),
        &InputFieldConfig::new("Username", &form.username)
            .focused(form.focus == LoginField::Username),
    );
    y += render_input_field(
        frame,
        row(y, 4),
        &InputFieldConfig::new("Password", &form.password)
            .password(true)
            .focused(form.focus == LoginField::Password),
    );

    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!("\u{2717} {}", error),
                Style::default().fg(COLOR_ERROR),
            ))
            .alignment(Alignment::Center),
            row(y, 1),
        );
    }
    y += 2;

    let button = if form.is_submitting() {
        render_status_indicator(&StatusIndicatorType::spinner(
            form.button_label(),
            spinner_frame_for_tick(tick),
        ))
    } else {
        Line::styled(
            format!("[ {} ]", form.button_label()),
            Style::default()
                .fg(Color::Black)
                .bg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(Paragraph::new(button).alignment(Alignment::Center), row(y, 1));
    y += 2;

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Tab switch field · Enter sign in · Ctrl+C quit",
            Style::default().fg(COLOR_DIM),
        ))
        .alignment(Alignment::Center),
        row(y, 1),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(form: &LoginForm) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| render_login_screen(frame, form, 0))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..30 {
            for x in 0..80 {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_password_is_masked() {
        let mut form = LoginForm::new();
        form.username = "jane".to_string();
        form.password = "secret".to_string();

        let out = draw(&form);
        assert!(out.contains("jane"));
        assert!(!out.contains("secret"));
        assert!(out.contains("[ Sign In ]"));
    }

    #[test]
    fn test_inline_error() {
        let mut form = LoginForm::new();
        form.error = Some("Invalid credentials".to_string());
        assert!(draw(&form).contains("Invalid credentials"));
    }
}
