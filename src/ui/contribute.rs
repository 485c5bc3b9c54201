//! Contribute tab: the M-Pesa payment form.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::screens::contribute::{
    ContributeField, ContributeForm, AMOUNT_LABEL, DESCRIPTION_LABEL, HOW_IT_WORKS, PHONE_HELP,
    PHONE_LABEL, SUBTITLE, TITLE,
};
use crate::ui::components::{
    calculate_input_field_height, render_input_field, render_status_indicator,
    spinner_frame_for_tick, InputFieldConfig, StatusIndicatorType,
};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

/// Widest the form gets.
const FORM_MAX_WIDTH: u16 = 70;

pub fn render_contribute(
    frame: &mut Frame,
    area: Rect,
    form: &ContributeForm,
    tick: u64,
    ctx: &LayoutContext,
) {
    let width = area.width.min(FORM_MAX_WIDTH);
    let form_area = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);
    let bottom = form_area.y + form_area.height;
    let mut y = form_area.y;

    let header = vec![
        Line::styled(
            TITLE,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(SUBTITLE, Style::default().fg(COLOR_DIM)),
    ];
    frame.render_widget(
        Paragraph::new(header),
        Rect::new(form_area.x, y, width, 2.min(form_area.height)),
    );
    y += 3;

    let fields = [
        InputFieldConfig::new(AMOUNT_LABEL, &form.amount)
            .placeholder("e.g. 500")
            .focused(form.focus == ContributeField::Amount),
        InputFieldConfig::new(PHONE_LABEL, &form.phone)
            .placeholder("254712345678")
            .help(PHONE_HELP)
            .focused(form.focus == ContributeField::Phone),
        InputFieldConfig::new(DESCRIPTION_LABEL, &form.description)
            .focused(form.focus == ContributeField::Description),
    ];

    for config in &fields {
        let height = calculate_input_field_height(config);
        if y + height > bottom {
            return;
        }
        y += render_input_field(frame, Rect::new(form_area.x, y, width, height), config);
    }

    if y >= bottom {
        return;
    }
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
    frame.render_widget(
        Paragraph::new(button).alignment(Alignment::Center),
        Rect::new(form_area.x, y, width, 1),
    );
    y += 2;

    // Skipped entirely on short terminals.
    let steps_height = HOW_IT_WORKS.len() as u16 + 1;
    if ctx.is_short() || y + steps_height > bottom {
        return;
    }
    let mut steps = vec![Line::styled(
        "How it works",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    steps.extend(
        HOW_IT_WORKS
            .iter()
            .map(|step| Line::styled(*step, Style::default().fg(COLOR_DIM))),
    );
    frame.render_widget(
        Paragraph::new(steps),
        Rect::new(form_area.x, y, width, steps_height),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(form: &ContributeForm, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let ctx = LayoutContext::from_rect(frame.area());
                render_contribute(frame, frame.area(), form, 0, &ctx);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_form_and_steps() {
        let out = draw(&ContributeForm::new(), 80, 40);
        assert!(out.contains(TITLE));
        assert!(out.contains(AMOUNT_LABEL));
        assert!(out.contains(PHONE_HELP));
        assert!(out.contains("[ Pay via M-Pesa ]"));
        assert!(out.contains("How it works"));
    }

    #[test]
    fn test_processing_label_while_submitting() {
        let mut form = ContributeForm::new();
        form.amount = "500".to_string();
        form.phone = "254712345678".to_string();
        form.begin_submit().unwrap();

        let out = draw(&form, 80, 40);
        assert!(out.contains("Processing..."));
        assert!(!out.contains("Pay via M-Pesa"));
    }

    #[test]
    fn test_short_terminal_does_not_panic() {
        let out = draw(&ContributeForm::new(), 40, 8);
        assert!(out.contains(TITLE));
    }
}
