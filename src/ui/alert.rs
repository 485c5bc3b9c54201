//! Modal alert overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::screens::{Alert, AlertKind};
use crate::ui::components::{
    render_dialog_frame, render_status_indicator, DialogFrameConfig, StatusIndicatorType,
};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};

pub fn render_alert(frame: &mut Frame, area: Rect, alert: &Alert) {
    let ctx = LayoutContext::from_rect(area);
    let accent = match alert.kind {
        AlertKind::Success => COLOR_SUCCESS,
        AlertKind::Error => COLOR_ERROR,
    };
    let config = DialogFrameConfig::new(&alert.title, 5).accent(accent);
    let inner = render_dialog_frame(frame, area, &ctx, &config);

    let status = match alert.kind {
        AlertKind::Success => StatusIndicatorType::success(alert.message.clone()),
        AlertKind::Error => StatusIndicatorType::error(alert.message.clone()),
    };
    let lines = vec![
        Line::raw(""),
        render_status_indicator(&status),
        Line::raw(""),
        Line::styled("[Enter] OK", Style::default().fg(COLOR_DIM)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
