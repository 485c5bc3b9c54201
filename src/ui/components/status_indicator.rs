//! Status Indicator Component
//!
//! Spinner, success and error lines shared by the loading screens, the
//! refresh badge and the alert dialog.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_BUSY, COLOR_ERROR, COLOR_SUCCESS};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks per spinner frame (~100ms at a 16ms tick)
const TICKS_PER_FRAME: u64 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    Success { message: String },
    Error { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Spinner frame for the app's tick counter.
pub fn spinner_frame_for_tick(tick: u64) -> usize {
    ((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize
}

/// Render a status indicator as a single line.
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Line<'static> {
    let (icon, message, color) = match indicator {
        StatusIndicatorType::Spinner { message, frame } => {
            (get_spinner_char(*frame), message, COLOR_BUSY)
        }
        StatusIndicatorType::Success { message } => ('\u{25CF}', message, COLOR_SUCCESS),
        StatusIndicatorType::Error { message } => ('\u{2717}', message, COLOR_ERROR),
    };

    Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().fg(color)),
        Span::styled(
            message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

// ============================================================================
// Tests
// ============================================================================
