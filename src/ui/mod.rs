//! UI rendering for the chama TUI
//!
//! Drawing only reads the app, except that each read tab records how far it
//! can scroll so key handling can clamp against it.

mod activities;
mod alert;
pub mod components;
mod contribute;
mod dashboard;
mod discussions;
pub mod layout;
mod loans;
mod login;
mod resource;
mod shell;
mod states;
pub mod theme;
mod wrap;

use ratatui::{
    layout::{Constraint, Layout, Margin},
    Frame,
};

use crate::app::{App, Screen, Tab};

pub use layout::LayoutContext;
pub use shell::footer_hint;

/// Main UI rendering function - dispatches to the current screen
pub fn render(frame: &mut Frame, app: &mut App) {
    match app.screen {
        Screen::Login => login::render_login_screen(frame, &app.login, app.tick_count),
        Screen::Main => render_main(frame, app),
    }

    if let Some(alert) = &app.alert {
        alert::render_alert(frame, frame.area(), alert);
    }
}

fn render_main(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);

    let [tabs_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    shell::render_tab_bar(frame, tabs_area, app, &ctx);

    let body = body_area.inner(Margin::new(1, 1));
    let max_scroll = match app.tab {
        Tab::Dashboard => dashboard::render_dashboard(frame, body, app, &ctx),
        Tab::Contribute => {
            contribute::render_contribute(frame, body, &app.contribute, app.tick_count, &ctx);
            0
        }
        Tab::Loans => loans::render_loans(frame, body, app, &ctx),
        Tab::Discussions => discussions::render_discussions(frame, body, app, &ctx),
        Tab::Activities => activities::render_activities(frame, body, app, &ctx),
    };
    app.set_max_scroll(max_scroll);

    shell::render_footer(frame, footer_area, app);
}
