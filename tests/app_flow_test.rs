//! End-to-end app flows driven through key events and async messages.

mod common;

use std::time::Duration;

use chama::adapters::{MockHttpClient, MockResponse};
use chama::app::{App, AppMessage, Screen, Tab};
use chama::lifecycle::ResourceState;
use chama::screens::contribute::FAILURE_MESSAGE;
use chama::screens::{Alert, ContributeField};
use common::{api_over, wait_until};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;
use tokio::sync::mpsc;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

/// Wait for the next async message and feed it back into the app.
async fn pump(app: &mut App, rx: &mut mpsc::UnboundedReceiver<AppMessage>) {
    let msg = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("no message in time")
        .expect("channel closed");
    app.handle_message(msg);
}

fn read_mock() -> MockHttpClient {
    let mock = MockHttpClient::new();
    mock.set_default_response(MockResponse::json(json!({})));
    mock
}

#[tokio::test]
async fn test_skip_login_starts_on_dashboard() {
    let mock = read_mock();
    let app = App::new(api_over(&mock), true);

    assert_eq!(app.screen, Screen::Main);
    assert_eq!(app.tab, Tab::Dashboard);
    assert!(app.dashboard.is_mounted());
    assert!(!app.loans.is_mounted());
    assert!(!app.discussions.is_mounted());
    assert!(!app.activities.is_mounted());
}

#[tokio::test]
async fn test_login_success_enters_main() {
    let mock = read_mock();
    mock.set_response(
        "/login",
        MockResponse::json(json!({
            "success": true,
            "user": {"id": 1, "username": "jane", "is_admin": false}
        })),
    );
    let mut app = App::new(api_over(&mock), false);
    let mut rx = app.message_rx.take().unwrap();
    assert_eq!(app.screen, Screen::Login);

    type_text(&mut app, "jane");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "secret");
    app.handle_key(key(KeyCode::Enter));
    assert!(app.login.is_submitting());

    pump(&mut app, &mut rx).await;

    assert_eq!(app.screen, Screen::Main);
    assert_eq!(app.user.as_deref(), Some("jane"));
    assert!(app.dashboard.is_mounted());

    let requests = mock.get_requests();
    let login = requests.iter().find(|r| r.url.ends_with("/login")).unwrap();
    assert_eq!(
        login.body,
        Some(json!({"username": "jane", "password": "secret"}))
    );
}

#[tokio::test]
async fn test_login_rejected_stays_on_form() {
    let mock = read_mock();
    mock.set_response(
        "/login",
        MockResponse::status(401, json!({"success": false, "message": "Invalid credentials"})),
    );
    let mut app = App::new(api_over(&mock), false);
    let mut rx = app.message_rx.take().unwrap();

    type_text(&mut app, "jane");
    app.handle_key(key(KeyCode::Down));
    type_text(&mut app, "wrong");
    app.handle_key(key(KeyCode::Enter));
    pump(&mut app, &mut rx).await;

    assert_eq!(app.screen, Screen::Login);
    assert_eq!(app.login.error.as_deref(), Some("Invalid credentials"));
    assert!(!app.login.is_submitting());
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let mock = read_mock();
    let mut app = App::new(api_over(&mock), false);

    type_text(&mut app, "jane");
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(
        app.login.error.as_deref(),
        Some("Please enter username and password")
    );
    assert!(mock.get_requests().is_empty());
}

#[tokio::test]
async fn test_tabs_mount_on_first_focus() {
    let mock = read_mock();
    let mut app = App::new(api_over(&mock), true);

    app.handle_key(key(KeyCode::Char('3')));
    assert_eq!(app.tab, Tab::Loans);
    assert!(app.loans.is_mounted());

    wait_until(|| {
        app.tick();
        app.loans.state() == ResourceState::Ready
    })
    .await;

    // Back and forth does not refetch.
    app.handle_key(key(KeyCode::BackTab));
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.tab, Tab::Loans);
    assert_eq!(mock.request_count("/loans"), 1);
}

#[tokio::test]
async fn test_refresh_key_refetches_current_tab() {
    let mock = read_mock();
    let mut app = App::new(api_over(&mock), true);
    wait_until(|| {
        app.tick();
        app.dashboard.state() == ResourceState::Ready
    })
    .await;

    app.handle_key(key(KeyCode::Char('r')));
    assert_eq!(app.dashboard.state(), ResourceState::Refreshing);
    assert!(app.is_refreshing(Tab::Dashboard));

    wait_until(|| {
        app.tick();
        app.dashboard.state() == ResourceState::Ready
    })
    .await;
    assert_eq!(mock.request_count("/dashboard"), 2);
}

#[tokio::test]
async fn test_invalid_contribution_sends_nothing() {
    let mock = read_mock();
    let mut app = App::new(api_over(&mock), true);
    app.handle_key(key(KeyCode::Char('2')));
    assert_eq!(app.tab, Tab::Contribute);

    for (amount, expected) in [
        ("0", "Amount must be greater than 0"),
        ("-5", "Amount must be greater than 0"),
        ("", "Please enter amount and phone number"),
        ("abc", "Amount must be a valid number"),
    ] {
        app.contribute.amount = amount.to_string();
        app.contribute.phone = "254712345678".to_string();
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.alert, Some(Alert::error(expected)));
        app.handle_key(key(KeyCode::Esc));
        assert!(app.alert.is_none());
    }

    assert_eq!(mock.request_count("/contribute"), 0);
}

#[tokio::test]
async fn test_contribution_success_clears_form() {
    let mock = read_mock();
    mock.set_response(
        "/contribute",
        MockResponse::json(json!({
            "success": true,
            "message": "Payment request sent to your phone"
        })),
    );
    let mut app = App::new(api_over(&mock), true);
    let mut rx = app.message_rx.take().unwrap();
    app.select_tab(Tab::Contribute);

    // Digits type into the form instead of switching tabs.
    type_text(&mut app, "500");
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.contribute.focus, ContributeField::Phone);
    type_text(&mut app, "254712345678");
    app.handle_key(key(KeyCode::Enter));
    // Ignored while the first is in flight.
    app.handle_key(key(KeyCode::Enter));

    pump(&mut app, &mut rx).await;

    assert_eq!(mock.request_count("/contribute"), 1);
    let requests = mock.get_requests();
    let sent = requests
        .iter()
        .find(|r| r.url.ends_with("/contribute"))
        .unwrap();
    assert_eq!(
        sent.body,
        Some(json!({"amount": 500.0, "phone": "254712345678", "description": ""}))
    );

    assert_eq!(
        app.alert,
        Some(Alert::success("Payment request sent to your phone"))
    );
    assert!(app.contribute.amount.is_empty());
    assert!(app.contribute.phone.is_empty());
}

#[tokio::test]
async fn test_contribution_failure_alerts() {
    let mock = read_mock();
    mock.set_response(
        "/contribute",
        MockResponse::status(400, json!({"success": false, "message": "Payment request failed"})),
    );
    let mut app = App::new(api_over(&mock), true);
    let mut rx = app.message_rx.take().unwrap();
    app.select_tab(Tab::Contribute);

    app.contribute.amount = "500".to_string();
    app.contribute.phone = "254712345678".to_string();
    app.submit_contribution();
    pump(&mut app, &mut rx).await;

    assert_eq!(app.alert, Some(Alert::error(FAILURE_MESSAGE)));
    assert_eq!(app.contribute.amount, "500");
}

#[tokio::test]
async fn test_alert_is_modal() {
    let mock = read_mock();
    let mut app = App::new(api_over(&mock), true);
    app.alert = Some(Alert::error("Something"));

    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Char('q')));
    assert_eq!(app.tab, Tab::Dashboard);
    assert!(!app.should_quit);

    app.handle_key(key(KeyCode::Enter));
    assert!(app.alert.is_none());
}

#[tokio::test]
async fn test_scroll_is_per_tab() {
    let mock = read_mock();
    let mut app = App::new(api_over(&mock), true);
    // As if the last draw showed ten rows below the fold.
    app.set_max_scroll(10);

    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.scroll_offset(), 2);

    app.select_tab(Tab::Loans);
    assert_eq!(app.scroll_offset(), 0);
    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.scroll_offset(), 0);

    app.select_tab(Tab::Dashboard);
    assert_eq!(app.scroll_offset(), 2);
}

#[tokio::test]
async fn test_scroll_down_clamps_to_content() {
    let mock = read_mock();
    let mut app = App::new(api_over(&mock), true);

    // Nothing measured yet: nothing to scroll.
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.scroll_offset(), 0);

    app.set_max_scroll(3);
    for _ in 0..50 {
        app.handle_key(key(KeyCode::Down));
    }
    assert_eq!(app.scroll_offset(), 3);
    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.scroll_offset(), 2);

    // Content shrinking pulls the offset back.
    app.set_max_scroll(1);
    assert_eq!(app.scroll_offset(), 1);
}

#[tokio::test]
async fn test_quit_unmounts_everything() {
    let mock = MockHttpClient::new();
    mock.set_default_response(MockResponse::Pending);
    let mut app = App::new(api_over(&mock), true);
    app.select_tab(Tab::Activities);
    assert!(app.activities.is_mounted());

    app.handle_key(key(KeyCode::Char('q')));

    assert!(app.should_quit);
    assert!(!app.dashboard.is_mounted());
    assert!(!app.activities.is_mounted());
}

#[tokio::test]
async fn test_ctrl_c_quits_from_form() {
    let mock = read_mock();
    let mut app = App::new(api_over(&mock), false);

    app.handle_key(key(KeyCode::Char('q')));
    assert!(!app.should_quit);
    assert_eq!(app.login.username, "q");

    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_tick_marks_dirty_while_loading() {
    let mock = MockHttpClient::new();
    mock.set_default_response(MockResponse::Pending);
    let mut app = App::new(api_over(&mock), true);
    assert!(app.is_busy());

    app.needs_redraw = false;
    for _ in 0..6 {
        app.tick();
    }
    assert!(app.needs_redraw);
    app.quit();
}
