//! Fetch-render lifecycle tests against the real read screens.
//!
//! The transport is `MockHttpClient`, so every scenario is deterministic.

mod common;

use std::time::Duration;

use chama::adapters::{MockHttpClient, MockResponse};
use chama::error::NetworkError;
use chama::lifecycle::{Rendered, ResourceLoader, ResourceState};
use chama::models::LoanStatus;
use chama::screens::{ActivitiesScreen, DashboardScreen, DiscussionsScreen, LoansScreen};
use chama::traits::Response;
use common::{api_over, settle};
use serde_json::json;

fn school_fees() -> serde_json::Value {
    json!({
        "loans": [{
            "amount": 1000,
            "purpose": "School fees",
            "status": "Pending",
            "date_applied": "2024-01-01"
        }]
    })
}

#[tokio::test]
async fn test_loans_end_to_end() {
    let mock = MockHttpClient::new();
    mock.set_response("/loans", MockResponse::json(school_fees()));
    let mut loader = ResourceLoader::new(LoansScreen, api_over(&mock));

    loader.mount();
    assert_eq!(loader.state(), ResourceState::Initializing);
    assert_eq!(loader.rendered(), Rendered::Loading);

    assert!(settle(&mut loader).await);
    let Rendered::Populated { view, refreshing } = loader.rendered() else {
        panic!("expected populated loans");
    };
    assert!(!refreshing);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].amount, "KSH 1000");
    assert_eq!(view[0].purpose, "School fees");
    assert_eq!(view[0].status, LoanStatus::Pending);
    assert_eq!(view[0].status.label(), "Pending");
    assert_eq!(view[0].applied, "01/01/2024");
}

#[tokio::test]
async fn test_missing_keys_render_empty_state() {
    let mock = MockHttpClient::new();
    mock.set_default_response(MockResponse::json(json!({})));
    let api = api_over(&mock);

    let mut loans = ResourceLoader::new(LoansScreen, api.clone());
    let mut discussions = ResourceLoader::new(DiscussionsScreen, api.clone());
    let mut activities = ResourceLoader::new(ActivitiesScreen, api.clone());
    loans.mount();
    discussions.mount();
    activities.mount();
    settle(&mut loans).await;
    settle(&mut discussions).await;
    settle(&mut activities).await;

    for (rendered_empty, failure) in [
        (
            matches!(loans.rendered(), Rendered::Empty { .. }),
            loans.last_failure().is_some(),
        ),
        (
            matches!(discussions.rendered(), Rendered::Empty { .. }),
            discussions.last_failure().is_some(),
        ),
        (
            matches!(activities.rendered(), Rendered::Empty { .. }),
            activities.last_failure().is_some(),
        ),
    ] {
        assert!(rendered_empty);
        assert!(!failure, "missing keys must not count as a failure");
    }

    let Rendered::Empty { state, .. } = loans.rendered() else {
        unreachable!();
    };
    assert_eq!(state.title, "No Loans Yet");
}

#[tokio::test]
async fn test_dashboard_with_empty_payload_still_populates() {
    let mock = MockHttpClient::new();
    mock.set_response("/dashboard", MockResponse::json(json!({})));
    let mut loader = ResourceLoader::new(DashboardScreen, api_over(&mock));

    loader.mount();
    settle(&mut loader).await;

    let Rendered::Populated { view, .. } = loader.rendered() else {
        panic!("dashboard should always populate");
    };
    assert_eq!(view.stats[0].value, "KSH 0.00");
    assert!(view.recent_contributions.is_empty());
}

#[tokio::test]
async fn test_rejected_fetch_fails_open() {
    let mock = MockHttpClient::new();
    mock.set_response(
        "/loans",
        MockResponse::Error(NetworkError::ConnectionFailed {
            url: "http://chama.test/api/loans".to_string(),
            message: "connection refused".to_string(),
        }),
    );
    let mut loader = ResourceLoader::new(LoansScreen, api_over(&mock));

    loader.mount();
    settle(&mut loader).await;

    assert_eq!(loader.state(), ResourceState::Ready);
    assert!(matches!(loader.rendered(), Rendered::Empty { .. }));
    let failure = loader.last_failure().unwrap();
    assert_eq!(failure.screen, "loans");
    assert_eq!(failure.code(), "E_NET_CONN");
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_data() {
    let mock = MockHttpClient::new();
    mock.set_response("/loans", MockResponse::json(school_fees()));
    let mut loader = ResourceLoader::new(LoansScreen, api_over(&mock));
    loader.mount();
    settle(&mut loader).await;

    mock.set_response("/loans", MockResponse::status(503, json!({"error": "down"})));
    assert!(loader.refresh());
    assert_eq!(loader.state(), ResourceState::Refreshing);
    assert!(loader.rendered().is_refreshing());
    settle(&mut loader).await;

    assert_eq!(loader.state(), ResourceState::Ready);
    let Rendered::Populated { view, refreshing } = loader.rendered() else {
        panic!("previous loans should still be shown");
    };
    assert!(!refreshing);
    assert_eq!(view.len(), 1);
    assert_eq!(loader.last_failure().unwrap().code(), "E_NET_HTTP");
}

#[tokio::test]
async fn test_refresh_runs_once_per_pull() {
    let mock = MockHttpClient::new();
    mock.set_response(
        "/loans",
        MockResponse::Delayed(Duration::from_millis(20), Response::json_ok(&school_fees())),
    );
    let mut loader = ResourceLoader::new(LoansScreen, api_over(&mock));
    loader.mount();
    settle(&mut loader).await;

    assert!(loader.refresh());
    // A second pull while refreshing is ignored.
    assert!(!loader.refresh());
    assert!(settle(&mut loader).await);
    assert_eq!(loader.state(), ResourceState::Ready);

    assert_eq!(mock.request_count("/loans"), 2);
    assert!(!loader.settle().await);
}

#[tokio::test]
async fn test_refresh_while_initializing_is_ignored() {
    let mock = MockHttpClient::new();
    mock.set_response("/loans", MockResponse::Pending);
    let mut loader = ResourceLoader::new(LoansScreen, api_over(&mock));

    loader.mount();
    assert!(!loader.refresh());
    assert_eq!(loader.state(), ResourceState::Initializing);
    loader.unmount();
}

#[tokio::test]
async fn test_identical_fetches_are_idempotent() {
    let mock = MockHttpClient::new();
    mock.set_response("/loans", MockResponse::json(school_fees()));
    let mut loader = ResourceLoader::new(LoansScreen, api_over(&mock));
    loader.mount();
    settle(&mut loader).await;
    let first = loader.rendered();

    loader.refresh();
    settle(&mut loader).await;
    loader.refresh();
    settle(&mut loader).await;

    assert_eq!(loader.rendered(), first);
}

#[tokio::test]
async fn test_unmount_cancels_in_flight_fetch() {
    let mock = MockHttpClient::new();
    mock.set_response("/activities", MockResponse::Pending);
    let mut loader = ResourceLoader::new(ActivitiesScreen, api_over(&mock));

    loader.mount();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(mock.request_count("/activities"), 1);

    loader.unmount();
    assert!(!loader.is_mounted());
    assert_eq!(loader.lifecycle().in_flight(), None);

    // Nothing lands afterwards.
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!loader.poll());
}

#[tokio::test]
async fn test_late_result_after_unmount_is_discarded() {
    let mock = MockHttpClient::new();
    mock.set_response(
        "/discussions",
        MockResponse::Delayed(
            Duration::from_millis(20),
            Response::json_ok(&json!({"discussions": [{"author": "Jane", "title": "Hi"}]})),
        ),
    );
    let mut loader = ResourceLoader::new(DiscussionsScreen, api_over(&mock));

    loader.mount();
    loader.unmount();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(!loader.poll());
    assert_eq!(loader.rendered(), Rendered::Loading);

    // Remounting starts a fresh fetch that does land.
    loader.mount();
    assert!(settle(&mut loader).await);
    assert!(matches!(loader.rendered(), Rendered::Populated { .. }));
}
