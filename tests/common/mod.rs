//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{api_over, settle};
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chama::adapters::MockHttpClient;
use chama::api::ChamaApi;
use chama::lifecycle::{ResourceLoader, ResourceScreen};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Base URL the mock client is addressed with.
pub const TEST_BASE_URL: &str = "http://chama.test/api";

/// A `ChamaApi` whose transport is `mock`.
pub fn api_over(mock: &MockHttpClient) -> Arc<ChamaApi> {
    Arc::new(ChamaApi::new(Arc::new(mock.clone()), TEST_BASE_URL))
}

/// Await the loader's in-flight fetch, failing the test after two seconds.
pub async fn settle<S: ResourceScreen>(loader: &mut ResourceLoader<S>) -> bool {
    tokio::time::timeout(Duration::from_secs(2), loader.settle())
        .await
        .expect("fetch did not settle in time")
}

/// Poll `condition` every few milliseconds for up to two seconds.
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while !condition() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "condition not met in time"
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

/// Whole test backend buffer as text, one line per row.
pub fn screen_text(terminal: &Terminal<TestBackend>) -> String {
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
