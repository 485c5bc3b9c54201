//! What a read screen plugs into the lifecycle.

use async_trait::async_trait;

use crate::api::ChamaApi;
use crate::cancel::CancelToken;
use crate::error::NetworkError;

/// Placeholder shown when a screen has nothing to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub title: String,
    pub message: String,
}

impl EmptyState {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// A read-only screen backed by one API call.
///
/// Implementations supply the fetch, the mapping from fetched data to a
/// view-model, and the empty-state content. Everything else (loading,
/// refreshing, failure handling, cancellation) lives in
/// [`ResourceLoader`](super::ResourceLoader).
#[async_trait]
pub trait ResourceScreen: Send + Sync + 'static {
    /// Decoded API response.
    type Data: Default + Send + 'static;
    /// What the renderer consumes.
    type View;

    /// Name used in logs and failure records.
    fn name(&self) -> &'static str;

    async fn fetch(&self, api: &ChamaApi, cancel: &CancelToken) -> Result<Self::Data, NetworkError>;

    fn view_model(&self, data: &Self::Data) -> Self::View;

    /// Whether `data` should render as the empty state.
    fn is_empty(&self, data: &Self::Data) -> bool;

    fn empty_state(&self) -> EmptyState;

    /// Placeholder text while the first fetch is running.
    fn loading_text(&self) -> &'static str {
        "Loading..."
    }
}
