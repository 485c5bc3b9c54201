//! Community discussion feed.

use async_trait::async_trait;

use crate::api::ChamaApi;
use crate::cancel::CancelToken;
use crate::error::NetworkError;
use crate::lifecycle::{EmptyState, ResourceScreen};
use crate::models::{format_date_or, DiscussionsResponse};

pub const TITLE: &str = "Community Discussions";
pub const SUBTITLE: &str = "Connect with your chama members";

#[derive(Debug, Clone, PartialEq)]
pub struct DiscussionCard {
    pub author: String,
    pub date: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DiscussionsScreen;

#[async_trait]
impl ResourceScreen for DiscussionsScreen {
    type Data = DiscussionsResponse;
    type View = Vec<DiscussionCard>;

    fn name(&self) -> &'static str {
        "discussions"
    }

    async fn fetch(
        &self,
        api: &ChamaApi,
        cancel: &CancelToken,
    ) -> Result<DiscussionsResponse, NetworkError> {
        api.get_discussions(cancel).await
    }

    fn view_model(&self, data: &DiscussionsResponse) -> Vec<DiscussionCard> {
        data.discussions
            .iter()
            .map(|d| DiscussionCard {
                author: d.author.clone(),
                date: format_date_or(d.date.as_ref(), ""),
                title: d.title.clone(),
                content: d.content.clone(),
            })
            .collect()
    }

    fn is_empty(&self, data: &DiscussionsResponse) -> bool {
        data.discussions.is_empty()
    }

    fn empty_state(&self) -> EmptyState {
        EmptyState::new(
            "No Discussions Yet",
            "Be the first to start a conversation with your chama community!",
        )
    }

    fn loading_text(&self) -> &'static str {
        "Loading discussions..."
    }
}
