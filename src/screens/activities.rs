//! Upcoming meetings and events.

use async_trait::async_trait;

use crate::api::ChamaApi;
use crate::cancel::CancelToken;
use crate::error::NetworkError;
use crate::lifecycle::{EmptyState, ResourceScreen};
use crate::models::{format_date, format_time, ActivitiesResponse, Activity, ActivityType};

pub const TITLE: &str = "Upcoming Activities";
pub const SUBTITLE: &str = "Stay updated with chama events";

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub title: String,
    pub kind: ActivityType,
    pub kind_label: String,
    pub description: Option<String>,
    /// `<date> at <HH:MM>`
    pub when: String,
}

fn when(activity: &Activity) -> String {
    match &activity.date {
        Some(date) => format!("{} at {}", format_date(date), format_time(date)),
        None => "N/A".to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ActivitiesScreen;

#[async_trait]
impl ResourceScreen for ActivitiesScreen {
    type Data = ActivitiesResponse;
    type View = Vec<ActivityCard>;

    fn name(&self) -> &'static str {
        "activities"
    }

    async fn fetch(
        &self,
        api: &ChamaApi,
        cancel: &CancelToken,
    ) -> Result<ActivitiesResponse, NetworkError> {
        api.get_activities(cancel).await
    }

    fn view_model(&self, data: &ActivitiesResponse) -> Vec<ActivityCard> {
        data.activities
            .iter()
            .map(|a| ActivityCard {
                title: a.title.clone(),
                kind: a.kind.clone(),
                kind_label: a.kind.label(),
                description: a
                    .description
                    .as_ref()
                    .filter(|d| !d.trim().is_empty())
                    .cloned(),
                when: when(a),
            })
            .collect()
    }

    fn is_empty(&self, data: &ActivitiesResponse) -> bool {
        data.activities.is_empty()
    }

    fn empty_state(&self) -> EmptyState {
        EmptyState::new(
            "No Upcoming Activities",
            "Check back later for new events and meetings.",
        )
    }

    fn loading_text(&self) -> &'static str {
        "Loading activities..."
    }
}
