//! Upcoming chama activities.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

use super::dates::deserialize_timestamp;
use super::{deserialize_nullable_string, deserialize_nullable_vec};

/// Kind of activity. Unknown kinds are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityType {
    Meeting,
    Event,
    Training,
    Review,
    Social,
    Other(String),
}

impl ActivityType {
    /// Capitalised label, e.g. `meeting` -> `Meeting`.
    pub fn label(&self) -> String {
        match self {
            ActivityType::Meeting => "Meeting".to_string(),
            ActivityType::Event => "Event".to_string(),
            ActivityType::Training => "Training".to_string(),
            ActivityType::Review => "Review".to_string(),
            ActivityType::Social => "Social".to_string(),
            ActivityType::Other(raw) => capitalize(raw),
        }
    }
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Default for ActivityType {
    fn default() -> Self {
        ActivityType::Other(String::new())
    }
}

impl From<&str> for ActivityType {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "meeting" => ActivityType::Meeting,
            "event" => ActivityType::Event,
            "training" => ActivityType::Training,
            "review" => ActivityType::Review,
            "social" => ActivityType::Social,
            _ => ActivityType::Other(raw.trim().to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ActivityType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = deserialize_nullable_string(deserializer)?;
        Ok(ActivityType::from(raw.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Activity {
    #[serde(default, rename = "type")]
    pub kind: ActivityType,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub date: Option<NaiveDateTime>,
}

/// Body of `GET /activities`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActivitiesResponse {
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub activities: Vec<Activity>,
}
