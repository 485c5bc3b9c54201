//! Community discussion posts.

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::dates::deserialize_timestamp;
use super::{deserialize_nullable_string, deserialize_nullable_vec};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Discussion {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub author: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub date: Option<NaiveDateTime>,
}

/// Body of `GET /discussions`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DiscussionsResponse {
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub discussions: Vec<Discussion>,
}
