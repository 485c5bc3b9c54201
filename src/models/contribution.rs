//! Contribution records and the contribute request/response pair.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::dates::deserialize_timestamp;
use super::{deserialize_amount, deserialize_nullable_string};

/// A past contribution as listed on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Contribution {
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub date: Option<NaiveDateTime>,
}

impl Contribution {
    /// Description to display; blank descriptions read as a regular contribution.
    pub fn display_description(&self) -> &str {
        match self.description.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => d,
            _ => "Regular contribution",
        }
    }
}

/// Body of `POST /contribute`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributeRequest {
    pub amount: f64,
    pub phone: String,
    pub description: String,
}

/// Reply to `POST /contribute`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContributeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub message: String,
}
