//! Dashboard summary.

use serde::Deserialize;

use super::{
    deserialize_amount, deserialize_count, deserialize_nullable_string, deserialize_nullable_vec,
    Contribution, Loan,
};

/// The signed-in member's profile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Member {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Aggregate figures shown in the stat cards.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total_contributions: f64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub contribution_count: u64,
    /// Active loans.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub loan_count: u64,
}

/// Body of `GET /dashboard`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardResponse {
    #[serde(default)]
    pub member: Member,
    #[serde(default)]
    pub stats: DashboardStats,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub recent_contributions: Vec<Contribution>,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub recent_loans: Vec<Loan>,
}
