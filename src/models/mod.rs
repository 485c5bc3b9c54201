//! Records returned by the chama API.
//!
//! Decoding is lenient throughout: missing lists become empty, missing
//! scalars fall back to zero or empty values, and malformed timestamps
//! become `None` instead of failing the response.

pub mod activity;
pub mod auth;
pub mod contribution;
pub mod dashboard;
pub mod dates;
pub mod discussion;
pub mod loan;

pub use activity::{ActivitiesResponse, Activity, ActivityType};
pub use auth::{LoginRequest, LoginResponse, UserInfo};
pub use contribution::{ContributeRequest, ContributeResponse, Contribution};
pub use dashboard::{DashboardResponse, DashboardStats, Member};
pub use dates::{format_date, format_date_or, format_time, parse_timestamp};
pub use discussion::{Discussion, DiscussionsResponse};
pub use loan::{Loan, LoanStatus, LoansResponse};

use serde::{Deserialize, Deserializer};

/// Render an amount as `KSH <amount>`, dropping the fraction on whole values.
pub fn format_amount(amount: f64) -> String {
    format!("KSH {}", amount)
}

/// Render a total as `KSH <amount>` with two decimals.
pub fn format_total(amount: f64) -> String {
    format!("KSH {:.2}", amount)
}

/// Ids arrive as integers from some endpoints and strings from others.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// An amount given as a number, a numeric string or null.
///
/// Anything that is not a finite number decodes to `0.0`.
pub(crate) fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let amount = match raw {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(amount.filter(|v| v.is_finite()).unwrap_or(0.0))
}

/// Helper to deserialize a count, treating null or non-integers as zero.
pub(crate) fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.as_u64()).unwrap_or_default())
}

/// Helper to deserialize nullable strings as empty string
/// Handles missing fields and explicit null values. Numbers and booleans
/// are kept as their JSON text; arrays and objects become empty.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// Helper to deserialize a nullable list as empty.
pub(crate) fn deserialize_nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
