//! Loan records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

use super::dates::deserialize_timestamp;
use super::{deserialize_amount, deserialize_nullable_string, deserialize_nullable_vec};

/// Status of a loan application as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoanStatus {
    Approved,
    Pending,
    Rejected,
    /// Any status the client doesn't know about, kept verbatim.
    Other(String),
}

impl LoanStatus {
    /// Label shown next to the loan.
    pub fn label(&self) -> &str {
        match self {
            LoanStatus::Approved => "Approved",
            LoanStatus::Pending => "Pending",
            LoanStatus::Rejected => "Rejected",
            LoanStatus::Other(raw) if raw.is_empty() => "Unknown",
            LoanStatus::Other(raw) => raw,
        }
    }
}

impl Default for LoanStatus {
    fn default() -> Self {
        LoanStatus::Other(String::new())
    }
}

impl From<&str> for LoanStatus {
    fn from(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("approved") {
            LoanStatus::Approved
        } else if trimmed.eq_ignore_ascii_case("pending") {
            LoanStatus::Pending
        } else if trimmed.eq_ignore_ascii_case("rejected") {
            LoanStatus::Rejected
        } else {
            LoanStatus::Other(trimmed.to_string())
        }
    }
}

impl<'de> Deserialize<'de> for LoanStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = deserialize_nullable_string(deserializer)?;
        Ok(LoanStatus::from(raw.as_str()))
    }
}

/// A loan application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Loan {
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub purpose: String,
    #[serde(default)]
    pub status: LoanStatus,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub date_applied: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub due_date: Option<NaiveDateTime>,
}

/// Body of `GET /loans`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoansResponse {
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub loans: Vec<Loan>,
}
