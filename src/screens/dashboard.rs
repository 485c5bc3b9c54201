//! Dashboard: member greeting, stat cards and recent activity.

use async_trait::async_trait;

use crate::api::ChamaApi;
use crate::cancel::CancelToken;
use crate::error::NetworkError;
use crate::lifecycle::{EmptyState, ResourceScreen};
use crate::models::{format_amount, format_date_or, format_total, DashboardResponse, LoanStatus};

pub const GREETING: &str = "Welcome back!";
pub const NO_CONTRIBUTIONS: &str = "No contributions yet";
pub const NO_LOANS: &str = "No loans yet";

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContributionRow {
    pub amount: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoanRow {
    pub amount: String,
    pub purpose: String,
    pub status: LoanStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub member_name: String,
    pub stats: [StatCard; 3],
    pub recent_contributions: Vec<ContributionRow>,
    pub recent_loans: Vec<LoanRow>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardScreen;

#[async_trait]
impl ResourceScreen for DashboardScreen {
    type Data = DashboardResponse;
    type View = DashboardView;

    fn name(&self) -> &'static str {
        "dashboard"
    }

    async fn fetch(
        &self,
        api: &ChamaApi,
        cancel: &CancelToken,
    ) -> Result<DashboardResponse, NetworkError> {
        api.get_dashboard(cancel).await
    }

    fn view_model(&self, data: &DashboardResponse) -> DashboardView {
        let stats = &data.stats;
        DashboardView {
            member_name: data.member.name.clone(),
            stats: [
                StatCard {
                    label: "Total Contributions",
                    value: format_total(stats.total_contributions),
                },
                StatCard {
                    label: "Contributions Made",
                    value: stats.contribution_count.to_string(),
                },
                StatCard {
                    label: "Active Loans",
                    value: stats.loan_count.to_string(),
                },
            ],
            recent_contributions: data
                .recent_contributions
                .iter()
                .map(|c| ContributionRow {
                    amount: format_amount(c.amount),
                    description: c.display_description().to_string(),
                    date: format_date_or(c.date.as_ref(), ""),
                })
                .collect(),
            recent_loans: data
                .recent_loans
                .iter()
                .map(|l| LoanRow {
                    amount: format_amount(l.amount),
                    purpose: l.purpose.clone(),
                    status: l.status.clone(),
                })
                .collect(),
        }
    }

    /// The dashboard always renders its cards; empty sections carry their
    /// own placeholder text.
    fn is_empty(&self, _data: &DashboardResponse) -> bool {
        false
    }

    fn empty_state(&self) -> EmptyState {
        EmptyState::new(GREETING, NO_CONTRIBUTIONS)
    }
}
