//! The member's loan applications.

use async_trait::async_trait;

use crate::api::ChamaApi;
use crate::cancel::CancelToken;
use crate::error::NetworkError;
use crate::lifecycle::{EmptyState, ResourceScreen};
use crate::models::{format_amount, format_date, format_date_or, LoanStatus, LoansResponse};

pub const TITLE: &str = "My Loans";
pub const SUBTITLE: &str = "Track your loan applications";

#[derive(Debug, Clone, PartialEq)]
pub struct LoanCard {
    pub amount: String,
    pub purpose: String,
    pub status: LoanStatus,
    /// Application date, or `N/A`.
    pub applied: String,
    pub due: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoansScreen;

#[async_trait]
impl ResourceScreen for LoansScreen {
    type Data = LoansResponse;
    type View = Vec<LoanCard>;

    fn name(&self) -> &'static str {
        "loans"
    }

    async fn fetch(&self, api: &ChamaApi, cancel: &CancelToken) -> Result<LoansResponse, NetworkError> {
        api.get_loans(cancel).await
    }

    fn view_model(&self, data: &LoansResponse) -> Vec<LoanCard> {
        data.loans
            .iter()
            .map(|loan| LoanCard {
                amount: format_amount(loan.amount),
                purpose: loan.purpose.clone(),
                status: loan.status.clone(),
                applied: format_date_or(loan.date_applied.as_ref(), "N/A"),
                due: loan.due_date.as_ref().map(format_date),
            })
            .collect()
    }

    fn is_empty(&self, data: &LoansResponse) -> bool {
        data.loans.is_empty()
    }

    fn empty_state(&self) -> EmptyState {
        EmptyState::new("No Loans Yet", "You haven't applied for any loans yet.")
    }

    fn loading_text(&self) -> &'static str {
        "Loading loans..."
    }
}
