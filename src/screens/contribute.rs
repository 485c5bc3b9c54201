//! Contribution form and its submit flow.
//!
//! Input is validated locally before anything is sent. A validated form
//! yields exactly one [`ContributeRequest`]; while it is in flight further
//! submits are ignored.

use crate::error::{NetworkError, ValidationError};
use crate::models::{ContributeRequest, ContributeResponse};

use super::alert::Alert;

pub const TITLE: &str = "Make Contribution";
pub const SUBTITLE: &str = "Contribute to your chama via M-Pesa";
pub const AMOUNT_LABEL: &str = "Amount (KSH)";
pub const PHONE_LABEL: &str = "M-Pesa Phone Number";
pub const PHONE_HELP: &str = "Enter your M-Pesa number (format: 254712345678)";
pub const DESCRIPTION_LABEL: &str = "Description (Optional)";
pub const FAILURE_MESSAGE: &str = "Contribution failed. Please try again.";
pub const HOW_IT_WORKS: [&str; 4] = [
    "1. Enter your contribution amount",
    "2. Provide your M-Pesa phone number",
    "3. Press \"Pay via M-Pesa\"",
    "4. Complete payment on your phone",
];

/// Which input has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContributeField {
    #[default]
    Amount,
    Phone,
    Description,
}

impl ContributeField {
    pub fn next(self) -> Self {
        match self {
            ContributeField::Amount => ContributeField::Phone,
            ContributeField::Phone => ContributeField::Description,
            ContributeField::Description => ContributeField::Amount,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ContributeField::Amount => ContributeField::Description,
            ContributeField::Phone => ContributeField::Amount,
            ContributeField::Description => ContributeField::Phone,
        }
    }
}

/// Parse and check the amount text.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::AmountNotNumeric)?;
    if !amount.is_finite() {
        return Err(ValidationError::AmountNotNumeric);
    }
    if amount <= 0.0 {
        return Err(ValidationError::AmountNotPositive);
    }
    Ok(amount)
}

#[derive(Debug, Clone, Default)]
pub struct ContributeForm {
    pub amount: String,
    pub phone: String,
    pub description: String,
    pub focus: ContributeField,
    submitting: bool,
}

impl ContributeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            "Processing..."
        } else {
            "Pay via M-Pesa"
        }
    }

    /// Mutable access to the focused field's text.
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            ContributeField::Amount => &mut self.amount,
            ContributeField::Phone => &mut self.phone,
            ContributeField::Description => &mut self.description,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.submitting {
            return;
        }
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        if self.submitting {
            return;
        }
        self.focused_mut().pop();
    }

    /// Build the request, or say why the input is unacceptable.
    pub fn validate(&self) -> Result<ContributeRequest, ValidationError> {
        let amount = self.amount.trim();
        let phone = self.phone.trim();
        if amount.is_empty() || phone.is_empty() {
            return Err(ValidationError::MissingContributionFields);
        }

        Ok(ContributeRequest {
            amount: parse_amount(amount)?,
            phone: phone.to_string(),
            description: self.description.trim().to_string(),
        })
    }

    /// Validate and mark the form as submitting.
    ///
    /// `Ok(None)` means a submit is already in flight and this one is
    /// dropped.
    pub fn begin_submit(&mut self) -> Result<Option<ContributeRequest>, ValidationError> {
        if self.submitting {
            return Ok(None);
        }
        let request = self.validate()?;
        self.submitting = true;
        Ok(Some(request))
    }

    /// Fold the submit result into the form and produce the alert to show.
    ///
    /// Success clears the inputs; any failure leaves them for another try.
    pub fn finish(&mut self, result: Result<ContributeResponse, NetworkError>) -> Alert {
        self.submitting = false;
        match result {
            Ok(response) if response.success => {
                self.clear();
                Alert::success(response.message)
            }
            Ok(response) if response.message.trim().is_empty() => Alert::error(FAILURE_MESSAGE),
            Ok(response) => Alert::error(response.message),
            Err(err) => {
                tracing::warn!("contribute failed [{}]: {}", err.error_code(), err);
                Alert::error(FAILURE_MESSAGE)
            }
        }
    }

    fn clear(&mut self) {
        self.amount.clear();
        self.phone.clear();
        self.description.clear();
        self.focus = ContributeField::Amount;
    }
}
