//! Local form validation errors.
//!
//! These are raised before any request is sent and are shown to the user
//! verbatim, so the `Display` text is the user-facing message.

use thiserror::Error;

/// A form input was rejected locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Amount or phone number left empty on the contribution form.
    #[error("Please enter amount and phone number")]
    MissingContributionFields,

    /// Amount is not a finite number.
    #[error("Amount must be a valid number")]
    AmountNotNumeric,

    /// Amount is zero or negative.
    #[error("Amount must be greater than 0")]
    AmountNotPositive,

    /// Username or password left empty on the login form.
    #[error("Please enter username and password")]
    MissingCredentials,
}
