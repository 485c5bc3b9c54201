//! AppMessage enum for async communication within the application.

use crate::error::NetworkError;
use crate::models::{ContributeResponse, LoginResponse};

/// Results of form submissions, sent back from their spawned tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// `POST /login` finished
    LoginFinished(Result<LoginResponse, NetworkError>),
    /// `POST /contribute` finished
    ContributionFinished(Result<ContributeResponse, NetworkError>),
}
