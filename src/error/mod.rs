//! Error handling for the chama client.
//!
//! Two error classes reach the user:
//!
//! - [`ValidationError`]: local form checks, raised before any request.
//! - [`NetworkError`]: any remote failure. Read screens swallow it (fail-open)
//!   and record a diagnostic; the contribution form surfaces it as an alert.
//!
//! [`ChamaError`] unifies both with configuration and I/O failures for the
//! startup path.

mod chama_error;
mod network;
mod validation;

pub use chama_error::{ChamaError, ChamaResult};
pub use network::{classify_reqwest_error, NetworkError};
pub use validation::ValidationError;
