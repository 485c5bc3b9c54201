//! Screen logic, independent of the terminal.
//!
//! The four read screens implement [`ResourceScreen`](crate::lifecycle::ResourceScreen);
//! contribute and login are forms with their own submit flow.

pub mod activities;
pub mod alert;
pub mod contribute;
pub mod dashboard;
pub mod discussions;
pub mod loans;
pub mod login;

pub use activities::{ActivitiesScreen, ActivityCard};
pub use alert::{Alert, AlertKind};
pub use contribute::{ContributeField, ContributeForm};
pub use dashboard::{DashboardScreen, DashboardView};
pub use discussions::{DiscussionCard, DiscussionsScreen};
pub use loans::{LoanCard, LoansScreen};
pub use login::{LoginField, LoginForm, LoginOutcome};
