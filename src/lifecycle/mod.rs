//! Fetch-render lifecycle shared by every read screen.
//!
//! - [`state`] - the pure state machine ([`ResourceLifecycle`])
//! - [`screen`] - the [`ResourceScreen`] trait screens implement
//! - [`loader`] - [`ResourceLoader`], which runs fetches on tokio tasks
//!
//! ```text
//! mount ──> Initializing ──fetch done──> Ready ──refresh──> Refreshing
//!                                          ^                    │
//!                                          └────fetch done──────┘
//! ```

pub mod loader;
pub mod screen;
pub mod state;

pub use loader::{Rendered, ResourceLoader};
pub use screen::{EmptyState, ResourceScreen};
pub use state::{FetchFailure, FetchOutcome, ResourceLifecycle, ResourceState};
