//! The fetch-render state machine, free of any I/O.
//!
//! [`ResourceLifecycle`] tracks which phase a read screen is in, which fetch
//! is current (by ticket), the last good data and the last failure. Driving
//! the actual fetches is [`ResourceLoader`](super::ResourceLoader)'s job.

use crate::error::NetworkError;

/// Phase of a read screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    /// First fetch in flight; nothing to show yet.
    Initializing,
    /// Idle, showing content or the empty state.
    Ready,
    /// A pull-to-refresh is in flight over visible data.
    Refreshing,
}

/// Diagnostic record of a failed fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchFailure {
    /// Screen that issued the fetch
    pub screen: &'static str,
    /// What went wrong
    pub error: NetworkError,
}

impl FetchFailure {
    pub fn new(screen: &'static str, error: NetworkError) -> Self {
        Self { screen, error }
    }

    /// Short error code, e.g. `E_NET_TIMEOUT`.
    pub fn code(&self) -> &'static str {
        self.error.error_code()
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} fetch failed [{}]: {}", self.screen, self.code(), self.error)
    }
}

/// Result of one fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Success(T),
    Failure(FetchFailure),
}

impl<T> FetchOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    /// The failure record, if this outcome is one.
    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            FetchOutcome::Failure(failure) => Some(failure),
            FetchOutcome::Success(_) => None,
        }
    }
}

/// State machine for one read screen.
///
/// Tickets identify fetches. Only the ticket returned by the latest
/// [`activate`](Self::activate) or [`begin_refresh`](Self::begin_refresh) is
/// applied by [`complete`](Self::complete); anything else is stale.
#[derive(Debug, Clone)]
pub struct ResourceLifecycle<T> {
    state: ResourceState,
    data: T,
    last_failure: Option<FetchFailure>,
    next_ticket: u64,
    in_flight: Option<u64>,
}

impl<T: Default> Default for ResourceLifecycle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> ResourceLifecycle<T> {
    pub fn new() -> Self {
        Self {
            state: ResourceState::Initializing,
            data: T::default(),
            last_failure: None,
            next_ticket: 0,
            in_flight: None,
        }
    }

    /// Enter `Initializing` with empty data and issue the first fetch ticket.
    pub fn activate(&mut self) -> u64 {
        self.state = ResourceState::Initializing;
        self.data = T::default();
        self.last_failure = None;
        self.issue_ticket()
    }

    /// Start a refresh. Only allowed from `Ready`; otherwise `None` and
    /// nothing changes.
    pub fn begin_refresh(&mut self) -> Option<u64> {
        if self.state != ResourceState::Ready {
            return None;
        }
        self.state = ResourceState::Refreshing;
        Some(self.issue_ticket())
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) when
    /// `ticket` is not the in-flight fetch.
    ///
    /// Success replaces the data wholesale; failure keeps whatever was there.
    /// Either way the state becomes `Ready`.
    pub fn complete(&mut self, ticket: u64, outcome: FetchOutcome<T>) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;

        match outcome {
            FetchOutcome::Success(data) => {
                self.data = data;
                self.last_failure = None;
            }
            FetchOutcome::Failure(failure) => {
                self.last_failure = Some(failure);
            }
        }
        self.state = ResourceState::Ready;
        true
    }

    /// Forget everything and invalidate the in-flight ticket.
    pub fn reset(&mut self) {
        self.state = ResourceState::Initializing;
        self.data = T::default();
        self.last_failure = None;
        self.in_flight = None;
    }

    fn issue_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.in_flight = Some(self.next_ticket);
        self.next_ticket
    }
}

impl<T> ResourceLifecycle<T> {
    pub fn state(&self) -> ResourceState {
        self.state
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn last_failure(&self) -> Option<&FetchFailure> {
        self.last_failure.as_ref()
    }

    /// Ticket of the fetch currently awaited, if any.
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn is_refreshing(&self) -> bool {
        self.state == ResourceState::Refreshing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> FetchOutcome<Vec<u32>> {
        FetchOutcome::Failure(FetchFailure::new(
            "loans",
            NetworkError::Timeout {
                operation: "/loans".to_string(),
                duration_secs: 10,
            },
        ))
    }

    #[test]
    fn test_starts_initializing() {
        let lifecycle = ResourceLifecycle::<Vec<u32>>::new();
        assert_eq!(lifecycle.state(), ResourceState::Initializing);
        assert!(lifecycle.in_flight().is_none());
    }

    #[test]
    fn test_success_moves_to_ready() {
        let mut lifecycle = ResourceLifecycle::new();
        let ticket = lifecycle.activate();
        assert!(lifecycle.complete(ticket, FetchOutcome::Success(vec![1, 2])));
        assert_eq!(lifecycle.state(), ResourceState::Ready);
        assert_eq!(lifecycle.data(), &vec![1, 2]);
        assert!(lifecycle.last_failure().is_none());
    }

    #[test]
    fn test_failure_on_first_load_is_ready_and_empty() {
        let mut lifecycle = ResourceLifecycle::new();
        let ticket = lifecycle.activate();
        assert!(lifecycle.complete(ticket, failure()));
        assert_eq!(lifecycle.state(), ResourceState::Ready);
        assert!(lifecycle.data().is_empty());
        assert_eq!(lifecycle.last_failure().unwrap().code(), "E_NET_TIMEOUT");
    }

    #[test]
    fn test_failed_refresh_keeps_previous_data() {
        let mut lifecycle = ResourceLifecycle::new();
        let ticket = lifecycle.activate();
        lifecycle.complete(ticket, FetchOutcome::Success(vec![7]));

        let ticket = lifecycle.begin_refresh().unwrap();
        assert_eq!(lifecycle.state(), ResourceState::Refreshing);
        assert!(lifecycle.complete(ticket, failure()));
        assert_eq!(lifecycle.state(), ResourceState::Ready);
        assert_eq!(lifecycle.data(), &vec![7]);
    }

    #[test]
    fn test_refresh_ignored_unless_ready() {
        let mut lifecycle = ResourceLifecycle::<Vec<u32>>::new();
        let ticket = lifecycle.activate();
        assert!(lifecycle.begin_refresh().is_none());
        assert_eq!(lifecycle.in_flight(), Some(ticket));

        lifecycle.complete(ticket, FetchOutcome::Success(vec![]));
        let refresh = lifecycle.begin_refresh().unwrap();
        assert!(lifecycle.begin_refresh().is_none());
        assert_eq!(lifecycle.in_flight(), Some(refresh));
    }

    #[test]
    fn test_success_replaces_data() {
        let mut lifecycle = ResourceLifecycle::new();
        let ticket = lifecycle.activate();
        lifecycle.complete(ticket, FetchOutcome::Success(vec![1, 2, 3]));
        let ticket = lifecycle.begin_refresh().unwrap();
        lifecycle.complete(ticket, FetchOutcome::Success(vec![9]));
        assert_eq!(lifecycle.data(), &vec![9]);
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut lifecycle = ResourceLifecycle::new();
        let old = lifecycle.activate();
        lifecycle.reset();
        let current = lifecycle.activate();
        assert_ne!(old, current);

        assert!(!lifecycle.complete(old, FetchOutcome::Success(vec![1])));
        assert_eq!(lifecycle.state(), ResourceState::Initializing);
        assert!(lifecycle.complete(current, FetchOutcome::Success(vec![2])));
        assert_eq!(lifecycle.data(), &vec![2]);
    }

    #[test]
    fn test_reset_invalidates_in_flight() {
        let mut lifecycle = ResourceLifecycle::new();
        let ticket = lifecycle.activate();
        lifecycle.reset();
        assert!(!lifecycle.complete(ticket, FetchOutcome::Success(vec![1])));
        assert!(lifecycle.data().is_empty());
    }

    #[test]
    fn test_fetch_failure_display() {
        let failure = FetchFailure::new("dashboard", NetworkError::Cancelled);
        assert_eq!(
            failure.to_string(),
            "dashboard fetch failed [E_NET_CANCEL]: Request failed: cancelled"
        );
    }
}
