//! Async driver for [`ResourceLifecycle`].
//!
//! Each fetch runs on its own tokio task and reports back through an
//! unbounded channel tagged with its ticket. The owner polls the channel
//! (the app does so every tick) or awaits it with [`ResourceLoader::settle`].

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::screen::{EmptyState, ResourceScreen};
use super::state::{FetchFailure, FetchOutcome, ResourceLifecycle, ResourceState};
use crate::api::ChamaApi;
use crate::cancel::CancelToken;

/// What a read screen should draw right now.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered<V> {
    /// First load in progress.
    Loading,
    /// Loaded, nothing to show.
    Empty { state: EmptyState, refreshing: bool },
    /// Loaded with content.
    Populated { view: V, refreshing: bool },
}

impl<V> Rendered<V> {
    pub fn is_refreshing(&self) -> bool {
        match self {
            Rendered::Loading => false,
            Rendered::Empty { refreshing, .. } | Rendered::Populated { refreshing, .. } => {
                *refreshing
            }
        }
    }
}

type Completion<T> = (u64, FetchOutcome<T>);

struct InFlight {
    cancel: CancelToken,
    handle: JoinHandle<()>,
}

impl InFlight {
    fn stop(self) {
        self.cancel.cancel();
        self.handle.abort();
    }
}

/// Runs fetches for one screen and feeds their results into its lifecycle.
pub struct ResourceLoader<S: ResourceScreen> {
    screen: Arc<S>,
    api: Arc<ChamaApi>,
    lifecycle: ResourceLifecycle<S::Data>,
    tx: mpsc::UnboundedSender<Completion<S::Data>>,
    rx: mpsc::UnboundedReceiver<Completion<S::Data>>,
    in_flight: Option<InFlight>,
    mounted: bool,
}

impl<S: ResourceScreen> ResourceLoader<S> {
    pub fn new(screen: S, api: Arc<ChamaApi>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            screen: Arc::new(screen),
            api,
            lifecycle: ResourceLifecycle::new(),
            tx,
            rx,
            in_flight: None,
            mounted: false,
        }
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn lifecycle(&self) -> &ResourceLifecycle<S::Data> {
        &self.lifecycle
    }

    pub fn state(&self) -> ResourceState {
        self.lifecycle.state()
    }

    pub fn last_failure(&self) -> Option<&FetchFailure> {
        self.lifecycle.last_failure()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// First activation: enter `Initializing` and start fetching.
    ///
    /// Does nothing if already mounted.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        let ticket = self.lifecycle.activate();
        tracing::debug!("{}: mounted, fetching", self.screen.name());
        self.spawn_fetch(ticket);
    }

    /// Pull to refresh. Returns `false` when ignored (not mounted, or a
    /// fetch is already running).
    pub fn refresh(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        match self.lifecycle.begin_refresh() {
            Some(ticket) => {
                tracing::debug!("{}: refreshing", self.screen.name());
                self.spawn_fetch(ticket);
                true
            }
            None => false,
        }
    }

    /// Apply every completion already delivered. Returns `true` if any was
    /// applied.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok((ticket, outcome)) = self.rx.try_recv() {
            changed |= self.apply(ticket, outcome);
        }
        changed
    }

    /// Wait for the in-flight fetch to land. Returns `false` straight away
    /// when nothing is in flight.
    pub async fn settle(&mut self) -> bool {
        while self.lifecycle.in_flight().is_some() {
            match self.rx.recv().await {
                Some((ticket, outcome)) => {
                    if self.apply(ticket, outcome) {
                        return true;
                    }
                }
                None => return false,
            }
        }
        false
    }

    /// Tear down: cancel and abort the in-flight fetch, drop any result
    /// that already arrived, and return to the unmounted state.
    pub fn unmount(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            tracing::debug!("{}: cancelling in-flight fetch", self.screen.name());
            in_flight.stop();
        }
        self.lifecycle.reset();
        while self.rx.try_recv().is_ok() {}
        self.mounted = false;
    }

    /// Current render form.
    pub fn rendered(&self) -> Rendered<S::View> {
        let refreshing = self.lifecycle.is_refreshing();
        match self.lifecycle.state() {
            ResourceState::Initializing => Rendered::Loading,
            _ if self.screen.is_empty(self.lifecycle.data()) => Rendered::Empty {
                state: self.screen.empty_state(),
                refreshing,
            },
            _ => Rendered::Populated {
                view: self.screen.view_model(self.lifecycle.data()),
                refreshing,
            },
        }
    }

    fn apply(&mut self, ticket: u64, outcome: FetchOutcome<S::Data>) -> bool {
        if let Some(failure) = outcome.failure() {
            if self.lifecycle.in_flight() == Some(ticket) {
                tracing::warn!(
                    "{}: fetch failed [{}]: {}",
                    failure.screen,
                    failure.code(),
                    failure.error
                );
            }
        }

        let applied = self.lifecycle.complete(ticket, outcome);
        if applied {
            self.in_flight = None;
        } else {
            tracing::debug!("{}: discarded stale result #{}", self.screen.name(), ticket);
        }
        applied
    }

    fn spawn_fetch(&mut self, ticket: u64) {
        if let Some(previous) = self.in_flight.take() {
            previous.stop();
        }

        let cancel = CancelToken::new();
        let token = cancel.clone();
        let screen = Arc::clone(&self.screen);
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();

        let handle = tokio::spawn(async move {
            let outcome = match screen.fetch(&api, &token).await {
                Ok(data) => FetchOutcome::Success(data),
                Err(error) => FetchOutcome::Failure(FetchFailure::new(screen.name(), error)),
            };
            let _ = tx.send((ticket, outcome));
        });

        self.in_flight = Some(InFlight { cancel, handle });
    }
}

impl<S: ResourceScreen> Drop for ResourceLoader<S> {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.stop();
        }
    }
}
