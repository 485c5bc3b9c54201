//! Redraw bookkeeping and per-tick work.

use super::{App, Screen, Tab};
use crate::lifecycle::ResourceState;

impl App {
    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Called every ~16ms from the main loop.
    ///
    /// Applies finished fetches and keeps redrawing while anything is
    /// animating a spinner.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.poll_loaders() {
            self.mark_dirty();
        }

        // Spinner frames advance every 6 ticks (~100ms).
        if self.tick_count % 6 == 0 && self.is_busy() {
            self.mark_dirty();
        }
    }

    /// Drain completions from every loader. Returns `true` if any applied.
    pub fn poll_loaders(&mut self) -> bool {
        let mut changed = self.dashboard.poll();
        changed |= self.loans.poll();
        changed |= self.discussions.poll();
        changed |= self.activities.poll();
        changed
    }

    /// Whether the visible screen shows a spinner.
    pub fn is_busy(&self) -> bool {
        match self.screen {
            Screen::Login => self.login.is_submitting(),
            Screen::Main => match self.tab {
                Tab::Contribute => self.contribute.is_submitting(),
                tab => self
                    .tab_state(tab)
                    .map(|state| state != ResourceState::Ready)
                    .unwrap_or(false),
            },
        }
    }

    /// Lifecycle state of a read tab; `None` for the contribute form.
    pub fn tab_state(&self, tab: Tab) -> Option<ResourceState> {
        match tab {
            Tab::Dashboard => Some(self.dashboard.state()),
            Tab::Loans => Some(self.loans.state()),
            Tab::Discussions => Some(self.discussions.state()),
            Tab::Activities => Some(self.activities.state()),
            Tab::Contribute => None,
        }
    }

    /// Whether the given read tab is mid-refresh.
    pub fn is_refreshing(&self, tab: Tab) -> bool {
        match tab {
            Tab::Dashboard => self.dashboard.lifecycle().is_refreshing(),
            Tab::Loans => self.loans.lifecycle().is_refreshing(),
            Tab::Discussions => self.discussions.lifecycle().is_refreshing(),
            Tab::Activities => self.activities.lifecycle().is_refreshing(),
            Tab::Contribute => false,
        }
    }
}
