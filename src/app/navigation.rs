//! Navigation methods for the App.

use super::{App, Screen, Tab};

impl App {
    /// Switch to the main tabs, landing on the dashboard.
    pub fn enter_main(&mut self, user: Option<String>) {
        if let Some(name) = &user {
            tracing::info!("signed in as {}", name);
        }
        self.user = user;
        self.screen = Screen::Main;
        self.select_tab(Tab::Dashboard);
    }

    /// Focus a tab. Its loader is mounted the first time it is focused and
    /// stays mounted afterwards.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        match tab {
            Tab::Dashboard => self.dashboard.mount(),
            Tab::Loans => self.loans.mount(),
            Tab::Discussions => self.discussions.mount(),
            Tab::Activities => self.activities.mount(),
            Tab::Contribute => {}
        }
        self.mark_dirty();
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.tab.prev());
    }

    /// Pull to refresh the current read screen. Returns `false` if ignored.
    pub fn refresh_current(&mut self) -> bool {
        let started = match self.tab {
            Tab::Dashboard => self.dashboard.refresh(),
            Tab::Loans => self.loans.refresh(),
            Tab::Discussions => self.discussions.refresh(),
            Tab::Activities => self.activities.refresh(),
            Tab::Contribute => false,
        };
        if started {
            self.mark_dirty();
        }
        started
    }

    pub fn scroll_up(&mut self) {
        let offset = &mut self.scroll[self.tab.index()];
        *offset = offset.saturating_sub(1);
        self.mark_dirty();
    }

    /// Scroll down one row, stopping once the last row is visible.
    pub fn scroll_down(&mut self) {
        let i = self.tab.index();
        self.scroll[i] = self.scroll[i].saturating_add(1).min(self.max_scroll[i]);
        self.mark_dirty();
    }

    /// Record how far the current tab can scroll after a draw, pulling the
    /// offset back if the content shrank.
    pub fn set_max_scroll(&mut self, max: u16) {
        let i = self.tab.index();
        self.max_scroll[i] = max;
        self.scroll[i] = self.scroll[i].min(max);
    }

    /// Current scroll offset of the selected tab.
    pub fn scroll_offset(&self) -> u16 {
        self.scroll[self.tab.index()]
    }

    /// Stop everything in flight and flag the main loop to exit.
    pub fn quit(&mut self) {
        self.submit_cancel.cancel();
        self.dashboard.unmount();
        self.loans.unmount();
        self.discussions.unmount();
        self.activities.unmount();
        self.should_quit = true;
    }
}
