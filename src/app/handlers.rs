//! Message handling for the App.

use super::{App, AppMessage};
use crate::screens::LoginOutcome;

impl App {
    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::LoginFinished(result) => match self.login.finish(result) {
                LoginOutcome::SignedIn { username } => self.enter_main(Some(username)),
                LoginOutcome::Rejected => {}
            },
            AppMessage::ContributionFinished(result) => {
                let alert = self.contribute.finish(result);
                if !alert.is_error() {
                    tracing::info!("contribution accepted");
                }
                self.alert = Some(alert);
            }
        }
    }
}
