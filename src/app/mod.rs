//! Application state and event handling.
//!
//! [`App`] owns one [`ResourceLoader`] per read tab, the two forms, and the
//! channel form submissions report back on. It never touches the terminal;
//! `main` drives it and `ui::render` draws it.

mod handlers;
mod keys;
mod messages;
mod navigation;
mod state_methods;
mod types;

pub use messages::AppMessage;
pub use types::{Screen, Tab};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::ChamaApi;
use crate::cancel::CancelToken;
use crate::lifecycle::ResourceLoader;
use crate::screens::{
    ActivitiesScreen, Alert, ContributeForm, DashboardScreen, DiscussionsScreen, LoansScreen,
    LoginForm,
};

/// Main application state
pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// Selected tab on the main screen
    pub tab: Tab,
    /// Name of the signed-in user, if known
    pub user: Option<String>,
    /// Shared API client
    pub api: Arc<ChamaApi>,
    pub dashboard: ResourceLoader<DashboardScreen>,
    pub loans: ResourceLoader<LoansScreen>,
    pub discussions: ResourceLoader<DiscussionsScreen>,
    pub activities: ResourceLoader<ActivitiesScreen>,
    pub contribute: ContributeForm,
    pub login: LoginForm,
    /// Modal alert; blocks other input until dismissed
    pub alert: Option<Alert>,
    /// Vertical scroll per tab, indexed by [`Tab::index`]
    pub scroll: [u16; 5],
    /// Largest scroll offset per tab, as measured by the last draw
    pub max_scroll: [u16; 5],
    /// Whether the UI needs to be redrawn
    pub needs_redraw: bool,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Sender for async form results
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver for async form results; `main` takes it for `select!`
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Cancels in-flight form submissions on quit
    submit_cancel: CancelToken,
}

impl App {
    /// Create the app. With `skip_login` it starts on the main tabs with the
    /// dashboard loading.
    pub fn new(api: Arc<ChamaApi>, skip_login: bool) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            should_quit: false,
            screen: Screen::Login,
            tab: Tab::Dashboard,
            user: None,
            dashboard: ResourceLoader::new(DashboardScreen, Arc::clone(&api)),
            loans: ResourceLoader::new(LoansScreen, Arc::clone(&api)),
            discussions: ResourceLoader::new(DiscussionsScreen, Arc::clone(&api)),
            activities: ResourceLoader::new(ActivitiesScreen, Arc::clone(&api)),
            api,
            contribute: ContributeForm::new(),
            login: LoginForm::new(),
            alert: None,
            scroll: [0; 5],
            max_scroll: [0; 5],
            needs_redraw: true,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
            submit_cancel: CancelToken::new(),
        };

        if skip_login {
            app.enter_main(None);
        }
        app
    }

    /// Start the login request for the current form contents.
    pub fn submit_login(&mut self) {
        let Some(request) = self.login.begin_submit() else {
            return;
        };

        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        let cancel = self.submit_cancel.clone();
        tokio::spawn(async move {
            let result = api.login(&request.username, &request.password, &cancel).await;
            let _ = tx.send(AppMessage::LoginFinished(result));
        });
    }

    /// Validate the contribution form and, if valid, send it.
    ///
    /// Validation failures become an error alert and nothing is sent.
    pub fn submit_contribution(&mut self) {
        match self.contribute.begin_submit() {
            Ok(Some(request)) => {
                tracing::info!("submitting contribution of {}", request.amount);
                let api = Arc::clone(&self.api);
                let tx = self.message_tx.clone();
                let cancel = self.submit_cancel.clone();
                tokio::spawn(async move {
                    let result = api.contribute(&request, &cancel).await;
                    let _ = tx.send(AppMessage::ContributionFinished(result));
                });
            }
            Ok(None) => {}
            Err(err) => {
                self.alert = Some(Alert::error(err.to_string()));
            }
        }
    }
}
