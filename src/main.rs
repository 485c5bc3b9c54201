use std::sync::Arc;
use std::time::Duration;

use chama::api::ChamaApi;
use chama::app::{App, AppMessage};
use chama::cli::{parse_args, run_cli_command, CliCommand};
use chama::startup::{init_logging, StartupConfig};
use chama::terminal::{setup_panic_hook, TerminalManager};
use chama::ui;
use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

/// Main loop tick; drives spinners and drains fetch results.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&command) {
        std::process::exit(code);
    }
    let CliCommand::RunTui(options) = command else {
        return Ok(());
    };

    color_eyre::install()?;

    let config = StartupConfig::from_env()
        .with_overrides(options.api_url.as_deref(), options.skip_login);
    config.api.validate()?;
    init_logging(config.log_file.as_deref());
    tracing::info!("using API at {}", config.api.base_url);

    let api = Arc::new(ChamaApi::from_config(&config.api)?);

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut terminal = TerminalManager::new()?;
        let mut app = App::new(api, config.skip_login);

        let result = run_app(terminal.terminal(), &mut app).await;
        terminal.restore();

        if let Err(ref err) = result {
            tracing::error!("TUI exited with error: {}", err);
        }
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!("terminal event error: {}", err);
                    }
                    None => app.quit(),
                }
            }

            Some(msg) = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
