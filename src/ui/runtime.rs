use crate::api::{run_fetch_worker, PlateClient, PlateSource};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

/// Capacity of the UI → worker command queue.
const COMMAND_QUEUE: usize = 16;

/// Runs the UI against the HTTP detection service until the user quits.
pub fn run(config: Config) -> anyhow::Result<()> {
    let client = PlateClient::new(&config.api).context("Failed to build HTTP client")?;
    tracing::info!(url = %client.url(), "Using detection service");
    run_with_source(config, Arc::new(client))
}

/// Runs the UI with an arbitrary result source.
pub fn run_with_source(config: Config, source: Arc<dyn PlateSource>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("plate-finder-io")
        .build()
        .context("Failed to start async runtime")?;

    let tick_rate = config.ui.tick_rate();
    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(run_fetch_worker(source, command_rx, events.sender()));
    spawn_signal_listener(&runtime, events.sender());

    let mut app = App::new(&config.ui);
    app.set_command_sender(command_tx);
    app.on_mount();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::FetchSettled { request, outcome }) => {
                app.on_fetch_settled(request, outcome)
            }
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // In-flight requests are abandoned rather than awaited.
    runtime.shutdown_background();
    tracing::info!("Exited");
    Ok(())
}

/// Forwards SIGINT/SIGTERM to the UI loop as `AppEvent::Shutdown`.
fn spawn_signal_listener(runtime: &Runtime, events: Sender<AppEvent>) {
    runtime.spawn(async move {
        wait_for_signal().await;
        tracing::info!("Shutdown signal received");
        let _ = events.send(AppEvent::Shutdown);
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut terminate) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = terminate.recv() => {}
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "SIGTERM handler unavailable");
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
