use ampify::app::{
    self, cli::Args, config::AppConfig, events::AppEvent, inputs, logging, App,
};
use ampify::spotify::WebApiClient;
use ampify::ui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();
    let args = Args::parse();

    if args.generate_config {
        println!("{}", AppConfig::default_config_toml()?);
        return Ok(());
    }

    // Keep the guard alive until exit so buffered lines reach the file
    let _log_guard = logging::init(&AppConfig::get_log_dir())?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting ampify");

    let (config, mut state) = AppConfig::load();
    if let Some(view) = args.view {
        state.player_view = view;
    }

    let env_token = std::env::var("SPOTIFY_ACCESS_TOKEN").ok();
    let Some(token) = config.resolve_token(args.token.as_deref(), env_token.as_deref()) else {
        anyhow::bail!(
            "no Spotify access token: pass --token, set SPOTIFY_ACCESS_TOKEN or add access_token to {}",
            AppConfig::get_config_path().display()
        );
    };

    // The blocking HTTP client must live outside the async workers
    let base_url = config.api_base_url.clone();
    let web_client = tokio::task::spawn_blocking(move || WebApiClient::new(&base_url, &token))
        .await?
        .context("failed to build the Spotify client")?;
    let client: inputs::SharedClient = Arc::new(web_client);

    let theme = ui::theme::load_current_theme();
    let mut app = App::new(&config, &state, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::channel(100);

    // 1. Input Event Task
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    // 2. Playback Polling Task
    let tx_poll = tx.clone();
    let poll_client = client.clone();
    let poll_interval = Duration::from_millis(config.poll_interval_ms.max(100));
    tokio::spawn(async move {
        loop {
            let client_ref = poll_client.clone();
            let result = tokio::task::spawn_blocking(move || client_ref.get_playback_state()).await;

            match result {
                Ok(Ok(snapshot)) => {
                    if tx_poll.send(AppEvent::PlaybackUpdate(snapshot)).await.is_err() {
                        break;
                    }
                }
                Ok(Err(e)) => tracing::warn!(error = %e, "playback poll failed"),
                Err(e) => tracing::error!(error = %e, "playback poll task panicked"),
            }
            tokio::time::sleep(poll_interval).await;
        }
    });

    // 3. UI Tick Task (toast expiry, interpolated progress)
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(100));
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    if let Some(uri) = args.load.as_deref() {
        app.show_toast("📂 Loading…");
        inputs::dispatch::spawn_load(&client, &tx, uri.trim().to_string());
    }

    let run = run_loop(&mut terminal, &mut app, &client, &tx, &mut rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    // Save state on exit
    app.persistent_state().save();

    // Drop the blocking client off the async workers
    drop(app);
    let _ = tokio::task::spawn_blocking(move || drop(client)).await;

    tracing::info!("bye");
    run
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &inputs::SharedClient,
    tx: &mpsc::Sender<AppEvent>,
    rx: &mut mpsc::Receiver<AppEvent>,
) -> Result<()> {
    while app.is_running {
        terminal.draw(|f| ui::ui(f, app))?;

        let Some(event) = rx.recv().await else {
            break;
        };

        match event {
            AppEvent::Input(Event::Key(key)) => inputs::handle_event(key, app, client, tx),
            AppEvent::Input(Event::Mouse(mouse)) => {
                inputs::mouse::handle_mouse(mouse, app, client, tx)
            }
            AppEvent::Input(_) => {}
            AppEvent::PlaybackUpdate(snapshot) => app.store.apply_playback(snapshot),
            AppEvent::DevicesLoaded(generation, result) => {
                app.device_dialog.devices_loaded(generation, result)
            }
            AppEvent::QueueLoaded(Ok(items)) => {
                tracing::info!(items = items.len(), "queue loaded");
                let message = format!("📼 Loaded {} items", items.len());
                app.store.set_to_player(items);
                app.playlist = app::playlist::PlaylistState::default();
                app.show_toast(&message);
            }
            AppEvent::QueueLoaded(Err(e)) => {
                tracing::warn!(error = %e, "failed to load queue");
                app.show_toast(&format!("⚠ {}", e));
            }
            AppEvent::CommandFailed { message, modal } => {
                if modal {
                    app.store.set_error_message(message);
                } else {
                    app.show_toast(&message);
                }
            }
            AppEvent::Tick => app.on_tick(),
        }
    }
    Ok(())
}
