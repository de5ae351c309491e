//! Fire-and-forget calls to Spotify. Each spawns a blocking task and
//! reports back through the event channel; nothing is awaited by the UI.

use crate::app::events::AppEvent;
use crate::app::store::NO_DEVICES_MESSAGE;
use crate::app::transport::{self, PlayerCommand};
use crate::spotify::{PlayOptions, PlaybackClient};
use std::sync::Arc;
use tokio::sync::mpsc;

pub type SharedClient = Arc<dyn PlaybackClient>;

/// Pull a fresh snapshot right after a command so the deck reacts
/// before the next poll.
fn refresh(client: &SharedClient, tx: &mpsc::Sender<AppEvent>) {
    match client.get_playback_state() {
        Ok(state) => {
            let _ = tx.blocking_send(AppEvent::PlaybackUpdate(state));
        }
        Err(e) => tracing::debug!(error = %e, "refresh after command failed"),
    }
}

pub fn spawn_commands(client: &SharedClient, tx: &mpsc::Sender<AppEvent>, commands: Vec<PlayerCommand>) {
    if commands.is_empty() {
        return;
    }
    let client = client.clone();
    let tx = tx.clone();
    tokio::task::spawn_blocking(move || {
        if let Err(e) = transport::execute(client.as_ref(), &commands) {
            tracing::warn!(error = %e, ?commands, "transport command failed");
            let _ = tx.blocking_send(AppEvent::CommandFailed {
                message: format!("⚠ {}", e),
                modal: false,
            });
        }
        refresh(&client, &tx);
    });
}

/// Play a slice of the queue; any failure is reported as "no devices"
pub fn spawn_play(client: &SharedClient, tx: &mpsc::Sender<AppEvent>, options: PlayOptions) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::task::spawn_blocking(move || {
        tracing::info!(items = options.uris.len(), "putting items on record");
        if let Err(e) = client.play(Some(options)) {
            tracing::warn!(error = %e, "play from queue failed");
            let _ = tx.blocking_send(AppEvent::CommandFailed {
                message: NO_DEVICES_MESSAGE.to_string(),
                modal: true,
            });
        }
        refresh(&client, &tx);
    });
}

pub fn spawn_device_fetch(client: &SharedClient, tx: &mpsc::Sender<AppEvent>, generation: u64) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::task::spawn_blocking(move || {
        let result = client.get_my_devices().map_err(|e| e.to_string());
        let _ = tx.blocking_send(AppEvent::DevicesLoaded(generation, result));
    });
}

pub fn spawn_transfer(client: &SharedClient, tx: &mpsc::Sender<AppEvent>, device_id: String) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::task::spawn_blocking(move || {
        tracing::info!(%device_id, "transferring playback");
        if let Err(e) = client.transfer_my_playback(vec![device_id]) {
            tracing::warn!(error = %e, "transfer failed");
            let _ = tx.blocking_send(AppEvent::CommandFailed {
                message: format!("⚠ {}", e),
                modal: false,
            });
        }
        refresh(&client, &tx);
    });
}

pub fn spawn_load(client: &SharedClient, tx: &mpsc::Sender<AppEvent>, uri: String) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::task::spawn_blocking(move || {
        let result = client.get_items(&uri).map_err(|e| e.to_string());
        let _ = tx.blocking_send(AppEvent::QueueLoaded(result));
    });
}
