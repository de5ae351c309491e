use super::dispatch::{self, SharedClient};
use crate::app::events::AppEvent;
use crate::app::App;
use crossterm::event::KeyEvent;
use tokio::sync::mpsc;

/// Keys while the device picker is open; it captures everything
pub fn handle_device_events(
    key: KeyEvent,
    app: &mut App,
    client: &SharedClient,
    tx: &mpsc::Sender<AppEvent>,
) -> bool {
    if !app.device_dialog.is_open() {
        return false;
    }
    let keys = app.keys.clone(); // Clone keys to avoid borrowing app

    if keys.nav_down(key) {
        app.device_dialog.select_next();
    } else if keys.nav_up(key) {
        app.device_dialog.select_prev();
    } else if keys.matches(key, &keys.activate) {
        confirm(app, client, tx);
    } else if keys.matches(key, &keys.back) || keys.matches(key, &keys.quit) {
        app.device_dialog.cancel();
    }
    true
}

/// "Transfer Playback": a no-op while nothing is selected
pub fn confirm(app: &mut App, client: &SharedClient, tx: &mpsc::Sender<AppEvent>) {
    if let Some(device_id) = app.device_dialog.confirm() {
        app.show_toast("🔊 Transferring playback");
        dispatch::spawn_transfer(client, tx, device_id);
    }
}
