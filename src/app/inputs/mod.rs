use crate::app::events::AppEvent;
use crate::app::App;
use crossterm::event::{KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

pub mod common;
pub mod devices;
pub mod dispatch;
pub mod input_box;
pub mod mouse;
pub mod playlist;
pub mod transport;

pub use dispatch::SharedClient;

pub fn handle_event(
    key: KeyEvent,
    app: &mut App,
    client: &SharedClient,
    tx: &mpsc::Sender<AppEvent>,
) {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Priority: modal overlays capture every key
    if common::handle_error_modal(key, app) {
        return;
    }
    if input_box::handle_input_box(key, app, client, tx) {
        return;
    }
    if devices::handle_device_events(key, app, client, tx) {
        return;
    }

    // 2. Common/Global Keys (Quit, Help, View, Devices, Load)
    if common::handle_common_events(key, app, client, tx) {
        return;
    }

    // 3. Playlist navigation and click-to-play
    if playlist::handle_playlist_events(key, app, client, tx) {
        return;
    }

    // 4. Transport toolbar
    transport::handle_transport_events(key, app, client, tx);
}
