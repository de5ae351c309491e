use super::dispatch::{self, SharedClient};
use crate::app::events::AppEvent;
use crate::app::App;
use crossterm::event::KeyEvent;
use tokio::sync::mpsc;

pub fn handle_playlist_events(
    key: KeyEvent,
    app: &mut App,
    client: &SharedClient,
    tx: &mpsc::Sender<AppEvent>,
) -> bool {
    let keys = &app.keys;

    if keys.nav_down(key) {
        app.playlist.move_down(app.store.tracks_in_player.len());
        return true;
    }

    if keys.nav_up(key) {
        app.playlist.move_up();
        return true;
    }

    // Enter acts as a click on the highlighted row, which plays it
    if keys.matches(key, &keys.activate) {
        if let Some(options) = app.activate_highlighted() {
            dispatch::spawn_play(client, tx, options);
        }
        return true;
    }

    false
}
