use super::dispatch::{self, SharedClient};
use crate::app::events::AppEvent;
use crate::app::keys::{scrub_percent, KeyConfig};
use crate::app::transport::TransportAction;
use crate::app::App;
use crossterm::event::KeyEvent;
use tokio::sync::mpsc;

pub fn action_for_key(keys: &KeyConfig, key: KeyEvent) -> Option<TransportAction> {
    let bindings = [
        (&keys.play, TransportAction::Play),
        (&keys.pause, TransportAction::Pause),
        (&keys.stop, TransportAction::Stop),
        (&keys.eject, TransportAction::Eject),
        (&keys.previous, TransportAction::Previous),
        (&keys.next, TransportAction::Next),
        (&keys.repeat, TransportAction::ToggleRepeat),
        (&keys.shuffle, TransportAction::ToggleShuffle),
        (&keys.seek_backward, TransportAction::SeekBack),
        (&keys.seek_forward, TransportAction::SeekForward),
    ];

    bindings
        .into_iter()
        .find(|(binding, _)| keys.matches(key, binding))
        .map(|(_, action)| action)
        .or_else(|| scrub_percent(key).map(TransportAction::Scrub))
}

pub fn run_action(app: &mut App, action: TransportAction, client: &SharedClient, tx: &mpsc::Sender<AppEvent>) {
    let commands = app.transport(action);
    dispatch::spawn_commands(client, tx, commands);
}

pub fn handle_transport_events(
    key: KeyEvent,
    app: &mut App,
    client: &SharedClient,
    tx: &mpsc::Sender<AppEvent>,
) -> bool {
    match action_for_key(&app.keys, key) {
        Some(action) => {
            run_action(app, action, client, tx);
            true
        }
        None => false,
    }
}
