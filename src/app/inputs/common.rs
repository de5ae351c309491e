use super::dispatch::{self, SharedClient};
use crate::app::events::AppEvent;
use crate::app::store::PlayerView;
use crate::app::{App, InputMode, InputState};
use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

/// The error popup swallows every key until dismissed
pub fn handle_error_modal(key: KeyEvent, app: &mut App) -> bool {
    if app.store.error_message.is_none() {
        return false;
    }
    if key.code == KeyCode::Enter || key.code == KeyCode::Esc || app.keys.matches(key, &app.keys.quit) {
        app.store.clear_error();
    }
    true
}

pub fn handle_common_events(
    key: KeyEvent,
    app: &mut App,
    client: &SharedClient,
    tx: &mpsc::Sender<AppEvent>,
) -> bool {
    let keys = app.keys.clone(); // Clone keys to avoid borrowing app

    // Quit ('q')
    if keys.matches(key, &keys.quit) {
        // Close popups first, then quit
        if app.show_keyhints {
            app.show_keyhints = false;
        } else {
            app.is_running = false;
        }
        return true;
    }

    if keys.matches(key, &keys.toggle_keyhints) {
        app.show_keyhints = !app.show_keyhints;
        return true;
    }

    if keys.matches(key, &keys.back) && app.show_keyhints {
        app.show_keyhints = false;
        return true;
    }

    if keys.matches(key, &keys.toggle_view) {
        let view = app.toggle_view();
        app.persistent_state().save();
        app.show_toast(match view {
            PlayerView::Individual => "📋 Individual view",
            PlayerView::Group => "📚 Grouped view",
        });
        return true;
    }

    if keys.matches(key, &keys.devices) {
        let generation = app.open_devices();
        dispatch::spawn_device_fetch(client, tx, generation);
        return true;
    }

    if keys.matches(key, &keys.load) {
        app.input_state = Some(InputState::new(
            InputMode::LoadUri,
            "Load playlist / album / show",
            "",
        ));
        return true;
    }

    false
}
