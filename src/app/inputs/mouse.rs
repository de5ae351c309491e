use super::devices;
use super::dispatch::{self, SharedClient};
use super::transport::run_action;
use crate::app::events::AppEvent;
use crate::app::transport::TransportAction;
use crate::app::{App, DialogButton};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

/// Clicks are resolved against the regions recorded by the last draw
pub fn handle_mouse(
    event: MouseEvent,
    app: &mut App,
    client: &SharedClient,
    tx: &mpsc::Sender<AppEvent>,
) {
    let (col, row) = (event.column, event.row);

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {}
        MouseEventKind::ScrollDown if !app.device_dialog.is_open() => {
            app.playlist.move_down(app.store.tracks_in_player.len());
            return;
        }
        MouseEventKind::ScrollUp if !app.device_dialog.is_open() => {
            app.playlist.move_up();
            return;
        }
        _ => return,
    }

    if app.store.error_message.is_some() {
        app.store.clear_error();
        return;
    }
    if app.input_state.is_some() {
        return;
    }

    if app.device_dialog.is_open() {
        if let Some(index) = app.click_targets.device_row_at(col, row) {
            app.device_dialog.select(index);
        } else if let Some(button) = app.click_targets.dialog_button_at(col, row) {
            match button {
                DialogButton::Cancel => app.device_dialog.cancel(),
                DialogButton::Transfer => devices::confirm(app, client, tx),
            }
        }
        return;
    }

    if let Some(action) = app.click_targets.toolbar_at(col, row) {
        run_action(app, action, client, tx);
    } else if let Some(percent) = app.click_targets.slider_percent_at(col, row) {
        run_action(app, TransportAction::Scrub(percent), client, tx);
    } else if let Some(index) = app.click_targets.playlist_row_at(col, row) {
        if let Some(options) = app.click_row(index) {
            dispatch::spawn_play(client, tx, options);
        }
    }
}
