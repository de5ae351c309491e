use super::dispatch::{self, SharedClient};
use crate::app::events::AppEvent;
use crate::app::{App, InputMode};
use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

pub fn handle_input_box(
    key: KeyEvent,
    app: &mut App,
    client: &SharedClient,
    tx: &mpsc::Sender<AppEvent>,
) -> bool {
    if app.input_state.is_none() {
        return false;
    }

    match key.code {
        KeyCode::Esc => {
            app.input_state = None;
        }
        KeyCode::Enter => {
            // Take ownership, releasing the app borrow
            if let Some(input) = app.input_state.take() {
                match input.mode {
                    InputMode::LoadUri => {
                        let uri = input.value.trim().to_string();
                        if !uri.is_empty() {
                            app.show_toast("📂 Loading…");
                            dispatch::spawn_load(client, tx, uri);
                        }
                    }
                }
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = app.input_state.as_mut() {
                input.value.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.input_state.as_mut() {
                input.value.push(c);
            }
        }
        _ => {}
    }
    true
}
