mod ui;

pub use ui::{ClickTargets, DialogButton, InputMode, InputState, Toast};

use super::config::{PersistentState, UserConfig};
use super::devices::DeviceDialog;
use super::keys::KeyConfig;
use super::playlist::{play_from, ClickOutcome, PlaylistState};
use super::store::{PlayerStore, PlayerView};
use super::transport::{self, PlayerCommand, TransportAction, TransportError};
use crate::spotify::PlayOptions;
use crate::ui::theme::Theme;
use std::time::Instant;

pub struct App {
    pub theme: Theme,
    pub keys: KeyConfig,
    pub is_running: bool,

    /// Queue, polled playback snapshot and error channel
    pub store: PlayerStore,
    pub playlist: PlaylistState,

    /// Device picker 🔊
    pub device_dialog: DeviceDialog,
    pub device_generation: u64,

    /// UI State
    pub show_keyhints: bool,
    pub input_state: Option<InputState>,
    pub toast: Option<Toast>,
    pub click_targets: ClickTargets,
}

impl App {
    pub fn new(config: &UserConfig, state: &PersistentState, theme: Theme) -> Self {
        Self {
            theme,
            keys: config.keys.clone(),
            is_running: true,
            store: PlayerStore::new(state.player_view),
            playlist: PlaylistState::default(),
            device_dialog: DeviceDialog::default(),
            device_generation: 0,
            show_keyhints: false,
            input_state: None,
            toast: None,
            click_targets: ClickTargets::default(),
        }
    }

    pub fn show_toast(&mut self, message: &str) {
        let now = Instant::now();
        let duration = std::time::Duration::from_millis(2000); // 2s display time
        let deadline = now + duration;

        if let Some(ref mut current) = self.toast {
            // Keep start_time so a rapid update doesn't replay the entrance
            current.message = message.to_string();
            current.deadline = deadline;
        } else {
            self.toast = Some(Toast {
                message: message.to_string(),
                start_time: now,
                deadline,
            });
        }
    }

    /// Called every tick to update state
    pub fn on_tick(&mut self) {
        if let Some(ref toast) = self.toast {
            if Instant::now() > toast.deadline {
                self.toast = None;
            }
        }
    }

    fn report(&mut self, err: TransportError) {
        tracing::info!(error = %err, "transport action rejected");
        self.store.set_error_message(err.to_string());
    }

    /// Plans a toolbar action. Store-side effects are applied here; the
    /// returned commands still have to reach Spotify.
    pub fn transport(&mut self, action: TransportAction) -> Vec<PlayerCommand> {
        let commands = match transport::plan(action, &self.store) {
            Ok(commands) => commands,
            Err(e) => {
                self.report(e);
                return Vec::new();
            }
        };

        if commands.contains(&PlayerCommand::ClearQueue) {
            self.store.set_to_player(Vec::new());
        }
        if !commands.is_empty() {
            self.show_toast(action.label());
        }

        commands
            .into_iter()
            .filter(|c| *c != PlayerCommand::ClearQueue)
            .collect()
    }

    /// Row click. Returns the `play` payload on a second click of the
    /// highlighted row.
    pub fn click_row(&mut self, index: usize) -> Option<PlayOptions> {
        match self.playlist.click(index) {
            ClickOutcome::Highlight => None,
            ClickOutcome::PlayFrom(i) => {
                if let Err(e) = transport::check_actionable(&self.store) {
                    self.report(e);
                    return None;
                }
                play_from(&self.store.tracks_in_player, i)
            }
        }
    }

    /// Enter on the highlighted row
    pub fn activate_highlighted(&mut self) -> Option<PlayOptions> {
        self.click_row(self.playlist.highlighted)
    }

    pub fn toggle_view(&mut self) -> PlayerView {
        self.store.player_view = self.store.player_view.toggled();
        self.store.player_view
    }

    /// Opens the device picker; returns the fetch generation
    pub fn open_devices(&mut self) -> u64 {
        self.device_dialog.open(&mut self.device_generation)
    }

    pub fn persistent_state(&self) -> PersistentState {
        PersistentState {
            player_view: self.store.player_view,
        }
    }
}
