use crate::spotify::{Device, PlayableItem, PlaybackState};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// The one user-facing error the player surfaces when nothing can play.
pub const NO_DEVICES_MESSAGE: &str =
    "No Devices! Make sure you have a spotify client running on a device.";

/// Playlist layout 📋
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerView {
    #[default]
    Individual,
    Group,
}

impl PlayerView {
    pub fn toggled(self) -> Self {
        match self {
            PlayerView::Individual => PlayerView::Group,
            PlayerView::Group => PlayerView::Individual,
        }
    }
}

/// Shared player state: the loaded queue, the last polled snapshot and the
/// error channel. Only the poller writes `playback_state`.
#[derive(Debug, Default)]
pub struct PlayerStore {
    pub tracks_in_player: Vec<PlayableItem>,
    pub playback_state: Option<PlaybackState>,
    pub last_playback_update: Option<Instant>,
    pub error_message: Option<String>,
    pub player_view: PlayerView,
}

impl PlayerStore {
    pub fn new(player_view: PlayerView) -> Self {
        Self {
            player_view,
            ..Self::default()
        }
    }

    /// Replace the queue wholesale
    pub fn set_to_player(&mut self, items: Vec<PlayableItem>) {
        self.tracks_in_player = items;
    }

    pub fn set_error_message(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn apply_playback(&mut self, state: Option<PlaybackState>) {
        self.playback_state = state;
        self.last_playback_update = Some(Instant::now());
    }

    pub fn playback_item(&self) -> Option<&PlayableItem> {
        self.playback_state.as_ref().and_then(|s| s.item.as_ref())
    }

    pub fn current_device(&self) -> Option<&Device> {
        self.playback_state.as_ref().and_then(|s| s.device.as_ref())
    }

    pub fn is_playing(&self) -> bool {
        self.playback_state.as_ref().is_some_and(|s| s.is_playing)
    }

    /// Progress as last reported by Spotify
    pub fn progress_ms(&self) -> u64 {
        self.playback_state
            .as_ref()
            .and_then(|s| s.progress_ms)
            .unwrap_or(0)
    }

    pub fn duration_ms(&self) -> u64 {
        self.playback_item().map(|i| i.duration_ms()).unwrap_or(0)
    }

    /// Progress extrapolated from the last poll, for display only
    pub fn display_progress_ms(&self) -> u64 {
        let base = self.progress_ms();
        if !self.is_playing() {
            return base;
        }
        let elapsed = self
            .last_playback_update
            .map(|t| t.elapsed().as_millis() as u64)
            .unwrap_or(0);
        // Clamp to duration to prevent overshooting
        (base + elapsed).min(self.duration_ms())
    }

    /// Slider position in percent, 0 when the duration is unknown
    pub fn slider_percent(&self) -> f64 {
        let duration = self.duration_ms();
        if duration == 0 {
            return 0.0;
        }
        (self.display_progress_ms() as f64 / duration as f64 * 100.0).clamp(0.0, 100.0)
    }
}
