use crate::spotify::model::{Device, PlayOptions, PlayableItem, PlaybackState, RepeatState};
use anyhow::Result;

/// Remote control surface of a Spotify Connect session 🎛️
///
/// Calls are blocking; the app always runs them on `spawn_blocking`.
pub trait PlaybackClient: Send + Sync {
    /// Resume, or start playing `options.uris` when given
    fn play(&self, options: Option<PlayOptions>) -> Result<()>;
    fn pause(&self) -> Result<()>;
    fn seek(&self, position_ms: u64) -> Result<()>;
    fn skip_to_next(&self) -> Result<()>;
    fn set_repeat(&self, state: RepeatState) -> Result<()>;
    fn set_shuffle(&self, state: bool) -> Result<()>;
    fn get_my_devices(&self) -> Result<Vec<Device>>;
    fn transfer_my_playback(&self, device_ids: Vec<String>) -> Result<()>;

    /// `None` when nothing is playing anywhere
    fn get_playback_state(&self) -> Result<Option<PlaybackState>>;

    /// Resolve a playlist, album or show into its playable items
    fn get_items(&self, uri: &str) -> Result<Vec<PlayableItem>>;
}
