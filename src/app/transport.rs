//! Toolbar actions as guarded commands against the playback client.
//!
//! `plan` is pure: it reads the store and yields the calls to make, in
//! order. `execute` performs them. Nothing here waits for Spotify to apply
//! a change; the next poll reflects it.

use crate::app::playlist::play_from;
use crate::app::store::PlayerStore;
use crate::spotify::{PlayOptions, PlaybackClient, RepeatState};
use thiserror::Error;

pub const SEEK_STEP_MS: u64 = 15_000;
/// Below this, "previous" goes to the previous item instead of restarting
pub const RESTART_THRESHOLD_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransportAction {
    Play,
    Pause,
    Stop,
    Eject,
    Previous,
    Next,
    ToggleRepeat,
    ToggleShuffle,
    SeekBack,
    SeekForward,
    /// Slider commit, in percent of the current item
    Scrub(f64),
}

impl TransportAction {
    /// Toolbar caption
    pub fn label(&self) -> &'static str {
        match self {
            TransportAction::Play => "⏵",
            TransportAction::Pause => "⏸",
            TransportAction::Stop => "⏹",
            TransportAction::Eject => "⏏",
            TransportAction::Previous => "⏮",
            TransportAction::Next => "⏭",
            TransportAction::ToggleRepeat => "Repeat",
            TransportAction::ToggleShuffle => "Shuffle",
            TransportAction::SeekBack => "⏴ 15s",
            TransportAction::SeekForward => "15s ⏵",
            TransportAction::Scrub(_) => "Seek",
        }
    }

    /// Buttons in toolbar order
    pub fn toolbar() -> [TransportAction; 10] {
        [
            TransportAction::Play,
            TransportAction::Pause,
            TransportAction::Stop,
            TransportAction::Eject,
            TransportAction::Previous,
            TransportAction::Next,
            TransportAction::ToggleRepeat,
            TransportAction::ToggleShuffle,
            TransportAction::SeekBack,
            TransportAction::SeekForward,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    Resume,
    PlayUris(PlayOptions),
    Pause,
    Seek(u64),
    SkipToNext,
    SetRepeat(RepeatState),
    SetShuffle(bool),
    /// Store-side: empties the loaded queue
    ClearQueue,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("No Devices! Make sure you have a spotify client running on a device.")]
    NoDevice,
}

pub fn check_actionable(store: &PlayerStore) -> Result<(), TransportError> {
    if store.current_device().is_none() {
        return Err(TransportError::NoDevice);
    }
    Ok(())
}

pub fn plan(action: TransportAction, store: &PlayerStore) -> Result<Vec<PlayerCommand>, TransportError> {
    check_actionable(store)?;

    let playing = store.is_playing();
    let progress = store.progress_ms();
    let duration = store.duration_ms();

    let commands = match action {
        TransportAction::Play if playing => vec![],
        TransportAction::Play => vec![PlayerCommand::Resume],
        TransportAction::Pause if playing => vec![PlayerCommand::Pause],
        TransportAction::Pause => vec![],
        TransportAction::Stop if playing => vec![PlayerCommand::Pause, PlayerCommand::Seek(0)],
        TransportAction::Stop => vec![],
        TransportAction::Eject => {
            let mut cmds = Vec::with_capacity(3);
            if playing {
                cmds.push(PlayerCommand::Pause);
            }
            cmds.push(PlayerCommand::Seek(0));
            cmds.push(PlayerCommand::ClearQueue);
            cmds
        }
        TransportAction::Previous if progress < RESTART_THRESHOLD_MS => {
            let queue = &store.tracks_in_player;
            let current = store
                .playback_item()
                .and_then(|item| queue.iter().position(|p| p.same_id(item)));
            let start = current.map(|i| i.saturating_sub(1)).unwrap_or(0);
            play_from(queue, start)
                .map(PlayerCommand::PlayUris)
                .into_iter()
                .collect()
        }
        TransportAction::Previous => vec![PlayerCommand::Seek(0)],
        TransportAction::Next => vec![PlayerCommand::SkipToNext],
        TransportAction::ToggleRepeat => {
            let current = store
                .playback_state
                .as_ref()
                .map(|s| s.repeat_state)
                .unwrap_or_default();
            let next = if current == RepeatState::Off {
                RepeatState::Track
            } else {
                RepeatState::Off
            };
            vec![PlayerCommand::SetRepeat(next)]
        }
        TransportAction::ToggleShuffle => {
            let shuffle = store
                .playback_state
                .as_ref()
                .is_some_and(|s| s.shuffle_state);
            vec![PlayerCommand::SetShuffle(!shuffle)]
        }
        TransportAction::SeekBack if playing => {
            vec![PlayerCommand::Seek(progress.saturating_sub(SEEK_STEP_MS))]
        }
        TransportAction::SeekForward if playing => {
            vec![PlayerCommand::Seek((progress + SEEK_STEP_MS).min(duration))]
        }
        TransportAction::SeekBack | TransportAction::SeekForward => vec![],
        TransportAction::Scrub(percent) => {
            let percent = percent.clamp(0.0, 100.0);
            vec![PlayerCommand::Seek(
                (duration as f64 / 100.0 * percent).floor() as u64,
            )]
        }
    };

    Ok(commands)
}

/// Mirrors the toolbar's disabled buttons
pub fn button_enabled(action: TransportAction, store: &PlayerStore) -> bool {
    let playing = store.is_playing();
    match action {
        TransportAction::Play => !playing,
        TransportAction::Pause
        | TransportAction::Stop
        | TransportAction::SeekBack
        | TransportAction::SeekForward => playing,
        _ => true,
    }
}

/// Run the remote commands in order, stopping at the first failure.
/// `ClearQueue` is skipped; the caller applies it to the store.
pub fn execute(client: &dyn PlaybackClient, commands: &[PlayerCommand]) -> anyhow::Result<()> {
    for command in commands {
        tracing::debug!(?command, "executing");
        match command {
            PlayerCommand::Resume => client.play(None)?,
            PlayerCommand::PlayUris(opts) => client.play(Some(opts.clone()))?,
            PlayerCommand::Pause => client.pause()?,
            PlayerCommand::Seek(ms) => client.seek(*ms)?,
            PlayerCommand::SkipToNext => client.skip_to_next()?,
            PlayerCommand::SetRepeat(state) => client.set_repeat(*state)?,
            PlayerCommand::SetShuffle(state) => client.set_shuffle(*state)?,
            PlayerCommand::ClearQueue => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::playlist::tests::track;
    use crate::app::store::NO_DEVICES_MESSAGE;
    use crate::spotify::model::{Device, DeviceType, PlaybackState};

    fn device() -> Device {
        Device {
            id: Some("dev".into()),
            name: "Desk".into(),
            device_type: DeviceType::Computer,
            is_active: true,
        }
    }

    fn store_with(playing: bool, progress_ms: u64) -> PlayerStore {
        let mut store = PlayerStore::default();
        store.set_to_player(vec![
            track("a", "X", "One"),
            track("b", "X", "One"),
            track("c", "X", "One"),
        ]);
        store.apply_playback(Some(PlaybackState {
            device: Some(device()),
            is_playing: playing,
            progress_ms: Some(progress_ms),
            item: Some(track("b", "X", "One")),
            ..PlaybackState::default()
        }));
        store
    }

    #[test]
    fn test_no_device_rejects_every_action() {
        let mut store = store_with(true, 10_000);
        if let Some(state) = store.playback_state.as_mut() {
            state.device = None;
        }

        let actions = TransportAction::toolbar()
            .into_iter()
            .chain([TransportAction::Scrub(50.0)]);
        for action in actions {
            let err = plan(action, &store).unwrap_err();
            assert_eq!(err, TransportError::NoDevice, "{:?}", action);
            assert_eq!(err.to_string(), NO_DEVICES_MESSAGE);
        }

        // No snapshot at all behaves the same
        assert!(plan(TransportAction::Next, &PlayerStore::default()).is_err());
    }

    #[test]
    fn test_play_pause_respect_playing_flag() {
        let playing = store_with(true, 0);
        let paused = store_with(false, 0);

        assert!(plan(TransportAction::Play, &playing).unwrap().is_empty());
        assert_eq!(plan(TransportAction::Play, &paused).unwrap(), vec![PlayerCommand::Resume]);
        assert_eq!(plan(TransportAction::Pause, &playing).unwrap(), vec![PlayerCommand::Pause]);
        assert!(plan(TransportAction::Pause, &paused).unwrap().is_empty());
    }

    #[test]
    fn test_stop_and_eject() {
        let playing = store_with(true, 42_000);
        assert_eq!(
            plan(TransportAction::Stop, &playing).unwrap(),
            vec![PlayerCommand::Pause, PlayerCommand::Seek(0)]
        );
        assert!(plan(TransportAction::Stop, &store_with(false, 0)).unwrap().is_empty());

        assert_eq!(
            plan(TransportAction::Eject, &playing).unwrap(),
            vec![PlayerCommand::Pause, PlayerCommand::Seek(0), PlayerCommand::ClearQueue]
        );
        assert_eq!(
            plan(TransportAction::Eject, &store_with(false, 0)).unwrap(),
            vec![PlayerCommand::Seek(0), PlayerCommand::ClearQueue]
        );
    }

    #[test]
    fn test_previous_restarts_after_threshold() {
        let store = store_with(true, RESTART_THRESHOLD_MS);
        assert_eq!(
            plan(TransportAction::Previous, &store).unwrap(),
            vec![PlayerCommand::Seek(0)]
        );
    }

    #[test]
    fn test_previous_plays_from_item_before_current() {
        let store = store_with(true, 4_999);
        let cmds = plan(TransportAction::Previous, &store).unwrap();
        assert_eq!(
            cmds,
            vec![PlayerCommand::PlayUris(PlayOptions {
                uris: vec![
                    "spotify:track:a".into(),
                    "spotify:track:b".into(),
                    "spotify:track:c".into()
                ]
            })]
        );
    }

    #[test]
    fn test_previous_clamps_to_start() {
        let mut store = store_with(true, 0);
        if let Some(state) = store.playback_state.as_mut() {
            state.item = Some(track("a", "X", "One"));
        }
        let cmds = plan(TransportAction::Previous, &store).unwrap();
        assert!(matches!(&cmds[..], [PlayerCommand::PlayUris(o)] if o.uris.len() == 3));

        // Current item not in the queue: start from the top
        if let Some(state) = store.playback_state.as_mut() {
            state.item = Some(track("elsewhere", "X", "One"));
        }
        let cmds = plan(TransportAction::Previous, &store).unwrap();
        assert!(matches!(&cmds[..], [PlayerCommand::PlayUris(o)] if o.uris[0] == "spotify:track:a"));

        store.set_to_player(vec![]);
        assert!(plan(TransportAction::Previous, &store).unwrap().is_empty());
    }

    #[test]
    fn test_seek_steps_stay_in_bounds() {
        // duration is 200_000
        let near_end = store_with(true, 195_000);
        assert_eq!(
            plan(TransportAction::SeekForward, &near_end).unwrap(),
            vec![PlayerCommand::Seek(200_000)]
        );
        let near_start = store_with(true, 3_000);
        assert_eq!(
            plan(TransportAction::SeekBack, &near_start).unwrap(),
            vec![PlayerCommand::Seek(0)]
        );
        let middle = store_with(true, 60_000);
        assert_eq!(
            plan(TransportAction::SeekBack, &middle).unwrap(),
            vec![PlayerCommand::Seek(45_000)]
        );
        assert!(plan(TransportAction::SeekForward, &store_with(false, 0)).unwrap().is_empty());
    }

    #[test]
    fn test_repeat_toggles_between_off_and_track() {
        let mut store = store_with(true, 0);
        assert_eq!(
            plan(TransportAction::ToggleRepeat, &store).unwrap(),
            vec![PlayerCommand::SetRepeat(RepeatState::Track)]
        );
        for current in [RepeatState::Track, RepeatState::Context] {
            if let Some(state) = store.playback_state.as_mut() {
                state.repeat_state = current;
            }
            assert_eq!(
                plan(TransportAction::ToggleRepeat, &store).unwrap(),
                vec![PlayerCommand::SetRepeat(RepeatState::Off)]
            );
        }
    }

    #[test]
    fn test_shuffle_inverts_flag() {
        let mut store = store_with(false, 0);
        assert_eq!(
            plan(TransportAction::ToggleShuffle, &store).unwrap(),
            vec![PlayerCommand::SetShuffle(true)]
        );
        if let Some(state) = store.playback_state.as_mut() {
            state.shuffle_state = true;
        }
        assert_eq!(
            plan(TransportAction::ToggleShuffle, &store).unwrap(),
            vec![PlayerCommand::SetShuffle(false)]
        );
    }

    #[test]
    fn test_scrub_floors_percent_of_duration() {
        let store = store_with(false, 0);
        assert_eq!(
            plan(TransportAction::Scrub(12.5), &store).unwrap(),
            vec![PlayerCommand::Seek(25_000)]
        );
        assert_eq!(
            plan(TransportAction::Scrub(0.0004), &store).unwrap(),
            vec![PlayerCommand::Seek(0)]
        );
        assert_eq!(
            plan(TransportAction::Scrub(150.0), &store).unwrap(),
            vec![PlayerCommand::Seek(200_000)]
        );
    }

    #[test]
    fn test_disabled_buttons() {
        let playing = store_with(true, 0);
        let paused = store_with(false, 0);
        assert!(!button_enabled(TransportAction::Play, &playing));
        assert!(button_enabled(TransportAction::Play, &paused));
        assert!(!button_enabled(TransportAction::Stop, &paused));
        assert!(!button_enabled(TransportAction::SeekForward, &paused));
        assert!(button_enabled(TransportAction::Eject, &paused));
    }
}
