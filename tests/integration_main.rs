use ampify::app::config::{PersistentState, UserConfig};
use ampify::app::events::AppEvent;
use ampify::app::inputs::{self, SharedClient};
use ampify::app::playlist::{build_rows, PlaylistRow};
use ampify::app::store::{PlayerView, NO_DEVICES_MESSAGE};
use ampify::app::transport::{self, PlayerCommand, TransportAction};
use ampify::app::App;
use ampify::spotify::model::{Album, Artist, Episode, Show, Track};
use ampify::spotify::{
    Device, DeviceType, PlayOptions, PlayableItem, PlaybackClient, PlaybackState, RepeatState,
};
use ampify::ui::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Records every call instead of talking to Spotify
#[derive(Default)]
struct RecordingClient {
    calls: Mutex<Vec<String>>,
    devices: Vec<Device>,
    fail_play: bool,
    fail_pause: bool,
}

impl RecordingClient {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PlaybackClient for RecordingClient {
    fn play(&self, options: Option<PlayOptions>) -> Result<()> {
        match options {
            Some(o) => self.record(format!("play {}", o.uris.join(","))),
            None => self.record("play".to_string()),
        }
        if self.fail_play {
            anyhow::bail!("Player command failed: No active device found");
        }
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        self.record("pause".to_string());
        if self.fail_pause {
            anyhow::bail!("Spotify API error 502: Bad gateway");
        }
        Ok(())
    }

    fn seek(&self, position_ms: u64) -> Result<()> {
        self.record(format!("seek {}", position_ms));
        Ok(())
    }

    fn skip_to_next(&self) -> Result<()> {
        self.record("next".to_string());
        Ok(())
    }

    fn set_repeat(&self, state: RepeatState) -> Result<()> {
        self.record(format!("repeat {}", state.as_str()));
        Ok(())
    }

    fn set_shuffle(&self, state: bool) -> Result<()> {
        self.record(format!("shuffle {}", state));
        Ok(())
    }

    fn get_my_devices(&self) -> Result<Vec<Device>> {
        self.record("devices".to_string());
        Ok(self.devices.clone())
    }

    fn transfer_my_playback(&self, device_ids: Vec<String>) -> Result<()> {
        self.record(format!("transfer {}", device_ids.join(",")));
        Ok(())
    }

    fn get_playback_state(&self) -> Result<Option<PlaybackState>> {
        Ok(None)
    }

    fn get_items(&self, uri: &str) -> Result<Vec<PlayableItem>> {
        self.record(format!("items {}", uri));
        Ok(vec![track("t1", "Artist", "Album")])
    }
}

fn track(id: &str, artist: &str, album: &str) -> PlayableItem {
    PlayableItem::Track(Track {
        id: Some(id.to_string()),
        uri: format!("spotify:track:{id}"),
        name: format!("Song {id}"),
        duration_ms: 200_000,
        artists: vec![Artist {
            name: artist.to_string(),
        }],
        album: Album {
            name: album.to_string(),
        },
    })
}

fn episode(id: &str, show: &str) -> PlayableItem {
    PlayableItem::Episode(Episode {
        id: Some(id.to_string()),
        uri: format!("spotify:episode:{id}"),
        name: format!("Episode {id}"),
        duration_ms: 1_800_000,
        show: Show {
            name: show.to_string(),
        },
    })
}

fn device(id: &str, name: &str) -> Device {
    Device {
        id: Some(id.to_string()),
        name: name.to_string(),
        device_type: DeviceType::Computer,
        is_active: false,
    }
}

/// Helper to create a test app instance
fn create_test_app() -> App {
    App::new(
        &UserConfig::default(),
        &PersistentState::default(),
        Theme::default(),
    )
}

fn with_device(app: &mut App, playing: bool, progress_ms: u64, item: Option<PlayableItem>) {
    app.store.apply_playback(Some(PlaybackState {
        device: Some(device("dev-1", "Desk")),
        is_playing: playing,
        progress_ms: Some(progress_ms),
        item,
        ..PlaybackState::default()
    }));
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_app_initialization() {
    let app = create_test_app();
    assert!(app.is_running);
    assert_eq!(app.store.player_view, PlayerView::Individual);
    assert!(app.store.tracks_in_player.is_empty());
    assert!(app.store.error_message.is_none());
    assert!(!app.device_dialog.is_open());
}

#[test]
fn test_no_device_blocks_every_action() {
    let client = RecordingClient::default();
    let mut app = create_test_app();
    app.store.set_to_player(vec![track("a", "X", "One")]);

    for action in TransportAction::toolbar() {
        app.store.clear_error();
        let commands = app.transport(action);
        transport::execute(&client, &commands).unwrap();
        assert!(commands.is_empty(), "{:?} produced commands", action);
        assert_eq!(app.store.error_message.as_deref(), Some(NO_DEVICES_MESSAGE));
    }

    assert!(client.calls().is_empty());
    // Nothing was cleared either
    assert_eq!(app.store.tracks_in_player.len(), 1);
}

#[test]
fn test_transport_key_without_device_raises_error() {
    let client: SharedClient = Arc::new(RecordingClient::default());
    let (tx, _rx) = mpsc::channel(8);
    let mut app = create_test_app();

    inputs::handle_event(key(KeyCode::Char('x')), &mut app, &client, &tx);
    assert_eq!(app.store.error_message.as_deref(), Some(NO_DEVICES_MESSAGE));

    // The modal swallows the next key and Enter dismisses it
    inputs::handle_event(key(KeyCode::Enter), &mut app, &client, &tx);
    assert!(app.store.error_message.is_none());
}

#[test]
fn test_eject_pauses_rewinds_and_clears_queue() {
    let client = RecordingClient::default();
    let mut app = create_test_app();
    app.store
        .set_to_player(vec![track("a", "X", "One"), track("b", "X", "One")]);
    with_device(&mut app, true, 42_000, Some(track("a", "X", "One")));

    let commands = app.transport(TransportAction::Eject);
    transport::execute(&client, &commands).unwrap();

    assert_eq!(client.calls(), vec!["pause", "seek 0"]);
    assert!(app.store.tracks_in_player.is_empty());
}

#[test]
fn test_previous_restarts_or_steps_back() {
    let client = RecordingClient::default();
    let mut app = create_test_app();
    let queue = vec![
        track("a", "X", "One"),
        track("b", "X", "One"),
        track("c", "X", "One"),
    ];
    app.store.set_to_player(queue.clone());

    // Far into the track: rewind
    with_device(&mut app, true, 30_000, Some(queue[1].clone()));
    let commands = app.transport(TransportAction::Previous);
    transport::execute(&client, &commands).unwrap();

    // Early in the track: play from the previous item to the end
    with_device(&mut app, true, 1_000, Some(queue[1].clone()));
    let commands = app.transport(TransportAction::Previous);
    transport::execute(&client, &commands).unwrap();

    assert_eq!(
        client.calls(),
        vec![
            "seek 0",
            "play spotify:track:a,spotify:track:b,spotify:track:c"
        ]
    );
}

#[test]
fn test_seek_and_scrub_stay_in_bounds() {
    let client = RecordingClient::default();
    let mut app = create_test_app();
    with_device(&mut app, true, 195_000, Some(track("a", "X", "One")));

    let commands = app.transport(TransportAction::SeekForward);
    transport::execute(&client, &commands).unwrap();

    with_device(&mut app, true, 4_000, Some(track("a", "X", "One")));
    let commands = app.transport(TransportAction::SeekBack);
    transport::execute(&client, &commands).unwrap();

    let commands = app.transport(TransportAction::Scrub(50.0));
    transport::execute(&client, &commands).unwrap();

    assert_eq!(client.calls(), vec!["seek 200000", "seek 0", "seek 100000"]);
}

#[test]
fn test_repeat_and_shuffle_toggle_from_snapshot() {
    let client = RecordingClient::default();
    let mut app = create_test_app();
    app.store.apply_playback(Some(PlaybackState {
        device: Some(device("dev-1", "Desk")),
        repeat_state: RepeatState::Context,
        shuffle_state: true,
        ..PlaybackState::default()
    }));

    let mut commands = app.transport(TransportAction::ToggleRepeat);
    commands.extend(app.transport(TransportAction::ToggleShuffle));
    transport::execute(&client, &commands).unwrap();

    assert_eq!(client.calls(), vec!["repeat off", "shuffle false"]);
}

#[test]
fn test_click_highlighted_row_plays_rest_of_queue() {
    let mut app = create_test_app();
    app.store.set_to_player(vec![
        track("a", "X", "One"),
        track("b", "X", "One"),
        episode("c", "Pod"),
    ]);
    with_device(&mut app, false, 0, None);

    // First click on a new row only highlights it
    assert_eq!(app.click_row(1), None);
    assert_eq!(app.playlist.highlighted, 1);

    let options = app.click_row(1).expect("second click plays");
    assert_eq!(
        options.uris,
        vec!["spotify:track:b".to_string(), "spotify:episode:c".to_string()]
    );
}

#[test]
fn test_click_to_play_without_device_reports_error() {
    let mut app = create_test_app();
    app.store.set_to_player(vec![track("a", "X", "One")]);

    assert_eq!(app.click_row(0), None);
    assert_eq!(app.click_row(0), None);
    assert_eq!(app.store.error_message.as_deref(), Some(NO_DEVICES_MESSAGE));
}

#[test]
fn test_group_view_headers_follow_label_changes() {
    let queue = vec![
        track("a", "X", "One"),
        track("b", "X", "One"),
        episode("c", "Pod"),
        track("d", "X", "One"),
    ];
    let rows = build_rows(&queue, PlayerView::Group, 0, Some(&queue[2]));

    let headers: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, r)| matches!(r, PlaylistRow::Header(_)))
        .map(|(i, _)| i)
        .collect();
    // Header before a, c and d; b shares a's label
    assert_eq!(headers, vec![0, 3, 5]);

    let playing: Vec<usize> = rows
        .iter()
        .filter_map(|r| match r {
            PlaylistRow::Item(item) if item.now_playing => Some(item.index),
            _ => None,
        })
        .collect();
    assert_eq!(playing, vec![2]);
}

#[test]
fn test_device_dialog_transfers_to_first_device() {
    let mut app = create_test_app();
    let generation = app.open_devices();
    app.device_dialog.devices_loaded(
        generation,
        Ok(vec![device("first", "Laptop"), device("second", "Phone")]),
    );

    // Nothing selected yet: Transfer is disabled
    assert!(!app.device_dialog.can_confirm());
    assert_eq!(app.device_dialog.confirm(), None);
    assert!(app.device_dialog.is_open());

    app.device_dialog.select(0);
    assert_eq!(app.device_dialog.confirm(), Some("first".to_string()));
    assert!(!app.device_dialog.is_open());
}

#[test]
fn test_stale_device_list_is_dropped() {
    let mut app = create_test_app();
    let first = app.open_devices();
    app.device_dialog.cancel();
    let second = app.open_devices();

    app.device_dialog
        .devices_loaded(first, Ok(vec![device("old", "Old")]));
    assert!(app.device_dialog.devices().is_empty());

    app.device_dialog
        .devices_loaded(second, Ok(vec![device("new", "New")]));
    assert_eq!(app.device_dialog.devices().len(), 1);
    assert_eq!(app.device_dialog.devices()[0].name, "New");
}

#[tokio::test]
async fn test_failed_play_surfaces_no_devices_modal() {
    let client: SharedClient = Arc::new(RecordingClient {
        fail_play: true,
        ..RecordingClient::default()
    });
    let (tx, mut rx) = mpsc::channel(8);

    inputs::dispatch::spawn_play(
        &client,
        &tx,
        PlayOptions {
            uris: vec!["spotify:track:a".to_string()],
        },
    );

    match rx.recv().await {
        Some(AppEvent::CommandFailed { message, modal }) => {
            assert!(modal);
            assert_eq!(message, NO_DEVICES_MESSAGE);
        }
        _ => panic!("expected a command failure"),
    }
}

#[tokio::test]
async fn test_device_fetch_reports_generation() {
    let client: SharedClient = Arc::new(RecordingClient {
        devices: vec![device("a", "Laptop")],
        ..RecordingClient::default()
    });
    let (tx, mut rx) = mpsc::channel(8);

    inputs::dispatch::spawn_device_fetch(&client, &tx, 7);

    match rx.recv().await {
        Some(AppEvent::DevicesLoaded(generation, Ok(devices))) => {
            assert_eq!(generation, 7);
            assert_eq!(devices.len(), 1);
        }
        _ => panic!("expected a device list"),
    }
}

#[tokio::test]
async fn test_failed_command_stops_the_batch_and_toasts() {
    let recorder = Arc::new(RecordingClient {
        fail_pause: true,
        ..RecordingClient::default()
    });
    let client: SharedClient = recorder.clone();
    let (tx, mut rx) = mpsc::channel(8);

    inputs::dispatch::spawn_commands(
        &client,
        &tx,
        vec![PlayerCommand::Pause, PlayerCommand::Seek(0)],
    );

    match rx.recv().await {
        Some(AppEvent::CommandFailed { message, modal }) => {
            assert!(!modal);
            assert!(message.contains("Bad gateway"), "{message}");
        }
        _ => panic!("expected a command failure"),
    }
    // The refresh snapshot follows the failure
    assert!(matches!(rx.recv().await, Some(AppEvent::PlaybackUpdate(None))));

    assert_eq!(recorder.calls(), vec!["pause"]);
}
