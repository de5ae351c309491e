//! Web API response objects, trimmed to the fields the player reads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// `None` for local files
    #[serde(default)]
    pub id: Option<String>,
    pub uri: String,
    pub name: String,
    pub duration_ms: u64,
    #[serde(default)]
    pub artists: Vec<Artist>,
    pub album: Album,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    #[serde(default)]
    pub id: Option<String>,
    pub uri: String,
    pub name: String,
    pub duration_ms: u64,
    pub show: Show,
}

/// A track or an episode, tagged by the API's `type` field 🎵
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlayableItem {
    Track(Track),
    Episode(Episode),
}

impl PlayableItem {
    pub fn id(&self) -> Option<&str> {
        match self {
            PlayableItem::Track(t) => t.id.as_deref(),
            PlayableItem::Episode(e) => e.id.as_deref(),
        }
    }

    pub fn uri(&self) -> &str {
        match self {
            PlayableItem::Track(t) => &t.uri,
            PlayableItem::Episode(e) => &e.uri,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PlayableItem::Track(t) => &t.name,
            PlayableItem::Episode(e) => &e.name,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        match self {
            PlayableItem::Track(t) => t.duration_ms,
            PlayableItem::Episode(e) => e.duration_ms,
        }
    }

    pub fn is_track(&self) -> bool {
        matches!(self, PlayableItem::Track(_))
    }

    /// Identity comparison used for the "now playing" marker.
    /// Items without an id never match anything.
    pub fn same_id(&self, other: &PlayableItem) -> bool {
        matches!((self.id(), other.id()), (Some(a), Some(b)) if a == b)
    }
}

impl Track {
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatState {
    #[default]
    Off,
    Track,
    Context,
}

impl RepeatState {
    /// Value of the `state` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatState::Off => "off",
            RepeatState::Track => "track",
            RepeatState::Context => "context",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    Computer,
    Smartphone,
    Speaker,
    #[serde(other)]
    Other,
}

impl DeviceType {
    pub fn glyph(&self) -> &'static str {
        match self {
            DeviceType::Computer => "🖥️",
            DeviceType::Smartphone => "📱",
            DeviceType::Speaker => "🔊",
            DeviceType::Other => "?",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DevicesResponse {
    #[serde(default)]
    pub devices: Vec<Device>,
}

/// Snapshot returned by `GET /me/player`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    #[serde(default)]
    pub device: Option<Device>,
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default)]
    pub progress_ms: Option<u64>,
    #[serde(default)]
    pub shuffle_state: bool,
    #[serde(default)]
    pub repeat_state: RepeatState,
    #[serde(default)]
    pub item: Option<PlayableItem>,
}

/// Body of `PUT /me/player/play`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayOptions {
    pub uris: Vec<String>,
}

impl PlayOptions {
    pub fn from_items(items: &[PlayableItem]) -> Self {
        Self {
            uris: items.iter().map(|i| i.uri().to_string()).collect(),
        }
    }
}
