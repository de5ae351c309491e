//! Playlist rows for the two layouts and the click-to-play highlight.
//!
//! Rows are derived fresh on every draw from the store's queue; the only
//! state kept between draws is the highlighted index.

use crate::app::store::PlayerView;
use crate::spotify::{PlayableItem, PlayOptions};

/// Two-part descriptive label of an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackInfo {
    Track { artists: String, album: String },
    Episode { show: String },
}

impl TrackInfo {
    pub fn of(item: &PlayableItem) -> Self {
        match item {
            PlayableItem::Track(t) => TrackInfo::Track {
                artists: t.artist_names(),
                album: t.album.name.clone(),
            },
            PlayableItem::Episode(e) => TrackInfo::Episode {
                show: e.show.name.clone(),
            },
        }
    }

    /// Text of a group header
    pub fn header(&self) -> String {
        match self {
            TrackInfo::Track { artists, album } => format!("{} / {}", artists, album),
            TrackInfo::Episode { show } => show.clone(),
        }
    }

    /// (primary, secondary) columns of an individual row
    pub fn columns(&self) -> (&str, Option<&str>) {
        match self {
            TrackInfo::Track { artists, album } => (artists.as_str(), Some(album.as_str())),
            TrackInfo::Episode { show } => (show.as_str(), None),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    /// Position in the queue
    pub index: usize,
    pub duration: String,
    pub glyph: &'static str,
    pub name: String,
    /// Omitted inside groups
    pub info: Option<TrackInfo>,
    pub indented: bool,
    pub now_playing: bool,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaylistRow {
    Header(TrackInfo),
    Item(ItemRow),
}

impl PlaylistRow {
    pub fn item_index(&self) -> Option<usize> {
        match self {
            PlaylistRow::Item(row) => Some(row.index),
            PlaylistRow::Header(_) => None,
        }
    }
}

pub fn glyph(item: &PlayableItem) -> &'static str {
    if item.is_track() {
        "🎵"
    } else {
        "📝"
    }
}

/// Formats milliseconds as `m:ss`
pub fn format_ms(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub fn build_rows(
    queue: &[PlayableItem],
    view: PlayerView,
    highlighted: usize,
    now_playing: Option<&PlayableItem>,
) -> Vec<PlaylistRow> {
    let mut rows = Vec::with_capacity(queue.len() * 2);
    let mut previous: Option<TrackInfo> = None;

    for (i, item) in queue.iter().enumerate() {
        let info = TrackInfo::of(item);

        if view == PlayerView::Group && previous.as_ref() != Some(&info) {
            rows.push(PlaylistRow::Header(info.clone()));
        }

        rows.push(PlaylistRow::Item(ItemRow {
            index: i,
            duration: format_ms(item.duration_ms()),
            glyph: glyph(item),
            name: item.name().to_string(),
            info: match view {
                PlayerView::Individual => Some(info.clone()),
                PlayerView::Group => None,
            },
            indented: view == PlayerView::Group,
            now_playing: now_playing.is_some_and(|np| np.same_id(item)),
            highlighted: i == highlighted,
        }));

        previous = Some(info);
    }

    rows
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Highlight,
    /// Second click on the highlighted row: play from here to the end
    PlayFrom(usize),
}

/// Per-view selection state
#[derive(Debug, Clone, Default)]
pub struct PlaylistState {
    pub highlighted: usize,
}

impl PlaylistState {
    pub fn click(&mut self, index: usize) -> ClickOutcome {
        let outcome = if index == self.highlighted {
            ClickOutcome::PlayFrom(index)
        } else {
            ClickOutcome::Highlight
        };
        self.highlighted = index;
        outcome
    }

    pub fn move_down(&mut self, len: usize) {
        if len > 0 {
            self.highlighted = (self.highlighted + 1).min(len - 1);
        }
    }

    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }
}

/// `play` payload for "this item and everything after it"
pub fn play_from(queue: &[PlayableItem], index: usize) -> Option<PlayOptions> {
    queue
        .get(index..)
        .filter(|rest| !rest.is_empty())
        .map(PlayOptions::from_items)
}
