use crate::spotify::client::PlaybackClient;
use crate::spotify::error::ApiError;
use crate::spotify::model::{
    Album, Device, DevicesResponse, Episode, PlayOptions, PlayableItem, PlaybackState,
    RepeatState, Show, Track,
};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::RETRY_AFTER;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Kind of collection a URI points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Playlist,
    Album,
    Show,
}

/// Parses `spotify:playlist:<id>` or an `open.spotify.com/<kind>/<id>` link.
pub fn parse_collection_uri(uri: &str) -> Result<(CollectionKind, String), ApiError> {
    let uri = uri.trim();
    let invalid = || ApiError::InvalidUri(uri.to_string());

    let (kind, id) = if let Some(rest) = uri.strip_prefix("spotify:") {
        let mut parts = rest.split(':');
        match (parts.next(), parts.next()) {
            (Some(kind), Some(id)) => (kind, id),
            _ => return Err(invalid()),
        }
    } else if let Some(pos) = uri.find("open.spotify.com/") {
        let path = &uri[pos + "open.spotify.com/".len()..];
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path
            .split('/')
            .filter(|s| !s.is_empty() && !s.starts_with("intl-"));
        match (segments.next(), segments.next()) {
            (Some(kind), Some(id)) => (kind, id),
            _ => return Err(invalid()),
        }
    } else {
        return Err(invalid());
    };

    if id.is_empty() {
        return Err(invalid());
    }
    let kind = match kind {
        "playlist" => CollectionKind::Playlist,
        "album" => CollectionKind::Album,
        "show" => CollectionKind::Show,
        _ => return Err(invalid()),
    };
    Ok((kind, id.to_string()))
}

#[derive(Deserialize)]
struct Page<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
    next: Option<String>,
}

#[derive(Deserialize)]
struct PlaylistEntry {
    track: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct SimplifiedTrack {
    id: Option<String>,
    uri: String,
    name: String,
    duration_ms: u64,
    #[serde(default)]
    artists: Vec<crate::spotify::model::Artist>,
}

#[derive(Deserialize)]
struct FullAlbum {
    name: String,
    tracks: Page<SimplifiedTrack>,
}

#[derive(Deserialize)]
struct SimplifiedEpisode {
    id: Option<String>,
    uri: String,
    name: String,
    duration_ms: u64,
}

#[derive(Deserialize)]
struct FullShow {
    name: String,
    episodes: Page<Option<SimplifiedEpisode>>,
}

/// Blocking Spotify Web API client authenticated with a bearer token
pub struct WebApiClient {
    http: Client,
    base_url: String,
    token: String,
}

impl WebApiClient {
    /// Builds the underlying blocking client. Must not be called from
    /// inside an async task; use `spawn_blocking`.
    pub fn new(base_url: &str, token: &str) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!("ampify/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        };
        self.http.request(method, url).bearer_auth(&self.token)
    }

    fn send(&self, req: RequestBuilder, player_endpoint: bool) -> Result<Response, ApiError> {
        let resp = req.send()?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let retry_after = resp
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        let body = resp.text().unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
            .unwrap_or(body);

        tracing::debug!(code = status.as_u16(), %message, "Spotify request failed");

        if status == StatusCode::NOT_FOUND && !player_endpoint {
            return Err(ApiError::Status {
                code: 404,
                message,
            });
        }
        Err(ApiError::from_status(status.as_u16(), message, retry_after))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send(self.request(Method::GET, path), false)?;
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fire a `/me/player` command that answers with an empty body
    fn command(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(), ApiError> {
        let req = self.request(method, path);
        // Spotify answers 411 to bodiless PUT/POST without a Content-Length
        let req = match body {
            Some(json) => req.json(&json),
            None => req.body(Vec::<u8>::new()),
        };
        self.send(req, true)?;
        tracing::debug!(path, "player command sent");
        Ok(())
    }

    fn collect_pages<T: DeserializeOwned>(
        &self,
        first: Page<T>,
        out: &mut Vec<T>,
    ) -> Result<(), ApiError> {
        let mut next = first.next;
        out.extend(first.items);
        while let Some(url) = next {
            let page: Page<T> = self.get_json(&url)?;
            out.extend(page.items);
            next = page.next;
        }
        Ok(())
    }

    fn playlist_items(&self, id: &str) -> Result<Vec<PlayableItem>, ApiError> {
        let first: Page<PlaylistEntry> = self.get_json(&format!(
            "/playlists/{id}/tracks?limit=100&additional_types=track,episode"
        ))?;
        let mut entries = Vec::new();
        self.collect_pages(first, &mut entries)?;

        Ok(entries
            .into_iter()
            .filter_map(|e| e.track)
            .filter_map(|v| match serde_json::from_value::<PlayableItem>(v) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unplayable playlist entry");
                    None
                }
            })
            .collect())
    }

    fn album_items(&self, id: &str) -> Result<Vec<PlayableItem>, ApiError> {
        let album: FullAlbum = self.get_json(&format!("/albums/{id}"))?;
        let album_name = album.name;
        let mut tracks = Vec::new();
        self.collect_pages(album.tracks, &mut tracks)?;

        Ok(tracks
            .into_iter()
            .map(|t| {
                PlayableItem::Track(Track {
                    id: t.id,
                    uri: t.uri,
                    name: t.name,
                    duration_ms: t.duration_ms,
                    artists: t.artists,
                    album: Album {
                        name: album_name.clone(),
                    },
                })
            })
            .collect())
    }

    fn show_items(&self, id: &str) -> Result<Vec<PlayableItem>, ApiError> {
        let show: FullShow = self.get_json(&format!("/shows/{id}"))?;
        let show_name = show.name;
        let mut episodes = Vec::new();
        self.collect_pages(show.episodes, &mut episodes)?;

        Ok(episodes
            .into_iter()
            .flatten()
            .map(|e| {
                PlayableItem::Episode(Episode {
                    id: e.id,
                    uri: e.uri,
                    name: e.name,
                    duration_ms: e.duration_ms,
                    show: Show {
                        name: show_name.clone(),
                    },
                })
            })
            .collect())
    }
}

impl PlaybackClient for WebApiClient {
    fn play(&self, options: Option<PlayOptions>) -> anyhow::Result<()> {
        let body = options.map(serde_json::to_value).transpose()?;
        Ok(self.command(Method::PUT, "/me/player/play", body)?)
    }

    fn pause(&self) -> anyhow::Result<()> {
        Ok(self.command(Method::PUT, "/me/player/pause", None)?)
    }

    fn seek(&self, position_ms: u64) -> anyhow::Result<()> {
        Ok(self.command(
            Method::PUT,
            &format!("/me/player/seek?position_ms={position_ms}"),
            None,
        )?)
    }

    fn skip_to_next(&self) -> anyhow::Result<()> {
        Ok(self.command(Method::POST, "/me/player/next", None)?)
    }

    fn set_repeat(&self, state: RepeatState) -> anyhow::Result<()> {
        Ok(self.command(
            Method::PUT,
            &format!("/me/player/repeat?state={}", state.as_str()),
            None,
        )?)
    }

    fn set_shuffle(&self, state: bool) -> anyhow::Result<()> {
        Ok(self.command(
            Method::PUT,
            &format!("/me/player/shuffle?state={state}"),
            None,
        )?)
    }

    fn get_my_devices(&self) -> anyhow::Result<Vec<Device>> {
        let resp: DevicesResponse = self.get_json("/me/player/devices")?;
        Ok(resp.devices)
    }

    fn transfer_my_playback(&self, device_ids: Vec<String>) -> anyhow::Result<()> {
        let body = serde_json::json!({ "device_ids": device_ids });
        Ok(self.command(Method::PUT, "/me/player", Some(body))?)
    }

    fn get_playback_state(&self) -> anyhow::Result<Option<PlaybackState>> {
        let resp = self.send(
            self.request(Method::GET, "/me/player?additional_types=episode"),
            true,
        )?;
        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let body = resp.text()?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&body)?))
    }

    fn get_items(&self, uri: &str) -> anyhow::Result<Vec<PlayableItem>> {
        let (kind, id) = parse_collection_uri(uri)?;
        tracing::info!(?kind, %id, "loading collection into the player");
        let items = match kind {
            CollectionKind::Playlist => self.playlist_items(&id)?,
            CollectionKind::Album => self.album_items(&id)?,
            CollectionKind::Show => self.show_items(&id)?,
        };
        Ok(items)
    }
}
