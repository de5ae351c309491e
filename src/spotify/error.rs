use thiserror::Error;

/// Errors returned by the Web API client
#[derive(Error, Debug)]
pub enum ApiError {
    /// Token missing, expired or lacking the playback scopes
    #[error("Spotify rejected the access token: {0}")]
    Unauthorized(String),

    /// Player endpoints answer 404 when no Connect device is active
    #[error("No active Spotify device")]
    NoActiveDevice,

    #[error("Rate limited by Spotify, retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Spotify API error (HTTP {code}): {message}")]
    Status { code: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Not a playlist/album/show URI or open.spotify.com link
    #[error("Unsupported Spotify URI: {0}")]
    InvalidUri(String),
}

impl ApiError {
    /// Maps a non-success status from a `/me/player` endpoint
    pub fn from_status(code: u16, message: impl Into<String>, retry_after_secs: Option<u64>) -> Self {
        match code {
            401 | 403 => Self::Unauthorized(message.into()),
            404 => Self::NoActiveDevice,
            429 => Self::RateLimited {
                retry_after_secs: retry_after_secs.unwrap_or(1),
            },
            _ => Self::Status {
                code,
                message: message.into(),
            },
        }
    }
}
