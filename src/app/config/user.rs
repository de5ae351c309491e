use crate::spotify::web_api::DEFAULT_API_BASE_URL;
use serde::{Deserialize, Serialize};

/// User-editable configuration (ReadOnly by App after load)
/// stored in `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    /// Bearer token with the `user-read-playback-state` and
    /// `user-modify-playback-state` scopes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default)]
    pub keys: crate::app::keys::KeyConfig,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_poll_interval_ms() -> u64 {
    1000
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            api_base_url: default_api_base_url(),
            poll_interval_ms: default_poll_interval_ms(),
            keys: crate::app::keys::KeyConfig::default(),
        }
    }
}

impl UserConfig {
    /// CLI flag, then `SPOTIFY_ACCESS_TOKEN`, then config.toml
    pub fn resolve_token(&self, cli: Option<&str>, env: Option<&str>) -> Option<String> {
        cli.or(env)
            .or(self.access_token.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }
}
