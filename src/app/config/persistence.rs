use crate::app::store::PlayerView;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::ConfigError;

/// Automatically saved session state
/// stored in `state.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistentState {
    #[serde(default)]
    pub player_view: PlayerView,
}

impl PersistentState {
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn save(&self) {
        let path = super::AppConfig::get_state_path();
        if let Err(e) = self.save_to(&path) {
            tracing::warn!(error = %e, path = %path.display(), "could not save state");
        }
    }
}
