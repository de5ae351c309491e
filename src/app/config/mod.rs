use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod persistence;
pub mod user;

pub use persistence::PersistentState;
pub use user::UserConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub struct AppConfig;

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let xdg_dir = home.join(".config").join("ampify");

        // Ensure it exists
        if !xdg_dir.exists() {
            let _ = std::fs::create_dir_all(&xdg_dir);
        }

        xdg_dir
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    pub fn get_state_path() -> PathBuf {
        Self::get_config_dir().join("state.toml")
    }

    pub fn get_log_dir() -> PathBuf {
        Self::get_config_dir().join("logs")
    }

    /// Read config.toml, writing the defaults when it is missing
    pub fn load_user_config(path: &Path) -> Result<UserConfig, ConfigError> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            let c = UserConfig::default();
            fs::write(path, toml::to_string_pretty(&c)?)?;
            Ok(c)
        }
    }

    pub fn load_state(path: &Path) -> Result<PersistentState, ConfigError> {
        if !path.exists() {
            return Ok(PersistentState::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load both; a broken file falls back to defaults
    pub fn load() -> (UserConfig, PersistentState) {
        let config_path = Self::get_config_path();
        let state_path = Self::get_state_path();

        let user_config = Self::load_user_config(&config_path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, path = %config_path.display(), "using default config");
            UserConfig::default()
        });
        let state = Self::load_state(&state_path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, path = %state_path.display(), "using default state");
            PersistentState::default()
        });

        (user_config, state)
    }

    /// Default config.toml for `--generate-config`
    pub fn default_config_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&UserConfig::default())?)
    }
}
