use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;

/// Deck palette, editable in `~/.config/ampify/theme.toml`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub background: Color,
    pub frame: Color,
    pub text: Color,
    pub muted: Color,
    /// Group headers and field labels
    pub label: Color,
    /// Highlighted playlist row
    pub selection_fg: Color,
    pub selection_bg: Color,
    /// Now-playing row and slider fill
    pub playing: Color,
    pub button: Color,
    pub button_active: Color,
    pub error: Color,
}

impl Default for Theme {
    /// Classic skin: green LCD text on black
    fn default() -> Self {
        Self {
            background: Color::Rgb(0, 0, 0),
            frame: Color::Rgb(116, 116, 140),
            text: Color::Rgb(0, 226, 0),
            muted: Color::Rgb(0, 120, 0),
            label: Color::Rgb(202, 202, 212),
            selection_fg: Color::Rgb(255, 255, 255),
            selection_bg: Color::Rgb(0, 0, 198),
            playing: Color::Rgb(255, 255, 255),
            button: Color::Rgb(189, 206, 214),
            button_active: Color::Rgb(248, 200, 56),
            error: Color::Rgb(255, 96, 96),
        }
    }
}

// Helper for serialization/deserialization
#[derive(Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

pub fn get_theme_path() -> std::path::PathBuf {
    crate::app::config::AppConfig::get_config_dir().join("theme.toml")
}

pub fn load_current_theme() -> Theme {
    let path = get_theme_path();

    if path.exists() {
        if let Ok(content) = fs::read_to_string(&path) {
            // Nested [theme] table first, then a flat file
            if let Ok(wrapper) = toml::from_str::<ThemeFile>(&content) {
                return wrapper.theme;
            }
            if let Ok(theme) = toml::from_str::<Theme>(&content) {
                return theme;
            }
            tracing::warn!(path = %path.display(), "theme.toml is invalid, using the classic skin");
        }
    } else {
        // Auto-create default theme file if it doesn't exist
        let wrapper = ThemeFile {
            theme: Theme::default(),
        };
        if let Ok(toml_str) = toml::to_string_pretty(&wrapper) {
            let _ = fs::write(&path, toml_str);
        }
        return wrapper.theme;
    }

    Theme::default()
}
