use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Key bindings, overridable from the `[keys]` table of config.toml.
/// Transport defaults follow the classic z/x/c/v/b layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    // Global
    pub quit: String,
    pub toggle_keyhints: String,
    pub toggle_view: String,
    pub devices: String,
    pub load: String,

    // Transport
    pub previous: String,
    pub play: String,
    pub pause: String,
    pub stop: String,
    pub next: String,
    pub eject: String,
    pub repeat: String,
    pub shuffle: String,
    pub seek_forward: String,
    pub seek_backward: String,

    // Navigation (Shared)
    pub nav_up: String,
    pub nav_up_alt: String,
    pub nav_down: String,
    pub nav_down_alt: String,
    pub activate: String,
    pub back: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            toggle_keyhints: "?".to_string(),
            toggle_view: "g".to_string(),
            devices: "d".to_string(),
            load: "o".to_string(),

            previous: "z".to_string(),
            play: "x".to_string(),
            pause: "c".to_string(),
            stop: "v".to_string(),
            next: "b".to_string(),
            eject: "e".to_string(),
            repeat: "r".to_string(),
            shuffle: "s".to_string(),
            seek_forward: "Right".to_string(),
            seek_backward: "Left".to_string(),

            nav_up: "k".to_string(),
            nav_up_alt: "Up".to_string(),
            nav_down: "j".to_string(),
            nav_down_alt: "Down".to_string(),
            activate: "Enter".to_string(),
            back: "Esc".to_string(),
        }
    }
}

impl KeyConfig {
    pub fn matches(&self, event: KeyEvent, key_str: &str) -> bool {
        match key_str {
            "Space" => event.code == KeyCode::Char(' '),
            "Enter" => event.code == KeyCode::Enter,
            "Backspace" => event.code == KeyCode::Backspace,
            "Esc" => event.code == KeyCode::Esc,
            "Tab" => event.code == KeyCode::Tab,
            "BackTab" => event.code == KeyCode::BackTab,
            "Up" => event.code == KeyCode::Up,
            "Down" => event.code == KeyCode::Down,
            "Left" => event.code == KeyCode::Left,
            "Right" => event.code == KeyCode::Right,
            s if s.chars().count() == 1 => {
                if let Some(ch) = s.chars().next() {
                    // Check for shift modifier if char is uppercase
                    if ch.is_uppercase() {
                        event.code == KeyCode::Char(ch)
                            || (event.code == KeyCode::Char(ch.to_ascii_lowercase())
                                && event.modifiers.contains(KeyModifiers::SHIFT))
                    } else {
                        event.code == KeyCode::Char(ch)
                    }
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    pub fn nav_up(&self, event: KeyEvent) -> bool {
        self.matches(event, &self.nav_up) || self.matches(event, &self.nav_up_alt)
    }

    pub fn nav_down(&self, event: KeyEvent) -> bool {
        self.matches(event, &self.nav_down) || self.matches(event, &self.nav_down_alt)
    }

    // Helper for UI display
    pub fn display(&self, key_str: &str) -> String {
        match key_str {
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "BackTab" => "S-Tab".to_string(),
            "Backspace" => "Bksp".to_string(),
            _ => key_str.to_string(),
        }
    }
}

/// Digit keys commit the slider at `n × 10 %`
pub fn scrub_percent(event: KeyEvent) -> Option<f64> {
    match event.code {
        KeyCode::Char(c) if c.is_ascii_digit() => c.to_digit(10).map(|d| d as f64 * 10.0),
        _ => None,
    }
}
