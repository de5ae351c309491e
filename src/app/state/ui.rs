use crate::app::transport::TransportAction;
use ratatui::layout::{Position, Rect};
use std::time::Instant;

/// Generic Input Popup Mode 📝
#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    /// Playlist / album / show URI to load into the player
    LoadUri,
}

/// Generic Input Popup State 📝
#[derive(Debug, Clone)]
pub struct InputState {
    pub mode: InputMode,
    pub title: String,
    pub value: String,
}

impl InputState {
    pub fn new(mode: InputMode, title: &str, initial_value: &str) -> Self {
        Self {
            mode,
            title: title.to_string(),
            value: initial_value.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub start_time: Instant,
    pub deadline: Instant,
}

/// Buttons of the device dialog footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButton {
    Cancel,
    Transfer,
}

/// Clickable regions recorded by the last draw 🖱️
#[derive(Debug, Clone, Default)]
pub struct ClickTargets {
    /// Screen row → queue index; group headers are absent
    pub playlist_rows: Vec<(Rect, usize)>,
    pub slider: Option<Rect>,
    pub toolbar: Vec<(Rect, TransportAction)>,
    pub device_rows: Vec<(Rect, usize)>,
    pub dialog_buttons: Vec<(Rect, DialogButton)>,
}

impl ClickTargets {
    pub fn clear(&mut self) {
        self.playlist_rows.clear();
        self.slider = None;
        self.toolbar.clear();
        self.device_rows.clear();
        self.dialog_buttons.clear();
    }

    pub fn playlist_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.playlist_rows
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, index)| *index)
    }

    /// Percentage along the slider, when the click landed on it
    pub fn slider_percent_at(&self, column: u16, row: u16) -> Option<f64> {
        let rect = self.slider?;
        if !rect.contains(Position::new(column, row)) || rect.width == 0 {
            return None;
        }
        let offset = (column - rect.x) as f64;
        let span = rect.width.saturating_sub(1).max(1) as f64;
        Some((offset / span * 100.0).clamp(0.0, 100.0))
    }

    pub fn toolbar_at(&self, column: u16, row: u16) -> Option<TransportAction> {
        let pos = Position::new(column, row);
        self.toolbar
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, action)| *action)
    }

    pub fn device_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.device_rows
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, index)| *index)
    }

    pub fn dialog_button_at(&self, column: u16, row: u16) -> Option<DialogButton> {
        let pos = Position::new(column, row);
        self.dialog_buttons
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, button)| *button)
    }
}
