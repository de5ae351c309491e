use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Deck regions, top to bottom
pub struct DeckLayout {
    pub title_area: Rect,
    pub playlist_area: Rect,
    pub info_area: Rect,
    pub slider_area: Rect,
    pub toolbar_area: Rect,
    pub footer_area: Rect,
}

pub fn get_deck_layout(area: Rect) -> DeckLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(3),    // Playlist
            Constraint::Length(1), // Now playing
            Constraint::Length(1), // Slider
            Constraint::Length(1), // Toolbar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    DeckLayout {
        title_area: chunks[0],
        playlist_area: chunks[1],
        info_area: chunks[2],
        slider_area: chunks[3],
        toolbar_area: chunks[4],
        footer_area: chunks[5],
    }
}

/// Centered popup rectangle, clipped to the screen
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
