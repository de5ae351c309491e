pub mod layout;
pub mod theme;
pub mod utils;
pub mod widgets;

pub use theme::Theme;

use crate::app::store::PlayerView;
use crate::app::App;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Click targets always describe the frame on screen
    app.click_targets.clear();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    let deck = layout::get_deck_layout(area);

    render_title(f, deck.title_area, app);
    widgets::playlist::render(f, deck.playlist_area, app);
    widgets::transport::render_info(f, deck.info_area, app);
    widgets::transport::render_slider(f, deck.slider_area, app);
    widgets::transport::render_toolbar(f, deck.toolbar_area, app);

    if !app.show_keyhints {
        let theme = &app.theme;
        let hint = Line::from(vec![
            Span::styled(
                format!(" {} ", app.keys.display(&app.keys.toggle_keyhints)),
                Style::default().fg(theme.muted).add_modifier(Modifier::BOLD),
            ),
            Span::styled("keys ", Style::default().fg(theme.muted)),
        ]);
        f.render_widget(
            Paragraph::new(hint).alignment(Alignment::Right),
            deck.footer_area,
        );
    }

    widgets::popups::render(f, app);
}

fn render_title(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let theme = &app.theme;
    let view = match app.store.player_view {
        PlayerView::Individual => "individual",
        PlayerView::Group => "group",
    };
    let device = app
        .store
        .current_device()
        .map(|d| format!("{} {}", d.device_type.glyph(), d.name))
        .unwrap_or_else(|| "no device".to_string());

    let title = Line::from(vec![
        Span::styled(
            " AMPIFY ",
            Style::default()
                .fg(theme.background)
                .bg(theme.label)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} · {} ", view, device), Style::default().fg(theme.muted)),
    ]);
    f.render_widget(Paragraph::new(title).alignment(Alignment::Left), area);
}
