use crate::app::playlist::format_ms;
use crate::app::transport::{button_enabled, TransportAction};
use crate::app::App;
use crate::spotify::{PlayableItem, RepeatState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Now-playing bar
pub fn render_info(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let label = Style::default().fg(theme.label);
    let value = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);

    let spans = match app.store.playback_item() {
        None => vec![Span::styled("[Nothing Playing]", Style::default().fg(theme.muted))],
        Some(PlayableItem::Track(track)) => vec![
            Span::styled("Artist: ", label),
            Span::styled(track.artist_names(), value),
            Span::styled("  Album: ", label),
            Span::styled(track.album.name.clone(), value),
            Span::styled("  Name: ", label),
            Span::styled(track.name.clone(), value),
        ],
        Some(PlayableItem::Episode(episode)) => vec![
            Span::styled("Show: ", label),
            Span::styled(episode.show.name.clone(), value),
            Span::styled("  Name: ", label),
            Span::styled(episode.name.clone(), value),
        ],
    };

    let mut line = vec![Span::raw(" ")];
    line.extend(spans);
    f.render_widget(
        Paragraph::new(Line::from(line)).style(Style::default().bg(theme.background)),
        area,
    );
}

/// Position slider. The drawn bar is recorded as the click target.
pub fn render_slider(f: &mut Frame, area: Rect, app: &mut App) {
    let bar_area = Rect::new(
        area.x + 1,
        area.y,
        area.width.saturating_sub(2),
        area.height.min(1),
    );
    let theme = &app.theme;

    let ratio = app.store.slider_percent() / 100.0;
    let width = bar_area.width as usize;
    let occupied_width = (width as f64 * ratio.clamp(0.0, 1.0)) as usize;
    let fill_style = Style::default().fg(theme.playing);
    let empty_style = Style::default().fg(theme.muted);

    let mut bar_spans: Vec<Span> = Vec::with_capacity(width);
    for i in 0..width {
        if i < occupied_width {
            if i == occupied_width.saturating_sub(1) {
                // Playhead knob
                bar_spans.push(Span::styled("●", fill_style));
            } else {
                bar_spans.push(Span::styled("━", fill_style));
            }
        } else {
            bar_spans.push(Span::styled("─", empty_style));
        }
    }

    f.render_widget(
        Paragraph::new(Line::from(bar_spans)).style(Style::default().bg(theme.background)),
        bar_area,
    );
    app.click_targets.slider = (bar_area.width > 0).then_some(bar_area);
}

/// Transport buttons on the left, `progress / duration` on the right
pub fn render_toolbar(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(15)])
        .split(area);
    let (buttons_area, time_area) = (chunks[0], chunks[1]);

    let theme = &app.theme;
    let store = &app.store;
    let repeat_on = store
        .playback_state
        .as_ref()
        .is_some_and(|s| s.repeat_state != RepeatState::Off);
    let shuffle_on = store.playback_state.as_ref().is_some_and(|s| s.shuffle_state);

    let mut spans = vec![Span::raw(" ")];
    let mut targets = Vec::new();
    let mut x = buttons_area.x + 1;
    let right = buttons_area.x + buttons_area.width;

    for action in TransportAction::toolbar() {
        let text = format!("[{}]", action.label());
        let w = text.width() as u16;
        if x + w > right {
            break;
        }

        let lit = match action {
            TransportAction::ToggleRepeat => repeat_on,
            TransportAction::ToggleShuffle => shuffle_on,
            _ => false,
        };
        let style = if !button_enabled(action, store) {
            Style::default().fg(theme.muted)
        } else if lit {
            Style::default()
                .fg(theme.button_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.button).add_modifier(Modifier::BOLD)
        };

        targets.push((Rect::new(x, buttons_area.y, w, 1), action));
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
        x += w + 1;
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.background)),
        buttons_area,
    );

    let time = format!(
        "{} / {} ",
        format_ms(store.display_progress_ms()),
        format_ms(store.duration_ms())
    );
    f.render_widget(
        Paragraph::new(time)
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme.text).bg(theme.background)),
        time_area,
    );

    app.click_targets.toolbar = targets;
}
