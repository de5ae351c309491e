use crate::app::playlist::{build_rows, ItemRow, PlaylistRow, TrackInfo};
use crate::app::App;
use crate::ui::utils::fit;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const DURATION_W: usize = 6;
const GLYPH_W: usize = 3;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let store = &app.store;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(theme.frame))
        .title(Span::styled(
            format!(" PLAYLIST · {} ", store.tracks_in_player.len()),
            Style::default().fg(theme.label).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if store.tracks_in_player.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Empty playlist", Style::default().fg(theme.muted))),
            Line::from(Span::styled(
                format!(
                    "Press {} to load a playlist, album or show",
                    app.keys.display(&app.keys.load)
                ),
                Style::default().fg(theme.muted),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(hint, inner);
        app.click_targets.playlist_rows.clear();
        return;
    }

    let rows = build_rows(
        &store.tracks_in_player,
        store.player_view,
        app.playlist.highlighted,
        store.playback_item(),
    );

    // Keep the highlighted row in the middle of the viewport
    let height = inner.height as usize;
    let anchor = rows
        .iter()
        .position(|r| r.item_index() == Some(app.playlist.highlighted))
        .unwrap_or(0);
    let start = anchor
        .saturating_sub(height / 2)
        .min(rows.len().saturating_sub(height));

    let width = inner.width as usize;
    let mut lines: Vec<Line> = Vec::with_capacity(height);
    let mut targets = Vec::new();

    for (offset, row) in rows.iter().skip(start).take(height).enumerate() {
        match row {
            PlaylistRow::Header(info) => lines.push(header_line(info, width, theme)),
            PlaylistRow::Item(item) => {
                let rect = Rect::new(inner.x, inner.y + offset as u16, inner.width, 1);
                targets.push((rect, item.index));
                lines.push(item_line(item, width, theme));
            }
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
    app.click_targets.playlist_rows = targets;
}

fn header_line(info: &TrackInfo, width: usize, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        fit(&format!(" {}", info.header()), width),
        Style::default().fg(theme.label).add_modifier(Modifier::BOLD),
    ))
}

fn item_line(row: &ItemRow, width: usize, theme: &Theme) -> Line<'static> {
    let base = if row.highlighted {
        Style::default().fg(theme.selection_fg).bg(theme.selection_bg)
    } else if row.now_playing {
        Style::default().fg(theme.playing).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    let muted = if row.highlighted {
        base
    } else {
        Style::default().fg(theme.muted)
    };

    let indent = if row.indented { 4 } else { 1 };
    let (marker, marker_w) = if row.now_playing { (" 💿", 3) } else { ("", 0) };
    let fixed = indent + DURATION_W + GLYPH_W + marker_w;
    let rest = width.saturating_sub(fixed);

    let mut spans = vec![
        Span::styled(" ".repeat(indent), base),
        Span::styled(format!("{:>5} ", row.duration), muted),
        Span::styled(format!("{} ", row.glyph), base),
    ];

    match &row.info {
        Some(info) => {
            // name | primary | secondary, name gets the larger share
            let (primary, secondary) = info.columns();
            let name_w = rest / 2;
            let info_w = rest.saturating_sub(name_w);
            let label = match secondary {
                Some(album) => format!("{} · {}", primary, album),
                None => primary.to_string(),
            };
            spans.push(Span::styled(fit(&row.name, name_w), base));
            spans.push(Span::styled(fit(&label, info_w), muted));
        }
        None => spans.push(Span::styled(fit(&row.name, rest), base)),
    }

    if !marker.is_empty() {
        spans.push(Span::styled(marker, base));
    }

    Line::from(spans)
}
