use crate::app::App;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let k = &app.keys;
    let pair = |a: &str, b: &str| format!("{}/{}", k.display(a), k.display(b));

    let transport_keys: Vec<(String, &str)> = vec![
        (k.display(&k.previous), "Previous"),
        (k.display(&k.play), "Play"),
        (k.display(&k.pause), "Pause"),
        (k.display(&k.stop), "Stop"),
        (k.display(&k.next), "Next"),
        (k.display(&k.eject), "Eject"),
        (k.display(&k.repeat), "Repeat"),
        (k.display(&k.shuffle), "Shuffle"),
        (pair(&k.seek_backward, &k.seek_forward), "Seek ±15s"),
        ("0-9".to_string(), "Jump to n×10%"),
    ];

    let global_keys: Vec<(String, &str)> = vec![
        (pair(&k.nav_down, &k.nav_up), "Move highlight"),
        (k.display(&k.activate), "Play from here"),
        (k.display(&k.toggle_view), "Individual / group"),
        (k.display(&k.devices), "Devices"),
        (k.display(&k.load), "Load playlist"),
        (k.display(&k.quit), "Quit"),
    ];

    let mut lines: Vec<Line<'static>> = Vec::new();
    section(&mut lines, theme, "Transport", &transport_keys);
    lines.push(Line::from(""));
    section(&mut lines, theme, "Playlist", &global_keys);

    let content_width = transport_keys
        .iter()
        .chain(global_keys.iter())
        .map(|(key, desc)| 2 + key.width().max(7) + desc.width())
        .max()
        .unwrap_or(20)
        .max(24);

    let max_height = f.area().height.saturating_sub(4);
    let popup_height = (lines.len() as u16 + 2).min(max_height);
    let popup_width = (content_width as u16 + 4).min(f.area().width.saturating_sub(2));

    // Bottom-right, above the footer
    let popup_x = f.area().width.saturating_sub(popup_width + 1);
    let popup_y = f.area().height.saturating_sub(popup_height + 2);
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);

    let popup = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(theme.frame))
            .title(" Keys ")
            .title_alignment(Alignment::Left)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(popup, popup_area);
}

fn section(lines: &mut Vec<Line<'static>>, theme: &Theme, title: &str, keys: &[(String, &str)]) {
    lines.push(Line::from(Span::styled(
        format!("────── {} ──────", title),
        Style::default().fg(theme.label).add_modifier(Modifier::BOLD),
    )));
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<7} ", key),
                Style::default()
                    .fg(theme.button_active)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc.to_string(), Style::default().fg(theme.text)),
        ]));
    }
}
