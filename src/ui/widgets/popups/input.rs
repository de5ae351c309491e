use crate::app::App;
use crate::ui::layout::centered;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let Some(ref input) = app.input_state else {
        return;
    };
    let theme = &app.theme;

    let area = centered(f.area(), 64, 5);
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " > ",
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(input.value.as_str(), Style::default().fg(theme.selection_fg)),
            Span::styled(
                "▌",
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]),
        Line::from(Span::styled(
            "   spotify:playlist:…  spotify:album:…  open.spotify.com/show/…",
            Style::default().fg(theme.muted),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(theme.frame))
        .title(format!(" {} ", input.title))
        .title_alignment(Alignment::Left)
        .style(Style::default().bg(theme.background));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
