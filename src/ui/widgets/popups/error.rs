use crate::app::App;
use crate::ui::layout::centered;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Modal for the shared error channel. Enter, Esc or any click dismisses it.
pub fn render(f: &mut Frame, app: &App) {
    let Some(message) = app.store.error_message.as_deref() else {
        return;
    };
    let theme = &app.theme;

    let area = centered(f.area(), 52, 8);
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", Style::default().fg(theme.button))),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(theme.error))
        .title(" Error ")
        .style(Style::default().bg(theme.background));

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
