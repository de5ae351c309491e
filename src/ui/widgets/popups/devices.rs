use crate::app::devices::DeviceDialog;
use crate::app::{App, DialogButton};
use crate::ui::layout::centered;
use crate::ui::utils::fit;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const WIDTH: u16 = 48;
const CANCEL: &str = "[ Cancel ]";
const TRANSFER: &str = "[ Transfer Playback ]";

pub fn render(f: &mut Frame, app: &mut App) {
    let theme = &app.theme;
    let dialog = &app.device_dialog;

    let area = centered(f.area(), WIDTH, dialog.height());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(theme.frame))
        .title(Span::styled(
            " Select Device ",
            Style::default().fg(theme.label).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;
    // The last inner row always belongs to the footer
    let capacity = inner.height.saturating_sub(1) as usize;
    let mut lines: Vec<Line> = Vec::new();
    let mut row_targets = Vec::new();

    match dialog {
        DeviceDialog::Loading { .. } => lines.push(Line::from(Span::styled(
            " Loading…",
            Style::default().fg(theme.muted),
        ))),
        DeviceDialog::Ready { devices, .. } if devices.is_empty() => {
            lines.push(Line::from(Span::styled(
                " No devices found",
                Style::default().fg(theme.muted),
            )))
        }
        _ => {
            let selected = dialog.selected();
            for (i, device) in dialog.devices().iter().enumerate().take(capacity) {
                let is_sel = selected == Some(i);
                let style = if is_sel {
                    Style::default().fg(theme.selection_fg).bg(theme.selection_bg)
                } else {
                    Style::default().fg(theme.text)
                };
                let check = if is_sel { "[x]" } else { "[ ]" };
                let badge = if device.is_active { " [active]" } else { "" };
                let head = format!(" {} {} ", device.device_type.glyph(), check);
                let name_w = width.saturating_sub(head.width() + badge.len());

                lines.push(Line::from(vec![
                    Span::styled(head, style),
                    Span::styled(fit(&device.name, name_w), style),
                    Span::styled(badge, style.add_modifier(Modifier::BOLD)),
                ]));
                row_targets.push((Rect::new(inner.x, inner.y + i as u16, inner.width, 1), i));
            }
        }
    }

    lines.truncate(capacity);
    while lines.len() < capacity {
        lines.push(Line::from(""));
    }

    let transfer_style = if dialog.can_confirm() {
        Style::default()
            .fg(theme.button_active)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted)
    };
    lines.push(
        Line::from(vec![
            Span::styled(CANCEL, Style::default().fg(theme.button)),
            Span::raw(" "),
            Span::styled(TRANSFER, transfer_style),
            Span::raw(" "),
        ])
        .alignment(Alignment::Right),
    );

    f.render_widget(Paragraph::new(lines), inner);

    // Right-aligned footer: "<cancel> <transfer> "
    let footer_y = inner.y + inner.height.saturating_sub(1);
    let right = inner.x + inner.width;
    let transfer_w = TRANSFER.width() as u16;
    let cancel_w = CANCEL.width() as u16;
    let transfer_x = right.saturating_sub(transfer_w + 1);
    let cancel_x = transfer_x.saturating_sub(cancel_w + 1);

    app.click_targets.device_rows = row_targets;
    if inner.height > 0 {
        app.click_targets.dialog_buttons = vec![
            (Rect::new(cancel_x, footer_y, cancel_w, 1), DialogButton::Cancel),
            (Rect::new(transfer_x, footer_y, transfer_w, 1), DialogButton::Transfer),
        ];
    }
}
