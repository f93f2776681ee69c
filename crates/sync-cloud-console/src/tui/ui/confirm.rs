/*
[INPUT]:  Task awaiting delete confirmation
[OUTPUT]: Confirmation popup rendered over the task section
[POS]:    TUI UI delete confirmation popup
[UPDATE]: When delete confirmation wording or keys change
*/

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use sync_cloud_adapter::SyncTask;

pub(in crate::tui) fn draw_delete_confirm(frame: &mut ratatui::Frame, area: Rect, task: &SyncTask) {
    frame.render_widget(Clear, area);

    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(format!("Delete \"{}\"?", task.name)),
        Line::default(),
        Line::from(vec![
            Span::styled("[y]", key_style),
            Span::raw(" Delete  "),
            Span::styled("[n/Esc]", key_style),
            Span::raw(" Cancel"),
        ]),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title("Confirm"),
        );
    frame.render_widget(widget, area);
}
