/*
[INPUT]:  Server base url and list loading flag
[OUTPUT]: Header bar rendered into the top of the frame
[POS]:    TUI UI layout helpers
[UPDATE]: When the header content changes
*/

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::AppState;
use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_header(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &AppState,
) {
    let mut spans = vec![
        Span::styled(" sync-cloud ", header_style()),
        Span::raw("  "),
        Span::styled(app.base_url.as_str(), Style::default().fg(Color::Gray)),
    ];
    if app.list.is_loading() {
        spans.push(Span::styled("  loading...", Style::default().fg(Color::Yellow)));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style()),
    );
    frame.render_widget(widget, area);
}
