/*
[INPUT]:  TaskListView cards, selection, in-flight actions
[OUTPUT]: "Sync Cloud Tasks" section with a grid of task cards
[POS]:    TUI UI task card grid
[UPDATE]: When card content or grid layout changes
*/

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use sync_cloud_console::{TaskAction, TaskCard, TaskListView};

use crate::tui::runtime::{border_style, selected_border_style, tone_style};

pub(in crate::tui) const SECTION_TITLE: &str = "Sync Cloud Tasks";
/// Widths from here up get two card columns
pub(in crate::tui) const TWO_COLUMN_MIN_WIDTH: u16 = 100;
const CARD_HEIGHT: u16 = 9;

pub(in crate::tui) fn grid_columns(width: u16) -> usize {
    if width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 }
}

/// Renders nothing at all when the list is empty
pub(in crate::tui) fn draw_task_section(
    frame: &mut ratatui::Frame,
    area: Rect,
    list: &TaskListView,
    columns: usize,
) {
    if !list.is_visible() {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(
            SECTION_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = columns.max(1);
    let cards = list.cards();
    let selected = list.selected_index().unwrap_or_default();
    let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
    let selected_row = selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(inner);
    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);
        for (col, card_area) in col_areas.iter().enumerate() {
            let index = (first_row + row_offset) * columns + col;
            let Some(card) = cards.get(index) else {
                return;
            };
            draw_card(frame, *card_area, card, index == selected, list);
        }
    }
}

fn draw_card(
    frame: &mut ratatui::Frame,
    area: Rect,
    card: &TaskCard,
    selected: bool,
    list: &TaskListView,
) {
    let label_style = Style::default().add_modifier(Modifier::DIM);
    let mut status_spans = vec![Span::styled(
        format!(" {} ", card.status),
        tone_style(card.tone).add_modifier(Modifier::BOLD),
    )];
    for action in [TaskAction::Start, TaskAction::Stop, TaskAction::Delete] {
        if list.is_action_pending(&card.id, action) {
            status_spans.push(Span::raw(format!("  {}...", action.label())));
        }
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled(card.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(format!("[{}]", card.cloud_type), tone_style(card.cloud_tone())),
        ]),
        Line::from(status_spans),
        Line::from(vec![
            Span::styled("Total Size: ", label_style),
            Span::raw(card.total_size.clone()),
        ]),
        Line::from(vec![
            Span::styled("Files: ", label_style),
            Span::raw(card.files.clone()),
        ]),
        Line::from(vec![
            Span::styled("Start Time: ", label_style),
            Span::raw(card.start_time.clone()),
        ]),
    ];
    if let Some(end_time) = &card.end_time {
        lines.push(Line::from(vec![
            Span::styled("End Time: ", label_style),
            Span::raw(end_time.clone()),
        ]));
    }
    if let Some(error) = &card.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            tone_style(sync_cloud_console::BadgeTone::Danger),
        )));
    }

    let border = if selected {
        selected_border_style()
    } else {
        border_style()
    };
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" #{} ", card.id)),
    );
    frame.render_widget(widget, area);
}
