/*
[INPUT]:  Modal state, fields, and key events
[OUTPUT]: Modal rendering output and modal action results
[POS]:    TUI UI modal module root
[UPDATE]: When adding modal field kinds or modal key bindings
*/

mod create_sync_cloud;

pub(in crate::tui) use create_sync_cloud::CreateSyncCloudModal;

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::runtime::border_style;

const MASK_CHAR: char = '*';

pub(in crate::tui) struct Modal {
    pub(super) title: String,
    pub(super) focus_index: usize,
    pub(super) fields: Vec<Field>,
}

pub(in crate::tui) enum Field {
    TextInput {
        label: String,
        value: String,
        masked: bool,
    },
    Select {
        label: String,
        options: Vec<String>,
        selected: usize,
    },
    Button {
        label: String,
        action: ModalAction,
        enabled: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui) enum ModalAction {
    Submit,
    Cancel,
    None,
}

pub(in crate::tui) fn draw_modal(frame: &mut ratatui::Frame, area: Rect, modal: &Modal) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(modal.title.as_str());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut buttons = Vec::new();
    let mut lines: Vec<Line> = Vec::new();
    for (index, field) in modal.fields.iter().enumerate() {
        let focused = index == modal.focus_index;
        let focus_style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        match field {
            Field::TextInput {
                label,
                value,
                masked,
            } => {
                let shown = if *masked {
                    MASK_CHAR.to_string().repeat(value.chars().count())
                } else {
                    value.clone()
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
                    Span::styled(shown, focus_style),
                ]));
            }
            Field::Select {
                label,
                options,
                selected,
            } => {
                let selected_value = options.get(*selected).map(String::as_str).unwrap_or("-");
                lines.push(Line::from(vec![
                    Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
                    Span::styled(format!("< {selected_value} >"), focus_style),
                ]));
            }
            Field::Button { label, enabled, .. } => {
                let style = if *enabled {
                    focus_style.add_modifier(Modifier::BOLD)
                } else {
                    focus_style.fg(Color::DarkGray)
                };
                buttons.push(Span::styled(format!("[{label}]"), style));
                buttons.push(Span::raw("  "));
            }
        }
    }
    if !buttons.is_empty() {
        buttons.pop();
        lines.push(Line::default());
        lines.push(Line::from(buttons));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

fn cycle_select(field: Option<&mut Field>, forward: bool) {
    if let Some(Field::Select {
        selected, options, ..
    }) = field
    {
        if options.is_empty() {
            return;
        }
        *selected = if forward {
            (*selected + 1) % options.len()
        } else {
            (*selected + options.len() - 1) % options.len()
        };
    }
}

pub(in crate::tui) fn handle_modal_key(modal: &mut Modal, key: KeyCode) -> ModalAction {
    let field_count = modal.fields.len();
    match key {
        KeyCode::Esc => ModalAction::Cancel,
        KeyCode::Tab | KeyCode::Down => {
            if field_count > 0 {
                modal.focus_index = (modal.focus_index + 1) % field_count;
            }
            ModalAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            if field_count > 0 {
                modal.focus_index = (modal.focus_index + field_count - 1) % field_count;
            }
            ModalAction::None
        }
        KeyCode::Left => {
            cycle_select(modal.fields.get_mut(modal.focus_index), false);
            ModalAction::None
        }
        KeyCode::Right => {
            cycle_select(modal.fields.get_mut(modal.focus_index), true);
            ModalAction::None
        }
        KeyCode::Backspace => {
            if let Some(Field::TextInput { value, .. }) = modal.fields.get_mut(modal.focus_index) {
                value.pop();
            }
            ModalAction::None
        }
        KeyCode::Char(ch) => {
            if let Some(Field::TextInput { value, .. }) = modal.fields.get_mut(modal.focus_index) {
                value.push(ch);
            }
            ModalAction::None
        }
        KeyCode::Enter => match modal.fields.get(modal.focus_index) {
            Some(Field::Button {
                action,
                enabled: true,
                ..
            }) => *action,
            Some(Field::Button { .. }) => ModalAction::None,
            Some(_) => {
                if field_count > 0 {
                    modal.focus_index = (modal.focus_index + 1) % field_count;
                }
                ModalAction::None
            }
            None => ModalAction::None,
        },
        _ => ModalAction::None,
    }
}
