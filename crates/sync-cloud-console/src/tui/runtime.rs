/*
[INPUT]:  SyncCloudApi handle, crossterm input, API responses, log buffer
[OUTPUT]: Ratatui-based TUI run loop, rendering, and shared styles
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use sync_cloud_adapter::SyncCloudApi;
use sync_cloud_console::logging::LogBufferHandle;
use sync_cloud_console::{BadgeTone, NoticeLevel};

use super::app::{AppState, UiEvent};
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::modal::draw_modal;
use super::ui::*;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
const LOG_PANEL_HEIGHT: u16 = 8;

pub async fn run_tui(
    api: Arc<dyn SyncCloudApi>,
    base_url: String,
    log_buffer: LogBufferHandle,
) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();
    let input_tx = event_tx.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = input_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    info!(base_url = %base_url, "starting tui");
    let mut app = AppState::new(api, base_url, event_tx, log_buffer);
    app.sync_refresh_trigger();

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        terminal.draw(|frame| draw_ui(frame, &mut app))?;

        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        let ctrl_c = key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL);
                        if ctrl_c || handle_key_event(&mut app, key.code) {
                            should_quit = true;
                        }
                    }
                    Some(UiEvent::Api(event)) => app.handle_api_event(event),
                    Some(UiEvent::Input(_)) => {}
                    None => should_quit = true,
                }
            }
        }

        app.sync_refresh_trigger();
    }

    input_shutdown.cancel();
    info!("tui stopped");
    Ok(())
}

pub(super) fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(LOG_PANEL_HEIGHT),
            Constraint::Length(4),
        ])
        .split(area);

    app.grid_columns = grid_columns(area.width);
    draw_header(frame, layout[0], app);
    draw_task_section(frame, layout[1], &app.list, app.grid_columns);
    draw_logs(frame, layout[2], &app.log_buffer);
    draw_footer(frame, layout[3], app);

    if app.creation.is_open() {
        let modal = app.create_modal.to_modal(&app.creation);
        draw_modal(frame, centered_rect(area, 60, 70), &modal);
    } else if let Some(task) = app.list.pending_delete() {
        draw_delete_confirm(frame, centered_rect(area, 40, 25), task);
    }
}

pub(super) fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line1 = Line::from(vec![
        Span::styled("[Arrows]", key_style),
        Span::raw(" Select  "),
        Span::styled("[n]", key_style),
        Span::raw(" New  "),
        Span::styled("[s]", key_style),
        Span::raw(" Start  "),
        Span::styled("[x]", key_style),
        Span::raw(" Stop  "),
        Span::styled("[d]", key_style),
        Span::raw(" Delete  "),
        Span::styled("[r]", key_style),
        Span::raw(" Refresh  "),
        Span::styled("[q]", key_style),
        Span::raw(" Quit"),
    ]);
    let line2 = match app.notices.latest() {
        Some(notice) => Line::from(vec![
            Span::raw(format!("{} ", notice.at.format("%H:%M:%S"))),
            Span::styled(notice.message.clone(), notice_style(notice.level)),
        ]),
        None => Line::from(Span::styled("Ready", Style::default().fg(Color::Gray))),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![line1, line2]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn selected_border_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn tone_style(tone: BadgeTone) -> Style {
    let color = match tone {
        BadgeTone::Success => Color::Green,
        BadgeTone::Danger => Color::Red,
        BadgeTone::Warning => Color::Yellow,
        BadgeTone::Info => Color::Cyan,
    };
    Style::default().fg(color)
}

fn notice_style(level: NoticeLevel) -> Style {
    match level {
        NoticeLevel::Success => tone_style(BadgeTone::Success),
        NoticeLevel::Error => tone_style(BadgeTone::Danger),
        NoticeLevel::Info => tone_style(BadgeTone::Info),
    }
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
