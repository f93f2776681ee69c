/*
[INPUT]:  Crossterm key codes
[OUTPUT]: AppState mutations and quit requests
[POS]:    TUI key routing
[UPDATE]: When changing keybindings
*/

use crossterm::event::KeyCode;
use sync_cloud_console::TaskAction;

use super::app::AppState;
use super::ui::modal::ModalAction;

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    if app.creation.is_open() {
        handle_modal_key_event(app, key);
        return false;
    }
    if app.list.pending_delete().is_some() {
        handle_delete_confirm_key(app, key);
        return false;
    }

    let columns = app.grid_columns.max(1) as isize;
    match key {
        KeyCode::Char('q') => true,
        KeyCode::Char('r') => {
            app.request_refresh();
            false
        }
        KeyCode::Char('n') => {
            app.open_create();
            false
        }
        KeyCode::Char('s') => {
            app.run_selected_action(TaskAction::Start);
            false
        }
        KeyCode::Char('x') => {
            app.run_selected_action(TaskAction::Stop);
            false
        }
        KeyCode::Char('d') => {
            app.request_delete_selected();
            false
        }
        KeyCode::Left => {
            app.move_selection(-1);
            false
        }
        KeyCode::Right => {
            app.move_selection(1);
            false
        }
        KeyCode::Up => {
            app.move_selection(-columns);
            false
        }
        KeyCode::Down => {
            app.move_selection(columns);
            false
        }
        _ => false,
    }
}

fn handle_modal_key_event(app: &mut AppState, key: KeyCode) {
    match app.create_modal.handle_key(&mut app.creation, key) {
        ModalAction::Submit => app.submit_create(),
        ModalAction::Cancel => app.close_create(),
        ModalAction::None => {}
    }
}

fn handle_delete_confirm_key(app: &mut AppState, key: KeyCode) {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.list.cancel_delete(),
        _ => {}
    }
}
