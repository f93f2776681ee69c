/*
[INPUT]:  AppState, task cards, log buffer
[OUTPUT]: Panel renderers used by the runtime draw loop
[POS]:    TUI UI module root
[UPDATE]: When adding or removing panels
*/

pub(in crate::tui) mod confirm;
pub(in crate::tui) mod layout;
pub(in crate::tui) mod logs;
pub(in crate::tui) mod modal;
pub(in crate::tui) mod task_cards;

pub(in crate::tui) use confirm::draw_delete_confirm;
pub(in crate::tui) use layout::draw_header;
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use task_cards::{draw_task_section, grid_columns};
