/*
[INPUT]:  SyncCloudApi handle, server base url, log buffer
[OUTPUT]: Ratatui-based TUI for sync cloud tasks
[POS]:    TUI module for the sync-cloud binary
[UPDATE]: When changing TUI module layout
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::run_tui;
