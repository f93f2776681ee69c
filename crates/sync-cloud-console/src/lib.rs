/*
[INPUT]:  Public API exports for sync-cloud-console crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod creation;
pub mod display;
pub mod logging;
pub mod notify;
pub mod task_list;

// Re-export main types for convenience
pub use crate::config::ConsoleConfig;
pub use creation::{FormField, SubmitOutcome, TaskCreation};
pub use display::{BadgeTone, TaskCard, format_date, format_size, status_tone};
pub use notify::{Notice, NoticeLevel, Notifications};
pub use task_list::{ActionOutcome, FetchTicket, TaskAction, TaskCommand, TaskListView};
