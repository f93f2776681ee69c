/*
[INPUT]:  SyncTask records from the list endpoint
[OUTPUT]: Render-ready card values, badge tones, size and date text
[POS]:    Presentation layer - pure derivations shared by TUI and CLI
[UPDATE]: When card contents or formatting rules change
*/

use chrono::DateTime;
use sync_cloud_adapter::{SyncTask, TaskStatus};

const SIZE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Danger,
    Warning,
    Info,
}

/// Badge tone for a task status. Anything that is neither finished nor
/// failed is shown as in progress.
pub fn status_tone(status: &TaskStatus) -> BadgeTone {
    match status {
        TaskStatus::Finish => BadgeTone::Success,
        TaskStatus::Error => BadgeTone::Danger,
        _ => BadgeTone::Warning,
    }
}

/// Human readable size using binary multiples, e.g. `1048576` -> `1.00 MB`
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", SIZE_UNITS[unit])
}

/// RFC 3339 timestamp as `YYYY-MM-DD HH:MM:SS` in its own offset.
/// Unparsable input is returned as is.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "-".to_string();
    }
    match DateTime::parse_from_rfc3339(trimmed) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => trimmed.to_string(),
    }
}

/// Display values for one task card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    pub id: String,
    pub name: String,
    pub cloud_type: String,
    pub status: String,
    pub tone: BadgeTone,
    pub total_size: String,
    pub files: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub error: Option<String>,
}

impl TaskCard {
    pub fn from_task(task: &SyncTask) -> Self {
        let info = &task.proc_info;
        Self {
            id: info.id.clone(),
            name: task.name.clone(),
            cloud_type: task.cloud_type.clone(),
            status: info.status.to_string(),
            tone: status_tone(&info.status),
            total_size: format_size(info.total_bytes),
            files: task.proc_file_count.to_string(),
            start_time: format_date(&info.start_time),
            end_time: info.end_time.as_deref().map(format_date),
            error: info.error.clone(),
        }
    }

    pub fn cloud_tone(&self) -> BadgeTone {
        BadgeTone::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sync_cloud_adapter::ProcessInfo;

    #[rstest]
    #[case(TaskStatus::Finish, BadgeTone::Success)]
    #[case(TaskStatus::Error, BadgeTone::Danger)]
    #[case(TaskStatus::Running, BadgeTone::Warning)]
    #[case(TaskStatus::from("pending"), BadgeTone::Warning)]
    #[case(TaskStatus::from("paused"), BadgeTone::Warning)]
    #[case(TaskStatus::from("disabled"), BadgeTone::Warning)]
    #[case(TaskStatus::from("FINISH"), BadgeTone::Warning)]
    #[case(TaskStatus::from(""), BadgeTone::Warning)]
    fn test_status_tone(#[case] status: TaskStatus, #[case] expected: BadgeTone) {
        assert_eq!(status_tone(&status), expected);
    }

    #[rstest]
    #[case(0, "0 B")]
    #[case(1023, "1023 B")]
    #[case(1024, "1.00 KB")]
    #[case(1536, "1.50 KB")]
    #[case(1_048_576, "1.00 MB")]
    #[case(5 * 1024 * 1024 * 1024, "5.00 GB")]
    #[case(u64::MAX, "16384.00 PB")]
    fn test_format_size(#[case] bytes: u64, #[case] expected: &str) {
        assert_eq!(format_size(bytes), expected);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-01T00:00:00Z"), "2024-01-01 00:00:00");
        assert_eq!(
            format_date("2024-03-05T08:09:10+08:00"),
            "2024-03-05 08:09:10"
        );
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date("  "), "-");
    }

    #[test]
    fn test_card_for_failed_task() {
        let task = SyncTask {
            name: "backup1".to_string(),
            cloud_type: "oss".to_string(),
            proc_file_count: 12,
            proc_info: ProcessInfo {
                id: "1".to_string(),
                status: TaskStatus::Error,
                start_time: "2024-01-01T00:00:00Z".to_string(),
                end_time: None,
                total_bytes: 1_048_576,
                error: Some("connection refused".to_string()),
            },
        };

        let card = TaskCard::from_task(&task);
        assert_eq!(card.tone, BadgeTone::Danger);
        assert_eq!(card.status, "error");
        assert_eq!(card.total_size, "1.00 MB");
        assert_eq!(card.files, "12");
        assert_eq!(card.start_time, "2024-01-01 00:00:00");
        assert_eq!(card.end_time, None);
        assert_eq!(card.error.as_deref(), Some("connection refused"));
        assert_eq!(card.cloud_tone(), BadgeTone::Info);
    }
}
