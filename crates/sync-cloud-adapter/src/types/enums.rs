/*
[INPUT]:  Sync cloud API schema and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Object-storage provider a sync task uploads to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudType {
    #[default]
    Oss,
    Tos,
}

impl CloudType {
    /// Choices offered when registering a destination, in display order
    pub const ALL: [CloudType; 2] = [CloudType::Oss, CloudType::Tos];

    pub fn as_str(self) -> &'static str {
        match self {
            CloudType::Oss => "oss",
            CloudType::Tos => "tos",
        }
    }
}

impl fmt::Display for CloudType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "oss" => Ok(CloudType::Oss),
            "tos" => Ok(CloudType::Tos),
            other => Err(format!("unsupported cloud type: {other}")),
        }
    }
}

/// Status of a sync task's process as reported by the server.
///
/// The server owns the state machine; statuses this client does not know
/// about are kept verbatim in [`TaskStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Running,
    Finish,
    Error,
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Running => "running",
            TaskStatus::Finish => "finish",
            TaskStatus::Error => "error",
            TaskStatus::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "running" => TaskStatus::Running,
            "finish" => TaskStatus::Finish,
            "error" => TaskStatus::Error,
            _ => TaskStatus::Other(raw),
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(raw: &str) -> Self {
        TaskStatus::from(raw.to_string())
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("running", TaskStatus::Running)]
    #[case("finish", TaskStatus::Finish)]
    #[case("error", TaskStatus::Error)]
    #[case("pending", TaskStatus::Other("pending".to_string()))]
    #[case("", TaskStatus::Other(String::new()))]
    fn test_task_status_from_wire(#[case] raw: &str, #[case] expected: TaskStatus) {
        let status: TaskStatus = serde_json::from_str(&format!("\"{raw}\"")).expect("decode status");
        assert_eq!(status, expected);
        assert_eq!(status.as_str(), raw);
    }

    #[test]
    fn test_unknown_status_is_reencoded_verbatim() {
        let status = TaskStatus::from("paused");
        let encoded = serde_json::to_string(&status).expect("encode status");
        assert_eq!(encoded, "\"paused\"");
    }

    #[test]
    fn test_cloud_type_parse_and_display() {
        assert_eq!("OSS".parse::<CloudType>(), Ok(CloudType::Oss));
        assert_eq!(" tos ".parse::<CloudType>(), Ok(CloudType::Tos));
        assert!("s3".parse::<CloudType>().is_err());
        assert_eq!(CloudType::Tos.to_string(), "tos");
        assert_eq!(CloudType::default(), CloudType::Oss);
    }
}
