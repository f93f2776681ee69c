/*
[INPUT]:  Sync cloud API schema and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use super::enums::{CloudType, TaskStatus};

/// Connection parameters for a new cloud sync destination.
///
/// Only the server validates these; every field may be empty.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncTaskConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cloud_type: CloudType,
    #[serde(default)]
    pub access_key: String,
    #[serde(default)]
    pub secret_key: String,
    #[serde(default)]
    pub bucket_name: String,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub dst_dir: String,
}

impl fmt::Debug for SyncTaskConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = if self.secret_key.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("SyncTaskConfig")
            .field("name", &self.name)
            .field("cloud_type", &self.cloud_type)
            .field("access_key", &self.access_key)
            .field("secret_key", &secret)
            .field("bucket_name", &self.bucket_name)
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("prefix", &self.prefix)
            .field("dst_dir", &self.dst_dir)
            .finish()
    }
}

/// Server-side record of one sync task run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    #[serde(deserialize_with = "serde_helpers::deserialize_string_or_number")]
    pub id: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub start_time: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<String>,
    #[serde(default)]
    pub total_bytes: u64,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
}

/// One sync task as listed by the server. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncTask {
    pub name: String,
    /// Kept as sent so providers unknown to this client still render
    #[serde(default)]
    pub cloud_type: String,
    #[serde(default, alias = "file_count")]
    pub proc_file_count: u64,
    pub proc_info: ProcessInfo,
}

impl SyncTask {
    pub fn id(&self) -> &str {
        &self.proc_info.id
    }

    pub fn status(&self) -> &TaskStatus {
        &self.proc_info.status
    }
}

mod serde_helpers {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        Ok(value.filter(|raw| !raw.trim().is_empty()))
    }

    pub fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(raw) => Ok(raw),
            Value::Number(number) => Ok(number.to_string()),
            _ => Err(serde::de::Error::custom("expected string or number id")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sync_task_deserialize_finished() {
        let value = json!({
            "name": "backup1",
            "cloud_type": "oss",
            "proc_file_count": 12,
            "proc_info": {
                "id": "1",
                "status": "finish",
                "start_time": "2024-01-01T00:00:00Z",
                "end_time": "2024-01-01T01:00:00Z",
                "total_bytes": 1048576
            }
        });

        let task: SyncTask = serde_json::from_value(value).expect("decode task");
        assert_eq!(task.name, "backup1");
        assert_eq!(task.id(), "1");
        assert_eq!(task.status(), &TaskStatus::Finish);
        assert_eq!(task.proc_file_count, 12);
        assert_eq!(task.proc_info.total_bytes, 1_048_576);
        assert_eq!(
            task.proc_info.end_time.as_deref(),
            Some("2024-01-01T01:00:00Z")
        );
        assert_eq!(task.proc_info.error, None);
    }

    #[test]
    fn test_process_info_empty_strings_are_absent() {
        let value = json!({
            "id": 7,
            "status": "running",
            "start_time": "2024-01-01T00:00:00Z",
            "end_time": "",
            "total_bytes": 0,
            "error": "  "
        });

        let info: ProcessInfo = serde_json::from_value(value).expect("decode process info");
        assert_eq!(info.id, "7");
        assert_eq!(info.end_time, None);
        assert_eq!(info.error, None);
    }

    #[test]
    fn test_file_count_alias() {
        let value = json!({
            "name": "docs",
            "cloud_type": "tos",
            "file_count": 3,
            "proc_info": { "id": "9", "status": "error", "error": "connection refused" }
        });

        let task: SyncTask = serde_json::from_value(value).expect("decode task");
        assert_eq!(task.proc_file_count, 3);
        assert_eq!(task.proc_info.error.as_deref(), Some("connection refused"));
        assert_eq!(task.proc_info.start_time, "");
    }

    #[test]
    fn test_config_serializes_every_field() {
        let config = SyncTaskConfig {
            name: "nightly".to_string(),
            cloud_type: CloudType::Tos,
            secret_key: "s3cr3t".to_string(),
            ..SyncTaskConfig::default()
        };

        let value = serde_json::to_value(&config).expect("encode config");
        assert_eq!(
            value,
            json!({
                "name": "nightly",
                "cloud_type": "tos",
                "access_key": "",
                "secret_key": "s3cr3t",
                "bucket_name": "",
                "endpoint": "",
                "region": "",
                "prefix": "",
                "dst_dir": ""
            })
        );
    }

    #[test]
    fn test_config_debug_redacts_secret() {
        let config = SyncTaskConfig {
            secret_key: "s3cr3t".to_string(),
            ..SyncTaskConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("s3cr3t"));
        assert!(debug.contains("<redacted>"));
    }
}
