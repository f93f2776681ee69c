/*
[INPUT]:  Sync cloud API schema and serde requirements
[OUTPUT]: Response envelope and typed payloads
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::SyncTask;
use crate::http::{Result, SyncCloudError};

/// Uniform wrapper around every API response.
///
/// Servers either send an explicit `success` flag or only a `code`, where
/// `200` means success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        match self.success {
            Some(success) => success,
            None => self.code == Some(200),
        }
    }

    /// Returns the payload on success, the server's message as an error otherwise
    pub fn into_result(self) -> Result<Option<T>> {
        if self.is_success() {
            return Ok(self.data);
        }
        let message = self
            .message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| "request failed".to_string());
        Err(SyncCloudError::Api {
            code: self.code.unwrap_or_default(),
            message,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListResponse {
    #[serde(default, deserialize_with = "deserialize_null_tasks")]
    pub tasks: Vec<SyncTask>,
}

fn deserialize_null_tasks<'de, D>(deserializer: D) -> std::result::Result<Vec<SyncTask>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let tasks: Option<Vec<SyncTask>> = Option::deserialize(deserializer)?;
    Ok(tasks.unwrap_or_default())
}
