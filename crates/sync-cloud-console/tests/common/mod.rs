/*
[INPUT]:  Mock server handle
[OUTPUT]: Shared fixtures for console flow tests
[POS]:    Test infrastructure - shared across console integration tests
[UPDATE]: When adding new fixtures
*/

#![allow(dead_code)]

use serde_json::{Value, json};
use sync_cloud_adapter::{ClientConfig, SyncCloudClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LIST_PATH: &str = "/wl/sync_cloud/list";

pub fn client_for(server: &MockServer) -> SyncCloudClient {
    SyncCloudClient::with_config(ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    })
    .expect("client init")
}

pub fn ok_envelope(data: Value) -> Value {
    json!({ "code": 200, "success": true, "message": "success", "data": data })
}

pub fn failed_envelope(message: &str) -> Value {
    json!({ "code": 500, "success": false, "message": message })
}

pub fn finished_task() -> Value {
    json!({
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
    })
}

pub fn failed_task() -> Value {
    json!({
        "name": "backup1",
        "cloud_type": "oss",
        "proc_file_count": 12,
        "proc_info": {
            "id": "1",
            "status": "error",
            "start_time": "2024-01-01T00:00:00Z",
            "total_bytes": 1048576,
            "error": "connection refused"
        }
    })
}

/// Mounts a list endpoint returning `tasks`, expected to be hit `calls` times
pub async fn mount_list(server: &MockServer, tasks: Vec<Value>, calls: u64) {
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_envelope(json!({ "tasks": tasks }))),
        )
        .expect(calls)
        .mount(server)
        .await;
}
