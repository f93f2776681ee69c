/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for sync-cloud-adapter tests

use serde_json::{Value, json};
use sync_cloud_adapter::{ClientConfig, SyncCloudClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> SyncCloudClient {
    SyncCloudClient::with_config(ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    })
    .expect("client init")
}

/// A finished task as the list endpoint returns it
pub fn finished_task_json() -> Value {
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
