/*
[INPUT]:  Sync task configs and task ids
[OUTPUT]: Task list and command acknowledgements
[POS]:    HTTP layer - /wl/sync_cloud endpoints
[UPDATE]: When adding new sync cloud endpoints or changing payloads
*/

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::http::{Result, SyncCloudClient};
use crate::types::{SyncTask, SyncTaskConfig, TaskIdRequest, TaskListResponse};

pub const CREATE_ENDPOINT: &str = "/wl/sync_cloud/create";
pub const LIST_ENDPOINT: &str = "/wl/sync_cloud/list";
pub const START_ENDPOINT: &str = "/wl/sync_cloud/start";
pub const STOP_ENDPOINT: &str = "/wl/sync_cloud/stop";
pub const DELETE_ENDPOINT: &str = "/wl/sync_cloud/delete";

impl SyncCloudClient {
    /// Register a new sync destination
    ///
    /// POST /wl/sync_cloud/create
    pub async fn create_task(&self, config: &SyncTaskConfig) -> Result<()> {
        debug!(name = %config.name, cloud_type = %config.cloud_type, "creating sync task");
        let builder = self.request(Method::POST, CREATE_ENDPOINT)?.json(config);
        self.send_envelope::<Value>(CREATE_ENDPOINT, builder).await?;
        info!(name = %config.name, "sync task created");
        Ok(())
    }

    /// Fetch every sync task with its latest process info
    ///
    /// GET /wl/sync_cloud/list
    pub async fn list_tasks(&self) -> Result<Vec<SyncTask>> {
        let builder = self.request(Method::GET, LIST_ENDPOINT)?;
        // a well-formed envelope whose payload has the wrong shape is a decode failure
        let response = match self.send_envelope::<Value>(LIST_ENDPOINT, builder).await? {
            Some(data) => serde_json::from_value::<TaskListResponse>(data).inspect_err(|err| {
                warn!(endpoint = LIST_ENDPOINT, error = %err, "task list payload rejected");
            })?,
            None => TaskListResponse::default(),
        };
        debug!(count = response.tasks.len(), "sync tasks listed");
        Ok(response.tasks)
    }

    /// POST /wl/sync_cloud/start
    pub async fn start_task(&self, id: &str) -> Result<()> {
        self.send_task_command(START_ENDPOINT, id).await
    }

    /// POST /wl/sync_cloud/stop
    pub async fn stop_task(&self, id: &str) -> Result<()> {
        self.send_task_command(STOP_ENDPOINT, id).await
    }

    /// POST /wl/sync_cloud/delete
    pub async fn delete_task(&self, id: &str) -> Result<()> {
        self.send_task_command(DELETE_ENDPOINT, id).await
    }

    async fn send_task_command(&self, endpoint: &str, id: &str) -> Result<()> {
        debug!(endpoint, task_id = %id, "sending task command");
        let builder = self
            .request(Method::POST, endpoint)?
            .json(&TaskIdRequest::new(id));
        self.send_envelope::<Value>(endpoint, builder).await?;
        info!(endpoint, task_id = %id, "task command accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, SyncCloudClient, SyncCloudError};
    use crate::types::{CloudType, SyncTaskConfig, TaskStatus};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SyncCloudClient {
        SyncCloudClient::with_config(ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        })
        .expect("client init")
    }

    #[tokio::test]
    async fn test_create_task_posts_full_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wl/sync_cloud/create"))
            .and(body_json(json!({
                "name": "backup1",
                "cloud_type": "tos",
                "access_key": "ak",
                "secret_key": "sk",
                "bucket_name": "bucket",
                "endpoint": "tos-cn-beijing.volces.com",
                "region": "cn-beijing",
                "prefix": "",
                "dst_dir": "/backup"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&server)
            .await;

        let config = SyncTaskConfig {
            name: "backup1".to_string(),
            cloud_type: CloudType::Tos,
            access_key: "ak".to_string(),
            secret_key: "sk".to_string(),
            bucket_name: "bucket".to_string(),
            endpoint: "tos-cn-beijing.volces.com".to_string(),
            region: "cn-beijing".to_string(),
            prefix: String::new(),
            dst_dir: "/backup".to_string(),
        };

        client_for(&server)
            .create_task(&config)
            .await
            .expect("create_task failed");
    }

    #[tokio::test]
    async fn test_list_tasks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wl/sync_cloud/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {
                    "tasks": [{
                        "name": "backup1",
                        "cloud_type": "oss",
                        "proc_file_count": 12,
                        "proc_info": {
                            "id": "1",
                            "status": "error",
                            "start_time": "2024-01-01T00:00:00Z",
                            "total_bytes": 0,
                            "error": "connection refused"
                        }
                    }]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tasks = client_for(&server).list_tasks().await.expect("list_tasks failed");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status(), &TaskStatus::Error);
        assert_eq!(tasks[0].proc_info.error.as_deref(), Some("connection refused"));
        assert_eq!(tasks[0].proc_info.end_time, None);
    }

    #[tokio::test]
    async fn test_list_tasks_without_data_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wl/sync_cloud/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 200 })))
            .mount(&server)
            .await;

        let tasks = client_for(&server).list_tasks().await.expect("list_tasks failed");
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_task_commands_send_id() {
        let server = MockServer::start().await;
        for endpoint in ["/wl/sync_cloud/start", "/wl/sync_cloud/stop", "/wl/sync_cloud/delete"] {
            Mock::given(method("POST"))
                .and(path(endpoint))
                .and(body_json(json!({ "id": "42" })))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = client_for(&server);
        client.start_task("42").await.expect("start_task failed");
        client.stop_task("42").await.expect("stop_task failed");
        client.delete_task("42").await.expect("delete_task failed");
    }

    #[tokio::test]
    async fn test_business_failure_surfaces_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wl/sync_cloud/start"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "message": "task is already running"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .start_task("1")
            .await
            .expect_err("start should fail");
        assert!(!err.is_transport());
        assert_eq!(err.user_message(), "task is already running");
    }

    #[tokio::test]
    async fn test_http_status_failure_uses_envelope_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wl/sync_cloud/delete"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "code": 500,
                "message": "storage offline"
            })))
            .mount(&server)
            .await;

        match client_for(&server).delete_task("1").await {
            Err(SyncCloudError::Api { code, message }) => {
                assert_eq!(code, 500);
                assert_eq!(message, "storage offline");
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wl/sync_cloud/list"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .list_tasks()
            .await
            .expect_err("list should fail");
        assert!(err.is_transport());
        assert!(matches!(err, SyncCloudError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_wrong_task_shape_is_serialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wl/sync_cloud/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": { "tasks": [{ "name": 5 }] }
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .list_tasks()
            .await
            .expect_err("list should fail");
        assert!(!err.is_transport());
        assert!(matches!(err, SyncCloudError::Serialization(_)));
    }
}
