/*
[INPUT]:  Sync cloud operations needed by front ends
[OUTPUT]: Async trait abstracting the management API
[POS]:    HTTP layer - seam between UI state and transport
[UPDATE]: When adding endpoints that front ends call
*/

use std::sync::Arc;

use async_trait::async_trait;

use crate::http::{Result, SyncCloudClient};
use crate::types::{SyncTask, SyncTaskConfig};

/// Operations on the remote sync task service.
///
/// The server is the only source of truth; implementations must not cache.
#[async_trait]
pub trait SyncCloudApi: Send + Sync {
    async fn create_task(&self, config: &SyncTaskConfig) -> Result<()>;

    async fn list_tasks(&self) -> Result<Vec<SyncTask>>;

    async fn start_task(&self, id: &str) -> Result<()>;

    async fn stop_task(&self, id: &str) -> Result<()>;

    async fn delete_task(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl SyncCloudApi for SyncCloudClient {
    async fn create_task(&self, config: &SyncTaskConfig) -> Result<()> {
        SyncCloudClient::create_task(self, config).await
    }

    async fn list_tasks(&self) -> Result<Vec<SyncTask>> {
        SyncCloudClient::list_tasks(self).await
    }

    async fn start_task(&self, id: &str) -> Result<()> {
        SyncCloudClient::start_task(self, id).await
    }

    async fn stop_task(&self, id: &str) -> Result<()> {
        SyncCloudClient::stop_task(self, id).await
    }

    async fn delete_task(&self, id: &str) -> Result<()> {
        SyncCloudClient::delete_task(self, id).await
    }
}

#[async_trait]
impl<T: SyncCloudApi + ?Sized> SyncCloudApi for Arc<T> {
    async fn create_task(&self, config: &SyncTaskConfig) -> Result<()> {
        (**self).create_task(config).await
    }

    async fn list_tasks(&self) -> Result<Vec<SyncTask>> {
        (**self).list_tasks().await
    }

    async fn start_task(&self, id: &str) -> Result<()> {
        (**self).start_task(id).await
    }

    async fn stop_task(&self, id: &str) -> Result<()> {
        (**self).stop_task(id).await
    }

    async fn delete_task(&self, id: &str) -> Result<()> {
        (**self).delete_task(id).await
    }
}
