/*
[INPUT]:  SYNC_CLOUD_URL environment variable (optional)
[OUTPUT]: Sync task summary printed to stdout
[POS]:    Example - listing sync tasks
[UPDATE]: When the list endpoint or task model changes
*/

use sync_cloud_adapter::{ClientConfig, SyncCloudClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ClientConfig::default();
    if let Ok(url) = std::env::var("SYNC_CLOUD_URL") {
        config.base_url = url;
    }

    let client = SyncCloudClient::with_config(config)?;
    let tasks = client.list_tasks().await?;

    if tasks.is_empty() {
        println!("no sync tasks");
    }
    for task in tasks {
        println!(
            "{} [{}] {} files={} bytes={}",
            task.name,
            task.cloud_type,
            task.status(),
            task.proc_file_count,
            task.proc_info.total_bytes
        );
    }

    Ok(())
}
