/*
[INPUT]:  HTTP client configuration and sync cloud endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod api;
pub mod client;
pub mod error;
pub mod sync_cloud;

pub use api::SyncCloudApi;
pub use client::{ClientConfig, SyncCloudClient};
pub use error::{Result, SyncCloudError};
