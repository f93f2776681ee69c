/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public sync cloud adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{ClientConfig, Result, SyncCloudApi, SyncCloudClient, SyncCloudError};

// Re-export all types
pub use types::*;
