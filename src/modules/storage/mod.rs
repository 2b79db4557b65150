//! Storage module for report photo artifacts.
//!
//! Provides the `PhotoStorage` collaborator interface and a MinIO/S3
//! implementation.

mod minio_client;

use async_trait::async_trait;

use crate::core::error::AppError;

pub use minio_client::MinIOClient;

/// Photo-storage collaborator.
///
/// `store` returns an opaque reference (object key) for the persisted bytes;
/// `delete` is best-effort and used only to compensate for a failed report
/// insert.
#[async_trait]
pub trait PhotoStorage: Send + Sync {
    async fn store(&self, data: Vec<u8>, content_type: &str) -> Result<String, AppError>;

    async fn delete(&self, key: &str) -> Result<(), AppError>;
}
