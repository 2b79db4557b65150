use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{CreateFloodReport, FloodHeight, FloodReport};
use crate::features::reports::services::{ReportStore, SubmissionLimiter};
use crate::modules::storage::PhotoStorage;
use crate::shared::constants::QUOTA_FULL_MESSAGE;

/// Validated report fields accepted from a citizen submission
#[derive(Debug, Clone)]
pub struct NewReportSubmission {
    pub address: String,
    pub flood_height: FloodHeight,
    pub reporter_name: String,
    pub reporter_phone: Option<String>,
}

/// Photo artifact attached to a submission
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub data: Vec<u8>,
    pub content_type: String,
}

/// Orchestrates the report submission flow.
///
/// Ordering is load-bearing: limiter check first, then the photo artifact,
/// then the report insert. A photo-store failure must never leave a report
/// record behind, and a failed insert after a successful photo store deletes
/// the orphaned photo so no partial state survives.
pub struct ReportSubmissionService {
    store: Arc<dyn ReportStore>,
    photos: Arc<dyn PhotoStorage>,
    limiter: SubmissionLimiter,
}

impl ReportSubmissionService {
    pub fn new(
        store: Arc<dyn ReportStore>,
        photos: Arc<dyn PhotoStorage>,
        limiter: SubmissionLimiter,
    ) -> Self {
        Self {
            store,
            photos,
            limiter,
        }
    }

    pub async fn submit(
        &self,
        submission: NewReportSubmission,
        photo: Option<PhotoUpload>,
        submitter_ip: &str,
    ) -> Result<FloodReport> {
        if !self.limiter.may_submit(submitter_ip).await {
            return Err(AppError::RateLimitExceeded(QUOTA_FULL_MESSAGE.to_string()));
        }

        let photo_key = match photo {
            Some(upload) => Some(self.photos.store(upload.data, &upload.content_type).await?),
            None => None,
        };

        let create = CreateFloodReport {
            address: submission.address,
            flood_height: submission.flood_height,
            reporter_name: submission.reporter_name,
            reporter_phone: submission.reporter_phone,
            photo_key: photo_key.clone(),
            submitter_ip: submitter_ip.to_string(),
        };

        match self.store.insert(create).await {
            Ok(report) => Ok(report),
            Err(e) => {
                if let Some(key) = photo_key {
                    // Compensate: remove the orphaned photo, best-effort
                    if let Err(delete_err) = self.photos.delete(&key).await {
                        tracing::warn!(
                            "Failed to delete orphaned photo '{}' after insert failure: {}",
                            key,
                            delete_err
                        );
                    } else {
                        tracing::info!("Deleted orphaned photo '{}' after insert failure", key);
                    }
                }
                Err(e)
            }
        }
    }
}
