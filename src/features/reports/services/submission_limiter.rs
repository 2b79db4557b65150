use std::sync::Arc;

use chrono::Local;

use crate::features::reports::services::ReportStore;

/// Enforces the per-submitter daily submission cap.
///
/// The cap is a hard count against today's `report_date`, resetting at the
/// local-midnight boundary. If the count query fails the limiter fails open
/// and allows the submission: blocking legitimate reporters is worse than
/// letting a few extra reports through while the store is unhealthy.
pub struct SubmissionLimiter {
    store: Arc<dyn ReportStore>,
    daily_limit: i64,
}

impl SubmissionLimiter {
    pub fn new(store: Arc<dyn ReportStore>, daily_limit: i64) -> Self {
        Self { store, daily_limit }
    }

    /// Whether a new report from this submitter may be accepted today.
    /// Read-only; the caller performs the actual insert after approval.
    pub async fn may_submit(&self, submitter_ip: &str) -> bool {
        let today = Local::now().date_naive();

        match self.store.count_for_date(submitter_ip, today).await {
            Ok(count) => {
                tracing::debug!(
                    "Daily report count for {}: {}/{}",
                    submitter_ip,
                    count,
                    self.daily_limit
                );
                count < self.daily_limit
            }
            Err(e) => {
                tracing::warn!(
                    "Daily limit check failed for {}, allowing submission: {}",
                    submitter_ip,
                    e
                );
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::*;
    use crate::core::error::{AppError, Result};
    use crate::features::reports::models::{
        CreateFloodReport, FloodReport, ReportStatus, ReportWindow,
    };
    use crate::shared::constants::DAILY_REPORT_LIMIT;

    /// Store stub returning a fixed count, or an error
    struct FixedCountStore {
        count: Result<i64>,
    }

    impl FixedCountStore {
        fn counting(count: i64) -> Self {
            Self { count: Ok(count) }
        }

        fn failing() -> Self {
            Self {
                count: Err(AppError::Internal("count query failed".to_string())),
            }
        }
    }

    #[async_trait]
    impl ReportStore for FixedCountStore {
        async fn insert(&self, _data: CreateFloodReport) -> Result<FloodReport> {
            unimplemented!("not used by the limiter")
        }

        async fn count_for_date(&self, _submitter_ip: &str, _date: NaiveDate) -> Result<i64> {
            match &self.count {
                Ok(c) => Ok(*c),
                Err(_) => Err(AppError::Internal("count query failed".to_string())),
            }
        }

        async fn list(&self, _window: ReportWindow) -> Result<Vec<FloodReport>> {
            unimplemented!("not used by the limiter")
        }

        async fn update_status(&self, _id: i64, _status: ReportStatus) -> Result<FloodReport> {
            unimplemented!("not used by the limiter")
        }
    }

    fn limiter_with(store: FixedCountStore) -> SubmissionLimiter {
        SubmissionLimiter::new(Arc::new(store), DAILY_REPORT_LIMIT)
    }

    #[tokio::test]
    async fn test_allows_fresh_submitter() {
        let limiter = limiter_with(FixedCountStore::counting(0));
        assert!(limiter.may_submit("10.0.0.1").await);
    }

    #[tokio::test]
    async fn test_allows_below_cap() {
        let limiter = limiter_with(FixedCountStore::counting(9));
        assert!(limiter.may_submit("10.0.0.1").await);
    }

    #[tokio::test]
    async fn test_denies_at_cap() {
        let limiter = limiter_with(FixedCountStore::counting(10));
        assert!(!limiter.may_submit("10.0.0.1").await);
    }

    #[tokio::test]
    async fn test_denies_above_cap() {
        let limiter = limiter_with(FixedCountStore::counting(25));
        assert!(!limiter.may_submit("10.0.0.1").await);
    }

    #[tokio::test]
    async fn test_fails_open_when_count_query_fails() {
        let limiter = limiter_with(FixedCountStore::failing());
        assert!(limiter.may_submit("10.0.0.1").await);
    }
}
