pub mod report_aggregator;
pub mod report_store;
pub mod submission_limiter;
pub mod submission_service;

pub use report_aggregator::{ReportAggregator, ReportStatistics};
pub use report_store::{ReportStore, SqliteReportStore};
pub use submission_limiter::SubmissionLimiter;
pub use submission_service::{NewReportSubmission, PhotoUpload, ReportSubmissionService};
