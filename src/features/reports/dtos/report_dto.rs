use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::reports::models::{
    FloodHeight, FloodReport, ReportStatus, ReportWindow,
};
use crate::features::reports::services::ReportStatistics;
use crate::shared::validation::PHONE_REGEX;

/// Text fields of a multipart report submission, validated before the
/// submission flow runs
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReportFields {
    #[validate(length(min = 1, message = "Address cannot be empty"))]
    pub address: String,
    pub flood_height: FloodHeight,
    #[validate(length(min = 1, message = "Reporter name cannot be empty"))]
    pub reporter_name: String,
    #[validate(regex(
        path = *PHONE_REGEX,
        message = "Phone number must be 8-15 digits, optionally prefixed with +"
    ))]
    pub reporter_phone: Option<String>,
}

/// Public view of a stored report; the submitter address never leaves the server
#[derive(Debug, Serialize, ToSchema)]
pub struct FloodReportResponseDto {
    pub id: i64,
    pub address: String,
    pub flood_height: FloodHeight,
    pub reporter_name: String,
    pub reporter_phone: Option<String>,
    pub photo_key: Option<String>,
    pub report_date: NaiveDate,
    pub report_time: NaiveTime,
    pub created_at: DateTime<Utc>,
    pub status: ReportStatus,
}

impl From<FloodReport> for FloodReportResponseDto {
    fn from(report: FloodReport) -> Self {
        Self {
            id: report.id,
            address: report.address,
            flood_height: report.flood_height,
            reporter_name: report.reporter_name,
            reporter_phone: report.reporter_phone,
            photo_key: report.photo_key,
            report_date: report.report_date,
            report_time: report.report_time,
            created_at: report.created_at,
            status: report.status,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CountedValueDto<T> {
    pub value: T,
    pub count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReportStatisticsDto {
    pub total_reports: i64,
    pub avg_per_day: f64,
    pub most_common_height: Option<CountedValueDto<FloodHeight>>,
    pub most_affected_area: Option<CountedValueDto<String>>,
}

impl From<ReportStatistics> for ReportStatisticsDto {
    fn from(stats: ReportStatistics) -> Self {
        Self {
            total_reports: stats.total_reports,
            avg_per_day: stats.avg_per_day,
            most_common_height: stats
                .most_common_height
                .map(|(value, count)| CountedValueDto { value, count }),
            most_affected_area: stats
                .most_affected_area
                .map(|(value, count)| CountedValueDto { value, count }),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    pub status: ReportStatus,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ReportWindowQuery {
    /// Date window: today (default), month, or all
    #[serde(default)]
    pub window: ReportWindow,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(phone: Option<&str>) -> CreateReportFields {
        CreateReportFields {
            address: "Jl. Merdeka No. 12".to_string(),
            flood_height: FloodHeight::Knee,
            reporter_name: "Budi".to_string(),
            reporter_phone: phone.map(|p| p.to_string()),
        }
    }

    #[test]
    fn test_valid_fields_pass() {
        assert!(fields(Some("+628123456789")).validate().is_ok());
        assert!(fields(None).validate().is_ok());
    }

    #[test]
    fn test_empty_address_rejected() {
        let mut f = fields(None);
        f.address = String::new();
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_malformed_phone_rejected() {
        assert!(fields(Some("not-a-phone")).validate().is_err());
        assert!(fields(Some("123")).validate().is_err());
    }
}
