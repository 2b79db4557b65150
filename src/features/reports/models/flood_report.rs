use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Report status; the only mutable field on a stored report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Verified,
    Rejected,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "pending"),
            ReportStatus::Verified => write!(f, "verified"),
            ReportStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Ordered flood-height severity scale, ankle-deep up to above the neck
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Type, ToSchema,
)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FloodHeight {
    Ankle,
    Calf,
    Knee,
    Thigh,
    Waist,
    Chest,
    Neck,
    AboveNeck,
}

impl std::fmt::Display for FloodHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FloodHeight::Ankle => "ankle",
            FloodHeight::Calf => "calf",
            FloodHeight::Knee => "knee",
            FloodHeight::Thigh => "thigh",
            FloodHeight::Waist => "waist",
            FloodHeight::Chest => "chest",
            FloodHeight::Neck => "neck",
            FloodHeight::AboveNeck => "above_neck",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for FloodHeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ankle" => Ok(FloodHeight::Ankle),
            "calf" => Ok(FloodHeight::Calf),
            "knee" => Ok(FloodHeight::Knee),
            "thigh" => Ok(FloodHeight::Thigh),
            "waist" => Ok(FloodHeight::Waist),
            "chest" => Ok(FloodHeight::Chest),
            "neck" => Ok(FloodHeight::Neck),
            "above_neck" => Ok(FloodHeight::AboveNeck),
            other => Err(format!("Unknown flood height '{}'", other)),
        }
    }
}

/// Database model for a citizen flood report.
///
/// The id is a monotonic rowid assigned at insert and never reused; id order
/// reflects insertion order and breaks "most recent" ties.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FloodReport {
    pub id: i64,
    pub address: String,
    pub flood_height: FloodHeight,
    pub reporter_name: String,
    pub reporter_phone: Option<String>,
    pub photo_key: Option<String>,
    pub submitter_ip: String,
    pub report_date: NaiveDate,
    pub report_time: NaiveTime,
    pub created_at: DateTime<Utc>,
    pub status: ReportStatus,
}

/// Data for creating a new flood report
#[derive(Debug, Clone)]
pub struct CreateFloodReport {
    pub address: String,
    pub flood_height: FloodHeight,
    pub reporter_name: String,
    pub reporter_phone: Option<String>,
    pub photo_key: Option<String>,
    pub submitter_ip: String,
}

/// Date filter applied before aggregation or listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportWindow {
    Today,
    Month,
    All,
}

impl Default for ReportWindow {
    fn default() -> Self {
        ReportWindow::Today
    }
}
