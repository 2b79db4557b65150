use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveDate, Utc};
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{
    CreateFloodReport, FloodReport, ReportStatus, ReportWindow,
};

/// Persistence collaborator for flood reports.
///
/// The core only needs insert, count-by-submitter-for-date and list-by-window;
/// keeping this behind a trait lets the limiter and submission flow be
/// exercised against failing stores.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn insert(&self, data: CreateFloodReport) -> Result<FloodReport>;

    async fn count_for_date(&self, submitter_ip: &str, date: NaiveDate) -> Result<i64>;

    async fn list(&self, window: ReportWindow) -> Result<Vec<FloodReport>>;

    async fn update_status(&self, id: i64, status: ReportStatus) -> Result<FloodReport>;
}

/// SQLite-backed report store
pub struct SqliteReportStore {
    pool: SqlitePool,
}

const REPORT_COLUMNS: &str = "id, address, flood_height, reporter_name, reporter_phone, \
     photo_key, submitter_ip, report_date, report_time, created_at, status";

/// First day of the report's month and first day of the next month
fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today
        .with_day(1)
        .expect("first day of month is always valid");
    let end = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
    }
    .expect("first day of next month is always valid");
    (start, end)
}

impl SqliteReportStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStore for SqliteReportStore {
    async fn insert(&self, data: CreateFloodReport) -> Result<FloodReport> {
        let now_local = Local::now();
        let report_date = now_local.date_naive();
        let report_time = now_local.time();
        let created_at = Utc::now();

        let sql = format!(
            "INSERT INTO flood_reports \
             (address, flood_height, reporter_name, reporter_phone, photo_key, \
              submitter_ip, report_date, report_time, created_at, status) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {REPORT_COLUMNS}"
        );

        let report = sqlx::query_as::<_, FloodReport>(&sql)
            .bind(&data.address)
            .bind(data.flood_height)
            .bind(&data.reporter_name)
            .bind(&data.reporter_phone)
            .bind(&data.photo_key)
            .bind(&data.submitter_ip)
            .bind(report_date)
            .bind(report_time)
            .bind(created_at)
            .bind(ReportStatus::Pending)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert flood report: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Created flood report: id={}, height={}, date={}",
            report.id,
            report.flood_height,
            report.report_date
        );

        Ok(report)
    }

    async fn count_for_date(&self, submitter_ip: &str, date: NaiveDate) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM flood_reports WHERE submitter_ip = ? AND report_date = ?",
        )
        .bind(submitter_ip)
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count reports for submitter: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(count)
    }

    async fn list(&self, window: ReportWindow) -> Result<Vec<FloodReport>> {
        let today = Local::now().date_naive();

        let query = match window {
            ReportWindow::Today => {
                let sql = format!(
                    "SELECT {REPORT_COLUMNS} FROM flood_reports \
                     WHERE report_date = ? \
                     ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, FloodReport>(&sql)
                    .bind(today)
                    .fetch_all(&self.pool)
                    .await
            }
            ReportWindow::Month => {
                let (start, end) = month_bounds(today);
                let sql = format!(
                    "SELECT {REPORT_COLUMNS} FROM flood_reports \
                     WHERE report_date >= ? AND report_date < ? \
                     ORDER BY report_date DESC, created_at DESC, id DESC"
                );
                sqlx::query_as::<_, FloodReport>(&sql)
                    .bind(start)
                    .bind(end)
                    .fetch_all(&self.pool)
                    .await
            }
            ReportWindow::All => {
                let sql = format!(
                    "SELECT {REPORT_COLUMNS} FROM flood_reports \
                     ORDER BY report_date DESC, created_at DESC, id DESC"
                );
                sqlx::query_as::<_, FloodReport>(&sql)
                    .fetch_all(&self.pool)
                    .await
            }
        };

        query.map_err(|e| {
            tracing::error!("Failed to list flood reports: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update_status(&self, id: i64, status: ReportStatus) -> Result<FloodReport> {
        let sql = format!(
            "UPDATE flood_reports SET status = ? WHERE id = ? RETURNING {REPORT_COLUMNS}"
        );

        let report = sqlx::query_as::<_, FloodReport>(&sql)
            .bind(status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update report status: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;

        tracing::info!("Updated report {} status to {}", id, status);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;
    use crate::features::reports::models::FloodHeight;

    async fn test_store() -> SqliteReportStore {
        // A single connection keeps the in-memory database alive and shared
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("migrations");
        SqliteReportStore::new(pool)
    }

    fn sample_report(ip: &str) -> CreateFloodReport {
        CreateFloodReport {
            address: "Jl. Merdeka No. 1".to_string(),
            flood_height: FloodHeight::Knee,
            reporter_name: "Budi".to_string(),
            reporter_phone: Some("081234567890".to_string()),
            photo_key: None,
            submitter_ip: ip.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_list_today_round_trip() {
        let store = test_store().await;

        let created = store.insert(sample_report("10.0.0.1")).await.unwrap();
        assert!(created.id >= 1);
        assert_eq!(created.status, ReportStatus::Pending);

        let today = store.list(ReportWindow::Today).await.unwrap();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0], created);
        assert_eq!(today[0].address, "Jl. Merdeka No. 1");
        assert_eq!(today[0].flood_height, FloodHeight::Knee);
        assert_eq!(today[0].reporter_phone.as_deref(), Some("081234567890"));
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let store = test_store().await;

        let first = store.insert(sample_report("10.0.0.1")).await.unwrap();
        let second = store.insert(sample_report("10.0.0.2")).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_count_for_date_scoped_to_submitter() {
        let store = test_store().await;
        let today = Local::now().date_naive();

        for _ in 0..3 {
            store.insert(sample_report("10.0.0.1")).await.unwrap();
        }
        store.insert(sample_report("10.0.0.2")).await.unwrap();

        assert_eq!(store.count_for_date("10.0.0.1", today).await.unwrap(), 3);
        assert_eq!(store.count_for_date("10.0.0.2", today).await.unwrap(), 1);
        assert_eq!(store.count_for_date("10.0.0.3", today).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_today_reports_appear_in_month_and_all_windows() {
        let store = test_store().await;
        store.insert(sample_report("10.0.0.1")).await.unwrap();

        assert_eq!(store.list(ReportWindow::Month).await.unwrap().len(), 1);
        assert_eq!(store.list(ReportWindow::All).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_status() {
        let store = test_store().await;
        let created = store.insert(sample_report("10.0.0.1")).await.unwrap();

        let updated = store
            .update_status(created.id, ReportStatus::Verified)
            .await
            .unwrap();
        assert_eq!(updated.status, ReportStatus::Verified);
        assert_eq!(updated.id, created.id);

        let missing = store.update_status(9999, ReportStatus::Rejected).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_month_bounds() {
        let mid_june = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        let (start, end) = month_bounds(mid_june);
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 6, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 7, 1).unwrap());

        let december = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        let (start, end) = month_bounds(december);
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
    }
}
