use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch},
    Router,
};

use crate::features::reports::handlers::{self, ReportsState};
use crate::shared::constants::MAX_PHOTO_SIZE;

/// Headroom for the non-photo multipart fields and boundary framing
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// Create routes for the reports feature.
///
/// Axum's default body limit (2 MB) is below the photo cap, so the limit is
/// raised here; the handler still enforces `MAX_PHOTO_SIZE` on the photo part
/// itself with a specific error message.
pub fn routes(state: ReportsState) -> Router {
    Router::new()
        .route(
            "/api/reports",
            get(handlers::list_reports).post(handlers::submit_report),
        )
        .route(
            "/api/reports/statistics",
            get(handlers::report_statistics),
        )
        .route(
            "/api/reports/{id}/status",
            patch(handlers::update_report_status),
        )
        .layer(DefaultBodyLimit::max(MAX_PHOTO_SIZE + MULTIPART_OVERHEAD))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use serde_json::json;
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;
    use crate::core::error::Result;
    use crate::features::reports::services::{
        ReportStore, ReportSubmissionService, SqliteReportStore, SubmissionLimiter,
    };
    use crate::modules::storage::PhotoStorage;
    use crate::shared::constants::DAILY_REPORT_LIMIT;

    /// Keeps photo bytes in memory, keyed like the object store would
    struct MemoryPhotoStorage {
        keys: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PhotoStorage for MemoryPhotoStorage {
        async fn store(&self, _data: Vec<u8>, _content_type: &str) -> Result<String> {
            let mut keys = self.keys.lock().unwrap();
            let key = format!("reports/test-{}.jpg", keys.len() + 1);
            keys.push(key.clone());
            Ok(key)
        }

        async fn delete(&self, key: &str) -> Result<()> {
            self.keys.lock().unwrap().retain(|k| k != key);
            Ok(())
        }
    }

    async fn test_server() -> TestServer {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();

        let store: Arc<dyn ReportStore> = Arc::new(SqliteReportStore::new(pool));
        let photos: Arc<dyn PhotoStorage> = Arc::new(MemoryPhotoStorage {
            keys: Mutex::new(Vec::new()),
        });
        let limiter = SubmissionLimiter::new(store.clone(), DAILY_REPORT_LIMIT);
        let submission_service = Arc::new(ReportSubmissionService::new(
            store.clone(),
            photos,
            limiter,
        ));

        let state = ReportsState {
            store,
            submission_service,
        };

        TestServer::new(routes(state)).unwrap()
    }

    fn report_form(address: &str) -> MultipartForm {
        MultipartForm::new()
            .add_text("address", address.to_string())
            .add_text("flood_height", "knee")
            .add_text("reporter_name", "Budi")
    }

    #[tokio::test]
    async fn test_submit_then_list() {
        let server = test_server().await;

        let response = server
            .post("/api/reports")
            .add_header("x-forwarded-for", "10.0.0.1")
            .multipart(report_form("Jl. Merdeka No. 12"))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Laporan berhasil dikirim!");
        assert_eq!(body["data"]["status"], "pending");
        assert!(body["data"].get("submitter_ip").is_none());

        let response = server.get("/api/reports").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"][0]["address"], "Jl. Merdeka No. 12");
    }

    #[tokio::test]
    async fn test_submit_with_photo_links_key() {
        let server = test_server().await;

        let photo = Part::bytes(vec![0xFF, 0xD8, 0xFF])
            .file_name("banjir.jpg")
            .mime_type("image/jpeg");
        let form = report_form("Jl. Pahlawan No. 7").add_part("photo", photo);

        let response = server
            .post("/api/reports")
            .add_header("x-forwarded-for", "10.0.0.1")
            .multipart(form)
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        assert!(body["data"]["photo_key"]
            .as_str()
            .unwrap()
            .starts_with("reports/"));
    }

    #[tokio::test]
    async fn test_photo_between_default_body_limit_and_cap_is_accepted() {
        let server = test_server().await;

        // 3 MB: over axum's default 2 MB body limit, under the photo cap
        let photo = Part::bytes(vec![0u8; 3 * 1024 * 1024])
            .file_name("banjir.jpg")
            .mime_type("image/jpeg");
        let form = report_form("Jl. Pahlawan No. 7").add_part("photo", photo);

        let response = server
            .post("/api/reports")
            .add_header("x-forwarded-for", "10.0.0.1")
            .multipart(form)
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_photo_over_cap_gets_specific_rejection() {
        let server = test_server().await;

        let photo = Part::bytes(vec![0u8; MAX_PHOTO_SIZE + 1])
            .file_name("banjir.jpg")
            .mime_type("image/jpeg");
        let form = report_form("Jl. Pahlawan No. 7").add_part("photo", photo);

        let response = server
            .post("/api/reports")
            .add_header("x-forwarded-for", "10.0.0.1")
            .multipart(form)
            .await;

        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Photo too large"));
    }

    #[tokio::test]
    async fn test_submit_rejects_unknown_height() {
        let server = test_server().await;

        let form = MultipartForm::new()
            .add_text("address", "Jl. Merdeka No. 12")
            .add_text("flood_height", "tsunami")
            .add_text("reporter_name", "Budi");

        let response = server
            .post("/api/reports")
            .add_header("x-forwarded-for", "10.0.0.1")
            .multipart(form)
            .await;

        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_quota_returns_429_with_advisory() {
        let server = test_server().await;

        for _ in 0..DAILY_REPORT_LIMIT {
            server
                .post("/api/reports")
                .add_header("x-forwarded-for", "10.0.0.1")
                .multipart(report_form("Jl. Merdeka No. 12"))
                .await
                .assert_status(axum::http::StatusCode::CREATED);
        }

        let response = server
            .post("/api/reports")
            .add_header("x-forwarded-for", "10.0.0.1")
            .multipart(report_form("Jl. Merdeka No. 12"))
            .await;

        response.assert_status(axum::http::StatusCode::TOO_MANY_REQUESTS);
        let body: serde_json::Value = response.json();
        assert_eq!(
            body["message"],
            "Maaf, kuota laporan hari ini telah penuh (maksimal 10 laporan per IP)"
        );

        // Another submitter still gets through
        server
            .post("/api/reports")
            .add_header("x-forwarded-for", "10.0.0.2")
            .multipart(report_form("Jl. Merdeka No. 12"))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_statistics_over_submitted_reports() {
        let server = test_server().await;

        for address in ["Jl. A", "Jl. A", "Jl. B"] {
            server
                .post("/api/reports")
                .add_header("x-forwarded-for", "10.0.0.1")
                .multipart(report_form(address))
                .await
                .assert_status(axum::http::StatusCode::CREATED);
        }

        let response = server.get("/api/reports/statistics?window=today").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["total_reports"], 3);
        assert_eq!(body["data"]["most_affected_area"]["value"], "Jl. A");
        assert_eq!(body["data"]["most_affected_area"]["count"], 2);
        assert_eq!(body["data"]["most_common_height"]["value"], "knee");
    }

    #[tokio::test]
    async fn test_update_status() {
        let server = test_server().await;

        let response = server
            .post("/api/reports")
            .add_header("x-forwarded-for", "10.0.0.1")
            .multipart(report_form("Jl. Merdeka No. 12"))
            .await;
        let body: serde_json::Value = response.json();
        let id = body["data"]["id"].as_i64().unwrap();

        let response = server
            .patch(&format!("/api/reports/{}/status", id))
            .json(&json!({ "status": "verified" }))
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["status"], "verified");

        let response = server
            .patch("/api/reports/9999/status")
            .json(&json!({ "status": "rejected" }))
            .await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);
    }
}
