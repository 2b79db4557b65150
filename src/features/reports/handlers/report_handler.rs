use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use validator::Validate;

use crate::core::error::AppError;
use crate::core::extractor::{AppJson, SubmitterIp};
use crate::features::reports::dtos::{
    CreateReportFields, FloodReportResponseDto, ReportStatisticsDto, ReportWindowQuery,
    UpdateReportStatusDto,
};
use crate::features::reports::services::{
    NewReportSubmission, PhotoUpload, ReportAggregator, ReportStore, ReportSubmissionService,
};
use crate::shared::constants::{
    is_photo_mime_type_allowed, MAX_PHOTO_SIZE, REPORT_ACCEPTED_MESSAGE,
};
use crate::shared::types::{ApiResponse, Meta};

/// State for report handlers
#[derive(Clone)]
pub struct ReportsState {
    pub store: Arc<dyn ReportStore>,
    pub submission_service: Arc<ReportSubmissionService>,
}

/// Submit a new flood report
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = "reports",
    request_body(
        content = CreateReportFields,
        content_type = "multipart/form-data",
        description = "Report fields plus an optional photo field"
    ),
    responses(
        (status = 201, description = "Report accepted", body = ApiResponse<FloodReportResponseDto>),
        (status = 400, description = "Invalid fields or unsupported photo"),
        (status = 429, description = "Daily submission quota exhausted")
    )
)]
pub async fn submit_report(
    SubmitterIp(submitter_ip): SubmitterIp,
    State(state): State<ReportsState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<FloodReportResponseDto>>), AppError> {
    let mut address: Option<String> = None;
    let mut flood_height: Option<String> = None;
    let mut reporter_name: Option<String> = None;
    let mut reporter_phone: Option<String> = None;
    let mut photo: Option<PhotoUpload> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "address" => address = Some(read_text_field(field).await?),
            "flood_height" => flood_height = Some(read_text_field(field).await?),
            "reporter_name" => reporter_name = Some(read_text_field(field).await?),
            "reporter_phone" => {
                let value = read_text_field(field).await?;
                if !value.is_empty() {
                    reporter_phone = Some(value);
                }
            }
            "photo" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read photo bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read photo data: {}", e))
                })?;

                photo = Some(PhotoUpload {
                    data: data.to_vec(),
                    content_type,
                });
            }
            other => {
                debug!("Ignoring unknown field: {}", other);
            }
        }
    }

    let address = address.ok_or_else(|| AppError::BadRequest("Address is required".to_string()))?;
    let flood_height =
        flood_height.ok_or_else(|| AppError::BadRequest("Flood height is required".to_string()))?;
    let reporter_name = reporter_name
        .ok_or_else(|| AppError::BadRequest("Reporter name is required".to_string()))?;

    let flood_height = flood_height
        .parse()
        .map_err(|e: String| AppError::BadRequest(e))?;

    if let Some(ref upload) = photo {
        if upload.data.len() > MAX_PHOTO_SIZE {
            return Err(AppError::BadRequest(format!(
                "Photo too large. Maximum size is {} bytes ({} MB)",
                MAX_PHOTO_SIZE,
                MAX_PHOTO_SIZE / 1024 / 1024
            )));
        }

        if !is_photo_mime_type_allowed(&upload.content_type) {
            return Err(AppError::BadRequest(format!(
                "Photo type '{}' is not allowed. Only images (image/*) are accepted",
                upload.content_type
            )));
        }
    }

    let fields = CreateReportFields {
        address,
        flood_height,
        reporter_name,
        reporter_phone,
    };
    fields
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let submission = NewReportSubmission {
        address: fields.address,
        flood_height: fields.flood_height,
        reporter_name: fields.reporter_name,
        reporter_phone: fields.reporter_phone,
    };

    let report = state
        .submission_service
        .submit(submission, photo, &submitter_ip)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(report.into()),
            Some(REPORT_ACCEPTED_MESSAGE.to_string()),
            None,
        )),
    ))
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map(|s| s.trim().to_string())
        .map_err(|e| AppError::BadRequest(format!("Failed to read field value: {}", e)))
}

/// List flood reports within a date window
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "reports",
    params(ReportWindowQuery),
    responses(
        (status = 200, description = "Reports in the window, most recent first", body = ApiResponse<Vec<FloodReportResponseDto>>)
    )
)]
pub async fn list_reports(
    Query(query): Query<ReportWindowQuery>,
    State(state): State<ReportsState>,
) -> Result<Json<ApiResponse<Vec<FloodReportResponseDto>>>, AppError> {
    let reports = state.store.list(query.window).await?;
    let total = reports.len() as i64;
    let dtos: Vec<FloodReportResponseDto> = reports.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Summary statistics over a date window
#[utoipa::path(
    get,
    path = "/api/reports/statistics",
    tag = "reports",
    params(ReportWindowQuery),
    responses(
        (status = 200, description = "Aggregated report statistics", body = ApiResponse<ReportStatisticsDto>)
    )
)]
pub async fn report_statistics(
    Query(query): Query<ReportWindowQuery>,
    State(state): State<ReportsState>,
) -> Result<Json<ApiResponse<ReportStatisticsDto>>, AppError> {
    let reports = state.store.list(query.window).await?;
    let stats = ReportAggregator::summarize(&reports);

    Ok(Json(ApiResponse::success(Some(stats.into()), None, None)))
}

/// Update the verification status of a report
#[utoipa::path(
    patch,
    path = "/api/reports/{id}/status",
    tag = "reports",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<FloodReportResponseDto>),
        (status = 404, description = "Report not found")
    )
)]
pub async fn update_report_status(
    Path(id): Path<i64>,
    State(state): State<ReportsState>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ApiResponse<FloodReportResponseDto>>, AppError> {
    let report = state.store.update_status(id, dto.status).await?;

    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}
