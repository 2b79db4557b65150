use utoipa::{Modify, OpenApi};

use crate::features::predictions::{dtos as predictions_dtos, handlers as predictions_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::report_handler::submit_report,
        reports_handlers::report_handler::list_reports,
        reports_handlers::report_handler::report_statistics,
        reports_handlers::report_handler::update_report_status,
        // Predictions
        predictions_handlers::prediction_handler::assess_heuristic,
        predictions_handlers::prediction_handler::heuristic_parameters,
        predictions_handlers::prediction_handler::assess_gumbel,
        predictions_handlers::prediction_handler::gumbel_parameters,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Reports
            reports_models::ReportStatus,
            reports_models::FloodHeight,
            reports_models::ReportWindow,
            reports_dtos::CreateReportFields,
            reports_dtos::FloodReportResponseDto,
            reports_dtos::ReportStatisticsDto,
            reports_dtos::UpdateReportStatusDto,
            ApiResponse<reports_dtos::FloodReportResponseDto>,
            ApiResponse<Vec<reports_dtos::FloodReportResponseDto>>,
            ApiResponse<reports_dtos::ReportStatisticsDto>,
            // Predictions
            predictions_dtos::PredictionStatusDto,
            predictions_dtos::HeuristicPredictionRequestDto,
            predictions_dtos::HeuristicPredictionDto,
            predictions_dtos::HeuristicParametersDto,
            predictions_dtos::GumbelPredictionRequestDto,
            predictions_dtos::GumbelPredictionDto,
            predictions_dtos::GumbelParametersDto,
            ApiResponse<predictions_dtos::HeuristicPredictionDto>,
            ApiResponse<predictions_dtos::HeuristicParametersDto>,
            ApiResponse<predictions_dtos::GumbelPredictionDto>,
            ApiResponse<predictions_dtos::GumbelParametersDto>,
        )
    ),
    tags(
        (name = "reports", description = "Citizen flood reports"),
        (name = "predictions", description = "Flood-risk prediction models"),
    ),
    info(
        title = "Siaga Banjir API",
        version = "0.1.0",
        description = "Citizen flood reporting and early-warning API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
