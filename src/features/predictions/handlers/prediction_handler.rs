use axum::Json;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::predictions::dtos::{
    GumbelParametersDto, GumbelPredictionDto, GumbelPredictionRequestDto, HeuristicParametersDto,
    HeuristicPredictionDto, HeuristicPredictionRequestDto,
};
use crate::features::predictions::services::{GumbelRiskModel, HeuristicRiskModel};
use crate::shared::types::ApiResponse;

/// Assess flood risk with the heuristic weighted-sigmoid model
///
/// Inputs are not range-checked; out-of-range readings are tolerated. A
/// malformed numeric input yields an ERROR-status assessment instead of a
/// failure response.
#[utoipa::path(
    post,
    path = "/api/predictions/heuristic",
    request_body = HeuristicPredictionRequestDto,
    responses(
        (status = 200, description = "Risk assessment computed", body = ApiResponse<HeuristicPredictionDto>),
        (status = 400, description = "Malformed request body")
    ),
    tag = "predictions"
)]
pub async fn assess_heuristic(
    AppJson(dto): AppJson<HeuristicPredictionRequestDto>,
) -> Result<Json<ApiResponse<HeuristicPredictionDto>>> {
    let prediction = HeuristicRiskModel::assess_with_temp_range(
        dto.rainfall_mm,
        dto.water_level,
        dto.humidity_pct,
        dto.temp_min_c,
        dto.temp_max_c,
    );

    Ok(Json(ApiResponse::success(
        Some(prediction.into()),
        None,
        None,
    )))
}

/// Get the heuristic model parameter sheet
#[utoipa::path(
    get,
    path = "/api/predictions/heuristic/parameters",
    responses(
        (status = 200, description = "Model parameters", body = ApiResponse<HeuristicParametersDto>)
    ),
    tag = "predictions"
)]
pub async fn heuristic_parameters() -> Json<ApiResponse<HeuristicParametersDto>> {
    Json(ApiResponse::success(
        Some(HeuristicParametersDto::current()),
        None,
        None,
    ))
}

/// Assess flood risk with the Gumbel extreme-value model
#[utoipa::path(
    post,
    path = "/api/predictions/gumbel",
    request_body = GumbelPredictionRequestDto,
    responses(
        (status = 200, description = "Risk assessment computed", body = ApiResponse<GumbelPredictionDto>),
        (status = 400, description = "Malformed request body")
    ),
    tag = "predictions"
)]
pub async fn assess_gumbel(
    AppJson(dto): AppJson<GumbelPredictionRequestDto>,
) -> Result<Json<ApiResponse<GumbelPredictionDto>>> {
    let prediction = GumbelRiskModel::assess(dto.rainfall_mm, dto.return_period_years);

    Ok(Json(ApiResponse::success(
        Some(prediction.into()),
        None,
        None,
    )))
}

/// Get the Gumbel model parameter sheet
#[utoipa::path(
    get,
    path = "/api/predictions/gumbel/parameters",
    responses(
        (status = 200, description = "Model parameters", body = ApiResponse<GumbelParametersDto>)
    ),
    tag = "predictions"
)]
pub async fn gumbel_parameters() -> Json<ApiResponse<GumbelParametersDto>> {
    Json(ApiResponse::success(
        Some(GumbelParametersDto::current()),
        None,
        None,
    ))
}
