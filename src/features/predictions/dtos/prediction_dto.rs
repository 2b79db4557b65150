use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::predictions::models::{
    Prediction, RiskStatus, HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD,
};
use crate::features::predictions::services::gumbel_model::{
    self, GumbelAssessment, GumbelParameters,
};
use crate::features::predictions::services::heuristic_model::{
    self, HeuristicAssessment, TemperatureRange,
};

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Request DTO for the heuristic weighted-sigmoid assessment
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct HeuristicPredictionRequestDto {
    /// Rainfall in millimeters (nominal 0-300)
    pub rainfall_mm: f64,
    /// Water level in mdpl (nominal 60-150)
    pub water_level: f64,
    /// Relative humidity percentage (nominal 0-100)
    pub humidity_pct: f64,
    /// Minimum temperature in Celsius
    pub temp_min_c: f64,
    /// Maximum temperature in Celsius
    pub temp_max_c: f64,
}

/// Request DTO for the Gumbel extreme-value assessment
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GumbelPredictionRequestDto {
    /// Rainfall in millimeters
    pub rainfall_mm: f64,
    /// Return period in years (typically 5, 10, 15, 25 or 50)
    pub return_period_years: u32,
}

/// Status presented to API consumers; ERROR marks a degraded assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredictionStatusDto {
    Low,
    Medium,
    High,
    Error,
}

impl From<RiskStatus> for PredictionStatusDto {
    fn from(status: RiskStatus) -> Self {
        match status {
            RiskStatus::Low => PredictionStatusDto::Low,
            RiskStatus::Medium => PredictionStatusDto::Medium,
            RiskStatus::High => PredictionStatusDto::High,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TemperatureRangeDto {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl From<TemperatureRange> for TemperatureRangeDto {
    fn from(r: TemperatureRange) -> Self {
        Self {
            min: r.min,
            max: r.max,
            average: r.average,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HeuristicInputValuesDto {
    pub rainfall_mm: f64,
    pub water_level: f64,
    pub humidity_pct: f64,
    pub temperature_c: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HeuristicParametersUsedDto {
    pub weights: Vec<f64>,
    pub normalization_factors: Vec<f64>,
    pub input_values: HeuristicInputValuesDto,
}

/// Response DTO for the heuristic assessment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HeuristicPredictionDto {
    pub risk_level: f64,
    pub status: PredictionStatusDto,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_features: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_range: Option<TemperatureRangeDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters_used: Option<HeuristicParametersUsedDto>,
}

impl From<Prediction<HeuristicAssessment>> for HeuristicPredictionDto {
    fn from(prediction: Prediction<HeuristicAssessment>) -> Self {
        match prediction {
            Prediction::Assessed(a) => Self {
                risk_level: round3(a.risk_level),
                status: a.status.into(),
                message: a.message,
                normalized_features: Some(a.normalized_features.to_vec()),
                temperature_range: a.temperature_range.map(Into::into),
                parameters_used: Some(HeuristicParametersUsedDto {
                    weights: heuristic_model::WEIGHTS.to_vec(),
                    normalization_factors: heuristic_model::NORMALIZATION_FACTORS.to_vec(),
                    input_values: HeuristicInputValuesDto {
                        rainfall_mm: a.inputs.rainfall_mm,
                        water_level: a.inputs.water_level,
                        humidity_pct: a.inputs.humidity_pct,
                        temperature_c: a.inputs.temperature_c,
                    },
                }),
            },
            Prediction::Degraded { reason } => Self {
                risk_level: 0.0,
                status: PredictionStatusDto::Error,
                message: format!("Error dalam prediksi ANN: {}", reason),
                normalized_features: None,
                temperature_range: None,
                parameters_used: None,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GumbelParametersUsedDto {
    pub mu_location: f64,
    pub beta_scale: f64,
}

impl From<GumbelParameters> for GumbelParametersUsedDto {
    fn from(p: GumbelParameters) -> Self {
        Self {
            mu_location: p.mu_location,
            beta_scale: p.beta_scale,
        }
    }
}

/// Response DTO for the Gumbel assessment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GumbelPredictionDto {
    pub risk_level: f64,
    pub status: PredictionStatusDto,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduced_variate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_period_years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implied_return_period: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters_used: Option<GumbelParametersUsedDto>,
}

impl From<Prediction<GumbelAssessment>> for GumbelPredictionDto {
    fn from(prediction: Prediction<GumbelAssessment>) -> Self {
        match prediction {
            Prediction::Assessed(a) => Self {
                risk_level: round3(a.risk_level),
                status: a.status.into(),
                message: a.message,
                probability: Some(a.probability),
                reduced_variate: Some(round3(a.reduced_variate)),
                return_period_years: Some(a.return_period_years),
                implied_return_period: a.implied_return_period.map(round3),
                parameters_used: Some(a.parameters_used.into()),
            },
            Prediction::Degraded { reason } => Self {
                risk_level: 0.0,
                status: PredictionStatusDto::Error,
                message: format!("Error dalam analisis Gumbel: {}", reason),
                probability: None,
                reduced_variate: None,
                return_period_years: None,
                implied_return_period: None,
                parameters_used: None,
            },
        }
    }
}

/// Technical parameter sheet for the heuristic model
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HeuristicParametersDto {
    pub weights: Vec<f64>,
    pub normalization_factors: Vec<f64>,
    pub activation: String,
    pub sigmoid_gain: f64,
    pub risk_floor: f64,
    pub medium_threshold: f64,
    pub high_threshold: f64,
}

impl HeuristicParametersDto {
    pub fn current() -> Self {
        Self {
            weights: heuristic_model::WEIGHTS.to_vec(),
            normalization_factors: heuristic_model::NORMALIZATION_FACTORS.to_vec(),
            activation: "sigmoid".to_string(),
            sigmoid_gain: heuristic_model::SIGMOID_GAIN,
            risk_floor: heuristic_model::RISK_FLOOR,
            medium_threshold: MEDIUM_RISK_THRESHOLD,
            high_threshold: HIGH_RISK_THRESHOLD,
        }
    }
}

/// Technical parameter sheet for the Gumbel model
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GumbelParametersDto {
    pub mu_location: f64,
    pub beta_scale: f64,
    pub cdf: String,
    pub return_period: String,
    pub medium_threshold: f64,
    pub high_threshold: f64,
}

impl GumbelParametersDto {
    pub fn current() -> Self {
        Self {
            mu_location: gumbel_model::MU_LOCATION,
            beta_scale: gumbel_model::BETA_SCALE,
            cdf: "F(x) = exp(-exp(-(x - mu) / beta))".to_string(),
            return_period: "T = 1 / (1 - F(x))".to_string(),
            medium_threshold: MEDIUM_RISK_THRESHOLD,
            high_threshold: HIGH_RISK_THRESHOLD,
        }
    }
}
