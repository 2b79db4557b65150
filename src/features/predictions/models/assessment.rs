use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Score at or above which an assessment is reported as MEDIUM
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.5;

/// Score at or above which an assessment is reported as HIGH
pub const HIGH_RISK_THRESHOLD: f64 = 0.8;

/// Risk band shared by both estimators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskStatus {
    Low,
    Medium,
    High,
}

impl RiskStatus {
    /// Classify a risk score into a band. Both models share the same cutoffs.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskStatus::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskStatus::Medium
        } else {
            RiskStatus::Low
        }
    }

    /// Fixed advisory message for the band
    pub fn advisory(&self) -> &'static str {
        match self {
            RiskStatus::High => "Waspada! Kondisi kritis - potensi banjir tinggi",
            RiskStatus::Medium => "Siaga! Pantau terus perkembangan",
            RiskStatus::Low => "Aman, tetap waspada",
        }
    }
}

impl std::fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskStatus::Low => write!(f, "LOW"),
            RiskStatus::Medium => write!(f, "MEDIUM"),
            RiskStatus::High => write!(f, "HIGH"),
        }
    }
}

/// Outcome of a risk model evaluation.
///
/// The models never fail hard: malformed numeric input yields a `Degraded`
/// value that the HTTP layer renders as an ERROR-status assessment with zero
/// risk, so a broken prediction never takes down report rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction<T> {
    Assessed(T),
    Degraded { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bands() {
        assert_eq!(RiskStatus::from_score(0.0), RiskStatus::Low);
        assert_eq!(RiskStatus::from_score(0.49), RiskStatus::Low);
        assert_eq!(RiskStatus::from_score(0.5), RiskStatus::Medium);
        assert_eq!(RiskStatus::from_score(0.79), RiskStatus::Medium);
        assert_eq!(RiskStatus::from_score(0.8), RiskStatus::High);
        assert_eq!(RiskStatus::from_score(1.0), RiskStatus::High);
    }
}
