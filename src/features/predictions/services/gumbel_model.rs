use crate::features::predictions::models::{Prediction, RiskStatus};

/// Gumbel location parameter, calibrated from historical annual peak rainfall
pub const MU_LOCATION: f64 = 85.0;

/// Gumbel scale parameter, calibrated from historical annual peak rainfall
pub const BETA_SCALE: f64 = 22.5;

/// Parameters echoed back with every assessment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GumbelParameters {
    pub mu_location: f64,
    pub beta_scale: f64,
}

/// Result of a Gumbel extreme-value assessment
#[derive(Debug, Clone, PartialEq)]
pub struct GumbelAssessment {
    /// The cumulative probability F, directly
    pub risk_level: f64,
    pub status: RiskStatus,
    pub message: String,
    pub probability: f64,
    pub reduced_variate: f64,
    pub return_period_years: u32,
    /// Classical return-period relationship 1/(1-F); None as F approaches 1
    pub implied_return_period: Option<f64>,
    pub parameters_used: GumbelParameters,
}

/// Gumbel (Type-I extreme value) flood-risk estimator.
///
/// Models annual peak rainfall with fixed, externally calibrated parameters.
/// The reduced variate z = (x - mu) / beta feeds the CDF F = exp(-exp(-z));
/// F is returned as the risk level and 1/(1-F) is exposed alongside it for
/// interpretability.
pub struct GumbelRiskModel;

impl GumbelRiskModel {
    pub fn assess(rainfall_mm: f64, return_period_years: u32) -> Prediction<GumbelAssessment> {
        if !rainfall_mm.is_finite() {
            return Prediction::Degraded {
                reason: "curah hujan bukan angka yang valid".to_string(),
            };
        }

        let reduced_variate = (rainfall_mm - MU_LOCATION) / BETA_SCALE;
        let probability = (-(-reduced_variate).exp()).exp();

        let exceedance = 1.0 - probability;
        let implied_return_period = if exceedance > f64::EPSILON {
            Some(1.0 / exceedance)
        } else {
            None
        };

        let status = RiskStatus::from_score(probability);
        let message = format!("Analisis Gumbel: {}", status.advisory());

        Prediction::Assessed(GumbelAssessment {
            risk_level: probability,
            status,
            message,
            probability,
            reduced_variate,
            return_period_years,
            implied_return_period,
            parameters_used: GumbelParameters {
                mu_location: MU_LOCATION,
                beta_scale: BETA_SCALE,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessed(prediction: Prediction<GumbelAssessment>) -> GumbelAssessment {
        match prediction {
            Prediction::Assessed(a) => a,
            Prediction::Degraded { reason } => panic!("unexpected degraded result: {}", reason),
        }
    }

    #[test]
    fn test_probability_at_location_parameter() {
        // At x = mu the reduced variate is zero, so F = exp(-exp(0)) = e^-1
        let a = assessed(GumbelRiskModel::assess(85.0, 10));
        let expected = (-1.0f64).exp();

        assert_eq!(a.reduced_variate, 0.0);
        assert!((a.risk_level - expected).abs() < 1e-12);
        assert!((a.risk_level - 0.3679).abs() < 5e-5);
        assert_eq!(a.status, RiskStatus::Low);
    }

    #[test]
    fn test_probability_monotonic_in_rainfall() {
        let low = assessed(GumbelRiskModel::assess(50.0, 10));
        let mid = assessed(GumbelRiskModel::assess(100.0, 10));
        let high = assessed(GumbelRiskModel::assess(200.0, 10));

        assert!(low.risk_level < mid.risk_level);
        assert!(mid.risk_level < high.risk_level);
    }

    #[test]
    fn test_implied_return_period_matches_formula() {
        let a = assessed(GumbelRiskModel::assess(120.0, 25));
        let t = a.implied_return_period.expect("finite return period");

        assert!((t - 1.0 / (1.0 - a.probability)).abs() < 1e-12);
        assert!(t > 1.0);
    }

    #[test]
    fn test_extreme_rainfall_is_high() {
        let a = assessed(GumbelRiskModel::assess(250.0, 50));
        assert_eq!(a.status, RiskStatus::High);
        assert!(a.risk_level > 0.9 && a.risk_level <= 1.0);
    }

    #[test]
    fn test_parameters_echoed() {
        let a = assessed(GumbelRiskModel::assess(100.0, 5));
        assert_eq!(a.parameters_used.mu_location, 85.0);
        assert_eq!(a.parameters_used.beta_scale, 22.5);
        assert_eq!(a.return_period_years, 5);
    }

    #[test]
    fn test_non_finite_rainfall_degrades() {
        assert!(matches!(
            GumbelRiskModel::assess(f64::NAN, 10),
            Prediction::Degraded { .. }
        ));
        assert!(matches!(
            GumbelRiskModel::assess(f64::NEG_INFINITY, 10),
            Prediction::Degraded { .. }
        ));
    }
}
