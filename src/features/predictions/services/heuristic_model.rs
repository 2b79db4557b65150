use crate::features::predictions::models::{Prediction, RiskStatus};

/// Feature weights, rainfall dominant
pub const WEIGHTS: [f64; 4] = [0.50, 0.25, 0.15, 0.10];

/// Fixed domain constants: rainfall mm, water level mdpl, humidity %, temperature C
pub const NORMALIZATION_FACTORS: [f64; 4] = [300.0, 150.0, 100.0, 35.0];

/// Sigmoid steepness applied to the weighted sum
pub const SIGMOID_GAIN: f64 = 6.0;

/// No input combination ever reports below this risk
pub const RISK_FLOOR: f64 = 0.1;

/// Raw readings fed into the heuristic model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicInputs {
    pub rainfall_mm: f64,
    pub water_level: f64,
    pub humidity_pct: f64,
    pub temperature_c: f64,
}

/// Temperature range echoed back when assessing with (min, max) bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

/// Result of a heuristic weighted-sigmoid assessment
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicAssessment {
    pub risk_level: f64,
    pub status: RiskStatus,
    pub message: String,
    pub normalized_features: [f64; 4],
    pub inputs: HeuristicInputs,
    pub temperature_range: Option<TemperatureRange>,
}

/// Hand-weighted sigmoid flood-risk estimator.
///
/// Normalizes four environmental readings by fixed domain constants, takes a
/// weighted sum, pushes it through a logistic transform, then applies
/// escalation multipliers for heavy rainfall and high water, each capped at
/// 1.0. Inputs are not range-checked: out-of-range readings simply push the
/// normalized feature outside [0, 1].
pub struct HeuristicRiskModel;

impl HeuristicRiskModel {
    pub fn assess(
        rainfall_mm: f64,
        water_level: f64,
        humidity_pct: f64,
        temperature_c: f64,
    ) -> Prediction<HeuristicAssessment> {
        let inputs = HeuristicInputs {
            rainfall_mm,
            water_level,
            humidity_pct,
            temperature_c,
        };

        if !rainfall_mm.is_finite()
            || !water_level.is_finite()
            || !humidity_pct.is_finite()
            || !temperature_c.is_finite()
        {
            return Prediction::Degraded {
                reason: "masukan bukan angka yang valid".to_string(),
            };
        }

        let features = [rainfall_mm, water_level, humidity_pct, temperature_c];
        let mut normalized_features = [0.0; 4];
        for (i, value) in features.iter().enumerate() {
            normalized_features[i] = value / NORMALIZATION_FACTORS[i];
        }

        let weighted_sum: f64 = normalized_features
            .iter()
            .zip(WEIGHTS.iter())
            .map(|(f, w)| f * w)
            .sum();

        let mut risk_level = 1.0 / (1.0 + (-SIGMOID_GAIN * weighted_sum).exp());

        // Escalation multipliers, each capped at 1.0
        if rainfall_mm > 200.0 {
            risk_level = (risk_level * 1.4).min(1.0);
        } else if rainfall_mm > 100.0 {
            risk_level = (risk_level * 1.2).min(1.0);
        }

        if water_level > 130.0 {
            risk_level = (risk_level * 1.3).min(1.0);
        } else if water_level > 110.0 {
            risk_level = (risk_level * 1.1).min(1.0);
        }

        risk_level = risk_level.max(RISK_FLOOR);

        let status = RiskStatus::from_score(risk_level);
        let message = format!("Prediksi ANN: {}", status.advisory());

        Prediction::Assessed(HeuristicAssessment {
            risk_level,
            status,
            message,
            normalized_features,
            inputs,
            temperature_range: None,
        })
    }

    /// Assess using a (min, max) temperature range; the arithmetic mean is fed
    /// to the model and the range is echoed back in the result.
    pub fn assess_with_temp_range(
        rainfall_mm: f64,
        water_level: f64,
        humidity_pct: f64,
        temp_min: f64,
        temp_max: f64,
    ) -> Prediction<HeuristicAssessment> {
        let average = (temp_min + temp_max) / 2.0;

        match Self::assess(rainfall_mm, water_level, humidity_pct, average) {
            Prediction::Assessed(mut assessment) => {
                assessment.temperature_range = Some(TemperatureRange {
                    min: temp_min,
                    max: temp_max,
                    average: (average * 10.0).round() / 10.0,
                });
                Prediction::Assessed(assessment)
            }
            degraded => degraded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessed(prediction: Prediction<HeuristicAssessment>) -> HeuristicAssessment {
        match prediction {
            Prediction::Assessed(a) => a,
            Prediction::Degraded { reason } => panic!("unexpected degraded result: {}", reason),
        }
    }

    #[test]
    fn test_risk_level_bounded() {
        let cases = [
            (0.0, 0.0, 0.0, 0.0),
            (10.0, 70.0, 40.0, 25.0),
            (150.0, 120.0, 85.0, 28.0),
            (250.0, 140.0, 90.0, 30.0),
            (300.0, 150.0, 100.0, 35.0),
            (1000.0, 500.0, 200.0, 80.0),
        ];

        for (rainfall, water, humidity, temp) in cases {
            let a = assessed(HeuristicRiskModel::assess(rainfall, water, humidity, temp));
            assert!(
                (RISK_FLOOR..=1.0).contains(&a.risk_level),
                "risk {} out of bounds for inputs ({}, {}, {}, {})",
                a.risk_level,
                rainfall,
                water,
                humidity,
                temp
            );
        }
    }

    #[test]
    fn test_critical_conditions_are_high() {
        // Heavy rain and very high water trigger both escalation multipliers
        let a = assessed(HeuristicRiskModel::assess(250.0, 140.0, 90.0, 30.0));
        assert_eq!(a.status, RiskStatus::High);
        assert!(a.risk_level >= 0.8);
    }

    #[test]
    fn test_escalation_capped_at_one() {
        let a = assessed(HeuristicRiskModel::assess(300.0, 150.0, 100.0, 35.0));
        assert!(a.risk_level <= 1.0);
    }

    #[test]
    fn test_floor_clamps_low_scores() {
        // The sigmoid of a nonnegative weighted sum never drops below 0.5, so
        // the floor only engages for readings below the domain minimums.
        let a = assessed(HeuristicRiskModel::assess(-300.0, -150.0, 0.0, 0.0));
        assert_eq!(a.risk_level, RISK_FLOOR);
        assert_eq!(a.status, RiskStatus::Low);
    }

    #[test]
    fn test_normalized_features() {
        let a = assessed(HeuristicRiskModel::assess(150.0, 75.0, 50.0, 35.0));
        assert_eq!(a.normalized_features[0], 0.5);
        assert_eq!(a.normalized_features[1], 0.5);
        assert_eq!(a.normalized_features[2], 0.5);
        assert_eq!(a.normalized_features[3], 1.0);
    }

    #[test]
    fn test_temp_range_uses_average() {
        let ranged = assessed(HeuristicRiskModel::assess_with_temp_range(
            100.0, 80.0, 60.0, 24.0, 32.0,
        ));
        let direct = assessed(HeuristicRiskModel::assess(100.0, 80.0, 60.0, 28.0));

        assert_eq!(ranged.risk_level, direct.risk_level);
        let range = ranged.temperature_range.expect("range must be echoed");
        assert_eq!(range.min, 24.0);
        assert_eq!(range.max, 32.0);
        assert_eq!(range.average, 28.0);
    }

    #[test]
    fn test_non_finite_input_degrades() {
        let prediction = HeuristicRiskModel::assess(f64::NAN, 80.0, 60.0, 28.0);
        assert!(matches!(prediction, Prediction::Degraded { .. }));

        let prediction = HeuristicRiskModel::assess(100.0, f64::INFINITY, 60.0, 28.0);
        assert!(matches!(prediction, Prediction::Degraded { .. }));
    }
}
