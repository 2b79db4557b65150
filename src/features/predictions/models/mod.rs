mod assessment;

pub use assessment::{Prediction, RiskStatus, HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD};
