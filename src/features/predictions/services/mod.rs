pub mod gumbel_model;
pub mod heuristic_model;

pub use gumbel_model::GumbelRiskModel;
pub use heuristic_model::HeuristicRiskModel;
