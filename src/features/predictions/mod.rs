//! Flood-risk prediction feature.
//!
//! Two independent stateless estimators: a hand-weighted sigmoid model over
//! four environmental readings and a Gumbel (Type-I extreme value) model over
//! annual peak rainfall. Both absorb bad numeric input into an ERROR-status
//! assessment instead of failing the request.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/predictions/heuristic` | No | Weighted-sigmoid assessment |
//! | GET | `/api/predictions/heuristic/parameters` | No | Model parameter sheet |
//! | POST | `/api/predictions/gumbel` | No | Gumbel extreme-value assessment |
//! | GET | `/api/predictions/gumbel/parameters` | No | Model parameter sheet |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{GumbelRiskModel, HeuristicRiskModel};
